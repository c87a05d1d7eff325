pub mod models;
pub mod pii;
pub mod serde_ext;

pub use models::{
    Eligibility, FlightRecord, PassengerProfile, PassengerRegistration, RegisteredFlight,
    RegisteredPassenger, RegistrationLocation,
};
pub use pii::Masked;
