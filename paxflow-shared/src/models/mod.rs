pub mod flight;
pub mod passenger;
pub mod registration;

pub use flight::FlightRecord;
pub use passenger::PassengerProfile;
pub use registration::{
    Eligibility, PassengerRegistration, RegisteredFlight, RegisteredPassenger,
    RegistrationLocation,
};
