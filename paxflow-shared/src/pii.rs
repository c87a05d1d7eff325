use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Wrapper for passenger PII (names, salutations) that never prints its value
/// through `Debug` or `Display`.
///
/// Serialization passes the real value through, because the detail endpoint has
/// to return the passenger's name. Log lines built with `{:?}` only ever see the mask.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Masked<T>(pub T);

const MASK: &str = "********";

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASK)
    }
}

impl<T> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASK)
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl From<&str> for Masked<String> {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_and_display_are_masked() {
        let name = Masked::from("Tan Ah Kow");
        assert_eq!(format!("{:?}", name), MASK);
        assert_eq!(format!("{}", name), MASK);
        assert_eq!(name.0, "Tan Ah Kow");
    }

    #[test]
    fn test_serialization_keeps_real_value() {
        let name = Masked::from("Lim");
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Lim\"");

        let back: Masked<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.0, "Lim");
    }
}
