//! Absence reason codes.
//!
//! The API records one short code per absent day. Only `holiday` and `sick`
//! are known; every other code is shown as sick leave.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Reason {
    Holiday,
    Sick,
    /// Unrecognised code, kept verbatim so it can be sent back unchanged.
    Other(String),
}

impl Reason {
    /// Interpret a reason code. Matching ignores case and surrounding whitespace.
    pub fn from_code(code: &str) -> Self {
        let normalized = code.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "holiday" => Reason::Holiday,
            "sick" => Reason::Sick,
            _ => Reason::Other(code.trim().to_string()),
        }
    }

    /// The code sent to and received from the API.
    pub fn code(&self) -> &str {
        match self {
            Reason::Holiday => "holiday",
            Reason::Sick => "sick",
            Reason::Other(code) => code,
        }
    }

    /// Bare phrase completing "is on ...", e.g. `"holiday"`.
    pub fn phrase(&self) -> &'static str {
        match self {
            Reason::Holiday => "holiday",
            Reason::Sick | Reason::Other(_) => "sick leave",
        }
    }

    /// Full verb-phrase for prose messages, e.g. `"on holiday"`.
    pub fn verb_phrase(&self) -> String {
        format!("on {}", self.phrase())
    }
}

impl From<&str> for Reason {
    fn from(code: &str) -> Self {
        Reason::from_code(code)
    }
}

impl From<String> for Reason {
    fn from(code: String) -> Self {
        Reason::from_code(&code)
    }
}

impl From<Reason> for String {
    fn from(reason: Reason) -> Self {
        reason.code().to_string()
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_ignore_case() {
        assert_eq!(Reason::from_code("holiday"), Reason::Holiday);
        assert_eq!(Reason::from_code(" Sick "), Reason::Sick);
        assert_eq!(Reason::from_code("HOLIDAY"), Reason::Holiday);
    }

    #[test]
    fn unknown_codes_fall_back_to_sick_leave() {
        let reason = Reason::from_code("dentist");
        assert_eq!(reason, Reason::Other("dentist".to_string()));
        assert_eq!(reason.code(), "dentist");
        assert_eq!(reason.phrase(), "sick leave");
    }

    #[test]
    fn verb_phrase_adds_on() {
        assert_eq!(Reason::Holiday.verb_phrase(), "on holiday");
        assert_eq!(Reason::Sick.verb_phrase(), "on sick leave");
    }

    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_string(&Reason::Holiday).unwrap(), "\"holiday\"");
        let parsed: Reason = serde_json::from_str("\"Sick\"").unwrap();
        assert_eq!(parsed, Reason::Sick);
        let other: Reason = serde_json::from_str("\"family\"").unwrap();
        assert_eq!(other, Reason::Other("family".to_string()));
    }
}
