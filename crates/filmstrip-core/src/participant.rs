#![forbid(unsafe_code)]

//! Participant identity and role.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque participant identifier supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ParticipantId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ParticipantId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ParticipantId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Role tag carried by a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantRole {
    Moderator,
    #[default]
    Normal,
}

/// One entry of the host's participant list.
///
/// The layout engine only reads participants; ordering and ownership stay
/// with the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    #[serde(default)]
    pub role: ParticipantRole,
}

impl Participant {
    pub fn new(id: impl Into<ParticipantId>, role: ParticipantRole) -> Self {
        Self {
            id: id.into(),
            role,
        }
    }

    pub fn normal(id: impl Into<ParticipantId>) -> Self {
        Self::new(id, ParticipantRole::Normal)
    }

    pub fn moderator(id: impl Into<ParticipantId>) -> Self {
        Self::new(id, ParticipantRole::Moderator)
    }

    #[must_use]
    pub const fn is_moderator(&self) -> bool {
        matches!(self.role, ParticipantRole::Moderator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_defaults_to_normal_when_absent() {
        let participant: Participant =
            serde_json::from_str(r#"{"id":"alice"}"#).expect("valid participant json");
        assert_eq!(participant, Participant::normal("alice"));
        assert!(!participant.is_moderator());
    }

    #[test]
    fn moderator_role_round_trips_as_snake_case() {
        let json = serde_json::to_string(&Participant::moderator("host")).expect("serialize");
        assert_eq!(json, r#"{"id":"host","role":"moderator"}"#);
    }

    #[test]
    fn id_displays_raw_string() {
        let id = ParticipantId::new("abc123");
        assert_eq!(id.to_string(), "abc123");
        assert_eq!(id.as_str(), "abc123");
    }
}
