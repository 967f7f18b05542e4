//! Identifiers that link scene objects together.
//!
//! A source names its waveform and a dispersion names its materials by
//! string identifier. The link is resolved later by the geometry builder,
//! never by the directive parser, so these are plain typed strings.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Creates a new identifier.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

define_id!(
    /// Names a waveform definition that sources drive with.
    WaveformId
);

define_id!(
    /// Names a material, either plain or dispersive.
    MaterialId
);

define_id!(
    /// Names a receiver.
    RxId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_compares_with_str() {
        let id = WaveformId::from("my_ricker");
        assert_eq!(id, "my_ricker");
        assert_eq!(id.to_string(), "my_ricker");
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = MaterialId::new("half_space");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"half_space\"");
    }
}
