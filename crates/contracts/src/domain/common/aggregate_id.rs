use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for aggregate identifier types.
///
/// The tour platform hands out integer keys; the admin UI moves them through
/// `<select>` values and URL paths as strings.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Ord + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Raw integer key
    fn value(&self) -> i64;

    /// Build an ID from the raw integer key
    fn from_value(value: i64) -> Self;

    /// ID as a string (for `<select>` values and URL paths)
    fn as_string(&self) -> String {
        self.value().to_string()
    }

    /// Parse an ID from a string
    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(Self::from_value)
            .map_err(|e| format!("Invalid id '{}': {}", s, e))
    }
}

/// Declares an `i64`-backed identifier newtype and its `AggregateId` impl.
#[macro_export]
macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $crate::domain::common::AggregateId for $name {
            fn value(&self) -> i64 {
                self.0
            }

            fn from_value(value: i64) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
