//! Typed codes for type-safe entity references.
//!
//! Every entity is identified by an integer code assigned by storage on
//! creation. Wrapping the integer prevents passing a `PersonCode` where an
//! `AccountCode` is expected.

use serde::{Deserialize, Serialize};

/// Macro to generate typed code wrappers.
macro_rules! typed_code {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i32);

        impl $name {
            /// Creates a code from its raw storage value.
            #[must_use]
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            /// Returns the raw storage value.
            #[must_use]
            pub const fn into_inner(self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i32 {
            fn from(code: $name) -> Self {
                code.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }
    };
}

typed_code!(PersonCode, "Unique code of a person.");
typed_code!(AccountCode, "Unique code of an account.");
typed_code!(TransactionCode, "Unique code of a transaction.");

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
