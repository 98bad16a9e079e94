//! UUID-backed identifier newtypes shared by the family aggregates.

use thiserror::Error;

/// Rejection reasons for identifier input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// The identifier was absent or blank.
    #[error("{kind} must not be empty")]
    Empty { kind: &'static str },
    /// The identifier was not a canonical UUID.
    #[error("{kind} must be a valid UUID")]
    Invalid { kind: &'static str },
}

impl IdentifierError {
    /// Which identifier failed to parse.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Empty { kind } | Self::Invalid { kind } => kind,
        }
    }
}

/// Declare a `Copy` UUID newtype that validates string input.
///
/// Empty input and input with surrounding whitespace are rejected so a
/// missing identifier never reaches a query.
macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident => $label:literal) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(::uuid::Uuid);

        impl $name {
            /// Parse and validate an identifier from text.
            pub fn new(
                id: impl AsRef<str>,
            ) -> Result<Self, $crate::domain::IdentifierError> {
                let raw = id.as_ref();
                if raw.trim().is_empty() {
                    return Err($crate::domain::IdentifierError::Empty { kind: $label });
                }
                if raw.trim() != raw {
                    return Err($crate::domain::IdentifierError::Invalid { kind: $label });
                }
                ::uuid::Uuid::parse_str(raw)
                    .map(Self)
                    .map_err(|_| $crate::domain::IdentifierError::Invalid { kind: $label })
            }

            /// Generate a fresh random identifier.
            #[must_use]
            pub fn random() -> Self {
                Self(::uuid::Uuid::new_v4())
            }

            /// Wrap an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: ::uuid::Uuid) -> Self {
                Self(uuid)
            }

            /// Access the underlying UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> &::uuid::Uuid {
                &self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0.to_string()
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::domain::IdentifierError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

pub(crate) use uuid_identifier;
