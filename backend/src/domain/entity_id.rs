//! Numeric identifiers assigned by the upstream gallery API.

/// Generate a transparent, strongly typed wrapper around an upstream `u64`
/// identifier.
macro_rules! define_entity_id {
    (
        $(#[$outer:meta])*
        $name:ident, $label:literal
    ) => {
        $(#[$outer])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
            utoipa::ToSchema,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw identifier.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Return the raw identifier.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::domain::entity_id::EntityIdParseError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                raw.trim()
                    .parse::<u64>()
                    .map(Self)
                    .map_err(|_| $crate::domain::entity_id::EntityIdParseError {
                        entity: $label,
                        raw: raw.to_owned(),
                    })
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }
    };
}

pub(crate) use define_entity_id;

/// Raised when a path segment or query value is not a valid identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} id must be a non-negative integer, got {raw:?}")]
pub struct EntityIdParseError {
    /// Human readable entity name.
    pub entity: &'static str,
    /// Offending input.
    pub raw: String,
}
