use thiserror::Error;

use crate::catalog::types::{Address, InternalId, LocationKind};

/// Errors raised while building or querying the location catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The same name appears twice, within one kind or across two kinds.
    #[error("duplicate location name '{name}' ({first} and {second})")]
    DuplicateName {
        name: String,
        first: LocationKind,
        second: LocationKind,
    },

    /// Two entries of one kind share an internal id.
    #[error("duplicate {kind} id {id:#04x}: '{first}' and '{second}'")]
    DuplicateId {
        kind: LocationKind,
        id: InternalId,
        first: String,
        second: String,
    },

    /// Two entries resolve to the same global address.
    #[error("address {address} claimed by both '{first}' and '{second}'")]
    DuplicateAddress {
        address: Address,
        first: String,
        second: String,
    },

    /// An internal id spills over into the next kind's address sub-range.
    #[error("{kind} '{name}' has id {id:#04x}, outside the {capacity} ids reserved for its kind")]
    IdOutOfRange {
        kind: LocationKind,
        name: String,
        id: InternalId,
        capacity: Address,
    },

    /// A special-case set names a location that is not in the mapping it tags.
    #[error("{set} name '{name}' is not a {kind} location")]
    UnknownSpecialName {
        set: &'static str,
        name: String,
        kind: LocationKind,
    },

    /// Returned when looking up a name that is not in the catalog.
    #[error("location not found: {0}")]
    NotFound(String),

    /// Returned when reverse-looking-up an address no location owns.
    #[error("no location at address {0}")]
    AddressNotFound(Address),
}

impl CatalogError {
    /// Integrity errors come from construction; the rest from lookups.
    pub fn is_integrity_error(&self) -> bool {
        !matches!(
            self,
            CatalogError::NotFound(_) | CatalogError::AddressNotFound(_)
        )
    }
}
