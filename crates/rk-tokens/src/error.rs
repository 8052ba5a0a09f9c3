use thiserror::Error;

use crate::mapping::{Role, Theme};

/// Why a palette, mapping or token bundle was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// A mapped role points at a color with no primitives to reference.
    #[error("{theme} theme: {role} references {id:?}, which has no ramp")]
    MissingReference { theme: Theme, role: Role, id: String },

    /// A mapped role points at an id the palette does not contain.
    #[error("{theme} theme: {role} references {id:?}, which is not in the palette")]
    UnknownId { theme: Theme, role: Role, id: String },

    /// A palette id is not a lowercase slug.
    #[error("invalid palette id {id:?}: expected lowercase letters, digits and inner dashes")]
    InvalidId { id: String },

    /// Two palette entries share an id.
    #[error("duplicate palette id {id:?}")]
    DuplicateId { id: String },
}
