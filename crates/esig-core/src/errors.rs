//! Error types for esig-core.
//!
//! All fallible entry points return `EsigResult<T>`. The taxonomy is small
//! and deliberate:
//! - conversion defects detected by this crate (`RoleNotFound`,
//!   `UnsupportedStyle`, `UnsupportedSubtype`)
//! - generic invalid-argument / serialization errors used by the parse
//!   helpers
//!
//! Every error is terminal for the call that raised it: there is no retry
//! and no partial result. Callers should treat these as data-integrity
//! problems in the supplied inputs (a broken approval/role linkage, or an
//! enum out of sync with its mapping table), not transient conditions.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type EsigResult<T> = Result<T, EsigError>;

/// The crate-wide error type.
#[derive(Error, Debug)]
pub enum EsigError {
    /// An approval references a role id that is not present in its package.
    ///
    /// Raised before any signature construction is attempted, so a failed
    /// conversion never leaves a half-built value behind.
    #[error("approval references role {role_id}, which is not present in the package")]
    RoleNotFound { role_id: String },

    /// A signature style name has no wire subtype mapping.
    #[error("unknown signature style: {style}")]
    UnsupportedStyle { style: String },

    /// A wire field subtype has no domain style mapping.
    #[error("unknown field subtype: {subtype}")]
    UnsupportedSubtype { subtype: String },

    /// A caller-supplied argument is structurally invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl EsigError {
    pub fn role_not_found(role_id: impl Into<String>) -> Self {
        Self::RoleNotFound {
            role_id: role_id.into(),
        }
    }

    pub fn unsupported_style(style: impl Into<String>) -> Self {
        Self::UnsupportedStyle {
            style: style.into(),
        }
    }

    pub fn unsupported_subtype(subtype: impl Into<String>) -> Self {
        Self::UnsupportedSubtype {
            subtype: subtype.into(),
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}
