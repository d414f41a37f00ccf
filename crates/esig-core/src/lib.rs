//! esig-core
//!
//! Core conversion primitives for the esig SDK:
//! - domain signature model with fluent builders
//! - wire approval/package/field model (serde, camelCase)
//! - bidirectional signature <-> approval conversion
//! - strict JSON helpers for wire payloads
//!
//! The crate is pure: no network, filesystem, or environment access. Every
//! conversion is a synchronous function over caller-supplied values, so
//! independent conversions can run concurrently without coordination.

pub mod convert;
pub mod errors;
pub mod model;
pub mod parse;

pub use crate::errors::{EsigError, EsigResult};

/// Convenience re-exports.
pub mod prelude {
    pub use crate::convert::{classify_role, signature_field, to_api_approval, to_domain_signature};
    pub use crate::model::api::{
        Approval, Field as ApiField, FieldSubtype, FieldType, Package, Role, Signer,
    };
    pub use crate::model::domain::{
        Field, FieldStyle, GroupId, Signature, SignatureBuilder, SignatureId, SignatureStyle,
        SignerAssignment, TextAnchor, TextAnchorPosition,
    };
    pub use crate::{EsigError, EsigResult};
}
