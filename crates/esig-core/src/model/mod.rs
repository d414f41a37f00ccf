//! esig data models.
//!
//! Two sides of the same workflow:
//! - `api`: the wire representation the remote signing service speaks
//!   (approvals, roles, fields). Serde-serializable, camelCase on the wire.
//! - `domain`: the client-facing SDK representation (signatures, signer
//!   assignments, styles) with fluent builders.
//!
//! Design goals:
//! - **Dumb data:** models carry no policy. Classification, defaulting, and
//!   partitioning live in `crate::convert`.
//! - **Transient values:** everything here is constructed fresh per
//!   conversion call and never mutated afterwards. No shared state.
//! - **Sum types over nullables:** a signature's signer assignment is a
//!   three-way enum, never a set of optional fields that must be probed.

pub mod api;
pub mod domain;

pub use api::{
    AnchorPoint, Approval, Document, ExtractAnchor, Field as ApiField, FieldSubtype, FieldType,
    Group, Package, Role, Signer,
};
pub use domain::{
    Field, FieldBuilder, FieldStyle, GroupId, Signature, SignatureBuilder, SignatureId,
    SignatureStyle, SignerAssignment, TextAnchor, TextAnchorPosition,
};
