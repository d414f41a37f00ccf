//! Converters between the domain and wire models.
//!
//! The interesting logic lives in `signature`: role classification, the
//! one-pass partition of an approval's field list, and the defaulting rules
//! for approvals that carry no signature-typed field. The sibling modules
//! (`field`, `style`, `text_anchor`) are plain attribute/enumeration maps
//! the signature converter delegates to.
//!
//! All conversions are pure, synchronous functions over caller-supplied
//! values. Errors are terminal for the call; nothing is retried and no
//! partial value escapes.

pub mod field;
pub mod signature;
pub mod style;
pub mod text_anchor;

pub use signature::{classify_role, signature_field, to_api_approval, to_domain_signature};
