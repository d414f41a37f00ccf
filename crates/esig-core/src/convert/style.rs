//! Signature style <-> wire subtype mapping.
//!
//! The forward direction (wire subtype -> domain style) is partial: only
//! the three signature subtypes map, anything else is a defect in the
//! payload. The reverse direction is total over the closed `SignatureStyle`
//! enum; adding a style without extending the match is a compile error, so
//! the "new style added without updating the mapper" failure mode surfaces
//! at build time rather than at run time.
//!
//! ACCEPTANCE is deliberately lossy: it encodes as FULLNAME on the wire
//! (an acceptance signature has no rendering of its own), so a round trip
//! comes back as FULL_NAME.

use crate::errors::{EsigError, EsigResult};
use crate::model::api::FieldSubtype;
use crate::model::domain::SignatureStyle;

/// Map a wire field subtype to a domain signature style.
pub fn style_from_subtype(subtype: FieldSubtype) -> EsigResult<SignatureStyle> {
    match subtype {
        FieldSubtype::Fullname => Ok(SignatureStyle::FullName),
        FieldSubtype::Capture => Ok(SignatureStyle::HandDrawn),
        FieldSubtype::Initials => Ok(SignatureStyle::Initials),
        other => Err(EsigError::unsupported_subtype(other.as_str())),
    }
}

/// Map a domain signature style to its wire field subtype.
pub fn subtype_from_style(style: SignatureStyle) -> FieldSubtype {
    match style {
        SignatureStyle::FullName => FieldSubtype::Fullname,
        SignatureStyle::HandDrawn => FieldSubtype::Capture,
        SignatureStyle::Initials => FieldSubtype::Initials,
        SignatureStyle::Acceptance => FieldSubtype::Fullname,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn forward_maps_signature_subtypes() {
        assert_eq!(
            style_from_subtype(FieldSubtype::Fullname).unwrap(),
            SignatureStyle::FullName
        );
        assert_eq!(
            style_from_subtype(FieldSubtype::Capture).unwrap(),
            SignatureStyle::HandDrawn
        );
        assert_eq!(
            style_from_subtype(FieldSubtype::Initials).unwrap(),
            SignatureStyle::Initials
        );
    }

    #[test]
    fn forward_rejects_generic_subtypes() {
        let e = style_from_subtype(FieldSubtype::Checkbox).unwrap_err();
        assert_matches!(e, EsigError::UnsupportedSubtype { ref subtype } if subtype == "CHECKBOX");
    }

    #[test]
    fn reverse_table() {
        assert_eq!(
            subtype_from_style(SignatureStyle::FullName),
            FieldSubtype::Fullname
        );
        assert_eq!(
            subtype_from_style(SignatureStyle::HandDrawn),
            FieldSubtype::Capture
        );
        assert_eq!(
            subtype_from_style(SignatureStyle::Initials),
            FieldSubtype::Initials
        );
        assert_eq!(
            subtype_from_style(SignatureStyle::Acceptance),
            FieldSubtype::Fullname
        );
    }

    #[test]
    fn round_trip_preserves_non_acceptance_styles() {
        for style in [
            SignatureStyle::FullName,
            SignatureStyle::HandDrawn,
            SignatureStyle::Initials,
        ] {
            assert_eq!(style_from_subtype(subtype_from_style(style)).unwrap(), style);
        }
    }

    #[test]
    fn acceptance_round_trip_is_lossy() {
        // Documented behavior: ACCEPTANCE -> FULLNAME -> FULL_NAME.
        let back = style_from_subtype(subtype_from_style(SignatureStyle::Acceptance)).unwrap();
        assert_eq!(back, SignatureStyle::FullName);
    }
}
