//! Signature <-> approval conversion. The core of the crate.
//!
//! Inbound (`to_domain_signature`): resolve the approval's role inside its
//! package, classify the role's signer assignment, then fold the approval's
//! field list into a signature builder. Exactly one field (the last one
//! typed SIGNATURE) supplies the signature's own style and geometry; every
//! other field is attached as a generic domain field in its original order.
//! An approval with no signature-typed field becomes an ACCEPTANCE
//! signature with zero size.
//!
//! Outbound (`to_api_approval`): emit the signature itself as the first
//! wire field, then the attached fields in order. No role or signer
//! information is emitted; assignment is established when a package is
//! created, not when a signature is re-serialized.

use crate::convert::{field, style, text_anchor};
use crate::errors::{EsigError, EsigResult};
use crate::model::api::{self, Approval, FieldType, Package, Role, Signer};
use crate::model::domain::{
    GroupId, Signature, SignatureBuilder, SignatureId, SignatureStyle, SignerAssignment,
};

/// Classify a role's signer assignment.
///
/// - no signers: placeholder, keyed by the role id
/// - exactly one signer with a group reference: group-owned
/// - anything else: individual, keyed by the first signer's email
///
/// Roles with more than one signer are not classified further; only the
/// first signer is inspected, matching the counterpart service.
pub fn classify_role(role: &Role) -> SignerAssignment {
    match role.signers.as_slice() {
        [] => SignerAssignment::Placeholder(role.id.clone()),
        [Signer {
            group: Some(group), ..
        }] => SignerAssignment::Group(GroupId::new(group.id.clone())),
        signers => SignerAssignment::Individual(signers[0].email.clone()),
    }
}

/// Convert a wire approval (and the package it belongs to) into a domain
/// signature.
///
/// Fails with `RoleNotFound` when the approval's role reference matches no
/// role in the package. The error is raised before any construction, so a
/// failed call produces nothing.
pub fn to_domain_signature(approval: &Approval, package: &Package) -> EsigResult<Signature> {
    let role = package
        .roles
        .iter()
        .find(|r| r.id == approval.role)
        .ok_or_else(|| EsigError::role_not_found(approval.role.clone()))?;

    let mut builder = SignatureBuilder::for_assignment(classify_role(role));

    if let Some(id) = &approval.id {
        builder = builder.with_id(SignatureId::new(id.clone()));
    }

    // One pass: claim the signature-typed field, attach the rest in order.
    // When several fields are typed SIGNATURE the last one wins; the
    // counterpart service relies on this, so it stays last-match.
    let mut signature_field: Option<&api::Field> = None;
    for api_field in &approval.fields {
        if api_field.field_type == FieldType::Signature {
            signature_field = Some(api_field);
        } else {
            builder = builder.with_field(field::to_domain_field(api_field)?);
        }
    }

    match signature_field {
        None => {
            // No visible placement: an acceptance-style signature.
            builder = builder
                .with_style(SignatureStyle::Acceptance)
                .with_size(0.0, 0.0);
        }
        Some(api_field) => {
            builder = builder
                .with_style(style::style_from_subtype(api_field.subtype)?)
                .with_name(api_field.name.clone())
                .on_page(api_field.page)
                .at_position(api_field.left, api_field.top)
                .with_size(api_field.width, api_field.height);
            if api_field.extract {
                builder = builder.enable_extraction();
            }
            if let Some(anchor) = &api_field.extract_anchor {
                builder = builder.with_text_anchor(text_anchor::to_text_anchor(anchor));
            }
        }
    }

    Ok(builder.build())
}

/// Convert a domain signature into a wire approval.
///
/// The approval's first field is the signature itself; attached fields
/// follow in order. The role reference is left empty.
pub fn to_api_approval(signature: &Signature) -> Approval {
    let mut approval = Approval {
        id: signature.id.as_ref().map(|id| id.as_str().to_string()),
        ..Approval::default()
    };

    approval.fields.push(signature_field(signature));
    for field in &signature.fields {
        approval.fields.push(field::to_api_field(field));
    }

    approval
}

/// Encode a signature's own geometry and style as a wire field of type
/// SIGNATURE.
///
/// When the signature uses extraction placement, coordinates and size are
/// omitted entirely (left at the wire zero defaults); anchors replace
/// explicit geometry. A text anchor, when present, is encoded regardless of
/// the extract flag.
pub fn signature_field(signature: &Signature) -> api::Field {
    let mut field = api::Field {
        name: signature.name.clone(),
        field_type: FieldType::Signature,
        subtype: style::subtype_from_style(signature.style),
        page: signature.page,
        extract: signature.extract,
        ..api::Field::default()
    };

    if !signature.extract {
        field.left = signature.x;
        field.top = signature.y;
        field.width = signature.width;
        field.height = signature.height;
    }

    if let Some(anchor) = &signature.text_anchor {
        field.extract_anchor = Some(text_anchor::to_extract_anchor(anchor));
    }

    field
}
