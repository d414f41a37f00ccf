//! Non-signature field conversion.
//!
//! Maps generic placed fields (labels, text boxes, checkboxes, ...) between
//! the two models. Geometry and attributes copy straight across; the only
//! decision is the style <-> subtype table. The signature converter calls
//! this for every field it does not claim as the signature's own.

use crate::errors::{EsigError, EsigResult};
use crate::model::api::{self, FieldSubtype, FieldType};
use crate::model::domain::{Field, FieldStyle};

/// Convert a wire field into a domain field.
///
/// Fails when the subtype has no generic field style (a signature subtype
/// in a non-signature slot is a payload defect).
pub fn to_domain_field(field: &api::Field) -> EsigResult<Field> {
    Ok(Field {
        id: field.id.clone(),
        name: field.name.clone(),
        style: field_style_from_subtype(field.subtype)?,
        page: field.page,
        x: field.left,
        y: field.top,
        width: field.width,
        height: field.height,
        value: field.value.clone(),
        extract: field.extract,
    })
}

/// Convert a domain field into a wire field of type INPUT.
pub fn to_api_field(field: &Field) -> api::Field {
    api::Field {
        id: field.id.clone(),
        name: field.name.clone(),
        field_type: FieldType::Input,
        subtype: subtype_from_field_style(field.style),
        page: field.page,
        left: field.x,
        top: field.y,
        width: field.width,
        height: field.height,
        value: field.value.clone(),
        extract: field.extract,
        extract_anchor: None,
    }
}

/// Map a wire subtype to a generic field style.
pub fn field_style_from_subtype(subtype: FieldSubtype) -> EsigResult<FieldStyle> {
    match subtype {
        FieldSubtype::Label => Ok(FieldStyle::Label),
        FieldSubtype::Textfield => Ok(FieldStyle::TextField),
        FieldSubtype::Textarea => Ok(FieldStyle::TextArea),
        FieldSubtype::Checkbox => Ok(FieldStyle::Checkbox),
        FieldSubtype::Datepicker => Ok(FieldStyle::Datepicker),
        FieldSubtype::List => Ok(FieldStyle::List),
        FieldSubtype::Radio => Ok(FieldStyle::RadioButton),
        other => Err(EsigError::unsupported_subtype(other.as_str())),
    }
}

/// Map a generic field style to its wire subtype. Total over the enum.
pub fn subtype_from_field_style(style: FieldStyle) -> FieldSubtype {
    match style {
        FieldStyle::Label => FieldSubtype::Label,
        FieldStyle::TextField => FieldSubtype::Textfield,
        FieldStyle::TextArea => FieldSubtype::Textarea,
        FieldStyle::Checkbox => FieldSubtype::Checkbox,
        FieldStyle::Datepicker => FieldSubtype::Datepicker,
        FieldStyle::List => FieldSubtype::List,
        FieldStyle::RadioButton => FieldSubtype::Radio,
    }
}
