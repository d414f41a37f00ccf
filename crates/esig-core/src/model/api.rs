//! Wire model for the remote signing service.
//!
//! These structs mirror the service's JSON schema: camelCase attribute
//! names, optional attributes omitted when absent, numeric geometry in
//! document points. All of them derive `Default` so partial payloads
//! decode cleanly and emitters can start from an empty value and fill in
//! only what a given direction produces.
//!
//! Nothing in this module validates cross-object linkage (e.g. whether an
//! approval's role id exists in its package) — that is the converter's job.

use serde::{Deserialize, Serialize};

/// A signing package: the unit the service operates on. Only `roles` is
/// read by the converters; the rest is carried for schema completeness.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Package {
    pub id: String,
    pub name: String,
    pub roles: Vec<Role>,
    pub documents: Vec<Document>,
}

/// A document inside a package. Opaque to this crate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    pub index: i32,
}

/// A named slot in the signing workflow that a signer, a group, or nobody
/// yet is assigned to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Role {
    pub id: String,
    pub name: String,
    pub signers: Vec<Signer>,
}

/// A person (or group member entry) attached to a role.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Signer {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Group>,
}

/// A signer group reference.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
}

/// The wire record of a signature requirement attached to a role.
///
/// The field list is ordered; by convention the first field of an emitted
/// approval is the signature's own geometry/style encoded as a field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Approval {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub role: String,
    pub fields: Vec<Field>,
}

/// A placed element on a document: signature, text box, checkbox, etc.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Field {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub subtype: FieldSubtype,
    pub page: i32,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub extract: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract_anchor: Option<ExtractAnchor>,
}

/// Coarse field kind. `Signature` marks the one field per approval that
/// carries the signature's own geometry and style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FieldType {
    Signature,
    #[default]
    Input,
    Image,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Signature => "SIGNATURE",
            Self::Input => "INPUT",
            Self::Image => "IMAGE",
        }
    }
}

/// Fine-grained field kind. The first three are the signature subtypes;
/// the rest are generic input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FieldSubtype {
    Fullname,
    Initials,
    Capture,
    Label,
    #[default]
    Textfield,
    Textarea,
    Checkbox,
    Datepicker,
    List,
    Radio,
}

impl FieldSubtype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fullname => "FULLNAME",
            Self::Initials => "INITIALS",
            Self::Capture => "CAPTURE",
            Self::Label => "LABEL",
            Self::Textfield => "TEXTFIELD",
            Self::Textarea => "TEXTAREA",
            Self::Checkbox => "CHECKBOX",
            Self::Datepicker => "DATEPICKER",
            Self::List => "LIST",
            Self::Radio => "RADIO",
        }
    }
}

/// Anchor payload for extraction-placed fields: position is derived from
/// document text rather than fixed coordinates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractAnchor {
    pub text: String,
    pub index: i32,
    pub character_index: i32,
    pub anchor_point: AnchorPoint,
    pub left_offset: i32,
    pub top_offset: i32,
    pub width: i32,
    pub height: i32,
}

/// Corner of the matched text the anchor offsets are measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnchorPoint {
    #[default]
    #[serde(rename = "TOPLEFT")]
    TopLeft,
    #[serde(rename = "TOPRIGHT")]
    TopRight,
    #[serde(rename = "BOTTOMLEFT")]
    BottomLeft,
    #[serde(rename = "BOTTOMRIGHT")]
    BottomRight,
}

impl AnchorPoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TopLeft => "TOPLEFT",
            Self::TopRight => "TOPRIGHT",
            Self::BottomLeft => "BOTTOMLEFT",
            Self::BottomRight => "BOTTOMRIGHT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_uses_wire_names() {
        let field = Field {
            name: "signer1.fullname".to_string(),
            field_type: FieldType::Signature,
            subtype: FieldSubtype::Fullname,
            page: 2,
            left: 100.0,
            top: 200.0,
            ..Default::default()
        };

        let v = serde_json::to_value(&field).unwrap();
        assert_eq!(v["type"], "SIGNATURE");
        assert_eq!(v["subtype"], "FULLNAME");
        assert_eq!(v["page"], 2);
        assert_eq!(v["left"], 100.0);
        // absent optionals are omitted, not null
        assert!(v.get("extractAnchor").is_none());
        assert!(v.get("id").is_none());
    }

    #[test]
    fn approval_decodes_partial_payload() {
        let json = r#"{"role":"role-1","fields":[{"type":"INPUT","subtype":"CHECKBOX","page":1}]}"#;
        let approval: Approval = serde_json::from_str(json).unwrap();
        assert_eq!(approval.id, None);
        assert_eq!(approval.role, "role-1");
        assert_eq!(approval.fields.len(), 1);
        assert_eq!(approval.fields[0].subtype, FieldSubtype::Checkbox);
        assert!(!approval.fields[0].extract);
    }

    #[test]
    fn signer_group_round_trips_camel_case() {
        let json = r#"{"email":"a@b.c","firstName":"Ann","lastName":"Lee","group":{"id":"g1","name":"Legal"}}"#;
        let signer: Signer = serde_json::from_str(json).unwrap();
        assert_eq!(signer.first_name, "Ann");
        assert_eq!(signer.group.as_ref().unwrap().id, "g1");

        let back = serde_json::to_value(&signer).unwrap();
        assert_eq!(back["firstName"], "Ann");
        assert_eq!(back["group"]["name"], "Legal");
    }

    #[test]
    fn anchor_point_wire_tags() {
        let a = ExtractAnchor {
            text: "Sign here".to_string(),
            anchor_point: AnchorPoint::BottomRight,
            ..Default::default()
        };
        let v = serde_json::to_value(&a).unwrap();
        assert_eq!(v["anchorPoint"], "BOTTOMRIGHT");
        assert_eq!(v["characterIndex"], 0);
    }
}
