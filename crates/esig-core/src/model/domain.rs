//! Client-facing SDK model.
//!
//! A `Signature` is what application code works with: a styled signature
//! block placed on a page (or anchored to document text), owned by exactly
//! one signer assignment, with any number of attached non-signature fields.
//!
//! Construction goes through `SignatureBuilder`, seeded with the signer
//! assignment so that a built signature can never lack one. Builders are
//! consuming and fluent; `build()` is infallible.

use crate::errors::{EsigError, EsigResult};

/// Opaque typed wrapper around a service-assigned signature id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignatureId(String);

impl SignatureId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Opaque typed wrapper around a signer-group id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupId(String);

impl GroupId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Who a signature belongs to. Exactly one variant, always.
///
/// This replaces the "probe several nullable fields" pattern of the wire
/// schema with a sum type: a role with no signers is a placeholder, a role
/// whose lone signer carries a group reference is group-owned, anything
/// else is an individual keyed by email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignerAssignment {
    /// No signer yet; keyed by the role id it will later be filled from.
    Placeholder(String),
    /// Owned by a signer group.
    Group(GroupId),
    /// Owned by an individual signer, keyed by email address.
    Individual(String),
}

/// How the signature is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureStyle {
    FullName,
    HandDrawn,
    Initials,
    /// Click-to-accept; carries no visible placement of its own.
    Acceptance,
}

impl SignatureStyle {
    /// Parse a style name (e.g. from caller configuration).
    pub fn parse(s: &str) -> EsigResult<Self> {
        match s {
            "FULL_NAME" => Ok(Self::FullName),
            "HAND_DRAWN" => Ok(Self::HandDrawn),
            "INITIALS" => Ok(Self::Initials),
            "ACCEPTANCE" => Ok(Self::Acceptance),
            other => Err(EsigError::unsupported_style(other)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "FULL_NAME",
            Self::HandDrawn => "HAND_DRAWN",
            Self::Initials => "INITIALS",
            Self::Acceptance => "ACCEPTANCE",
        }
    }
}

/// Corner of an anchor's matched text that offsets are measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchorPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Text-anchor descriptor: place a field relative to a text match in the
/// document instead of at fixed coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextAnchor {
    pub anchor_text: String,
    /// Which occurrence of the text to match (0-based).
    pub occurrence: i32,
    /// Character offset within the matched text.
    pub character: i32,
    pub position: TextAnchorPosition,
    pub left_offset: i32,
    pub top_offset: i32,
    pub width: i32,
    pub height: i32,
}

/// Styles available to non-signature fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStyle {
    Label,
    TextField,
    TextArea,
    Checkbox,
    Datepicker,
    List,
    RadioButton,
}

impl FieldStyle {
    /// Parse a field style name (e.g. from caller configuration).
    pub fn parse(s: &str) -> EsigResult<Self> {
        match s {
            "LABEL" => Ok(Self::Label),
            "TEXT_FIELD" => Ok(Self::TextField),
            "TEXT_AREA" => Ok(Self::TextArea),
            "CHECKBOX" => Ok(Self::Checkbox),
            "DATEPICKER" => Ok(Self::Datepicker),
            "LIST" => Ok(Self::List),
            "RADIO_BUTTON" => Ok(Self::RadioButton),
            other => Err(EsigError::unsupported_style(other)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Label => "LABEL",
            Self::TextField => "TEXT_FIELD",
            Self::TextArea => "TEXT_AREA",
            Self::Checkbox => "CHECKBOX",
            Self::Datepicker => "DATEPICKER",
            Self::List => "LIST",
            Self::RadioButton => "RADIO_BUTTON",
        }
    }
}

/// A non-signature field attached to a signature.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub id: Option<String>,
    pub name: String,
    pub style: FieldStyle,
    pub page: i32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub value: Option<String>,
    pub extract: bool,
}

impl Field {
    pub fn builder(style: FieldStyle) -> FieldBuilder {
        FieldBuilder::new(style)
    }
}

/// Fluent builder for `Field`.
#[derive(Debug, Clone)]
pub struct FieldBuilder {
    field: Field,
}

impl FieldBuilder {
    pub fn new(style: FieldStyle) -> Self {
        Self {
            field: Field {
                id: None,
                name: String::new(),
                style,
                page: 0,
                x: 0.0,
                y: 0.0,
                width: 0.0,
                height: 0.0,
                value: None,
                extract: false,
            },
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.field.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.field.name = name.into();
        self
    }

    pub fn on_page(mut self, page: i32) -> Self {
        self.field.page = page;
        self
    }

    pub fn at_position(mut self, x: f64, y: f64) -> Self {
        self.field.x = x;
        self.field.y = y;
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.field.width = width;
        self.field.height = height;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.field.value = Some(value.into());
        self
    }

    pub fn enable_extraction(mut self) -> Self {
        self.field.extract = true;
        self
    }

    pub fn build(self) -> Field {
        self.field
    }
}

/// A signature block: geometry, style, owner, and attached fields.
///
/// When `extract` is true the geometry fields are meaningless; placement
/// comes from document content (optionally refined by `text_anchor`) and
/// the wire encoding omits coordinates entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    pub id: Option<SignatureId>,
    pub name: String,
    pub assignment: SignerAssignment,
    pub style: SignatureStyle,
    pub page: i32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub extract: bool,
    pub text_anchor: Option<TextAnchor>,
    pub fields: Vec<Field>,
}

impl Signature {
    /// Start a builder for an individually-assigned signature.
    pub fn for_signer(email: impl Into<String>) -> SignatureBuilder {
        SignatureBuilder::for_assignment(SignerAssignment::Individual(email.into()))
    }

    /// Start a builder for a group-owned signature.
    pub fn for_group(group: GroupId) -> SignatureBuilder {
        SignatureBuilder::for_assignment(SignerAssignment::Group(group))
    }

    /// Start a builder for a placeholder signature (no signer yet).
    pub fn for_placeholder(role_id: impl Into<String>) -> SignatureBuilder {
        SignatureBuilder::for_assignment(SignerAssignment::Placeholder(role_id.into()))
    }
}

/// Fluent builder for `Signature`, seeded with a signer assignment.
#[derive(Debug, Clone)]
pub struct SignatureBuilder {
    signature: Signature,
}

impl SignatureBuilder {
    pub fn for_assignment(assignment: SignerAssignment) -> Self {
        Self {
            signature: Signature {
                id: None,
                name: String::new(),
                assignment,
                style: SignatureStyle::FullName,
                page: 0,
                x: 0.0,
                y: 0.0,
                width: 0.0,
                height: 0.0,
                extract: false,
                text_anchor: None,
                fields: Vec::new(),
            },
        }
    }

    pub fn with_id(mut self, id: SignatureId) -> Self {
        self.signature.id = Some(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.signature.name = name.into();
        self
    }

    pub fn with_style(mut self, style: SignatureStyle) -> Self {
        self.signature.style = style;
        self
    }

    pub fn on_page(mut self, page: i32) -> Self {
        self.signature.page = page;
        self
    }

    pub fn at_position(mut self, x: f64, y: f64) -> Self {
        self.signature.x = x;
        self.signature.y = y;
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.signature.width = width;
        self.signature.height = height;
        self
    }

    /// Switch to extraction placement. Additive: geometry already set on
    /// the builder is retained (the outbound encoder is what suppresses it).
    pub fn enable_extraction(mut self) -> Self {
        self.signature.extract = true;
        self
    }

    pub fn with_text_anchor(mut self, anchor: TextAnchor) -> Self {
        self.signature.text_anchor = Some(anchor);
        self
    }

    /// Attach a non-signature field. Order of attachment is preserved.
    pub fn with_field(mut self, field: Field) -> Self {
        self.signature.fields.push(field);
        self
    }

    pub fn build(self) -> Signature {
        self.signature
    }
}
