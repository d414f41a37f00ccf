//! Text anchor <-> wire extract-anchor mapping.
//!
//! Pure attribute copy plus the anchor-point enumeration map. Both
//! directions are total.

use crate::model::api::{AnchorPoint, ExtractAnchor};
use crate::model::domain::{TextAnchor, TextAnchorPosition};

/// Encode a domain text anchor as the wire extract-anchor payload.
pub fn to_extract_anchor(anchor: &TextAnchor) -> ExtractAnchor {
    ExtractAnchor {
        text: anchor.anchor_text.clone(),
        index: anchor.occurrence,
        character_index: anchor.character,
        anchor_point: anchor_point_from_position(anchor.position),
        left_offset: anchor.left_offset,
        top_offset: anchor.top_offset,
        width: anchor.width,
        height: anchor.height,
    }
}

/// Decode a wire extract-anchor payload into a domain text anchor.
pub fn to_text_anchor(anchor: &ExtractAnchor) -> TextAnchor {
    TextAnchor {
        anchor_text: anchor.text.clone(),
        occurrence: anchor.index,
        character: anchor.character_index,
        position: position_from_anchor_point(anchor.anchor_point),
        left_offset: anchor.left_offset,
        top_offset: anchor.top_offset,
        width: anchor.width,
        height: anchor.height,
    }
}

fn anchor_point_from_position(position: TextAnchorPosition) -> AnchorPoint {
    match position {
        TextAnchorPosition::TopLeft => AnchorPoint::TopLeft,
        TextAnchorPosition::TopRight => AnchorPoint::TopRight,
        TextAnchorPosition::BottomLeft => AnchorPoint::BottomLeft,
        TextAnchorPosition::BottomRight => AnchorPoint::BottomRight,
    }
}

fn position_from_anchor_point(point: AnchorPoint) -> TextAnchorPosition {
    match point {
        AnchorPoint::TopLeft => TextAnchorPosition::TopLeft,
        AnchorPoint::TopRight => TextAnchorPosition::TopRight,
        AnchorPoint::BottomLeft => TextAnchorPosition::BottomLeft,
        AnchorPoint::BottomRight => TextAnchorPosition::BottomRight,
    }
}
