//! Placeholder field: a stand-in replaced later by identifier.
//!
//! The identifier lives in the frame id. If a placeholder is serialized
//! before being replaced it renders as visible text, which makes a missed
//! replacement easy to spot on a preview.

use serde::{Deserialize, Serialize};

use super::{FieldBody, Frame};
use crate::protocol::commands::FIELD_DATA;

/// Marker for content spliced in by
/// [`Label::replace_placeholder`](crate::label::Label::replace_placeholder).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {}

impl FieldBody for Placeholder {
    fn payload(&self, frame: &Frame) -> String {
        format!("{}Placeholder: {}", FIELD_DATA, frame.id().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use crate::field::Field;

    #[test]
    fn test_placeholder_render() {
        assert_eq!(
            Field::placeholder("sender").render(),
            "^FO0,0,0^FDPlaceholder: sender^FS"
        );
    }
}
