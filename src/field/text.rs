//! Text field: `^FO` + `^FD<content>` + `^FS`.

use serde::{Deserialize, Serialize};

use super::{FieldBody, Frame};
use crate::protocol::commands::FIELD_DATA;

/// A line of text printed in the active font.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    #[serde(default)]
    pub content: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl FieldBody for Text {
    fn payload(&self, _frame: &Frame) -> String {
        format!("{}{}", FIELD_DATA, self.content)
    }
}

#[cfg(test)]
mod tests {
    use crate::field::Field;

    #[test]
    fn test_empty_text() {
        assert_eq!(Field::text("").render(), "^FO0,0,0^FD^FS");
    }

    #[test]
    fn test_content_is_not_escaped() {
        assert_eq!(Field::text("A,B").at(1, 1).render(), "^FO1,1,0^FDA,B^FS");
    }
}
