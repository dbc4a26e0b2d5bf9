//! Comment field: `^FX <text>`.

use serde::{Deserialize, Serialize};

use super::{FieldBody, Frame};
use crate::protocol::commands::COMMENT;

/// A non-printing comment in the markup stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub text: String,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl FieldBody for Comment {
    fn positioned(&self) -> bool {
        false
    }

    fn payload(&self, _frame: &Frame) -> String {
        format!("{} {}", COMMENT, self.text)
    }
}

#[cfg(test)]
mod tests {
    use crate::field::Field;

    #[test]
    fn test_comment() {
        assert_eq!(
            Field::comment("Top section with logo, name and address.").render(),
            "^FX Top section with logo, name and address."
        );
    }
}
