//! Font change field: `^CF<font>,<height>,<width>`.
//!
//! The character height is the frame height. The frame width is an optional
//! explicit character width: zero means "not set" and renders as an empty
//! segment, letting the printer derive the width from the height.

use serde::{Deserialize, Serialize};

use super::{FieldBody, Frame};
use crate::protocol::commands::{CHANGE_FONT, segment};

/// Height used when no explicit height is given.
pub const DEFAULT_FONT_HEIGHT: i32 = 30;

/// Changes the active font for every text field after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    #[serde(default = "default_font")]
    pub font: char,
}

fn default_font() -> char {
    'A'
}

impl Default for Font {
    fn default() -> Self {
        Self {
            font: default_font(),
        }
    }
}

impl Font {
    pub fn new(font: char) -> Self {
        Self { font }
    }
}

impl FieldBody for Font {
    fn positioned(&self) -> bool {
        false
    }

    fn payload(&self, frame: &Frame) -> String {
        let width = (frame.width() > 0).then_some(frame.width());
        format!(
            "{}{}{}{}",
            CHANGE_FONT,
            self.font,
            segment(Some(frame.height())),
            segment(width)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;

    #[test]
    fn test_font_without_width_keeps_trailing_segment() {
        assert_eq!(Field::font('0', 60).render(), "^CF0,60,");
    }

    #[test]
    fn test_font_with_width() {
        assert_eq!(Field::font('A', 30).size(20, 30).render(), "^CFA,30,20");
    }

    #[test]
    fn test_default_font() {
        assert_eq!(
            Field::font(Font::default().font, DEFAULT_FONT_HEIGHT).render(),
            "^CFA,30,"
        );
    }

    #[test]
    fn test_font_ignores_position() {
        assert_eq!(Field::font('0', 40).at(100, 100).render(), "^CF0,40,");
    }
}
