//! Graphic box field: `^FO` + `^GB<w>,<h>,<thickness>,<color>,<rounding>` + `^FS`.
//!
//! Width and height come from the frame. A box whose thickness equals its
//! smaller side is drawn solid; a 3-dot tall box 700 wide is a rule line.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::{FieldBody, Frame};
use crate::confine::{COORD_MAX, confine};
use crate::protocol::commands::{GRAPHIC_BOX, segment};

/// Largest corner rounding ZPL accepts.
pub const MAX_ROUNDING: u8 = 8;

/// Line color of a box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoxColor {
    #[default]
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "W")]
    White,
}

impl fmt::Display for BoxColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoxColor::Black => write!(f, "B"),
            BoxColor::White => write!(f, "W"),
        }
    }
}

fn default_thickness() -> i32 {
    1
}

fn deserialize_thickness<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let v = i64::deserialize(deserializer)?;
    Ok(confine(v, 1, COORD_MAX as i64) as i32)
}

fn deserialize_rounding<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let v = i64::deserialize(deserializer)?;
    Ok(confine(v, 0, MAX_ROUNDING as i64) as u8)
}

/// A rectangle, rule line or solid block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphicBox {
    #[serde(default = "default_thickness", deserialize_with = "deserialize_thickness")]
    thickness: i32,
    #[serde(default)]
    color: BoxColor,
    #[serde(default, deserialize_with = "deserialize_rounding")]
    rounding: u8,
}

impl Default for GraphicBox {
    fn default() -> Self {
        Self {
            thickness: default_thickness(),
            color: BoxColor::Black,
            rounding: 0,
        }
    }
}

impl GraphicBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Border thickness in dots (1–32000).
    pub fn thickness(mut self, thickness: i32) -> Self {
        self.thickness = confine(thickness, 1, COORD_MAX);
        self
    }

    pub fn color(mut self, color: BoxColor) -> Self {
        self.color = color;
        self
    }

    /// Corner rounding (0–8).
    pub fn rounding(mut self, rounding: u8) -> Self {
        self.rounding = rounding.min(MAX_ROUNDING);
        self
    }
}

impl FieldBody for GraphicBox {
    fn payload(&self, frame: &Frame) -> String {
        format!(
            "{}{}{}{}{}{}",
            GRAPHIC_BOX,
            frame.width(),
            segment(Some(frame.height())),
            segment(Some(self.thickness)),
            segment(Some(self.color)),
            segment(Some(self.rounding))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;

    #[test]
    fn test_box_render() {
        assert_eq!(
            Field::graphic_box(700, 3, 3).at(50, 250).render(),
            "^FO50,250,0^GB700,3,3,B,0^FS"
        );
    }

    #[test]
    fn test_styled_box() {
        let field = Field::new(GraphicBox::new().thickness(2).color(BoxColor::White).rounding(4))
            .at(10, 10)
            .size(80, 40);
        assert_eq!(field.render(), "^FO10,10,0^GB80,40,2,W,4^FS");
    }

    #[test]
    fn test_box_parameters_are_confined() {
        let b = GraphicBox::new().thickness(0).rounding(20);
        assert_eq!(b.thickness, 1);
        assert_eq!(b.rounding, MAX_ROUNDING);
    }

    #[test]
    fn test_box_json_confines_like_builder() {
        let built = Field::new(GraphicBox::new().thickness(0).rounding(99)).size(10, 10);
        let parsed: Field = serde_json::from_str(
            r#"{"type":"graphic_box","width":10,"height":10,"thickness":0,"rounding":99}"#,
        )
        .unwrap();
        assert_eq!(parsed.render(), "^FO0,0,0^GB10,10,1,B,8^FS");
        assert_eq!(parsed.render(), built.render());

        let parsed: Field = serde_json::from_str(
            r#"{"type":"graphic_box","thickness":99999,"rounding":-3}"#,
        )
        .unwrap();
        assert_eq!(parsed.render(), "^FO0,0,0^GB0,0,32000,B,0^FS");
    }
}
