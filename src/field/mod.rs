//! # Label Fields
//!
//! A [`Field`] is one unit of label content. It is made of two parts:
//!
//! - a [`Frame`]: origin, size, alignment, invert flag and optional id,
//!   shared by every kind of field
//! - a [`FieldKind`]: the closed set of things a field can be (text, font
//!   change, comment, box, barcode, barcode defaults, placeholder)
//!
//! Every field renders itself into one ZPL fragment with [`Field::render`].
//!
//! ```
//! use zebrakit::field::Field;
//!
//! let field = Field::text("Hello").at(50, 120);
//! assert_eq!(field.render(), "^FO50,120,0^FDHello^FS");
//!
//! let font = Field::font('0', 60);
//! assert_eq!(font.render(), "^CF0,60,");
//! ```
//!
//! ## JSON
//!
//! Fields are internally tagged with `"type"`; frame attributes sit next to
//! the variant's own attributes:
//!
//! ```json
//! {"type": "text", "content": "Hello", "x": 50, "y": 120}
//! {"type": "graphic_box", "x": 50, "y": 250, "width": 700, "height": 3, "thickness": 3}
//! ```

mod barcode;
mod comment;
mod font;
mod graphic_box;
mod placeholder;
mod text;

pub use barcode::{Barcode, BarcodeConfig};
pub use comment::Comment;
pub use font::{DEFAULT_FONT_HEIGHT, Font};
pub use graphic_box::{BoxColor, GraphicBox};
pub use placeholder::Placeholder;
pub use text::Text;

use serde::{Deserialize, Deserializer, Serialize};

use crate::confine::{ALIGNMENT_MAX, COORD_MAX, confine, confine_alignment, confine_coordinate};
use crate::protocol::commands;

// ============================================================================
// FRAME
// ============================================================================

/// Deserialize a coordinate or size, confining it into `[0, 32000]`.
fn deserialize_coordinate<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let v = i64::deserialize(deserializer)?;
    Ok(confine(v, 0, COORD_MAX as i64) as i32)
}

/// Deserialize an alignment, confining it into `[0, 2]`.
fn deserialize_alignment<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let v = i64::deserialize(deserializer)?;
    Ok(confine(v, 0, ALIGNMENT_MAX as i64) as i32)
}

/// Attributes shared by every field.
///
/// All numeric attributes are confined on the way in, so a `Frame` never
/// holds a coordinate outside `[0, 32000]` or an alignment outside `[0, 2]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    #[serde(default, deserialize_with = "deserialize_coordinate")]
    x: i32,
    #[serde(default, deserialize_with = "deserialize_coordinate")]
    y: i32,
    #[serde(default, deserialize_with = "deserialize_coordinate")]
    width: i32,
    #[serde(default, deserialize_with = "deserialize_coordinate")]
    height: i32,
    #[serde(default, deserialize_with = "deserialize_alignment")]
    alignment: i32,
    #[serde(default)]
    invert_on_overlap: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
}

impl Frame {
    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn alignment(&self) -> i32 {
        self.alignment
    }

    pub fn invert_on_overlap(&self) -> bool {
        self.invert_on_overlap
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_x(&mut self, x: i32) {
        self.x = confine_coordinate(x);
    }

    pub fn set_y(&mut self, y: i32) {
        self.y = confine_coordinate(y);
    }

    pub fn set_width(&mut self, width: i32) {
        self.width = confine_coordinate(width);
    }

    pub fn set_height(&mut self, height: i32) {
        self.height = confine_coordinate(height);
    }

    pub fn set_alignment(&mut self, alignment: i32) {
        self.alignment = confine_alignment(alignment);
    }

    pub fn set_invert_on_overlap(&mut self, invert: bool) {
        self.invert_on_overlap = invert;
    }

    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    /// `^FOx,y,z` for this frame.
    pub fn origin(&self) -> String {
        commands::field_origin(self.x, self.y, self.alignment)
    }

    /// The frame's own box.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Approximate area a field occupies, in dots.
///
/// Text fields report only their frame; the glyph size comes from whichever
/// font field precedes them, which the field itself cannot see. See
/// [`crate::layout`] for the fold that accounts for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

// ============================================================================
// FIELD BODIES
// ============================================================================

/// Encoding contract implemented by every field kind.
pub trait FieldBody {
    /// Whether the payload is wrapped in `^FO` ... `^FS`.
    ///
    /// Positionless commands (`^CF`, `^BY`, `^FX`) change printer state or
    /// annotate the stream and are emitted bare.
    fn positioned(&self) -> bool {
        true
    }

    /// The command text, without origin or field separator.
    fn payload(&self, frame: &Frame) -> String;

    /// Area used for bounds checking. Defaults to the frame.
    fn bounding_box(&self, frame: &Frame) -> BoundingBox {
        frame.bounding_box()
    }
}

/// Generates [`FieldKind`] and its dispatch from one variant list.
///
/// Adding a field kind means adding one line here and implementing
/// [`FieldBody`]; every match below stays exhaustive.
macro_rules! define_fields {
    ($($variant:ident($inner:ty) => $name:literal),+ $(,)?) => {
        /// The closed set of field kinds.
        ///
        /// The `#[serde(tag = "type")]` attribute enables JSON like
        /// `{"type": "text", "content": "Hello"}`.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "type", rename_all = "snake_case")]
        pub enum FieldKind {
            $($variant($inner),)+
        }

        impl FieldKind {
            fn body(&self) -> &dyn FieldBody {
                match self { $(FieldKind::$variant(f) => f as &dyn FieldBody,)+ }
            }

            /// Short lowercase name of the kind (matches the JSON tag).
            pub fn name(&self) -> &'static str {
                match self { $(FieldKind::$variant(_) => $name,)+ }
            }
        }

        $(
            impl From<$inner> for FieldKind {
                fn from(inner: $inner) -> Self {
                    FieldKind::$variant(inner)
                }
            }
        )+
    };
}

define_fields! {
    Text(Text) => "text",
    Font(Font) => "font",
    Comment(Comment) => "comment",
    GraphicBox(GraphicBox) => "graphic_box",
    Barcode(Barcode) => "barcode",
    BarcodeConfig(BarcodeConfig) => "barcode_config",
    Placeholder(Placeholder) => "placeholder",
}

// ============================================================================
// FIELD
// ============================================================================

/// One renderable unit of label content.
///
/// Construct with one of the kind constructors, then chain frame setters:
///
/// ```
/// use zebrakit::field::Field;
///
/// let field = Field::graphic_box(100, 100, 100)
///     .at(75, 75)
///     .invert_on_overlap(true);
/// assert_eq!(field.render(), "^FO75,75,0^FR^GB100,100,100,B,0^FS");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(flatten)]
    frame: Frame,
    #[serde(flatten)]
    kind: FieldKind,
}

impl Field {
    /// Wrap a field kind with a zeroed frame.
    pub fn new(kind: impl Into<FieldKind>) -> Self {
        Self {
            frame: Frame::default(),
            kind: kind.into(),
        }
    }

    /// A text field.
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(Text::new(content))
    }

    /// A font change to `font` with character height `height`.
    pub fn font(font: char, height: i32) -> Self {
        Self::new(Font::new(font)).size(0, height)
    }

    /// A non-printing comment.
    pub fn comment(text: impl Into<String>) -> Self {
        Self::new(Comment::new(text))
    }

    /// A box `width` × `height` with border `thickness`.
    pub fn graphic_box(width: i32, height: i32, thickness: i32) -> Self {
        Self::new(GraphicBox::new().thickness(thickness)).size(width, height)
    }

    /// A barcode field.
    pub fn barcode(barcode: Barcode) -> Self {
        Self::new(barcode)
    }

    /// A `^BY` barcode defaults field.
    pub fn barcode_config(config: BarcodeConfig) -> Self {
        Self::new(config)
    }

    /// A placeholder, later replaced by [`crate::label::Label::replace_placeholder`].
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self::new(Placeholder {}).with_id(id)
    }

    // === Frame builders ===

    /// Set the origin.
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.frame.set_x(x);
        self.frame.set_y(y);
        self
    }

    /// Set width and height.
    pub fn size(mut self, width: i32, height: i32) -> Self {
        self.frame.set_width(width);
        self.frame.set_height(height);
        self
    }

    /// Set the justification (0 left, 1 right, 2 auto).
    pub fn align(mut self, alignment: i32) -> Self {
        self.frame.set_alignment(alignment);
        self
    }

    /// Emit `^FR` so the field inverts where it overlaps others.
    pub fn invert_on_overlap(mut self, invert: bool) -> Self {
        self.frame.set_invert_on_overlap(invert);
        self
    }

    /// Attach an identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.frame.set_id(Some(id.into()));
        self
    }

    // === Accessors ===

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// The identifier used for placeholder lookup.
    pub fn identifier(&self) -> Option<&str> {
        self.frame.id()
    }

    /// Whether this field is wrapped in origin and separator.
    pub fn is_positioned(&self) -> bool {
        self.kind.body().positioned()
    }

    /// Render this field into its ZPL fragment.
    pub fn render(&self) -> String {
        let body = self.kind.body();
        let payload = body.payload(&self.frame);
        if body.positioned() {
            commands::encapsulate(&self.frame.origin(), self.frame.invert_on_overlap, &payload)
        } else {
            payload
        }
    }

    /// Best-effort area used by this field.
    pub fn bounding_box(&self) -> BoundingBox {
        self.kind.body().bounding_box(&self.frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::barcode::Orientation;

    #[test]
    fn test_frame_setters_confine() {
        let field = Field::text("x").at(-10, 40000).size(50000, -1).align(9);
        let f = field.frame();
        assert_eq!((f.x(), f.y()), (0, 32000));
        assert_eq!((f.width(), f.height()), (32000, 0));
        assert_eq!(f.alignment(), 2);
    }

    #[test]
    fn test_text_render() {
        assert_eq!(
            Field::text("Intershipping, Inc.").at(220, 50).render(),
            "^FO220,50,0^FDIntershipping, Inc.^FS"
        );
    }

    #[test]
    fn test_invert_goes_between_origin_and_payload() {
        let s = Field::text("x").at(1, 2).invert_on_overlap(true).render();
        assert_eq!(s, "^FO1,2,0^FR^FDx^FS");
    }

    #[test]
    fn test_alignment_in_origin() {
        assert_eq!(Field::text("r").at(5, 6).align(1).render(), "^FO5,6,1^FDr^FS");
    }

    #[test]
    fn test_positionless_kinds_have_no_wrapper() {
        for field in [
            Field::comment("note"),
            Field::font('A', 30),
            Field::barcode_config(BarcodeConfig::default()),
        ] {
            let s = field.render();
            assert!(!s.contains("^FO"), "{}", s);
            assert!(!s.ends_with("^FS"), "{}", s);
            assert!(!field.is_positioned());
        }
    }

    #[test]
    fn test_positioned_kinds_end_with_separator() {
        for field in [
            Field::text("a"),
            Field::graphic_box(1, 1, 1),
            Field::barcode(Barcode::new("1")),
            Field::placeholder("p"),
        ] {
            assert!(field.is_positioned());
            assert!(field.render().starts_with("^FO0,0,0"));
            assert!(field.render().ends_with("^FS"));
        }
    }

    #[test]
    fn test_identifier() {
        assert_eq!(Field::placeholder("sender").identifier(), Some("sender"));
        assert_eq!(Field::text("x").identifier(), None);
        assert_eq!(Field::text("x").with_id("t1").identifier(), Some("t1"));
    }

    #[test]
    fn test_bounding_box_is_frame() {
        let b = Field::graphic_box(700, 3, 3).at(50, 250).bounding_box();
        assert_eq!(
            b,
            BoundingBox {
                x: 50,
                y: 250,
                width: 700,
                height: 3
            }
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Field::text("").kind().name(), "text");
        assert_eq!(Field::graphic_box(1, 1, 1).kind().name(), "graphic_box");
        assert_eq!(
            Field::barcode_config(BarcodeConfig::default()).kind().name(),
            "barcode_config"
        );
    }

    #[test]
    fn test_json_round_trip() {
        let field = Field::barcode(Barcode::new("12345678").orientation(Some(Orientation::Rotated)))
            .at(100, 550)
            .invert_on_overlap(true);
        let json = serde_json::to_string(&field).unwrap();
        let back: Field = serde_json::from_str(&json).unwrap();
        assert_eq!(back, field);
        assert_eq!(back.render(), field.render());
    }

    #[test]
    fn test_json_confines_out_of_range_values() {
        let field: Field =
            serde_json::from_str(r#"{"type":"text","content":"x","x":-5,"y":99999,"alignment":7}"#)
                .unwrap();
        assert_eq!(field.render(), "^FO0,32000,2^FDx^FS");
    }

    #[test]
    fn test_json_missing_frame_defaults_to_zero() {
        let field: Field = serde_json::from_str(r#"{"type":"comment","text":"hi"}"#).unwrap();
        assert_eq!(field.frame(), &Frame::default());
        assert_eq!(field.render(), "^FX hi");
    }
}
