//! # Layout Bounds
//!
//! Pre-flight check that a label's content fits the addressable area of the
//! configured label.
//!
//! Text fields do not know their own size: the glyph box comes from the
//! last font field before them in the stream. The extent is therefore one
//! left-to-right fold that carries the active font as it goes.
//!
//! ```
//! use zebrakit::label::Label;
//! use zebrakit::layout::{check_bounds, content_extent};
//!
//! let label = Label::new().set_font('0', 60).add_text("CA", (470, 955));
//! assert_eq!(content_extent(label.fields()), (470, 1015));
//! assert!(check_bounds(&label).is_ok());
//! ```

use crate::error::{ZebraError, ZebraResult};
use crate::field::{Field, FieldKind};
use crate::label::Label;

/// Glyph box set by the most recent font field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ActiveFont {
    width: i32,
    height: i32,
}

/// Largest `(x, y)` reached by any field, in dots.
///
/// Font fields update the active font and contribute nothing themselves.
/// Text fields reach `origin + active font`. Every other field reaches
/// `origin + size` of its bounding box.
pub fn content_extent(fields: &[Field]) -> (u32, u32) {
    let (_, max_x, max_y) = fields.iter().fold(
        (ActiveFont::default(), 0i64, 0i64),
        |(font, max_x, max_y), field| {
            let frame = field.frame();
            let (reach_x, reach_y) = match field.kind() {
                FieldKind::Font(_) => {
                    let font = ActiveFont {
                        width: frame.width(),
                        height: frame.height(),
                    };
                    return (font, max_x, max_y);
                }
                FieldKind::Text(_) => (
                    frame.x() as i64 + font.width as i64,
                    frame.y() as i64 + font.height as i64,
                ),
                _ => {
                    let b = field.bounding_box();
                    (b.x as i64 + b.width as i64, b.y as i64 + b.height as i64)
                }
            };
            (font, max_x.max(reach_x), max_y.max(reach_y))
        },
    );
    (to_dots(max_x), to_dots(max_y))
}

fn to_dots(v: i64) -> u32 {
    v.clamp(0, u32::MAX as i64) as u32
}

/// Fail with [`ZebraError::BoundsExceeded`] if the content extends past the
/// label's addressable area on either axis.
pub fn check_bounds(label: &Label) -> ZebraResult<()> {
    let (used_x, used_y) = content_extent(label.fields());
    let (max_x, max_y) = label.config().max_dots();
    if used_x > max_x || used_y > max_y {
        return Err(ZebraError::BoundsExceeded {
            used_x,
            used_y,
            max_x,
            max_y,
        });
    }
    Ok(())
}
