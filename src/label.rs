//! # Labels
//!
//! A [`Label`] is an ordered list of [`Field`]s plus the physical
//! configuration of the label it targets. Fields render in insertion order;
//! font and barcode-default fields affect every field after them, and later
//! fields may overprint earlier ones.
//!
//! ## Example
//!
//! ```
//! use zebrakit::label::Label;
//!
//! let label = Label::new()
//!     .set_font('0', 60)
//!     .add_text("Intershipping, Inc.", (220, 50))
//!     .draw_box((50, 250), (700, 3, 3));
//!
//! assert_eq!(
//!     label.to_zpl(),
//!     "^XA^CF0,60,^FO220,50,0^FDIntershipping, Inc.^FS^FO50,250,0^GB700,3,3,B,0^FS^XZ"
//! );
//! ```
//!
//! ## Sections and placeholders
//!
//! Large labels are usually built as separate sections and merged with
//! [`Label::merge_labels`], or as a template with placeholders filled in
//! with [`Label::replace_placeholder`].

use serde::{Deserialize, Serialize};

use crate::error::ZebraResult;
use crate::field::{Barcode, BarcodeConfig, BoxColor, DEFAULT_FONT_HEIGHT, Field, GraphicBox};
use crate::layout::check_bounds;
use crate::printer::{LabelConfig, LabelSize, Quality, Resolution};
use crate::protocol::commands::{END_FORMAT, START_FORMAT};
use crate::render::{OutputFormat, RenderDispatch, RenderRequest};

/// Vertical step between lines added with [`Label::add_lines`], in dots.
pub const DEFAULT_LINE_STEP: (i32, i32) = (0, 40);

/// An ordered collection of fields plus label metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Label {
    #[serde(default)]
    config: LabelConfig,
    #[serde(default)]
    fields: Vec<Field>,
}

impl Label {
    /// Empty 4 × 6 in label at 8 dpmm.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty label with the given configuration.
    pub fn with_config(config: LabelConfig) -> Self {
        Self {
            config,
            fields: Vec::new(),
        }
    }

    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.config.resolution = resolution;
        self
    }

    pub fn with_size(mut self, size: LabelSize) -> Self {
        self.config.size = size;
        self
    }

    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.config.quality = quality;
        self
    }

    pub fn with_padding(mut self, padding: u32) -> Self {
        self.config.padding = padding;
        self
    }

    // === Accessors ===

    pub fn config(&self) -> &LabelConfig {
        &self.config
    }

    pub fn resolution(&self) -> Resolution {
        self.config.resolution
    }

    pub fn size(&self) -> LabelSize {
        self.config.size
    }

    pub fn quality(&self) -> Quality {
        self.config.quality
    }

    /// Inner padding in inches. Metadata only.
    pub fn padding(&self) -> u32 {
        self.config.padding
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // === Appending ===

    /// Append one field in place.
    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Append one field.
    pub fn add_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Append fields, preserving their order.
    pub fn add_fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Add a text field at `loc`.
    pub fn add_text(self, text: impl Into<String>, loc: (i32, i32)) -> Self {
        self.add_field(Field::text(text).at(loc.0, loc.1))
    }

    /// Add a text field at `loc` that inverts where it overlaps.
    pub fn add_text_inverted(self, text: impl Into<String>, loc: (i32, i32)) -> Self {
        self.add_field(Field::text(text).at(loc.0, loc.1).invert_on_overlap(true))
    }

    /// Add one text field per line. Line `i` goes to `start + i * increment`.
    pub fn add_texts<I, S>(self, lines: I, start: (i32, i32), increment: (i32, i32)) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields = text_lines(lines, start, increment);
        self.add_fields(fields)
    }

    /// [`add_texts`](Self::add_texts) with the default 40-dot line step.
    pub fn add_lines<I, S>(self, lines: I, start: (i32, i32)) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_texts(lines, start, DEFAULT_LINE_STEP)
    }

    /// Switch to `font` at `height` for every following text field.
    pub fn set_font(self, font: char, height: i32) -> Self {
        self.add_field(Field::font(font, height))
    }

    /// Switch font with an explicit character width.
    pub fn set_font_with_width(self, font: char, height: i32, width: i32) -> Self {
        self.add_field(Field::font(font, height).size(width, height))
    }

    /// Switch back to font `A` at the default height.
    pub fn reset_font(self) -> Self {
        self.set_font('A', DEFAULT_FONT_HEIGHT)
    }

    /// Add a non-printing comment.
    pub fn add_comment(self, comment: impl Into<String>) -> Self {
        self.add_field(Field::comment(comment))
    }

    /// Draw a black box with square corners.
    pub fn draw_box(self, loc: (i32, i32), dims: (i32, i32, i32)) -> Self {
        let (width, height, thickness) = dims;
        self.add_field(Field::graphic_box(width, height, thickness).at(loc.0, loc.1))
    }

    /// Draw a solid square: the border is as thick as the side.
    pub fn draw_square(self, loc: (i32, i32), side: i32) -> Self {
        self.draw_box(loc, (side, side, side))
    }

    /// Draw a box with every option spelled out.
    pub fn draw_box_styled(
        self,
        loc: (i32, i32),
        dims: (i32, i32, i32),
        color: BoxColor,
        rounding: u8,
        invert_on_overlap: bool,
    ) -> Self {
        let (width, height, thickness) = dims;
        let body = GraphicBox::new()
            .thickness(thickness)
            .color(color)
            .rounding(rounding);
        self.add_field(
            Field::new(body)
                .at(loc.0, loc.1)
                .size(width, height)
                .invert_on_overlap(invert_on_overlap),
        )
    }

    /// Set barcode defaults for every following barcode.
    pub fn configure_barcode(self, module_width: i32, ratio: f64, height: i32) -> Self {
        self.add_field(Field::barcode_config(BarcodeConfig::new(module_width, ratio, height)))
    }

    /// Add a barcode at `loc`.
    pub fn draw_barcode(self, barcode: Barcode, loc: (i32, i32)) -> Self {
        self.add_field(Field::barcode(barcode).at(loc.0, loc.1))
    }

    /// Add `^BY` defaults followed by a barcode at `loc`.
    pub fn draw_barcode_configured(
        self,
        barcode: Barcode,
        loc: (i32, i32),
        config: BarcodeConfig,
    ) -> Self {
        self.add_field(Field::barcode_config(config))
            .draw_barcode(barcode, loc)
    }

    /// Add a placeholder for content spliced in later.
    pub fn set_placeholder(self, id: impl Into<String>) -> Self {
        self.add_field(Field::placeholder(id))
    }

    // === Editing ===

    /// Replace the first field whose identifier is `id` with `fields`.
    ///
    /// The replacement keeps the placeholder's position. Later fields with
    /// the same identifier are left alone. Without a match the label is
    /// returned unchanged.
    pub fn replace_placeholder(
        mut self,
        id: &str,
        fields: impl IntoIterator<Item = Field>,
    ) -> Self {
        if let Some(index) = self.fields.iter().position(|f| f.identifier() == Some(id)) {
            self.fields.splice(index..=index, fields);
        }
        self
    }

    /// Append every field of `other`, in order. Coordinates are not shifted.
    pub fn merge_label(mut self, other: Label) -> Self {
        self.fields.extend(other.fields);
        self
    }

    /// Append the fields of each label in turn.
    pub fn merge_labels(self, others: impl IntoIterator<Item = Label>) -> Self {
        others.into_iter().fold(self, Label::merge_label)
    }

    // === Output ===

    /// Render every field and join the fragments.
    ///
    /// With `wrap`, `^XA` and `^XZ` are added as their own fragments. With
    /// `newline_separated`, fragments are joined with `"\n"`.
    pub fn serialize(&self, wrap: bool, newline_separated: bool) -> String {
        let mut fragments: Vec<String> = Vec::with_capacity(self.fields.len() + 2);
        if wrap {
            fragments.push(START_FORMAT.to_string());
        }
        fragments.extend(self.fields.iter().map(Field::render));
        if wrap {
            fragments.push(END_FORMAT.to_string());
        }
        fragments.join(if newline_separated { "\n" } else { "" })
    }

    /// Wrapped, single-line markup.
    pub fn to_zpl(&self) -> String {
        self.serialize(true, false)
    }

    /// Send this label to `dispatch` and return the rendered bytes.
    ///
    /// With `check`, the content extent is compared against the label size
    /// first and an oversized label fails without reaching the dispatcher.
    pub async fn render_with<D>(
        &self,
        dispatch: &D,
        format: OutputFormat,
        check: bool,
    ) -> ZebraResult<Vec<u8>>
    where
        D: RenderDispatch + ?Sized,
    {
        if check {
            check_bounds(self)?;
        }
        let request = RenderRequest::from_label(self, format);
        dispatch.render(&request).await
    }

    /// Parse a label definition from JSON.
    pub fn from_json(json: &str) -> ZebraResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pretty JSON definition of this label.
    pub fn to_json(&self) -> ZebraResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Text fields for `lines`, stepping by `increment` from `start`.
pub fn text_lines<I, S>(lines: I, start: (i32, i32), increment: (i32, i32)) -> Vec<Field>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let (mut x, mut y) = start;
    let mut fields = Vec::new();
    for line in lines {
        fields.push(Field::text(line).at(x, y));
        x = x.saturating_add(increment.0);
        y = y.saturating_add(increment.1);
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ZebraError;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_empty_label() {
        assert_eq!(Label::new().serialize(true, false), "^XA^XZ");
        assert_eq!(Label::new().serialize(true, true), "^XA\n^XZ");
        assert_eq!(Label::new().serialize(false, false), "");
    }

    #[test]
    fn test_order_preserved() {
        let a = Field::text("A").at(1, 1);
        let b = Field::font('0', 20);
        let c = Field::text("A").at(1, 1);
        let label = Label::new().add_fields([a.clone(), b.clone(), c.clone()]);
        let expected = format!("{}{}{}", a.render(), b.render(), c.render());
        assert_eq!(label.serialize(false, false), expected);
        assert_eq!(
            label.serialize(true, true),
            format!("^XA\n{}\n{}\n{}\n^XZ", a.render(), b.render(), c.render())
        );
    }

    #[test]
    fn test_add_texts_steps() {
        let label = Label::new().add_texts(["a", "b", "c"], (100, 960), (5, 50));
        let positions: Vec<(i32, i32)> = label
            .fields()
            .iter()
            .map(|f| (f.frame().x(), f.frame().y()))
            .collect();
        assert_eq!(positions, vec![(100, 960), (105, 1010), (110, 1060)]);
    }

    #[test]
    fn test_add_lines_default_step() {
        let label = Label::new().add_lines(["x", "y"], (50, 300));
        assert_eq!(label.fields()[1].frame().y(), 340);
    }

    #[test]
    fn test_replace_placeholder_splices_in_place() {
        let label = Label::new()
            .add_text("x", (0, 0))
            .set_placeholder("p")
            .add_text("y", (0, 0))
            .replace_placeholder("p", [Field::text("mid1"), Field::text("mid2")]);

        let direct = Label::new()
            .add_text("x", (0, 0))
            .add_field(Field::text("mid1"))
            .add_field(Field::text("mid2"))
            .add_text("y", (0, 0));

        assert_eq!(label.to_zpl(), direct.to_zpl());
    }

    #[test]
    fn test_replace_placeholder_without_match_is_noop() {
        let label = Label::new().add_text("x", (1, 2)).set_placeholder("p");
        let before = label.clone();
        let after = label.replace_placeholder("missing", [Field::text("z")]);
        assert_eq!(after, before);
        assert_eq!(after.to_zpl(), before.to_zpl());
    }

    #[test]
    fn test_replace_placeholder_first_match_only() {
        let label = Label::new()
            .set_placeholder("dup")
            .add_text("between", (0, 0))
            .set_placeholder("dup")
            .replace_placeholder("dup", [Field::text("filled")]);

        assert_eq!(label.len(), 3);
        assert_eq!(label.fields()[0].render(), "^FO0,0,0^FDfilled^FS");
        assert_eq!(label.fields()[2].identifier(), Some("dup"));
    }

    #[test]
    fn test_replace_placeholder_with_nothing_removes_it() {
        let label = Label::new()
            .set_placeholder("p")
            .replace_placeholder("p", Vec::new());
        assert!(label.is_empty());
    }

    #[test]
    fn test_merge_labels_appends_in_order() {
        let a = Label::new().add_text("a", (0, 0));
        let b = Label::new().add_text("b", (0, 0));
        let c = Label::new().add_text("c", (10, 10));
        let merged = Label::new().merge_labels([a.clone(), b.clone(), c.clone()]);
        let expected = Label::new().merge_label(a).merge_label(b).merge_label(c);
        assert_eq!(merged.to_zpl(), expected.to_zpl());
        assert_eq!(merged.fields()[2].frame().x(), 10);
    }

    #[test]
    fn test_merge_keeps_receiver_config() {
        let other = Label::new().with_resolution(Resolution::Dpmm12).add_text("x", (0, 0));
        let merged = Label::new().merge_label(other);
        assert_eq!(merged.resolution(), Resolution::Dpmm8);
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn test_draw_square() {
        let label = Label::new().draw_square((93, 93), 40);
        assert_eq!(label.serialize(false, false), "^FO93,93,0^GB40,40,40,B,0^FS");
    }

    #[test]
    fn test_draw_box_styled() {
        let label = Label::new().draw_box_styled((75, 75), (100, 100, 100), BoxColor::Black, 0, true);
        assert_eq!(label.serialize(false, false), "^FO75,75,0^FR^GB100,100,100,B,0^FS");
    }

    #[test]
    fn test_font_helpers() {
        let label = Label::new()
            .reset_font()
            .set_font_with_width('0', 40, 25);
        assert_eq!(label.serialize(false, true), "^CFA,30,\n^CF0,40,25");
    }

    #[test]
    fn test_configured_barcode() {
        let label = Label::new().draw_barcode_configured(
            Barcode::new("12345678"),
            (100, 550),
            BarcodeConfig::new(5, 2.0, 270),
        );
        assert_eq!(
            label.serialize(false, true),
            "^BY5,2,270\n^FO100,550,0^BCN,,Y,N,N,N^FD12345678^FS"
        );
    }

    #[test]
    fn test_comment_and_config() {
        let label = Label::new()
            .add_comment("hello")
            .configure_barcode(3, 2.5, 100);
        assert_eq!(label.serialize(false, false), "^FX hello^BY3,2.5,100");
    }

    #[test]
    fn test_metadata_builders() {
        let label = Label::new()
            .with_resolution(Resolution::Dpmm12)
            .with_size(LabelSize::metric(50.0, 25.0))
            .with_quality(Quality::Bitonal)
            .with_padding(1);
        assert_eq!(label.resolution(), Resolution::Dpmm12);
        assert_eq!(label.size(), LabelSize::inches(2, 1));
        assert_eq!(label.quality(), Quality::Bitonal);
        assert_eq!(label.padding(), 1);
        assert_eq!(label.config().max_dots(), (609, 304));
    }

    #[test]
    fn test_json_round_trip() {
        let label = Label::new()
            .set_font('0', 60)
            .draw_square((50, 50), 100)
            .add_text_inverted("hi", (10, 20))
            .set_placeholder("later")
            .draw_barcode(Barcode::new("1"), (5, 5));
        let json = label.to_json().unwrap();
        let back = Label::from_json(&json).unwrap();
        assert_eq!(back, label);
    }

    #[test]
    fn test_json_defaults() {
        let label = Label::from_json(r#"{"fields":[{"type":"text","content":"x","x":3}]}"#).unwrap();
        assert_eq!(label.config(), &LabelConfig::SHIPPING_4X6);
        assert_eq!(label.to_zpl(), "^XA^FO3,0,0^FDx^FS^XZ");
    }

    /// Records how often it was called and echoes the markup back.
    #[derive(Default)]
    struct CountingDispatch {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl RenderDispatch for CountingDispatch {
        async fn render(&self, request: &RenderRequest) -> ZebraResult<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(request.zpl.clone().into_bytes())
        }
    }

    #[tokio::test]
    async fn test_render_with_dispatches_markup() {
        let dispatch = CountingDispatch::default();
        let label = Label::new().add_text("x", (1, 1));
        let bytes = label.render_with(&dispatch, OutputFormat::Png, true).await.unwrap();
        assert_eq!(bytes, label.to_zpl().into_bytes());
        assert_eq!(dispatch.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_render_with_fails_fast_on_bounds() {
        let dispatch = CountingDispatch::default();
        let label = Label::new()
            .set_font_with_width('0', 30, 20)
            .add_text("too far", (800, 0));
        let err = label.render_with(&dispatch, OutputFormat::Pdf, true).await.unwrap_err();
        assert!(matches!(err, ZebraError::BoundsExceeded { used_x: 820, .. }));
        assert_eq!(dispatch.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_render_with_fails_fast_on_vertical_overflow() {
        let dispatch = CountingDispatch::default();
        let label = Label::new().set_font('0', 190).add_text("CA", (470, 1100));
        let err = label.render_with(&dispatch, OutputFormat::Png, true).await.unwrap_err();
        match err {
            ZebraError::BoundsExceeded {
                used_x,
                used_y,
                max_x,
                max_y,
            } => assert_eq!((used_x, used_y, max_x, max_y), (470, 1290, 812, 1219)),
            other => panic!("expected bounds error, got {other}"),
        }
        assert_eq!(dispatch.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_render_with_unchecked_skips_bounds() {
        let dispatch = CountingDispatch::default();
        let label = Label::new().draw_box((0, 0), (5000, 5000, 1));
        assert!(label.render_with(&dispatch, OutputFormat::Png, false).await.is_ok());
        assert_eq!(dispatch.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_invalid_json() {
        assert!(Label::from_json("{\"fields\": [{\"type\": \"hologram\"}]}").is_err());
    }
}
