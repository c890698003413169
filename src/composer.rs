// ABOUTME: Stateless layout helpers that turn layout intent into document primitives
// ABOUTME: Centralizes the deck's visual idioms: cards, accent bars, bullet lists, text boxes

use crate::color::Color;
use crate::document::{Alignment, Outline, Paragraph, Shape, ShapeKind, Slide};
use crate::units::{points, Emu, Geometry};

/// Outline width applied when a card border color is given.
pub const BORDER_WIDTH_PT: f64 = 1.0;

/// Height of an accent bar.
pub const ACCENT_BAR_HEIGHT_PT: f64 = 4.0;

const DEFAULT_FONT: &str = "Calibri";

/// Uniform styling for a text box paragraph.
#[derive(Debug, Clone)]
pub struct TextStyle {
    pub size: u32,
    pub color: Color,
    pub bold: bool,
    pub alignment: Alignment,
    pub font: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 18,
            color: Color::WHITE,
            bold: false,
            alignment: Alignment::Left,
            font: DEFAULT_FONT.to_string(),
        }
    }
}

impl TextStyle {
    /// Start from the defaults with the given font size in points.
    pub fn size(size: u32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn font(mut self, font: &str) -> Self {
        self.font = font.to_string();
        self
    }

    /// Build a paragraph carrying this style.
    pub fn paragraph(&self, text: &str) -> Paragraph {
        Paragraph {
            text: text.to_string(),
            size_pt: self.size,
            color: self.color,
            bold: self.bold,
            alignment: self.alignment,
            font: self.font.clone(),
            space_after_pt: None,
        }
    }
}

/// Styling for a bullet list: identical for every item, with a configurable
/// space after each paragraph.
#[derive(Debug, Clone)]
pub struct BulletStyle {
    pub size: u32,
    pub color: Color,
    pub spacing_pt: u32,
    pub font: String,
}

impl Default for BulletStyle {
    fn default() -> Self {
        Self {
            size: 16,
            color: Color::WHITE,
            spacing_pt: 6,
            font: DEFAULT_FONT.to_string(),
        }
    }
}

impl BulletStyle {
    /// Start from the defaults with the given font size in points.
    pub fn size(size: u32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn spacing(mut self, spacing_pt: u32) -> Self {
        self.spacing_pt = spacing_pt;
        self
    }

    fn paragraph(&self, text: &str) -> Paragraph {
        Paragraph {
            text: text.to_string(),
            size_pt: self.size,
            color: self.color,
            bold: false,
            alignment: Alignment::Left,
            font: self.font.clone(),
            space_after_pt: Some(self.spacing_pt),
        }
    }
}

/// Fill the slide's background with a solid color.
pub fn set_background(slide: &mut Slide, color: Color) {
    slide.set_background(color);
}

/// Add a rounded card. With a border color the card gets a 1-point outline,
/// otherwise the outline is suppressed entirely.
pub fn add_box<'a>(
    slide: &'a mut Slide,
    geometry: Geometry,
    fill: Color,
    border: Option<Color>,
) -> &'a mut Shape {
    let shape = slide.add_shape(ShapeKind::RoundedRectangle, geometry);
    shape.fill = Some(fill);
    shape.outline = border.map(|color| Outline {
        color,
        width_pt: BORDER_WIDTH_PT,
    });
    shape
}

/// Add a sharp-cornered filled rectangle with the outline suppressed.
pub fn add_rect<'a>(slide: &'a mut Slide, geometry: Geometry, fill: Color) -> &'a mut Shape {
    let shape = slide.add_shape(ShapeKind::Rectangle, geometry);
    shape.fill = Some(fill);
    shape
}

/// Add a single-paragraph word-wrapped text box.
pub fn add_text_box<'a>(
    slide: &'a mut Slide,
    geometry: Geometry,
    text: &str,
    style: &TextStyle,
) -> &'a mut Shape {
    let shape = slide.add_text_box(geometry);
    shape.frame_mut().push(style.paragraph(text));
    shape
}

/// Add a text box with one paragraph per item, in input order. An empty item
/// sequence produces a text region with zero paragraphs.
pub fn add_bullet_list<'a>(
    slide: &'a mut Slide,
    geometry: Geometry,
    items: &[&str],
    style: &BulletStyle,
) -> &'a mut Shape {
    let shape = slide.add_text_box(geometry);
    let frame = shape.frame_mut();
    for item in items {
        frame.push(style.paragraph(item));
    }
    shape
}

/// Attach a speaker note to the slide, overwriting any prior note.
pub fn add_notes(slide: &mut Slide, text: &str) {
    slide.set_notes(text);
}

/// Add a thin horizontal rectangle used as a visual section divider.
pub fn add_accent_bar<'a>(
    slide: &'a mut Slide,
    left: Emu,
    top: Emu,
    width: Emu,
    color: Color,
) -> &'a mut Shape {
    add_rect(
        slide,
        Geometry::new(left, top, width, points(ACCENT_BAR_HEIGHT_PT)),
        color,
    )
}
