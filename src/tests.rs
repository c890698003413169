use super::*;
use crate::composer::{self, BulletStyle, TextStyle};
use crate::deck;
use std::fs;
use std::io::Read;
use std::path::Path;
use tempfile::TempDir;

fn read_zip_entry(path: &Path, name: &str) -> String {
    let file = fs::File::open(path).expect("Failed to open archive");
    let mut archive = zip::ZipArchive::new(file).expect("Failed to read archive");
    let mut entry = archive.by_name(name).expect("Entry not found in archive");
    let mut content = String::new();
    entry
        .read_to_string(&mut content)
        .expect("Failed to read entry");
    content
}

#[test]
fn test_unit_conversions() {
    assert_eq!(inches(1.0), 914_400);
    assert_eq!(points(1.0), 12_700);
    assert_eq!(inches(0.5), 457_200);
}

#[test]
fn test_color_hex() {
    let navy = Color::new(0x1B, 0x2A, 0x4A);
    assert_eq!(navy.to_hex(), "1B2A4A");
    assert_eq!(navy.to_string(), "#1B2A4A");
    assert_eq!(Color::WHITE.to_hex(), "FFFFFF");
}

#[test]
fn test_geometry_validity() {
    assert!(Geometry::from_inches(0.0, 0.0, 1.0, 1.0).is_valid());
    assert!(!Geometry::new(-1, 0, 100, 100).is_valid());
    assert!(!Geometry::new(0, 0, -100, 100).is_valid());
}

#[test]
fn test_add_rect_round_trip() {
    let mut prs = Presentation::new("Test");
    let slide = prs.add_slide();
    let geometry = Geometry::from_inches(1.0, 2.0, 3.0, 0.5);
    composer::add_rect(slide, geometry, deck::TEAL);

    let shape = &prs.slides()[0].shapes()[0];
    assert_eq!(shape.kind, ShapeKind::Rectangle);
    assert_eq!(shape.geometry, geometry);
    assert_eq!(shape.fill, Some(deck::TEAL));
    assert!(shape.outline.is_none());
}

#[test]
fn test_rounded_box_suppresses_border_by_default() {
    let mut prs = Presentation::new("Test");
    let slide = prs.add_slide();
    let shape = composer::add_box(slide, Geometry::from_inches(1.0, 1.0, 2.0, 2.0), deck::CARD, None);

    assert_eq!(shape.kind, ShapeKind::RoundedRectangle);
    assert!(shape.outline.is_none());
}

#[test]
fn test_rounded_box_border_uses_default_width() {
    let mut prs = Presentation::new("Test");
    let slide = prs.add_slide();
    let shape = composer::add_box(
        slide,
        Geometry::from_inches(1.0, 1.0, 2.0, 2.0),
        deck::CARD,
        Some(deck::ORANGE),
    );

    let outline = shape.outline.expect("Border should be present");
    assert_eq!(outline.color, deck::ORANGE);
    assert_eq!(outline.width_pt, composer::BORDER_WIDTH_PT);
}

#[test]
fn test_text_box_is_single_paragraph() {
    let mut prs = Presentation::new("Test");
    let slide = prs.add_slide();
    let long_text = "A rather long line that would certainly wrap several times when rendered \
                     inside a narrow text box, yet it must remain a single paragraph.";
    let shape = composer::add_text_box(
        slide,
        Geometry::from_inches(0.5, 0.5, 2.0, 2.0),
        long_text,
        &TextStyle::default(),
    );

    let frame = shape.text.as_ref().expect("Text box must carry a frame");
    assert!(frame.word_wrap);
    assert_eq!(frame.paragraphs.len(), 1);
    assert_eq!(frame.paragraphs[0].text, long_text);
}

#[test]
fn test_text_box_newlines_stay_in_one_paragraph() {
    let mut prs = Presentation::new("Test");
    let slide = prs.add_slide();
    let shape = composer::add_text_box(
        slide,
        Geometry::from_inches(0.5, 0.5, 2.0, 2.0),
        "THIN\nORCHESTRATOR",
        &TextStyle::size(14).bold(),
    );

    assert_eq!(shape.text.as_ref().unwrap().paragraphs.len(), 1);
}

#[test]
fn test_text_style_defaults() {
    let paragraph = TextStyle::default().paragraph("hello");
    assert_eq!(paragraph.size_pt, 18);
    assert_eq!(paragraph.color, Color::WHITE);
    assert!(!paragraph.bold);
    assert_eq!(paragraph.alignment, Alignment::Left);
    assert_eq!(paragraph.font, "Calibri");
    assert!(paragraph.space_after_pt.is_none());
}

#[test]
fn test_bullet_list_empty_has_zero_paragraphs() {
    let mut prs = Presentation::new("Test");
    let slide = prs.add_slide();
    let shape = composer::add_bullet_list(
        slide,
        Geometry::from_inches(0.5, 0.5, 4.0, 3.0),
        &[],
        &BulletStyle::default(),
    );

    let frame = shape.text.as_ref().unwrap();
    assert!(frame.paragraphs.is_empty());
}

#[test]
fn test_bullet_list_preserves_order_and_style() {
    let mut prs = Presentation::new("Test");
    let slide = prs.add_slide();
    let items = ["first", "second", "third"];
    let shape = composer::add_bullet_list(
        slide,
        Geometry::from_inches(0.5, 0.5, 4.0, 3.0),
        &items,
        &BulletStyle::size(18).color(deck::SOFT_WHITE).spacing(14),
    );

    let frame = shape.text.as_ref().unwrap();
    assert_eq!(frame.paragraphs.len(), 3);
    for (paragraph, item) in frame.paragraphs.iter().zip(items.iter()) {
        assert_eq!(paragraph.text, *item);
        assert_eq!(paragraph.size_pt, 18);
        assert_eq!(paragraph.color, deck::SOFT_WHITE);
        assert_eq!(paragraph.space_after_pt, Some(14));
    }
}

#[test]
fn test_notes_overwrite_not_append() {
    let mut prs = Presentation::new("Test");
    let slide = prs.add_slide();
    composer::add_notes(slide, "first note");
    composer::add_notes(slide, "second note");

    assert_eq!(slide.notes(), Some("second note"));
}

#[test]
fn test_accent_bar_height() {
    let mut prs = Presentation::new("Test");
    let slide = prs.add_slide();
    let shape = composer::add_accent_bar(slide, inches(0.8), inches(1.2), inches(3.0), deck::TEAL);

    assert_eq!(shape.kind, ShapeKind::Rectangle);
    assert_eq!(shape.geometry.height, points(composer::ACCENT_BAR_HEIGHT_PT));
    assert_eq!(shape.fill, Some(deck::TEAL));
}

#[test]
fn test_deck_has_fourteen_slides_each_with_notes() {
    let prs = build_deck("Get Shit Done Framework");

    assert_eq!(prs.slide_count(), 14);
    for (i, slide) in prs.slides().iter().enumerate() {
        let notes = slide.notes().unwrap_or("");
        assert!(!notes.is_empty(), "Slide {} is missing speaker notes", i + 1);
        assert!(slide.background.is_some(), "Slide {} has no background", i + 1);
        assert!(!slide.shapes().is_empty(), "Slide {} has no shapes", i + 1);
    }
}

#[test]
fn test_write_pptx_rejects_negative_geometry() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("bad.pptx");

    let mut prs = Presentation::new("Test");
    let slide = prs.add_slide();
    composer::add_rect(slide, Geometry::new(0, 0, -100, 100), deck::TEAL);

    let result = write_pptx(&prs, &output);
    assert!(matches!(result, Err(DeckError::ValidationError(_))));
    assert!(!output.exists(), "No file should be written for invalid input");
}

#[test]
fn test_write_pptx_rejects_empty_title() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("untitled.pptx");

    let mut prs = Presentation::new("   ");
    prs.add_slide();

    let result = write_pptx(&prs, &output);
    assert!(matches!(result, Err(DeckError::ValidationError(_))));
}

#[test]
fn test_write_pptx_produces_readable_archive() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("deck.pptx");

    let prs = build_deck("Get Shit Done Framework");
    write_pptx(&prs, &output).expect("Failed to write PPTX");

    let presentation = read_zip_entry(&output, "ppt/presentation.xml");
    assert_eq!(presentation.matches("<p:sldId ").count(), 14);

    let slide1 = read_zip_entry(&output, "ppt/slides/slide1.xml");
    assert!(slide1.contains("GET SHIT DONE"));
    assert!(slide1.contains(r#"<a:srgbClr val="0F1A33"/>"#));

    let notes1 = read_zip_entry(&output, "ppt/notesSlides/notesSlide1.xml");
    assert!(notes1.contains("meta-prompting"));

    let content_types = read_zip_entry(&output, "[Content_Types].xml");
    assert!(content_types.contains("/ppt/slides/slide14.xml"));
    assert!(content_types.contains("/ppt/notesSlides/notesSlide14.xml"));
}

#[test]
fn test_write_pptx_escapes_text() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("escaped.pptx");

    let mut prs = Presentation::new("Escape & Test");
    let slide = prs.add_slide();
    composer::add_text_box(
        slide,
        Geometry::from_inches(1.0, 1.0, 4.0, 1.0),
        "State persistence & recovery <3",
        &TextStyle::default(),
    );
    write_pptx(&prs, &output).expect("Failed to write PPTX");

    let slide1 = read_zip_entry(&output, "ppt/slides/slide1.xml");
    assert!(slide1.contains("State persistence &amp; recovery &lt;3"));
    assert!(!slide1.contains("recovery <3"));

    let core = read_zip_entry(&output, "docProps/core.xml");
    assert!(core.contains("Escape &amp; Test"));
}

#[test]
fn test_write_pptx_alignment_and_breaks() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("styles.pptx");

    let mut prs = Presentation::new("Styles");
    let slide = prs.add_slide();
    composer::add_text_box(
        slide,
        Geometry::from_inches(1.0, 1.0, 4.0, 1.0),
        "top\nbottom",
        &TextStyle::size(14).align(Alignment::Center),
    );
    composer::add_text_box(
        slide,
        Geometry::from_inches(1.0, 3.0, 4.0, 1.0),
        "right aligned",
        &TextStyle::size(14).align(Alignment::Right),
    );
    write_pptx(&prs, &output).expect("Failed to write PPTX");

    let slide1 = read_zip_entry(&output, "ppt/slides/slide1.xml");
    assert!(slide1.contains(r#"algn="ctr""#));
    assert!(slide1.contains(r#"algn="r""#));
    assert!(slide1.contains("<a:br/>"));
    // A line break must not create a second paragraph in the first box
    assert_eq!(slide1.matches("<a:t>top</a:t>").count(), 1);
}

#[test]
fn test_write_pptx_empty_bullet_region() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("empty-list.pptx");

    let mut prs = Presentation::new("Empty");
    let slide = prs.add_slide();
    composer::add_bullet_list(
        slide,
        Geometry::from_inches(1.0, 1.0, 4.0, 2.0),
        &[],
        &BulletStyle::default(),
    );
    write_pptx(&prs, &output).expect("Failed to write PPTX");

    let slide1 = read_zip_entry(&output, "ppt/slides/slide1.xml");
    assert!(slide1.contains("<a:p/>"));
}
