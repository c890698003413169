// ABOUTME: PPTX serialization module for the gsd-deck application
// ABOUTME: Writes the in-memory presentation model out as OOXML parts in a ZIP archive

use crate::document::{Alignment, Paragraph, Presentation, Shape, ShapeKind, Slide, TextFrame};
use crate::errors::{DeckError, Result};
use crate::units::points;
use crate::utils;
use log::info;
use quick_xml::escape::escape;
use std::fs;
use std::io::Write;
use std::path::Path;
use zip::{write::FileOptions, ZipWriter};

/// Serialize the presentation to a PPTX file at the given path, overwriting
/// any existing file there.
pub fn write_pptx(prs: &Presentation, output_file: &Path) -> Result<()> {
    info!("Writing PPTX to {:?}", output_file);

    validate_presentation(prs)?;

    // Ensure parent directory for output file exists
    utils::ensure_parent_directory_exists(output_file)?;

    let file = fs::File::create(output_file).map_err(DeckError::FileWriteError)?;
    let mut zip = ZipWriter::new(file);

    info!("Creating PPTX structure: [Content_Types].xml");
    zip.start_file("[Content_Types].xml", FileOptions::default())?;
    zip.write_all(content_types_xml(prs).as_bytes())?;

    info!("Creating PPTX structure: _rels/.rels");
    zip.start_file("_rels/.rels", FileOptions::default())?;
    let rels = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>
    <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
    <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#;
    zip.write_all(rels.as_bytes())?;

    info!("Creating PPTX structure: docProps/app.xml");
    zip.start_file("docProps/app.xml", FileOptions::default())?;
    let app_xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
    <Application>gsd-deck</Application>
    <Slides>{}</Slides>
</Properties>"#,
        prs.slide_count()
    );
    zip.write_all(app_xml.as_bytes())?;

    info!("Creating PPTX structure: docProps/core.xml");
    zip.start_file("docProps/core.xml", FileOptions::default())?;
    let core_xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
    <dc:title>{}</dc:title>
    <dc:creator>gsd-deck</dc:creator>
    <dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>
    <cp:revision>1</cp:revision>
</cp:coreProperties>"#,
        escape(&prs.title),
        chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
    );
    zip.write_all(core_xml.as_bytes())?;

    info!("Creating PPTX structure: ppt/_rels/presentation.xml.rels");
    zip.start_file("ppt/_rels/presentation.xml.rels", FileOptions::default())?;

    let mut pres_rels = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
"#,
    );
    for i in 1..=prs.slide_count() {
        pres_rels.push_str(&format!(
            r#"    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide{}.xml"/>"#,
            i, i
        ));
        pres_rels.push('\n');
    }
    pres_rels.push_str("</Relationships>");
    zip.write_all(pres_rels.as_bytes())?;

    info!("Creating PPTX structure: ppt/presentation.xml");
    zip.start_file("ppt/presentation.xml", FileOptions::default())?;
    let presentation_xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
    <p:sldIdLst>
{slide_ids}
    </p:sldIdLst>
    <p:sldSz cx="{cx}" cy="{cy}"/>
    <p:notesSz cx="6858000" cy="9144000"/>
</p:presentation>"#,
        slide_ids = (1..=prs.slide_count())
            .map(|i| format!(r#"        <p:sldId id="{}" r:id="rId{}"/>"#, 255 + i, i))
            .collect::<Vec<String>>()
            .join("\n"),
        cx = prs.slide_width,
        cy = prs.slide_height
    );
    zip.write_all(presentation_xml.as_bytes())?;

    for (i, slide) in prs.slides().iter().enumerate() {
        let slide_num = i + 1;
        info!("Writing slide {} of {}", slide_num, prs.slide_count());

        if slide.notes().is_some() {
            zip.start_file(
                format!("ppt/slides/_rels/slide{}.xml.rels", slide_num),
                FileOptions::default(),
            )?;
            let slide_rels = format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/notesSlide" Target="../notesSlides/notesSlide{}.xml"/>
</Relationships>"#,
                slide_num
            );
            zip.write_all(slide_rels.as_bytes())?;
        }

        zip.start_file(
            format!("ppt/slides/slide{}.xml", slide_num),
            FileOptions::default(),
        )?;
        zip.write_all(slide_xml(slide).as_bytes())?;

        if let Some(notes) = slide.notes() {
            zip.start_file(
                format!("ppt/notesSlides/_rels/notesSlide{}.xml.rels", slide_num),
                FileOptions::default(),
            )?;
            let notes_rels = format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="../slides/slide{}.xml"/>
</Relationships>"#,
                slide_num
            );
            zip.write_all(notes_rels.as_bytes())?;

            zip.start_file(
                format!("ppt/notesSlides/notesSlide{}.xml", slide_num),
                FileOptions::default(),
            )?;
            zip.write_all(notes_xml(notes).as_bytes())?;
        }
    }

    info!("Finalizing PPTX file");
    zip.finish()?;

    info!("PPTX file created at {:?}", output_file);
    Ok(())
}

/// Reject malformed input before any bytes are written.
fn validate_presentation(prs: &Presentation) -> Result<()> {
    if prs.title.trim().is_empty() {
        return Err(DeckError::ValidationError(
            "Presentation title must not be empty".to_string(),
        ));
    }
    for (i, slide) in prs.slides().iter().enumerate() {
        for shape in slide.shapes() {
            if !shape.geometry.is_valid() {
                return Err(DeckError::ValidationError(format!(
                    "Slide {} has a shape with negative geometry: {:?}",
                    i + 1,
                    shape.geometry
                )));
            }
        }
    }
    Ok(())
}

fn content_types_xml(prs: &Presentation) -> String {
    let mut overrides = String::new();
    for i in 1..=prs.slide_count() {
        overrides.push_str(&format!(
            r#"    <Override PartName="/ppt/slides/slide{}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#,
            i
        ));
        overrides.push('\n');
    }
    for (i, slide) in prs.slides().iter().enumerate() {
        if slide.notes().is_some() {
            overrides.push_str(&format!(
                r#"    <Override PartName="/ppt/notesSlides/notesSlide{}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.notesSlide+xml"/>"#,
                i + 1
            ));
            overrides.push('\n');
        }
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="xml" ContentType="application/xml"/>
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
    <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
    <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
{overrides}</Types>"#
    )
}

fn slide_xml(slide: &Slide) -> String {
    let background = match slide.background {
        Some(color) => format!(
            "        <p:bg>\n            <p:bgPr>\n                <a:solidFill>\n                    <a:srgbClr val=\"{}\"/>\n                </a:solidFill>\n                <a:effectLst/>\n            </p:bgPr>\n        </p:bg>\n",
            color.to_hex()
        ),
        None => String::new(),
    };

    let shapes = slide
        .shapes()
        .iter()
        .enumerate()
        .map(|(i, shape)| shape_xml(shape, i + 2))
        .collect::<Vec<String>>()
        .join("\n");

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
    <p:cSld>
{background}        <p:spTree>
            <p:nvGrpSpPr>
                <p:cNvPr id="1" name=""/>
                <p:cNvGrpSpPr/>
                <p:nvPr/>
            </p:nvGrpSpPr>
            <p:grpSpPr>
                <a:xfrm>
                    <a:off x="0" y="0"/>
                    <a:ext cx="0" cy="0"/>
                    <a:chOff x="0" y="0"/>
                    <a:chExt cx="0" cy="0"/>
                </a:xfrm>
            </p:grpSpPr>
{shapes}
        </p:spTree>
    </p:cSld>
    <p:clrMapOvr>
        <a:masterClrMapping/>
    </p:clrMapOvr>
</p:sld>"#
    )
}

fn shape_xml(shape: &Shape, id: usize) -> String {
    let (name, prst) = match shape.kind {
        ShapeKind::Rectangle => ("Rectangle", "rect"),
        ShapeKind::RoundedRectangle => ("Rounded Rectangle", "roundRect"),
        ShapeKind::Oval => ("Oval", "ellipse"),
        ShapeKind::TextBox => ("TextBox", "rect"),
    };
    let tx_box = if shape.kind == ShapeKind::TextBox {
        r#" txBox="1""#
    } else {
        ""
    };

    let fill = match shape.fill {
        Some(color) => format!(
            "                    <a:solidFill>\n                        <a:srgbClr val=\"{}\"/>\n                    </a:solidFill>\n",
            color.to_hex()
        ),
        None => "                    <a:noFill/>\n".to_string(),
    };

    // Autoshapes without an outline get it suppressed explicitly; text boxes
    // simply carry no line element at all.
    let line = match (&shape.outline, shape.kind) {
        (Some(outline), _) => format!(
            "                    <a:ln w=\"{}\">\n                        <a:solidFill>\n                            <a:srgbClr val=\"{}\"/>\n                        </a:solidFill>\n                    </a:ln>\n",
            points(outline.width_pt),
            outline.color.to_hex()
        ),
        (None, ShapeKind::TextBox) => String::new(),
        (None, _) => "                    <a:ln>\n                        <a:noFill/>\n                    </a:ln>\n".to_string(),
    };

    let body = match &shape.text {
        Some(frame) => tx_body_xml(frame),
        None => String::new(),
    };

    format!(
        r#"            <p:sp>
                <p:nvSpPr>
                    <p:cNvPr id="{id}" name="{name} {id}"/>
                    <p:cNvSpPr{tx_box}/>
                    <p:nvPr/>
                </p:nvSpPr>
                <p:spPr>
                    <a:xfrm>
                        <a:off x="{x}" y="{y}"/>
                        <a:ext cx="{cx}" cy="{cy}"/>
                    </a:xfrm>
                    <a:prstGeom prst="{prst}">
                        <a:avLst/>
                    </a:prstGeom>
{fill}{line}                </p:spPr>
{body}            </p:sp>"#,
        id = id,
        name = name,
        tx_box = tx_box,
        x = shape.geometry.left,
        y = shape.geometry.top,
        cx = shape.geometry.width,
        cy = shape.geometry.height,
        prst = prst,
        fill = fill,
        line = line,
        body = body,
    )
}

fn tx_body_xml(frame: &TextFrame) -> String {
    let wrap = if frame.word_wrap { "square" } else { "none" };

    // The schema requires at least one paragraph element per text body.
    let paragraphs = if frame.paragraphs.is_empty() {
        "                    <a:p/>\n".to_string()
    } else {
        frame
            .paragraphs
            .iter()
            .map(paragraph_xml)
            .collect::<String>()
    };

    format!(
        "                <p:txBody>\n                    <a:bodyPr wrap=\"{}\"/>\n                    <a:lstStyle/>\n{}                </p:txBody>\n",
        wrap, paragraphs
    )
}

fn paragraph_xml(paragraph: &Paragraph) -> String {
    let algn = match paragraph.alignment {
        Alignment::Left => "l",
        Alignment::Center => "ctr",
        Alignment::Right => "r",
    };
    let spacing = match paragraph.space_after_pt {
        Some(pt) => format!(
            r#"<a:spcAft><a:spcPts val="{}"/></a:spcAft>"#,
            pt * 100
        ),
        None => String::new(),
    };
    let ppr = if spacing.is_empty() {
        format!(r#"<a:pPr algn="{}"/>"#, algn)
    } else {
        format!(r#"<a:pPr algn="{}">{}</a:pPr>"#, algn, spacing)
    };

    let bold = if paragraph.bold { r#" b="1""# } else { "" };
    let rpr = format!(
        r#"<a:rPr lang="en-US" sz="{}"{} dirty="0"><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:latin typeface="{}"/></a:rPr>"#,
        paragraph.size_pt * 100,
        bold,
        paragraph.color.to_hex(),
        escape(&paragraph.font)
    );

    // Embedded newlines become soft line breaks within the same paragraph.
    let runs = paragraph
        .text
        .split('\n')
        .map(|segment| format!("<a:r>{}<a:t>{}</a:t></a:r>", rpr, escape(segment)))
        .collect::<Vec<String>>()
        .join("<a:br/>");

    format!("                    <a:p>{}{}</a:p>\n", ppr, runs)
}

fn notes_xml(text: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:notes xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
    <p:cSld>
        <p:spTree>
            <p:nvGrpSpPr>
                <p:cNvPr id="1" name=""/>
                <p:cNvGrpSpPr/>
                <p:nvPr/>
            </p:nvGrpSpPr>
            <p:grpSpPr>
                <a:xfrm>
                    <a:off x="0" y="0"/>
                    <a:ext cx="0" cy="0"/>
                    <a:chOff x="0" y="0"/>
                    <a:chExt cx="0" cy="0"/>
                </a:xfrm>
            </p:grpSpPr>
            <p:sp>
                <p:nvSpPr>
                    <p:cNvPr id="2" name="Notes Placeholder 2"/>
                    <p:cNvSpPr>
                        <a:spLocks noGrp="1"/>
                    </p:cNvSpPr>
                    <p:nvPr>
                        <p:ph type="body" idx="1"/>
                    </p:nvPr>
                </p:nvSpPr>
                <p:spPr/>
                <p:txBody>
                    <a:bodyPr/>
                    <a:lstStyle/>
                    <a:p>
                        <a:r>
                            <a:rPr lang="en-US" dirty="0"/>
                            <a:t>{}</a:t>
                        </a:r>
                    </a:p>
                </p:txBody>
            </p:sp>
        </p:spTree>
    </p:cSld>
    <p:clrMapOvr>
        <a:masterClrMapping/>
    </p:clrMapOvr>
</p:notes>"#,
        escape(text)
    )
}
