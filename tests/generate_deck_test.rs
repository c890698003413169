use std::fs;
use std::io::Read;
use std::process::{Command, Output};
use tempfile::TempDir;
use zip::ZipArchive;

fn run_command(args: &[&str]) -> Output {
    Command::new("cargo")
        .arg("run")
        .arg("--")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_generate_deck_command() {
    // Create temporary directory
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = temp_dir.path().join("deck.pptx");

    // Run command
    let output = run_command(&["-o", output_path.to_str().unwrap()]);

    // Check command executed successfully
    assert!(output.status.success(), "Command failed: {:?}", output);

    // Check console contract
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Presentation saved to:"),
        "Missing save confirmation: {}",
        stdout
    );
    assert!(
        stdout.contains("Total slides: 14"),
        "Missing slide count: {}",
        stdout
    );

    // Check output file exists and is not empty
    assert!(output_path.exists(), "PPTX file was not created");
    let metadata = fs::metadata(&output_path).expect("Failed to get file metadata");
    assert!(metadata.len() > 0, "PPTX file is empty");

    // Verify slide and notes parts within the PPTX archive
    let file = fs::File::open(&output_path).expect("Failed to open PPTX file");
    let mut archive = ZipArchive::new(file).expect("Failed to read PPTX as ZIP");
    let names: Vec<String> = (0..archive.len())
        .filter_map(|i| archive.by_index(i).ok().map(|f| f.name().to_string()))
        .collect();

    let slide_files = names
        .iter()
        .filter(|name| name.starts_with("ppt/slides/slide") && name.ends_with(".xml"))
        .count();
    assert_eq!(slide_files, 14, "Expected exactly fourteen slide XML files");

    let notes_files = names
        .iter()
        .filter(|name| name.starts_with("ppt/notesSlides/notesSlide") && name.ends_with(".xml"))
        .count();
    assert_eq!(notes_files, 14, "Expected a notes slide for every slide");

    // Every notes part must carry text
    for i in 1..=14 {
        let mut content = String::new();
        archive
            .by_name(&format!("ppt/notesSlides/notesSlide{}.xml", i))
            .expect("Missing notes slide")
            .read_to_string(&mut content)
            .expect("Failed to read notes slide");
        assert!(
            content.contains("<a:t>"),
            "Notes slide {} has no text run",
            i
        );
    }

    // Title slide carries the deck title
    let mut slide1 = String::new();
    archive
        .by_name("ppt/slides/slide1.xml")
        .expect("Missing slide 1")
        .read_to_string(&mut slide1)
        .expect("Failed to read slide 1");
    assert!(slide1.contains("GET SHIT DONE"), "Missing title text");
}

#[test]
fn test_output_path_env_override() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = temp_dir.path().join("env-deck.pptx");

    let output = Command::new("cargo")
        .arg("run")
        .env("DECK_OUTPUT_PATH", &output_path)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(output_path.exists(), "PPTX file was not created at override path");
}

#[test]
fn test_overwrites_existing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = temp_dir.path().join("deck.pptx");

    // Seed a stale file at the target path
    fs::write(&output_path, b"stale content").expect("Failed to seed file");

    let output = run_command(&["-o", output_path.to_str().unwrap()]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    // The stale file must have been replaced by a real archive
    let file = fs::File::open(&output_path).expect("Failed to open PPTX file");
    assert!(ZipArchive::new(file).is_ok(), "Existing file was not overwritten");
}
