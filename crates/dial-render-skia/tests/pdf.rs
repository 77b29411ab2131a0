// File: crates/dial-render-skia/tests/pdf.rs
// Purpose: End-to-end PDF render through Skia, plus failure paths that must leave no file behind.

use std::path::PathBuf;

use dial_core::{AnchorTable, Dial, DialConfig};
use dial_render_skia::{fonts, initialize_rendering_environment, RenderEnvironment, SkiaPdfBackend};

fn backend(dir: &str) -> SkiaPdfBackend {
    SkiaPdfBackend::new(RenderEnvironment { output_dir: PathBuf::from(dir), font_files: Vec::new() })
}

#[test]
fn render_smoke_pdf() {
    let out = PathBuf::from("target/test_out/smoke_dial.pdf");
    let _ = std::fs::remove_file(&out);

    let dial = Dial::new(DialConfig::default(), None).unwrap();
    let plan = dial.render(&backend("target/test_out"), &out).expect("render should succeed");
    assert_eq!(plan.major.len(), 21);

    let bytes = std::fs::read(&out).expect("output exists");
    assert!(bytes.starts_with(b"%PDF"), "should be a PDF header");
    assert!(!PathBuf::from("target/test_out/smoke_dial.pdf.partial").exists());
}

#[test]
fn user_anchor_dial_renders() {
    let out = PathBuf::from("target/test_out/anchored_dial.pdf");
    let anchors: AnchorTable = [(0.0, 0.0), (20.0, 30.0), (200.0, 270.0)].into_iter().collect();
    let config = DialConfig { font_family: "NoSuchFamily".into(), ..DialConfig::default() };

    Dial::new(config, Some(anchors)).unwrap().render(&backend("target/test_out"), &out).expect("render");
    assert!(std::fs::metadata(&out).expect("output exists").len() > 0);
}

#[test]
fn unwritable_target_leaves_no_file() {
    let blocker = PathBuf::from("target/test_out/blocker.txt");
    std::fs::create_dir_all("target/test_out").unwrap();
    std::fs::write(&blocker, b"not a directory").unwrap();
    let out = blocker.join("dial.pdf");

    let dial = Dial::new(DialConfig::default(), None).unwrap();
    assert!(dial.render(&backend("target/test_out"), &out).is_err());
    assert!(!out.exists());
}

#[test]
fn environment_setup_is_idempotent() {
    let env = RenderEnvironment { output_dir: PathBuf::from("target/test_out/env_dials"), font_files: Vec::new() };
    initialize_rendering_environment(&env).expect("first");
    initialize_rendering_environment(&env).expect("second");
    assert!(env.output_dir.is_dir());
}

#[test]
fn missing_font_file_is_not_registered() {
    let err = fonts::register_font_file("MissingFace", std::path::Path::new("target/test_out/missing.ttf"));
    assert!(err.is_err());
    assert!(!fonts::is_registered("MissingFace"));
}
