//! CLI smoke tests

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn icon_tree() -> TempDir {
    let root = TempDir::new().expect("icon dir");
    fs::create_dir(root.path().join("Outline")).expect("outline dir");
    fs::create_dir(root.path().join("Filled")).expect("filled dir");
    fs::write(
        root.path().join("Outline").join("arrow-up.svg"),
        r#"<svg viewBox="0 0 24 24"><path d="M12 19V5"/></svg>"#,
    )
    .expect("outline svg");
    fs::write(
        root.path().join("Filled").join("arrow-up.svg"),
        r##"<svg viewBox="0 0 24 24"><path d="M12 19V5" fill="#000"/></svg>"##,
    )
    .expect("filled svg");
    root
}

#[test]
fn generates_modules_and_manifest() {
    let icons = icon_tree();
    let out = TempDir::new().expect("out dir");

    Command::cargo_bin("icongen")
        .expect("binary")
        .args(["--icons"])
        .arg(icons.path())
        .arg("--output")
        .arg(out.path())
        .assert()
        .success();

    let module = fs::read_to_string(out.path().join("ArrowUp.tsx")).expect("module");
    assert!(module.contains("export default ArrowUp;"));

    let manifest = fs::read_to_string(out.path().join("index.ts")).expect("manifest");
    assert_eq!(
        manifest,
        "export { default as ArrowUp } from './ArrowUp';\n"
    );
}

#[test]
fn missing_icons_dir_fails() {
    let out = TempDir::new().expect("out dir");

    Command::cargo_bin("icongen")
        .expect("binary")
        .args(["--icons", "does/not/exist", "--output"])
        .arg(out.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("icon generation failed"));
}

#[test]
fn malformed_icon_yields_failure_exit_but_generates_rest() {
    let icons = icon_tree();
    fs::write(
        icons.path().join("Outline").join("broken.svg"),
        "<svg><path d='M0 0'",
    )
    .expect("broken outline");
    fs::write(
        icons.path().join("Filled").join("broken.svg"),
        "<svg></svg>",
    )
    .expect("broken filled");
    let out = TempDir::new().expect("out dir");

    Command::cargo_bin("icongen")
        .expect("binary")
        .arg("--icons")
        .arg(icons.path())
        .arg("--output")
        .arg(out.path())
        .assert()
        .failure();

    assert!(out.path().join("ArrowUp.tsx").is_file());
    assert!(!out.path().join("Broken.tsx").exists());
}
