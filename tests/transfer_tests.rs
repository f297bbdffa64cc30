//! Integration tests for export and import

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{add_note, dumpr_cmd, init_workspace};

fn workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    temp
}

fn import(dir: &std::path::Path, file: &std::path::Path) -> assert_cmd::assert::Assert {
    dumpr_cmd()
        .current_dir(dir)
        .arg("import")
        .arg(file)
        .arg("--yes")
        .assert()
}

#[test]
fn test_export_writes_versioned_document() {
    let temp = workspace();
    add_note(temp.path(), "first #a");
    add_note(temp.path(), "second #b");
    let out = temp.path().join("backup").join("dump.json");

    dumpr_cmd()
        .current_dir(temp.path())
        .arg("export")
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 entries"));

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["version"], 1);
    assert!(json["exportedAt"].is_i64());
    assert_eq!(json["entries"].as_array().unwrap().len(), 2);
}

#[test]
fn test_export_default_filename() {
    let temp = workspace();
    add_note(temp.path(), "only one");

    dumpr_cmd()
        .current_dir(temp.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 entry to dumpr-export-"));

    let exported: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|name| name.starts_with("dumpr-export-") && name.ends_with(".json"))
        .collect();
    assert_eq!(exported.len(), 1);
}

#[test]
fn test_export_stdout() {
    let temp = workspace();
    add_note(temp.path(), "piped out #json");

    dumpr_cmd()
        .current_dir(temp.path())
        .args(["export", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\": 1"))
        .stdout(predicate::str::contains("\"piped out #json\""));
}

#[test]
fn test_round_trip_into_empty_workspace() {
    let source = workspace();
    add_note(source.path(), "keep this #one");
    add_note(source.path(), "and this #two");
    let file = source.path().join("dump.json");

    dumpr_cmd()
        .current_dir(source.path())
        .arg("export")
        .arg("-o")
        .arg(&file)
        .assert()
        .success();

    let target = workspace();
    import(target.path(), &file)
        .success()
        .stdout("Import done. Added 2, updated 0, skipped 0.\n");

    let export = |dir: &std::path::Path| {
        let output = dumpr_cmd()
            .current_dir(dir)
            .args(["export", "--stdout"])
            .output()
            .unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        doc["entries"].clone()
    };
    assert_eq!(export(source.path()), export(target.path()));
}

#[test]
fn test_import_last_write_wins() {
    let temp = workspace();
    let file = temp.path().join("import.json");

    fs::write(
        &file,
        r#"[{"id": "note-1", "content": "v2 #fresh", "createdAt": 1000, "updatedAt": 2000}]"#,
    )
    .unwrap();
    import(temp.path(), &file)
        .success()
        .stdout("Import done. Added 1, updated 0, skipped 0.\n");

    fs::write(
        &file,
        r#"{"entries": [
            {"id": "note-1", "content": "v1 #stale", "createdAt": 1000, "updatedAt": 1500},
            {"id": "note-2", "content": "other", "createdAt": 3000}
        ]}"#,
    )
    .unwrap();
    import(temp.path(), &file)
        .success()
        .stdout("Import done. Added 1, updated 0, skipped 1.\n");

    fs::write(
        &file,
        r#"[{"id": "note-1", "content": "v2 tie #tie", "createdAt": 1000, "updatedAt": 2000}]"#,
    )
    .unwrap();
    import(temp.path(), &file)
        .success()
        .stdout("Import done. Added 0, updated 1, skipped 0.\n");

    dumpr_cmd()
        .current_dir(temp.path())
        .args(["show", "note-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("v2 tie #tie"));
}

#[test]
fn test_import_rederives_tags() {
    let temp = workspace();
    let file = temp.path().join("import.json");
    fs::write(
        &file,
        r#"[{"id": "x", "content": "real #tag", "tags": ["bogus"], "title": "wrong"}]"#,
    )
    .unwrap();

    import(temp.path(), &file).success();

    dumpr_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .assert()
        .success()
        .stdout("1  #tag\n");
}

#[test]
fn test_import_requires_confirmation() {
    let temp = workspace();
    let file = temp.path().join("import.json");
    fs::write(&file, r#"[{"id": "x", "content": "hello"}]"#).unwrap();

    dumpr_cmd()
        .current_dir(temp.path())
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Re-run with --yes"));

    dumpr_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing here yet."));
}

#[test]
fn test_import_invalid_json() {
    let temp = workspace();
    let file = temp.path().join("broken.json");
    fs::write(&file, "{ entries: ").unwrap();

    import(temp.path(), &file)
        .code(5)
        .stderr(predicate::str::contains("Import failed. Invalid JSON file."));
}

#[test]
fn test_import_unrecognized_shape() {
    let temp = workspace();
    let file = temp.path().join("shape.json");
    fs::write(&file, r#"{"notes": []}"#).unwrap();

    import(temp.path(), &file)
        .code(5)
        .stderr(predicate::str::contains(
            "Import failed. File format not recognized.",
        ));
}

#[test]
fn test_import_out_of_range_timestamps_stay_listable() {
    let temp = workspace();
    let file = temp.path().join("extreme.json");
    fs::write(
        &file,
        r#"[
            {"id": "ancient", "content": "very old", "createdAt": -1e19},
            {"id": "distant", "content": "far future", "createdAt": 1e19}
        ]"#,
    )
    .unwrap();

    import(temp.path(), &file)
        .success()
        .stdout("Import done. Added 2, updated 0, skipped 0.\n");

    dumpr_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("very old"))
        .stdout(predicate::str::contains("far future"))
        .stdout(predicate::str::contains("2 results"));

    dumpr_cmd()
        .current_dir(temp.path())
        .args(["show", "ancient"])
        .assert()
        .success()
        .stdout(predicate::str::contains("y ago • no tags"));
}

#[test]
fn test_import_non_utf8_file_is_invalid_json() {
    let temp = workspace();
    let file = temp.path().join("binary.json");
    fs::write(&file, [0xff, 0xfe, b'[', b']']).unwrap();

    import(temp.path(), &file)
        .code(5)
        .stderr(predicate::str::contains("Import failed. Invalid JSON file."));
}
