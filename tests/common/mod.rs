use assert_cmd::Command;
use std::path::Path;

pub fn dumpr_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dumpr").unwrap();
    cmd.env_remove("DUMPR_ROOT");
    cmd.env_remove("DUMPR_LOG");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}

/// Initialize a workspace in `dir`
#[allow(dead_code)]
pub fn init_workspace(dir: &Path) {
    dumpr_cmd().arg("init").arg(dir).assert().success();
}

/// Add a note and return its short id as printed by `add`
#[allow(dead_code)]
pub fn add_note(dir: &Path, text: &str) -> String {
    let output = dumpr_cmd()
        .current_dir(dir)
        .arg("add")
        .arg(text)
        .output()
        .unwrap();
    assert!(output.status.success(), "add failed: {:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .trim_start_matches("Saved ")
        .split_whitespace()
        .next()
        .unwrap()
        .to_string()
}
