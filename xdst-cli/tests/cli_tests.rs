use indoc::indoc;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn xdst_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("xdst"))
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn write_project(root: &Path) {
    fs::write(
        root.join("XMLDotStringConfig.yaml"),
        indoc! {r#"
            rootPath: "res"
            translations:
              - from:
                  - values/strings.xml
                to:
                  - en.lproj/Localizable.strings
        "#},
    )
    .unwrap();
    fs::create_dir_all(root.join("res/values")).unwrap();
    fs::create_dir_all(root.join("res/en.lproj")).unwrap();
    fs::write(
        root.join("res/values/strings.xml"),
        indoc! {r#"
            <?xml version="1.0" encoding="utf-8"?>
            <resources>
                <string name="greeting">Hello</string>
                <string name="farewell">Goodbye</string>
            </resources>
        "#},
    )
    .unwrap();
    fs::write(
        root.join("res/en.lproj/Localizable.strings"),
        "/* App strings */\n\"greeting\" = \"Hi\";\n\"untouched\" = \"stays\";\n",
    )
    .unwrap();
}

#[test]
fn test_help_lists_flags() {
    let output = xdst_cmd().arg("--help").output().unwrap();
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Welcome to the XMl and Dot String resource transporter."));
    for flag in ["--add-new-entries", "--config", "--debug-mode", "--version"] {
        assert!(text.contains(flag), "missing {} in:\n{}", flag, text);
    }
}

#[test]
fn test_version_prints_crate_version() {
    let output = xdst_cmd().arg("--version").output().unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_flag_fails_with_illegal_argument() {
    let output = xdst_cmd().arg("--frobnicate").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("[ILLEGAL ARGUMENT] the argument --frobnicate is not allowed"));
    assert!(err.contains("--help"));
}

#[test]
fn test_config_flag_without_value_fails() {
    let output = xdst_cmd().arg("--config").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("[ILLEGAL ARGUMENT] the argument --config needs a value"));
    assert!(!err.contains("<PATH>"));
}

#[test]
fn test_missing_default_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = xdst_cmd().current_dir(temp_dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("[FILE NOT FOUND]"));
}

#[test]
fn test_default_config_in_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    write_project(temp_dir.path());

    let output = xdst_cmd().current_dir(temp_dir.path()).output().unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("res/en.lproj/Localizable.strings")).unwrap(),
        "/* App strings */\n\"greeting\" = \"Hello\";\n\"untouched\" = \"stays\";\n"
    );
}

#[test]
fn test_relative_config_flag_and_add_new_entries() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("project");
    fs::create_dir_all(&project).unwrap();
    write_project(&project);

    let output = xdst_cmd()
        .current_dir(temp_dir.path())
        .args([
            "--add-new-entries",
            "--config",
            "project/XMLDotStringConfig.yaml",
        ])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("[ADDITIONAL MODE]"));

    let strings = fs::read_to_string(project.join("res/en.lproj/Localizable.strings")).unwrap();
    assert_eq!(
        strings,
        "/* App strings */\n\"greeting\" = \"Hello\";\n\"untouched\" = \"stays\";\n\n\"farewell\" = \"Goodbye\";"
    );
}

#[test]
fn test_debug_mode_prints_tracker_report() {
    let temp_dir = TempDir::new().unwrap();
    write_project(temp_dir.path());
    let config = temp_dir.path().join("XMLDotStringConfig.yaml");

    let output = xdst_cmd()
        .args(["--debug-mode", "--config", config.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("Debug Mode selected."));
    assert!(text.contains("translation: 1"));
    assert!(text.contains("\tUnmoved Data:\n\t\ten.lproj/Localizable.strings\n\t\t\tuntouched\n"));
    assert!(text.contains("\tMoved Data:\n\t\ten.lproj/Localizable.strings\n\t\t\tgreeting\n"));
}

#[test]
fn test_invalid_destination_changes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    write_project(temp_dir.path());
    fs::write(
        temp_dir.path().join("XMLDotStringConfig.yaml"),
        indoc! {r#"
            rootPath: "res"
            translations:
              - from: [values/strings.xml]
                to: [en.lproj/Localizable.strings]
              - from: [values/strings.xml]
                to: [en.json]
        "#},
    )
    .unwrap();
    let before =
        fs::read_to_string(temp_dir.path().join("res/en.lproj/Localizable.strings")).unwrap();

    let output = xdst_cmd().current_dir(temp_dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("[ILLEGAL CONFIG] to: en.json"));
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("res/en.lproj/Localizable.strings")).unwrap(),
        before
    );
}
