use pretty_assertions::assert_eq;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::{NamedTempFile, TempDir};

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_toml2docs")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn expected(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).unwrap()
}

fn stdout_of(assert: assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

// -- single file mode --

#[test]
fn input_file_basic() {
    let assert = cmd()
        .args(["-i", &fixture_path("basic.toml")])
        .assert()
        .success();
    assert_eq!(stdout_of(assert), expected("basic.expected.md"));
}

#[test]
fn input_file_nested_tables() {
    let assert = cmd()
        .args(["-i", &fixture_path("nested.toml")])
        .assert()
        .success();
    assert_eq!(stdout_of(assert), expected("nested.expected.md"));
}

#[test]
fn input_file_array_tables() {
    let assert = cmd()
        .args(["-i", &fixture_path("array-table.toml")])
        .assert()
        .success();
    assert_eq!(stdout_of(assert), expected("array-table.expected.md"));
}

#[test]
fn input_file_extended_syntax() {
    let assert = cmd()
        .args(["-i", &fixture_path("extended.toml")])
        .assert()
        .success();
    assert_eq!(stdout_of(assert), expected("extended.expected.md"));
}

#[test]
fn array_tables_every_policy() {
    let assert = cmd()
        .args(["-i", &fixture_path("array-table.toml")])
        .args(["--array-tables", "every"])
        .assert()
        .success();
    let output = stdout_of(assert);
    assert_eq!(output.matches("| `[[upstream]]` |").count(), 2);
    assert!(output.contains("| `upstream[0].name` | String | `primary` | Server name. |"));
    assert!(output.contains("| `upstream[1].weight` | Integer | `1` | -- |"));
}

#[test]
fn custom_comment_prefix() {
    let assert = cmd()
        .args(["-i", &fixture_path("docs-comment-prefix.toml")])
        .args(["-p", "##"])
        .assert()
        .success();
    assert_eq!(stdout_of(assert), expected("docs-comment-prefix.expected.md"));
}

#[test]
fn output_file_is_written() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("config.md");

    cmd()
        .args(["-i", &fixture_path("basic.toml")])
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(
        std::fs::read_to_string(out).unwrap(),
        expected("basic.expected.md")
    );
}

#[test]
fn missing_input_file_fails() {
    cmd()
        .args(["-i", "/does/not/exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn invalid_toml_fails() {
    let mut input = NamedTempFile::with_suffix(".toml").unwrap();
    input.write_all(b"name = \n").unwrap();

    cmd()
        .args(["-i", input.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to document"));
}

#[test]
fn input_and_template_conflict() {
    cmd()
        .args(["-i", &fixture_path("basic.toml")])
        .args(["-t", &fixture_path("basic.toml")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only one of"));
}

// -- stdin mode --

#[test]
fn stdin_mode_produces_markdown() {
    let assert = cmd()
        .write_stdin("# Foo\nkey = \"v\"\n[t]\n# Bar\nx = 1")
        .assert()
        .success();
    assert_eq!(
        stdout_of(assert),
        "| Key | Type | Default | Descriptions |\n\
         | --- | -----| ------- | ----------- |\n\
         | `key` | String | `v` | Foo |\n\
         | `t` | -- | -- | -- |\n\
         | `t.x` | Integer | `1` | Bar |\n"
    );
}

#[test]
fn debug_dumps_node_stream() {
    let assert = cmd()
        .arg("--debug")
        .write_stdin("# doc\n[t]\nx = [1]\n")
        .assert()
        .success();
    assert_eq!(
        stdout_of(assert),
        "Comment: # doc\n\
         Table: [t]\n\
         Key: t\n\
         KeyValue: x = [1]\n\
         Array: [1]\n\
         Integer: [1]\n\
         Key: x\n"
    );
}

// -- template mode --

#[test]
fn template_mode_expands_directives() {
    let mut template = NamedTempFile::with_suffix(".md").unwrap();
    write!(
        template,
        "# Configuration\n\n{{{{ toml2docs \"{}\" }}}}\n\nSee also the defaults.\n\n\n",
        fixture_path("basic.toml")
    )
    .unwrap();

    let assert = cmd()
        .args(["-t", template.path().to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(
        stdout_of(assert),
        format!(
            "# Configuration\n\n{}\n\nSee also the defaults.\n",
            expected("basic.expected.md")
        )
    );
}

#[test]
fn template_with_missing_file_fails() {
    let mut template = NamedTempFile::with_suffix(".md").unwrap();
    template
        .write_all(b"{{ toml2docs \"/does/not/exist.toml\" }}\n")
        .unwrap();

    cmd()
        .args(["-t", template.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to expand template"));
}

// -- batch mode --

#[test]
fn batch_mode_writes_one_file_per_input() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("basic.toml"))
        .arg(fixture_path("nested.toml"))
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(dir.path().join("basic.md")).unwrap(),
        expected("basic.expected.md")
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join("nested.md")).unwrap(),
        expected("nested.expected.md")
    );
}

#[test]
fn batch_mode_requires_output() {
    cmd()
        .arg(fixture_path("basic.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output is required"));
}

#[test]
fn batch_mode_skips_invalid_files() {
    let inputs = TempDir::new().unwrap();
    std::fs::write(inputs.path().join("good.toml"), "x = 1\n").unwrap();
    std::fs::write(inputs.path().join("bad.toml"), "x = = 1\n").unwrap();
    let out = TempDir::new().unwrap();

    cmd()
        .args(["-o", out.path().to_str().unwrap()])
        .arg(format!("{}/*.toml", inputs.path().display()))
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping"));

    assert!(out.path().join("good.md").exists());
    assert!(!out.path().join("bad.md").exists());
}
