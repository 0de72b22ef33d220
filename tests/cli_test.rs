//! CLI integration tests for the jsonschema-ast binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("jsonschema-ast"))
}

// Helper to create a temp schema file
fn write_temp_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

mod inspect_command {
    use super::*;

    #[test]
    fn prints_summary() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(
            &dir,
            "schema.json",
            r#"{
                "title": "Pet",
                "type": "object",
                "required": ["id", "name"],
                "properties": {
                    "id": { "type": "integer" },
                    "name": { "type": "string" }
                }
            }"#,
        );

        cmd()
            .args(["inspect", schema.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("title:       Pet"))
            .stdout(predicate::str::contains("type:        object"))
            .stdout(predicate::str::contains("required:    id, name"))
            .stdout(predicate::str::contains("- name"));
    }

    #[test]
    fn type_array_is_bracketed() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "schema.json", r#"{"type": ["string", "null"]}"#);

        cmd()
            .args(["inspect", schema.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("[string, null]"));
    }

    #[test]
    fn missing_file_exits_3() {
        cmd()
            .args(["inspect", "/nonexistent/schema.json"])
            .assert()
            .failure()
            .code(3)
            .stderr(predicate::str::contains("file not found"));
    }

    #[test]
    fn bad_schema_exits_2() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "schema.json", r#"{"type": "bogus"}"#);

        cmd()
            .args(["inspect", schema.to_str().unwrap()])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("bogus"));
    }
}

mod normalize_command {
    use super::*;

    #[test]
    fn emits_canonical_key_order() {
        let dir = TempDir::new().unwrap();
        // Keys deliberately out of canonical order.
        let schema = write_temp_file(
            &dir,
            "schema.json",
            r##"{"required": ["a"], "title": "T", "$ref": "#/definitions/a", "unknown-key": 1}"##,
        );

        cmd()
            .args(["normalize", schema.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::starts_with(r#"{"$ref":"#))
            .stdout(predicate::str::contains("unknown-key").not());
    }

    #[test]
    fn pretty_output_has_newlines() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "schema.json", r#"{"type":"object"}"#);

        cmd()
            .args(["normalize", schema.to_str().unwrap(), "--pretty"])
            .assert()
            .success()
            .stdout(predicate::str::contains("{\n"));
    }

    #[test]
    fn writes_output_file() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "schema.json", r#"{"type":"object"}"#);
        let output = dir.path().join("out.json");

        cmd()
            .args([
                "normalize",
                schema.to_str().unwrap(),
                "--output",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains(r#""type":"object""#));
    }

    #[test]
    fn empty_schema_exits_2() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "schema.json", "{}");

        cmd()
            .args(["normalize", schema.to_str().unwrap()])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("no fields set"));
    }
}

mod check_command {
    use super::*;

    #[test]
    fn valid_schema() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "schema.json", r#"{"type":"object"}"#);

        cmd()
            .args(["check", schema.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Valid"));
    }

    #[test]
    fn valid_schema_json_output() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "schema.json", r#"{"type":"object"}"#);

        cmd()
            .args(["check", schema.to_str().unwrap(), "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#"{"valid":true}"#));
    }

    #[test]
    fn invalid_schema_json_output_carries_path() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(
            &dir,
            "schema.json",
            r#"{"properties": {"a": {"type": "nope"}}}"#,
        );

        cmd()
            .args(["check", schema.to_str().unwrap(), "--json"])
            .assert()
            .failure()
            .code(2)
            .stdout(predicate::str::contains(r#""valid":false"#))
            .stdout(predicate::str::contains("/properties/a/type"));
    }

    #[test]
    fn malformed_json_exits_2() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "schema.json", "{ not json");

        cmd()
            .args(["check", schema.to_str().unwrap()])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("invalid JSON"));
    }
}
