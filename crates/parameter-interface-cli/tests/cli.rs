//! End-to-end tests for the `parameter-interface` binary.

use assert_cmd::Command;
use tempfile::TempDir;

fn cli(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("parameter-interface").unwrap();
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .env_remove("RUST_LOG");
    cmd
}

fn stdout(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn transform_prints_interface() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("schema.json"),
        r#"{ "name": { "type": "string", "required": true }, "tags": { "type": "array", "itemType": "object", "rule": { "label": "string" } } }"#,
    )
    .unwrap();

    let out = stdout(cli(&dir).args(["transform", "schema.json"]));
    insta::assert_snapshot!(out, @r"
    interface Parameter {
      name: string;
      tags?: {
        label?: string;
      }[];
    }
    ");
}

#[test]
fn transform_body_only_from_stdin() {
    let dir = TempDir::new().unwrap();
    let out = stdout(
        cli(&dir)
            .args(["transform", "-", "--body-only"])
            .write_stdin(r#"{ "level": [1, "a"] }"#),
    );
    assert_eq!(out, "{\nlevel?: 1 | 'a';\n}\n");
}

#[test]
fn transform_toml_with_project_config() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join(".parameter-interface");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[output]\ninterface_name = \"Query\"\nexport = true\nindent = 4\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("schema.toml"),
        "page = { type = \"int\", required = true }\nsort = [\"asc\", \"desc\"]\n",
    )
    .unwrap();

    let out = stdout(cli(&dir).args(["transform", "schema.toml"]));
    assert_eq!(
        out,
        "export interface Query {\n    page: number;\n    sort?: 'asc' | 'desc';\n}\n"
    );
}

#[test]
fn transform_unknown_type_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("schema.json"), r#"{ "f": "bogus" }"#).unwrap();

    let output = cli(&dir).args(["transform", "schema.json"]).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("but the following type was passed: bogus"), "{stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn generate_writes_one_file_per_case() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("suite.json"),
        r#"{
            "require": { "int": { "type": "int", "required": true } },
            "enumNumber": { "enum": [1, 2, 3] },
            "object": { "object": { "type": "object", "rule": { "name": "string", "age": "int" } } }
        }"#,
    )
    .unwrap();

    stdout(cli(&dir).args(["generate", "suite.json", "--out-dir", "fixtures"]));

    let read = |name: &str| std::fs::read_to_string(dir.path().join("fixtures").join(name)).unwrap();
    assert_eq!(read("require.ts"), "interface Parameter {\n  int: number;\n}\n");
    assert_eq!(read("enumNumber.ts"), "interface Parameter {\n  enum?: 1 | 2 | 3;\n}\n");
    assert_eq!(
        read("object.ts"),
        "interface Parameter {\n  object?: {\n    name?: string;\n    age?: number;\n  };\n}\n"
    );
}

#[test]
fn generate_bad_case_writes_nothing() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("suite.json"),
        r#"{ "good": { "a": "string" }, "bad": { "b": { "type": "enum" } } }"#,
    )
    .unwrap();

    let output = cli(&dir)
        .args(["generate", "suite.json", "--out-dir", "fixtures"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("case `bad`"));
    assert!(!dir.path().join("fixtures").exists());
}

#[test]
fn generate_requires_out_dir() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("suite.json"), "{}").unwrap();
    let output = cli(&dir).args(["generate", "suite.json"]).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no output directory"));
}

#[test]
fn types_lists_registry() {
    let dir = TempDir::new().unwrap();
    let out = stdout(cli(&dir).arg("types"));
    let names: Vec<_> = out.lines().collect();
    assert_eq!(names.first(), Some(&"number"));
    assert!(names.contains(&"datetime"));
    assert_eq!(names.len(), 16);
}
