//! Integration tests for the includeme CLI
//!
//! These tests run the built binary against temporary files.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn includeme(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_includeme"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute includeme")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Test that the CLI can be invoked
#[test]
fn test_cli_invocation() {
    let dir = TempDir::new().unwrap();
    let output = includeme(dir.path(), &["--help"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("Insert the #include and using lines a C/C++ symbol needs"));
}

#[test]
fn test_resolve_builtin_symbols() {
    let dir = TempDir::new().unwrap();

    let output = includeme(dir.path(), &["resolve", "cout"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "std::cout: iostream\n");

    let output = includeme(dir.path(), &["resolve", "printf", "--mode", "c"]);
    assert_eq!(stdout(&output), "printf: stdio.h\n");

    let output = includeme(dir.path(), &["resolve", "socket", "--mode", "c", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["canonical_name"], "socket");
    assert_eq!(value["headers"], serde_json::json!(["sys/types.h", "sys/socket.h"]));
}

#[test]
fn test_resolve_not_found() {
    let dir = TempDir::new().unwrap();
    let output = includeme(dir.path(), &["resolve", "no_such_symbol"]);

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("symbol not found: no_such_symbol"));
}

#[test]
fn test_resolve_unsupported_mode() {
    let dir = TempDir::new().unwrap();
    let output = includeme(dir.path(), &["resolve", "x", "--mode", "fortran"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("mode not supported: fortran"));
}

#[test]
fn test_insert_into_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("main.cpp");
    fs::write(&file, "int main() {\n  cout << 1;\n}\n").unwrap();

    let output = includeme(dir.path(), &["insert", "main.cpp", "cout"]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("Added: #include <iostream>, using std::cout;"));
    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "#include <iostream>\nusing std::cout;\n\n\nint main() {\n  cout << 1;\n}\n"
    );

    let output = includeme(dir.path(), &["insert", "main.cpp", "cout"]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("Nothing to do: already included"));
    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "#include <iostream>\nusing std::cout;\n\n\nint main() {\n  cout << 1;\n}\n"
    );
}

#[test]
fn test_insert_token_under_cursor() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("main.c");
    let original = "// main.c\nint main(void) {\n  printf(\"hi\");\n}\n";
    fs::write(&file, original).unwrap();

    let output = includeme(dir.path(), &["insert", "main.c", "--at", "3:5", "--dry-run"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "// main.c\n\n#include <stdio.h>\n\n\nint main(void) {\n  printf(\"hi\");\n}\n"
    );
    // Dry runs leave the file alone.
    assert_eq!(fs::read_to_string(&file).unwrap(), original);
}

#[test]
fn test_insert_at_column_inside_multibyte_char() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("main.cpp"), "auto é = 1; cout << é;\n").unwrap();

    let output = includeme(dir.path(), &["insert", "main.cpp", "--at", "1:7", "--dry-run"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("no symbol at 1:7"));
    assert!(!stderr(&output).contains("panicked"));

    let output = includeme(dir.path(), &["insert", "main.cpp", "--at", "1:14", "--dry-run"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).starts_with("#include <iostream>\nusing std::cout;\n"));
}

#[test]
fn test_insert_requires_known_mode() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.txt"), "cout\n").unwrap();

    let output = includeme(dir.path(), &["insert", "notes.txt", "cout"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("pass --mode"));
}

#[test]
fn test_project_config_and_tables() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("tables")).unwrap();
    fs::write(
        dir.path().join("tables/lol.yaml"),
        "- [MyClass, \"lol::MyClass\"]\n- [\"lol::MyClass\", [lol/MyClass.h, lol/class_defs.h]]\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("includeme.toml"),
        "[modes]\ncpp = [\"builtin:cpp\", \"tables/lol.yaml\", \"tables/missing.json\"]\n",
    )
    .unwrap();

    let output = includeme(dir.path(), &["resolve", "MyClass"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "lol::MyClass: lol/MyClass.h lol/class_defs.h\n");

    // Builtin table is still registered alongside.
    let output = includeme(dir.path(), &["resolve", "vector"]);
    assert_eq!(stdout(&output), "std::vector: vector\n");

    let output = includeme(dir.path(), &["modes"]);
    assert!(stdout(&output).starts_with("cpp: builtin:cpp, "));
}

#[test]
fn test_modes_and_stats() {
    let dir = TempDir::new().unwrap();

    let output = includeme(dir.path(), &["modes"]);
    assert_eq!(stdout(&output), "c: builtin:c\ncpp: builtin:cpp\n");

    let output = includeme(dir.path(), &["stats", "c"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "c: 147 entries, height 8\n");
}

#[test]
fn test_derive_cpp_table() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("c.json"),
        r#"[["printf", ["stdio.h"]], ["getpid", ["unistd.h"]], ["strlen", ["string.h"]]]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("cpp.toml"),
        "symbols = [[\"std::printf\", [\"cstdio\"]], [\"std::chrono::seconds\", [\"chrono\"]]]\n",
    )
    .unwrap();

    let output = includeme(
        dir.path(),
        &["derive", "--c", "c.json", "--cpp", "cpp.toml", "-o", "out.json"],
    );
    assert!(output.status.success(), "{}", stderr(&output));

    let derived = fs::read_to_string(dir.path().join("out.json")).unwrap();
    assert_eq!(
        derived,
        concat!(
            "[\n",
            "  [\"getpid\",[\"unistd.h\"]],\n",
            "  [\"printf\",\"std::printf\"],\n",
            "  [\"seconds\",\"std::chrono::seconds\"],\n",
            "  [\"std::chrono::seconds\",[\"chrono\"]],\n",
            "  [\"std::printf\",[\"cstdio\"]],\n",
            "  [\"strlen\",[\"cstring\"]]\n",
            "]\n",
        )
    );
}
