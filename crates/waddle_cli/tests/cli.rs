//! 以子进程方式运行 waddlec，检查退出码、stdout 和 stderr

use std::path::PathBuf;
use std::process::{Command, Output};

fn write_temp(name: &str, source: &str) -> PathBuf {
    let file = format!("waddlec_{}_{}.wd", name, std::process::id());
    let path = std::env::temp_dir().join(file);
    std::fs::write(&path, source).unwrap();
    path
}

fn waddlec(args: &[&str], input: &PathBuf) -> Output {
    Command::new(env!("CARGO_BIN_EXE_waddlec"))
        .arg("--no-color")
        .args(args)
        .arg(input)
        .output()
        .unwrap()
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[test]
fn test_check_reports_error_with_snippet() {
    let path = write_temp("check_bad", "fn main() { return 1 }\n");
    let output = waddlec(&["check"], &path);

    assert_eq!(output.status.code(), Some(1));
    let stderr = text(&output.stderr);
    assert!(stderr.contains("unexpected `}`"), "{}", stderr);
    assert!(stderr.contains("fn main() { return 1 }"), "{}", stderr);
    assert!(stderr.contains("处理失败"), "{}", stderr);
    assert!(!text(&output.stdout).contains("无错误"));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_check_lists_functions() {
    let path = write_temp("check_ok", "fn add(a: int, b: int) -> int { return a + b; }\n");
    let output = waddlec(&["check"], &path);

    assert!(output.status.success());
    let stdout = text(&output.stdout);
    assert!(stdout.contains("fn add(a: int, b: int) -> int"), "{}", stdout);
    assert!(stdout.contains("无错误"));
    assert!(output.stderr.is_empty(), "{}", text(&output.stderr));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_file_exits_with_error() {
    let path = std::env::temp_dir().join("waddlec_does_not_exist.wd");
    let output = waddlec(&["ast"], &path);

    assert_eq!(output.status.code(), Some(1));
    assert!(text(&output.stderr).contains("IO error"));
}

#[test]
fn test_fmt_write_rewrites_in_place() {
    let path = write_temp("fmt_write", "fn main( ) -> int { return 1+2*3 ; }");
    let expected = "fn main() -> int {\n    return 1 + (2 * 3);\n}\n";

    let first = waddlec(&["fmt", "--write"], &path);
    assert!(first.status.success());
    assert!(text(&first.stdout).contains("已格式化"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), expected);

    // 已经是规范格式，文件不变
    let second = waddlec(&["fmt", "-w"], &path);
    assert!(second.status.success());
    assert!(text(&second.stdout).contains("无需改动"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), expected);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_fmt_without_write_prints() {
    let source = "fn main(){print(\"hi\");}";
    let path = write_temp("fmt_print", source);
    let output = waddlec(&["fmt"], &path);

    assert!(output.status.success());
    assert_eq!(text(&output.stdout), "fn main() {\n    print(\"hi\");\n}\n");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), source);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_tokens_end_with_eof() {
    let path = write_temp("tokens", "fn main() {}");
    let output = waddlec(&["tokens"], &path);

    assert!(output.status.success());
    let stdout = text(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines.last(), Some(&"end of file"));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_tokens_lex_error() {
    let path = write_temp("tokens_bad", "fn main() { @ }");
    let output = waddlec(&["tokens"], &path);

    assert_eq!(output.status.code(), Some(1));
    let stderr = text(&output.stderr);
    assert!(stderr.contains("unrecognised input `@`"), "{}", stderr);
    assert!(output.stdout.is_empty());

    std::fs::remove_file(&path).unwrap();
}
