mod common;

use common::{TestEnv, INDEX_HTML};
use serde_json::Value;

fn built_env() -> TestEnv {
    let env = TestEnv::new();
    env.write("data/index.html", INDEX_HTML);
    let result = env.run(&["build", "-o", "include", "data/index.html"]);
    assert!(result.success, "stderr:\n{}", result.stderr);
    env
}

#[test]
fn test_check_up_to_date() {
    let env = built_env();

    let result = env.run(&["check", "-o", "include", "data/index.html"]);

    assert!(result.success, "stdout:\n{}", result.stdout);
    assert!(result
        .stdout
        .contains("[OK] HTML_INDEX up to date (include/html_index.h)"));
    assert!(result.stdout.contains("1 of 1 headers up to date"));
}

#[test]
fn test_check_detects_stale_header() {
    let env = built_env();
    env.write("data/index.html", "<html>changed</html>\n");

    let result = env.run(&["check", "-o", "include", "data/index.html"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("HTML_INDEX is stale"));
    assert!(result.stdout.contains("+<html>changed</html>"));
}

#[test]
fn test_check_reports_not_generated() {
    let env = TestEnv::new();
    env.write("data/index.html", INDEX_HTML);

    let result = env.run(&["check", "-o", "include", "data/index.html"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("HTML_INDEX not generated"));
    assert!(!env.exists("include/html_index.h"));
}

#[test]
fn test_check_json() {
    let env = built_env();

    let result = env.run(&[
        "--json",
        "check",
        "-o",
        "include",
        "data/index.html",
        "data/basic.html",
    ]);

    assert_eq!(result.exit_code, 1);
    let doc: Value = serde_json::from_str(result.stdout.trim()).unwrap();
    assert_eq!(doc["event"], "check");
    assert_eq!(doc["up_to_date"], 1);
    assert_eq!(doc["items"][1]["status"], "missing");
}
