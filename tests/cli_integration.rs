//! Integration tests that run the CLI binary.

fn bin(home: &std::path::Path) -> std::process::Command {
    let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_wathiqa"));
    cmd.env_remove("AZURE_OPENAI_API_KEY");
    // Keep settings and stored keys out of the real home directory
    cmd.env("HOME", home);
    cmd.env("XDG_CONFIG_HOME", home.join("config"));
    cmd.env("XDG_CACHE_HOME", home.join("cache"));
    cmd.current_dir(home);
    cmd
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .arg("--help")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("annotate"), "expected usage text in output");
}

#[test]
fn cli_version_succeeds() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .arg("--version")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("wathiqa"));
}

#[test]
fn cli_annotate_json_works_offline() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .args(["annotate", "أحضر جواز السفر. {{map-pin}} الرباط", "--format", "json"])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    let segments = value["segments"].as_array().expect("segments array");
    let kinds: Vec<&str> = segments
        .iter()
        .filter_map(|s| s["type"].as_str())
        .collect();
    assert_eq!(
        kinds,
        ["plain_text", "document_reference", "plain_text", "icon_marker", "plain_text"]
    );
    assert_eq!(segments[1]["name"], "جوازالسفر");
    assert_eq!(segments[3]["name"], "map-pin");
}

#[test]
fn cli_annotate_html_is_rtl() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .args(["annotate", "--format", "html", "--font-size", "lg", "عقد الكراء."])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("dir=\"rtl\""));
    assert!(stdout.contains("text-lg"));
    assert!(stdout.contains("data-document=\"عقدالكراء\""));
}

#[test]
fn cli_prompt_without_api_key_exits_with_error() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(tmp.path())
        .arg("-p")
        .arg("hello")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        !output.status.success(),
        "expected failure when AZURE_OPENAI_API_KEY is not set"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("AZURE_OPENAI_API_KEY"),
        "stderr should name the missing variable: {}",
        stderr
    );
}
