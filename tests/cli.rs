use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::prelude::*;
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Parser, Tag, TagEnd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const DATA: &str = r#"{
    "find": {
        "description": "desc",
        "functions": {
            "shell": [{"code": "find . -exec /bin/sh \\; -quit"}],
            "sudo": [
                {"description": "Run as root", "code": "sudo find . -exec /bin/sh \\; -quit"},
                {"code": "sudo find / -name x"}
            ]
        }
    },
    "7z": {
        "functions": {
            "file-read": [{"code": "LFILE=file_to_read\n7z a -ttar -an -so $LFILE | 7z e -ttar -si -so"}]
        }
    },
    "sudo": {
        "functions": {
            "shell": [{"code": "sudo /bin/sh"}]
        }
    }
}"#;

struct Fixture {
    dir: TempDir,
    data: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let data = dir.path().join("gtfobins.json");
        fs::write(&data, DATA).unwrap();
        Self { dir, data }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("escapebins").unwrap();
        cmd.current_dir(self.path())
            .env("ESCAPEBINS_CONFIG_DIR", self.path().join("config"))
            .env_remove("ESCAPEBINS_DATA")
            .env_remove("ESCAPEBINS_LOG")
            .arg("--no-color")
            .arg("--data")
            .arg(&self.data);
        cmd
    }
}

#[test]
fn test_lookup_renders_entry() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("find")
        .assert()
        .success()
        .stdout(predicate::str::contains("# desc"))
        .stdout(predicate::str::contains("---------- [ SHELL ] ----------"))
        .stdout(predicate::str::contains("---------- [ SUDO ] ----------"))
        .stdout(predicate::str::contains("# Run as root"))
        .stdout(predicate::str::contains("find . -exec /bin/sh \\; -quit"))
        .stdout(predicate::str::contains(" -  -  -  -  -  -  -  -  -  - "))
        .stdout(predicate::str::contains("[ * ] Bad SUIDs, good exploits."))
        .stdout(predicate::str::contains("(!?)").not())
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_lookup_single_function_has_no_divider() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("sudo")
        .assert()
        .success()
        .stdout(predicate::str::contains("sudo /bin/sh"))
        .stdout(predicate::str::contains(" -  - ").not());
}

#[test]
fn test_lookup_miss_prints_only_not_found() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("grep")
        .assert()
        .success()
        .stdout("[ - ] Sorry, couldn't find anything for grep\n");
}

#[test]
fn test_lookup_is_case_sensitive() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("FIND")
        .assert()
        .success()
        .stdout(predicate::str::contains("couldn't find anything for FIND"));
}

#[test]
fn test_list_all_groups() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("-l")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[ * ] Available binaries (3):"))
        .stdout(predicate::str::contains("(0-9):\n\n  7z\n"))
        .stdout(predicate::str::contains("(f):\n\n  find\n"))
        .stdout(predicate::str::contains("(s):\n\n  sudo\n"))
        .stdout(predicate::str::ends_with("[ * ] Bad SUIDs, good exploits.\n\n"));
}

#[test]
fn test_list_digit_filter() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["-l", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Available binaries starting with '0-9' (1):",
        ))
        .stdout(predicate::str::contains("  7z"))
        .stdout(predicate::str::contains("find").not())
        .stdout(predicate::str::contains("sudo").not());
}

#[test]
fn test_list_letter_filter_ignores_case() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["--list", "F"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(f):"))
        .stdout(predicate::str::contains("  find"));
}

#[test]
fn test_list_empty_filter_result() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["-l", "z"])
        .assert()
        .success()
        .stdout("[ - ] No binaries found starting with 'z'\n");
}

#[test]
fn test_list_filter_too_long_is_usage_error() {
    let fx = Fixture::new();
    fx.cmd().args(["-l", "ab"]).assert().code(2);
}

#[test]
fn test_report_appends_extension() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["-r", "find", "7z", "-o", "foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Markdown report generated: foo.md"));

    let report = fs::read_to_string(fx.path().join("foo.md")).unwrap();
    assert!(report.starts_with("# GTFOBins Analysis Report\nGenerated on: "));
    assert!(report.contains("- Total Binaries: 2\n"));
    assert!(report.contains("- Total Functions: 4\n"));
    assert!(report.contains("- Categories: 3\n"));
    assert!(report.contains("shell: 1, sudo: 2, file-read: 1\n"));
    assert!(!fx.path().join("foo.md.md").exists());
}

#[test]
fn test_report_keeps_md_extension() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["-r", "find", "--output", "bar.md"])
        .assert()
        .success();
    assert!(fx.path().join("bar.md").exists());
    assert!(!fx.path().join("bar.md.md").exists());
}

#[test]
fn test_report_default_output() {
    let fx = Fixture::new();
    fx.cmd().args(["-r", "sudo"]).assert().success();
    assert!(fx.path().join("gtfobins_report.md").exists());
}

#[test]
fn test_report_is_valid_markdown() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["-r", "find", "-o", "md"])
        .assert()
        .success();
    let report = fs::read_to_string(fx.path().join("md.md")).unwrap();

    let mut headings = Vec::new();
    let mut bash_blocks = 0;
    let mut in_heading = None;
    for event in Parser::new(&report) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => in_heading = Some((level, String::new())),
            Event::Text(text) => {
                if let Some((_, buf)) = in_heading.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(heading) = in_heading.take() {
                    headings.push(heading);
                }
            }
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(lang))) => {
                assert_eq!(&*lang, "bash");
                bash_blocks += 1;
            }
            _ => {}
        }
    }

    assert_eq!(bash_blocks, 3);
    assert!(headings.contains(&(HeadingLevel::H1, "GTFOBins Analysis Report".to_string())));
    assert!(headings.contains(&(HeadingLevel::H3, "Binary: find".to_string())));
    assert!(headings.contains(&(HeadingLevel::H4, "SHELL".to_string())));
    assert!(headings.contains(&(HeadingLevel::H4, "SUDO".to_string())));
}

#[test]
fn test_report_warns_on_missing_and_skips_empty() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["-r", "ghost", "-o", "none"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ - ] Binary not found: ghost"))
        .stdout(predicate::str::contains("report not written"));
    assert!(!fx.path().join("none.md").exists());
}

#[test]
fn test_list_beats_lookup() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["grep", "-l"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available binaries (3):"))
        .stdout(predicate::str::contains("couldn't find").not());
}

#[test]
fn test_version() {
    Command::cargo_bin("escapebins")
        .unwrap()
        .arg("-v")
        .assert()
        .success()
        .stdout(format!("escapebins {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_args_prints_help_without_data() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("escapebins")
        .unwrap()
        .current_dir(dir.path())
        .env("ESCAPEBINS_CONFIG_DIR", dir.path())
        .env("ESCAPEBINS_DATA", dir.path().join("missing.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--list").and(predicate::str::contains("--report")))
        .stdout(predicate::str::contains("Data file not found").not());
}

#[test]
fn test_missing_data_file_exits_zero() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("escapebins")
        .unwrap()
        .current_dir(dir.path())
        .env("ESCAPEBINS_CONFIG_DIR", dir.path())
        .env("ESCAPEBINS_DATA", dir.path().join("missing.json"))
        .args(["--no-color", "find"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ - ] Data file not found"));
}

#[test]
fn test_malformed_data_file_fails() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("bad.json");
    fs::write(&data, "{ not json").unwrap();
    Command::cargo_bin("escapebins")
        .unwrap()
        .current_dir(dir.path())
        .env("ESCAPEBINS_CONFIG_DIR", dir.path())
        .arg("--data")
        .arg(&data)
        .arg("find")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Malformed data file"));
}

#[test]
fn test_data_path_from_config_file() {
    let fx = Fixture::new();
    let config_dir = fx.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.json"),
        format!(r#"{{"data_file": {:?}}}"#, fx.data.to_str().unwrap()),
    )
    .unwrap();

    Command::cargo_bin("escapebins")
        .unwrap()
        .current_dir(fx.path())
        .env("ESCAPEBINS_CONFIG_DIR", &config_dir)
        .env_remove("ESCAPEBINS_DATA")
        .args(["--no-color", "sudo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sudo /bin/sh"));
}

#[test]
fn test_bad_config_fails() {
    let fx = Fixture::new();
    let config_dir = fx.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.json"), "[]").unwrap();

    fx.cmd()
        .arg("find")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Config error"));
}
