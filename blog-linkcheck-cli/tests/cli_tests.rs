//! End-to-end tests for the `blog-linkcheck` binary: exit codes and output.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn site() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "content/blog/hello-world.md", "# Hello\n");
    write(tmp.path(), "static/images/cat.png", "png");
    tmp
}

fn linkcheck() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("blog-linkcheck"))
}

#[test]
fn test_clean_site_exits_zero_with_single_summary_line() {
    let tmp = site();
    write(
        tmp.path(),
        "content/blog/post.md",
        "[a](/blog/hello-world/) ![b](/images/cat.png) [c](https://example.com)\n",
    );

    linkcheck()
        .arg("--root")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout("All internal links OK (2 checked across 2 files)\n");
}

#[test]
fn test_argument_free_run_uses_current_directory() {
    let tmp = site();

    linkcheck()
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("All internal links OK"));
}

#[test]
fn test_broken_links_exit_one_and_are_listed_in_order() {
    let tmp = site();
    write(
        tmp.path(),
        "content/blog/b.md",
        "[x](/blog/missing/)\n```\n[y](/blog/in-code/)\n```\n[z](/images/dog.png)\n",
    );
    write(tmp.path(), "content/blog/a.md", "[s](/series/intro/)\n");

    let assert = linkcheck().arg("--root").arg(tmp.path()).assert().code(1);
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert!(stdout.starts_with("BROKEN LINKS FOUND (3 broken / 3 checked)"));
    let entries: Vec<&str> = stdout
        .lines()
        .filter(|l| l.contains('\u{2192}'))
        .map(str::trim)
        .collect();
    assert_eq!(
        entries,
        vec![
            "content/blog/a.md:1 \u{2192} /series/intro/",
            "content/blog/b.md:1 \u{2192} /blog/missing/",
            "content/blog/b.md:5 \u{2192} /images/dog.png",
        ]
    );
    assert!(!stdout.contains("in-code"));
}

#[test]
fn test_missing_blog_section_exits_one_on_stderr() {
    let tmp = TempDir::new().unwrap();

    linkcheck()
        .arg("--root")
        .arg(tmp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("content/blog not found"));
}

#[test]
fn test_json_format() {
    let tmp = site();
    write(tmp.path(), "content/blog/post.md", "[x](/blog/missing/)\n");

    let assert = linkcheck()
        .args(["--format", "json", "--root"])
        .arg(tmp.path())
        .assert()
        .code(1);
    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(json["ok"], false);
    assert_eq!(json["total_checked"], 1);
    assert_eq!(json["broken"][0]["file"], "content/blog/post.md");
}

#[test]
fn test_unreadable_post_fails_run() {
    let tmp = site();
    fs::write(tmp.path().join("content/blog/bad.md"), [0xc3_u8, 0x28]).unwrap();

    linkcheck()
        .arg("--root")
        .arg(tmp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FILES NOT SCANNED (1)"))
        .stdout(predicate::str::contains("content/blog/bad.md"));
}
