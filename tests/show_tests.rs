//! Show command tests

mod common;

use common::{TestSite, pagesmith_cmd};
use predicates::prelude::*;

#[test]
fn test_show_empty_documents() {
    let site = TestSite::new();
    pagesmith_cmd(&site)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("landing.yaml"))
        .stdout(predicate::str::contains("auth.yaml"))
        .stdout(predicate::str::contains("(empty)"));
}

#[test]
fn test_show_single_document() {
    let site = TestSite::new();
    site.write_file(
        "template/config/landing.yaml",
        "hero:\n  heading: Hello World\n",
    );

    pagesmith_cmd(&site)
        .args(["show", "--doc", "landing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello World"))
        .stdout(predicate::str::contains("landing.yaml").and(predicate::str::contains("auth.yaml").not()));
}

#[test]
fn test_show_reflects_saved_edits() {
    let site = TestSite::new();

    pagesmith_cmd(&site)
        .args(["edit", "faq", "--set", "title=Common Questions"])
        .assert()
        .success();

    pagesmith_cmd(&site)
        .args(["show", "--doc", "landing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Common Questions"));
}

#[test]
fn test_show_preserves_unicode() {
    let site = TestSite::new();
    site.write_file(
        "template/config/landing.yaml",
        "pricing:\n  title: 選擇您的方案\n",
    );

    pagesmith_cmd(&site)
        .args(["show", "--doc", "landing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("選擇您的方案"));
}
