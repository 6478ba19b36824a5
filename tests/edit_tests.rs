//! Scripted editing lifecycle tests
//!
//! These drive the binder through the non-interactive `--set` /
//! `--append` / `--remove-last` contract and assert against the
//! persisted YAML.

mod common;

use common::{TestSite, pagesmith_cmd};
use predicates::prelude::*;

#[test]
fn test_empty_site_edit_seeds_default_pricing_structure() {
    let site = TestSite::new();

    pagesmith_cmd(&site)
        .args(["edit", "pricing", "--set", "title=Choose Your Plan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved"));

    let doc = site.load_yaml("template/config/landing.yaml");
    let pricing = &doc["pricing"];

    assert_eq!(pricing["section_id"].as_str(), Some("pricing"));
    assert_eq!(pricing["feature_icon"].as_str(), Some("fas fa-check"));

    let plan = &pricing["plans"][0];
    assert_eq!(plan["name"].as_str(), Some("Free Plan"));
    assert_eq!(plan["is_popular"].as_bool(), Some(false));
    assert_eq!(plan["price"].as_str(), Some("$0"));

    let features: Vec<&str> = plan["features"]
        .as_sequence()
        .unwrap()
        .iter()
        .map(|f| f.as_str().unwrap())
        .collect();
    assert_eq!(
        features,
        vec![
            "Basic layout templates",
            "Social sharing features",
            "Basic code optimization"
        ]
    );
    assert_eq!(
        plan["button"]["link"].as_str(),
        Some("https://www.patreon.com/c/3droid/membership")
    );
}

#[test]
fn test_set_edits_nested_fields() {
    let site = TestSite::new();

    pagesmith_cmd(&site)
        .args([
            "edit",
            "hero",
            "--set",
            "heading=Ship faster<br>with forms",
            "--set",
            "cta_button.text=Start",
        ])
        .assert()
        .success();

    let doc = site.load_yaml("template/config/landing.yaml");
    assert_eq!(
        doc["hero"]["heading"].as_str(),
        Some("Ship faster<br>with forms")
    );
    assert_eq!(doc["hero"]["cta_button"]["text"].as_str(), Some("Start"));
    // Fixed values are injected alongside the edits
    assert_eq!(doc["hero"]["cta_button"]["link"].as_str(), Some("/app"));
    assert_eq!(doc["hero"]["section_id"].as_str(), Some("home"));
}

#[test]
fn test_append_adds_templated_plan() {
    let site = TestSite::new();

    pagesmith_cmd(&site)
        .args(["edit", "pricing", "--append", "plans"])
        .assert()
        .success();

    let doc = site.load_yaml("template/config/landing.yaml");
    let plans = doc["pricing"]["plans"].as_sequence().unwrap();
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[1]["name"].as_str(), Some("New Plan"));
    assert_eq!(plans[1]["features"].as_sequence().unwrap().len(), 2);
}

#[test]
fn test_remove_last_never_drops_below_one() {
    let site = TestSite::new();

    pagesmith_cmd(&site)
        .args([
            "edit",
            "faq",
            "--remove-last",
            "faq_items",
            "--remove-last",
            "faq_items",
            "--remove-last",
            "faq_items",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing removed"));

    let doc = site.load_yaml("template/config/landing.yaml");
    assert_eq!(doc["faq"]["faq_items"].as_sequence().unwrap().len(), 1);
}

#[test]
fn test_social_links_may_shrink_to_zero() {
    let site = TestSite::new();
    site.write_file(
        "template/config/auth.yaml",
        "footer:\n  social_links:\n    - name: GitHub\n      url: https://github.com/x\n      icon: bi bi-github\n",
    );

    pagesmith_cmd(&site)
        .args(["edit", "footer", "--remove-last", "social_links"])
        .assert()
        .success();

    let doc = site.load_yaml("template/config/auth.yaml");
    assert_eq!(doc["footer"]["social_links"].as_sequence().unwrap().len(), 0);
}

#[test]
fn test_edit_then_append_keeps_the_edit() {
    let site = TestSite::new();

    // The edit targets item 0; the append must not discard it
    pagesmith_cmd(&site)
        .args([
            "edit",
            "faq",
            "--set",
            "faq_items.0.question=What does it cost?",
            "--append",
            "faq_items",
        ])
        .assert()
        .success();

    let doc = site.load_yaml("template/config/landing.yaml");
    let items = doc["faq"]["faq_items"].as_sequence().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["question"].as_str(), Some("What does it cost?"));
}

#[test]
fn test_popular_badge_follows_checkbox() {
    let site = TestSite::new();

    pagesmith_cmd(&site)
        .args(["edit", "pricing", "--set", "plans.0.is_popular=true"])
        .assert()
        .success();

    let doc = site.load_yaml("template/config/landing.yaml");
    assert_eq!(
        doc["pricing"]["plans"][0]["popular_badge_text"].as_str(),
        Some("Most Popular")
    );

    pagesmith_cmd(&site)
        .args(["edit", "pricing", "--set", "plans.0.is_popular=false"])
        .assert()
        .success();

    let doc = site.load_yaml("template/config/landing.yaml");
    assert!(doc["pricing"]["plans"][0]["popular_badge_text"].is_null());
}

#[test]
fn test_choice_field_rejects_invalid_option() {
    let site = TestSite::new();

    pagesmith_cmd(&site)
        .args(["edit", "feature", "--set", "list_item.0.column_width=9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("column_width"));
}

#[test]
fn test_sublist_append_grows_plan_features() {
    let site = TestSite::new();

    pagesmith_cmd(&site)
        .args([
            "edit",
            "pricing",
            "--set",
            "plans.0.features.0=Everything in Free",
            "--append",
            "plans.0.features",
        ])
        .assert()
        .success();

    let doc = site.load_yaml("template/config/landing.yaml");
    let features = doc["pricing"]["plans"][0]["features"].as_sequence().unwrap();
    assert_eq!(features.len(), 4);
    assert_eq!(features[0].as_str(), Some("Everything in Free"));
}

#[test]
fn test_no_save_leaves_files_untouched() {
    let site = TestSite::new();

    pagesmith_cmd(&site)
        .args(["edit", "faq", "--set", "title=Draft", "--no-save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not saved"));

    assert!(!site.file_exists("template/config/landing.yaml"));
}

#[test]
fn test_unicode_content_round_trips() {
    let site = TestSite::new();

    pagesmith_cmd(&site)
        .args(["edit", "pricing", "--set", "title=選擇您的方案"])
        .assert()
        .success();

    let doc = site.load_yaml("template/config/landing.yaml");
    assert_eq!(doc["pricing"]["title"].as_str(), Some("選擇您的方案"));

    // A second pass re-reads and re-saves the same text unchanged
    pagesmith_cmd(&site)
        .args(["edit", "pricing", "--append", "plans"])
        .assert()
        .success();
    let doc = site.load_yaml("template/config/landing.yaml");
    assert_eq!(doc["pricing"]["title"].as_str(), Some("選擇您的方案"));
}

#[test]
fn test_policy_sections_persist_schema_driven_fields() {
    let site = TestSite::new();

    pagesmith_cmd(&site)
        .args([
            "edit",
            "privacy_policy",
            "--set",
            "section1.intro=We keep collection minimal.",
            "--set",
            "section1.items.0=Account email",
        ])
        .assert()
        .success();

    let doc = site.load_yaml("template/config/auth.yaml");
    let policy = &doc["privacy_policy"];
    assert_eq!(
        policy["section1"]["title"].as_str(),
        Some("Information We Collect")
    );
    assert_eq!(
        policy["section1"]["intro"].as_str(),
        Some("We keep collection minimal.")
    );
    assert_eq!(
        policy["section1"]["items"][0].as_str(),
        Some("Account email")
    );
    // Content-only descriptors get no items list
    assert!(policy["section3"]["items"].is_null());
    assert_eq!(
        policy["section3"]["title"].as_str(),
        Some("Data Storage and Security")
    );
}

#[test]
fn test_edits_to_one_document_leave_the_other_alone() {
    let site = TestSite::new();
    site.write_file("template/config/auth.yaml", "footer:\n  logo:\n    alt: Keep\n");

    pagesmith_cmd(&site)
        .args(["edit", "faq", "--set", "title=Q&A"])
        .assert()
        .success();

    let auth = site.load_yaml("template/config/auth.yaml");
    assert_eq!(auth["footer"]["logo"]["alt"].as_str(), Some("Keep"));
    assert!(auth["faq"].is_null());
}
