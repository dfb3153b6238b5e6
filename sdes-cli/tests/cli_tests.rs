use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const FIXTURE: &str = r#"
menus:
  - id: 3
    name: Other Resources
    slug: other-resources
    items:
      - title: Catalog
        url: catalog.ucf.edu
posts:
  - id: 12
    post_type: contact
    title: Main
    meta:
      contact_phone: 407-823-4625
"#;

/// `sdes` with HOME and the config dir pointed into `home`.
fn sdes_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sdes"));
    cmd.env("HOME", home)
        .env("USERPROFILE", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn render_expands_known_tags_and_keeps_unknown() {
    let home = TempDir::new().expect("home");
    let page = write(
        &home,
        "page.html",
        "<p>[alert title=\"Closed\" is_unplanned=no]</p>\n[menuPanel name=\"Other Resources\"]\n[gallery ids=1]",
    );
    let fixture = write(&home, "content.yaml", FIXTURE);

    sdes_cmd(home.path())
        .arg("render")
        .arg(&page)
        .arg("--content")
        .arg(&fixture)
        .arg("--offline")
        .assert()
        .success()
        .stdout(contains("alert-warning"))
        .stdout(contains("<strong>Closed</strong> Alert"))
        .stdout(contains(r#"<a href="http://catalog.ucf.edu" class="list-group-item ">Catalog</a>"#))
        .stdout(contains("[gallery ids=1]"));
}

#[test]
fn render_gates_errors_by_viewer() {
    let home = TempDir::new().expect("home");
    let page = write(&home, "page.html", "[events]");

    sdes_cmd(home.path())
        .args(["render", "--offline"])
        .arg(&page)
        .assert()
        .success()
        .stdout(contains("<!-- shortcode [events] unavailable -->"));

    sdes_cmd(home.path())
        .args(["render", "--offline", "--can-edit"])
        .arg(&page)
        .assert()
        .success()
        .stdout(contains("Admin Alert: feed transport error: offline mode"));
}

#[test]
fn render_reads_theme_config() {
    let home = TempDir::new().expect("home");
    let page = write(&home, "page.html", "[alert url=\"ucf.edu\"]");
    let config = write(&home, "theme.yaml", "default_url_scheme: \"https://\"\n");

    sdes_cmd(home.path())
        .arg("render")
        .arg(&page)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(contains(r#"href="https://ucf.edu""#));
}

#[test]
fn render_missing_file_fails_with_context() {
    let home = TempDir::new().expect("home");
    sdes_cmd(home.path())
        .args(["render", "does-not-exist.html"])
        .assert()
        .failure()
        .stderr(contains("failed to read does-not-exist.html"));
}

#[test]
fn malformed_config_is_reported_with_path() {
    let home = TempDir::new().expect("home");
    let config = write(&home, "theme.yaml", "feed: [not, a, map\n");

    sdes_cmd(home.path())
        .arg("feed")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(contains("failed to load theme config").and(contains("theme.yaml")));
}

#[test]
fn shortcodes_json_lists_registered_widgets_with_menu_choices() {
    let home = TempDir::new().expect("home");
    let fixture = write(&home, "content.yaml", FIXTURE);

    let output = sdes_cmd(home.path())
        .args(["shortcodes", "--json", "--content"])
        .arg(&fixture)
        .output()
        .expect("run sdes");
    assert!(output.status.success());

    let ui: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let commands: Vec<&str> = ui
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|s| s["command"].as_str())
        .collect();
    assert_eq!(
        commands,
        ["alert", "menuPanel", "events", "contactblock", "social_media", "iframe", "redirect"]
    );
    let name_param = &ui[1]["params"][0];
    assert_eq!(name_param["type"], "dropdown");
    assert_eq!(name_param["choices"][0]["value"], "other-resources");
    assert_eq!(ui[2]["snippet"], r#"[events id="" header="Upcoming Events" limit="6"]"#);
}

#[test]
fn shortcodes_table_shows_snippets() {
    let home = TempDir::new().expect("home");
    sdes_cmd(home.path())
        .arg("shortcodes")
        .assert()
        .success()
        .stdout(contains("7 shortcodes"))
        .stdout(contains("[redirect redirect_url=\"\"]"));
}
