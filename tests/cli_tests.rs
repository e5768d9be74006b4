//! CLI interface tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CREATE_AND_EXIT: &str = "1\n2025-01-demo\n2025-01\n\nWorkshop de IoT\nUm dia inteiro de prototipagem.\nhttps://example.org/workshop\n\n\n\n\n\n5\n";

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("newsdesk").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("newsdesk"));
}

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("newsdesk").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("managing news articles"))
        .stdout(predicate::str::contains("--news-dir"));
}

#[test]
fn test_exit_from_menu() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("newsdesk").unwrap();
    cmd.current_dir(temp_dir.path())
        .env_remove("NEWSDESK_DIR")
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. 📝 Criar nova notícia"))
        .stdout(predicate::str::contains("👋 Até logo!"));
}

#[test]
fn test_closed_stdin_exits_cleanly() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("newsdesk").unwrap();
    cmd.current_dir(temp_dir.path())
        .env_remove("NEWSDESK_DIR")
        .write_stdin("")
        .assert()
        .code(0);
}

#[test]
fn test_create_in_default_news_dir() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("newsdesk").unwrap();
    cmd.current_dir(temp_dir.path())
        .env_remove("NEWSDESK_DIR")
        .write_stdin(CREATE_AND_EXIT)
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Notícia salva em: news/articles/2025-01-demo.json"));

    let article = fs::read_to_string(temp_dir.path().join("news/articles/2025-01-demo.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&article).unwrap();
    assert_eq!(value["title"], "Workshop de IoT");
    assert_eq!(value["dateDisplay"], "Janeiro 2025");
    assert_eq!(value["tags"][0]["label"], "Notícia");
    assert!(article.contains("Notícia"), "accents are written literally");

    let index = fs::read_to_string(temp_dir.path().join("news/index.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&index).unwrap();
    assert_eq!(value["articles"], serde_json::json!(["2025-01-demo.json"]));
}

#[test]
fn test_news_dir_flag_and_env() {
    let temp_dir = TempDir::new().unwrap();
    let flagged = temp_dir.path().join("site/news");
    let from_env = temp_dir.path().join("other");

    Command::cargo_bin("newsdesk")
        .unwrap()
        .arg("--news-dir")
        .arg(&flagged)
        .write_stdin(CREATE_AND_EXIT)
        .assert()
        .success();
    assert!(flagged.join("articles/2025-01-demo.json").exists());

    Command::cargo_bin("newsdesk")
        .unwrap()
        .env("NEWSDESK_DIR", &from_env)
        .write_stdin(CREATE_AND_EXIT)
        .assert()
        .success();
    assert!(from_env.join("index.json").exists());
}

#[test]
fn test_listing_survives_missing_article() {
    let temp_dir = TempDir::new().unwrap();
    let news = temp_dir.path().join("news");
    fs::create_dir_all(news.join("articles")).unwrap();
    fs::write(news.join("index.json"), r#"{"articles": ["gone.json"]}"#).unwrap();

    let mut cmd = Command::cargo_bin("newsdesk").unwrap();
    cmd.current_dir(temp_dir.path())
        .env_remove("NEWSDESK_DIR")
        .write_stdin("3\n\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. gone.json (erro ao ler)"));
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("newsdesk").unwrap();
    cmd.current_dir(temp_dir.path())
        .env_remove("NEWSDESK_DIR")
        .env_remove("RUST_LOG")
        .arg("--verbose")
        .write_stdin("5\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Using news directory news"))
        .stdout(predicate::str::contains("Using news directory").not());
}
