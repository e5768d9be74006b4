//! Shared fixtures for integration tests

#![allow(dead_code, reason = "Each test crate uses a different subset")]
#![expect(clippy::unwrap_used, reason = "This is a test module")]

use chrono::NaiveDate;
use newsdesk::config::NewsConfig;
use newsdesk::model::{Article, ColorScheme, Icon, Tag, TagColor, to_pretty_json};
use newsdesk::prompt::Prompter;
use newsdesk::system::MockSystem;
use serde_json::Map;
use std::io::Cursor;

pub const NEWS_DIR: &str = "/site/news";
pub const INDEX: &str = "/site/news/index.json";
pub const ARTICLES: &str = "/site/news/articles";

pub type ScriptedPrompter = Prompter<Cursor<Vec<u8>>, Vec<u8>>;

/// A prompter that answers each prompt with the next line of `answers`
pub fn scripted(answers: &[&str]) -> ScriptedPrompter {
    let mut script = answers.join("\n");
    script.push('\n');
    Prompter::new(Cursor::new(script.into_bytes()), Vec::new())
}

pub fn transcript(prompter: &ScriptedPrompter) -> String {
    String::from_utf8(prompter.output().clone()).unwrap()
}

pub fn config() -> NewsConfig {
    NewsConfig::new(NEWS_DIR)
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

pub fn article_path(filename: &str) -> String {
    format!("{ARTICLES}/{filename}")
}

pub fn sample_article(id: &str) -> Article {
    Article {
        id: id.to_owned(),
        date: "2025-03".to_owned(),
        date_display: "Março 2025".to_owned(),
        title: "Oficina de sensores".to_owned(),
        description: "Uma tarde com ESP32 e muitos fios.".to_owned(),
        link: "https://example.org/oficina".to_owned(),
        icon: Icon::FlaskConical,
        color_scheme: ColorScheme::Purple,
        tags: vec![
            Tag {
                label: "Oficina".to_owned(),
                icon: Icon::Zap,
                color: TagColor::Teal,
                extra: Map::new(),
            },
            Tag {
                label: "Extensão".to_owned(),
                icon: Icon::Users,
                color: TagColor::Slate,
                extra: Map::new(),
            },
        ],
        extra: Map::new(),
    }
}

pub fn index_json(filenames: &[&str]) -> String {
    serde_json::to_string_pretty(&serde_json::json!({ "articles": filenames })).unwrap()
}

/// A mock filesystem holding the given articles, indexed in the given order
pub fn system_with(articles: &[&Article]) -> MockSystem {
    let filenames: Vec<String> = articles.iter().map(|a| a.filename()).collect();
    let names: Vec<&str> = filenames.iter().map(String::as_str).collect();
    let mut system = MockSystem::new()
        .with_dir(ARTICLES)
        .unwrap()
        .with_file(INDEX, index_json(&names).as_bytes())
        .unwrap();
    for article in articles {
        system = system
            .with_file(
                article_path(&article.filename()),
                to_pretty_json(article).unwrap().as_bytes(),
            )
            .unwrap();
    }
    system
}
