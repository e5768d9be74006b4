//! Tests for the top-level menu loop

mod common;

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::common::*;
    use newsdesk::menu::run_menu;
    use newsdesk::model::ArticleIndex;
    use newsdesk::storage::NewsStore;
    use newsdesk::system::{MockSystem, System as _};
    use std::path::Path;

    const CREATE_DEMO: [&str; 10] = [
        "2025-01-demo",
        "2025-01",
        "",
        "Workshop de IoT",
        "Um dia inteiro de prototipagem.",
        "https://example.org/workshop",
        "",
        "",
        "",
        "",
    ];

    fn run(system: &MockSystem, answers: &[&str]) -> String {
        let store = NewsStore::new(system, config());
        let mut prompter = scripted(answers);
        run_menu(&mut prompter, &store, today()).unwrap();
        transcript(&prompter)
    }

    #[test]
    fn create_list_delete_exit() {
        let system = MockSystem::new();
        let mut answers = vec!["1"];
        answers.extend(CREATE_DEMO);
        answers.extend(["", "3", "", "9", "", "4", "1", "s", "", "5"]);

        let out = run(&system, &answers);

        assert!(out.contains("✅ Notícia salva em: /site/news/articles/2025-01-demo.json"));
        assert!(out.contains("✅ Notícia adicionada ao índice"));
        assert!(out.contains("✅ Índice atualizado em: /site/news/index.json"));
        assert!(out.contains("1. 2025-01-demo.json\n   📰 Workshop de IoT\n   📅 Janeiro 2025"));
        assert!(out.contains("❌ Opção inválida!"));
        assert!(out.contains("✅ Arquivo removido: /site/news/articles/2025-01-demo.json"));
        assert!(out.contains("✅ Removido do índice"));
        assert!(out.ends_with("👋 Até logo!\n\n"));

        assert!(!system
            .exists(Path::new(&article_path("2025-01-demo.json")))
            .unwrap());
        let index: ArticleIndex =
            serde_json::from_str(&system.read_to_string(Path::new(INDEX)).unwrap()).unwrap();
        assert!(index.articles.is_empty());
    }

    #[test]
    fn blank_menu_answer_means_create() {
        let system = MockSystem::new();
        let mut answers = vec![""];
        answers.extend(CREATE_DEMO);
        answers.extend(["", "5"]);

        let out = run(&system, &answers);

        assert!(out.contains("Escolha uma opção [1]: "));
        assert!(out.contains("📰 Criar Nova Notícia"));
        assert!(system
            .exists(Path::new(&article_path("2025-01-demo.json")))
            .unwrap());
    }

    #[test]
    fn end_of_input_leaves_quietly() {
        let system = MockSystem::new();

        let out = run(&system, &["3"]);

        assert!(out.contains("📭 Arquivo de índice não encontrado."));
        assert!(!out.contains("Até logo"));
    }

    #[test]
    fn end_of_input_mid_create_discards_draft() {
        let system = MockSystem::new();

        run(&system, &["1", "2025-01-demo", "2025-01", "", "Só o título"]);

        assert!(system.file_paths().unwrap().is_empty());
    }

    #[test]
    fn broken_index_is_reported_and_menu_continues() {
        let system = MockSystem::new().with_file(INDEX, b"{ broken").unwrap();

        let out = run(&system, &["3", "", "5"]);

        assert!(out.contains("❌ Erro: Failed to load the article index"));
        assert!(out.contains("👋 Até logo!"));
    }

    #[test]
    fn save_failure_is_reported() {
        let system = MockSystem::new()
            .with_read_only(article_path("2025-01-demo.json"))
            .unwrap();
        let mut answers = vec!["1"];
        answers.extend(CREATE_DEMO);
        answers.extend(["", "5"]);

        let out = run(&system, &answers);

        assert!(out.contains("❌ Erro ao salvar:"));
        assert!(!system.exists(Path::new(INDEX)).unwrap());
    }

    #[test]
    fn cancelled_create_leaves_storage_untouched() {
        let system = MockSystem::new();

        let out = run(&system, &["1", "2025-01-demo", "2025-01", "", "", "", "", "", "5"]);

        assert!(out.contains("❌ Título, descrição e link são obrigatórios!"));
        assert!(system.file_paths().unwrap().is_empty());
    }
}
