use animeviewer_core::{ErrorKind, Failure};

use crate::models::Language;

/// Translation function - returns localized string based on language
pub fn t(key: &str, lang: Language) -> String {
    match (key, lang) {
        // Header
        ("app_title", _) => "AnimeViewer",
        ("search_placeholder", Language::English) => "🔍 Search anime...",
        ("search_placeholder", Language::Portuguese) => "🔍 Pesquisar animes...",
        ("home", Language::English) => "Home",
        ("home", Language::Portuguese) => "Início",
        ("settings", Language::English) => "⚙ Settings",
        ("settings", Language::Portuguese) => "⚙ Configurações",

        // Listing
        ("hero_title", Language::English) => "Discover the Most Popular Anime",
        ("hero_title", Language::Portuguese) => "Descubra os Animes Mais Populares",
        ("hero_text", Language::English) => "Explore a curated collection of the most popular anime on MyAnimeList. Find your next favorite series with detailed information, ratings and synopses.",
        ("hero_text", Language::Portuguese) => "Explore uma coleção curada dos animes mais populares do MyAnimeList. Encontre suas próximas séries favoritas com informações detalhadas, avaliações e sinopses.",
        ("loading_catalog", Language::English) => "Loading anime...",
        ("loading_catalog", Language::Portuguese) => "Carregando animes...",
        ("catalog_error", Language::English) => "Failed to load anime",
        ("catalog_error", Language::Portuguese) => "Erro ao carregar animes",
        ("no_results_title", Language::English) => "No anime found",
        ("no_results_title", Language::Portuguese) => "Nenhum anime encontrado",
        ("no_results_hint", Language::English) => "Try a different search or browse all anime",
        ("no_results_hint", Language::Portuguese) => "Tente uma pesquisa diferente ou navegue por todos os animes",
        ("show_all", Language::English) => "Show all anime",
        ("show_all", Language::Portuguese) => "Ver Todos os Animes",
        ("no_synopsis", Language::English) => "No synopsis available",
        ("no_synopsis", Language::Portuguese) => "Sem sinopse disponível",

        // Detail
        ("back", Language::English) => "⬅ Back",
        ("back", Language::Portuguese) => "⬅ Voltar",
        ("loading", Language::English) => "Loading...",
        ("loading", Language::Portuguese) => "Carregando...",
        ("detail_error", Language::English) => "Failed to load anime details",
        ("detail_error", Language::Portuguese) => "Falha ao carregar detalhes do anime",
        ("anime_not_found", Language::English) => "Anime not found",
        ("anime_not_found", Language::Portuguese) => "Anime não encontrado",
        ("votes", Language::English) => "votes",
        ("votes", Language::Portuguese) => "votos",
        ("ranking", _) => "Ranking",
        ("popularity", Language::English) => "Popularity",
        ("popularity", Language::Portuguese) => "Popularidade",
        ("episodes", Language::English) => "Episodes",
        ("episodes", Language::Portuguese) => "Episódios",
        ("aired", Language::English) => "Release",
        ("aired", Language::Portuguese) => "Lançamento",
        ("genres", Language::English) => "Genres",
        ("genres", Language::Portuguese) => "Gêneros",
        ("studios", Language::English) => "Studios",
        ("studios", Language::Portuguese) => "Estúdios",
        ("synopsis", Language::English) => "Synopsis",
        ("synopsis", Language::Portuguese) => "Sinopse",
        ("open_mal", Language::English) => "🌐 Open on MyAnimeList",
        ("open_mal", Language::Portuguese) => "🌐 Abrir no MyAnimeList",
        ("copy_link", Language::English) => "📋 Copy link",
        ("copy_link", Language::Portuguese) => "📋 Copiar link",
        ("link_copied", Language::English) => "Link copied to clipboard",
        ("link_copied", Language::Portuguese) => "Link copiado",
        ("clipboard_unavailable", Language::English) => "Clipboard not available",
        ("clipboard_unavailable", Language::Portuguese) => "Área de transferência indisponível",
        ("browser_failed", Language::English) => "Could not open the browser",
        ("browser_failed", Language::Portuguese) => "Não foi possível abrir o navegador",

        // Not found
        ("page_not_found_title", Language::English) => "404 - Page not found",
        ("page_not_found_title", Language::Portuguese) => "404 - Página não encontrada",
        ("page_not_found_text", Language::English) => "Sorry, the page you are looking for does not exist.",
        ("page_not_found_text", Language::Portuguese) => "Desculpe, a página que você procura não existe.",
        ("go_home", Language::English) => "🏠 Go home",
        ("go_home", Language::Portuguese) => "🏠 Voltar ao início",

        // Settings
        ("language", Language::English) => "Language",
        ("language", Language::Portuguese) => "Idioma",
        ("theme", Language::English) => "Theme",
        ("theme", Language::Portuguese) => "Tema",
        ("theme_dark", Language::English) => "Dark",
        ("theme_dark", Language::Portuguese) => "Escuro",
        ("theme_light", Language::English) => "Light",
        ("theme_light", Language::Portuguese) => "Claro",
        ("font_scale", Language::English) => "Font Scale",
        ("font_scale", Language::Portuguese) => "Tamanho da fonte",
        ("save", Language::English) => "💾 Save",
        ("save", Language::Portuguese) => "💾 Salvar",
        ("cancel", Language::English) => "❌ Cancel",
        ("cancel", Language::Portuguese) => "❌ Cancelar",
        ("settings_saved", Language::English) => "Settings saved",
        ("settings_saved", Language::Portuguese) => "Configurações salvas",
        ("settings_save_failed", Language::English) => "Failed to save settings",
        ("settings_save_failed", Language::Portuguese) => "Falha ao salvar configurações",

        // Fallback
        _ => key,
    }
    .to_string()
}

/// "Showing X of Y anime", with the active query when there is one.
pub fn showing_summary(shown: usize, total: usize, query: &str, lang: Language) -> String {
    let base = match lang {
        Language::English => format!("Showing {} of {} anime", shown, total),
        Language::Portuguese => format!("Mostrando {} de {} animes", shown, total),
    };
    if query.is_empty() {
        return base;
    }
    match lang {
        Language::English => format!("{} (search: \"{}\")", base, query),
        Language::Portuguese => format!("{} (pesquisa: \"{}\")", base, query),
    }
}

/// Headline for a failed screen. `fetch_key` names the message for plain fetch failures.
pub fn failure_title(failure: &Failure, fetch_key: &str, lang: Language) -> String {
    match failure.kind {
        ErrorKind::NotFound => t("anime_not_found", lang),
        ErrorKind::Fetch => t(fetch_key, lang),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_are_translated() {
        assert_eq!(t("home", Language::Portuguese), "Início");
        assert_eq!(t("home", Language::English), "Home");
        assert_eq!(t("app_title", Language::Portuguese), "AnimeViewer");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t("no_such_key", Language::English), "no_such_key");
    }

    #[test]
    fn summary_mentions_query_only_when_set() {
        assert_eq!(showing_summary(3, 100, "", Language::English), "Showing 3 of 100 anime");
        assert_eq!(
            showing_summary(3, 100, "naruto", Language::Portuguese),
            "Mostrando 3 de 100 animes (pesquisa: \"naruto\")"
        );
    }

    #[test]
    fn failure_titles_follow_kind() {
        let nf = Failure::not_found("anime 9 not found");
        assert_eq!(failure_title(&nf, "detail_error", Language::English), "Anime not found");
        let fetch = Failure { kind: ErrorKind::Fetch, message: "HTTP 500".into() };
        assert_eq!(failure_title(&fetch, "catalog_error", Language::Portuguese), "Erro ao carregar animes");
    }
}
