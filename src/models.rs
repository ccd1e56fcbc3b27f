use std::time::Duration;

use animeviewer_core::{LoaderOptions, DEFAULT_BASE_URL, DEFAULT_PAGES, DEFAULT_PAGE_DELAY, DEFAULT_PAGE_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn from_str(s: &str) -> Option<Theme> {
        match s {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Portuguese,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Portuguese => "pt",
        }
    }

    pub fn from_code(s: &str) -> Option<Language> {
        match s {
            "en" => Some(Language::English),
            "pt" | "pt-BR" => Some(Language::Portuguese),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Portuguese => "Português",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base_url: String,
    pub pages: u32,
    pub page_size: u32,
    pub page_delay_ms: u64,
    pub theme: Theme,
    pub language: Language,
    pub font_scale: f32,    // 0.6..=2.0
    pub cover_parallel: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            pages: DEFAULT_PAGES,
            page_size: DEFAULT_PAGE_SIZE,
            page_delay_ms: DEFAULT_PAGE_DELAY.as_millis() as u64,
            theme: Theme::Dark,
            language: Language::English,
            font_scale: 1.0,
            cover_parallel: 6,
        }
    }
}

impl Config {
    pub fn loader_options(&self) -> LoaderOptions {
        LoaderOptions {
            pages: self.pages,
            page_size: self.page_size,
            page_delay: Duration::from_millis(self.page_delay_ms),
        }
    }
}
