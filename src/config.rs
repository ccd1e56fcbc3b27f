use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use animeviewer_core::MAX_PAGES;
use tracing::{debug, warn};

use crate::models::{Config, Language, Theme};

const CONFIG_FILE_NAME: &str = "animeviewer_config.txt";

fn config_dir() -> PathBuf {
    directories::ProjectDirs::from("io", "animeviewer", "AnimeViewer")
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn config_file_path() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

fn valid_base_url(v: &str) -> Option<String> {
    let parsed = url::Url::parse(v).ok()?;
    match parsed.scheme() {
        "http" | "https" if parsed.has_host() => Some(v.trim_end_matches('/').to_string()),
        _ => None,
    }
}

/// Parses `key=value` lines. Unknown keys are ignored and bad values keep the default.
pub fn parse_config(content: &str) -> Config {
    let mut cfg = Config::default();
    let defaults = Config::default();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((k, v)) = line.split_once('=') else { continue };
        let v = v.trim();
        match k.trim() {
            "api_base_url" => match valid_base_url(v) {
                Some(u) => cfg.api_base_url = u,
                None => warn!(value = v, "ignoring invalid api_base_url"),
            },
            "pages" => cfg.pages = v.parse::<u32>().ok().filter(|n| (1..=MAX_PAGES).contains(n)).unwrap_or(defaults.pages),
            "page_size" => cfg.page_size = v.parse::<u32>().ok().filter(|n| (1..=25).contains(n)).unwrap_or(defaults.page_size),
            "page_delay_ms" => cfg.page_delay_ms = v.parse::<u64>().unwrap_or(defaults.page_delay_ms),
            "theme" => cfg.theme = Theme::from_str(v).unwrap_or_default(),
            "language" => cfg.language = Language::from_code(v).unwrap_or_default(),
            "font_scale" => cfg.font_scale = v.parse::<f32>().map(|s| s.clamp(0.6, 2.0)).unwrap_or(defaults.font_scale),
            "cover_parallel" => cfg.cover_parallel = v.parse::<u32>().ok().filter(|n| *n > 0).unwrap_or(defaults.cover_parallel),
            other => debug!(key = other, "unknown config key"),
        }
    }
    cfg
}

pub fn render_config(cfg: &Config) -> String {
    let mut out = String::new();
    out.push_str(&format!("api_base_url={}\n", cfg.api_base_url));
    out.push_str(&format!("pages={}\n", cfg.pages));
    out.push_str(&format!("page_size={}\n", cfg.page_size));
    out.push_str(&format!("page_delay_ms={}\n", cfg.page_delay_ms));
    out.push_str(&format!("theme={}\n", cfg.theme.as_str()));
    out.push_str(&format!("language={}\n", cfg.language.code()));
    out.push_str(&format!("font_scale={:.2}\n", cfg.font_scale));
    out.push_str(&format!("cover_parallel={}\n", cfg.cover_parallel));
    out
}

pub fn read_config_from(path: &Path) -> Result<Config, io::Error> {
    Ok(parse_config(&fs::read_to_string(path)?))
}

pub fn read_config() -> Result<Config, io::Error> {
    // Platform config dir first, then a file next to the working directory.
    match read_config_from(&config_file_path()) {
        Ok(cfg) => Ok(cfg),
        Err(_) => read_config_from(Path::new(CONFIG_FILE_NAME)),
    }
}

/// Reads the config, falling back to defaults when no file exists yet.
pub fn load_or_default() -> Config {
    match read_config() {
        Ok(cfg) => cfg,
        Err(e) if e.kind() == io::ErrorKind::NotFound => Config::default(),
        Err(e) => {
            warn!(error = %e, "could not read config, using defaults");
            Config::default()
        }
    }
}

pub fn save_config_to(path: &Path, cfg: &Config) -> Result<(), io::Error> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, render_config(cfg))
}

pub fn save_config(cfg: &Config) -> Result<(), io::Error> {
    save_config_to(&config_file_path(), cfg)
}
