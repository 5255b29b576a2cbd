use std::{fs, io::ErrorKind, path::Path};

use anyhow::Context;
use client_core::{SheetsEndpoint, DEFAULT_API_BASE, DEFAULT_RANGE};
use serde::Deserialize;
use view::{AboutTitles, DEFAULT_THUMBNAIL};

/// One info box on the page. Without a `key` the heading goes through the
/// standard heading table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AboutBoxSetting {
    pub title: String,
    #[serde(default)]
    pub key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub sheet_id: String,
    pub api_key: String,
    pub range: String,
    pub api_base: String,
    pub default_thumbnail: String,
    pub page_title: String,
    /// Info boxes in page order.
    pub about_boxes: Vec<AboutBoxSetting>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sheet_id: String::new(),
            api_key: String::new(),
            range: DEFAULT_RANGE.into(),
            api_base: DEFAULT_API_BASE.into(),
            default_thumbnail: DEFAULT_THUMBNAIL.into(),
            page_title: "Portfolio".into(),
            about_boxes: [
                "Say Hello!",
                "Where I Am Now?",
                "What Drives Me?",
                "My Skills and Approach",
                "Let's Connect!",
            ]
            .into_iter()
            .map(|title| AboutBoxSetting {
                title: title.to_string(),
                key: None,
            })
            .collect(),
        }
    }
}

impl Settings {
    pub fn endpoint(&self) -> SheetsEndpoint {
        SheetsEndpoint::new(&self.sheet_id, &self.api_key)
            .with_api_base(&self.api_base)
            .with_range(&self.range)
    }

    /// Standard heading table extended with the explicitly keyed boxes.
    pub fn about_title_table(&self) -> AboutTitles {
        let mut table = AboutTitles::standard();
        for about_box in &self.about_boxes {
            if let Some(key) = &about_box.key {
                table.insert(about_box.title.as_str(), key.as_str());
            }
        }
        table
    }

    pub fn about_box_titles(&self) -> impl Iterator<Item = &str> {
        self.about_boxes.iter().map(|about_box| about_box.title.as_str())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    sheet_id: Option<String>,
    api_key: Option<String>,
    range: Option<String>,
    api_base: Option<String>,
    default_thumbnail: Option<String>,
    page_title: Option<String>,
    about_boxes: Option<Vec<AboutBoxSetting>>,
}

/// Defaults, then `path` if it exists, then the process environment.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => apply_file(&mut settings, &raw)
            .with_context(|| format!("invalid settings file '{}'", path.display()))?,
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()))
        }
    }

    apply_env(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg: FileSettings = toml::from_str(raw)?;

    if let Some(v) = file_cfg.sheet_id {
        settings.sheet_id = v;
    }
    if let Some(v) = file_cfg.api_key {
        settings.api_key = v;
    }
    if let Some(v) = file_cfg.range {
        settings.range = v;
    }
    if let Some(v) = file_cfg.api_base {
        settings.api_base = v;
    }
    if let Some(v) = file_cfg.default_thumbnail {
        settings.default_thumbnail = v;
    }
    if let Some(v) = file_cfg.page_title {
        settings.page_title = v;
    }
    if let Some(boxes) = file_cfg.about_boxes {
        settings.about_boxes = boxes;
    }
    Ok(())
}

fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("PORTFOLIO_SHEET_ID") {
        settings.sheet_id = v;
    }
    if let Some(v) = var("APP__SHEET_ID") {
        settings.sheet_id = v;
    }

    if let Some(v) = var("PORTFOLIO_API_KEY") {
        settings.api_key = v;
    }
    if let Some(v) = var("APP__API_KEY") {
        settings.api_key = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
