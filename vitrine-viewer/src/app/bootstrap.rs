//! Startup: configuration resolution and the boot task batch.

use std::time::Duration;

use anyhow::Context;
use iced::{Size, Task};

use vitrine_model::Gallery;

use crate::config::Config;
use crate::image_pipeline;
use crate::message::Message;
use crate::state::State;

/// Resolved launch configuration: the validated gallery plus screen
/// settings, merged from the config file and environment overrides.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gallery: Gallery,
    pub period: Duration,
    pub pulse: bool,
    pub window_size: Size,
}

impl AppConfig {
    pub fn resolve() -> anyhow::Result<Self> {
        let file = Config::load();
        let images_env = std::env::var("VITRINE_IMAGES").ok();
        let period_env = std::env::var("VITRINE_PERIOD_MS").ok();
        Self::from_parts(file, images_env.as_deref(), period_env.as_deref())
    }

    /// Merge the config file with environment overrides. Split out of
    /// `resolve` so tests can drive it without touching the process
    /// environment.
    pub fn from_parts(
        file: Config,
        images_env: Option<&str>,
        period_env: Option<&str>,
    ) -> anyhow::Result<Self> {
        let urls = match images_env {
            Some(raw) => split_image_list(raw),
            None => file.images.clone(),
        };
        let gallery = Gallery::from_urls(urls).context(
            "no images configured; set VITRINE_IMAGES or the config file's \
             \"images\" list",
        )?;

        let period_ms = match period_env {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => ms,
                _ => {
                    log::warn!("ignoring invalid VITRINE_PERIOD_MS: {raw}");
                    file.period_ms
                }
            },
            None => file.period_ms,
        };

        Ok(Self {
            gallery,
            period: Duration::from_millis(period_ms.max(1)),
            pulse: file.pulse,
            window_size: Size::new(file.window_width, file.window_height),
        })
    }
}

/// Split a comma-separated URL list, dropping blanks.
pub fn split_image_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Boot logic shared by the runtime application and tests.
pub fn base_state(config: &AppConfig) -> State {
    State::new(
        config.gallery.clone(),
        config.window_size.width,
        config.period,
        config.pulse,
    )
}

/// Boot logic for the running application, returning the initial state
/// and the startup task batch.
pub fn runtime_boot(config: &AppConfig) -> (State, Task<Message>) {
    let state = base_state(config);

    let mut tasks = Vec::new();
    for image_ref in &state.gallery {
        let url = image_ref.as_str().to_string();
        // Duplicate entries share one fetch.
        if !state.images.begin(&url) {
            continue;
        }
        let loader = state.loader.clone();
        tasks.push(Task::perform(
            image_pipeline::fetch(loader, url),
            |(url, result)| Message::ImageLoaded { url, result },
        ));
    }

    // First advance fires at entry; the periodic timer takes over
    // from there.
    tasks.push(Task::done(Message::AutoAdvance));

    (state, Task::batch(tasks))
}
