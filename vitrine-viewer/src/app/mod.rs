//! Application wiring for the carousel screen.

use iced::{Settings, Theme, window};

use crate::state::State;
use crate::{subscriptions, theme, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Run the Vitrine application with the provided configuration.
pub fn run(config: AppConfig) -> iced::Result {
    let window_settings = window::Settings {
        size: config.window_size,
        resizable: true,
        decorations: true,
        ..Default::default()
    };

    iced::application("Vitrine", update::update, view::view)
        .settings(default_settings())
        .subscription(subscriptions::subscription)
        .theme(app_theme)
        .window(window_settings)
        .run_with(move || bootstrap::runtime_boot(&config))
}

fn default_settings() -> Settings {
    Settings {
        id: Some("vitrine".to_string()),
        antialiasing: true,
        ..Default::default()
    }
}

fn app_theme(_: &State) -> Theme {
    theme::VitrineTheme::theme()
}
