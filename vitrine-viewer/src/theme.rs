//! Color constants and widget styles for the carousel screen.

use iced::{
    Background, Border, Color, Shadow, Theme, theme,
    widget::{button, container},
};

use crate::constants::TILE_RADIUS;

/// Light backdrop with dark cards.
#[derive(Debug, Clone, Copy)]
pub struct VitrineTheme;

impl VitrineTheme {
    /// Fill color behind the backdrop image.
    pub const BACKDROP: Color = Color::from_rgb(0.8, 0.8, 0.8);

    pub const CARD_BG: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const CARD_BORDER: Color = Color::from_rgb(0.2, 0.2, 0.2);

    pub const TEXT_PRIMARY: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const TEXT_DIMMED: Color = Color::from_rgb(0.5, 0.5, 0.5);

    pub const OVERLAY: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.35);
    pub const OVERLAY_HOVER: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.55);

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::LIGHT;
        palette.background = Self::BACKDROP;
        palette.text = Color::BLACK;

        Theme::custom("Vitrine".to_string(), palette)
    }
}

// Container styles using closures
#[derive(Debug)]
pub enum Container {
    Backdrop,
    Tile,
    Placeholder,
}

impl Container {
    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            Container::Backdrop => |_| container::Style {
                text_color: None,
                background: Some(Background::Color(VitrineTheme::BACKDROP)),
                border: Border::default(),
                shadow: Shadow::default(),
            },
            Container::Tile => |_| container::Style {
                text_color: None,
                background: Some(Background::Color(VitrineTheme::CARD_BG)),
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: TILE_RADIUS.into(),
                },
                shadow: Shadow::default(),
            },
            Container::Placeholder => |_| container::Style {
                text_color: Some(VitrineTheme::TEXT_DIMMED),
                background: Some(Background::Color(VitrineTheme::CARD_BG)),
                border: Border {
                    color: VitrineTheme::CARD_BORDER,
                    width: 1.0,
                    radius: TILE_RADIUS.into(),
                },
                shadow: Shadow::default(),
            },
        }
    }
}

#[derive(Debug)]
pub enum Button {
    Chevron,
}

impl Button {
    pub fn style(&self) -> fn(&Theme, button::Status) -> button::Style {
        match self {
            Button::Chevron => |_, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        VitrineTheme::OVERLAY_HOVER
                    }
                    _ => VitrineTheme::OVERLAY,
                };
                button::Style {
                    background: Some(Background::Color(background)),
                    text_color: VitrineTheme::TEXT_PRIMARY,
                    border: Border {
                        color: Color::TRANSPARENT,
                        width: 0.0,
                        radius: 16.0.into(),
                    },
                    shadow: Shadow::default(),
                }
            },
        }
    }
}
