//! Vitrine: an auto-advancing image carousel for the desktop.
//!
//! The screen is a single iced application: a horizontal strip of image
//! tiles that advances on a timer, layered over a full-bleed backdrop
//! that tracks whichever tile is currently first in view.

pub mod app;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod image_pipeline;
pub mod message;
pub mod state;
pub mod subscriptions;
pub mod theme;
pub mod update;
pub mod view;
pub mod views;

pub use message::Message;
pub use state::State;
