//! Update-loop tests for the carousel: auto-advance targets, backdrop
//! synchronization, wraparound, and the single-image self-loop.

use std::time::{Duration, Instant};

use iced::Size;
use iced::widget::image::Handle;

use vitrine_model::Gallery;
use vitrine_viewer::app::bootstrap::{AppConfig, base_state};
use vitrine_viewer::image_pipeline::ImageState;
use vitrine_viewer::message::Message;
use vitrine_viewer::state::State;
use vitrine_viewer::update::update;

/// Build a state over `urls` in a window of the given width. The strip
/// viewport is the window minus its horizontal padding; tests pick
/// widths so the aligned offsets they drive to stay reachable.
fn state(urls: &[&str], window_width: f32) -> State {
    let config = AppConfig {
        gallery: Gallery::from_urls(urls.iter().copied()).expect("gallery"),
        period: Duration::from_millis(3000),
        pulse: true,
        window_size: Size::new(window_width, 720.0),
    };
    base_state(&config)
}

/// Three 300px tiles with 8px gaps in a 300px strip viewport: indices
/// 0, 1, and 2 all have exactly aligned offsets (0, 308, 616).
fn narrow_state(urls: &[&str]) -> State {
    state(urls, 320.0)
}

/// Drive frame ticks until the in-flight transition settles.
fn settle(state: &mut State) {
    let mut now = Instant::now();
    let step = Duration::from_millis(16);
    for _ in 0..200 {
        now += step;
        let _ = update(state, Message::FrameTick(now));
        if !state.animator.is_active() {
            return;
        }
    }
    panic!("transition did not settle");
}

#[test]
fn initial_backdrop_is_the_first_image() {
    let state = narrow_state(&["a", "b", "c"]);
    assert_eq!(state.background.as_str(), "a");
    assert_eq!(state.carousel.visible_index, 0);
}

#[test]
fn backdrop_follows_the_visible_index() {
    let mut state = state(&["a", "b", "c", "d", "e"], 640.0);
    let stride = state.carousel.stride();

    state.carousel.set_scroll_x(stride);
    assert!(state.sync_background());
    assert_eq!(state.background.as_str(), "b");

    state.carousel.set_scroll_x(2.0 * stride);
    assert!(state.sync_background());
    assert_eq!(state.background.as_str(), "c");
}

#[test]
fn backdrop_matches_entry_at_every_reachable_offset() {
    let mut state = state(&["a", "b", "c", "d", "e"], 640.0);
    let stride = state.carousel.stride();

    for i in 0..state.gallery.len() {
        state.carousel.set_scroll_x(i as f32 * stride);
        state.sync_background();
        let index = state.carousel.visible_index;
        assert_eq!(
            state.background.as_str(),
            state.gallery.entry(index).as_str()
        );
    }
}

#[test]
fn reobserving_an_unchanged_index_is_a_no_op() {
    let mut state = narrow_state(&["a", "b", "c"]);
    let stride = state.carousel.stride();

    state.carousel.set_scroll_x(stride);
    assert!(state.sync_background());
    let before = state.background.clone();

    assert!(!state.sync_background());
    assert_eq!(state.background, before);
}

#[test]
fn auto_advance_targets_the_next_aligned_offset() {
    let mut state = state(&["a", "b", "c", "d", "e"], 640.0);
    let _ = update(&mut state, Message::AutoAdvance);

    assert!(state.animator.is_active());
    assert_eq!(state.animator.target(), state.carousel.index_to_scroll(1));
}

#[test]
fn auto_advance_wraps_back_to_the_start() {
    let mut state = narrow_state(&["a", "b", "c"]);
    let stride = state.carousel.stride();

    // Visible index 2, then the next tick: target wraps to offset 0.
    state.carousel.set_scroll_x(2.0 * stride);
    state.sync_background();
    assert_eq!(state.carousel.visible_index, 2);

    let _ = update(&mut state, Message::AutoAdvance);
    assert_eq!(state.animator.target(), 0.0);

    settle(&mut state);
    assert_eq!(state.carousel.visible_index, 0);
    assert_eq!(state.background.as_str(), "a");
}

#[test]
fn a_full_cycle_of_advances_visits_every_tile() {
    let mut state = narrow_state(&["a", "b", "c"]);
    let mut seen = Vec::new();

    for _ in 0..3 {
        let _ = update(&mut state, Message::AutoAdvance);
        settle(&mut state);
        seen.push(state.background.as_str().to_string());
    }

    assert_eq!(seen, vec!["b", "c", "a"]);
}

#[test]
fn single_image_gallery_self_loops() {
    let mut state = narrow_state(&["a"]);

    for _ in 0..4 {
        let _ = update(&mut state, Message::AutoAdvance);
        assert_eq!(state.animator.target(), 0.0);
        settle(&mut state);
        assert_eq!(state.carousel.visible_index, 0);
        assert_eq!(state.background.as_str(), "a");
    }
}

#[test]
fn a_tick_during_a_transition_rebases_instead_of_waiting() {
    let mut state = state(&["a", "b", "c", "d", "e"], 640.0);

    let _ = update(&mut state, Message::AutoAdvance);
    let mut now = Instant::now();
    for _ in 0..4 {
        now += Duration::from_millis(16);
        let _ = update(&mut state, Message::FrameTick(now));
    }
    let mid_flight = state.carousel.scroll_x;

    // The next tick fires while the first transition is still running:
    // it restarts from wherever the strip is, it does not queue.
    let _ = update(&mut state, Message::AutoAdvance);
    assert!(state.animator.is_active());
    assert_eq!(state.animator.target(), state.carousel.index_to_scroll(1));

    settle(&mut state);
    assert!(state.carousel.scroll_x >= mid_flight);
    assert_eq!(state.carousel.visible_index, 1);
    assert_eq!(state.background.as_str(), "b");
}

#[test]
fn manual_steps_use_the_same_advance_path() {
    let mut state = state(&["a", "b", "c", "d", "e"], 640.0);

    let _ = update(&mut state, Message::StepRight);
    settle(&mut state);
    assert_eq!(state.background.as_str(), "b");

    let _ = update(&mut state, Message::StepLeft);
    settle(&mut state);
    assert_eq!(state.background.as_str(), "a");
}

#[test]
fn step_left_from_the_start_wraps_to_the_end() {
    let mut state = narrow_state(&["a", "b", "c"]);

    let _ = update(&mut state, Message::StepLeft);
    assert_eq!(state.animator.target(), state.carousel.index_to_scroll(2));
}

#[test]
fn image_completions_land_in_the_cache() {
    let mut state = narrow_state(&["https://host/a.jpg", "https://host/b.jpg"]);

    let _ = update(
        &mut state,
        Message::ImageLoaded {
            url: "https://host/a.jpg".to_string(),
            result: Ok(Handle::from_rgba(1, 1, vec![255, 255, 255, 255])),
        },
    );
    let _ = update(
        &mut state,
        Message::ImageLoaded {
            url: "https://host/b.jpg".to_string(),
            result: Err("HTTP 404".to_string()),
        },
    );

    assert!(state.images.handle("https://host/a.jpg").is_some());
    assert!(matches!(
        state.images.get("https://host/b.jpg"),
        Some(ImageState::Failed)
    ));
}
