//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] for the two
//! players and [`crate::types::SetupAction`] for the pre-game setup screens.
//! Independent of any UI framework.

pub mod map;

pub use tui_bomber_types as types;

pub use map::{handle_key_event, map_setup_key, should_quit};
