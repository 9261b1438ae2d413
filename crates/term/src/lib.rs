//! Terminal rendering for the game.
//!
//! - [`fb`]: styled-cell framebuffer
//! - [`renderer`]: flushes a framebuffer to a raw-mode terminal
//! - [`game_view`]: pure snapshot-to-framebuffer view
//! - [`setup`]: pre-game setup screens (prompt, placement, turn assignment)

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod setup;

pub use tui_bomber_core as core;
pub use tui_bomber_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
pub use setup::{SetupChoice, SetupScreen, SetupStage};
