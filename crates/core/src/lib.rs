//! Core game logic - pure, deterministic, and testable.
//!
//! This crate contains all the game rules and state management. It performs
//! no I/O, making it:
//!
//! - **Deterministic**: the same seed produces an identical game
//! - **Testable**: every rule has unit tests against plain data
//! - **Portable**: runs headless or behind any renderer
//!
//! # Module Structure
//!
//! - [`board`]: the 15x15 tile map with wall generation and AABB collision
//! - [`bomb`]: the bomb entity and live-collection lookups
//! - [`chain`]: the breadth-first chain-reaction propagator
//! - [`queue`]: the count-based detonation queue
//! - [`explosion`]: explosion markers with expiry
//! - [`player`]: tile-targeted player movement
//! - [`session`]: `GameState`, the single owner of all mutable game state
//! - [`rng`]: deterministic LCG used for map generation and bomb scattering
//! - [`snapshot`]: read-only per-frame state for the renderer
//!
//! # The chain rules in one paragraph
//!
//! Detonating a bomb removes it, leaves an explosion marker, and spreads to
//! the four cardinally adjacent tiles. An adjacent player bomb detonates and
//! spreads further. An adjacent pre-placed bomb absorbs one hit per chain
//! while its countdown lasts and detonates once the countdown is spent; a
//! surviving bomb never relays the chain past itself. Walls never stop a
//! chain - only bomb-to-bomb adjacency matters.
//!
//! # Example
//!
//! ```
//! use tui_bomber_core::{Board, GameState, SimpleRng};
//! use tui_bomber_types::{GameAction, Position, TICK_MS};
//!
//! let mut game = GameState::with_board(Board::empty(), SimpleRng::new(1));
//! game.scatter_initial_bombs(5);
//!
//! game.apply_action(0, GameAction::DropBomb);
//! game.tick(TICK_MS);
//!
//! assert!(game.bombs().len() >= 1);
//! ```

pub mod board;
pub mod bomb;
pub mod chain;
pub mod explosion;
pub mod player;
pub mod queue;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use tui_bomber_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use bomb::{bomb_at, has_neighboring_bomb, Bomb, BombId};
pub use chain::detonate;
pub use explosion::Explosion;
pub use player::Player;
pub use queue::DetonationQueue;
pub use rng::SimpleRng;
pub use session::GameState;
pub use snapshot::{BombSnapshot, GameSnapshot, PlayerSnapshot};
