//! TUI Bomber (workspace facade crate).
//!
//! This package keeps a single `tui_bomber::{core,input,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use tui_bomber_core as core;
pub use tui_bomber_input as input;
pub use tui_bomber_term as term;
pub use tui_bomber_types as types;
