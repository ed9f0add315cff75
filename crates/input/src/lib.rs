//! Terminal input module (driver-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::TrayAction`]. The tray is
//! menu-driven, one keypress per command, so there is no key-repeat or
//! held-key handling.

pub mod map;

pub use tetris_stack_types as types;

pub use map::{handle_key_event, should_quit};
