//! Terminal rendering layer for the piece tray.
//!
//! This intentionally avoids ratatui widgets/layout and instead renders into
//! a simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw from snapshots so rendering can never mutate tray state
//! - Encode a full frame into one buffered write

pub mod fb;
pub mod renderer;
pub mod tray_view;

pub use tetris_stack_core as core;
pub use tetris_stack_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_full_into, TerminalRenderer};
pub use tray_view::{AnchorY, StatusLine, TrayView, Viewport};
