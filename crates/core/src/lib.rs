//! Core tray logic module - pure, deterministic, and testable
//!
//! This module contains the two fixed-capacity piece containers and the
//! transfer rules between them. It has **zero dependencies** on UI or I/O,
//! making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Every operation works on borrowed structures, so tests
//!   build exactly the states they need
//! - **Portable**: Can run in any environment (terminal, headless, scripted)
//!
//! # Module Structure
//!
//! - [`queue`]: 5-slot circular FIFO of upcoming pieces
//! - [`stack`]: 3-slot LIFO of reserved pieces
//! - [`transfer`]: play/reserve/recall and the two in-place swaps
//! - [`rng`]: LCG-backed generator dealing uniform kinds with monotonic ids
//! - [`snapshot`]: read-only capture of both containers for rendering
//! - [`error`]: recoverable container and transfer errors
//!
//! # Tray Rules
//!
//! - The queue is refilled to capacity after every play and reserve, so the
//!   player always sees five upcoming pieces
//! - Reserving onto a full stack loses the dequeued piece; the queue is
//!   still refilled
//! - The single swap exchanges queue front and stack top in place; the block
//!   swap exchanges the first three queue slots with the full stack
//! - Failed operations never partially mutate either container
//!
//! # Example
//!
//! ```
//! use tetris_stack_core::{transfer, PieceGenerator, PieceQueue, PieceStack};
//!
//! let mut generator = PieceGenerator::new(12345);
//! let mut queue = PieceQueue::new();
//! let mut stack = PieceStack::new();
//! while !queue.is_full() {
//!     queue.enqueue(generator.next_piece()).unwrap();
//! }
//!
//! // Put the front piece in reserve, then take it back.
//! let reserved = transfer::reserve(&mut queue, &mut stack, &mut generator).unwrap();
//! assert_eq!(stack.peek_top().unwrap(), reserved);
//! let recalled = transfer::recall(&mut stack).unwrap();
//! assert_eq!(recalled, reserved);
//!
//! // The refill kept the queue full the whole time.
//! assert!(queue.is_full());
//! ```

pub mod error;
pub mod queue;
pub mod rng;
pub mod snapshot;
pub mod stack;
pub mod transfer;

pub use tetris_stack_types as types;

// Re-export commonly used types for convenience
pub use error::{BufferError, TransferError};
pub use queue::PieceQueue;
pub use rng::{PieceGenerator, SimpleRng};
pub use snapshot::TraySnapshot;
pub use stack::PieceStack;
