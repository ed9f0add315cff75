//! Snapshot module - read-only capture of the tray for rendering
//!
//! The view draws from a `TraySnapshot` instead of borrowing the live
//! structures, so rendering can never mutate game state and a capture can be
//! reused across frames with `capture_into`. Both piece lists are bounded
//! inline vectors; capturing allocates nothing.

use arrayvec::ArrayVec;

use crate::queue::PieceQueue;
use crate::stack::PieceStack;
use crate::types::{Piece, QUEUE_CAPACITY, STACK_CAPACITY, SWAP_SPAN};

/// Immutable view of the tray: queue front-to-back, stack top-to-bottom.
///
/// The availability predicates mirror the transfer preconditions so the
/// menu can dim operations that would fail.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TraySnapshot {
    /// Upcoming pieces, front first.
    pub upcoming: ArrayVec<Piece, QUEUE_CAPACITY>,
    /// Reserved pieces, top first.
    pub reserved: ArrayVec<Piece, STACK_CAPACITY>,
}

impl TraySnapshot {
    /// Capture the current state of both structures.
    pub fn capture(queue: &PieceQueue, stack: &PieceStack) -> Self {
        let mut snapshot = Self::default();
        snapshot.capture_into(queue, stack);
        snapshot
    }

    /// Refill this snapshot in place from the live structures.
    pub fn capture_into(&mut self, queue: &PieceQueue, stack: &PieceStack) {
        self.upcoming.clear();
        self.upcoming.extend(queue.iter());
        self.reserved.clear();
        self.reserved.extend(stack.iter_from_top());
    }

    /// True when play/reserve have a front piece to take.
    pub fn can_take_front(&self) -> bool {
        !self.upcoming.is_empty()
    }

    /// True when a recall has something to pop.
    pub fn can_recall(&self) -> bool {
        !self.reserved.is_empty()
    }

    /// True when the single swap has both slots occupied.
    pub fn can_swap_front_top(&self) -> bool {
        !self.upcoming.is_empty() && !self.reserved.is_empty()
    }

    /// True when the block swap precondition holds: three queued pieces and
    /// a full reserve.
    pub fn can_swap_three(&self) -> bool {
        self.upcoming.len() >= SWAP_SPAN && self.reserved.len() == STACK_CAPACITY
    }

    /// Forget all captured pieces.
    pub fn clear(&mut self) {
        self.upcoming.clear();
        self.reserved.clear();
    }
}
