//! Stack module - fixed-capacity LIFO of reserved pieces
//!
//! A linear bounded stack: the most recently reserved piece is the first one
//! recalled. Capacity is `STACK_CAPACITY` (3) and is checked before any
//! mutation; a failed push or pop never changes the contents.

use arrayvec::ArrayVec;

use crate::error::BufferError;
use crate::types::{Piece, STACK_CAPACITY};

/// Fixed-capacity LIFO of reserved pieces.
///
/// # Examples
///
/// ```
/// use tetris_stack_core::stack::PieceStack;
/// use tetris_stack_types::{Piece, PieceKind};
///
/// let mut stack = PieceStack::new();
/// stack.push(Piece::new(PieceKind::T, 7)).unwrap();
/// stack.push(Piece::new(PieceKind::L, 8)).unwrap();
///
/// assert_eq!(stack.peek_top().unwrap().id(), 8);
/// assert_eq!(stack.pop().unwrap().id(), 8);
/// assert_eq!(stack.peek_top().unwrap().id(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceStack {
    items: ArrayVec<Piece, STACK_CAPACITY>,
}

impl PieceStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    /// Push a piece on top.
    ///
    /// Fails with `CapacityExceeded` when the stack already holds
    /// `STACK_CAPACITY` pieces.
    pub fn push(&mut self, piece: Piece) -> Result<(), BufferError> {
        self.items
            .try_push(piece)
            .map_err(|_| BufferError::CapacityExceeded)
    }

    /// Remove and return the top piece.
    pub fn pop(&mut self) -> Result<Piece, BufferError> {
        self.items.pop().ok_or(BufferError::Empty)
    }

    /// Return the top piece without removing it.
    pub fn peek_top(&self) -> Result<Piece, BufferError> {
        self.items.last().copied().ok_or(BufferError::Empty)
    }

    /// The piece `depth` positions below the top (`get_from_top(0)` equals
    /// the top). `None` when `depth >= len`.
    pub fn get_from_top(&self, depth: usize) -> Option<Piece> {
        if depth >= self.items.len() {
            return None;
        }
        Some(self.items[self.items.len() - 1 - depth])
    }

    /// Mutable access to an occupied slot counted from the top, for the
    /// in-place swap operations.
    pub(crate) fn get_from_top_mut(&mut self, depth: usize) -> Option<&mut Piece> {
        let len = self.items.len();
        if depth >= len {
            return None;
        }
        self.items.get_mut(len - 1 - depth)
    }

    /// Iterate the reserved pieces top to bottom.
    pub fn iter_from_top(&self) -> impl Iterator<Item = Piece> + '_ {
        self.items.iter().rev().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    /// Number of pieces currently reserved.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl Default for PieceStack {
    fn default() -> Self {
        Self::new()
    }
}
