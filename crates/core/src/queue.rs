//! Queue module - fixed-capacity FIFO of upcoming pieces
//!
//! The queue is an explicit ring: a fixed slot array plus a front index and a
//! length, with wraparound arithmetic keeping logical order stable as pieces
//! cycle through the array. Invariants:
//!
//! - `len <= QUEUE_CAPACITY` at all times; bounds are checked before any
//!   mutation
//! - when `len > 0` the front index references an occupied slot
//! - dequeue order equals enqueue order (strict FIFO); only the explicit
//!   swap operations reorder slots, and they never change `len`

use crate::error::BufferError;
use crate::types::{Piece, QUEUE_CAPACITY};

/// Fixed-capacity circular buffer of upcoming pieces.
///
/// Created empty; the driver fills it to capacity at session start and every
/// play/reserve refills what it removes, so in normal play the queue stays
/// full.
///
/// # Examples
///
/// ```
/// use tetris_stack_core::queue::PieceQueue;
/// use tetris_stack_types::{Piece, PieceKind};
///
/// let mut queue = PieceQueue::new();
/// queue.enqueue(Piece::new(PieceKind::I, 0)).unwrap();
/// queue.enqueue(Piece::new(PieceKind::T, 1)).unwrap();
///
/// assert_eq!(queue.len(), 2);
/// assert_eq!(queue.peek_front().unwrap().id(), 0);
/// assert_eq!(queue.dequeue().unwrap().id(), 0);
/// assert_eq!(queue.dequeue().unwrap().id(), 1);
/// assert!(queue.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceQueue {
    slots: [Option<Piece>; QUEUE_CAPACITY],
    front: usize,
    len: usize,
}

impl PieceQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            slots: [None; QUEUE_CAPACITY],
            front: 0,
            len: 0,
        }
    }

    /// Physical slot index of the piece `offset` positions behind the front.
    #[inline(always)]
    fn index(&self, offset: usize) -> usize {
        (self.front + offset) % QUEUE_CAPACITY
    }

    /// Append a piece at the logical back.
    ///
    /// Fails with `CapacityExceeded` when the queue already holds
    /// `QUEUE_CAPACITY` pieces; the queue is unchanged and the caller decides
    /// what to do with the piece.
    pub fn enqueue(&mut self, piece: Piece) -> Result<(), BufferError> {
        if self.is_full() {
            return Err(BufferError::CapacityExceeded);
        }
        let back = self.index(self.len);
        self.slots[back] = Some(piece);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the logical front piece.
    ///
    /// Fails with `Empty` when the queue holds nothing; no sentinel pieces.
    pub fn dequeue(&mut self) -> Result<Piece, BufferError> {
        // take() leaves the vacated slot None, which keeps the all-slots-None
        // representation for an empty queue.
        let piece = self.slots[self.front].take().ok_or(BufferError::Empty)?;
        self.front = (self.front + 1) % QUEUE_CAPACITY;
        self.len -= 1;
        Ok(piece)
    }

    /// Return the front piece without removing it.
    pub fn peek_front(&self) -> Result<Piece, BufferError> {
        self.slots[self.front].ok_or(BufferError::Empty)
    }

    /// The piece `offset` positions behind the front (`get(0)` equals the
    /// front). `None` when `offset >= len`.
    pub fn get(&self, offset: usize) -> Option<Piece> {
        if offset >= self.len {
            return None;
        }
        self.slots[self.index(offset)]
    }

    /// Mutable access to an occupied logical slot, for the in-place swap
    /// operations. Offsets at or past `len` yield `None`.
    pub(crate) fn get_mut(&mut self, offset: usize) -> Option<&mut Piece> {
        if offset >= self.len {
            return None;
        }
        let idx = self.index(offset);
        self.slots[idx].as_mut()
    }

    /// Iterate the queued pieces front to back.
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        (0..self.len).filter_map(move |offset| self.slots[self.index(offset)])
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == QUEUE_CAPACITY
    }

    /// Number of pieces currently queued.
    pub fn len(&self) -> usize {
        self.len
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new()
    }
}
