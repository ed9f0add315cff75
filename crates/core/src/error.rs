//! Error module - recoverable failures of the tray operations
//!
//! Every error here is value-returned and leaves the session running; the
//! driver prints the display string on the status line and waits for the
//! next command. Display strings are therefore written for the player, not
//! for logs.

/// Errors raised by the fixed-capacity containers.
///
/// Shared by the queue and the stack: both can only fail by being empty on
/// removal/peek or full on insertion. Bounds are checked before any
/// mutation, so a failed call never changes contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    #[error("no piece available")]
    Empty,

    #[error("capacity exceeded")]
    CapacityExceeded,
}

/// Errors raised by the transfer operations composing queue and stack.
///
/// These name the structure that blocked the operation so the status line
/// can tell the player what to do about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    #[error("the upcoming queue is empty")]
    QueueEmpty,

    #[error("the reserve stack is empty")]
    StackEmpty,

    #[error("reserve stack full, piece discarded")]
    StackFull,

    #[error("not enough pieces on both sides")]
    IncompatibleState,
}

impl TransferError {
    /// The display string as a `'static` str, for render paths that must
    /// not allocate.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferError::QueueEmpty => "the upcoming queue is empty",
            TransferError::StackEmpty => "the reserve stack is empty",
            TransferError::StackFull => "reserve stack full, piece discarded",
            TransferError::IncompatibleState => "not enough pieces on both sides",
        }
    }
}
