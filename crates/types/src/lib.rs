//! Shared types module - vocabulary used by every other crate
//!
//! This module defines the piece value type, the fixed container capacities,
//! and the command/event enums exchanged between the input layer, the core
//! operations and the terminal view. All types are pure data structures with
//! no external dependencies.
//!
//! # Container Capacities
//!
//! Both containers are fixed-size; the capacities are game rules, not tuning
//! knobs:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Upcoming pieces visible to the player |
//! | `STACK_CAPACITY` | 3 | Pieces that can be held in reserve |
//! | `SWAP_SPAN` | 3 | Queue/stack slots exchanged by the block swap |
//!
//! # Piece Kinds
//!
//! The tray deals four tetromino kinds:
//!
//! - **I**: Cyan, horizontal bar
//! - **O**: Yellow, 2x2 square
//! - **T**: Magenta, T-shaped
//! - **L**: Orange, L-shaped
//!
//! # Examples
//!
//! ```
//! use tetris_stack_types::{Piece, PieceKind, TrayAction, QUEUE_CAPACITY};
//!
//! // Pieces are immutable (kind, id) values.
//! let piece = Piece::new(PieceKind::T, 0);
//! assert_eq!(piece.kind(), PieceKind::T);
//! assert_eq!(piece.id(), 0);
//!
//! // Parse a kind from string (case-insensitive)
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! // Parse a tray command
//! let action = TrayAction::from_str("swapFrontTop").unwrap();
//! assert_eq!(action, TrayAction::SwapFrontTop);
//!
//! assert_eq!(QUEUE_CAPACITY, 5);
//! ```

/// Capacity of the upcoming-piece queue (5 slots)
pub const QUEUE_CAPACITY: usize = 5;

/// Capacity of the reserve stack (3 slots)
pub const STACK_CAPACITY: usize = 3;

/// Number of slots exchanged by the block swap (queue front 3 ↔ full stack)
pub const SWAP_SPAN: usize = 3;

/// The four tetromino piece kinds dealt by the tray
///
/// Each kind has a distinct color in the terminal view:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **L**: Orange, L-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// All kinds in dealing order; the generator draws uniformly from this.
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_str(), "i");
    /// assert_eq!(PieceKind::L.as_str(), "l");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
        }
    }
}

/// An immutable piece value: a kind plus a process-unique id
///
/// Pieces are created only by the generator, which assigns ids from a
/// monotonic counter; nothing mutates a piece after creation. The id makes
/// otherwise identical kinds distinguishable when they move between the
/// queue and the stack.
///
/// # Examples
///
/// ```
/// use tetris_stack_types::{Piece, PieceKind};
///
/// let a = Piece::new(PieceKind::I, 4);
/// let b = Piece::new(PieceKind::I, 5);
/// assert_eq!(a.kind(), b.kind());
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    id: u32,
}

impl Piece {
    /// Create a piece value. Callers outside tests should go through the
    /// generator so ids stay unique.
    pub fn new(kind: PieceKind, id: u32) -> Self {
        Piece { kind, id }
    }

    /// The tetromino kind.
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// The process-unique id assigned at generation time.
    pub fn id(&self) -> u32 {
        self.id
    }
}

/// Tray commands that can be applied to the queue/stack pair
///
/// Each action maps 1:1 to one transfer operation. Quitting the session is
/// not an action; the input layer reports it separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayAction {
    /// Dequeue the front piece into play and refill the queue
    Play,
    /// Move the front piece onto the reserve stack and refill the queue
    Reserve,
    /// Pop the reserve stack's top piece back into play
    Recall,
    /// Exchange the queue front with the stack top in place
    SwapFrontTop,
    /// Exchange the first three queue slots with the full stack in place
    SwapThree,
}

impl TrayAction {
    /// Parse action from its camelCase name
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::TrayAction;
    ///
    /// assert_eq!(TrayAction::from_str("play"), Some(TrayAction::Play));
    /// assert_eq!(TrayAction::from_str("swapThree"), Some(TrayAction::SwapThree));
    /// assert_eq!(TrayAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "play" => Some(TrayAction::Play),
            "reserve" => Some(TrayAction::Reserve),
            "recall" => Some(TrayAction::Recall),
            "swapfronttop" => Some(TrayAction::SwapFrontTop),
            "swapthree" => Some(TrayAction::SwapThree),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            TrayAction::Play => "play",
            TrayAction::Reserve => "reserve",
            TrayAction::Recall => "recall",
            TrayAction::SwapFrontTop => "swapFrontTop",
            TrayAction::SwapThree => "swapThree",
        }
    }
}

/// Outcome of one successfully applied tray command.
///
/// Emitted by the transfer dispatcher and rendered on the status line; the
/// piece-carrying variants keep the moved piece so the view can name it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayEvent {
    /// The piece left the queue as played
    Played(Piece),
    /// The piece moved from the queue onto the reserve stack
    Reserved(Piece),
    /// The piece came off the reserve stack back into play
    Recalled(Piece),
    /// Queue front and stack top exchanged places
    SwappedFrontTop,
    /// The first three queue slots exchanged with the full stack
    SwappedThree,
}
