//! Transfer module - operations that move pieces between queue and stack
//!
//! Every operation borrows the queue, the stack and (where a refill happens)
//! the generator from the caller; nothing here owns state, so independent
//! sessions are just independent sets of arguments.
//!
//! # Operations
//!
//! | Operation | Effect | Failure |
//! |-----------|--------|---------|
//! | `play` | dequeue front as used, refill | `QueueEmpty` |
//! | `reserve` | dequeue front onto the stack, refill | `QueueEmpty`, `StackFull` |
//! | `recall` | pop stack top back into play | `StackEmpty` |
//! | `swap_front_top` | exchange queue front and stack top in place | `IncompatibleState` |
//! | `swap_three` | exchange queue slots 0..3 with the full stack in place | `IncompatibleState` |
//!
//! [`apply`] dispatches a `TrayAction` to the matching operation and wraps
//! the result in a `TrayEvent` for the status line.

use std::mem;

use crate::error::TransferError;
use crate::queue::PieceQueue;
use crate::rng::PieceGenerator;
use crate::stack::PieceStack;
use crate::types::{Piece, TrayAction, TrayEvent, SWAP_SPAN};

/// Dequeue the front piece as played and enqueue a fresh piece in its place.
///
/// Returns the played piece; on success the queue size is unchanged. When
/// the queue is empty nothing is generated and nothing changes.
pub fn play(
    queue: &mut PieceQueue,
    generator: &mut PieceGenerator,
) -> Result<Piece, TransferError> {
    let piece = queue.dequeue().map_err(|_| TransferError::QueueEmpty)?;
    // The dequeue freed a slot, so the refill cannot fail.
    let _ = queue.enqueue(generator.next_piece());
    Ok(piece)
}

/// Move the front piece onto the reserve stack, then refill the queue.
///
/// The refill happens after the dequeue no matter how the push went: when
/// the stack is full the dequeued piece is dropped outright rather than
/// restored to the queue, and the fresh piece still lands at the back. The
/// queue therefore stays at its previous size even on `StackFull`. Returns
/// the reserved piece on success.
pub fn reserve(
    queue: &mut PieceQueue,
    stack: &mut PieceStack,
    generator: &mut PieceGenerator,
) -> Result<Piece, TransferError> {
    let piece = queue.dequeue().map_err(|_| TransferError::QueueEmpty)?;
    let pushed = stack.push(piece);
    // Refill regardless of the push outcome; a failed push loses the piece.
    let _ = queue.enqueue(generator.next_piece());
    match pushed {
        Ok(()) => Ok(piece),
        Err(_) => Err(TransferError::StackFull),
    }
}

/// Pop the stack's top piece back into play. The queue is untouched.
pub fn recall(stack: &mut PieceStack) -> Result<Piece, TransferError> {
    stack.pop().map_err(|_| TransferError::StackEmpty)
}

/// Exchange the queue's front slot with the stack's top slot in place.
///
/// Sizes stay the same; only the two slot values move. Fails with
/// `IncompatibleState` when either structure is empty, in which case
/// neither is touched.
pub fn swap_front_top(queue: &mut PieceQueue, stack: &mut PieceStack) -> Result<(), TransferError> {
    match (queue.get_mut(0), stack.get_from_top_mut(0)) {
        (Some(front), Some(top)) => {
            mem::swap(front, top);
            Ok(())
        }
        _ => Err(TransferError::IncompatibleState),
    }
}

/// Exchange the queue's first three logical slots with the stack's top
/// three, position for position: queue slot `i` (counted from the front)
/// swaps with stack depth `i` (counted from the top).
///
/// Needs at least three queued pieces and a full stack; otherwise fails with
/// `IncompatibleState` and neither structure changes. All three pairs swap
/// or none do.
pub fn swap_three(queue: &mut PieceQueue, stack: &mut PieceStack) -> Result<(), TransferError> {
    if queue.len() < SWAP_SPAN || !stack.is_full() {
        return Err(TransferError::IncompatibleState);
    }
    for i in 0..SWAP_SPAN {
        // Both slots are occupied once the precondition holds.
        if let (Some(queue_slot), Some(stack_slot)) = (queue.get_mut(i), stack.get_from_top_mut(i))
        {
            mem::swap(queue_slot, stack_slot);
        }
    }
    Ok(())
}

/// Apply one tray command to the queue/stack pair.
///
/// The single entry point drivers call; the returned event carries the moved
/// piece where there is one, so the status line can name it.
pub fn apply(
    action: TrayAction,
    queue: &mut PieceQueue,
    stack: &mut PieceStack,
    generator: &mut PieceGenerator,
) -> Result<TrayEvent, TransferError> {
    match action {
        TrayAction::Play => play(queue, generator).map(TrayEvent::Played),
        TrayAction::Reserve => reserve(queue, stack, generator).map(TrayEvent::Reserved),
        TrayAction::Recall => recall(stack).map(TrayEvent::Recalled),
        TrayAction::SwapFrontTop => {
            swap_front_top(queue, stack).map(|_| TrayEvent::SwappedFrontTop)
        }
        TrayAction::SwapThree => swap_three(queue, stack).map(|_| TrayEvent::SwappedThree),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    // Queue holding generator pieces with ids 0..5, so the next generated
    // id is always 5.
    fn filled_queue(generator: &mut PieceGenerator) -> PieceQueue {
        let mut queue = PieceQueue::new();
        while !queue.is_full() {
            queue.enqueue(generator.next_piece()).unwrap();
        }
        queue
    }

    fn queue_ids(queue: &PieceQueue) -> Vec<u32> {
        queue.iter().map(|p| p.id()).collect()
    }

    fn stack_ids_from_top(stack: &PieceStack) -> Vec<u32> {
        stack.iter_from_top().map(|p| p.id()).collect()
    }

    #[test]
    fn test_play_returns_front_and_refills() {
        let mut generator = PieceGenerator::new(1);
        let mut queue = filled_queue(&mut generator);

        let played = play(&mut queue, &mut generator).unwrap();

        assert_eq!(played.id(), 0);
        assert_eq!(queue_ids(&queue), vec![1, 2, 3, 4, 5]);
        assert!(queue.is_full());
    }

    #[test]
    fn test_play_empty_queue_fails_without_refill() {
        let mut generator = PieceGenerator::new(1);
        let mut queue = PieceQueue::new();

        assert_eq!(
            play(&mut queue, &mut generator),
            Err(TransferError::QueueEmpty)
        );
        assert!(queue.is_empty());
        assert_eq!(generator.spawned(), 0);
    }

    #[test]
    fn test_reserve_moves_front_to_stack_and_refills() {
        let mut generator = PieceGenerator::new(1);
        let mut queue = filled_queue(&mut generator);
        let mut stack = PieceStack::new();

        let reserved = reserve(&mut queue, &mut stack, &mut generator).unwrap();

        assert_eq!(reserved.id(), 0);
        assert_eq!(stack.peek_top().unwrap().id(), 0);
        assert_eq!(queue_ids(&queue), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_reserve_empty_queue_fails_without_side_effects() {
        let mut generator = PieceGenerator::new(1);
        let mut queue = PieceQueue::new();
        let mut stack = PieceStack::new();

        assert_eq!(
            reserve(&mut queue, &mut stack, &mut generator),
            Err(TransferError::QueueEmpty)
        );
        assert!(stack.is_empty());
        assert_eq!(generator.spawned(), 0);
    }

    #[test]
    fn test_reserve_on_full_stack_drops_piece_and_still_refills() {
        let mut generator = PieceGenerator::new(1);
        let mut queue = filled_queue(&mut generator);
        let mut stack = PieceStack::new();
        for _ in 0..3 {
            stack.push(generator.next_piece()).unwrap();
        }
        // Queue ids 0..5, stack ids 5,6,7 with 7 on top.
        let stack_before = stack.clone();

        let result = reserve(&mut queue, &mut stack, &mut generator);

        assert_eq!(result, Err(TransferError::StackFull));
        // The dequeued front (id 0) is gone: not on the stack, not back in
        // the queue. The refill still happened.
        assert_eq!(stack, stack_before);
        assert_eq!(queue_ids(&queue), vec![1, 2, 3, 4, 8]);
        assert!(queue.is_full());
    }

    #[test]
    fn test_recall_pops_top_and_leaves_queue_alone() {
        let mut generator = PieceGenerator::new(1);
        let mut queue = filled_queue(&mut generator);
        let mut stack = PieceStack::new();
        stack.push(Piece::new(PieceKind::T, 7)).unwrap();
        stack.push(Piece::new(PieceKind::L, 8)).unwrap();
        let queue_before = queue.clone();

        let recalled = recall(&mut stack).unwrap();

        assert_eq!(recalled.id(), 8);
        assert_eq!(stack.peek_top().unwrap().id(), 7);
        assert_eq!(queue, queue_before);
    }

    #[test]
    fn test_recall_empty_stack_fails() {
        let mut stack = PieceStack::new();
        assert_eq!(recall(&mut stack), Err(TransferError::StackEmpty));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_swap_front_top_exchanges_slot_values() {
        let mut generator = PieceGenerator::new(1);
        let mut queue = filled_queue(&mut generator);
        let mut stack = PieceStack::new();
        for id in [10, 11, 12] {
            stack.push(Piece::new(PieceKind::I, id)).unwrap();
        }

        swap_front_top(&mut queue, &mut stack).unwrap();

        assert_eq!(queue.peek_front().unwrap().id(), 12);
        assert_eq!(stack.peek_top().unwrap().id(), 0);
        assert_eq!(queue.len(), 5);
        assert_eq!(stack.len(), 3);
    }

    #[test]
    fn test_swap_front_top_fails_when_either_side_empty() {
        let mut generator = PieceGenerator::new(1);

        let mut queue = PieceQueue::new();
        let mut stack = PieceStack::new();
        stack.push(Piece::new(PieceKind::O, 1)).unwrap();
        let stack_before = stack.clone();
        assert_eq!(
            swap_front_top(&mut queue, &mut stack),
            Err(TransferError::IncompatibleState)
        );
        assert_eq!(stack, stack_before);

        let mut queue = filled_queue(&mut generator);
        let mut stack = PieceStack::new();
        let queue_before = queue.clone();
        assert_eq!(
            swap_front_top(&mut queue, &mut stack),
            Err(TransferError::IncompatibleState)
        );
        assert_eq!(queue, queue_before);
    }

    #[test]
    fn test_swap_front_top_is_an_involution() {
        let mut generator = PieceGenerator::new(5);
        let mut queue = filled_queue(&mut generator);
        let mut stack = PieceStack::new();
        stack.push(generator.next_piece()).unwrap();
        let queue_before = queue.clone();
        let stack_before = stack.clone();

        swap_front_top(&mut queue, &mut stack).unwrap();
        swap_front_top(&mut queue, &mut stack).unwrap();

        assert_eq!(queue, queue_before);
        assert_eq!(stack, stack_before);
    }

    #[test]
    fn test_swap_three_exchanges_pairwise() {
        let mut generator = PieceGenerator::new(1);
        let mut queue = filled_queue(&mut generator);
        let mut stack = PieceStack::new();
        for id in [10, 11, 12] {
            stack.push(Piece::new(PieceKind::I, id)).unwrap();
        }

        swap_three(&mut queue, &mut stack).unwrap();

        // Queue slot i took the stack piece at depth i; slots 3 and 4 are
        // untouched.
        assert_eq!(queue_ids(&queue), vec![12, 11, 10, 3, 4]);
        // The old queue front is the new top, queue slot 2 landed at the
        // bottom.
        assert_eq!(stack_ids_from_top(&stack), vec![0, 1, 2]);
    }

    #[test]
    fn test_swap_three_requires_full_stack() {
        let mut generator = PieceGenerator::new(1);
        let mut queue = filled_queue(&mut generator);
        let mut stack = PieceStack::new();
        stack.push(Piece::new(PieceKind::T, 10)).unwrap();
        stack.push(Piece::new(PieceKind::T, 11)).unwrap();
        let queue_before = queue.clone();
        let stack_before = stack.clone();

        assert_eq!(
            swap_three(&mut queue, &mut stack),
            Err(TransferError::IncompatibleState)
        );
        assert_eq!(queue, queue_before);
        assert_eq!(stack, stack_before);
    }

    #[test]
    fn test_swap_three_requires_three_queued() {
        let mut generator = PieceGenerator::new(1);
        let mut queue = PieceQueue::new();
        queue.enqueue(generator.next_piece()).unwrap();
        queue.enqueue(generator.next_piece()).unwrap();
        let mut stack = PieceStack::new();
        for _ in 0..3 {
            stack.push(generator.next_piece()).unwrap();
        }
        let queue_before = queue.clone();
        let stack_before = stack.clone();

        assert_eq!(
            swap_three(&mut queue, &mut stack),
            Err(TransferError::IncompatibleState)
        );
        assert_eq!(queue, queue_before);
        assert_eq!(stack, stack_before);
    }

    #[test]
    fn test_swap_three_twice_restores_both_sides() {
        let mut generator = PieceGenerator::new(9);
        let mut queue = filled_queue(&mut generator);
        let mut stack = PieceStack::new();
        for _ in 0..3 {
            stack.push(generator.next_piece()).unwrap();
        }
        let queue_before = queue.clone();
        let stack_before = stack.clone();

        swap_three(&mut queue, &mut stack).unwrap();
        swap_three(&mut queue, &mut stack).unwrap();

        assert_eq!(queue, queue_before);
        assert_eq!(stack, stack_before);
    }

    #[test]
    fn test_apply_dispatches_actions_to_operations() {
        let mut generator = PieceGenerator::new(1);
        let mut queue = filled_queue(&mut generator);
        let mut stack = PieceStack::new();

        let event = apply(TrayAction::Play, &mut queue, &mut stack, &mut generator).unwrap();
        assert!(matches!(event, TrayEvent::Played(p) if p.id() == 0));

        let event = apply(TrayAction::Reserve, &mut queue, &mut stack, &mut generator).unwrap();
        assert!(matches!(event, TrayEvent::Reserved(p) if p.id() == 1));

        let event = apply(
            TrayAction::SwapFrontTop,
            &mut queue,
            &mut stack,
            &mut generator,
        )
        .unwrap();
        assert_eq!(event, TrayEvent::SwappedFrontTop);

        let event = apply(TrayAction::Recall, &mut queue, &mut stack, &mut generator).unwrap();
        assert!(matches!(event, TrayEvent::Recalled(_)));

        assert_eq!(
            apply(TrayAction::SwapThree, &mut queue, &mut stack, &mut generator),
            Err(TransferError::IncompatibleState)
        );
    }
}
