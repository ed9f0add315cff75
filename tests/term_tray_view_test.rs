use tetris_stack::core::{PieceQueue, PieceStack, TransferError, TraySnapshot};
use tetris_stack::term::{AnchorY, FrameBuffer, Rgb, StatusLine, TrayView, Viewport};
use tetris_stack::types::{Piece, PieceKind, TrayEvent};

// The tray block is 46x18; a top anchor puts its origin at (0, 0).
fn vp() -> Viewport {
    Viewport::new(46, 18)
}

fn top_view() -> TrayView {
    TrayView::default().with_anchor_y(AnchorY::Top)
}

fn row_text(fb: &FrameBuffer, y: u16) -> String {
    let mut line = String::new();
    for x in 0..fb.width() {
        line.push(fb.get(x, y).unwrap().ch);
    }
    line
}

#[test]
fn tray_view_renders_border_corners() {
    let snap = TraySnapshot::default();
    let fb = top_view().render(&snap, &StatusLine::Idle, vp());

    // Queue frame spans the full 46 columns.
    assert_eq!(fb.get(0, 3).unwrap().ch, '┌');
    assert_eq!(fb.get(45, 3).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 5).unwrap().ch, '└');
    assert_eq!(fb.get(45, 5).unwrap().ch, '┘');

    // Stack frame is a narrow column.
    assert_eq!(fb.get(0, 8).unwrap().ch, '┌');
    assert_eq!(fb.get(13, 8).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 12).unwrap().ch, '└');
    assert_eq!(fb.get(13, 12).unwrap().ch, '┘');
}

#[test]
fn tray_view_lists_queue_front_first() {
    let mut queue = PieceQueue::new();
    queue.enqueue(Piece::new(PieceKind::T, 7)).unwrap();
    queue.enqueue(Piece::new(PieceKind::O, 8)).unwrap();
    let snap = TraySnapshot::capture(&queue, &PieceStack::new());

    let fb = top_view().render(&snap, &StatusLine::Idle, vp());
    let row = row_text(&fb, 4);

    let front = row.find("T #7").unwrap();
    let second = row.find("O #8").unwrap();
    assert!(front < second);
}

#[test]
fn tray_view_lists_stack_top_first() {
    let mut stack = PieceStack::new();
    stack.push(Piece::new(PieceKind::I, 1)).unwrap();
    stack.push(Piece::new(PieceKind::L, 2)).unwrap();
    let snap = TraySnapshot::capture(&PieceQueue::new(), &stack);

    let fb = top_view().render(&snap, &StatusLine::Idle, vp());

    assert!(row_text(&fb, 9).contains("L #2"));
    assert!(row_text(&fb, 10).contains("I #1"));
    // The third slot is vacant.
    assert_eq!(fb.get(2, 11).unwrap().ch, '·');
}

#[test]
fn tray_view_marks_empty_slots_with_dots() {
    let snap = TraySnapshot::default();
    let fb = top_view().render(&snap, &StatusLine::Idle, vp());

    for slot in 0..5u16 {
        assert_eq!(fb.get(1 + slot * 9, 4).unwrap().ch, '·');
    }
    for y in 9..12 {
        assert_eq!(fb.get(2, y).unwrap().ch, '·');
    }
}

#[test]
fn tray_view_reports_error_on_status_line() {
    let snap = TraySnapshot::default();
    let status = StatusLine::Outcome(Err(TransferError::QueueEmpty));
    let fb = top_view().render(&snap, &status, vp());

    let row = row_text(&fb, 14);
    assert!(row.contains("error: the upcoming queue is empty"));
    // Errors are painted in the warning red.
    assert_eq!(fb.get(0, 14).unwrap().style.fg, Rgb::new(220, 80, 80));
}

#[test]
fn tray_view_announces_played_piece() {
    let snap = TraySnapshot::default();
    let status = StatusLine::Outcome(Ok(TrayEvent::Played(Piece::new(PieceKind::T, 3))));
    let fb = top_view().render(&snap, &status, vp());

    assert!(row_text(&fb, 14).contains("played T #3"));
}

#[test]
fn tray_view_reports_unknown_key() {
    let snap = TraySnapshot::default();
    let status = StatusLine::UnknownKey('x');
    let fb = top_view().render(&snap, &status, vp());

    assert!(row_text(&fb, 14).contains("unknown key 'x'"));
}

#[test]
fn tray_view_dims_unavailable_menu_entries() {
    // Empty tray: play is dimmed, quit never is.
    let empty = TraySnapshot::default();
    let fb = top_view().render(&empty, &StatusLine::Idle, vp());
    assert!(fb.get(0, 16).unwrap().style.dim);
    assert!(!fb.get(36, 17).unwrap().style.dim);

    // Full queue and full stack light everything up.
    let mut queue = PieceQueue::new();
    for id in 0..5 {
        queue.enqueue(Piece::new(PieceKind::I, id)).unwrap();
    }
    let mut stack = PieceStack::new();
    for id in 10..13 {
        stack.push(Piece::new(PieceKind::I, id)).unwrap();
    }
    let snap = TraySnapshot::capture(&queue, &stack);
    let fb = top_view().render(&snap, &StatusLine::Idle, vp());
    assert!(!fb.get(0, 16).unwrap().style.dim);
    // "[5] swap three" starts after "[4] swap front/top" plus the gap.
    assert!(!fb.get(20, 17).unwrap().style.dim);
}

#[test]
fn tray_view_centers_by_default_on_tall_viewports() {
    let snap = TraySnapshot::default();
    let view = TrayView::default();

    // start_y = (38 - 18) / 2 = 10 puts the title on row 10.
    let fb = view.render(&snap, &StatusLine::Idle, Viewport::new(46, 38));
    assert_eq!(fb.get(0, 10).unwrap().ch, 'P');
}
