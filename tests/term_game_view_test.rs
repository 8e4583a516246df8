use blockfall::core::{GameConfig, GameState, HeldPiece, Shape};
use blockfall::term::{AnchorY, FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{Color, Command};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board = 16*2 by 16*1 => 32x16, plus border => 34x18
    let fb = view.render(&snap, Viewport::new(34, 18));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(33, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 17).unwrap().ch, '└');
    assert_eq!(fb.get(33, 17).unwrap().ch, '┘');
}

#[test]
fn term_view_starts_on_help_screen() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(34, 18));
    let all = screen_text(&fb);
    assert!(all.contains("CONTROLS"));
    assert!(all.contains("Press any key to start playing"));
}

#[test]
fn term_view_draws_active_piece_after_start() {
    let mut state = GameState::new(3);
    state.apply_command(Command::AnyKey);
    state.tick();
    let snap = state.snapshot();
    let piece = snap.active.clone().unwrap();

    let fb = GameView::default().render(&snap, Viewport::new(34, 18));
    let (r, c) = piece.shape.occupied().next().unwrap();
    let x = 1 + (piece.x as u16 + c as u16) * 2;
    let y = 1 + piece.y as u16 + r as u16;
    let cell = fb.get(x, y).unwrap();
    assert_eq!(cell.ch, '█');
    assert_eq!((cell.style.fg.r, cell.style.fg.g, cell.style.fg.b), (piece.color.r, piece.color.g, piece.color.b));
}

#[test]
fn term_view_shows_scores_and_stored_piece() {
    let mut state = GameState::new(1);
    state.start();
    let mut snap = state.snapshot();
    snap.score = 1234;
    snap.high_score = 98765;
    snap.held = Some(HeldPiece {
        shape: Shape::from_rows(&[[true, true], [true, true]]),
        color: Color::rgb(0xff, 0xff, 0),
    });

    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    let all = screen_text(&fb);
    assert!(all.contains("Score: 1234"));
    assert!(all.contains("High Score: 98765"));
    assert!(all.contains("stored:"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(34, 30));
    // start_y = (30 - 18) / 2 = 6
    assert_eq!(fb.get(0, 6).unwrap().ch, '┌');

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(34, 30));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_scales_cells() {
    let state = GameState::with_source(GameConfig::with_grid(4, 4), blockfall::core::RandomSource::new(1));
    let fb = GameView::new(3, 2).render(&state.snapshot(), Viewport::new(14, 10));
    assert_eq!(fb.get(13, 9).unwrap().ch, '┘');
}

#[test]
fn renderer_only_rewrites_changes() {
    let view = GameView::default();
    let mut state = GameState::new(5);
    state.apply_command(Command::AnyKey);
    let mut renderer = TerminalRenderer::with_writer(Vec::new());
    let mut fb = FrameBuffer::new(0, 0);

    state.tick();
    view.render_into(&state.snapshot(), Viewport::new(34, 18), &mut fb);
    renderer.draw_swap(&mut fb).unwrap();
    let full = renderer.writer().len();

    state.apply_command(Command::MoveLeft);
    view.render_into(&state.snapshot(), Viewport::new(34, 18), &mut fb);
    renderer.draw_swap(&mut fb).unwrap();
    let diff = renderer.writer().len() - full;

    assert!(diff > 0);
    assert!(diff < full / 4);
}
