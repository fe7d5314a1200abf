use tui_memory::core::GameState;
use tui_memory::term::{AnchorY, GameView, Viewport};
use tui_memory::types::{GameAction, EVAL_DELAY_MS};

fn won_game() -> GameState {
    let mut gs = GameState::new(2, 5).unwrap();
    let tiles = gs.board().tiles().to_vec();
    let partner = |i: usize| (0..4).find(|&j| j != i && tiles[j].face == tiles[i].face).unwrap();
    let a = partner(0);
    gs.select(0);
    gs.select(a);
    gs.tick(EVAL_DELAY_MS);
    let rest: Vec<usize> = (1..4).filter(|&i| i != a).collect();
    gs.select(rest[0]);
    gs.select(rest[1]);
    gs.tick(EVAL_DELAY_MS);
    assert!(gs.is_won());
    gs
}

#[test]
fn term_view_renders_frame_corners_around_grid() {
    let gs = GameState::new(2, 1).unwrap();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let vp = Viewport::new(40, 20);
    let fb = view.render(&gs.snapshot(), vp);

    // 2 tiles * 6 cols + 1 gap + 2 padding + 2 border = 17 wide, centered.
    let x0 = (40 - 17) / 2;
    // Header takes 4 rows.
    assert_eq!(fb.get(x0, 4).unwrap().ch, '┌');
    assert_eq!(fb.get(x0 + 16, 4).unwrap().ch, '┐');
    // 2 tiles * 2 rows + 1 gap + 2 border = 7 tall.
    assert_eq!(fb.get(x0, 10).unwrap().ch, '└');
    assert_eq!(fb.get(x0 + 16, 10).unwrap().ch, '┘');
}

#[test]
fn term_view_hides_faces_until_revealed() {
    let mut gs = GameState::new(4, 3).unwrap();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);

    let (x, y) = view.tile_origin(4, vp, 5).unwrap();
    let fb = view.render(&gs.snapshot(), vp);
    assert_eq!(fb.get(x, y).unwrap().ch, '░');

    gs.select(5);
    let glyph = gs.board().get(5).unwrap().face.glyph();
    let fb = view.render(&gs.snapshot(), vp);
    let tile_text: String = (0..2)
        .flat_map(|dy| (0..6).map(move |dx| (dx, dy)))
        .map(|(dx, dy)| fb.get(x + dx, y + dy).unwrap().ch)
        .collect();
    assert!(tile_text.contains(glyph));
    assert!(!tile_text.contains('░'));
}

#[test]
fn term_view_shows_stats_and_size_selector() {
    let mut gs = GameState::new(4, 9).unwrap();
    gs.select(0);
    let b = (1..16)
        .find(|&i| gs.board().get(i).unwrap().face != gs.board().get(0).unwrap().face)
        .unwrap();
    gs.select(b);
    gs.tick(61_000);

    let fb = GameView::default().render(&gs.snapshot(), Viewport::new(80, 24));
    let all = fb.text();
    assert!(all.contains("FIND THE PAIR"));
    assert!(all.contains("[4×4]"));
    assert!(all.contains("2×2"));
    assert!(all.contains("RESTART"));
    assert!(all.contains("MOVES 1"));
    assert!(all.contains("PAIRS 0/8"));
    assert!(all.contains("TIME 01:01"));
    assert!(!all.contains("YOU WIN"));
}

#[test]
fn term_view_shows_win_modal_only_when_won() {
    let gs = won_game();
    let fb = GameView::default().render(&gs.snapshot(), Viewport::new(80, 24));
    let all = fb.text();
    assert!(all.contains("YOU WIN!"));
    assert!(all.contains("2 moves in 00:01"));
    assert!(all.contains("play again"));
}

#[test]
fn term_view_marks_cursor_tile() {
    let gs = GameState::new(4, 1).unwrap();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let (x, y) = view.tile_origin(4, vp, 6).unwrap();

    let fb = view.render_with_cursor(&gs.snapshot(), Some(6), vp);
    assert_eq!(fb.get(x - 1, y).unwrap().ch, '▐');
    assert_eq!(fb.get(x + 6, y).unwrap().ch, '▌');

    let plain = view.render(&gs.snapshot(), vp);
    assert_ne!(plain.get(x - 1, y).unwrap().ch, '▐');
}

#[test]
fn term_view_click_targets_match_drawn_tiles() {
    let gs = GameState::new(6, 1).unwrap();
    let view = GameView::default();
    let vp = Viewport::new(100, 40);
    let snap = gs.snapshot();
    let fb = view.render(&snap, vp);

    for i in 0..36 {
        let (x, y) = view.tile_origin(6, vp, i).unwrap();
        assert_eq!(fb.get(x, y).unwrap().ch, '░');
        assert_eq!(view.tile_at(6, vp, x + 3, y + 1), Some(i));
    }
}

#[test]
fn term_view_win_modal_rect_matches_drawn_box() {
    let view = GameView::default();
    let vp = Viewport::new(80, 24);

    let fresh = GameState::new(2, 5).unwrap();
    assert_eq!(view.win_modal_rect(&fresh.snapshot(), vp), None);

    let mut gs = won_game();
    let snap = gs.snapshot();
    let rect = view.win_modal_rect(&snap, vp).unwrap();
    let fb = view.render(&snap, vp);
    assert_eq!(fb.get(rect.x, rect.y).unwrap().ch, '┌');
    assert_eq!(fb.get(rect.x + rect.w - 1, rect.y + rect.h - 1).unwrap().ch, '┘');

    assert!(rect.contains(rect.x, rect.y));
    assert!(rect.contains(rect.x + rect.w / 2, rect.y + rect.h / 2));
    assert!(!rect.contains(rect.x + rect.w, rect.y));
    assert!(!rect.contains(rect.x, rect.y + rect.h));
    assert!(!rect.contains(0, 0));

    // A click inside the summary plays again.
    let generation = gs.generation();
    if rect.contains(rect.x + 1, rect.y + 1) {
        gs.apply_action(GameAction::PlayAgain);
    }
    assert!(!gs.is_won());
    assert_eq!(gs.moves(), 0);
    assert_ne!(gs.generation(), generation);
}
