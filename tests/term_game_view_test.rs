use grid_drive::core::GameState;
use grid_drive::term::{GameView, Viewport};
use grid_drive::types::{GameAction, Position, PROMPT};

fn drive_into_building(game: &mut GameState) {
    for action in [
        GameAction::MoveDown,
        GameAction::MoveDown,
        GameAction::MoveDown,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::MoveDown,
    ] {
        game.apply_action(action);
    }
    assert!(game.is_game_over());
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new().snapshot();
    let view = GameView::default();

    // 30 cells * 2 columns + border = 62 wide, 30 rows + border = 32 high,
    // drawn under the two text rows.
    assert_eq!(view.board_frame_size(&snap), (62, 32));
    let fb = view.render(&snap, Viewport::new(62, 34));

    assert_eq!(fb.get(0, 2).unwrap().ch, '┌');
    assert_eq!(fb.get(61, 2).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 33).unwrap().ch, '└');
    assert_eq!(fb.get(61, 33).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_symbols_two_columns_apart() {
    let snap = GameState::new().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(62, 34));

    // Grid (x, y) lands at column 1 + 2y, row 3 + x.
    assert_eq!(fb.get(1, 3).unwrap().ch, '.');
    assert_eq!(fb.get(3, 4).unwrap().ch, 'C');
    assert_eq!(fb.get(4, 4).unwrap().ch, ' ');
    assert_eq!(fb.get(11, 8).unwrap().ch, 'B');
    assert_eq!(fb.get(7, 6).unwrap().ch, 'T');
    assert_eq!(fb.get(55, 5).unwrap().ch, 'F');
}

#[test]
fn term_view_prints_prompt_above_board() {
    let snap = GameState::new().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(62, 34));

    assert!(fb.row_text(0).trim().is_empty());
    assert!(fb.row_text(1).starts_with(PROMPT));
}

#[test]
fn term_view_shows_collision_message() {
    let mut game = GameState::new();
    game.apply_action(GameAction::MoveDown);
    game.apply_action(GameAction::MoveRight);
    game.apply_action(GameAction::MoveRight);
    game.apply_action(GameAction::MoveDown); // tree at (3, 3)
    assert_eq!(game.player_position(), Some(Position::new(2, 3)));

    let fb = GameView::default().render(&game.snapshot(), Viewport::new(62, 34));
    assert!(fb.row_text(0).starts_with("Tree collision-damage!"));
    assert!(fb.row_text(1).starts_with(PROMPT));
    assert!(!fb.row_text(33).contains("Terminal too small"));
}

#[test]
fn term_view_keeps_text_visible_on_80x24() {
    let mut game = GameState::new();
    game.apply_action(GameAction::MoveDown);
    game.apply_action(GameAction::MoveRight);
    game.apply_action(GameAction::MoveRight);
    game.apply_action(GameAction::MoveDown);

    let fb = GameView::default().render(&game.snapshot(), Viewport::new(80, 24));

    assert!(fb.row_text(0).starts_with("Tree collision-damage!"));
    assert!(fb.row_text(1).starts_with(PROMPT));
    assert_eq!(fb.get(7, 5).unwrap().ch, 'C');
    assert!(fb
        .row_text(23)
        .starts_with("Terminal too small: resize to 62x34 (now 80x24)"));
}

#[test]
fn term_view_game_over_overlay_replaces_prompt() {
    let mut game = GameState::new();
    drive_into_building(&mut game);

    let fb = GameView::default().render(&game.snapshot(), Viewport::new(62, 34));

    assert!(fb.row_text(18).contains("GAME OVER"));
    assert!(fb.row_text(0).starts_with("Building collision-game over!"));
    assert!(!fb.row_text(1).contains(PROMPT.trim()));
}

#[test]
fn term_view_required_viewport_fits_everything() {
    let snap = GameState::new().snapshot();
    let view = GameView::new(1);

    let vp = view.required_viewport(&snap);
    assert_eq!(vp.height, 34);
    assert!(vp.width as usize >= PROMPT.chars().count());
    assert!(vp.width >= 32);

    let fb = view.render(&snap, vp);
    assert!(!fb.row_text(vp.height - 1).contains("Terminal too small"));
}

#[test]
fn term_view_clips_to_small_viewport() {
    let snap = GameState::new().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(10, 5));

    assert_eq!(fb.width(), 10);
    assert_eq!(fb.height(), 5);
    assert!(fb.row_text(1).starts_with("Moving usi"));
    assert_eq!(fb.get(0, 2).unwrap().ch, '┌');
    assert_eq!(fb.get(1, 3).unwrap().ch, '.');
    assert!(fb.row_text(4).starts_with("Terminal t"));
}
