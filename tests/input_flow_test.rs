//! Keyboard input driving the game end to end.

use crossterm::event::{KeyCode, KeyEvent};

use tui_memory::core::{GameState, Phase};
use tui_memory::input::{handle_key_event, Cursor, InputAction};
use tui_memory::types::EVAL_DELAY_MS;

fn press(game: &mut GameState, cursor: &mut Cursor, code: KeyCode) {
    cursor.sync_size(game.size());
    match handle_key_event(KeyEvent::from(code)) {
        Some(InputAction::Cursor(dir)) => cursor.step(dir),
        Some(InputAction::Flip) => {
            let won = game.is_won();
            game.apply_action(cursor.flip_action(won));
        }
        Some(InputAction::Game(action)) => game.apply_action(action),
        None => {}
    }
    cursor.sync_size(game.size());
}

#[test]
fn arrows_and_space_flip_tiles() {
    let mut game = GameState::new(4, 3).unwrap();
    let mut cursor = Cursor::new(4);

    press(&mut game, &mut cursor, KeyCode::Right);
    press(&mut game, &mut cursor, KeyCode::Down);
    press(&mut game, &mut cursor, KeyCode::Char(' '));

    assert_eq!(game.phase(), Phase::OneSelected { first: 5 });
    assert!(game.running());
}

#[test]
fn size_keys_regenerate_and_reset_cursor() {
    let mut game = GameState::new(4, 3).unwrap();
    let mut cursor = Cursor::new(4);
    press(&mut game, &mut cursor, KeyCode::Down);
    press(&mut game, &mut cursor, KeyCode::Enter);
    assert!(game.running());

    press(&mut game, &mut cursor, KeyCode::Char('6'));
    assert_eq!(game.size(), 6);
    assert_eq!(cursor.index(), 0);
    assert!(!game.running());

    press(&mut game, &mut cursor, KeyCode::Tab);
    assert_eq!(game.size(), 2);
}

#[test]
fn enter_on_win_plays_again() {
    let mut game = GameState::new(2, 9).unwrap();
    let mut cursor = Cursor::new(2);
    let tiles = game.board().tiles().to_vec();

    // Walk the cursor to each pair in turn.
    let mut done = vec![false; 4];
    for i in 0..4 {
        if done[i] {
            continue;
        }
        let j = (i + 1..4).find(|&j| tiles[j].face == tiles[i].face).unwrap();
        done[i] = true;
        done[j] = true;
        for target in [i, j] {
            cursor.set_index(target);
            press(&mut game, &mut cursor, KeyCode::Char(' '));
        }
        game.tick(EVAL_DELAY_MS);
    }
    assert!(game.is_won());

    let gen = game.generation();
    press(&mut game, &mut cursor, KeyCode::Enter);
    assert!(!game.is_won());
    assert!(game.generation() > gen);
}

#[test]
fn restart_key_resets_counters() {
    let mut game = GameState::new(4, 12).unwrap();
    let mut cursor = Cursor::new(4);
    press(&mut game, &mut cursor, KeyCode::Char(' '));
    press(&mut game, &mut cursor, KeyCode::Right);
    press(&mut game, &mut cursor, KeyCode::Char(' '));
    assert_eq!(game.moves(), 1);

    press(&mut game, &mut cursor, KeyCode::Char('r'));
    assert_eq!(game.moves(), 0);
    assert_eq!(game.phase(), Phase::Idle);
}
