//! Move generation integration tests.
//!
//! Hand-built positions for the stepping and jumping rules, plus
//! property checks over random boards.

use nine_square::rules::{apply_jump, apply_simple_move, moves_by_piece};
use nine_square::{
    jump_moves, legal_moves, simple_moves, Board, Cell, Direction, MoveKind, Player, Position,
    PIECES_PER_PLAYER,
};
use proptest::prelude::*;

fn pos(row: u8, col: u8) -> Position {
    Position::new(row, col)
}

fn board(text: &str) -> Board {
    let board: Board = text.parse().unwrap();
    board.validate().unwrap();
    board
}

// =============================================================================
// Scenarios
// =============================================================================

/// Nothing adjacent at the start, then a piece moves in and a jump opens up.
#[test]
fn test_jump_opens_when_neighbour_arrives() {
    let start = Board::initial();
    assert!(jump_moves(&start, pos(2, 2)).is_empty());

    let b = board(
        "
        111.....
        11......
        111.....
        ..1.....
        ........
        .....222
        .....222
        .....222
        ",
    );

    let jumps = jump_moves(&b, pos(2, 2));
    assert_eq!(jumps.as_slice(), &[pos(4, 2)]);

    // North of (2,2) is open for a step, east too.
    let steps = simple_moves(&b, pos(2, 2));
    assert_eq!(steps.as_slice(), &[pos(1, 2), pos(2, 3)]);
}

/// Opponent pieces are obstacles to hop over, never captured.
#[test]
fn test_jump_over_opponent_leaves_it() {
    let mut b = board(
        "
        111.....
        111.....
        11......
        ..12....
        ........
        .....22.
        .....222
        .....222
        ",
    );

    assert!(jump_moves(&b, pos(3, 2)).contains(pos(3, 4)));
    apply_jump(&mut b, pos(3, 2), pos(3, 4)).unwrap();

    assert_eq!(b.owner(pos(3, 3)), Some(Player::Two));
    assert_eq!(b.owner(pos(3, 4)), Some(Player::One));
    assert!(b.is_empty(pos(3, 2)));
    assert_eq!(b.count(Player::One), PIECES_PER_PLAYER);
    assert_eq!(b.count(Player::Two), PIECES_PER_PLAYER);
}

/// Two adjacent pieces in a row block a jump: landing must be empty.
#[test]
fn test_no_jump_over_two_pieces() {
    let b = board(
        "
        11......
        111.....
        .1......
        111.....
        ........
        .....222
        .....222
        .....222
        ",
    );

    // (3,0) east: over (3,1), landing (3,2) occupied.
    assert!(!jump_moves(&b, pos(3, 0)).contains(pos(3, 2)));
    // (1,1) south: over (2,1), landing (3,1) occupied.
    assert!(!jump_moves(&b, pos(1, 1)).contains(pos(3, 1)));
}

/// Diagonal neighbours are never targets, empty or not.
#[test]
fn test_no_diagonal_moves() {
    let b = board(
        "
        1111....
        ........
        ........
        ....11..
        ....1...
        ...11...
        2.......
        22222222
        ",
    );

    let centre = pos(4, 4);
    let steps = simple_moves(&b, centre);
    let jumps = jump_moves(&b, centre);
    for target in steps.iter().chain(jumps.iter()) {
        assert!(
            target.row() == centre.row() || target.col() == centre.col(),
            "diagonal target {}",
            target
        );
    }

    // (3,3) is an empty diagonal; (3,5) is an occupied one with (2,6) free.
    assert_eq!(steps.as_slice(), &[pos(4, 5), pos(4, 3)]);
    assert_eq!(jumps.as_slice(), &[pos(2, 4), pos(6, 4)]);
}

/// Simple moves keep everything else untouched.
#[test]
fn test_simple_move_touches_two_cells() {
    let mut b = Board::initial();
    let before = b;
    apply_simple_move(&mut b, pos(2, 2), pos(2, 3)).unwrap();

    let changed: Vec<_> = Position::all().filter(|&p| b.get(p) != before.get(p)).collect();
    assert_eq!(changed, vec![pos(2, 2), pos(2, 3)]);
}

/// Enumeration agrees with the per-piece queries.
#[test]
fn test_legal_moves_match_per_piece() {
    let b = Board::initial();
    for player in Player::ALL {
        let moves = legal_moves(&b, player);
        let by_piece = moves_by_piece(&b, player);

        let total: usize = by_piece.values().map(|m| m.simple.len() + m.jumps.len()).sum();
        assert_eq!(moves.len(), total);

        for mv in &moves {
            let piece = &by_piece[&mv.from];
            match mv.kind {
                MoveKind::Simple => assert!(piece.simple.contains(mv.to)),
                MoveKind::Jump => assert!(piece.jumps.contains(mv.to)),
            }
        }
    }
}

// =============================================================================
// Properties over random boards
// =============================================================================

fn arb_board() -> impl Strategy<Value = Board> {
    Just((0..64u8).collect::<Vec<_>>())
        .prop_shuffle()
        .prop_map(|cells| {
            let mut b = Board::empty();
            for (i, &cell) in cells.iter().take(2 * PIECES_PER_PLAYER).enumerate() {
                let player = if i < PIECES_PER_PLAYER { Player::One } else { Player::Two };
                b.set(Position::new(cell / 8, cell % 8), Cell::Occupied(player));
            }
            b
        })
}

fn arb_position() -> impl Strategy<Value = Position> {
    (0..8u8, 0..8u8).prop_map(|(row, col)| Position::new(row, col))
}

proptest! {
    #[test]
    fn prop_simple_moves_are_empty_neighbours(b in arb_board(), from in arb_position()) {
        let moves = simple_moves(&b, from);
        if b.is_empty(from) {
            prop_assert!(moves.is_empty());
        }
        prop_assert!(moves.len() <= 4);
        for to in &moves {
            prop_assert_eq!(from.distance(to), 1);
            prop_assert!(b.is_empty(to));
        }
    }

    #[test]
    fn prop_jumps_hop_exactly_one_piece(b in arb_board(), from in arb_position()) {
        let jumps = jump_moves(&b, from);
        if b.is_empty(from) {
            prop_assert!(jumps.is_empty());
        }
        for to in &jumps {
            let dir = Direction::ALL
                .into_iter()
                .find(|&d| from.step(d, 2) == Some(to));
            prop_assert!(dir.is_some(), "{} is not two cells straight from {}", to, from);
            let over = from.step(dir.unwrap(), 1).unwrap();
            prop_assert!(!b.is_empty(over));
            prop_assert!(b.is_empty(to));
        }
    }

    #[test]
    fn prop_jump_preserves_pieces(b in arb_board(), from in arb_position()) {
        let jumps = jump_moves(&b, from);
        for to in &jumps {
            let mut after = b;
            apply_jump(&mut after, from, to).unwrap();

            let over = Position::checked(
                (i32::from(from.row()) + i32::from(to.row())) / 2,
                (i32::from(from.col()) + i32::from(to.col())) / 2,
            ).unwrap();
            prop_assert_eq!(after.get(over), b.get(over));
            prop_assert_eq!(after.get(to), b.get(from));
            prop_assert_eq!(after.count(Player::One), PIECES_PER_PLAYER);
            prop_assert_eq!(after.count(Player::Two), PIECES_PER_PLAYER);

            // The way back is always open.
            prop_assert!(jump_moves(&after, to).contains(from));
        }
    }
}
