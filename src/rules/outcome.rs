//! Win detection.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Player};

/// State of the game as a whole.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Nobody has won yet.
    #[default]
    InProgress,
    /// Terminal: the player filled their target zone.
    Won(Player),
}

impl GameOutcome {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameOutcome::Won(_))
    }

    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::InProgress => None,
            GameOutcome::Won(player) => Some(player),
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        self.winner() == Some(player)
    }
}

/// Evaluate the win condition.
///
/// A player wins when every one of their pieces lies in the opponent's home
/// zone. Player One is checked first, so if both conditions hold at once
/// Player One takes the win.
#[must_use]
pub fn check_win(board: &Board) -> GameOutcome {
    Player::ALL
        .into_iter()
        .find(|&player| board.all_in_target(player))
        .map_or(GameOutcome::InProgress, GameOutcome::Won)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, Position};

    #[test]
    fn test_initial_board_in_progress() {
        assert_eq!(check_win(&Board::initial()), GameOutcome::InProgress);
    }

    #[test]
    fn test_player_two_wins() {
        let board: Board = "
            222.....
            222.....
            222.....
            ........
            ...1....
            .....111
            .....111
            .....11.
        "
        .parse()
        .unwrap();

        assert_eq!(check_win(&board), GameOutcome::Won(Player::Two));
    }

    #[test]
    fn test_one_piece_outside_blocks_win() {
        let mut board: Board = "
            ........
            ........
            ........
            22222222
            2......1
            .....111
            .....111
            .....11.
        "
        .parse()
        .unwrap();
        assert_eq!(check_win(&board), GameOutcome::InProgress);

        board.set(Position::new(4, 7), Cell::Empty);
        board.set(Position::new(7, 7), Cell::Occupied(Player::One));
        assert_eq!(check_win(&board), GameOutcome::Won(Player::One));
    }

    #[test]
    fn test_simultaneous_win_favours_player_one() {
        let board: Board = "
            222.....
            222.....
            222.....
            ........
            ........
            .....111
            .....111
            .....111
        "
        .parse()
        .unwrap();

        assert!(board.all_in_target(Player::Two));
        assert_eq!(check_win(&board), GameOutcome::Won(Player::One));
    }

    #[test]
    fn test_outcome_accessors() {
        let won = GameOutcome::Won(Player::Two);
        assert!(won.is_over());
        assert!(won.is_winner(Player::Two));
        assert!(!won.is_winner(Player::One));

        let ongoing = GameOutcome::InProgress;
        assert!(!ongoing.is_over());
        assert_eq!(ongoing.winner(), None);
    }
}
