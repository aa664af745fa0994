use std::fmt;
use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::game::Game;
use crate::mcts::game::{Action, Player, State};

pub const BOARD_SIZE: usize = 9;

const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum TTTAction {
    Place(u8),
}

impl Action for TTTAction {
    type StateType = TTTState;
    fn execute(&self, state: &TTTState) -> TTTState {
        let mut board = state.board;
        match self {
            TTTAction::Place(cell) => {
                let cell = *cell as usize;
                if board[cell].is_some() {
                    panic!("Placing on occupied cell {}", cell);
                }
                board[cell] = Some(state.next_player());
            }
        }
        TTTState { board }
    }
}

#[derive(PartialEq, Debug)]
enum CheckForWinResult {
    Winner(Player),
    Stalemate,
    Ongoing,
}

fn check_for_win(board: &[Option<Player>; BOARD_SIZE]) -> CheckForWinResult {
    for [a, b, c] in WIN_LINES {
        if let Some(player) = board[a] {
            if board[b] == Some(player) && board[c] == Some(player) {
                return CheckForWinResult::Winner(player);
            }
        }
    }

    if board.iter().all(|cell| cell.is_some()) {
        return CheckForWinResult::Stalemate;
    }

    CheckForWinResult::Ongoing
}

///
/// A tic-tac-toe position. Whose turn it is isn't stored: with strictly alternating turns it
/// follows from how many marks each player has down.
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct TTTState {
    board: [Option<Player>; BOARD_SIZE],
}

impl TTTState {
    pub fn from_board(board: [Option<Player>; BOARD_SIZE]) -> TTTState {
        TTTState { board }
    }

    pub fn board(&self) -> &[Option<Player>; BOARD_SIZE] {
        &self.board
    }
}

impl State for TTTState {
    type ActionType = TTTAction;
    fn permitted_actions(&self) -> Vec<Self::ActionType> {
        (0..BOARD_SIZE)
            .filter(|&i| self.board[i].is_none())
            .map(|i| TTTAction::Place(i as u8))
            .collect()
    }
    fn next_player(&self) -> Player {
        let first = self
            .board
            .iter()
            .filter(|&&cell| cell == Some(Player::First))
            .count();
        let second = self
            .board
            .iter()
            .filter(|&&cell| cell == Some(Player::Second))
            .count();
        if first == second {
            Player::First
        } else {
            Player::Second
        }
    }
    fn terminal(&self) -> bool {
        check_for_win(&self.board) != CheckForWinResult::Ongoing
    }
    fn winner(&self) -> Option<Player> {
        match check_for_win(&self.board) {
            CheckForWinResult::Winner(player) => Some(player),
            _ => None,
        }
    }
}

impl fmt::Display for TTTState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.board.iter().enumerate() {
            let symbol = match cell {
                None => ' ',
                Some(Player::First) => 'O',
                Some(Player::Second) => 'X',
            };
            write!(f, "{}", symbol)?;
            if i % 3 == 2 {
                writeln!(f)?;
            } else {
                write!(f, "|")?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum MoveInputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("{0} is off the board, enter a number between 0 and 8")]
    OutOfRange(i64),
    #[error("cell {0} is already taken")]
    Occupied(u8),
}

pub fn parse_human_turn(state: &TTTState, input: &str) -> Result<TTTAction, MoveInputError> {
    let input = input.trim();
    let cell: i64 = input
        .parse()
        .map_err(|_| MoveInputError::NotANumber(input.to_string()))?;
    if !(0..BOARD_SIZE as i64).contains(&cell) {
        return Err(MoveInputError::OutOfRange(cell));
    }
    let cell = cell as u8;
    if state.board[cell as usize].is_some() {
        return Err(MoveInputError::Occupied(cell));
    }
    Ok(TTTAction::Place(cell))
}

pub struct TTT;

impl Game for TTT {
    type StateType = TTTState;
    type ActionType = TTTAction;

    fn visualise_state(&self, state: &Self::StateType) {
        print!("{}", state);
    }

    fn get_human_turn(&self, state: &Self::StateType) -> io::Result<Self::ActionType> {
        let stdin = io::stdin();
        loop {
            print!("Enter a cell to place on (0-8): ");
            io::stdout().flush()?;
            let mut input = String::new();
            if stdin.lock().read_line(&mut input)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "stdin closed before a move was entered",
                ));
            }
            match parse_human_turn(state, &input) {
                Ok(action) => return Ok(action),
                Err(err) => println!("{}", err),
            }
        }
    }

    fn init_game(&self) -> Self::StateType {
        TTTState {
            board: [None; BOARD_SIZE],
        }
    }
}
