#![cfg(feature = "std")]

//! Console rendering and fixed game text.

use std::fmt::Write as _;

use crate::{Board, CellState, Coordinate, ShotOutcome, Side, TurnReport};

/// Character drawn for a cell. Ships on a hidden board are drawn as water.
pub fn cell_glyph(state: CellState, hidden: bool) -> char {
    match state {
        CellState::Empty => 'O',
        CellState::Ship if hidden => 'O',
        CellState::Ship => '■',
        CellState::Hit => 'X',
        CellState::Miss => 'T',
        CellState::Cleared => '.',
    }
}

/// Render a board as a bordered grid with 1-indexed row and column labels.
pub fn render_board(board: &Board) -> String {
    let n = board.size();
    let mut out = String::from("  |");
    for c in 1..=n {
        let _ = write!(out, " {} |", c);
    }
    for r in 0..n {
        let _ = write!(out, "\n{} |", r + 1);
        for c in 0..n {
            let state = board
                .cell(Coordinate::new(r as i32, c as i32))
                .unwrap_or(CellState::Empty);
            let _ = write!(out, " {} |", cell_glyph(state, board.hidden()));
        }
    }
    out
}

/// Print both boards, the human's first.
pub fn print_boards(own: &Board, opponent: &Board) {
    println!("{}", "*".repeat(27));
    println!("Your board:");
    println!("{}", render_board(own));
    println!("{}", "*".repeat(27));
    println!("Opponent's board:");
    println!("{}", render_board(opponent));
}

/// Message for an accepted shot.
pub fn outcome_message(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::Hit => "Ship damaged!",
        ShotOutcome::Sunk => "Ship destroyed!",
        ShotOutcome::Miss => "Miss!",
    }
}

/// One line describing a turn, from the point of view of `human`.
pub fn describe_turn(report: &TurnReport, human: Side) -> String {
    let who = if report.shooter == human {
        "You"
    } else {
        "Computer"
    };
    format!(
        "{} fired at {}: {}",
        who,
        report.target,
        outcome_message(report.outcome)
    )
}

pub fn print_greeting(size: usize) {
    println!("-------------------");
    println!("    Welcome to     ");
    println!("    SEA  BATTLE    ");
    println!("-------------------");
    println!(" Enter a shot as two numbers separated by a space: row column");
    println!(" rows and columns run from 1 to {}", size);
    println!();
    println!("Good luck!");
}
