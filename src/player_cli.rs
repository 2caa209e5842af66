#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::BoardError,
    coordinate::Coordinate,
    player::{Player, TargetError},
};

/// Human player reading `row col` lines (1-indexed) from `input`.
pub struct CliPlayer<R> {
    input: R,
    prompt: bool,
}

impl CliPlayer<io::StdinLock<'static>> {
    /// Player reading from standard input.
    pub fn new() -> Self {
        Self::with_reader(io::stdin().lock())
    }
}

impl<R: BufRead> CliPlayer<R> {
    /// Player reading from any line source. Prompts are printed to stdout.
    pub fn with_reader(input: R) -> Self {
        Self {
            input,
            prompt: true,
        }
    }

    /// Suppress the `Your move:` prompt, for scripted input.
    pub fn quiet(mut self) -> Self {
        self.prompt = false;
        self
    }
}

/// Parse a human target: exactly two unsigned integers, 1-indexed.
///
/// `0` is accepted here and becomes an off-board coordinate; rejecting it is
/// the board's job.
pub fn parse_target(line: &str) -> Result<Coordinate, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens.as_slice() else {
        return Err("Enter 2 coordinates!".to_string());
    };
    let parse = |s: &str| -> Result<i32, String> {
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err("Enter numbers!".to_string());
        }
        s.parse::<i32>()
            .map_err(|_| format!("Coordinate '{}' is too large", s))
    };
    let (row, col) = (parse(*row)?, parse(*col)?);
    Ok(Coordinate::new(row - 1, col - 1))
}

impl<R: BufRead> Player for CliPlayer<R> {
    fn name(&self) -> &str {
        "human"
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        _opponent: &Board,
    ) -> Result<Coordinate, TargetError> {
        if self.prompt {
            print!("Your move: ");
            let _ = io::stdout().flush();
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => Err(TargetError::InputClosed),
            Ok(_) => parse_target(&line).map_err(TargetError::Invalid),
        }
    }

    fn handle_rejected_shot(&mut self, _target: Coordinate, err: &BoardError) {
        let msg = match err {
            BoardError::OutOfBounds(_) => "You are trying to shoot off the board!",
            BoardError::AlreadyTargeted(_) => "You have already fired at that cell.",
            _ => "That shot was not accepted.",
        };
        println!("{}", msg);
    }

    fn handle_invalid_input(&mut self, message: &str) {
        println!(" {} ", message);
    }
}
