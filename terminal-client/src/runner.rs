use std::time::Duration;

use common::games::MoveRandom;
use common::games::tictactoe::{
    Difficulty, GameMode, GameStatus, Mark, TicTacToeGameState, TicTacToeSettings,
};
use common::log;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::render::{render_board, render_status};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Cell(usize),
    Rematch,
    Home,
    Quit,
    Unknown,
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Command::Quit,
        "r" | "rematch" => Command::Rematch,
        "h" | "home" => Command::Home,
        _ => match line.parse::<usize>() {
            Ok(index) => Command::Cell(index),
            Err(_) => Command::Unknown,
        },
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MatchSummary {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl MatchSummary {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::XWon => self.x_wins += 1,
            GameStatus::OWon => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    pub fn rounds(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

enum RoundEnd {
    Finished,
    Quit,
}

enum NextRound {
    Rematch,
    Home,
    Quit,
}

pub struct MatchRunner<I, O, R> {
    state: TicTacToeGameState,
    input: I,
    output: O,
    rng: R,
    summary: MatchSummary,
}

impl<I, O, R> MatchRunner<I, O, R>
where
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
    R: MoveRandom,
{
    pub fn new(state: TicTacToeGameState, input: I, output: O, rng: R) -> Self {
        Self {
            state,
            input,
            output,
            rng,
            summary: MatchSummary::default(),
        }
    }

    /// Plays rounds until the player quits or input ends.
    pub async fn run(mut self) -> Result<MatchSummary, String> {
        loop {
            if let RoundEnd::Quit = self.play_round().await? {
                break;
            }

            tokio::time::sleep(Duration::from_millis(self.state.settings.end_of_round_delay_ms)).await;
            self.summary.record(self.state.status);
            let board = render_board(&self.state);
            let status = render_status(&self.state);
            self.write(&format!("{}{}\n", board, status)).await?;
            self.write(&format!(
                "Score: X {} | O {} | draws {}\n",
                self.summary.x_wins, self.summary.o_wins, self.summary.draws
            ))
            .await?;

            match self.ask_next_round().await? {
                NextRound::Rematch => {
                    self.state.reset();
                    log!("Rematch started");
                }
                NextRound::Home => {
                    let Some(settings) = self.choose_settings().await? else {
                        break;
                    };
                    log!(
                        "Back to home: {:?}, human plays {}, difficulty {}",
                        settings.mode,
                        settings.human_mark,
                        settings.difficulty.name()
                    );
                    self.state = TicTacToeGameState::new(settings);
                }
                NextRound::Quit => break,
            }
        }

        self.write("Goodbye!\n").await?;
        Ok(self.summary)
    }

    async fn play_round(&mut self) -> Result<RoundEnd, String> {
        while !self.state.is_over() {
            let board = render_board(&self.state);
            let status = render_status(&self.state);
            self.write(&format!("{}{}\n", board, status)).await?;

            if self.state.is_bot_turn() {
                tokio::time::sleep(Duration::from_millis(self.state.settings.bot_move_delay_ms)).await;
                let index = self.state.make_bot_move(&mut self.rng)?;
                self.write(&format!("Computer plays {}\n", index)).await?;
                continue;
            }

            self.write(&format!("{}> ", self.state.current_mark)).await?;
            let Some(line) = self.read_line().await? else {
                return Ok(RoundEnd::Quit);
            };

            match parse_command(&line) {
                Command::Quit => return Ok(RoundEnd::Quit),
                Command::Cell(index) => {
                    if let Err(e) = self.state.place_mark(index) {
                        self.write(&format!("{}\n", e)).await?;
                    }
                }
                Command::Rematch | Command::Home | Command::Unknown => {
                    self.write("Enter a cell number 0-8, or q to quit\n").await?;
                }
            }
        }
        Ok(RoundEnd::Finished)
    }

    async fn ask_next_round(&mut self) -> Result<NextRound, String> {
        loop {
            self.write("r to rematch, h for home, q to quit> ").await?;
            let Some(line) = self.read_line().await? else {
                return Ok(NextRound::Quit);
            };
            match parse_command(&line) {
                Command::Rematch => return Ok(NextRound::Rematch),
                Command::Home => return Ok(NextRound::Home),
                Command::Quit => return Ok(NextRound::Quit),
                Command::Cell(_) | Command::Unknown => {}
            }
        }
    }

    /// Home screen: mode, then symbol and difficulty for single player.
    /// Difficulty starts over at easy when left blank. Pacing delays carry
    /// over. `None` when input ends.
    async fn choose_settings(&mut self) -> Result<Option<TicTacToeSettings>, String> {
        let mut settings = TicTacToeSettings {
            difficulty: Difficulty::Easy,
            ..self.state.settings
        };

        let Some(mode) = self.ask("Mode (single/multi)> ", GameMode::from_name).await? else {
            return Ok(None);
        };
        settings.mode = mode;
        if mode == GameMode::MultiPlayer {
            settings.human_mark = Mark::X;
            return Ok(Some(settings));
        }

        let Some(mark) = self.ask("Your symbol (X/O)> ", Mark::from_symbol).await? else {
            return Ok(None);
        };
        settings.human_mark = mark;

        self.write("Difficulty (easy/medium/hard)> ").await?;
        let Some(line) = self.read_line().await? else {
            return Ok(None);
        };
        if !line.trim().is_empty() {
            settings.difficulty = Difficulty::from_name(&line);
        }
        Ok(Some(settings))
    }

    async fn ask<T>(&mut self, prompt: &str, parse: fn(&str) -> Option<T>) -> Result<Option<T>, String> {
        loop {
            self.write(prompt).await?;
            let Some(line) = self.read_line().await? else {
                return Ok(None);
            };
            if let Some(value) = parse(&line) {
                return Ok(Some(value));
            }
        }
    }

    async fn read_line(&mut self) -> Result<Option<String>, String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .await
            .map_err(|e| format!("Failed to read input: {}", e))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    async fn write(&mut self, text: &str) -> Result<(), String> {
        self.output
            .write_all(text.as_bytes())
            .await
            .map_err(|e| format!("Failed to write output: {}", e))?;
        self.output
            .flush()
            .await
            .map_err(|e| format!("Failed to flush output: {}", e))
    }
}
