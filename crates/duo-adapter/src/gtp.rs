//! Protocol engine and transport loop
//!
//! One [`GtpEngine`] owns the live board, the shared enumeration buffer and
//! the configuration. [`GtpEngine::process_line`] turns a raw input line
//! into a framed reply; [`GtpEngine::run`] is the blocking read-eval-reply
//! loop a controller speaks to over stdio.
//!
//! The wire framing follows the usual GTP shape: an optional numeric id,
//! the command, whitespace-separated arguments, `#` starting a comment.
//! Replies open with `=` on success and `?` on failure, echo the id if one
//! was given, and end with a blank line.

use std::io::{self, BufRead, Write};

use duo_core::{Board, MoveBuffer};
use duo_types::Color;

use crate::codec;
use crate::cputime;
use crate::dispatch;
use crate::error::CommandError;
use crate::render;
use crate::AdapterConfig;

/// Every command this engine answers, in list_commands order
pub const COMMANDS: &[&str] = &[
    "clear_board",
    "cputime",
    "final_score",
    "genmove",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "reset",
    "set_game",
    "showboard",
    "version",
];

/// A framed reply to one input line
#[derive(Debug, PartialEq, Eq)]
pub struct LineReply {
    /// Wire text, blank-line terminator included
    pub wire: String,
    /// Whether the loop should stop after writing this reply
    pub quit: bool,
}

/// Bring the board's mover in line with the color a command names.
///
/// Controllers address moves by color while the board tracks the mover by
/// turn parity. When they disagree the other side is simply out of moves
/// and its pass was left implicit, so one pass is applied here. Two
/// consecutive commands for the same color stay consistent this way
/// without any protocol extension.
pub fn reconcile(board: &mut Board, color: Color) {
    if board.current_mover() != color {
        board.apply_pass();
    }
}

/// The protocol engine: live game state plus command handlers
#[derive(Debug)]
pub struct GtpEngine {
    board: Board,
    buffer: MoveBuffer,
    config: AdapterConfig,
}

impl GtpEngine {
    pub fn new(config: AdapterConfig) -> Self {
        Self {
            board: Board::new(),
            buffer: MoveBuffer::new(),
            config,
        }
    }

    /// The live position (read-only; commands are the only mutators)
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Execute one command. `raw` is the unsplit argument text for the
    /// commands that compare it verbatim. Success text may be empty.
    fn handle(&mut self, cmd: &str, args: &[&str], raw: &str) -> Result<String, CommandError> {
        match cmd {
            "protocol_version" => {
                expect_args(cmd, args, 0)?;
                Ok("2".to_string())
            }
            "name" => {
                expect_args(cmd, args, 0)?;
                Ok("duo-gtp".to_string())
            }
            "version" => {
                expect_args(cmd, args, 0)?;
                Ok(env!("CARGO_PKG_VERSION").to_string())
            }
            "list_commands" => {
                expect_args(cmd, args, 0)?;
                Ok(COMMANDS.join("\n"))
            }
            "known_command" => {
                expect_args(cmd, args, 1)?;
                Ok(COMMANDS.contains(&args[0]).to_string())
            }
            "quit" => {
                expect_args(cmd, args, 0)?;
                Ok(String::new())
            }
            "clear_board" | "reset" => {
                expect_args(cmd, args, 0)?;
                self.board = Board::new();
                Ok(String::new())
            }
            "set_game" => {
                // The game name is matched verbatim, spacing included.
                let game = raw.trim_end();
                if game == "Blokus Duo" {
                    Ok(String::new())
                } else {
                    Err(CommandError::invalid_argument(format!(
                        "unsupported game '{}'",
                        game
                    )))
                }
            }
            "play" => {
                expect_args(cmd, args, 2)?;
                let color = color_arg(args[0])?;
                // Reconcile on a copy so a rejected move leaves the live
                // board untouched, implicit pass included.
                let mut board = self.board.clone();
                reconcile(&mut board, color);
                let mv = codec::decode(&board, &mut self.buffer, args[1])?;
                board.apply_move(mv);
                self.board = board;
                Ok(String::new())
            }
            "genmove" => {
                expect_args(cmd, args, 1)?;
                let color = color_arg(args[0])?;
                reconcile(&mut self.board, color);
                let mv = dispatch::generate(&mut self.board, &self.config);
                Ok(codec::encode(mv))
            }
            "final_score" => {
                expect_args(cmd, args, 0)?;
                Ok(render::final_score(&self.board))
            }
            "showboard" => {
                expect_args(cmd, args, 0)?;
                Ok(render::showboard(&self.board))
            }
            "cputime" => {
                expect_args(cmd, args, 0)?;
                Ok(cputime::cpu_seconds()
                    .map(|t| format!("{:.3}", t))
                    .unwrap_or_default())
            }
            _ => Err(CommandError::invalid_argument(format!(
                "unknown command '{}'",
                cmd
            ))),
        }
    }

    /// Turn one raw input line into a framed reply.
    ///
    /// Returns `None` for blank and comment-only lines, which get no reply
    /// at all.
    pub fn process_line(&mut self, line: &str) -> Option<LineReply> {
        let line = match line.find('#') {
            Some(i) => &line[..i],
            None => line,
        };
        let (first, rest) = split_token(line)?;

        let (id, cmd, rest) = if first.bytes().all(|b| b.is_ascii_digit()) {
            match split_token(rest) {
                Some((cmd, rest)) => (Some(first), cmd, rest),
                None => {
                    return Some(LineReply {
                        wire: frame('?', Some(first), "missing command"),
                        quit: false,
                    });
                }
            }
        } else {
            (None, first, rest)
        };
        let args: Vec<&str> = rest.split_whitespace().collect();

        if !COMMANDS.contains(&cmd) {
            return Some(LineReply {
                wire: frame('?', id, &format!("unknown command '{}'", cmd)),
                quit: false,
            });
        }

        match self.handle(cmd, &args, rest) {
            Ok(text) => Some(LineReply {
                wire: frame('=', id, &text),
                quit: cmd == "quit",
            }),
            Err(err) => Some(LineReply {
                wire: frame('?', id, &err.to_string()),
                quit: false,
            }),
        }
    }

    /// The blocking command loop: read lines, write framed replies, stop
    /// on quit or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, mut writer: W) -> io::Result<()> {
        for line in reader.lines() {
            let line = line?;
            if let Some(reply) = self.process_line(&line) {
                writer.write_all(reply.wire.as_bytes())?;
                writer.flush()?;
                if reply.quit {
                    break;
                }
            }
        }
        Ok(())
    }
}

/// Split off the first whitespace-delimited token; the remainder keeps its
/// internal spacing. `None` when nothing but whitespace is left.
fn split_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    Some((&s[..end], s[end..].trim_start()))
}

fn frame(marker: char, id: Option<&str>, text: &str) -> String {
    let mut out = String::new();
    out.push(marker);
    if let Some(id) = id {
        out.push_str(id);
    }
    if !text.is_empty() {
        out.push(' ');
        out.push_str(text);
    }
    out.push_str("\n\n");
    out
}

fn expect_args(cmd: &str, args: &[&str], n: usize) -> Result<(), CommandError> {
    if args.len() != n {
        return Err(CommandError::invalid_argument(format!(
            "{} takes {} argument(s), got {}",
            cmd,
            n,
            args.len()
        )));
    }
    Ok(())
}

fn color_arg(token: &str) -> Result<Color, CommandError> {
    Color::from_str(token)
        .ok_or_else(|| CommandError::invalid_argument(format!("unrecognized color '{}'", token)))
}
