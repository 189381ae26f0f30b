#![cfg(feature = "std")]

//! Hot-seat game loop: two people share one terminal and type coordinates.

use std::io::{BufRead, Write};

use log::info;

use super::interface::{coord_to_string, parse_coord, render_board, render_turn};
use crate::engine::{GameSession, TurnOutcome};

fn print_help<W: Write>(output: &mut W) -> anyhow::Result<()> {
    writeln!(output, "Commands:")?;
    writeln!(output, "  <coord>  select a piece, or move the selected piece there (e.g. C6)")?;
    writeln!(output, "  board    show the board again")?;
    writeln!(output, "  help     show this help")?;
    writeln!(output, "  quit     leave the game")?;
    writeln!(output, "Legend: w/b = pieces (W/B selected), * = possible move, . = empty")?;
    Ok(())
}

fn print_position<W: Write>(session: &GameSession, output: &mut W) -> anyhow::Result<()> {
    write!(output, "{}", render_board(session.board()))?;
    writeln!(output, "{}", render_turn(session))?;
    Ok(())
}

/// Run commands from `input` against `session` until `quit` or end of input.
pub fn run_hot_seat<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: R,
    output: &mut W,
) -> anyhow::Result<()> {
    print_position(session, output)?;
    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if command.eq_ignore_ascii_case("quit") {
            break;
        }
        if command.eq_ignore_ascii_case("help") {
            print_help(output)?;
            continue;
        }
        if command.eq_ignore_ascii_case("board") {
            print_position(session, output)?;
            continue;
        }

        let pos = match parse_coord(command) {
            Ok(pos) => pos,
            Err(e) => {
                writeln!(output, "✗ {}", e)?;
                continue;
            }
        };
        let mover = session.current_player();
        match session.click(pos) {
            TurnOutcome::Ignored => {
                writeln!(output, "✗ {} cannot be selected now", coord_to_string(pos))?;
            }
            TurnOutcome::Selected if session.board().possible_moves().is_empty() => {
                writeln!(output, "No moves for {}", coord_to_string(pos))?;
            }
            TurnOutcome::Selected | TurnOutcome::NoMove => {}
            TurnOutcome::ChainContinues => {
                info!("{} captured on {}", mover, coord_to_string(pos));
                writeln!(output, "✓ Capture! {} must keep jumping", mover)?;
            }
            TurnOutcome::TurnComplete(kind) => {
                info!("{} {:?} move to {}", mover, kind, coord_to_string(pos));
                writeln!(output, "✓ {} moved to {}", mover, coord_to_string(pos))?;
            }
        }
        print_position(session, output)?;
    }
    output.flush()?;
    Ok(())
}
