#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use checkers::{
    cli::{parse_coord, render_board, render_turn, run_hot_seat},
    decode_state, encode_state, init_logging, GameSession, TurnOutcome,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about = "English draughts on an 8×8 board", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Log level (overrides CHECKERS_LOG).
    #[arg(long, global = true)]
    log_level: Option<LevelFilter>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Two players take turns on this terminal.
    Play {
        #[arg(long, help = "Resume from a snapshot written by `replay --save`")]
        load: Option<PathBuf>,
    },
    /// Print the starting board.
    Show,
    /// Apply a sequence of clicks (e.g. C6 B5) and print the resulting board.
    Replay {
        clicks: Vec<String>,
        #[arg(long, help = "Write the final position as a binary snapshot")]
        save: Option<PathBuf>,
    },
    /// Print the position stored in a snapshot file.
    Load { path: PathBuf },
}

#[cfg(feature = "std")]
fn load_session(path: &Path) -> anyhow::Result<GameSession> {
    let bytes = std::fs::read(path)?;
    let state = decode_state(&bytes)?;
    GameSession::from_state(state).map_err(|e| anyhow::anyhow!(e))
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match cli.command {
        Commands::Play { load } => {
            let mut session = match load {
                Some(path) => load_session(&path)?,
                None => GameSession::new(),
            };
            println!("Type 'help' for commands.");
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            run_hot_seat(&mut session, stdin.lock(), &mut stdout)?;
        }
        Commands::Show => {
            let session = GameSession::new();
            print!("{}", render_board(session.board()));
            println!("{}", render_turn(&session));
        }
        Commands::Replay { clicks, save } => {
            let mut session = GameSession::new();
            for click in &clicks {
                let pos = parse_coord(click).map_err(|e| anyhow::anyhow!(e))?;
                if session.click(pos) == TurnOutcome::Ignored {
                    return Err(anyhow::anyhow!("click on {} was ignored", click));
                }
            }
            print!("{}", render_board(session.board()));
            println!("{}", render_turn(&session));
            if let Some(path) = save {
                std::fs::write(&path, encode_state(&session.state())?)?;
                println!("Saved snapshot to {}", path.display());
            }
        }
        Commands::Load { path } => {
            let session = load_session(&path)?;
            print!("{}", render_board(session.board()));
            println!("{}", render_turn(&session));
        }
    }
    Ok(())
}
