//! Command-line interface for the tic-tac-toe terminal game.

use clap::Parser;
use std::path::PathBuf;

/// Local two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two players, one terminal, mouse-driven tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Name for player X
    #[arg(long)]
    pub player_x: Option<String>,

    /// Name for player O
    #[arg(long)]
    pub player_o: Option<String>,

    /// Log file path, overriding the config file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// True when both names were supplied and the entry screen can be skipped.
    pub fn has_both_names(&self) -> bool {
        self.player_x.is_some() && self.player_o.is_some()
    }
}
