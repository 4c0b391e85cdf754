use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "Swiss-system tournament manager")]
pub struct Cli {
    /// SQLite database file (defaults to $DATABASE_PATH or tournament.db)
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Create the tables if they are missing
    Init,
    /// Drop all data and recreate the tables
    Reset,
    /// Register a new player
    Register {
        /// Player's full name (need not be unique)
        name: String,
    },
    /// Record the outcome of a single match
    Report {
        /// Id of the player who won
        winner: i32,
        /// Id of the player who lost
        loser: i32,
    },
    /// Print the number of registered players
    Count,
    /// Show players ranked by wins
    Standings {
        #[arg(long)]
        json: bool,
    },
    /// Show pairings for the next round
    Pairings {
        #[arg(long)]
        json: bool,
    },
    /// List recorded matches
    Matches {
        #[arg(long)]
        json: bool,
    },
    /// Remove every match record
    DeleteMatches,
    /// Remove every player (matches must be deleted first)
    DeletePlayers,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
