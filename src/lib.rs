pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod output;
pub mod pairing;
pub mod services;
pub mod validation;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::config::settings::AppConfig;
use crate::services::TournamentService;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn build_config(database: Option<&str>) -> AppConfig {
    let config = AppConfig::new();
    match database {
        Some(path) => config.with_database_path(path),
        None => config,
    }
}

pub fn handle_init(config: AppConfig) -> Result<()> {
    let service = TournamentService::new(config)?;
    println!("Tournament ready with {} players", service.count_players()?);
    Ok(())
}

pub fn handle_reset(config: AppConfig) -> Result<()> {
    TournamentService::new(config)?.reset()?;
    println!("Tournament reset");
    Ok(())
}

pub fn handle_register(config: AppConfig, name: &str) -> Result<()> {
    let player = TournamentService::new(config)?.register_player(name)?;
    println!("Registered {} with id {}", player.name, player.id);
    Ok(())
}

pub fn handle_report(config: AppConfig, winner: i32, loser: i32) -> Result<()> {
    TournamentService::new(config)?.report_match(winner, loser)?;
    println!("Recorded: {winner} beat {loser}");
    Ok(())
}

pub fn handle_count(config: AppConfig) -> Result<()> {
    println!("{}", TournamentService::new(config)?.count_players()?);
    Ok(())
}

pub fn handle_standings(config: AppConfig, json: bool) -> Result<()> {
    let standings = TournamentService::new(config)?.player_standings()?;
    if json {
        println!("{}", output::to_json(&standings)?);
    } else {
        print!("{}", output::standings_table(&standings));
    }
    Ok(())
}

pub fn handle_pairings(config: AppConfig, json: bool) -> Result<()> {
    let service = TournamentService::new(config)?;
    let pairings = service.swiss_pairings()?;
    if json {
        println!("{}", output::to_json(&pairings)?);
    } else {
        let player_count = service.count_players()? as usize;
        print!("{}", output::pairings_table(&pairings, player_count));
    }
    Ok(())
}

pub fn handle_matches(config: AppConfig, json: bool) -> Result<()> {
    let matches = TournamentService::new(config)?.list_matches()?;
    if json {
        println!("{}", output::to_json(&matches)?);
    } else {
        print!("{}", output::matches_table(&matches));
    }
    Ok(())
}

pub fn handle_delete_matches(config: AppConfig) -> Result<()> {
    let removed = TournamentService::new(config)?.delete_matches()?;
    println!("Deleted {removed} matches");
    Ok(())
}

pub fn handle_delete_players(config: AppConfig) -> Result<()> {
    let removed = TournamentService::new(config)?.delete_players()?;
    println!("Deleted {removed} players");
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
