use anyhow::{Context, Result};
use log::{debug, info};

use crate::config::settings::AppConfig;
use crate::database::{self, DbConn, DbPool, Match, Player, PlayerId, Standing};
use crate::errors::ValidationError;
use crate::pairing::{self, Pairing};
use crate::validation;

/// Entry point for every tournament operation.
///
/// Holds a connection pool; each operation checks out one connection for its
/// duration and hands it back when the connection guard drops, error paths included.
pub struct TournamentService {
    config: AppConfig,
    pool: DbPool,
}

impl TournamentService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let pool = database::create_pool(&config.database)?;
        info!("Opened tournament database at {}", config.database.path);
        Self::with_pool(config, pool)
    }

    /// Builds the service over an existing pool, creating the schema if needed.
    pub fn with_pool(config: AppConfig, pool: DbPool) -> Result<Self> {
        let service = Self { config, pool };
        database::setup::ensure_schema(&mut service.session()?)?;
        Ok(service)
    }

    fn session(&self) -> Result<DbConn> {
        database::get_connection(&self.pool)
    }

    pub fn reset(&self) -> Result<()> {
        database::setup::reset_database(&mut self.session()?)
    }

    pub fn register_player(&self, name: &str) -> Result<Player> {
        let name = validation::normalize_name(name, &self.config.validation)?;
        let player = database::players::insert_player(&mut self.session()?, name)?;

        info!("Registered player {} with id {}", player.name, player.id);
        Ok(player)
    }

    pub fn delete_players(&self) -> Result<usize> {
        let removed = database::players::delete_all(&mut self.session()?)?;
        info!("Deleted {} players", removed);
        Ok(removed)
    }

    pub fn delete_matches(&self) -> Result<usize> {
        let removed = database::matches::delete_all(&mut self.session()?)?;
        info!("Deleted {} matches", removed);
        Ok(removed)
    }

    pub fn count_players(&self) -> Result<i64> {
        database::players::count_all(&mut self.session()?)
    }

    /// Records one decided match. The match row and both player updates commit
    /// together or not at all.
    pub fn report_match(&self, winner: PlayerId, loser: PlayerId) -> Result<()> {
        validation::check_opponents(winner, loser)?;

        let mut conn = self.session()?;
        let tx = conn
            .transaction()
            .context("Failed to start match report transaction")?;

        if database::players::record_win(&tx, winner)? == 0 {
            return Err(ValidationError::UnknownPlayer(winner).into());
        }
        if database::players::record_loss(&tx, loser)? == 0 {
            return Err(ValidationError::UnknownPlayer(loser).into());
        }
        let recorded = database::matches::insert_match(&tx, winner, loser)?;

        tx.commit()
            .context("Failed to commit match report")?;

        info!("Recorded match {}: {} beat {}", recorded.id, winner, loser);
        Ok(())
    }

    pub fn player_standings(&self) -> Result<Vec<Standing>> {
        database::players::list_standings(&mut self.session()?)
    }

    pub fn swiss_pairings(&self) -> Result<Vec<Pairing>> {
        let standings = self.player_standings()?;
        let pairings = pairing::generate_pairings(&standings);

        debug!(
            "Paired {} of {} players into {} matches",
            pairings.len() * 2,
            standings.len(),
            pairings.len()
        );
        Ok(pairings)
    }

    pub fn list_players(&self) -> Result<Vec<Player>> {
        database::players::list_all(&mut self.session()?)
    }

    pub fn list_matches(&self) -> Result<Vec<Match>> {
        database::matches::list_all(&mut self.session()?)
    }
}
