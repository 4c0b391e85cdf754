use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::{Player, PlayerId, Standing};

pub fn insert_player(conn: &mut DbConn, name: &str) -> Result<Player> {
    let sql = "INSERT INTO players (name) VALUES (?1) RETURNING id, name, wins, matches, created_at";

    conn.query_row(sql, params![name], parse_player_row)
        .context("Failed to insert new player")
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        wins: row.get(2)?,
        matches: row.get(3)?,
        created_at: row.get(4)?,
    })
}

pub fn find_by_id(conn: &mut DbConn, id: PlayerId) -> Result<Option<Player>> {
    let sql = "SELECT id, name, wins, matches, created_at FROM players WHERE id = ?1";

    conn.query_row(sql, params![id], parse_player_row)
        .optional()
        .context("Failed to query player by id")
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Player>> {
    let sql = "SELECT id, name, wins, matches, created_at FROM players ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn count_all(conn: &mut DbConn) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))
        .context("Failed to count players")
}

pub fn delete_all(conn: &mut DbConn) -> Result<usize> {
    conn.execute("DELETE FROM players", [])
        .context("Failed to delete players")
}

/// Players ranked by wins, ties going to the earlier registration.
pub fn list_standings(conn: &mut DbConn) -> Result<Vec<Standing>> {
    let sql = "SELECT id, name, wins, matches FROM players ORDER BY wins DESC, id ASC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], |row| {
            Ok(Standing {
                id: row.get(0)?,
                name: row.get(1)?,
                wins: row.get(2)?,
                matches: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Returns the number of rows touched, zero when the id is unknown.
pub fn record_win(conn: &rusqlite::Connection, id: PlayerId) -> Result<usize> {
    conn.execute(
        "UPDATE players SET wins = wins + 1, matches = matches + 1 WHERE id = ?1",
        params![id],
    )
    .context("Failed to record win")
}

/// Returns the number of rows touched, zero when the id is unknown.
pub fn record_loss(conn: &rusqlite::Connection, id: PlayerId) -> Result<usize> {
    conn.execute(
        "UPDATE players SET matches = matches + 1 WHERE id = ?1",
        params![id],
    )
    .context("Failed to record loss")
}
