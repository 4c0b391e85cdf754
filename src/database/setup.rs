use anyhow::{Context, Result};

use super::connection::DbConn;

const SCHEMA_SQL: &str = include_str!("schema.sql");
const DROP_SQL: &str = include_str!("drop.sql");

/// Creates the tables if they do not exist yet. Existing data is kept.
pub fn ensure_schema(conn: &mut DbConn) -> Result<()> {
    run_script(conn, SCHEMA_SQL).context("Failed to create database schema")?;
    log::debug!("Database schema ensured");
    Ok(())
}

/// Drops every table and recreates the schema from scratch.
pub fn reset_database(conn: &mut DbConn) -> Result<()> {
    run_script(conn, DROP_SQL).context("Failed to drop database schema")?;
    run_script(conn, SCHEMA_SQL).context("Failed to recreate database schema")?;

    log::info!("Database schema reset successfully");
    Ok(())
}

fn run_script(conn: &mut DbConn, script: &str) -> Result<()> {
    let statements = split_sql_statements(script);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }

    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &mut DbConn, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}
