use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::database::{Match, Standing};
use crate::pairing::Pairing;

pub fn to_json<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    serde_json::to_string_pretty(data).context("Failed to serialize output")
}

pub fn standings_table(standings: &[Standing]) -> String {
    let mut out = format!(
        "{}\n",
        format!("{:>4}  {:>5}  {:<30} {:>4} {:>6} {:>7}", "Rank", "Id", "Name", "Wins", "Losses", "Matches")
            .bold()
    );

    for (idx, s) in standings.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {:>5}  {:<30} {:>4} {:>6} {:>7}\n",
            idx + 1,
            s.id,
            s.name,
            s.wins,
            s.losses(),
            s.matches
        ));
    }

    if standings.is_empty() {
        out.push_str(&format!("{}\n", "No players registered".dimmed()));
    }
    out
}

pub fn pairings_table(pairings: &[Pairing], player_count: usize) -> String {
    let mut out = format!("{}\n", "Next round".bold());

    for (idx, p) in pairings.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {} ({}) vs {} ({})\n",
            idx + 1,
            p.name1,
            p.id1,
            p.name2,
            p.id2
        ));
    }

    let unpaired = player_count.saturating_sub(pairings.len() * 2);
    if unpaired > 0 {
        out.push_str(&format!(
            "{}\n",
            format!("{unpaired} player without an opponent this round").yellow()
        ));
    }
    out
}

pub fn matches_table(matches: &[Match]) -> String {
    let mut out = format!(
        "{}\n",
        format!("{:>5}  {:>6}  {:>6}  {}", "Match", "Winner", "Loser", "Reported").bold()
    );

    for m in matches {
        let reported = m
            .created_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        out.push_str(&format!("{:>5}  {:>6}  {:>6}  {}\n", m.id, m.winner, m.loser, reported));
    }
    out
}
