//! End-to-end tournament flow against an in-memory database.

use swiss_tournament::config::settings::AppConfig;
use swiss_tournament::database::{create_memory_pool, Player, PlayerId, Standing};
use swiss_tournament::services::TournamentService;

fn service() -> TournamentService {
    let pool = create_memory_pool().unwrap();
    TournamentService::with_pool(AppConfig::new(), pool).unwrap()
}

fn row(players: &[Player], id: PlayerId) -> Player {
    players.iter().find(|p| p.id == id).cloned().unwrap()
}

fn find<'a>(standings: &'a [Standing], name: &str) -> &'a Standing {
    standings.iter().find(|s| s.name == name).unwrap()
}

#[test]
fn delete_players_then_count_is_zero() {
    let service = service();
    service.register_player("Alice").unwrap();
    service.register_player("Bob").unwrap();

    service.delete_matches().unwrap();
    service.delete_players().unwrap();

    assert_eq!(service.count_players().unwrap(), 0);
    // Repeating on an empty tournament is harmless.
    assert_eq!(service.delete_players().unwrap(), 0);
    assert_eq!(service.count_players().unwrap(), 0);
}

#[test]
fn four_player_round() {
    let service = service();
    for name in ["Alice", "Bob", "Carol", "Dave"] {
        service.register_player(name).unwrap();
    }
    assert_eq!(service.count_players().unwrap(), 4);

    let standings = service.player_standings().unwrap();
    let id = |name: &str| find(&standings, name).id;
    service.report_match(id("Alice"), id("Bob")).unwrap();
    service.report_match(id("Carol"), id("Dave")).unwrap();

    let standings = service.player_standings().unwrap();
    for (name, wins) in [("Alice", 1), ("Carol", 1), ("Bob", 0), ("Dave", 0)] {
        let s = find(&standings, name);
        assert_eq!((s.wins, s.matches), (wins, 1), "{name}");
    }
    assert_eq!(standings[0].name, "Alice");
    assert_eq!(standings[1].name, "Carol");

    let pairings = service.swiss_pairings().unwrap();
    assert_eq!(pairings.len(), 2);
    for p in &pairings {
        let wins = [find(&standings, &p.name1).wins, find(&standings, &p.name2).wins];
        assert!(wins.iter().all(|&w| w == wins[0]), "{p:?}");
    }
    let winners_pair = &pairings[0];
    assert_eq!(
        (winners_pair.name1.as_str(), winners_pair.name2.as_str()),
        ("Alice", "Carol")
    );
}

#[test]
fn report_touches_only_named_players() {
    let service = service();
    let alice = service.register_player("Alice").unwrap();
    let bob = service.register_player("Bob").unwrap();
    let carol = service.register_player("Carol").unwrap();
    let before = service.list_players().unwrap();

    service.report_match(bob.id, alice.id).unwrap();

    let after = service.list_players().unwrap();
    assert_eq!(row(&after, carol.id), row(&before, carol.id));
    assert_eq!((row(&after, bob.id).wins, row(&after, bob.id).matches), (1, 1));
    assert_eq!((row(&after, alice.id).wins, row(&after, alice.id).matches), (0, 1));

    let matches = service.list_matches().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!((matches[0].winner, matches[0].loser), (bob.id, alice.id));
}

#[test]
fn odd_field_leaves_last_ranked_unpaired() {
    let service = service();
    let players: Vec<_> = ["A", "B", "C"]
        .iter()
        .map(|name| service.register_player(name).unwrap())
        .collect();
    service.report_match(players[2].id, players[0].id).unwrap();

    let standings = service.player_standings().unwrap();
    let last = standings.last().unwrap().id;
    let pairings = service.swiss_pairings().unwrap();

    assert_eq!(pairings.len(), 1);
    assert!(pairings.iter().all(|p| !p.contains(last)));
}

#[test]
fn pairings_on_empty_tournament_are_empty() {
    let service = service();
    assert!(service.swiss_pairings().unwrap().is_empty());

    service.register_player("Solo").unwrap();
    assert!(service.swiss_pairings().unwrap().is_empty());
}

#[test]
fn deleting_players_with_recorded_matches_fails() {
    let service = service();
    let a = service.register_player("A").unwrap();
    let b = service.register_player("B").unwrap();
    service.report_match(a.id, b.id).unwrap();

    assert!(service.delete_players().is_err());
    assert_eq!(service.count_players().unwrap(), 2);

    service.delete_matches().unwrap();
    assert_eq!(service.delete_players().unwrap(), 2);
}

#[test]
fn ids_keep_increasing_after_delete() {
    let service = service();
    let first = service.register_player("A").unwrap();
    service.delete_players().unwrap();

    let second = service.register_player("B").unwrap();

    assert!(second.id > first.id);
}
