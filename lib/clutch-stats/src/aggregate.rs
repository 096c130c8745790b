use clutch_api::model::{DamageStat, MatchPlayer, MatchRecord, PlayerIdentity, PlayerStats, TeamSide};
use serde::Serialize;

/// Totals accumulated over every match the target player appeared in.
///
/// Only raw counters are stored; the ratio metrics are derived on demand so
/// nothing gets rounded before the formatting boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateStats {
    pub matches: u32,
    pub wins: u32,
    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,
    pub headshots: i64,
    pub bodyshots: i64,
    pub legshots: i64,
    pub damage_made: i64,
    pub damage_received: i64,
    pub rounds: i64,
}

impl AggregateStats {
    pub fn kda(&self) -> f64 {
        (self.kills + self.assists) as f64 / self.deaths.max(1) as f64
    }

    /// Average damage dealt per round.
    pub fn adr(&self) -> f64 {
        self.damage_made as f64 / self.rounds.max(1) as f64
    }

    /// ADR minus average damage received per round.
    pub fn damage_delta(&self) -> f64 {
        self.adr() - self.damage_received as f64 / self.rounds.max(1) as f64
    }

    pub fn headshot_pct(&self) -> f64 {
        let shots = self.headshots + self.bodyshots + self.legshots;
        self.headshots as f64 / shots.max(1) as f64 * 100.0
    }

    pub fn winrate_pct(&self) -> f64 {
        self.wins as f64 / self.matches.max(1) as f64 * 100.0
    }
}

type DamageSource = fn(&MatchPlayer) -> Option<i64>;

/// Ordered fallbacks for damage dealt. The upstream schema moved this field
/// around between API versions, so each source is tried in turn and the first
/// non-zero hit wins.
const DAMAGE_MADE_SOURCES: &[DamageSource] = &[
    |p| match p.stats.damage.as_ref()? {
        DamageStat::Breakdown(b) => b.made,
        DamageStat::Flat(_) => None,
    },
    |p| match p.stats.damage.as_ref()? {
        DamageStat::Breakdown(b) => b.damage,
        DamageStat::Flat(n) => Some(*n),
    },
    |p| p.stats.damage_made,
    |p| p.damage_made,
];

const DAMAGE_RECEIVED_SOURCES: &[DamageSource] = &[
    |p| p.damage_received,
    |p| match p.stats.damage.as_ref()? {
        DamageStat::Breakdown(b) => b.received,
        DamageStat::Flat(_) => None,
    },
];

fn resolve_damage(sources: &[DamageSource], player: &MatchPlayer) -> i64 {
    sources
        .iter()
        .filter_map(|source| source(player))
        .find(|value| *value != 0)
        .unwrap_or(0)
}

/// Locate the target player's sub-record within a match, matching name and
/// tag case-insensitively.
pub fn find_player<'a>(
    record: &'a MatchRecord,
    identity: &PlayerIdentity,
) -> Option<&'a MatchPlayer> {
    record
        .players
        .all_players
        .iter()
        .find(|player| identity.matches(&player.name, &player.tag))
}

fn player_won(record: &MatchRecord, player: &MatchPlayer) -> bool {
    match player.team {
        Some(TeamSide::Red) => record.teams.red.has_won,
        Some(TeamSide::Blue) => record.teams.blue.has_won,
        None => false,
    }
}

/// Aggregate a player's performance over a sequence of matches.
///
/// Matches the player does not appear in are skipped and do not count toward
/// the match total. Returns `None` when the player appears in no record at
/// all, so callers can tell "no data" apart from a scoreless run.
pub fn aggregate(matches: &[MatchRecord], identity: &PlayerIdentity) -> Option<AggregateStats> {
    let mut totals = AggregateStats::default();

    for record in matches {
        let Some(player) = find_player(record, identity) else {
            continue;
        };

        totals.kills += player.stats.kills;
        totals.deaths += player.stats.deaths;
        totals.assists += player.stats.assists;
        totals.headshots += player.stats.headshots;
        totals.bodyshots += player.stats.bodyshots;
        totals.legshots += player.stats.legshots;
        totals.damage_made += resolve_damage(DAMAGE_MADE_SOURCES, player);
        totals.damage_received += resolve_damage(DAMAGE_RECEIVED_SOURCES, player);
        totals.rounds += record.metadata.rounds_played;
        if player_won(record, player) {
            totals.wins += 1;
        }
        totals.matches += 1;
    }

    (totals.matches > 0).then_some(totals)
}

/// 1-based scoreboard position within the lobby, ranked by combat score.
pub fn lobby_placement(record: &MatchRecord, identity: &PlayerIdentity) -> Option<usize> {
    let player = find_player(record, identity)?;
    let better = record
        .players
        .all_players
        .iter()
        .filter(|other| other.stats.score > player.stats.score)
        .count();
    Some(better + 1)
}

/// Headshot percentage of a single match, floored denominator like the
/// aggregate version.
pub fn headshot_pct(stats: &PlayerStats) -> f64 {
    let shots = stats.headshots + stats.bodyshots + stats.legshots;
    stats.headshots as f64 / shots.max(1) as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use clutch_api::model::{
        DamageBreakdown, MatchMetadata, MatchPlayers, MatchTeams, Region, Season, TeamSummary,
    };

    const EPSILON: f64 = 1e-9;

    fn identity() -> PlayerIdentity {
        PlayerIdentity {
            name: "Foo".into(),
            tag: "EUW".into(),
            region: Region::Eu,
        }
    }

    fn player(name: &str, tag: &str, team: TeamSide) -> MatchPlayer {
        MatchPlayer {
            name: name.into(),
            tag: tag.into(),
            team: Some(team),
            ..Default::default()
        }
    }

    fn record(season: &str, rounds: i64, red_won: bool, players: Vec<MatchPlayer>) -> MatchRecord {
        MatchRecord {
            metadata: MatchMetadata {
                rounds_played: rounds,
                season: Season {
                    short: season.into(),
                },
                ..Default::default()
            },
            players: MatchPlayers {
                all_players: players,
            },
            teams: MatchTeams {
                red: TeamSummary {
                    has_won: red_won,
                    rounds_won: 13,
                },
                blue: TeamSummary {
                    has_won: !red_won,
                    rounds_won: 8,
                },
            },
        }
    }

    fn breakdown(made: i64, received: i64) -> Option<DamageStat> {
        Some(DamageStat::Breakdown(DamageBreakdown {
            made: Some(made),
            received: Some(received),
            damage: None,
        }))
    }

    #[test]
    fn empty_history_yields_no_data() {
        assert_eq!(aggregate(&[], &identity()), None);
    }

    #[test]
    fn history_without_the_player_yields_no_data() {
        let matches = vec![record(
            "e10a3",
            20,
            true,
            vec![player("SomeoneElse", "NA1", TeamSide::Red)],
        )];
        assert_eq!(aggregate(&matches, &identity()), None);
    }

    #[test]
    fn aggregates_the_documented_scenario() {
        // Match 1: on red, red won. 130 dealt / 100 received over 13 rounds.
        let mut first = player("Foo", "EUW", TeamSide::Red);
        first.stats.kills = 14;
        first.stats.deaths = 10;
        first.stats.assists = 4;
        first.stats.headshots = 10;
        first.stats.bodyshots = 5;
        first.stats.damage = breakdown(130, 0);
        first.damage_received = Some(100);

        // Match 2: on blue, blue lost. 150 dealt / 120 received over 12 rounds.
        let mut second = player("foo", "euw", TeamSide::Blue);
        second.stats.kills = 9;
        second.stats.deaths = 12;
        second.stats.assists = 2;
        second.stats.headshots = 8;
        second.stats.bodyshots = 7;
        second.stats.damage = breakdown(150, 0);
        second.damage_received = Some(120);

        let matches = vec![
            record(
                "e10a3",
                13,
                true,
                vec![first, player("Enemy", "TAG", TeamSide::Blue)],
            ),
            record(
                "e10a3",
                12,
                true,
                vec![second, player("Enemy", "TAG", TeamSide::Red)],
            ),
            record("e10a3", 19, false, vec![player("Enemy", "TAG", TeamSide::Red)]),
        ];

        let totals = aggregate(&matches, &identity()).unwrap();
        assert_eq!(totals.matches, 2);
        assert_eq!(totals.wins, 1);
        assert_eq!(totals.kills, 23);
        assert_eq!(totals.deaths, 22);
        assert_eq!(totals.rounds, 25);
        assert!((totals.winrate_pct() - 50.0).abs() < EPSILON);
        assert!((totals.adr() - 11.2).abs() < EPSILON);
        assert!((totals.damage_delta() - 2.4).abs() < EPSILON);
        assert!((totals.headshot_pct() - 60.0).abs() < EPSILON);
    }

    #[test]
    fn derived_metrics_floor_their_denominators() {
        let totals = AggregateStats {
            matches: 1,
            kills: 10,
            assists: 5,
            ..Default::default()
        };
        assert!((totals.kda() - 15.0).abs() < EPSILON);
        assert!((totals.adr() - 0.0).abs() < EPSILON);
        assert!((totals.headshot_pct() - 0.0).abs() < EPSILON);
    }

    #[test]
    fn derived_metrics_are_deterministic() {
        let totals = AggregateStats {
            matches: 3,
            wins: 2,
            kills: 55,
            deaths: 41,
            assists: 12,
            headshots: 30,
            bodyshots: 70,
            legshots: 4,
            damage_made: 9204,
            damage_received: 8130,
            rounds: 63,
        };
        assert_eq!(totals.kda().to_bits(), totals.kda().to_bits());
        assert_eq!(totals.adr().to_bits(), totals.adr().to_bits());
        assert_eq!(
            totals.damage_delta().to_bits(),
            totals.damage_delta().to_bits()
        );
    }

    #[test]
    fn damage_made_falls_back_through_sources() {
        let mut by_made = player("Foo", "EUW", TeamSide::Red);
        by_made.stats.damage = breakdown(130, 0);
        assert_eq!(resolve_damage(DAMAGE_MADE_SOURCES, &by_made), 130);

        let mut by_generic = player("Foo", "EUW", TeamSide::Red);
        by_generic.stats.damage = Some(DamageStat::Breakdown(DamageBreakdown {
            made: Some(0),
            damage: Some(512),
            received: None,
        }));
        assert_eq!(resolve_damage(DAMAGE_MADE_SOURCES, &by_generic), 512);

        let mut by_flat = player("Foo", "EUW", TeamSide::Red);
        by_flat.stats.damage = Some(DamageStat::Flat(321));
        assert_eq!(resolve_damage(DAMAGE_MADE_SOURCES, &by_flat), 321);

        let mut by_stats_field = player("Foo", "EUW", TeamSide::Red);
        by_stats_field.stats.damage_made = Some(777);
        assert_eq!(resolve_damage(DAMAGE_MADE_SOURCES, &by_stats_field), 777);

        let mut by_player_field = player("Foo", "EUW", TeamSide::Red);
        by_player_field.damage_made = Some(888);
        assert_eq!(resolve_damage(DAMAGE_MADE_SOURCES, &by_player_field), 888);

        let empty = player("Foo", "EUW", TeamSide::Red);
        assert_eq!(resolve_damage(DAMAGE_MADE_SOURCES, &empty), 0);
    }

    #[test]
    fn damage_received_prefers_top_level_field() {
        let mut both = player("Foo", "EUW", TeamSide::Red);
        both.damage_received = Some(200);
        both.stats.damage = breakdown(0, 999);
        assert_eq!(resolve_damage(DAMAGE_RECEIVED_SOURCES, &both), 200);

        let mut nested_only = player("Foo", "EUW", TeamSide::Red);
        nested_only.stats.damage = breakdown(0, 77);
        assert_eq!(resolve_damage(DAMAGE_RECEIVED_SOURCES, &nested_only), 77);
    }

    #[test]
    fn losses_and_missing_team_do_not_count_as_wins() {
        let mut on_blue = player("Foo", "EUW", TeamSide::Blue);
        on_blue.stats.kills = 1;
        let mut no_team = player("Foo", "EUW", TeamSide::Red);
        no_team.team = None;

        let matches = vec![
            record("e10a3", 20, true, vec![on_blue]),
            record("e10a3", 20, true, vec![no_team]),
        ];
        let totals = aggregate(&matches, &identity()).unwrap();
        assert_eq!(totals.matches, 2);
        assert_eq!(totals.wins, 0);
        assert!((totals.winrate_pct() - 0.0).abs() < EPSILON);
    }

    #[test]
    fn placement_ranks_by_combat_score() {
        let mut target = player("Foo", "EUW", TeamSide::Red);
        target.stats.score = 4200;
        let mut ahead = player("Smurf", "TAG", TeamSide::Blue);
        ahead.stats.score = 9000;
        let mut behind = player("Anchor", "TAG", TeamSide::Red);
        behind.stats.score = 1000;

        let record = record("e10a3", 20, true, vec![behind, target, ahead]);
        assert_eq!(lobby_placement(&record, &identity()), Some(2));

        let absent = PlayerIdentity {
            name: "Ghost".into(),
            tag: "TAG".into(),
            region: Region::Eu,
        };
        assert_eq!(lobby_placement(&record, &absent), None);
    }

    #[test]
    fn single_match_headshot_pct() {
        let stats = PlayerStats {
            headshots: 10,
            bodyshots: 8,
            legshots: 2,
            ..Default::default()
        };
        assert!((headshot_pct(&stats) - 50.0).abs() < EPSILON);
        assert!((headshot_pct(&PlayerStats::default()) - 0.0).abs() < EPSILON);
    }
}
