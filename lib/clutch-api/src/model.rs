use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Shard a player's account lives on. Henrik routes every region-scoped
/// endpoint through one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Eu,
    Na,
    Ap,
    Kr,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Eu => "eu",
            Region::Na => "na",
            Region::Ap => "ap",
            Region::Kr => "kr",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown region {0:?}, expected one of: eu, na, ap, kr")]
pub struct ParseRegionError(String);

impl FromStr for Region {
    type Err = ParseRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "eu" => Ok(Region::Eu),
            "na" => Ok(Region::Na),
            "ap" => Ok(Region::Ap),
            "kr" => Ok(Region::Kr),
            _ => Err(ParseRegionError(s.to_string())),
        }
    }
}

/// A Riot account as targeted by commands: name, tag and the shard to query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerIdentity {
    pub name: String,
    pub tag: String,
    pub region: Region,
}

impl PlayerIdentity {
    /// Case-insensitive match on both name and tag, the way the upstream
    /// match payloads spell them.
    pub fn matches(&self, name: &str, tag: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
            && self.tag.to_lowercase() == tag.to_lowercase()
    }
}

impl fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.name, self.tag)
    }
}

/// `v1/account` payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub card: Option<PlayerCard>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerCard {
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
    #[serde(default)]
    pub wide: Option<String>,
}

/// `v2/mmr` payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MmrData {
    #[serde(default)]
    pub current_data: CurrentMmr,
    #[serde(default)]
    pub by_season: HashMap<String, SeasonMmr>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentMmr {
    #[serde(default)]
    pub currenttier: i64,
    #[serde(default)]
    pub currenttierpatched: Option<String>,
    #[serde(default)]
    pub ranking_in_tier: i64,
    #[serde(default)]
    pub mmr_change_to_last_game: i64,
    #[serde(default)]
    pub elo: i64,
    #[serde(default)]
    pub images: Option<RankImages>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankImages {
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

/// One entry of the `by_season` map. Seasons the player skipped come back as
/// an error object, which deserializes to the zeroed default here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeasonMmr {
    #[serde(default)]
    pub final_rank: i64,
    #[serde(default)]
    pub final_rank_patched: Option<String>,
    #[serde(default)]
    pub wins: i64,
    #[serde(default)]
    pub number_of_games: i64,
}

/// One played game from `v3/matches`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchRecord {
    pub metadata: MatchMetadata,
    #[serde(default)]
    pub players: MatchPlayers,
    #[serde(default)]
    pub teams: MatchTeams,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchMetadata {
    #[serde(default, alias = "matchid")]
    pub match_id: Option<String>,
    #[serde(default)]
    pub map: Option<String>,
    #[serde(default)]
    pub rounds_played: i64,
    #[serde(default)]
    pub season: Season,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub game_start: Option<i64>,
    #[serde(default)]
    pub game_start_patched: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Season {
    #[serde(default)]
    pub short: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchPlayers {
    #[serde(default)]
    pub all_players: Vec<MatchPlayer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchTeams {
    #[serde(default)]
    pub red: TeamSummary,
    #[serde(default)]
    pub blue: TeamSummary,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamSummary {
    #[serde(default)]
    pub has_won: bool,
    #[serde(default)]
    pub rounds_won: i64,
}

/// One player's sub-record within a match.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchPlayer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default, deserialize_with = "team_side")]
    pub team: Option<TeamSide>,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub stats: PlayerStats,
    #[serde(default)]
    pub damage_made: Option<i64>,
    #[serde(default)]
    pub damage_received: Option<i64>,
    #[serde(default)]
    pub assets: Option<PlayerAssets>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamSide {
    Red,
    Blue,
}

impl TeamSide {
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("red") {
            Some(TeamSide::Red)
        } else if name.eq_ignore_ascii_case("blue") {
            Some(TeamSide::Blue)
        } else {
            None
        }
    }
}

/// Non-competitive modes report sides this model has no use for, so anything
/// other than red/blue collapses to `None` instead of failing the record.
fn team_side<'de, D>(deserializer: D) -> Result<Option<TeamSide>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(TeamSide::from_name))
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerStats {
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub kills: i64,
    #[serde(default)]
    pub deaths: i64,
    #[serde(default)]
    pub assists: i64,
    #[serde(default)]
    pub headshots: i64,
    #[serde(default)]
    pub bodyshots: i64,
    #[serde(default)]
    pub legshots: i64,
    #[serde(default)]
    pub damage: Option<DamageStat>,
    #[serde(default)]
    pub damage_made: Option<i64>,
}

/// The damage stat changed shape across upstream API versions: sometimes a
/// breakdown object, sometimes a bare total.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DamageStat {
    Breakdown(DamageBreakdown),
    Flat(i64),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DamageBreakdown {
    #[serde(default)]
    pub made: Option<i64>,
    #[serde(default)]
    pub damage: Option<i64>,
    #[serde(default)]
    pub received: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerAssets {
    #[serde(default)]
    pub agent: AgentAssets,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentAssets {
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub full: Option<String>,
}

/// One entry of `v1/mmr-history`: the RR swing a single match caused.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MmrHistoryEntry {
    #[serde(default)]
    pub match_id: Option<String>,
    #[serde(default)]
    pub mmr_change_to_last_game: i64,
}
