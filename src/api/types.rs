use crate::cli::types::{LeagueId, PlayerId, StatId};
use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// A scoring-rule mapping for one league, keyed by stat id.
pub type RuleSet = BTreeMap<StatId, ScoringRule>;

fn ser_stat_key_map_f64<S>(map: &BTreeMap<StatId, f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(map.iter().map(|(k, v)| (k.to_string(), v)))
}

fn de_stat_key_map_f64<'de, D>(deserializer: D) -> Result<BTreeMap<StatId, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: BTreeMap<String, f64> = Deserialize::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(k, v)| {
            k.parse::<u16>()
                .map(|kk| (StatId::new(kk), v))
                .map_err(D::Error::custom)
        })
        .collect()
}

fn de_stat_key_map_rule<'de, D>(deserializer: D) -> Result<RuleSet, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: BTreeMap<String, ScoringRule> = Deserialize::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(k, v)| {
            k.parse::<u16>()
                .map(|kk| (StatId::new(kk), v))
                .map_err(D::Error::custom)
        })
        .collect()
}

/// Numeric rule fields come back as either JSON numbers or quoted strings
/// ("0.1"), depending on which backend wrote the document.
fn de_flex_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(f64),
        Str(String),
    }

    match NumOrStr::deserialize(deserializer)? {
        NumOrStr::Num(v) => Ok(v),
        NumOrStr::Str(s) => s.trim().parse::<f64>().map_err(D::Error::custom),
    }
}

/// A bonus threshold: every whole multiple of `target` reached by the raw
/// value awards `points` once, uncapped.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Bonus {
    #[serde(deserialize_with = "de_flex_f64")]
    pub target: f64,
    #[serde(deserialize_with = "de_flex_f64")]
    pub points: f64,
}

/// Wire wrapper around a bonus threshold; the backend nests each entry
/// under a `bonus` key.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BonusSlot {
    pub bonus: Bonus,
}

/// Scoring rule for one stat: a linear per-unit rate plus bonus thresholds.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScoringRule {
    #[serde(deserialize_with = "de_flex_f64")]
    pub points: f64,
    #[serde(default)]
    pub bonuses: Vec<BonusSlot>,
}

/// Player document from the stats API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub position: String,
    /// Raw stat values keyed by stat id (string keys on the wire).
    #[serde(
        rename = "rawStats",
        deserialize_with = "de_stat_key_map_f64",
        serialize_with = "ser_stat_key_map_f64",
        default
    )]
    pub raw_stats: BTreeMap<StatId, f64>,
    /// Fantasy total precomputed by the backend, when present. Recomputed
    /// locally against the active league's rules before display.
    #[serde(rename = "fantasyPoints", default)]
    pub fantasy_points: Option<f64>,
    #[serde(rename = "overallRank", default)]
    pub overall_rank: Option<u32>,
    #[serde(rename = "positionRank", default)]
    pub position_rank: Option<u32>,
}

impl Player {
    /// Raw value for a stat, 0 when the player has no entry for it.
    pub fn stat(&self, id: StatId) -> f64 {
        self.raw_stats.get(&id).copied().unwrap_or(0.0)
    }
}

/// Envelope for the players endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayersResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<Player>,
}

/// A league the user belongs to.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct League {
    #[serde(rename = "leagueId")]
    pub id: LeagueId,
    pub name: String,
}

/// Scoring rules for every league, keyed by league id.
pub type LeagueRules = BTreeMap<LeagueId, RuleSet>;

fn de_league_rules<'de, D>(deserializer: D) -> Result<LeagueRules, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrap(#[serde(deserialize_with = "de_stat_key_map_rule")] RuleSet);

    let raw: BTreeMap<String, Wrap> = Deserialize::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(k, v)| (LeagueId::new(k), v.0))
        .collect())
}

/// Wire shape of the scoring-rules endpoint: `{ leagueId: { statId: rule } }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringRulesDoc(
    #[serde(deserialize_with = "de_league_rules", default)] pub LeagueRules,
);

/// League/rules discovery document.
///
/// `needs_import` signals a backend onboarding flow that this tool only
/// reports; acting on it happens elsewhere.
#[derive(Debug, Clone, Deserialize)]
pub struct LeagueDiscovery {
    #[serde(default)]
    pub leagues: Vec<League>,
    #[serde(rename = "scoringRules", deserialize_with = "de_league_rules", default)]
    pub scoring_rules: LeagueRules,
    #[serde(rename = "defaultLeagueId", default)]
    pub default_league_id: Option<LeagueId>,
    #[serde(rename = "needsImport", default)]
    pub needs_import: bool,
}
