use chrono::{DateTime, Utc};

use crate::translator::normalize_team_name;

/// One side of a requested matchup: the name as the user typed it and the
/// search term actually sent to the provider.
#[derive(Debug, Clone)]
pub struct TeamQuery {
    pub raw_name: String,
    pub normalized_name: String,
}

impl TeamQuery {
    pub fn new(raw_name: &str) -> Self {
        Self {
            raw_name: raw_name.to_string(),
            normalized_name: normalize_team_name(raw_name),
        }
    }
}

/// The single upcoming fixture chosen for a matchup, plus its kickoff
/// rendered in the fixed UTC-3 reporting zone.
#[derive(Debug, Clone)]
pub struct ResolvedFixture {
    pub fixture_id: u64,
    pub league_name: String,
    pub kickoff_utc: DateTime<Utc>,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub game_date_local: String,
    pub game_time_local: String,
}

/// Decimal odds extracted for one fixture at one bookmaker. Every field is
/// optional: the provider omits whole bet groups freely, and absence must
/// stay visible to downstream consumers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OddsSet {
    pub home: Option<f64>,
    pub draw: Option<f64>,
    pub away: Option<f64>,
    pub under: Option<f64>,
    pub over: Option<f64>,
    pub btts_yes: Option<f64>,
    pub btts_no: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Green,
    Yellow,
    Red,
}

impl Classification {
    /// Label rendered on the card. Emoji included: the text is parsed
    /// downstream, so these strings are stable.
    pub fn label(self) -> &'static str {
        match self {
            Classification::Green => "🟢 Verde",
            Classification::Yellow => "🟡 Amarelo",
            Classification::Red => "🔴 Vermelho",
        }
    }
}

/// Evaluation of a single market. Percent fields are preformatted strings
/// because the card template prints them verbatim.
#[derive(Debug, Clone)]
pub struct MarketAnalysis {
    pub market_name: String,
    pub selection_name: String,
    pub odd: f64,
    pub probability_percent: String,
    pub ev_percent: String,
    pub classification: Classification,
    pub analysis_text: String,
}

/// Terminal success object of the pipeline, one per analyzed request.
#[derive(Debug, Clone)]
pub struct GameAnalysis {
    pub game_title: String,
    pub league_name: String,
    pub game_date_local: String,
    pub game_time_local: String,
    pub markets: Vec<MarketAnalysis>,
}
