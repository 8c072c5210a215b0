use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::api_client::ApiClient;
use crate::error::AnalysisError;
use crate::types::OddsSet;

const MATCH_WINNER_BET: &str = "Match Winner";
const GOALS_OVER_UNDER_BET: &str = "Goals Over/Under";
const BTTS_BET: &str = "Both Teams To Score";

#[derive(Debug, Deserialize)]
struct OddsEnvelope {
    #[serde(default)]
    response: Vec<FixtureOdds>,
}

#[derive(Debug, Deserialize)]
struct FixtureOdds {
    #[serde(default)]
    bookmakers: Vec<BookmakerOdds>,
}

#[derive(Debug, Deserialize)]
struct BookmakerOdds {
    #[serde(default)]
    id: Option<u32>,
    #[serde(default)]
    bets: Vec<BetGroup>,
}

#[derive(Debug, Deserialize)]
struct BetGroup {
    #[serde(default)]
    name: String,
    #[serde(default)]
    values: Vec<BetValue>,
}

/// The provider encodes odds as strings ("1.85") but numbers have been
/// observed too; both fields stay raw JSON and are decoded defensively.
#[derive(Debug, Deserialize)]
struct BetValue {
    #[serde(default)]
    value: Value,
    #[serde(default)]
    odd: Value,
}

/// Fetch odds for a fixture at the configured bookmaker and extract the
/// known markets.
pub fn extract(client: &ApiClient, fixture_id: u64) -> Result<OddsSet, AnalysisError> {
    let bookmaker_id = client.config().bookmaker_id;
    let body = client.get_json(
        "/odds",
        &[
            ("fixture", fixture_id.to_string()),
            ("bookmaker", bookmaker_id.to_string()),
        ],
    )?;
    let odds = parse_odds_json(&body, bookmaker_id)?;
    odds.ok_or(AnalysisError::OddsUnavailable)
}

/// Extract the known bet groups by name, matching outcomes by their value
/// label rather than by position. Returns `Ok(None)` when the provider has
/// no odds rows for the fixture/bookmaker pair; unknown groups and missing
/// labels just leave the corresponding fields unset.
pub fn parse_odds_json(raw: &str, bookmaker_id: u32) -> Result<Option<OddsSet>, AnalysisError> {
    let envelope: OddsEnvelope = serde_json::from_str(raw)?;
    let Some(first) = envelope.response.first() else {
        return Ok(None);
    };
    let Some(bookmaker) = first
        .bookmakers
        .iter()
        .find(|b| b.id.map_or(true, |id| id == bookmaker_id))
    else {
        return Ok(None);
    };

    let mut out = OddsSet::default();
    for bet in &bookmaker.bets {
        match bet.name.as_str() {
            MATCH_WINNER_BET => {
                out.home = value_odd(&bet.values, "Home");
                out.draw = value_odd(&bet.values, "Draw");
                out.away = value_odd(&bet.values, "Away");
            }
            GOALS_OVER_UNDER_BET => {
                out.under = value_odd(&bet.values, "Under 2.5");
                out.over = value_odd(&bet.values, "Over 2.5");
            }
            BTTS_BET => {
                out.btts_yes = value_odd(&bet.values, "Yes");
                out.btts_no = value_odd(&bet.values, "No");
            }
            other => debug!(bet = other, "ignoring unrecognized bet group"),
        }
    }
    Ok(Some(out))
}

fn value_odd(values: &[BetValue], label: &str) -> Option<f64> {
    values
        .iter()
        .find(|v| v.value.as_str().map(str::trim) == Some(label))
        .and_then(|v| odd_to_f64(&v.odd))
}

fn odd_to_f64(odd: &Value) -> Option<f64> {
    match odd {
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}
