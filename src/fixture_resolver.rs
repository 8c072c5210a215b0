use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::api_client::ApiClient;
use crate::error::AnalysisError;
use crate::types::{ResolvedFixture, TeamQuery};

const BRASILIA_OFFSET_SECS: i32 = 3 * 3600;

/// Common envelope around every provider endpoint; payload rows stay as raw
/// JSON because their shape varies per endpoint.
#[derive(Debug, Deserialize)]
struct ProviderEnvelope {
    #[serde(default)]
    response: Vec<Value>,
}

#[derive(Debug, Clone)]
pub struct TeamCandidate {
    pub id: u32,
    pub name: String,
}

/// One row of a team's season schedule, in provider-returned order.
#[derive(Debug, Clone)]
pub struct FixtureEntry {
    pub fixture_id: u64,
    pub kickoff_unix: i64,
    pub league_name: String,
    pub home_id: u32,
    pub away_id: u32,
}

/// Resolve a raw "home vs away" pair to the first upcoming fixture between
/// the two sides.
///
/// Only the home side's schedule is scanned, so a fixture listed by the
/// provider exclusively under the away side is missed. That matches the
/// upstream contract and must not be silently broadened.
pub fn resolve(
    client: &ApiClient,
    home_raw: &str,
    away_raw: &str,
) -> Result<ResolvedFixture, AnalysisError> {
    let home = TeamQuery::new(home_raw);
    let away = TeamQuery::new(away_raw);
    info!(
        home = %home.normalized_name,
        away = %away.normalized_name,
        "search terms after normalization"
    );

    let home_id = search_team_id(client, &home)?;
    let away_id = search_team_id(client, &away)?;

    let season = client.config().season_or_current();
    info!(team_id = home_id, season, "scanning season schedule for an upcoming fixture");
    let body = client.get_json(
        "/fixtures",
        &[("team", home_id.to_string()), ("season", season.to_string())],
    )?;
    let entries = parse_fixture_list_json(&body)?;

    let Some(entry) = select_future_fixture(&entries, away_id, Utc::now()) else {
        return Err(AnalysisError::FixtureNotFound {
            home: home.raw_name,
            away: away.raw_name,
        });
    };
    info!(fixture_id = entry.fixture_id, league = %entry.league_name, "fixture found");

    let kickoff_utc = Utc
        .timestamp_opt(entry.kickoff_unix, 0)
        .single()
        .ok_or_else(|| AnalysisError::ProviderData("invalid kickoff timestamp".to_string()))?;
    let (game_date_local, game_time_local) = localize_kickoff(kickoff_utc);

    Ok(ResolvedFixture {
        fixture_id: entry.fixture_id,
        league_name: entry.league_name.clone(),
        kickoff_utc,
        home_team_id: home_id,
        away_team_id: away_id,
        game_date_local,
        game_time_local,
    })
}

/// Search the provider for a team and take the first candidate's id. Several
/// same-name teams are not disambiguated further; first hit wins.
pub fn search_team_id(client: &ApiClient, query: &TeamQuery) -> Result<u32, AnalysisError> {
    let body = client.get_json("/teams", &[("search", query.normalized_name.clone())])?;
    let candidates = parse_team_search_json(&body)?;
    match candidates.first() {
        Some(candidate) => Ok(candidate.id),
        None => Err(AnalysisError::TeamNotFound {
            original: query.raw_name.clone(),
            searched: query.normalized_name.clone(),
        }),
    }
}

pub fn parse_team_search_json(raw: &str) -> Result<Vec<TeamCandidate>, AnalysisError> {
    let envelope: ProviderEnvelope = serde_json::from_str(raw)?;
    let mut out = Vec::new();
    for item in &envelope.response {
        if let Some(candidate) = parse_team_candidate(item) {
            out.push(candidate);
        }
    }
    Ok(out)
}

fn parse_team_candidate(v: &Value) -> Option<TeamCandidate> {
    let team = v.get("team")?;
    let id = team.get("id")?.as_u64()? as u32;
    let name = team
        .get("name")
        .and_then(|x| x.as_str())
        .unwrap_or_default()
        .to_string();
    Some(TeamCandidate { id, name })
}

pub fn parse_fixture_list_json(raw: &str) -> Result<Vec<FixtureEntry>, AnalysisError> {
    let envelope: ProviderEnvelope = serde_json::from_str(raw)?;
    let mut out = Vec::new();
    for item in &envelope.response {
        if let Some(entry) = parse_fixture_entry(item) {
            out.push(entry);
        }
    }
    Ok(out)
}

fn parse_fixture_entry(v: &Value) -> Option<FixtureEntry> {
    let fixture = v.get("fixture")?;
    let fixture_id = fixture.get("id")?.as_u64()?;
    let kickoff_unix = fixture.get("timestamp")?.as_i64()?;
    let league_name = v
        .get("league")
        .and_then(|l| l.get("name"))
        .and_then(|x| x.as_str())
        .unwrap_or_default()
        .to_string();
    let teams = v.get("teams")?;
    let home_id = teams.get("home")?.get("id")?.as_u64()? as u32;
    let away_id = teams.get("away")?.get("id")?.as_u64()? as u32;

    Some(FixtureEntry {
        fixture_id,
        kickoff_unix,
        league_name,
        home_id,
        away_id,
    })
}

/// First entry in provider order where the opponent plays (either slot) and
/// kickoff is strictly after `now`. No soonest/latest preference beyond list
/// order.
pub fn select_future_fixture(
    entries: &[FixtureEntry],
    opponent_id: u32,
    now: DateTime<Utc>,
) -> Option<&FixtureEntry> {
    entries.iter().find(|entry| {
        (entry.home_id == opponent_id || entry.away_id == opponent_id)
            && entry.kickoff_unix > now.timestamp()
    })
}

/// Calendar date and clock time in the fixed UTC-3 reporting zone.
pub fn localize_kickoff(kickoff_utc: DateTime<Utc>) -> (String, String) {
    let brasilia = FixedOffset::west_opt(BRASILIA_OFFSET_SECS).expect("UTC-3 is a valid offset");
    let local = kickoff_utc.with_timezone(&brasilia);
    (
        local.format("%d/%m/%Y").to_string(),
        local.format("%H:%M").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{
        FixtureEntry, localize_kickoff, parse_fixture_list_json, parse_team_search_json,
        select_future_fixture,
    };

    fn entry(fixture_id: u64, kickoff_unix: i64, home_id: u32, away_id: u32) -> FixtureEntry {
        FixtureEntry {
            fixture_id,
            kickoff_unix,
            league_name: "Serie A".to_string(),
            home_id,
            away_id,
        }
    }

    #[test]
    fn picks_first_future_fixture_in_list_order() {
        let now = Utc.timestamp_opt(1_000_000, 0).single().expect("valid now");
        let entries = vec![
            entry(1, 500_000, 10, 20),   // already played
            entry(2, 2_000_000, 30, 10), // future, wrong opponent
            entry(3, 3_000_000, 10, 20), // future, opponent away
            entry(4, 2_500_000, 20, 10), // future, opponent home, but later in list
        ];
        let picked = select_future_fixture(&entries, 20, now).expect("fixture");
        assert_eq!(picked.fixture_id, 3);
    }

    #[test]
    fn opponent_in_home_slot_matches() {
        let now = Utc.timestamp_opt(1_000_000, 0).single().expect("valid now");
        let entries = vec![entry(7, 2_000_000, 20, 10)];
        let picked = select_future_fixture(&entries, 20, now).expect("fixture");
        assert_eq!(picked.fixture_id, 7);
    }

    #[test]
    fn kickoff_exactly_now_is_not_future() {
        let now = Utc.timestamp_opt(2_000_000, 0).single().expect("valid now");
        let entries = vec![entry(9, 2_000_000, 10, 20)];
        assert!(select_future_fixture(&entries, 20, now).is_none());
    }

    #[test]
    fn no_match_yields_none() {
        let now = Utc.timestamp_opt(1_000_000, 0).single().expect("valid now");
        let entries = vec![entry(1, 500_000, 10, 20), entry(2, 2_000_000, 10, 30)];
        assert!(select_future_fixture(&entries, 20, now).is_none());
    }

    #[test]
    fn kickoff_localizes_to_utc_minus_three() {
        // 2030-01-01T00:00:00Z is 2029-12-31 21:00 in Brasilia.
        let kickoff = Utc
            .timestamp_opt(1_893_456_000, 0)
            .single()
            .expect("valid kickoff");
        let (date, time) = localize_kickoff(kickoff);
        assert_eq!(date, "31/12/2029");
        assert_eq!(time, "21:00");
    }

    #[test]
    fn team_search_rows_missing_ids_are_skipped() {
        let raw = r#"{"response":[{"team":{"name":"No Id"}},{"team":{"id":120,"name":"Botafogo"}}]}"#;
        let candidates = parse_team_search_json(raw).expect("parse");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id, 120);
        assert_eq!(candidates[0].name, "Botafogo");
    }

    #[test]
    fn empty_envelope_parses_to_no_candidates() {
        assert!(parse_team_search_json(r#"{"response":[]}"#)
            .expect("parse")
            .is_empty());
        assert!(parse_team_search_json("{}").expect("parse").is_empty());
    }

    #[test]
    fn malformed_body_is_a_data_error() {
        assert!(parse_fixture_list_json("not json").is_err());
    }
}
