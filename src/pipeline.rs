use tracing::{info, warn};

use crate::api_client::ApiClient;
use crate::error::AnalysisError;
use crate::types::GameAnalysis;
use crate::{ev, fixture_resolver, odds_extract, report};

const ANALYZE_MARKER: &str = "analise o jogo";
const TEAM_SEPARATOR: &str = " vs ";

/// The analysis engine. Owns the provider client; every `analyze` call is an
/// independent sequential unit of work with no shared mutable state, so one
/// instance can serve many callers.
pub struct Analyzer {
    client: ApiClient,
}

impl Analyzer {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Full pipeline: prompt -> fixture -> odds -> EV -> structured analysis.
    /// The first failing stage short-circuits the rest.
    pub fn analyze(&self, prompt: &str) -> Result<GameAnalysis, AnalysisError> {
        let (home_raw, away_raw) = parse_matchup(prompt)?;
        info!(home = %home_raw, away = %away_raw, "analysis requested");

        let fixture = fixture_resolver::resolve(&self.client, &home_raw, &away_raw)?;
        let odds = odds_extract::extract(&self.client, fixture.fixture_id)?;
        let market = ev::evaluate_under_market(&odds);

        Ok(GameAnalysis {
            game_title: format!("{} vs. {}", title_case(&home_raw), title_case(&away_raw)),
            league_name: fixture.league_name,
            game_date_local: fixture.game_date_local,
            game_time_local: fixture.game_time_local,
            markets: vec![market],
        })
    }

    /// Pipeline plus rendering; any failure degrades to its reply text.
    pub fn analyze_to_text(&self, prompt: &str) -> String {
        let result = self.analyze(prompt);
        if let Err(err) = &result {
            warn!(error = %err, "analysis failed");
        }
        report::format_report(&result)
    }
}

/// Extract `(home, away)` from a prompt containing the marker phrase
/// followed by `<TeamA> vs <TeamB>`. The whole prompt is lowered before
/// splitting, so team names reach the resolver lowercased. No network
/// activity on any parse path.
pub fn parse_matchup(prompt: &str) -> Result<(String, String), AnalysisError> {
    let lowered = prompt.to_lowercase();
    let Some(idx) = lowered.find(ANALYZE_MARKER) else {
        return Err(AnalysisError::InputFormat);
    };
    let teams_part = lowered[idx + ANALYZE_MARKER.len()..].trim();

    let mut parts = teams_part.split(TEAM_SEPARATOR);
    let home = parts.next().unwrap_or("").trim();
    let away = parts.next().unwrap_or("").trim();
    if home.is_empty() || away.is_empty() {
        return Err(AnalysisError::InputFormat);
    }
    Ok((home.to_string(), away.to_string()))
}

/// Uppercase the first letter of each alphabetic run, lowercase the rest.
/// Matches how the card titles team names the user typed in any casing.
fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut at_word_start = true;
    for ch in raw.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{Analyzer, parse_matchup, title_case};
    use crate::api_client::ApiClient;
    use crate::config::ProviderConfig;
    use crate::error::AnalysisError;

    #[test]
    fn malformed_prompt_fails_before_any_network_call() {
        // The client points at an unroutable host; the pipeline must reject
        // the prompt without ever reaching it.
        let mut config = ProviderConfig::with_key("test-key");
        config.base_url = "http://127.0.0.1:1".to_string();
        let analyzer = Analyzer::new(ApiClient::new(config).expect("client"));

        let err = analyzer.analyze("qual o placar do jogo?").unwrap_err();
        assert!(matches!(err, AnalysisError::InputFormat));
        assert_eq!(
            analyzer.analyze_to_text("qual o placar do jogo?"),
            "Formato de times inválido. Use: 'Time A vs Time B'"
        );
    }

    #[test]
    fn parses_marker_and_pair() {
        let (home, away) =
            parse_matchup("@bot Analise o jogo Brasil vs Argentina").expect("matchup");
        assert_eq!(home, "brasil");
        assert_eq!(away, "argentina");
    }

    #[test]
    fn extra_vs_segments_keep_second_team_only() {
        let (home, away) = parse_matchup("analise o jogo a vs b vs c").expect("matchup");
        assert_eq!(home, "a");
        assert_eq!(away, "b");
    }

    #[test]
    fn missing_marker_is_a_format_error() {
        let err = parse_matchup("qual o placar de Brasil vs Argentina?").unwrap_err();
        assert!(matches!(err, AnalysisError::InputFormat));
    }

    #[test]
    fn missing_separator_is_a_format_error() {
        let err = parse_matchup("analise o jogo Brasil x Argentina").unwrap_err();
        assert!(matches!(err, AnalysisError::InputFormat));
    }

    #[test]
    fn empty_sides_are_a_format_error() {
        assert!(parse_matchup("analise o jogo vs Argentina").is_err());
        assert!(parse_matchup("analise o jogo Brasil vs ").is_err());
    }

    #[test]
    fn titles_accented_multiword_names() {
        assert_eq!(title_case("atlético mineiro"), "Atlético Mineiro");
        assert_eq!(title_case("red bull bragantino"), "Red Bull Bragantino");
        assert_eq!(title_case("brasil"), "Brasil");
    }
}
