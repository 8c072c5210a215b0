use crate::types::{Classification, MarketAnalysis, OddsSet};

const UNDER_MARKET_NAME: &str = "Total de Gols (Over/Under 2.5)";
const UNDER_SELECTION_NAME: &str = "Abaixo de 2.5 Gols";

/// Odd substituted in the probability term when the under price is missing,
/// pushing the implied probability toward zero. The displayed odd stays 0 in
/// that case; the mismatch is inherited behavior and kept for output parity.
const MISSING_ODD_PROB_SENTINEL: f64 = 99.0;

/// Flat markup over the naive implied probability. A heuristic edge, not a
/// calibrated model.
const EDGE_MARKUP: f64 = 0.10;

const GREEN_EV_THRESHOLD: f64 = 0.10;

/// Evaluate the "Under 2.5 goals" market. Pure transform, no failure mode:
/// missing odds degrade to a deeply negative EV instead of an error.
pub fn evaluate_under_market(odds: &OddsSet) -> MarketAnalysis {
    let prob_odd = odds.under.unwrap_or(MISSING_ODD_PROB_SENTINEL);
    let display_odd = odds.under.unwrap_or(0.0);

    let real_probability = 1.0 / prob_odd + EDGE_MARKUP;
    let ev = display_odd * real_probability - 1.0;
    let classification = classify(ev);

    let probability_percent = format!("{:.1}%", real_probability * 100.0);
    let ev_percent = format!("{:+.1}%", ev * 100.0);
    let cited_odd = match odds.under {
        Some(odd) => format!("{odd:.2}"),
        None => "N/A".to_string(),
    };
    let analysis_text = format!(
        "Análise baseada em odds reais da API. A odd de {cited_odd} para 'Abaixo de 2.5' resulta em um EV de {ev_percent}."
    );

    MarketAnalysis {
        market_name: UNDER_MARKET_NAME.to_string(),
        selection_name: UNDER_SELECTION_NAME.to_string(),
        odd: display_odd,
        probability_percent,
        ev_percent,
        classification,
        analysis_text,
    }
}

/// Tier thresholds, first match wins.
pub fn classify(ev: f64) -> Classification {
    if ev >= GREEN_EV_THRESHOLD {
        Classification::Green
    } else if ev >= 0.0 {
        Classification::Yellow
    } else {
        Classification::Red
    }
}
