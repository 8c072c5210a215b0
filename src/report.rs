use crate::error::AnalysisError;
use crate::types::GameAnalysis;

const MARKET_SEPARATOR: &str = "\n\n---\n\n";

/// Render the analysis card. Field order, labels and emoji are stable
/// output: downstream consumers parse this text byte-for-byte. Errors render
/// as their bare reply message.
pub fn format_report(result: &Result<GameAnalysis, AnalysisError>) -> String {
    let analysis = match result {
        Ok(analysis) => analysis,
        Err(err) => return err.to_string(),
    };

    let header = format!("{} – {}", analysis.game_time_local, analysis.league_name);
    let cards: Vec<String> = analysis
        .markets
        .iter()
        .map(|market| {
            format!(
                "⚽ Jogo: {}\n\
                 📅 Data: {} – {} (Horário de Brasília)\n\
                 🏷️ Mercado: {}\n\
                 💎 Seleção: {}\n\
                 💰 Odd: {:.2} | 📈 Probabilidade Real: {} | 💹 Valor Esperado (EV): {}\n\
                 🔰 Classificação Arsenal: {}\n\
                 📋 Análise: {}",
                analysis.game_title,
                analysis.game_date_local,
                analysis.game_time_local,
                market.market_name,
                market.selection_name,
                market.odd,
                market.probability_percent,
                market.ev_percent,
                market.classification.label(),
                market.analysis_text,
            )
        })
        .collect();

    format!("{header}\n\n{}", cards.join(MARKET_SEPARATOR))
}
