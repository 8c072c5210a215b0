use thiserror::Error;

/// Analysis failures, one variant per pipeline stage that can fail. The
/// `Display` output is the exact reply text shown to the requester, so the
/// wording (pt-BR, punctuation included) is load-bearing.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Formato de times inválido. Use: 'Time A vs Time B'")]
    InputFormat,

    #[error("Time '{original}' não encontrado na API (buscou por '{searched}').")]
    TeamNotFound { original: String, searched: String },

    #[error("Nenhum jogo futuro encontrado entre {home} e {away}.")]
    FixtureNotFound { home: String, away: String },

    /// Network-level failure. The detail is kept for logs only and never
    /// reaches the rendered reply.
    #[error("Erro de comunicação com a API de dados.")]
    ProviderCommunication(String),

    #[error("Erro interno ao processar dados do jogo: {0}")]
    ProviderData(String),

    #[error("Odds não disponíveis para este jogo.")]
    OddsUnavailable,
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        AnalysisError::ProviderCommunication(err.to_string())
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::ProviderData(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::AnalysisError;

    #[test]
    fn reply_text_matches_card_contract() {
        assert_eq!(
            AnalysisError::InputFormat.to_string(),
            "Formato de times inválido. Use: 'Time A vs Time B'"
        );
        assert_eq!(
            AnalysisError::OddsUnavailable.to_string(),
            "Odds não disponíveis para este jogo."
        );
        assert_eq!(
            AnalysisError::ProviderCommunication("timeout".to_string()).to_string(),
            "Erro de comunicação com a API de dados."
        );
    }

    #[test]
    fn not_found_messages_carry_names() {
        let err = AnalysisError::TeamNotFound {
            original: "Botafogo".to_string(),
            searched: "botafogo-rj".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Time 'Botafogo' não encontrado na API (buscou por 'botafogo-rj')."
        );

        let err = AnalysisError::FixtureNotFound {
            home: "brasil".to_string(),
            away: "argentina".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Nenhum jogo futuro encontrado entre brasil e argentina."
        );
    }
}
