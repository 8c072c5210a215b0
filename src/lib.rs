//! Fixture-resolution and odds-evaluation pipeline behind the palpite bot.
//!
//! Transport, liveness endpoints and supervision live with the caller; this
//! crate turns a free-text "analise o jogo A vs B" request into a rendered
//! EV card (or a reply-ready error message).

pub mod api_client;
pub mod config;
pub mod error;
pub mod ev;
pub mod fixture_resolver;
pub mod odds_extract;
pub mod pipeline;
pub mod report;
pub mod translator;
pub mod types;
