use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Colloquial / pt-BR team names mapped to the provider's canonical search
/// terms. Misses fall through to the raw name, lowercased, so an unmapped
/// team still produces a usable search.
const TEAM_NAME_TABLE: &[(&str, &str)] = &[
    ("alemanha", "germany"),
    ("inglaterra", "england"),
    ("frança", "france"),
    ("espanha", "spain"),
    ("itália", "italy"),
    ("portugal", "portugal"),
    ("holanda", "netherlands"),
    ("brasil", "brazil"),
    ("argentina", "argentina"),
    ("bélgica", "belgium"),
    ("croácia", "croatia"),
    ("uruguai", "uruguay"),
    ("hungria", "hungary"),
    ("irlanda", "ireland"),
    ("atlético mineiro", "atletico-mg"),
    ("atletico mineiro", "atletico-mg"),
    ("red bull bragantino", "bragantino"),
    ("bragantino", "bragantino"),
    ("botafogo", "botafogo-rj"),
    ("sport recife", "sport-recife"),
];

static TEAM_NAME_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| TEAM_NAME_TABLE.iter().copied().collect());

pub fn normalize_team_name(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    match TEAM_NAME_MAP.get(lowered.as_str()) {
        Some(mapped) => (*mapped).to_string(),
        None => lowered,
    }
}
