//! Static table of U.S. states.

use serde::Serialize;

/// One U.S. state: its two-letter code and its lowercase hyphenated key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StateInfo {
    /// Two-letter postal code, e.g. `CA`.
    pub abbr: &'static str,
    /// Lowercase, hyphenated full name, e.g. `new-hampshire`.
    pub key: &'static str,
}

/// All 50 states, ordered by key.
pub const STATES: [StateInfo; 50] = [
    StateInfo { abbr: "AL", key: "alabama" },
    StateInfo { abbr: "AK", key: "alaska" },
    StateInfo { abbr: "AZ", key: "arizona" },
    StateInfo { abbr: "AR", key: "arkansas" },
    StateInfo { abbr: "CA", key: "california" },
    StateInfo { abbr: "CO", key: "colorado" },
    StateInfo { abbr: "CT", key: "connecticut" },
    StateInfo { abbr: "DE", key: "delaware" },
    StateInfo { abbr: "FL", key: "florida" },
    StateInfo { abbr: "GA", key: "georgia" },
    StateInfo { abbr: "HI", key: "hawaii" },
    StateInfo { abbr: "ID", key: "idaho" },
    StateInfo { abbr: "IL", key: "illinois" },
    StateInfo { abbr: "IN", key: "indiana" },
    StateInfo { abbr: "IA", key: "iowa" },
    StateInfo { abbr: "KS", key: "kansas" },
    StateInfo { abbr: "KY", key: "kentucky" },
    StateInfo { abbr: "LA", key: "louisiana" },
    StateInfo { abbr: "ME", key: "maine" },
    StateInfo { abbr: "MD", key: "maryland" },
    StateInfo { abbr: "MA", key: "massachusetts" },
    StateInfo { abbr: "MI", key: "michigan" },
    StateInfo { abbr: "MN", key: "minnesota" },
    StateInfo { abbr: "MS", key: "mississippi" },
    StateInfo { abbr: "MO", key: "missouri" },
    StateInfo { abbr: "MT", key: "montana" },
    StateInfo { abbr: "NE", key: "nebraska" },
    StateInfo { abbr: "NV", key: "nevada" },
    StateInfo { abbr: "NH", key: "new-hampshire" },
    StateInfo { abbr: "NJ", key: "new-jersey" },
    StateInfo { abbr: "NM", key: "new-mexico" },
    StateInfo { abbr: "NY", key: "new-york" },
    StateInfo { abbr: "NC", key: "north-carolina" },
    StateInfo { abbr: "ND", key: "north-dakota" },
    StateInfo { abbr: "OH", key: "ohio" },
    StateInfo { abbr: "OK", key: "oklahoma" },
    StateInfo { abbr: "OR", key: "oregon" },
    StateInfo { abbr: "PA", key: "pennsylvania" },
    StateInfo { abbr: "RI", key: "rhode-island" },
    StateInfo { abbr: "SC", key: "south-carolina" },
    StateInfo { abbr: "SD", key: "south-dakota" },
    StateInfo { abbr: "TN", key: "tennessee" },
    StateInfo { abbr: "TX", key: "texas" },
    StateInfo { abbr: "UT", key: "utah" },
    StateInfo { abbr: "VT", key: "vermont" },
    StateInfo { abbr: "VA", key: "virginia" },
    StateInfo { abbr: "WA", key: "washington" },
    StateInfo { abbr: "WV", key: "west-virginia" },
    StateInfo { abbr: "WI", key: "wisconsin" },
    StateInfo { abbr: "WY", key: "wyoming" },
];

/// Territories and the federal district. Only used when tagging map files;
/// they have no dropdown entry.
pub const TERRITORIES: [(&str, &str); 6] = [
    ("DC", "District of Columbia"),
    ("PR", "Puerto Rico"),
    ("GU", "Guam"),
    ("VI", "U.S. Virgin Islands"),
    ("MP", "Northern Mariana Islands"),
    ("AS", "American Samoa"),
];

impl StateInfo {
    /// Look up a state by its two-letter code.
    pub fn by_abbr(abbr: &str) -> Option<&'static StateInfo> {
        STATES.iter().find(|s| s.abbr == abbr)
    }

    /// Look up a state by its hyphenated key.
    pub fn by_key(key: &str) -> Option<&'static StateInfo> {
        STATES.iter().find(|s| s.key == key)
    }

    /// Resolve a free-form state name (`New York`, `new-york`, `NEW york`).
    pub fn resolve(name: &str) -> Option<&'static StateInfo> {
        Self::by_key(&normalize_state_name(name))
    }

    /// All states sorted by key.
    pub fn sorted() -> Vec<&'static StateInfo> {
        let mut states: Vec<_> = STATES.iter().collect();
        states.sort_by_key(|s| s.key);
        states
    }

    /// Human-readable name, e.g. `New Hampshire`.
    pub fn display_name(&self) -> String {
        capitalize_words(&self.key.replace('-', " "))
    }

    /// File name of the state's district map.
    pub fn svg_file_name(&self) -> String {
        format!("{}.svg", self.key)
    }
}

/// Lowercase a state name and collapse whitespace runs into single hyphens.
pub fn normalize_state_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Uppercase the first character of every word.
pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_boundary = true;
    for ch in text.chars() {
        let is_word = ch.is_alphanumeric() || ch == '_';
        if is_word && at_boundary {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_boundary = !is_word;
    }
    out
}

/// Proper name for a state or territory code, e.g. `NH` -> `New Hampshire`.
pub fn proper_name_for_code(code: &str) -> Option<String> {
    if let Some(state) = StateInfo::by_abbr(code) {
        return Some(state.display_name());
    }
    TERRITORIES
        .iter()
        .find(|(abbr, _)| *abbr == code)
        .map(|(_, name)| name.to_string())
}
