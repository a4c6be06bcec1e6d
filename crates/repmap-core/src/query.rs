//! Preselection from page query parameters (`?state=...&rep=...`).

use serde::{Deserialize, Serialize};

use crate::states::StateInfo;

/// State and representative requested through the page URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preselection {
    /// Full state name as given (any case, spaces or hyphens).
    pub state: Option<String>,
    /// Representative display name.
    pub rep: Option<String>,
}

impl Preselection {
    /// Parse a query string, with or without the leading `?`.
    ///
    /// Empty values count as absent; the first occurrence of a key wins.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut selection = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "state" if selection.state.is_none() => {
                    selection.state = Some(value.into_owned());
                }
                "rep" if selection.rep.is_none() => {
                    selection.rep = Some(value.into_owned());
                }
                _ => {}
            }
        }
        selection
    }

    /// The requested state, if one was given and it is known.
    pub fn resolve_state(&self) -> Option<&'static StateInfo> {
        self.state.as_deref().and_then(StateInfo::resolve)
    }
}
