//! The state and representative dropdowns.

use repmap_core::StateInfo;
use serde::Serialize;

pub const PLACEHOLDER_STATE_FIRST: &str = "Please select a state first";
pub const PLACEHOLDER_SELECT_REP: &str = "Select your representative";
pub const PLACEHOLDER_NO_REPS: &str = "No representatives available";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateOption {
    /// Two-letter code, submitted as the form value.
    pub value: &'static str,
    /// Capitalized full name shown to the user.
    pub text: String,
}

/// One option per state, sorted by the state's key.
pub fn state_options() -> Vec<StateOption> {
    StateInfo::sorted()
        .into_iter()
        .map(|state| StateOption {
            value: state.abbr,
            text: state.display_name(),
        })
        .collect()
}

/// State dropdown. Stays empty until the catalog has loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StateDropdown {
    pub options: Vec<StateOption>,
    pub selected: Option<String>,
}

impl StateDropdown {
    pub fn populate(&mut self) {
        self.options = state_options();
    }

    pub fn is_populated(&self) -> bool {
        !self.options.is_empty()
    }

    /// Select by code. Returns `false` if the code has no option.
    pub fn select(&mut self, abbr: &str) -> bool {
        if !self.options.iter().any(|opt| opt.value == abbr) {
            return false;
        }
        self.selected = Some(abbr.to_string());
        true
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn value(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}

/// Representative dropdown, dependent on the selected state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepDropdown {
    /// Leading disabled option.
    pub placeholder: String,
    pub options: Vec<String>,
    pub selected: Option<String>,
    pub enabled: bool,
}

impl Default for RepDropdown {
    fn default() -> Self {
        Self {
            placeholder: PLACEHOLDER_STATE_FIRST.to_string(),
            options: Vec::new(),
            selected: None,
            enabled: false,
        }
    }
}

impl RepDropdown {
    /// Replace the options with a state's representatives.
    pub fn populate(&mut self, reps: &[String]) {
        self.selected = None;
        self.options = reps.to_vec();
        if reps.is_empty() {
            self.placeholder = PLACEHOLDER_NO_REPS.to_string();
            self.enabled = false;
        } else {
            self.placeholder = PLACEHOLDER_SELECT_REP.to_string();
            self.enabled = true;
        }
    }

    /// Back to the initial disabled placeholder.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.options.iter().any(|opt| opt == name)
    }

    /// Set the value. Not checked against the options.
    pub fn set_value(&mut self, name: impl Into<String>) {
        self.selected = Some(name.into());
    }

    /// Add an option at the end and select it.
    pub fn append_and_select(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.options.push(name.clone());
        self.selected = Some(name);
        self.enabled = true;
    }

    pub fn value(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}
