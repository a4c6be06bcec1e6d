//! The widget state and its reducer.
//!
//! All interaction goes through [`WidgetState::update`]: one event in, the
//! resulting effects out. The reducer never blocks and never performs I/O, so
//! the same code drives the tokio runtime, the wasm bindings and the tests.

use std::sync::Arc;

use repmap_core::{Catalog, Preselection, SignupRecord, StateInfo};
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::event::{Effect, Event};
use crate::form::{failure_text, SignupForm, INVALID_EMAIL, SUBMITTING, SUBSCRIPTION_SUCCESSFUL};
use crate::map_view::{
    ClickOutcome, MapView, RepMatch, INVALID_STATE_SELECTED, MAP_UNAVAILABLE, NO_STATE_SELECTED,
};
use crate::preselect::{plan, Plan, TITLE_INVALID_STATE, TITLE_SELECT_STATE};
use crate::selector::{RepDropdown, StateDropdown};
use crate::status::StatusMessage;
use crate::zoom::ZoomPan;

pub const DATA_LOAD_FAILED: &str = "Error loading data. Please try again later.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataStatus {
    #[default]
    Pending,
    Ready,
    Failed,
}

/// Everything the page renders.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WidgetState {
    pub data: DataStatus,
    pub title: String,
    pub status: StatusMessage,
    pub states: StateDropdown,
    pub reps: RepDropdown,
    pub map: MapView,
    pub zoom: ZoomPan,
    pub form: SignupForm,
    #[serde(skip)]
    catalog: Option<Arc<Catalog>>,
    /// URL preselection waiting for the catalog.
    #[serde(skip)]
    pending: Option<Preselection>,
}

/// Functional form of [`WidgetState::update`].
pub fn reduce(mut state: WidgetState, event: Event) -> (WidgetState, Vec<Effect>) {
    let effects = state.update(event);
    (state, effects)
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_deref()
    }

    pub fn has_pending_preselection(&self) -> bool {
        self.pending.is_some()
    }

    /// No fetch or submission is outstanding.
    pub fn is_settled(&self) -> bool {
        self.data != DataStatus::Pending && self.map.loading.is_none() && !self.form.in_flight
    }

    pub fn update(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::PageLoaded { query } => {
                let selection = Preselection::parse(&query);
                if self.catalog.is_some() {
                    return self.apply_preselection(selection);
                }
                self.pending = Some(selection);
                vec![Effect::FetchData]
            }
            Event::DataLoaded { catalog } => {
                info!(
                    states = catalog.options.state_count(),
                    districts = catalog.districts.len(),
                    "data_ready"
                );
                self.catalog = Some(Arc::new(catalog));
                self.data = DataStatus::Ready;
                self.states.populate();
                match self.pending.take() {
                    Some(selection) => self.apply_preselection(selection),
                    None => Vec::new(),
                }
            }
            Event::DataFailed { error } => {
                error!(%error, "Error loading data");
                self.data = DataStatus::Failed;
                self.status = StatusMessage::error(DATA_LOAD_FAILED);
                if let Some(selection) = self.pending.take() {
                    match plan(&selection, None) {
                        Plan::Select { state, .. } => {
                            warn!(state = state.abbr, "Dropping URL preselection without data");
                        }
                        other => self.show_unselected(other),
                    }
                }
                Vec::new()
            }

            Event::StateSelected { abbr } => self.select_state(&abbr),
            Event::RepSelected { name } => {
                self.reps.set_value(name);
                Vec::new()
            }

            Event::MapLoaded { abbr, markup } => {
                self.map.finish_loading(&abbr);
                match self.map.load(&abbr, &markup) {
                    Ok(()) => self.zoom.reset(),
                    Err(e) => {
                        error!(%abbr, error = %e, "Error parsing map");
                        self.map.show_placeholder(MAP_UNAVAILABLE);
                    }
                }
                Vec::new()
            }
            Event::MapFailed { abbr, error } => {
                self.map.finish_loading(&abbr);
                error!(%abbr, %error, "Error loading map");
                self.map.show_placeholder(MAP_UNAVAILABLE);
                Vec::new()
            }
            Event::PointerOver { id } => {
                if let Some(catalog) = self.catalog.as_deref() {
                    self.map.pointer_over(&id, catalog);
                }
                Vec::new()
            }
            Event::PointerOut { id } => {
                self.map.pointer_out(&id);
                Vec::new()
            }
            Event::PointerMoved {
                pointer,
                tooltip,
                viewport,
            } => {
                self.map.pointer_moved(pointer, tooltip, viewport);
                Vec::new()
            }
            Event::DistrictClicked { id } => {
                self.click_district(&id);
                Vec::new()
            }

            Event::ZoomIn => {
                self.zoom.zoom_in();
                Vec::new()
            }
            Event::ZoomOut => {
                self.zoom.zoom_out();
                Vec::new()
            }
            Event::PanStart { pointer } => {
                self.zoom.press(pointer);
                Vec::new()
            }
            Event::PanMove { pointer } => {
                self.zoom.drag_to(pointer);
                Vec::new()
            }
            Event::PanEnd => {
                self.zoom.release();
                Vec::new()
            }

            Event::EmailChanged { email } => {
                self.form.email = email;
                Vec::new()
            }
            Event::SubmitRequested => self.submit(),
            Event::SubmitSucceeded { message } => {
                self.form.in_flight = false;
                let message = message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| SUBSCRIPTION_SUCCESSFUL.to_string());
                info!(%message, "signup_stored");
                self.status = StatusMessage::success(message);
                self.form.reset();
                self.states.clear();
                self.reps.reset();
                self.map.clear_selection();
                Vec::new()
            }
            Event::SubmitFailed { error } => {
                self.form.in_flight = false;
                warn!(%error, "signup_failed");
                self.status = StatusMessage::error(failure_text(&error));
                Vec::new()
            }
        }
    }

    fn select_state(&mut self, abbr: &str) -> Vec<Effect> {
        let Some(catalog) = self.catalog.as_deref() else {
            debug!(abbr, "State selected before data is ready");
            return Vec::new();
        };
        let Some(state) = StateInfo::by_abbr(abbr) else {
            warn!(abbr, "Unknown state code");
            return Vec::new();
        };
        if !self.states.select(state.abbr) {
            return Vec::new();
        }
        self.reps.populate(catalog.options.reps_for(state.abbr));
        self.map.request(state.abbr);
        vec![Effect::FetchMap {
            abbr: state.abbr.to_string(),
            path: format!("/states/{}", state.svg_file_name()),
        }]
    }

    fn apply_preselection(&mut self, selection: Preselection) -> Vec<Effect> {
        let Some(catalog) = self.catalog.clone() else {
            self.pending = Some(selection);
            return Vec::new();
        };
        match plan(&selection, Some(&catalog)) {
            Plan::Select { state, rep } => {
                let effects = self.select_state(state.abbr);
                if let Some(rep) = rep {
                    self.reps.set_value(rep);
                }
                effects
            }
            other => {
                self.show_unselected(other);
                Vec::new()
            }
        }
    }

    /// Title and map placeholder for a query that selects no state.
    fn show_unselected(&mut self, plan: Plan) {
        match plan {
            Plan::Nothing => {
                self.title = TITLE_SELECT_STATE.to_string();
                self.map.show_placeholder(NO_STATE_SELECTED);
            }
            Plan::Invalid { requested } => {
                error!(state = %requested, "Invalid state in URL");
                self.title = TITLE_INVALID_STATE.to_string();
                self.map.show_placeholder(INVALID_STATE_SELECTED);
            }
            Plan::Select { .. } => {}
        }
    }

    fn click_district(&mut self, id: &str) {
        let Some(catalog) = self.catalog.as_deref() else {
            return;
        };
        let Some(ClickOutcome::Selected { rep, .. }) = self.map.click(id, catalog) else {
            return;
        };
        match rep {
            RepMatch::Listed(name) => self.reps.set_value(name),
            RepMatch::Added(name) if self.reps.contains(&name) => self.reps.set_value(name),
            RepMatch::Added(name) => self.reps.append_and_select(name),
            RepMatch::Orphaned(_) | RepMatch::Unmapped => {}
        }
    }

    fn submit(&mut self) -> Vec<Effect> {
        if self.form.in_flight {
            debug!("Submission already in flight");
            return Vec::new();
        }
        let Some(email) = self.form.validated_email() else {
            self.status = StatusMessage::error(INVALID_EMAIL);
            return Vec::new();
        };
        let record = SignupRecord {
            email,
            state: self.states.value().unwrap_or_default().to_string(),
            rep_name: self.reps.value().unwrap_or_default().to_string(),
        };
        info!(state = %record.state, rep = %record.rep_name, "submitting_signup");
        self.status = StatusMessage::neutral(SUBMITTING);
        self.form.in_flight = true;
        vec![Effect::PostSignup { record }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Tone;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"{"CA": ["Rep A", "Rep B"], "WY": []}"#,
            r#"{"CA01": "Rep A"}"#,
        )
        .unwrap()
    }

    fn ready() -> WidgetState {
        let mut state = WidgetState::new();
        state.update(Event::DataLoaded { catalog: catalog() });
        state
    }

    #[test]
    fn test_page_load_requests_data() {
        let (state, effects) = reduce(WidgetState::new(), Event::PageLoaded { query: String::new() });
        assert_eq!(effects, vec![Effect::FetchData]);
        assert!(state.has_pending_preselection());
        assert_eq!(state.data, DataStatus::Pending);
        assert!(!state.states.is_populated());
    }

    #[test]
    fn test_state_selection_before_data_is_ignored() {
        let mut state = WidgetState::new();
        let effects = state.update(Event::StateSelected { abbr: "CA".into() });
        assert!(effects.is_empty());
        assert_eq!(state.states.value(), None);
    }

    #[test]
    fn test_state_selection_requests_map() {
        let mut state = ready();
        let effects = state.update(Event::StateSelected { abbr: "CA".into() });
        assert_eq!(
            effects,
            vec![Effect::FetchMap {
                abbr: "CA".into(),
                path: "/states/california.svg".into(),
            }]
        );
        assert_eq!(state.map.loading.as_deref(), Some("CA"));
        assert!(!state.is_settled());
        assert_eq!(state.reps.options, vec!["Rep A", "Rep B"]);
    }

    #[test]
    fn test_unknown_state_code_ignored() {
        let mut state = ready();
        assert!(state.update(Event::StateSelected { abbr: "ZZ".into() }).is_empty());
        assert_eq!(state.states.value(), None);
    }

    #[test]
    fn test_invalid_email_blocks_submission() {
        let mut state = ready();
        state.update(Event::EmailChanged { email: "nope".into() });
        assert!(state.update(Event::SubmitRequested).is_empty());
        assert_eq!(state.status, StatusMessage::error(INVALID_EMAIL));
        assert!(!state.form.in_flight);
    }

    #[test]
    fn test_second_submit_ignored_while_in_flight() {
        let mut state = ready();
        state.update(Event::EmailChanged { email: "a@b.co".into() });
        assert_eq!(state.update(Event::SubmitRequested).len(), 1);
        assert!(state.update(Event::SubmitRequested).is_empty());
        assert_eq!(state.status.text, SUBMITTING);
        assert_eq!(state.status.tone, Tone::Neutral);
    }

    #[test]
    fn test_invalid_query_state_shown_when_data_fails() {
        let mut state = WidgetState::new();
        state.update(Event::PageLoaded {
            query: "?state=atlantis".into(),
        });
        let effects = state.update(Event::DataFailed {
            error: "HTTP 404".into(),
        });
        assert!(effects.is_empty());
        assert_eq!(state.title, TITLE_INVALID_STATE);
        assert_eq!(state.map.placeholder(), Some(INVALID_STATE_SELECTED));
        assert_eq!(state.status, StatusMessage::error(DATA_LOAD_FAILED));
        assert!(!state.has_pending_preselection());
    }

    #[test]
    fn test_empty_query_shown_when_data_fails() {
        let mut state = WidgetState::new();
        state.update(Event::PageLoaded { query: String::new() });
        state.update(Event::DataFailed {
            error: "HTTP 500".into(),
        });
        assert_eq!(state.title, TITLE_SELECT_STATE);
        assert_eq!(state.map.placeholder(), Some(NO_STATE_SELECTED));
        assert_eq!(state.data, DataStatus::Failed);
    }

    #[test]
    fn test_valid_query_state_dropped_when_data_fails() {
        let mut state = WidgetState::new();
        state.update(Event::PageLoaded {
            query: "?state=california".into(),
        });
        state.update(Event::DataFailed {
            error: "HTTP 500".into(),
        });
        assert_eq!(state.title, "");
        assert_eq!(state.states.value(), None);
        assert!(state.map.loading.is_none());
        assert!(state.is_settled());
    }

    #[test]
    fn test_malformed_map_shows_placeholder() {
        let mut state = ready();
        state.update(Event::StateSelected { abbr: "CA".into() });
        state.update(Event::MapLoaded {
            abbr: "CA".into(),
            markup: "<svg><g></svg>".into(),
        });
        assert_eq!(state.map.placeholder(), Some(MAP_UNAVAILABLE));
        assert!(state.is_settled());
    }

    #[test]
    fn test_snapshot_serializes_without_catalog() {
        let state = ready();
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["data"], "ready");
        assert!(json.get("catalog").is_none());
        assert_eq!(json["reps"]["placeholder"], "Please select a state first");
    }
}
