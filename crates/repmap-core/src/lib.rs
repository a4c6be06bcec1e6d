//! Core domain types shared across the repmap workspace.
//!
//! Everything here is plain data: the static table of U.S. states, the
//! representative catalog loaded from JSON, signup DTOs, and the small pure
//! helpers (email check, query-string preselection) that both the server and
//! the widget need.

mod catalog;
mod email;
mod error;
mod query;
mod signup;
mod states;

pub use catalog::{
    Catalog, DistrictToRep, RepresentativeOptions, DISTRICT_TO_REP_FILE, STATE_OPTIONS_FILE,
};
pub use email::is_valid_email;
pub use error::{CoreError, CoreResult};
pub use query::Preselection;
pub use signup::{
    SignupRecord, SignupRequest, SubmitFailure, SubmitSuccess, MISSING_FIELDS_MESSAGE,
    SIGNUP_SUCCESS_MESSAGE,
};
pub use states::{
    capitalize_words, normalize_state_name, proper_name_for_code, StateInfo, STATES,
    TERRITORIES,
};
