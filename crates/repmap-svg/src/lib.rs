//! District map SVG handling.
//!
//! The map files follow one naming convention: every district shape carries an
//! `id` that starts with its state's two-letter code (`CA05`, `TX12a`). This
//! crate reads and rewrites those files as a stream of XML events, so the
//! markup that is not touched passes through byte for byte.
//!
//! - [`scan_ids`] / [`interactive_ids`] list element ids.
//! - [`annotate_interactive`] adds focus order and accessible labels.
//! - [`tag_states`], [`trim_to_state`], [`restroke`] and [`strip_credit`] are
//!   the preprocessing passes applied to raw map exports before serving.

mod error;
mod rewrite;
mod tools;

pub use error::{SvgError, SvgResult};
pub use rewrite::{rewrite, Action, Element};
pub use tools::{
    annotate_interactive, interactive_ids, is_interactive, restroke, scan_ids, strip_credit,
    tag_states, trim_to_state, TagReport, CREDIT_TEXT_ID, DEFAULT_STROKE, DEFAULT_STROKE_WIDTH,
};
