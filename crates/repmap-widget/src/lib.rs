//! The state/representative signup widget.
//!
//! The widget is a reducer over [`WidgetState`]: user input and completed
//! requests arrive as [`Event`]s, and the reducer answers with [`Effect`]s
//! describing the requests to make next. Nothing in the reducer does I/O.
//!
//! Two drivers are provided:
//! - [`Runtime`] (feature `runtime`, on by default): a tokio task that owns
//!   the state, performs effects through a [`Backend`] such as
//!   [`HttpBackend`], and publishes snapshots on a watch channel.
//! - `WebWidget` (wasm32 only): bindings for a host page that performs the
//!   effects itself.
//!
//! ```no_run
//! use repmap_widget::{Event, HttpBackend, Runtime};
//!
//! # async fn demo() -> repmap_widget::WidgetResult<()> {
//! let (runtime, mut handle) = Runtime::new(HttpBackend::new("http://localhost:3000")?);
//! tokio::spawn(runtime.run());
//! handle.send(Event::PageLoaded { query: "?state=ohio".into() })?;
//! let state = handle.settle().await?;
//! println!("{:?}", state.map.districts());
//! # Ok(())
//! # }
//! ```

mod event;
mod form;
mod map_view;
mod preselect;
mod selector;
mod status;
mod tooltip;
mod widget;
mod zoom;

#[cfg(feature = "runtime")]
mod error;
#[cfg(feature = "runtime")]
mod http;
#[cfg(feature = "runtime")]
mod runtime;

#[cfg(target_arch = "wasm32")]
mod web;

pub use event::{Effect, Event};
pub use form::{
    failure_text, SignupForm, INVALID_EMAIL, SUBMITTING, SUBSCRIPTION_SUCCESSFUL, UNKNOWN_ERROR,
};
pub use map_view::{
    ClickOutcome, MapContent, MapPhase, MapView, RepMatch, Tooltip, INVALID_STATE_SELECTED,
    MAP_UNAVAILABLE, NO_REGION_SELECTED, NO_STATE_SELECTED,
};
pub use preselect::{plan, Plan, TITLE_INVALID_STATE, TITLE_SELECT_STATE};
pub use selector::{
    state_options, RepDropdown, StateDropdown, StateOption, PLACEHOLDER_NO_REPS,
    PLACEHOLDER_SELECT_REP, PLACEHOLDER_STATE_FIRST,
};
pub use status::{StatusMessage, Tone};
pub use tooltip::{position_tooltip, Point, Size, TOOLTIP_OFFSET};
pub use widget::{reduce, DataStatus, WidgetState, DATA_LOAD_FAILED};
pub use zoom::{ZoomPan, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};

#[cfg(feature = "runtime")]
pub use error::{WidgetError, WidgetResult};
#[cfg(feature = "runtime")]
pub use http::HttpBackend;
#[cfg(feature = "runtime")]
pub use runtime::{perform, Backend, Runtime, Snapshot, WidgetHandle};

#[cfg(target_arch = "wasm32")]
pub use web::WebWidget;
