//! Inputs to and outputs of the widget reducer.

use repmap_core::{Catalog, SignupRecord};
use serde::{Deserialize, Serialize};

use crate::tooltip::{Point, Size};

/// Everything that can happen to the widget: user input and the completion
/// of work it asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// The page opened with this query string.
    PageLoaded { query: String },
    DataLoaded { catalog: Catalog },
    DataFailed { error: String },

    StateSelected { abbr: String },
    RepSelected { name: String },

    MapLoaded { abbr: String, markup: String },
    MapFailed { abbr: String, error: String },
    PointerOver { id: String },
    PointerOut { id: String },
    PointerMoved {
        pointer: Point,
        tooltip: Size,
        viewport: Size,
    },
    DistrictClicked { id: String },

    ZoomIn,
    ZoomOut,
    PanStart { pointer: Point },
    PanMove { pointer: Point },
    /// Pointer released or left the map container.
    PanEnd,

    EmailChanged { email: String },
    SubmitRequested,
    SubmitSucceeded { message: Option<String> },
    SubmitFailed { error: String },
}

/// Work the reducer asks the runtime to perform. Each effect reports back
/// with exactly one completion event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    /// Fetch both catalog documents. Completes with `DataLoaded` or `DataFailed`.
    FetchData,
    /// Completes with `MapLoaded` or `MapFailed`.
    FetchMap { abbr: String, path: String },
    /// Completes with `SubmitSucceeded` or `SubmitFailed`.
    PostSignup { record: SignupRecord },
}
