//! The interactive district map.
//!
//! The view holds the loaded markup and the ids of its district shapes. Hover
//! and selection are tracked by element id; highlighting them is up to the
//! renderer.

use std::sync::Arc;

use repmap_core::Catalog;
use repmap_svg::{annotate_interactive, interactive_ids, SvgResult};
use serde::Serialize;
use tracing::{debug, warn};

use crate::tooltip::{position_tooltip, Point, Size};

pub const MAP_UNAVAILABLE: &str = "SVG not available.";
pub const NO_STATE_SELECTED: &str = "No state selected.";
pub const INVALID_STATE_SELECTED: &str = "Invalid state selected.";
pub const NO_REGION_SELECTED: &str = "No region selected.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MapContent {
    /// A message in place of the map.
    Placeholder { message: String },
    Loaded {
        abbr: String,
        /// Annotated markup, ready to inject. Shared between snapshots.
        markup: Arc<str>,
        /// Ids of the interactive district shapes, in document order.
        districts: Arc<[String]>,
    },
}

impl Default for MapContent {
    fn default() -> Self {
        MapContent::Placeholder {
            message: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MapPhase {
    Unloaded,
    Loaded,
    Hover,
    Selected,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Tooltip {
    pub visible: bool,
    pub text: String,
    pub position: Point,
}

/// How a clicked district's representative relates to the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepMatch {
    /// Listed for the map's state; select it.
    Listed(String),
    /// Listed for another state; append it and select it.
    Added(String),
    /// Not listed for any state.
    Orphaned(String),
    /// The district has no representative.
    Unmapped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Deselected,
    Selected { district: String, rep: RepMatch },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MapView {
    pub content: MapContent,
    pub hovered: Option<String>,
    pub selected: Option<String>,
    pub tooltip: Tooltip,
    pub click_info: String,
    /// State code of the last map requested and not yet answered.
    pub loading: Option<String>,
}

impl MapView {
    pub fn phase(&self) -> MapPhase {
        match (&self.content, &self.hovered, &self.selected) {
            (MapContent::Placeholder { .. }, _, _) => MapPhase::Unloaded,
            (_, Some(_), _) => MapPhase::Hover,
            (_, None, Some(_)) => MapPhase::Selected,
            _ => MapPhase::Loaded,
        }
    }

    /// State code of the loaded map.
    pub fn abbr(&self) -> Option<&str> {
        match &self.content {
            MapContent::Loaded { abbr, .. } => Some(abbr.as_str()),
            MapContent::Placeholder { .. } => None,
        }
    }

    pub fn districts(&self) -> &[String] {
        match &self.content {
            MapContent::Loaded { districts, .. } => &districts[..],
            MapContent::Placeholder { .. } => &[],
        }
    }

    pub fn placeholder(&self) -> Option<&str> {
        match &self.content {
            MapContent::Placeholder { message } => Some(message.as_str()),
            MapContent::Loaded { .. } => None,
        }
    }

    fn is_district(&self, id: &str) -> bool {
        self.districts().iter().any(|d| d == id)
    }

    pub fn request(&mut self, abbr: &str) {
        self.loading = Some(abbr.to_string());
    }

    /// Clears the loading marker if `abbr` is the map being waited for.
    pub fn finish_loading(&mut self, abbr: &str) {
        if self.loading.as_deref() == Some(abbr) {
            self.loading = None;
        }
    }

    /// Install freshly fetched markup for `abbr`.
    pub fn load(&mut self, abbr: &str, markup: &str) -> SvgResult<()> {
        let annotated = annotate_interactive(markup, abbr)?;
        let districts = interactive_ids(&annotated, abbr)?;
        debug!(abbr, districts = districts.len(), "map_loaded");
        self.content = MapContent::Loaded {
            abbr: abbr.to_string(),
            markup: annotated.into(),
            districts: districts.into(),
        };
        self.clear_interaction();
        Ok(())
    }

    pub fn show_placeholder(&mut self, message: &str) {
        self.content = MapContent::Placeholder {
            message: message.to_string(),
        };
        self.clear_interaction();
    }

    fn clear_interaction(&mut self) {
        self.hovered = None;
        self.selected = None;
        self.tooltip = Tooltip::default();
        self.click_info.clear();
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.click_info.clear();
    }

    /// Pointer entered an element. Returns `false` for non-district elements.
    pub fn pointer_over(&mut self, id: &str, catalog: &Catalog) -> bool {
        if !self.is_district(id) {
            return false;
        }
        let rep = catalog.districts.rep_for(id).unwrap_or("Not Found");
        self.hovered = Some(id.to_string());
        self.tooltip.visible = true;
        self.tooltip.text = format!("Representative: {rep}");
        true
    }

    pub fn pointer_out(&mut self, id: &str) -> bool {
        if !self.is_district(id) {
            return false;
        }
        if self.hovered.as_deref() == Some(id) {
            self.hovered = None;
        }
        self.tooltip.visible = false;
        self.tooltip.text.clear();
        true
    }

    /// Reposition the tooltip. Only while a district is hovered.
    pub fn pointer_moved(&mut self, pointer: Point, tooltip: Size, viewport: Size) -> bool {
        if self.hovered.is_none() {
            return false;
        }
        self.tooltip.position = position_tooltip(pointer, tooltip, viewport);
        true
    }

    /// Toggle the selection of a district and describe its representative.
    pub fn click(&mut self, id: &str, catalog: &Catalog) -> Option<ClickOutcome> {
        if !self.is_district(id) {
            return None;
        }
        let abbr = self.abbr()?.to_string();

        if self.selected.as_deref() == Some(id) {
            self.selected = None;
            self.click_info = NO_REGION_SELECTED.to_string();
            return Some(ClickOutcome::Deselected);
        }

        self.selected = Some(id.to_string());
        let mut info = format!("Selected Congressional District: {id}");
        let rep = match catalog.districts.rep_for(id) {
            None => {
                warn!(district = id, "No representative mapped for district");
                RepMatch::Unmapped
            }
            Some(name) if catalog.options.contains(&abbr, name) => {
                info.push_str(&format!(" | Representative Selected: {name}"));
                RepMatch::Listed(name.to_string())
            }
            Some(name) if catalog.options.state_of(name).is_some() => {
                info.push_str(&format!(" | Representative Selected: {name} (Added)"));
                RepMatch::Added(name.to_string())
            }
            Some(name) => {
                warn!(district = id, rep = name, "Representative is not listed for any state");
                RepMatch::Orphaned(name.to_string())
            }
        };
        self.click_info = info;
        Some(ClickOutcome::Selected {
            district: id.to_string(),
            rep,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CA_MAP: &str = r#"<svg xmlns="http://www.w3.org/2000/svg"><g id="outline"><path id="CA01" d="M0 0"/><path id="CA02" d="M1 1"/><path id="CA03" d="M2 2"/><path id="NV01" d="M3 3"/></g></svg>"#;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"{"CA": ["Rep A", "Rep B"], "NV": ["Rep N"]}"#,
            r#"{"CA01": "Rep A", "CA02": "Rep N", "CA03": "Rep Ghost"}"#,
        )
        .unwrap()
    }

    fn loaded() -> MapView {
        let mut view = MapView::default();
        view.load("CA", CA_MAP).unwrap();
        view
    }

    #[test]
    fn test_load_annotates_districts() {
        let view = loaded();
        assert_eq!(view.abbr(), Some("CA"));
        assert_eq!(view.districts(), ["CA01", "CA02", "CA03"]);
        let MapContent::Loaded { markup, .. } = &view.content else {
            panic!("map not loaded");
        };
        assert!(markup.contains(r#"aria-label="District CA01""#));
        assert!(!markup.contains(r#"aria-label="District NV01""#));
        assert_eq!(view.phase(), MapPhase::Loaded);
    }

    #[test]
    fn test_cloned_view_shares_markup() {
        let view = loaded();
        let copy = view.clone();
        let (MapContent::Loaded { markup: a, .. }, MapContent::Loaded { markup: b, .. }) =
            (&view.content, &copy.content)
        else {
            panic!("map not loaded");
        };
        assert!(Arc::ptr_eq(a, b));
    }

    #[test]
    fn test_hover_shows_rep_or_not_found() {
        let catalog = catalog();
        let mut view = loaded();
        assert!(view.pointer_over("CA01", &catalog));
        assert_eq!(view.phase(), MapPhase::Hover);
        assert!(view.tooltip.visible);
        assert_eq!(view.tooltip.text, "Representative: Rep A");

        assert!(view.pointer_out("CA01"));
        assert!(!view.tooltip.visible);
        assert!(view.tooltip.text.is_empty());

        let mut bare = MapView::default();
        bare.load("CA", CA_MAP).unwrap();
        let empty = Catalog::default();
        bare.pointer_over("CA02", &empty);
        assert_eq!(bare.tooltip.text, "Representative: Not Found");
    }

    #[test]
    fn test_non_district_events_ignored() {
        let catalog = catalog();
        let mut view = loaded();
        assert!(!view.pointer_over("outline", &catalog));
        assert!(!view.pointer_over("NV01", &catalog));
        assert_eq!(view.click("NV01", &catalog), None);
        assert!(view.hovered.is_none());
        assert!(view.selected.is_none());
    }

    #[test]
    fn test_pointer_move_only_while_hovering() {
        let catalog = catalog();
        let mut view = loaded();
        let tip = Size::new(100.0, 20.0);
        let viewport = Size::new(800.0, 600.0);
        assert!(!view.pointer_moved(Point::new(5.0, 5.0), tip, viewport));
        view.pointer_over("CA01", &catalog);
        assert!(view.pointer_moved(Point::new(5.0, 5.0), tip, viewport));
        assert_eq!(view.tooltip.position, Point::new(15.0, 15.0));
    }

    #[test]
    fn test_click_toggles_selection() {
        let catalog = catalog();
        let mut view = loaded();
        let outcome = view.click("CA01", &catalog).unwrap();
        assert_eq!(
            outcome,
            ClickOutcome::Selected {
                district: "CA01".into(),
                rep: RepMatch::Listed("Rep A".into()),
            }
        );
        assert_eq!(
            view.click_info,
            "Selected Congressional District: CA01 | Representative Selected: Rep A"
        );
        assert_eq!(view.phase(), MapPhase::Selected);

        assert_eq!(view.click("CA01", &catalog), Some(ClickOutcome::Deselected));
        assert_eq!(view.click_info, NO_REGION_SELECTED);
        assert!(view.selected.is_none());
    }

    #[test]
    fn test_click_moves_selection() {
        let catalog = catalog();
        let mut view = loaded();
        view.click("CA01", &catalog);
        view.click("CA02", &catalog);
        assert_eq!(view.selected.as_deref(), Some("CA02"));
        assert_eq!(
            view.click_info,
            "Selected Congressional District: CA02 | Representative Selected: Rep N (Added)"
        );
    }

    #[test]
    fn test_click_orphaned_and_unmapped() {
        let catalog = catalog();
        let mut view = loaded();
        let outcome = view.click("CA03", &catalog).unwrap();
        assert_eq!(
            outcome,
            ClickOutcome::Selected {
                district: "CA03".into(),
                rep: RepMatch::Orphaned("Rep Ghost".into()),
            }
        );
        assert_eq!(view.click_info, "Selected Congressional District: CA03");

        let empty = Catalog::default();
        let outcome = view.click("CA01", &empty).unwrap();
        assert!(matches!(
            outcome,
            ClickOutcome::Selected {
                rep: RepMatch::Unmapped,
                ..
            }
        ));
    }

    #[test]
    fn test_placeholder_resets_interaction() {
        let catalog = catalog();
        let mut view = loaded();
        view.click("CA01", &catalog);
        view.show_placeholder(MAP_UNAVAILABLE);
        assert_eq!(view.placeholder(), Some(MAP_UNAVAILABLE));
        assert_eq!(view.phase(), MapPhase::Unloaded);
        assert!(view.selected.is_none());
        assert!(view.districts().is_empty());
    }

    #[test]
    fn test_loading_marker_tracks_latest_request() {
        let mut view = MapView::default();
        view.request("CA");
        view.request("NV");
        view.finish_loading("CA");
        assert_eq!(view.loading.as_deref(), Some("NV"));
        view.finish_loading("NV");
        assert!(view.loading.is_none());
    }
}
