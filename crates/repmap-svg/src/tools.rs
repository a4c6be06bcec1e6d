//! Map-specific passes built on [`rewrite`].

use std::sync::LazyLock;

use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use repmap_core::proper_name_for_code;
use tracing::{debug, warn};

use crate::error::{SvgError, SvgResult};
use crate::rewrite::{rewrite, Action};

/// Stroke colour applied by [`restroke`] when none is given.
pub const DEFAULT_STROKE: &str = "rgb(209, 219, 221)";
/// Stroke width applied by [`restroke`] when none is given.
pub const DEFAULT_STROKE_WIDTH: &str = "0.3";
/// Id of the attribution text block added by the map exporter.
pub const CREDIT_TEXT_ID: &str = "credit-text-svg";

static DISTRICT_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z]{2})\d{1,2}([A-Za-z]*)$").expect("district id pattern is valid")
});

static SPACE_BEFORE_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+</svg>").expect("closing tag pattern is valid"));

/// Whether an element id belongs to the state `abbr`.
pub fn is_interactive(id: &str, abbr: &str) -> bool {
    !id.is_empty() && id.starts_with(abbr)
}

/// Every element id in document order.
pub fn scan_ids(markup: &str) -> SvgResult<Vec<String>> {
    let mut reader = Reader::from_str(markup);
    let mut ids = Vec::new();
    loop {
        let position = reader.buffer_position() as u64;
        match reader
            .read_event()
            .map_err(|e| SvgError::malformed(position, e))?
        {
            Event::Eof => break,
            Event::Start(start) | Event::Empty(start) => {
                let id = start
                    .try_get_attribute("id")
                    .map_err(|e| SvgError::malformed(position, e))?;
                if let Some(attr) = id {
                    let value = attr
                        .unescape_value()
                        .map_err(|e| SvgError::malformed(position, e))?;
                    ids.push(value.into_owned());
                }
            }
            _ => {}
        }
    }
    Ok(ids)
}

/// Ids of the elements that respond to hover and click for state `abbr`.
pub fn interactive_ids(markup: &str, abbr: &str) -> SvgResult<Vec<String>> {
    Ok(scan_ids(markup)?
        .into_iter()
        .filter(|id| is_interactive(id, abbr))
        .collect())
}

/// Give every district of `abbr` a focus stop, a button role and a label.
pub fn annotate_interactive(markup: &str, abbr: &str) -> SvgResult<String> {
    rewrite(markup, |el| {
        if let Some(id) = el.id().map(str::to_owned) {
            if is_interactive(&id, abbr) {
                el.set("tabindex", "0");
                el.set("role", "button");
                el.set("aria-label", format!("District {id}"));
            }
        }
        Action::Keep
    })
}

/// Outcome of [`tag_states`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagReport {
    /// Elements that received a `data-state` attribute.
    pub tagged: usize,
    /// Tagged ids that carry a letter suffix, e.g. `TX01a`.
    pub suffixed: Vec<String>,
    /// Ids that do not look like district ids at all.
    pub mismatched: Vec<String>,
    /// District-shaped ids whose code is not a state or territory.
    pub unrecognized: Vec<String>,
}

/// Add `data-state="<Proper Name>"` to every district-shaped element.
pub fn tag_states(markup: &str) -> SvgResult<(String, TagReport)> {
    let mut report = TagReport::default();
    let out = rewrite(markup, |el| {
        let Some(id) = el.id().map(str::to_owned) else {
            return Action::Keep;
        };
        let Some(caps) = DISTRICT_ID.captures(&id) else {
            debug!(id = %id, "tag_states: id does not match district pattern");
            report.mismatched.push(id);
            return Action::Keep;
        };
        let code = &caps[1];
        match proper_name_for_code(code) {
            Some(name) => {
                el.set("data-state", name);
                report.tagged += 1;
                if !caps[2].is_empty() {
                    report.suffixed.push(id.clone());
                }
            }
            None => {
                warn!(id = %id, code, "tag_states: state code not recognized");
                report.unrecognized.push(id.clone());
            }
        }
        Action::Keep
    })?;
    Ok((out, report))
}

/// Remove every `<path>` whose id does not start with `abbr`.
pub fn trim_to_state(markup: &str, abbr: &str) -> SvgResult<(String, usize)> {
    let mut removed = 0;
    let out = rewrite(markup, |el| {
        if el.local_name() == "path" && !el.id().unwrap_or("").starts_with(abbr) {
            removed += 1;
            Action::Drop
        } else {
            Action::Keep
        }
    })?;
    Ok((out, removed))
}

/// Normalise the outline of every stroked element.
pub fn restroke(markup: &str, stroke: &str, width: &str) -> SvgResult<(String, usize)> {
    let mut changed = 0;
    let out = rewrite(markup, |el| {
        if el.get("stroke").is_some() {
            el.set("stroke", stroke);
            el.set("stroke-width", width);
            changed += 1;
        }
        Action::Keep
    })?;
    Ok((out, changed))
}

/// Remove the exporter's credit text and the whitespace before `</svg>`.
pub fn strip_credit(markup: &str) -> SvgResult<String> {
    let out = rewrite(markup, |el| {
        let is_credit = el.local_name().eq_ignore_ascii_case("text")
            && el
                .id()
                .is_some_and(|id| id.eq_ignore_ascii_case(CREDIT_TEXT_ID));
        if is_credit {
            Action::Drop
        } else {
            Action::Keep
        }
    })?;
    Ok(SPACE_BEFORE_CLOSE.replace_all(&out, "</svg>").into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = r##"<svg xmlns="http://www.w3.org/2000/svg">
  <path id="CA05" stroke="#000" d="M0"/>
  <path id="CA12a" d="M1"/>
  <path id="NV01" stroke="#000" d="M2"/>
  <path id="border" d="M3"/>
  <circle id="ZZ01" r="1"/>
  <text id="credit-text-svg" x="0">Made with <tspan>mapper</tspan></text>
</svg>"##;

    #[test]
    fn test_scan_and_filter_ids() {
        let ids = scan_ids(MAP).unwrap();
        assert_eq!(
            ids,
            ["CA05", "CA12a", "NV01", "border", "ZZ01", "credit-text-svg"]
        );
        assert_eq!(interactive_ids(MAP, "CA").unwrap(), ["CA05", "CA12a"]);
    }

    #[test]
    fn test_is_interactive() {
        assert!(is_interactive("CA05", "CA"));
        assert!(!is_interactive("NV01", "CA"));
        assert!(!is_interactive("", "CA"));
    }

    #[test]
    fn test_annotate_interactive() {
        let out = annotate_interactive(MAP, "CA").unwrap();
        assert!(out.contains(
            r##"<path id="CA05" stroke="#000" d="M0" tabindex="0" role="button" aria-label="District CA05"/>"##
        ));
        assert!(out.contains(r#"aria-label="District CA12a""#));
        assert!(out.contains(r##"<path id="NV01" stroke="#000" d="M2"/>"##));
    }

    #[test]
    fn test_tag_states_report() {
        let (out, report) = tag_states(MAP).unwrap();
        assert_eq!(report.tagged, 3);
        assert_eq!(report.suffixed, ["CA12a"]);
        assert_eq!(report.mismatched, ["border", "credit-text-svg"]);
        assert_eq!(report.unrecognized, ["ZZ01"]);
        assert!(out.contains(r##"id="NV01" stroke="#000" d="M2" data-state="Nevada""##));
    }

    #[test]
    fn test_trim_to_state_keeps_non_paths() {
        let (out, removed) = trim_to_state(MAP, "CA").unwrap();
        assert_eq!(removed, 2);
        assert!(!out.contains("NV01"));
        assert!(!out.contains("border"));
        assert!(out.contains("ZZ01"));
        assert!(out.contains("CA12a"));
    }

    #[test]
    fn test_restroke_only_stroked_elements() {
        let (out, changed) = restroke(MAP, DEFAULT_STROKE, DEFAULT_STROKE_WIDTH).unwrap();
        assert_eq!(changed, 2);
        assert!(out.contains(
            r#"<path id="CA05" stroke="rgb(209, 219, 221)" d="M0" stroke-width="0.3"/>"#
        ));
        assert!(out.contains(r#"<path id="CA12a" d="M1"/>"#));
    }

    #[test]
    fn test_strip_credit() {
        let out = strip_credit(MAP).unwrap();
        assert!(!out.contains("credit-text-svg"));
        assert!(!out.contains("mapper"));
        assert!(out.ends_with(r#"<circle id="ZZ01" r="1"/></svg>"#));
    }
}
