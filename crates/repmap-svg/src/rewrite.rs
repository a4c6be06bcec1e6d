//! Event-stream rewriting of XML elements.

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::error::{SvgError, SvgResult};

/// What to do with an element after a rewrite callback has seen it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Write the element (with any attribute edits) and descend into it.
    Keep,
    /// Remove the element together with everything nested inside it.
    Drop,
}

/// An opening tag with decoded attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    dirty: bool,
}

impl Element {
    fn from_start(start: &BytesStart<'_>, position: u64) -> SvgResult<Self> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| SvgError::malformed(position, e))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|e| SvgError::malformed(position, e))?
                .into_owned();
            attributes.push((key, value));
        }
        Ok(Self {
            name,
            attributes,
            dirty: false,
        })
    }

    fn to_start(&self) -> BytesStart<'static> {
        let mut start = BytesStart::new(self.name.clone());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }
        start
    }

    /// Qualified tag name as written, e.g. `path` or `svg:path`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tag name without a namespace prefix.
    pub fn local_name(&self) -> &str {
        self.name.rsplit(':').next().unwrap_or(&self.name)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.get("id")
    }

    /// Set an attribute, replacing an existing value in place.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) if *existing == value => return,
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((key.to_string(), value)),
        }
        self.dirty = true;
    }
}

/// Stream `markup` through `edit`, which may modify each element's attributes
/// or drop the element. Elements that are kept untouched, text, comments and
/// declarations are copied through unchanged.
pub fn rewrite<F>(markup: &str, mut edit: F) -> SvgResult<String>
where
    F: FnMut(&mut Element) -> Action,
{
    let mut reader = Reader::from_str(markup);
    let mut writer = Writer::new(Vec::with_capacity(markup.len()));
    // Nesting depth inside a dropped element; zero when not skipping.
    let mut skip_depth = 0usize;

    loop {
        let position = reader.buffer_position() as u64;
        let event = reader
            .read_event()
            .map_err(|e| SvgError::malformed(position, e))?;

        if skip_depth > 0 {
            match event {
                Event::Start(_) => skip_depth += 1,
                Event::End(_) => skip_depth -= 1,
                Event::Eof => break,
                _ => {}
            }
            continue;
        }

        match event {
            Event::Eof => break,
            Event::Start(start) => {
                let mut element = Element::from_start(&start, position)?;
                match edit(&mut element) {
                    Action::Drop => skip_depth = 1,
                    Action::Keep if element.dirty => writer
                        .write_event(Event::Start(element.to_start()))
                        .map_err(SvgError::write)?,
                    Action::Keep => writer
                        .write_event(Event::Start(start))
                        .map_err(SvgError::write)?,
                }
            }
            Event::Empty(start) => {
                let mut element = Element::from_start(&start, position)?;
                match edit(&mut element) {
                    Action::Drop => {}
                    Action::Keep if element.dirty => writer
                        .write_event(Event::Empty(element.to_start()))
                        .map_err(SvgError::write)?,
                    Action::Keep => writer
                        .write_event(Event::Empty(start))
                        .map_err(SvgError::write)?,
                }
            }
            other => writer.write_event(other).map_err(SvgError::write)?,
        }
    }

    Ok(String::from_utf8(writer.into_inner())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<svg xmlns="http://www.w3.org/2000/svg"><g id="g1"><path id="a" d="M0"/><path id="b" d="M1"></path></g><!-- note --></svg>"#;

    #[test]
    fn test_identity_preserves_markup() {
        let out = rewrite(DOC, |_| Action::Keep).unwrap();
        assert_eq!(out, DOC);
    }

    #[test]
    fn test_drop_removes_subtree() {
        let out = rewrite(DOC, |el| {
            if el.id() == Some("g1") {
                Action::Drop
            } else {
                Action::Keep
            }
        })
        .unwrap();
        assert_eq!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg"><!-- note --></svg>"#
        );
    }

    #[test]
    fn test_set_attribute_escapes_value() {
        let out = rewrite(DOC, |el| {
            if el.id() == Some("a") {
                el.set("data-label", "A & B");
            }
            Action::Keep
        })
        .unwrap();
        assert!(out.contains(r#"<path id="a" d="M0" data-label="A &amp; B"/>"#));
        assert!(out.contains(r#"<path id="b" d="M1"></path>"#));
    }

    #[test]
    fn test_local_name_strips_prefix() {
        let out = rewrite(r#"<svg:svg><svg:path id="x"/></svg:svg>"#, |el| {
            if el.local_name() == "path" {
                Action::Drop
            } else {
                Action::Keep
            }
        })
        .unwrap();
        assert_eq!(out, "<svg:svg></svg:svg>");
    }

    #[test]
    fn test_malformed_markup_is_an_error() {
        let err = rewrite("<svg><g></svg>", |_| Action::Keep).unwrap_err();
        assert!(matches!(err, SvgError::Malformed { .. }));
    }
}
