//! The shared capability contract for value types.
//!
//! Every value type supports the four arithmetic operations through the
//! standard operator traits and an XML round-trip in which each field becomes
//! a child element named after the field. Decoding is strict: the child
//! elements must match the type's field set exactly.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use quick_xml::Reader;
use quick_xml::escape::escape;
use quick_xml::events::Event;

use crate::error::{RosterError, RosterResult};

/// The capability set shared by [`Money`](super::Money) and
/// [`Fraction`](super::Fraction).
///
/// Addition and subtraction take an operand of the same type; scaling and
/// division take a real scalar. The XML methods are provided in terms of the
/// per-type field list, so implementors only describe their fields.
pub trait Pair:
    Sized
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
{
    /// The variant name, used as the default XML root tag.
    const TAG: &'static str;

    /// The field names, in declaration order.
    const FIELDS: &'static [&'static str];

    /// Renders each field as a `(name, text)` pair in declaration order.
    fn fields(&self) -> Vec<(&'static str, String)>;

    /// Reconstructs the value from decoded `(tag, text)` pairs.
    ///
    /// The pairs must cover exactly this type's fields; a later pair with a
    /// repeated tag replaces an earlier one before the check.
    fn from_fields(fields: &[(String, String)]) -> RosterResult<Self>;

    /// Encodes the value as an XML fragment with the given root tag.
    fn to_xml_as(&self, tag: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!("<{tag}>"));
        for (name, text) in self.fields() {
            out.push_str(&format!("<{name}>{}</{name}>", escape(&text)));
        }
        out.push_str(&format!("</{tag}>"));
        out
    }

    /// Encodes the value as an XML fragment tagged with the variant name.
    fn to_xml(&self) -> String {
        self.to_xml_as(Self::TAG)
    }

    /// Decodes a value from an XML fragment.
    ///
    /// The root tag is not checked; the child elements must match the
    /// type's field set exactly, or a [`RosterError::ValueDecode`] is
    /// returned.
    fn from_xml(xml: &str) -> RosterResult<Self> {
        let (_, fields) = decode_fragment(xml)?;
        Self::from_fields(&fields)
    }
}

/// Parses an XML fragment into its root tag and the `(tag, text)` pairs of
/// the root's direct children. Children with no text decode as empty text.
pub(crate) fn decode_fragment(xml: &str) -> RosterResult<(String, Vec<(String, String)>)> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut root: Option<String> = None;
    let mut fields = Vec::new();
    let mut depth = 0usize;
    let mut current: Option<(String, String)> = None;

    loop {
        let event = reader.read_event().map_err(|e| RosterError::XmlParse {
            message: e.to_string(),
        })?;

        match event {
            Event::Start(e) => {
                depth += 1;
                let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                match depth {
                    1 => root = Some(tag),
                    2 => current = Some((tag, String::new())),
                    _ => {}
                }
            }
            Event::Empty(e) => {
                if depth == 1 {
                    let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    fields.push((tag, String::new()));
                }
            }
            Event::Text(t) => {
                if let Some((_, text)) = &mut current {
                    let unescaped = t.unescape().map_err(|e| RosterError::XmlParse {
                        message: e.to_string(),
                    })?;
                    text.push_str(&unescaped);
                }
            }
            Event::End(_) => {
                if depth == 2 {
                    if let Some(pair) = current.take() {
                        fields.push(pair);
                    }
                }
                depth -= 1;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let root = root.ok_or_else(|| RosterError::XmlParse {
        message: "document has no root element".to_string(),
    })?;
    Ok((root, fields))
}

/// Collapses decoded pairs (last occurrence of a tag wins) and returns the
/// texts of `expected` in order, or a [`RosterError::ValueDecode`] when the
/// tag set does not match exactly.
pub(crate) fn take_fields(
    type_name: &'static str,
    expected: &[&'static str],
    found: &[(String, String)],
) -> RosterResult<Vec<String>> {
    let mut collapsed: Vec<(&str, &str)> = Vec::new();
    for (tag, text) in found {
        if let Some(entry) = collapsed.iter_mut().find(|(t, _)| t == tag) {
            entry.1 = text;
        } else {
            collapsed.push((tag, text));
        }
    }

    let found_tags: Vec<&str> = collapsed.iter().map(|(t, _)| *t).collect();
    if found_tags.len() != expected.len() || expected.iter().any(|e| !found_tags.contains(e)) {
        return Err(RosterError::ValueDecode {
            expected: type_name,
            message: format!(
                "expected fields {:?}, found {:?}",
                expected, found_tags
            ),
        });
    }

    Ok(expected
        .iter()
        .map(|e| {
            collapsed
                .iter()
                .find(|(t, _)| t == e)
                .map(|(_, text)| (*text).to_string())
                .unwrap_or_default()
        })
        .collect())
}
