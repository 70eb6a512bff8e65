//! XML persistence for the roster.
//!
//! The on-disk format is a UTF-8 document with a `<workers>` root holding one
//! `<worker>` element per record, each with `<name>`, `<post>` and `<year>`
//! text children. Writing goes through serde; reading walks parser events so
//! the historical loading behavior is preserved exactly (see [`Staff::load`]).

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Serialize;
use tracing::{debug, info};

use super::store::Staff;
use crate::error::{RosterError, RosterResult};
use crate::models::Worker;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>";

#[derive(Serialize)]
#[serde(rename = "workers")]
struct Document<'a> {
    worker: &'a [Worker],
}

/// Which `<worker>` child element the parser is currently inside.
#[derive(Clone, Copy)]
enum Slot {
    Name,
    Post,
    Year,
}

impl Slot {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"name" => Some(Slot::Name),
            b"post" => Some(Slot::Post),
            b"year" => Some(Slot::Year),
            _ => None,
        }
    }
}

impl Staff {
    /// Replaces the roster contents with the workers parsed from the XML
    /// file at `path`.
    ///
    /// Fields of a `<worker>` element may appear in any order; a worker is
    /// appended as soon as all three fields have been seen. A repeated field
    /// overwrites the prior value and re-fires the completeness check, so an
    /// element that repeats a field after it is already complete appends a
    /// duplicate record. This mirrors the behavior of the program this store
    /// replaces and is covered by tests.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::FileNotFound`] when the file does not exist,
    /// [`RosterError::Io`] on other read failures, and
    /// [`RosterError::XmlParse`] / [`RosterError::InvalidNumber`] when the
    /// document is malformed.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> RosterResult<()> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => RosterError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => RosterError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            },
        })?;

        let workers = parse_workers(&text)?;
        info!(count = workers.len(), path = %path.display(), "roster loaded");
        self.replace(workers);
        Ok(())
    }

    /// Writes the roster as an XML document to `path`, overwriting any
    /// existing file in place.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Io`] on write failure.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> RosterResult<()> {
        let path = path.as_ref();
        let body = quick_xml::se::to_string(&Document {
            worker: &self.workers,
        })
        .map_err(|e| RosterError::XmlParse {
            message: e.to_string(),
        })?;

        fs::write(path, format!("{XML_DECLARATION}\n{body}")).map_err(|e| RosterError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        info!(count = self.workers.len(), path = %path.display(), "roster saved");
        Ok(())
    }
}

/// Parses `<worker>` elements out of a roster document.
///
/// The parser keeps one optional slot per field. After every direct child of
/// a `<worker>` element it checks whether all three slots are filled and, if
/// so, appends a record. The slots reset only when a new `<worker>` starts.
fn parse_workers(text: &str) -> RosterResult<Vec<Worker>> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut workers = Vec::new();
    let mut name: Option<String> = None;
    let mut post: Option<String> = None;
    let mut year: Option<i32> = None;

    // Depth of the <worker> element currently open, and the slot/text of the
    // child element currently open inside it.
    let mut depth = 0usize;
    let mut worker_depth: Option<usize> = None;
    let mut current: Option<(Option<Slot>, Option<String>)> = None;

    loop {
        let event = reader.read_event().map_err(|e| RosterError::XmlParse {
            message: e.to_string(),
        })?;

        match event {
            Event::Start(e) => {
                depth += 1;
                if worker_depth.is_none() && e.name().as_ref() == b"worker" {
                    worker_depth = Some(depth);
                    name = None;
                    post = None;
                    year = None;
                } else if worker_depth == Some(depth - 1) {
                    current = Some((Slot::from_tag(e.name().as_ref()), None));
                }
            }
            Event::Empty(e) => {
                // Self-closing child: assigns an empty value to its slot and
                // still counts as a seen element for the completeness check.
                if worker_depth == Some(depth) {
                    if let Some(slot) = Slot::from_tag(e.name().as_ref()) {
                        assign(slot, None, &mut name, &mut post, &mut year)?;
                    }
                    append_if_complete(&mut workers, &name, &post, &year);
                }
            }
            Event::Text(t) => {
                if let Some((_, value)) = &mut current {
                    let text = t
                        .unescape()
                        .map_err(|e| RosterError::XmlParse {
                            message: e.to_string(),
                        })?
                        .into_owned();
                    *value = Some(text);
                }
            }
            Event::End(_) => {
                if let Some(wd) = worker_depth {
                    if depth == wd {
                        worker_depth = None;
                    } else if depth == wd + 1 {
                        if let Some((slot, value)) = current.take() {
                            if let Some(slot) = slot {
                                assign(slot, value, &mut name, &mut post, &mut year)?;
                            }
                        }
                        append_if_complete(&mut workers, &name, &post, &year);
                    }
                }
                depth -= 1;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    debug!(count = workers.len(), "parsed worker elements");
    Ok(workers)
}

fn assign(
    slot: Slot,
    value: Option<String>,
    name: &mut Option<String>,
    post: &mut Option<String>,
    year: &mut Option<i32>,
) -> RosterResult<()> {
    match slot {
        Slot::Name => *name = value,
        Slot::Post => *post = value,
        Slot::Year => {
            let text = value.unwrap_or_default();
            *year = Some(text.parse().map_err(|_| RosterError::InvalidNumber {
                field: "year",
                text,
            })?);
        }
    }
    Ok(())
}

fn append_if_complete(
    workers: &mut Vec<Worker>,
    name: &Option<String>,
    post: &Option<String>,
    year: &Option<i32>,
) {
    if let (Some(name), Some(post), Some(year)) = (name, post, year) {
        workers.push(Worker::new(name.clone(), post.clone(), *year));
    }
}
