use std::io::BufRead;

use log::{debug, warn};
use quick_xml::events::{BytesStart, Event as XmlEvent};
use quick_xml::Reader;

use crate::drawable::{Circle, Drawable, Group};
use crate::errors::{Error, Result};
use crate::geometry::Point;
use crate::path::Path;

/// An element start tag: local name plus unescaped attributes.
#[derive(Clone, Debug, PartialEq)]
struct RawElement {
    name: String,
    attrs: Vec<(String, String)>,
}

impl RawElement {
    fn get_attr(&self, key: &str) -> Option<String> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    fn get_number(&self, key: &str) -> Result<Option<f64>> {
        match self.get_attr(key) {
            Some(value) => value
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| Error::InvalidValue(format!("{} {key}", self.name), value)),
            None => Ok(None),
        }
    }
}

impl TryFrom<BytesStart<'_>> for RawElement {
    type Error = Error;

    fn try_from(e: BytesStart) -> Result<Self> {
        // namespace prefixes (e.g. `svg:path`) are dropped
        let name = String::from_utf8(e.local_name().as_ref().to_vec())?;
        let attrs: Result<Vec<(String, String)>> = e
            .attributes()
            .map(|a| {
                let aa = a.map_err(Error::from_err)?;
                let key = String::from_utf8(aa.key.into_inner().to_vec())?;
                let value = aa.unescape_value().map_err(Error::from_err)?.into_owned();
                Ok((key, value))
            })
            .collect();
        Ok(Self { name, attrs: attrs? })
    }
}

/// The subset of XML events the walker cares about.
enum Node {
    Start(RawElement),
    Empty(RawElement),
    End,
    Text(String),
    Eof,
    Other,
}

/// Result of walking a document: its root group and any `<title>` found
/// directly under the root element.
pub(super) struct Walked {
    pub root: Group,
    pub title: Option<String>,
}

struct Walker<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    title: Option<String>,
}

impl<R: BufRead> Walker<R> {
    fn new(reader: R) -> Self {
        Self {
            reader: Reader::from_reader(reader),
            buf: Vec::new(),
            title: None,
        }
    }

    fn next_node(&mut self) -> Result<Node> {
        self.buf.clear();
        let ev = self
            .reader
            .read_event_into(&mut self.buf)
            .map_err(|e| Error::Document(e.to_string()))?;
        Ok(match ev {
            XmlEvent::Start(bs) => Node::Start(bs.try_into()?),
            XmlEvent::Empty(bs) => Node::Empty(bs.try_into()?),
            XmlEvent::End(_) => Node::End,
            XmlEvent::Text(t) => Node::Text(String::from_utf8(t.into_inner().into_owned())?),
            XmlEvent::Eof => Node::Eof,
            _ => Node::Other,
        })
    }

    /// Find the root element and walk everything beneath it.
    fn walk(mut self) -> Result<Walked> {
        loop {
            match self.next_node()? {
                Node::Start(el) => {
                    let mut root = Self::root_group(&el)?;
                    self.read_children(&mut root, true)?;
                    return Ok(Walked {
                        root,
                        title: self.title,
                    });
                }
                Node::Empty(el) => {
                    return Ok(Walked {
                        root: Self::root_group(&el)?,
                        title: None,
                    });
                }
                Node::Eof => return Err(Error::Document("no root element".into())),
                Node::End => return Err(Error::Document("unexpected end tag".into())),
                Node::Text(_) | Node::Other => {}
            }
        }
    }

    fn root_group(el: &RawElement) -> Result<Group> {
        if el.name != "svg" {
            return Err(Error::Document(format!(
                "root element must be <svg>, not <{}>",
                el.name
            )));
        }
        Ok(Group::new(el.get_attr("id")))
    }

    /// Read the content of an open element into `group`, up to and
    /// including its end tag.
    fn read_children(&mut self, group: &mut Group, is_root: bool) -> Result<()> {
        loop {
            match self.next_node()? {
                Node::Start(el) => match el.name.as_str() {
                    "g" => {
                        let mut child = Group::new(el.get_attr("id"));
                        self.read_children(&mut child, false)?;
                        group.append(child);
                    }
                    "title" if is_root => {
                        let text = self.read_text()?;
                        self.title.get_or_insert(text);
                    }
                    _ => {
                        if let Some(item) = Self::leaf(&el)? {
                            group.append(item);
                        }
                        self.skip_content()?;
                    }
                },
                Node::Empty(el) => match el.name.as_str() {
                    "g" => group.append(Group::new(el.get_attr("id"))),
                    "title" if is_root => {}
                    _ => {
                        if let Some(item) = Self::leaf(&el)? {
                            group.append(item);
                        }
                    }
                },
                Node::End => return Ok(()),
                Node::Eof => return Err(Error::Document("unexpected end of input".into())),
                Node::Text(_) | Node::Other => {}
            }
        }
    }

    /// Build a path or circle; anything else is reported and dropped.
    fn leaf(el: &RawElement) -> Result<Option<Drawable>> {
        match el.name.as_str() {
            "path" => {
                let data = el
                    .get_attr("d")
                    .ok_or_else(|| Error::MissingAttribute("path d".into()))?;
                let path = Path::parse(&data)?
                    .with_id(el.get_attr("id"))
                    .with_style(el.get_attr("style"));
                debug!("path with {} primitives", path.items.len());
                Ok(Some(path.into()))
            }
            "circle" => {
                let cx = el.get_number("cx")?.unwrap_or_default();
                let cy = el.get_number("cy")?.unwrap_or_default();
                let r = el
                    .get_number("r")?
                    .ok_or_else(|| Error::MissingAttribute("circle r".into()))?;
                let mut circle = Circle::new(Point::new(cx, cy), r);
                circle.id = el.get_attr("id");
                circle.style = el.get_attr("style");
                Ok(Some(circle.into()))
            }
            other => {
                warn!("unsupported element <{other}> ignored");
                Ok(None)
            }
        }
    }

    /// Collect the text content of an open element, up to its end tag.
    fn read_text(&mut self) -> Result<String> {
        let mut text = String::new();
        loop {
            match self.next_node()? {
                Node::Text(t) => text.push_str(&t),
                Node::Start(_) => self.skip_content()?,
                Node::End => return Ok(text.trim().to_string()),
                Node::Eof => return Err(Error::Document("unexpected end of input".into())),
                Node::Empty(_) | Node::Other => {}
            }
        }
    }

    /// Discard everything up to the end tag of the element just opened.
    fn skip_content(&mut self) -> Result<()> {
        let mut depth = 1;
        while depth > 0 {
            match self.next_node()? {
                Node::Start(_) => depth += 1,
                Node::End => depth -= 1,
                Node::Eof => return Err(Error::Document("unexpected end of input".into())),
                _ => {}
            }
        }
        Ok(())
    }
}

pub(super) fn walk(reader: &mut dyn BufRead) -> Result<Walked> {
    Walker::new(reader).walk()
}
