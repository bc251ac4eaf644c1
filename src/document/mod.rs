//! SVG documents, as trees of drawables.

mod xml;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::str::FromStr;

use crate::drawable::{Group, Shape};
use crate::errors::{Error, Result};
use crate::geometry::{Angle, BoundingBox, Point};
use crate::primitives::Transform;

/// A parsed SVG document.
///
/// Groups, paths and circles are kept; every other element is dropped
/// (with a warning) while reading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Path of the file the document was read from, if any
    pub filename: Option<String>,
    title: Option<String>,
    /// Content of the root `<svg>` element
    pub root: Group,
}

impl Document {
    pub fn new(root: Group) -> Self {
        Self {
            root,
            ..Default::default()
        }
    }

    pub fn from_reader(reader: &mut dyn BufRead) -> Result<Self> {
        let walked = xml::walk(reader)?;
        Ok(Self {
            filename: None,
            title: walked.title,
            root: walked.root,
        })
    }

    pub fn from_file(filename: &str) -> Result<Self> {
        let mut reader = BufReader::new(File::open(filename)?);
        let mut doc = Self::from_reader(&mut reader)?;
        doc.filename = Some(filename.to_string());
        Ok(doc)
    }

    /// The document `<title>`, falling back to the stem of the file it
    /// was read from.
    pub fn title(&self) -> Option<String> {
        self.title.clone().or_else(|| {
            self.filename.as_ref().and_then(|f| {
                std::path::Path::new(f)
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
            })
        })
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(&mut s.as_bytes())
    }
}

impl Shape for Document {
    fn bbox(&self) -> Option<BoundingBox> {
        self.root.bbox()
    }

    fn segments(&self, precision: f64) -> Vec<Vec<Point>> {
        self.root.segments(precision)
    }

    fn simplify(&self, precision: f64) -> Vec<Vec<Point>> {
        self.root.simplify(precision)
    }
}

impl Transform for Document {
    fn scale(&mut self, ratio: f64) -> &mut Self {
        self.root.scale(ratio);
        self
    }

    fn translate(&mut self, offset: Point) -> &mut Self {
        self.root.translate(offset);
        self
    }

    fn rotate(&mut self, angle: Angle) -> &mut Self {
        self.root.rotate(angle);
        self
    }
}
