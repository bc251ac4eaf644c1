//! Rendering of extracted geometry.

use std::io::Write;

use itertools::Itertools;

use crate::document::Document;
use crate::drawable::Shape;
use crate::errors::{Error, Result};
use crate::geometry::{BoundingBox, Point};
use crate::{fstr, ExtractConfig};

#[cfg(feature = "json")]
use serde_derive::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// One line of `x,y` points per subpath
    #[default]
    Text,
    /// A single JSON object
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::InvalidValue("output format".into(), s.into())),
        }
    }
}

/// Geometry extracted from a document, ready for output.
#[derive(Clone, Debug, PartialEq)]
pub struct Extract {
    pub title: Option<String>,
    pub bbox: Option<BoundingBox>,
    /// Polylines, one per subpath; `None` when only the bounding box was
    /// requested
    pub segments: Option<Vec<Vec<Point>>>,
}

impl Extract {
    pub fn new(doc: &Document, cfg: &ExtractConfig) -> Self {
        let segments = if cfg.bbox_only {
            None
        } else if cfg.simplify {
            Some(doc.simplify(cfg.precision))
        } else {
            Some(doc.segments(cfg.precision))
        };
        Self {
            title: doc.title(),
            bbox: doc.bbox(),
            segments,
        }
    }

    pub fn write_to(&self, writer: &mut dyn Write, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Text => self.write_text(writer),
            #[cfg(feature = "json")]
            OutputFormat::Json => self.write_json(writer),
            #[cfg(not(feature = "json"))]
            OutputFormat::Json => Err(Error::Message(
                "JSON output requires the `json` feature".into(),
            )),
        }
    }

    fn write_text(&self, writer: &mut dyn Write) -> Result<()> {
        let Some(segments) = &self.segments else {
            if let Some(bb) = self.bbox {
                writeln!(
                    writer,
                    "{} {} {} {}",
                    fstr(bb.x1),
                    fstr(bb.y1),
                    fstr(bb.x2),
                    fstr(bb.y2)
                )?;
            }
            return Ok(());
        };
        if let Some(title) = &self.title {
            writeln!(writer, "# {title}")?;
        }
        for seg in segments {
            let line = seg
                .iter()
                .map(|p| format!("{},{}", fstr(p.x), fstr(p.y)))
                .join(" ");
            writeln!(writer, "{line}")?;
        }
        Ok(())
    }

    #[cfg(feature = "json")]
    fn write_json(&self, writer: &mut dyn Write) -> Result<()> {
        #[derive(Serialize)]
        struct JsonExtract<'a> {
            title: Option<&'a str>,
            bbox: Option<[f64; 4]>,
            #[serde(skip_serializing_if = "Option::is_none")]
            segments: Option<Vec<Vec<[f64; 2]>>>,
        }

        let out = JsonExtract {
            title: self.title.as_deref(),
            bbox: self.bbox.map(|bb| [bb.x1, bb.y1, bb.x2, bb.y2]),
            segments: self.segments.as_ref().map(|segs| {
                segs.iter()
                    .map(|seg| seg.iter().map(|p| [p.x, p.y]).collect())
                    .collect()
            }),
        };
        serde_json::to_writer(&mut *writer, &out).map_err(Error::from_err)?;
        writeln!(writer)?;
        Ok(())
    }
}
