//! ## svgpoly - flatten SVG paths into polylines
//!
//! `svgpoly` is normally run as a command line tool, taking an SVG file and
//! writing out the polylines approximating each of its paths.
//!
//! ## Library use
//!
//! Path data (the `d` attribute of `<path>` elements) can be parsed directly
//! with [`parse_path`], and whole documents read with [`Document`]. Both
//! support bounding boxes, flattening into polylines (optionally simplified),
//! and scale / rotate / translate transformations.
//!
//! For the command-line behaviour without a subprocess, create an
//! `ExtractConfig` and call the appropriate `extract_*` function.
//!
//! Errors in processing are handled via `svgpoly::Result`.
//!
//! ## Example
//!
//! ```
//! use svgpoly::{Shape, Transform};
//!
//! let mut path = svgpoly::parse_path("M0,0 L10,0 L10,10 Z").unwrap();
//! path.scale(2.);
//! assert_eq!(path.bbox().unwrap().x2, 20.);
//!
//! let cfg = svgpoly::ExtractConfig::default();
//! let input = r#"<svg><path d="M0,0 h5 v5"/></svg>"#;
//! let output = svgpoly::extract_str(input, &cfg).unwrap();
//! assert_eq!(output, "0,0 5,0 5,5\n");
//! ```

use std::io::{BufRead, Write};

#[cfg(feature = "cli")]
pub mod cli;
mod constants;
pub mod document;
pub mod drawable;
pub mod errors;
pub mod geometry;
pub mod output;
pub mod path;
pub mod primitives;

pub use document::Document;
pub use drawable::{Circle, Drawable, Group, Shape};
pub use errors::{Error, Result};
pub use geometry::{Angle, BoundingBox, Point};
pub use output::{Extract, OutputFormat};
pub use path::Path;
pub use primitives::{Bezier, Line, MoveTo, Primitive, Transform};

// Allow users of this as a library to easily retrieve the version of svgpoly being used
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Settings to configure a single extraction.
///
/// Alternate front-ends may use this directly rather than `Config`, which
/// wraps this struct when `svgpoly` is run as a command-line program.
#[derive(Clone, Debug)]
pub struct ExtractConfig {
    /// Minimum significant segment length when flattening curves; zero
    /// for the finest resolution
    pub precision: f64,
    /// Drop points aligned with their neighbours
    pub simplify: bool,
    /// Scale factor applied to all geometry
    pub scale: f64,
    /// Rotation about the origin, in degrees
    pub rotate: f64,
    /// Offset added to all geometry, after scaling and rotation
    pub translate: Point,
    /// Output format (default text)
    pub format: OutputFormat,
    /// Only output the overall bounding box
    pub bbox_only: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            precision: 0.0,
            simplify: false,
            scale: 1.0,
            rotate: 0.0,
            translate: Point::default(),
            format: OutputFormat::default(),
            bbox_only: false,
        }
    }
}

impl ExtractConfig {
    /// Apply the configured scale, rotation and translation, in that order.
    pub fn apply<T: Transform>(&self, target: &mut T) {
        if self.scale != 1.0 {
            target.scale(self.scale);
        }
        if self.rotate != 0.0 {
            target.rotate(Angle::from_degrees(self.rotate));
        }
        if self.translate != Point::default() {
            target.translate(self.translate);
        }
    }
}

/// Parse SVG path data (the `d` attribute of a `<path>` element).
pub fn parse_path(data: &str) -> Result<Path> {
    Path::parse(data)
}

/// Transform `doc` as configured and write its extracted geometry to `writer`.
pub fn extract_document(
    doc: &mut Document,
    writer: &mut dyn Write,
    config: &ExtractConfig,
) -> Result<()> {
    config.apply(doc);
    Extract::new(doc, config).write_to(writer, config.format)
}

/// Reads an SVG document from the `reader` stream and writes the geometry
/// extracted from it to `writer`.
///
/// The entire stream is read before anything is written to `writer`.
pub fn extract_stream(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    config: &ExtractConfig,
) -> Result<()> {
    let mut doc = Document::from_reader(reader)?;
    extract_document(&mut doc, writer, config)
}

/// Extract geometry from an SVG document provided as a string, returning
/// the output as a string.
pub fn extract_str<T: AsRef<str>>(input: T, cfg: &ExtractConfig) -> Result<String> {
    let mut input = input.as_ref().as_bytes();
    let mut output: Vec<u8> = vec![];

    extract_stream(&mut input, &mut output, cfg)?;

    Ok(String::from_utf8(output)?)
}

/// Read file from `input` ('-' for stdin), extract its geometry, and write
/// to the file given by `output` ('-' for stdout).
#[cfg(feature = "cli")]
pub fn extract_file(input: &str, output: &str, cfg: &ExtractConfig) -> Result<()> {
    use std::io::{IsTerminal, Read};
    use tempfile::NamedTempFile;

    let mut doc = if input == "-" {
        let mut stdin = std::io::stdin().lock();
        if stdin.is_terminal() {
            // A single Ctrl-D is not always enough to end terminal input;
            // read all of it before parsing.
            let mut buf = Vec::new();
            stdin.read_to_end(&mut buf)?;
            Document::from_reader(&mut buf.as_slice())?
        } else {
            Document::from_reader(&mut stdin)?
        }
    } else {
        Document::from_file(input)?
    };

    if output == "-" {
        extract_document(&mut doc, &mut std::io::stdout(), cfg)?;
    } else {
        let mut out_temp = NamedTempFile::new()?;
        extract_document(&mut doc, &mut out_temp, cfg)?;
        // Copy content rather than rename (by .persist()) since this
        // could cross filesystems.
        std::fs::copy(out_temp.path(), output)?;
    }

    Ok(())
}

/// Return a 'minimal' representation of the given number
fn fstr(x: f64) -> String {
    if x == (x as i64) as f64 {
        return (x as i64).to_string();
    }
    let result = format!("{x:.3}");
    if result.contains('.') {
        let result = result.trim_end_matches('0').trim_end_matches('.');
        if result == "-0" {
            "0".into()
        } else {
            result.into()
        }
    } else {
        result
    }
}
