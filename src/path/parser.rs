use log::{debug, warn};

use super::syntax::{PathSyntax, SvgPathSyntax};
use crate::constants::{CUBIC_MIRROR_INDEX, QUADRATIC_MIRROR_INDEX};
use crate::errors::{Error, Result};
use crate::geometry::Point;
use crate::primitives::{Bezier, Line, MoveTo, Primitive};

/// Which kind of curve a command emitted, used to decide whether a
/// following smooth command has a control point to reflect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CurveFamily {
    Cubic,
    Quadratic,
}

impl CurveFamily {
    fn mirror_index(self) -> usize {
        match self {
            Self::Cubic => CUBIC_MIRROR_INDEX,
            Self::Quadratic => QUADRATIC_MIRROR_INDEX,
        }
    }
}

struct PathParser {
    tokens: SvgPathSyntax,
    // current command, upper-cased; most commands take multiple parameter
    // sets without repeating the command character
    command: Option<char>,
    // whether the current command was given in upper case
    absolute: bool,
    // current pen position, updated as commands are processed
    position: Point,
    // location to return to for 'Z'/'z' commands
    subpath_start: Point,
    // family of the most recently emitted primitive, if it was a curve
    last_curve: Option<CurveFamily>,
    primitives: Vec<Primitive>,
}

impl PathParser {
    fn new(data: &str) -> Self {
        Self {
            tokens: SvgPathSyntax::new(data),
            command: None,
            absolute: true,
            position: Point::default(),
            subpath_start: Point::default(),
            last_curve: None,
            primitives: Vec::new(),
        }
    }

    /// Read a coordinate pair, resolved against the current position
    /// for relative commands.
    fn read_point(&mut self) -> Result<Point> {
        let pt = Point::from(self.tokens.read_coord()?);
        if self.absolute {
            Ok(pt)
        } else {
            Ok(self.position + pt)
        }
    }

    fn line_to(&mut self, end: Point) {
        self.primitives.push(Primitive::Line(Line::new(self.position, end)));
        self.position = end;
    }

    fn curve_to(&mut self, points: Vec<Point>) -> Result<()> {
        let end = points[points.len() - 1];
        self.primitives.push(Primitive::Bezier(Bezier::new(points)?));
        self.position = end;
        Ok(())
    }

    /// First control point of a smooth curve: the reflection of the previous
    /// curve's corresponding control point about the current position, or
    /// the current position itself if the previous command was not a curve
    /// of the same family.
    fn reflected_control_point(&self, family: CurveFamily) -> Result<Point> {
        if self.last_curve == Some(family) {
            if let Some(Primitive::Bezier(prev)) = self.primitives.last() {
                let cp = prev.control_point(family.mirror_index())?;
                return Ok(self.position * 2. - cp);
            }
        }
        Ok(self.position)
    }

    fn process_instruction(&mut self) -> Result<()> {
        if self.command.is_none() || self.tokens.at_command()? {
            let command = self.tokens.read_command()?;
            self.absolute = command.is_ascii_uppercase();
            self.command = Some(command.to_ascii_uppercase());
        }

        let mut emitted_curve = None;

        match self.command {
            Some('M') => {
                let pt = self.read_point()?;
                self.position = pt;
                self.subpath_start = pt;
                self.primitives.push(Primitive::MoveTo(MoveTo::new(pt)));
                // "If a moveto is followed by multiple pairs of coordinates,
                // the subsequent pairs are treated as implicit lineto commands."
                self.command = Some('L');
            }
            Some('Z') => {
                // pen stays at the closing point
                let start = self.subpath_start;
                self.primitives.push(Primitive::Line(Line::new(self.position, start)));
                // since this doesn't consume further tokens, we must clear the command
                // to force getting a new command token, or we could loop forever
                self.command = None;
            }
            Some('L') => {
                let end = self.read_point()?;
                self.line_to(end);
            }
            Some('H') => {
                let x = self.tokens.read_number()?;
                let end = if self.absolute {
                    Point::new(x, self.position.y)
                } else {
                    self.position + Point::new(x, 0.)
                };
                self.line_to(end);
            }
            Some('V') => {
                let y = self.tokens.read_number()?;
                let end = if self.absolute {
                    Point::new(self.position.x, y)
                } else {
                    self.position + Point::new(0., y)
                };
                self.line_to(end);
            }
            Some('C') => {
                // (x1 y1 x2 y2 x y)+
                let cp1 = self.read_point()?;
                let cp2 = self.read_point()?;
                let end = self.read_point()?;
                self.curve_to(vec![self.position, cp1, cp2, end])?;
                emitted_curve = Some(CurveFamily::Cubic);
            }
            Some('Q') => {
                // (x1 y1 x y)+
                let cp = self.read_point()?;
                let end = self.read_point()?;
                self.curve_to(vec![self.position, cp, end])?;
                emitted_curve = Some(CurveFamily::Quadratic);
            }
            Some('S') => {
                // (x2 y2 x y)+
                let cp1 = self.reflected_control_point(CurveFamily::Cubic)?;
                let cp2 = self.read_point()?;
                let end = self.read_point()?;
                self.curve_to(vec![self.position, cp1, cp2, end])?;
                emitted_curve = Some(CurveFamily::Cubic);
            }
            Some('T') => {
                // (x y)+
                let cp = self.reflected_control_point(CurveFamily::Quadratic)?;
                let end = self.read_point()?;
                self.curve_to(vec![self.position, cp, end])?;
                emitted_curve = Some(CurveFamily::Quadratic);
            }
            Some('A') => {
                // (rx ry x-axis-rotation large-arc-flag sweep-flag x y)+
                self.tokens.read_non_negative()?;
                self.tokens.read_non_negative()?;
                self.tokens.read_number()?;
                self.tokens.read_flag()?;
                self.tokens.read_flag()?;
                // pen does not move
                let end = Point::from(self.tokens.read_coord()?);
                warn!("elliptical arc to {end} is not supported; no geometry emitted");
            }
            other => Err(Error::InvalidValue(
                "path command".to_string(),
                other.map(String::from).unwrap_or_default(),
            ))?,
        }
        self.last_curve = emitted_curve;
        Ok(())
    }

    fn evaluate(mut self) -> Result<Vec<Primitive>> {
        self.tokens.skip_wsp_comma();
        while !self.tokens.at_end() {
            self.process_instruction()?;
        }
        Ok(self.primitives)
    }
}

/// Parse path data into the primitives it draws, in order.
///
/// Any error aborts the whole parse; no partial result is returned.
pub fn parse_primitives(data: &str) -> Result<Vec<Primitive>> {
    let primitives = PathParser::new(data).evaluate()?;
    debug!("parsed {} primitives from path data", primitives.len());
    Ok(primitives)
}
