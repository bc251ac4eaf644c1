//! Constants used throughout svgpoly

/// Every command letter of the path data mini-language
pub const PATH_COMMANDS: &str = "MmZzLlHhVvCcSsQqTtAa";

/// Fewest points a Bezier curve is ever flattened to
pub const MIN_BEZIER_STEPS: usize = 10;
/// Most points a Bezier curve is ever flattened to; also the step count
/// used when no precision is given
pub const MAX_BEZIER_STEPS: usize = 1000;

/// Control point mirrored by a smooth cubic (`S`/`s`) command
pub const CUBIC_MIRROR_INDEX: usize = 2;
/// Control point mirrored by a smooth quadratic (`T`/`t`) command
pub const QUADRATIC_MIRROR_INDEX: usize = 1;
