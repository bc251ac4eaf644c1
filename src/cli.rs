use clap::{ArgAction, Parser};
use std::path::Path;

use crate::errors::{Error, Result};
use crate::geometry::Point;
use crate::{extract_file, ExtractConfig, OutputFormat};

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about, long_about=None)] // Read from Cargo.toml
struct Arguments {
    /// SVG file to process ('-' for stdin)
    #[arg(default_value = "-")]
    file: String,

    /// Target output file ('-' for stdout)
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Minimum significant segment length when flattening curves
    ///
    /// Zero flattens every curve at the finest resolution.
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    precision: f64,

    /// Drop points aligned (within precision) with their neighbours
    #[arg(short, long)]
    simplify: bool,

    /// Scale factor applied to all geometry
    #[arg(long, default_value = "1.0", allow_hyphen_values = true)]
    scale: f64,

    /// Rotation about the origin, in degrees
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    rotate: f64,

    /// Offset applied after scaling and rotation, as 'x,y'
    #[arg(long, default_value = "0,0", allow_hyphen_values = true)]
    translate: String,

    /// Only output the overall bounding box
    #[arg(long)]
    bbox: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Increase logging verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Top-level configuration used by the `svgpoly` command-line process.
///
/// This is typically derived from command line arguments and passed to `run()`.
///
/// 'front-end' program settings (e.g. input/output filenames) are stored
/// directly in this struct. Per-extraction settings are stored in the
/// embedded `ExtractConfig` struct.
#[derive(Clone, Debug)]
pub struct Config {
    /// Path to input file, or '-' for stdin
    pub input_path: String,
    /// Path to output file, or '-' for stdout
    pub output_path: String,
    /// Number of `-v` flags given
    pub verbose: u8,
    /// extraction config options
    pub extract: ExtractConfig,
}

/// Parse an 'x,y' (or 'x y') pair into a `Point`.
fn parse_point(value: &str) -> Result<Point> {
    let parts: Vec<&str> = value.split([',', ' ']).filter(|s| !s.is_empty()).collect();
    match parts.as_slice() {
        [x, y] => Ok(Point::new(x.parse()?, y.parse()?)),
        _ => Err(Error::InvalidValue("point".into(), value.into())),
    }
}

impl Config {
    fn from_args(args: Arguments) -> Result<Self> {
        if args.file != "-" && args.output != "-" {
            // Refuse to overwrite the input with its own output
            let in_path = Path::new(&args.file);
            let out_path = Path::new(&args.output);
            if out_path.exists() && out_path.canonicalize()? == in_path.canonicalize()? {
                return Err(Error::Cli(
                    "Output path must not refer to the same file as the input file.".into(),
                ));
            }
        }
        if args.precision < 0. {
            return Err(Error::Cli("precision must not be negative".into()));
        }
        Ok(Self {
            input_path: args.file,
            output_path: args.output,
            verbose: args.verbose,
            extract: ExtractConfig {
                precision: args.precision,
                simplify: args.simplify,
                scale: args.scale,
                rotate: args.rotate,
                translate: parse_point(&args.translate)?,
                format: args.format,
                bbox_only: args.bbox,
            },
        })
    }

    /// Create a `Config` object set up given a command line string.
    ///
    /// The string is parsed using `shlex::split()`, so values containing
    /// spaces or quotes should be quoted or escaped appropriately.
    pub fn from_cmdline(args: &str) -> Result<Self> {
        let args = shlex::split(args).unwrap_or_default();
        let args = Arguments::try_parse_from(args.iter()).map_err(Error::from_err)?;
        Self::from_args(args)
    }
}

/// Create a `Config` object from process arguments.
pub fn get_config() -> Result<Config> {
    let args = Arguments::parse();
    Config::from_args(args)
}

/// Set up `env_logger`; `RUST_LOG` overrides the level from `-v` flags.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    // Ignore failure if a logger is already installed
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();
}

/// Run the `svgpoly` program with a given `Config`.
pub fn run(config: Config) -> Result<()> {
    extract_file(&config.input_path, &config.output_path, &config.extract)
}
