mod cmdline;
mod parse_path;
mod segments;
mod simplify;
mod transform;
mod utils;
