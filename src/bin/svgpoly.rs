use svgpoly::Result;

use svgpoly::cli::{get_config, init_logging, run};

fn main() -> Result<()> {
    let config = get_config()?;
    init_logging(config.verbose);
    run(config)?;

    Ok(())
}
