use anyhow::Result;
use std::path::Path;

use scangen::{config, generator};

fn main() -> Result<()> {
    generator::run(
        Path::new(config::INPUT_TABLE),
        Path::new(config::OUTPUT_ARRAY),
        Path::new(config::OUTPUT_PAIRS),
    )
}
