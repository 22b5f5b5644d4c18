//! CLI entry point for the glade map generation tool

use clap::Parser;
use glademap::io::cli::{Cli, MapBatch};

fn main() -> glademap::Result<()> {
    let cli = Cli::parse();
    let mut batch = MapBatch::new(cli);
    batch.process()
}
