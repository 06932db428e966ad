// src/bin/cli.rs
use clap::Parser;
use monster_scrape::{cli::{self, Cli}, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();
    log::init(args.verbose());

    let path = cli::run(&args)?;
    println!("Wrote {}", path.display());
    Ok(())
}
