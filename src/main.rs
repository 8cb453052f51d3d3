#![doc = include_str!("../README.md")]

mod cli;
mod core;
mod page;
mod prelude;
mod quantity;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, estimate},
    prelude::*,
    tables::build_packages_table,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let constants = args.constants.load()?;

    match args.command {
        Command::Estimate(args) => {
            estimate(&args, &constants)?;
        }
        Command::Packages => {
            println!("{}", build_packages_table(&constants.packages));
        }
        Command::Constants(output) => {
            output.emit(&constants.to_toml()?)?;
        }
    }

    info!("done!");
    Ok(())
}
