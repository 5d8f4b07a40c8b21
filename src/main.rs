// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::{io, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use corpus_profile::{app, args::Args, config::Config};

fn verbosity(count: u8) -> LevelFilter {
    match count {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn try_main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins over -v when set
    env_logger::Builder::new().filter_level(verbosity(args.verbose)).parse_default_env().init();

    let config = Config::try_from(args).context("invalid arguments")?;
    log::debug!("resolved configuration: {config:?}");

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    app::run(&config, &mut out)?;
    Ok(())
}

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
