//! A command-line tool for querying a DbMan service.
//!
//! For usage, run `cargo run -- --help`.

mod cli;

use crate::cli::Args;
use clap::Parser as _;
use dbman_query::args::{self, ArgsError};
use dbman_query::render::{self, Pretty};
use dbman_query::{dispatch, Invocation, Proxy, ServiceAddress};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let Args {
        endpoint,
        width,
        args: positional,
    } = Args::parse();

    // Logs go to stderr so that stdout carries only results.
    let _ignored = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_filter(EnvFilter::from_default_env()),
        )
        .try_init();

    let invocation = match args::resolve(&positional) {
        Ok(invocation) => invocation,
        Err(err) => {
            if matches!(err, ArgsError::InvalidId { .. }) {
                eprintln!("{err}");
            }
            eprint!("{}", args::usage("dbq"));
            return Ok(ExitCode::FAILURE);
        }
    };

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(endpoint, invocation, Pretty::new(width)))
}

/// Query the service at `endpoint` and write the results to stdout.
///
/// If no proxy can be resolved for `endpoint`, nothing is written and the process fails. Errors
/// reported by the service are returned.
async fn run(
    endpoint: ServiceAddress,
    invocation: Invocation,
    pretty: Pretty,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let Ok(mut proxy) = Proxy::resolve(&endpoint).await else {
        return Ok(ExitCode::FAILURE);
    };
    let outputs = dispatch(&mut proxy, &invocation).await?;
    drop(proxy);

    render::render(&outputs, pretty, &mut io::stdout().lock())?;
    Ok(ExitCode::SUCCESS)
}
