//! Command-line interface for `dbq`.

use clap::Parser;
use dbman_query::render::DEFAULT_WIDTH;
use dbman_query::{ServiceAddress, DEFAULT_SERVICE_ADDRESS};

/// Query a DbMan service and print the result.
///
/// With only a kind, the kind's detail and table layout are shown. With one statement the answer
/// to `sQuery` is printed; with several, the answer to `mQuery`. A first argument starting with a
/// digit or `-` is taken as the routing ID, and the kind is left empty. The tool's own options
/// (`-e`, `-w`, `-h`, `-V`) are still recognized in that position.
#[derive(Debug, Parser)]
#[command(name = "dbq", version, propagate_version = true)]
pub(crate) struct Args {
    /// The service to query, as `<service>@[<transport>:]<host>:<port>`.
    #[arg(short, long, default_value = DEFAULT_SERVICE_ADDRESS)]
    pub(crate) endpoint: ServiceAddress,
    /// The width within which results are pretty-printed.
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub(crate) width: usize,
    /// `<kind>`, `<id> <sql> [<sql>...]`, or `<kind> <id> <sql> [<sql>...]`.
    // Hyphenated values reach `args::resolve`, which reports a bad ID itself.
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub(crate) args: Vec<String>,
}
