//! Text renderers for query results.

mod pretty;
mod table;

pub use self::pretty::{repr, Pretty, DEFAULT_WIDTH};
pub use self::table::Table;
use crate::dispatch::QueryOutput;
use std::io::{self, Write};

/// Write each output in order.
///
/// A detail string is followed by a blank line, a table is drawn with aligned columns, and any
/// other result is pretty-printed with `pretty`.
pub fn render<W>(outputs: &[QueryOutput], pretty: Pretty, out: &mut W) -> io::Result<()>
where
    W: Write + ?Sized,
{
    for output in outputs {
        match output {
            QueryOutput::Detail(detail) => {
                writeln!(out, "{detail}")?;
                writeln!(out)?;
            }
            QueryOutput::Tabular(table) => table.write_to(out)?,
            QueryOutput::Generic(value) => pretty.write_to(value, out)?,
        }
    }
    out.flush()
}
