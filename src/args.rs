//! Resolution of the positional query arguments.
//!
//! Three forms are accepted:
//!
//! - `<kind>`: describe the kind.
//! - `<id> <sql> [<sql> ...]`: query with an empty kind. The first argument is taken as an ID
//!   whenever it starts with a digit or `-`.
//! - `<kind> <id> <sql> [<sql> ...]`: query a kind.
//!
//! A kind that itself starts with a digit or `-` is therefore read as an ID.

use std::num::ParseIntError;

/// An error resolving the positional arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    /// Too few arguments were given.
    #[error("not enough arguments")]
    Usage,
    /// The ID was not a signed integer.
    #[error("invalid id `{value}`: {source}")]
    InvalidId {
        /// The argument that was expected to be an ID.
        value: String,
        /// Why it could not be parsed.
        source: ParseIntError,
    },
}

/// Which logical table the service should route a query to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Target {
    /// The logical table or shard category. May be empty.
    pub kind: String,
    /// The routing hint accompanying the query.
    pub hint_id: i64,
}

/// The fully resolved positional arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Where the query is routed.
    pub target: Target,
    /// The first SQL statement. Empty when describing a kind.
    pub sql: String,
    /// Any SQL statements following the first.
    pub extra_sqls: Vec<String>,
}

/// What an [`Invocation`] asks the service to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode<'a> {
    /// Describe a kind and the layout of its table.
    Describe {
        /// The kind to describe.
        kind: &'a str,
    },
    /// Run several statements in one `mQuery`.
    Batch {
        /// Where the statements are routed.
        target: &'a Target,
        /// The first statement.
        sql: &'a str,
        /// The remaining statements, never empty.
        extra_sqls: &'a [String],
    },
    /// Run one statement in one `sQuery`.
    Single {
        /// Where the statement is routed.
        target: &'a Target,
        /// The statement.
        sql: &'a str,
    },
}

impl Invocation {
    /// Select the mode of this invocation. An empty first statement always means describe, even
    /// if more statements follow it.
    pub fn mode(&self) -> Mode<'_> {
        if self.sql.is_empty() {
            Mode::Describe {
                kind: &self.target.kind,
            }
        } else if self.extra_sqls.is_empty() {
            Mode::Single {
                target: &self.target,
                sql: &self.sql,
            }
        } else {
            Mode::Batch {
                target: &self.target,
                sql: &self.sql,
                extra_sqls: &self.extra_sqls,
            }
        }
    }
}

/// Parse an ID, remembering the argument on failure.
fn parse_id(value: &str) -> Result<i64, ArgsError> {
    value.parse().map_err(|source| ArgsError::InvalidId {
        value: value.to_owned(),
        source,
    })
}

/// Resolve the positional arguments, excluding the program name.
pub fn resolve<S>(args: &[S]) -> Result<Invocation, ArgsError>
where
    S: AsRef<str>,
{
    let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();

    match args.as_slice() {
        [] => Err(ArgsError::Usage),
        [kind] => Ok(Invocation {
            target: Target {
                kind: (*kind).to_owned(),
                hint_id: 0,
            },
            ..Invocation::default()
        }),
        [id, sql, extra @ ..] if id.starts_with(|c: char| c.is_ascii_digit() || c == '-') => {
            Ok(Invocation {
                target: Target {
                    kind: String::new(),
                    hint_id: parse_id(id)?,
                },
                sql: (*sql).to_owned(),
                extra_sqls: extra.iter().map(|&sql| sql.to_owned()).collect(),
            })
        }
        [_, _] => Err(ArgsError::Usage),
        [kind, id, sql, extra @ ..] => Ok(Invocation {
            target: Target {
                kind: (*kind).to_owned(),
                hint_id: parse_id(id)?,
            },
            sql: (*sql).to_owned(),
            extra_sqls: extra.iter().map(|&sql| sql.to_owned()).collect(),
        }),
    }
}

/// The usage text printed when the arguments cannot be resolved.
pub fn usage(program: &str) -> String {
    format!(
        "usage: {program} <kind> <id> <sql> ...\n\
         usage: {program} <id> <sql> ...\n\
         usage: {program} <kind>\n"
    )
}
