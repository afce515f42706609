//! Turning an [`Invocation`] into remote calls.

use crate::args::{Invocation, Mode, Target};
use crate::conv::{optional_int_entry, optional_string_entry, IntoProtobufValue, Shape};
use crate::error::Error;
use crate::internal_macros::args;
use crate::invoke::Invoke;
use crate::render::Table;
use crate::tracing_shim::info;
use prost_types::{Struct, Value};

/// Describe a kind.
pub const KIND_INFO: &str = "kindInfo";
/// Run a single statement.
pub const S_QUERY: &str = "sQuery";
/// Run several statements.
pub const M_QUERY: &str = "mQuery";

/// The routing hint used when describing a kind's table.
const DESCRIBE_HINT_ID: i64 = 1;

/// One piece of output produced by a query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutput {
    /// A human-readable description of a kind.
    Detail(String),
    /// A result set drawn as an aligned table.
    Tabular(Table),
    /// Any other answer, shown as-is.
    Generic(Value),
}

/// The facets of a kind reported by `kindInfo`. Only the requested facets are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindInfo {
    /// The kind the information is about.
    pub kind: Option<String>,
    /// A human-readable description of the kind and where its tables live.
    pub detail: Option<String>,
    /// The revision of the kind's configuration.
    pub version: Option<i64>,
    /// How many tables the kind is sharded into.
    pub table_number: Option<i64>,
    /// The name of the column holding the sharding ID.
    pub xid_name: Option<String>,
}

impl KindInfo {
    /// Decode the answer to `kindInfo`.
    fn from_answer(answer: &Struct) -> Result<Self, Shape> {
        Ok(Self {
            kind: optional_string_entry(answer, "kind")?,
            detail: optional_string_entry(answer, "detail")?,
            version: optional_int_entry(answer, "version")?,
            table_number: optional_int_entry(answer, "tableNumber")?,
            xid_name: optional_string_entry(answer, "xidName")?,
        })
    }
}

/// Invoke the operations `invocation` calls for and collect what should be shown.
///
/// Describing a kind makes two calls, `kindInfo` followed by `sQuery` of `desc <kind>`; the other
/// modes make exactly one. A failed call ends the dispatch immediately.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(invoker)))]
pub async fn dispatch<I>(
    invoker: &mut I,
    invocation: &Invocation,
) -> Result<Vec<QueryOutput>, Error>
where
    I: Invoke + ?Sized,
{
    match invocation.mode() {
        Mode::Describe { kind } => {
            let info = kind_info(invoker, kind, vec!["detail"]).await?;
            let detail = info
                .detail
                .ok_or_else(|| Error::malformed(KIND_INFO, Shape::Missing("detail")))?;

            info!(kind, "describing table");
            let answer = invoker
                .invoke(
                    S_QUERY,
                    args! {
                        "kind" => kind,
                        "hintId" => DESCRIBE_HINT_ID,
                        "sql" => format!("desc {kind}"),
                    },
                )
                .await?;
            let table =
                Table::from_answer(&answer).map_err(|err| Error::malformed(S_QUERY, err))?;

            Ok(vec![QueryOutput::Detail(detail), QueryOutput::Tabular(table)])
        }
        Mode::Batch {
            target: Target { kind, hint_id },
            sql,
            extra_sqls,
        } => {
            let sqls: Vec<&str> = std::iter::once(sql)
                .chain(extra_sqls.iter().map(String::as_str))
                .collect();
            info!(kind, hint_id, count = sqls.len(), "running batch");
            let answer = invoker
                .invoke(
                    M_QUERY,
                    args! {
                        "kind" => kind.as_str(),
                        "hintId" => *hint_id,
                        "sqls" => sqls,
                        "convert" => true,
                    },
                )
                .await?;
            Ok(vec![QueryOutput::Generic(answer.into_protobuf_value())])
        }
        Mode::Single {
            target: Target { kind, hint_id },
            sql,
        } => {
            info!(kind, hint_id, "running query");
            let answer = invoker
                .invoke(
                    S_QUERY,
                    args! {
                        "kind" => kind.as_str(),
                        "hintId" => *hint_id,
                        "sql" => sql,
                        "convert" => true,
                    },
                )
                .await?;
            Ok(vec![QueryOutput::Generic(answer.into_protobuf_value())])
        }
    }
}

/// Ask for the given facets of `kind`.
///
/// Facets the service does not know are silently left out of the answer.
pub async fn kind_info<I>(
    invoker: &mut I,
    kind: &str,
    facets: Vec<&str>,
) -> Result<KindInfo, Error>
where
    I: Invoke + ?Sized,
{
    let answer = invoker
        .invoke(KIND_INFO, args! { "kind" => kind, "facets" => facets })
        .await?;
    KindInfo::from_answer(&answer).map_err(|err| Error::malformed(KIND_INFO, err))
}
