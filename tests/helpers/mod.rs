use dbman_query::proto::{Answer, Quest};
use dbman_query::transitive::{transitive_proxy, Transitive};
use dbman_query::{InvokeRpc, Proxy, RpcResponse, ServiceAddress};
use prost_types::value::Kind;
use prost_types::{ListValue, Struct, Value};
use std::sync::{Arc, Mutex};
use tonic::{Request, Response, Status};

pub(crate) fn string(value: &str) -> Value {
    Value {
        kind: Some(Kind::StringValue(value.to_owned())),
    }
}

pub(crate) fn number(value: i32) -> Value {
    Value {
        kind: Some(Kind::NumberValue(value.into())),
    }
}

pub(crate) fn list(values: impl IntoIterator<Item = Value>) -> Value {
    Value {
        kind: Some(Kind::ListValue(ListValue {
            values: values.into_iter().collect(),
        })),
    }
}

pub(crate) fn strings<'a>(values: impl IntoIterator<Item = &'a str>) -> Value {
    list(values.into_iter().map(string))
}

pub(crate) fn map<'a>(entries: impl IntoIterator<Item = (&'a str, Value)>) -> Struct {
    Struct {
        fields: entries
            .into_iter()
            .map(|(key, value)| (key.to_owned(), value))
            .collect(),
    }
}

pub(crate) fn string_arg<'a>(args: &'a Struct, key: &str) -> Option<&'a str> {
    match args.fields.get(key)?.kind.as_ref()? {
        Kind::StringValue(value) => Some(value),
        _ => None,
    }
}

/// The detail the mock reports for every kind.
pub(crate) fn detail(kind: &str) -> String {
    format!("       kind = {kind}\n    enabled = true\ntableNumber = 16\n")
}

/// A stand-in for the DbMan service that records every quest it receives.
#[derive(Debug, Clone, Default)]
pub(crate) struct MockDbMan {
    quests: Arc<Mutex<Vec<Quest>>>,
}

impl MockDbMan {
    pub(crate) fn quests(&self) -> Vec<Quest> {
        self.quests.lock().unwrap().clone()
    }

    fn kind_info(args: &Struct) -> Result<Struct, Status> {
        let kind = string_arg(args, "kind").unwrap_or_default();
        if kind == "missing" {
            return Err(Status::not_found(format!(
                "No such kind({kind}) in DBSetting"
            )));
        }

        let mut answer = map([("kind", string(kind))]);
        let Some(Kind::ListValue(ListValue { values: facets })) =
            args.fields.get("facets").and_then(|facets| facets.kind.clone())
        else {
            return Err(Status::invalid_argument("facets must be a list"));
        };
        for facet in facets {
            let Some(Kind::StringValue(facet)) = facet.kind else {
                continue;
            };
            let value = match facet.as_str() {
                // a kind without a detail facet, to exercise malformed answers
                "detail" if kind == "bare" => continue,
                "detail" => string(&detail(kind)),
                "version" => number(4),
                "tableNumber" => number(16),
                "xidName" => string("uid"),
                _ => continue,
            };
            let _previous = answer.fields.insert(facet, value);
        }
        Ok(answer)
    }

    fn s_query(args: &Struct) -> Struct {
        let sql = string_arg(args, "sql").unwrap_or_default();
        if sql.starts_with("desc ") {
            map([
                ("fields", strings(["Field", "Type"])),
                (
                    "rows",
                    list([
                        strings(["id", "bigint(20)"]),
                        strings(["name", "varchar(32)"]),
                    ]),
                ),
            ])
        } else {
            map([
                ("affectedRowNumber", number(0)),
                ("fields", strings(["id", "name"])),
                ("rows", list([list([number(1), string("ann")])])),
            ])
        }
    }

    fn m_query(args: &Struct) -> Struct {
        let count = match args.fields.get("sqls").and_then(|sqls| sqls.kind.as_ref()) {
            Some(Kind::ListValue(ListValue { values })) => values.len(),
            _ => 0,
        };
        let results = (0..count).map(|i| {
            let i = i32::try_from(i).unwrap();
            Value {
                kind: Some(Kind::StructValue(map([
                    ("affectedRowNumber", number(0)),
                    ("fields", strings(["n"])),
                    ("rows", list([list([number(i)])])),
                ]))),
            }
        });
        map([("results", list(results))])
    }
}

#[tonic::async_trait]
impl InvokeRpc for MockDbMan {
    async fn invoke(&self, request: Request<Quest>) -> RpcResponse<Answer> {
        let quest = request.into_inner();
        self.quests.lock().unwrap().push(quest.clone());

        let args = quest.args.unwrap_or_default();
        let answer = match quest.method.as_str() {
            "kindInfo" => Self::kind_info(&args)?,
            "sQuery" => Self::s_query(&args),
            "mQuery" => Self::m_query(&args),
            method => {
                return Err(Status::unimplemented(format!(
                    "no such method `{method}`"
                )))
            }
        };
        Ok(Response::new(Answer { args: Some(answer) }))
    }
}

/// Serve a fresh mock in-process and connect a proxy to it.
pub(crate) async fn mock_proxy() -> anyhow::Result<(Transitive<Proxy>, MockDbMan)> {
    let mock = MockDbMan::default();
    let proxy = transitive_proxy(ServiceAddress::default(), mock.clone()).await?;
    Ok((proxy, mock))
}
