//! A generic pretty-printer for dynamic values.
//!
//! Output follows the conventions of Python's `pprint`: a value is written on one line when it fits
//! in the remaining width, otherwise a mapping is broken into one entry per line and a list into
//! one item per line, with continuation lines indented to just inside the opening bracket.

use prost_types::value::Kind;
use prost_types::{ListValue, Struct, Value};
use std::fmt::Write as _;
use std::io::{self, Write};

/// The default line width.
pub const DEFAULT_WIDTH: usize = 80;

/// A pretty-printer with a fixed line width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pretty {
    /// The width lines are kept within, where possible.
    width: usize,
}

impl Default for Pretty {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

impl Pretty {
    /// Create a pretty-printer keeping lines within `width` characters.
    #[inline]
    pub const fn new(width: usize) -> Self {
        Self { width }
    }

    /// Format `value`, without a trailing newline.
    pub fn format(&self, value: &Value) -> String {
        let mut out = String::new();
        self.format_into(value, 0, 0, &mut out);
        out
    }

    /// Write `value` followed by a newline.
    pub fn write_to<W>(&self, value: &Value, out: &mut W) -> io::Result<()>
    where
        W: Write + ?Sized,
    {
        writeln!(out, "{}", self.format(value))
    }

    /// Format `value` starting at column `indent`, leaving `allowance` columns free after it for
    /// closing brackets and separators.
    fn format_into(&self, value: &Value, indent: usize, allowance: usize, out: &mut String) {
        let rep = repr(value);
        let available = self.width.saturating_sub(1 + indent + allowance);
        if rep.chars().count() <= available {
            out.push_str(&rep);
            return;
        }

        match &value.kind {
            Some(Kind::StructValue(Struct { fields })) if !fields.is_empty() => {
                out.push('{');
                let indent = indent + 1;
                let last = fields.len() - 1;
                for (i, (key, value)) in fields.iter().enumerate() {
                    let key = repr_str(key);
                    out.push_str(&key);
                    out.push_str(": ");
                    let allowance = if i == last { allowance + 1 } else { 1 };
                    self.format_into(value, indent + key.chars().count() + 2, allowance, out);
                    if i != last {
                        push_break(out, indent);
                    }
                }
                out.push('}');
            }
            Some(Kind::ListValue(ListValue { values })) if !values.is_empty() => {
                out.push('[');
                let indent = indent + 1;
                let last = values.len() - 1;
                for (i, value) in values.iter().enumerate() {
                    let allowance = if i == last { allowance + 1 } else { 1 };
                    self.format_into(value, indent, allowance, out);
                    if i != last {
                        push_break(out, indent);
                    }
                }
                out.push(']');
            }
            _ => out.push_str(&rep),
        }
    }
}

/// End an entry and indent the next line to `indent`.
fn push_break(out: &mut String, indent: usize) {
    out.push_str(",\n");
    out.push_str(&" ".repeat(indent));
}

/// The single-line representation of a value.
pub fn repr(value: &Value) -> String {
    match &value.kind {
        None | Some(Kind::NullValue(_)) => "None".to_owned(),
        Some(Kind::BoolValue(true)) => "True".to_owned(),
        Some(Kind::BoolValue(false)) => "False".to_owned(),
        Some(Kind::NumberValue(number)) => repr_number(*number),
        Some(Kind::StringValue(string)) => repr_str(string),
        Some(Kind::StructValue(Struct { fields })) => {
            let entries: Vec<_> = fields
                .iter()
                .map(|(key, value)| format!("{}: {}", repr_str(key), repr(value)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        Some(Kind::ListValue(ListValue { values })) => {
            let items: Vec<_> = values.iter().map(repr).collect();
            format!("[{}]", items.join(", "))
        }
    }
}

/// Integral numbers are written without a fractional part.
fn repr_number(number: f64) -> String {
    /// The largest magnitude at which every integer is exactly representable.
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    if number.is_nan() {
        "nan".to_owned()
    } else if number.is_infinite() {
        let sign = if number < 0.0 { "-" } else { "" };
        format!("{sign}inf")
    } else if number.fract() == 0.0 && number.abs() <= MAX_EXACT {
        #[allow(clippy::cast_possible_truncation)]
        let integer = number as i64;
        integer.to_string()
    } else {
        format!("{number:?}")
    }
}

/// A quoted string. Single quotes are preferred unless the string contains one and no double quote.
fn repr_str(string: &str) -> String {
    let quote = if string.contains('\'') && !string.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(string.len() + 2);
    out.push(quote);
    for c in string.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_ascii_control() => {
                let _ignored = write!(out, "\\x{:02x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
