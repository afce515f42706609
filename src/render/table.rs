//! Fixed-width tables.

use crate::conv::{list_entry, strings, Shape};
use prost_types::Struct;
use std::io::{self, Write};

/// A result set of column names and rows of string cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// The column names.
    pub fields: Vec<String>,
    /// The rows, each with one cell per column.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Decode a table from the `fields` and `rows` entries of an answer.
    pub(crate) fn from_answer(answer: &Struct) -> Result<Self, Shape> {
        let fields = strings(list_entry(answer, "fields")?, "fields")?;
        let rows = list_entry(answer, "rows")?
            .iter()
            .map(|row| match &row.kind {
                Some(prost_types::value::Kind::ListValue(row)) => strings(&row.values, "rows"),
                _ => Err(Shape::Mismatch("rows", "a list of lists")),
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { fields, rows })
    }

    /// The width of each column: the longest of its name and its cells, in characters.
    ///
    /// Cells beyond the last column are ignored.
    pub fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<_> = self
            .fields
            .iter()
            .map(|field| field.chars().count())
            .collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    /// Write the table: header, rule, one line per row, rule.
    ///
    /// Every cell is left-justified within its column and padded by one space on each side.
    /// Adjacent cells are separated by one space, which lines up with the gaps in the rule. Missing
    /// cells in a short row are left blank.
    pub fn write_to<W>(&self, out: &mut W) -> io::Result<()>
    where
        W: Write + ?Sized,
    {
        let widths = self.widths();
        let rule: String = widths
            .iter()
            .map(|&width| format!("{} ", "-".repeat(width + 2)))
            .collect();

        write_line(out, &widths, &self.fields)?;
        writeln!(out, "{rule}")?;
        for row in &self.rows {
            write_line(out, &widths, row)?;
        }
        writeln!(out, "{rule}")?;
        Ok(())
    }
}

/// Write a single line of cells.
fn write_line<W>(out: &mut W, widths: &[usize], cells: &[String]) -> io::Result<()>
where
    W: Write + ?Sized,
{
    for (i, &width) in widths.iter().enumerate() {
        if i > 0 {
            out.write_all(b" ")?;
        }
        let cell = cells.get(i).map_or("", String::as_str);
        write!(out, " {cell:<width$} ")?;
    }
    writeln!(out)
}

#[cfg(test)]
mod test {
    use super::*;

    fn table(fields: &[&str], rows: &[&[&str]]) -> Table {
        Table {
            fields: fields.iter().map(|&field| field.to_owned()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|&cell| cell.to_owned()).collect())
                .collect(),
        }
    }

    fn render(table: &Table) -> String {
        let mut out = Vec::new();
        table.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_widths() {
        let table = table(
            &["Field", "Type", "Null"],
            &[&["id", "bigint(20)", "NO"], &["name", "varchar(32)", "YES"]],
        );
        assert_eq!(table.widths(), [5, 11, 4]);
    }

    #[test]
    fn test_render() {
        let table = table(
            &["Field", "Type"],
            &[&["id", "bigint(20)"], &["nickname", "text"]],
        );
        assert_eq!(
            render(&table),
            concat!(
                " Field      Type       \n",
                "---------- ------------ \n",
                " id         bigint(20) \n",
                " nickname   text       \n",
                "---------- ------------ \n",
            )
        );
    }

    #[test]
    fn test_render_layout() {
        let table = table(
            &["a", "bb", "c"],
            &[&["xxxx", "", "yy"], &["", "zzzzzz", ""], &["é", "ü", "ñ"]],
        );
        let rendered = render(&table);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), table.rows.len() + 3);

        let rule = lines[1];
        assert_eq!(lines.last(), Some(&rule));
        assert_eq!(rule, "------ -------- ---- ");

        for line in [lines[0], lines[2], lines[3], lines[4]] {
            assert_eq!(line.chars().count() + 1, rule.chars().count());
        }
        assert_eq!(lines[4], " é      ü        ñ  ");
    }

    #[test]
    fn test_short_row() {
        let table = table(&["a", "b"], &[&["1"]]);
        assert_eq!(
            render(&table),
            concat!(" a   b \n", "--- --- \n", " 1     \n", "--- --- \n")
        );
    }

    #[test]
    fn test_empty_rows() {
        let table = table(&["count"], &[]);
        assert_eq!(render(&table), concat!(" count \n", "------- \n", "------- \n"));
    }
}
