//! # Table Printer
//!
//! Fixed-width text tables appended to a caller-owned buffer.
//!
//! ```text
//! +------------+-------+
//! | 8592356245 | Eric  |     ← row(["8592356245", "Eric"])
//! +------------+-------+     ← line()
//! |            |       |
//! +============+=======+     ← double_line()
//! ```
//!
//! Cells are padded to the column width and never truncated. Missing cells
//! render blank; cells past the last column are dropped.

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// Width and alignment of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub width: usize,
    pub align: Align,
}

impl Column {
    pub const fn left(width: usize) -> Self {
        Column {
            width,
            align: Align::Left,
        }
    }

    pub const fn right(width: usize) -> Self {
        Column {
            width,
            align: Align::Right,
        }
    }

    fn pad(&self, cell: &str) -> String {
        match self.align {
            Align::Left => format!("{:<w$}", cell, w = self.width),
            Align::Right => format!("{:>w$}", cell, w = self.width),
        }
    }
}

/// Appends table rows and separator lines to a buffer.
///
/// ## Example
/// ```rust
/// use bestell_core::table::{Column, TablePrinter};
///
/// let mut out = String::from("Bestellungen:\n");
/// TablePrinter::new(&mut out, [Column::left(4), Column::right(5)])
///     .row(["id", "total"])
///     .line();
/// assert_eq!(out, "Bestellungen:\n| id   | total |\n+------+-------+\n");
/// ```
#[derive(Debug)]
pub struct TablePrinter<'a> {
    out: &'a mut String,
    columns: Vec<Column>,
}

impl<'a> TablePrinter<'a> {
    pub fn new(out: &'a mut String, columns: impl Into<Vec<Column>>) -> Self {
        TablePrinter {
            out,
            columns: columns.into(),
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Appends one row.
    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = cells.into_iter();
        for column in &self.columns {
            let cell = cells.next();
            let text: &str = cell.as_ref().map_or("", |c| c.as_ref());
            self.out.push_str("| ");
            self.out.push_str(&column.pad(text));
            self.out.push(' ');
        }
        self.out.push_str("|\n");
        self
    }

    /// Appends a `+---+` separator.
    pub fn line(&mut self) -> &mut Self {
        self.separator('-')
    }

    /// Appends a `+===+` separator.
    pub fn double_line(&mut self) -> &mut Self {
        self.separator('=')
    }

    fn separator(&mut self, fill: char) -> &mut Self {
        self.out.push('+');
        for column in &self.columns {
            self.out.extend(std::iter::repeat(fill).take(column.width + 2));
            self.out.push('+');
        }
        self.out.push('\n');
        self
    }
}
