use crossterm::terminal;

use crate::cli::output::current_preferences;
use crate::storage::Records;

/// Narrowest a column is squeezed to when the terminal is too small.
const MIN_SHRUNK_WIDTH: usize = 8;

/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Specifies the configuration for a single column in the rendered table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub max_width: Option<usize>,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            max_width: None,
            alignment: Alignment::Left,
        }
    }
}

/// Represents a table with column metadata and rows of data to render.
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
    pub padding: usize,
}

impl Table {
    /// Builds a table over stored records. Columns holding only numbers are
    /// right aligned.
    pub fn from_records(records: &Records) -> Self {
        let columns = records
            .headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let numeric = !records.rows.is_empty()
                    && records
                        .rows
                        .iter()
                        .all(|row| row.get(idx).is_some_and(|cell| is_number(cell)));
                TableColumn {
                    alignment: if numeric {
                        Alignment::Right
                    } else {
                        Alignment::Left
                    },
                    ..TableColumn::new(header.clone())
                }
            })
            .collect();

        Self {
            columns,
            rows: records.rows.clone(),
            padding: 1,
        }
    }

    /// Caps column widths so the table fits in `total` characters where
    /// possible. Columns never drop below a readable minimum.
    pub fn fit_to_width(mut self, total: usize) -> Self {
        let natural = self.compute_widths();
        if table_width(&natural, self.padding) <= total || natural.is_empty() {
            return self;
        }
        let separators = natural.len().saturating_sub(1);
        let available = total
            .saturating_sub(separators)
            .saturating_sub(natural.len() * self.padding * 2);
        let share = (available / natural.len()).max(MIN_SHRUNK_WIDTH);
        for (column, width) in self.columns.iter_mut().zip(natural) {
            if width > share {
                column.max_width = Some(share);
            }
        }
        self
    }

    /// Fits the table to the current terminal when its size is known.
    pub fn fit_to_terminal(self) -> Self {
        match terminal::size() {
            Ok((cols, _)) if cols > 0 => self.fit_to_width(cols as usize),
            _ => self,
        }
    }

    /// Computes the content widths for each column based on headers, rows, and
    /// column constraints.
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = visible_width(&column.header);
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(visible_width(cell));
                    }
                }
                match column.max_width {
                    Some(max_width) => width.min(max_width),
                    None => width,
                }
            })
            .collect()
    }

    /// Renders a single row using the provided column widths.
    pub fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let rendered_cells: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let cell_text = row.get(idx).map(String::as_str).unwrap_or("");
                render_cell(cell_text, widths[idx], column.alignment, self.padding)
            })
            .collect();

        rendered_cells.join(" ").trim_end().to_string()
    }

    /// Renders headers, a rule and every row, without a trailing newline.
    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(self.render_row(&header, &widths));
        lines.push(horizontal_rule(&widths, self.padding));
        lines.extend(self.rows.iter().map(|row| self.render_row(row, &widths)));
        lines.join("\n")
    }
}

fn is_number(cell: &str) -> bool {
    let trimmed = cell.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok()
}

fn table_width(widths: &[usize], padding: usize) -> usize {
    widths.iter().map(|w| w + padding * 2).sum::<usize>() + widths.len().saturating_sub(1)
}

pub fn visible_width(text: &str) -> usize {
    text.chars().count()
}

fn truncate_text(text: &str, width: usize) -> String {
    if visible_width(text) <= width {
        return text.to_string();
    }
    match width {
        0 => String::new(),
        1 => "…".to_string(),
        _ => {
            let mut fitted: String = text.chars().take(width - 1).collect();
            fitted.push('…');
            fitted
        }
    }
}

/// Renders a single cell with padding and alignment applied.
pub fn render_cell(text: &str, width: usize, alignment: Alignment, padding: usize) -> String {
    let fitted = truncate_text(text, width);
    let remaining = width.saturating_sub(visible_width(&fitted));
    let pad = " ".repeat(padding);
    let fill = " ".repeat(remaining);

    match alignment {
        Alignment::Left => format!("{pad}{fitted}{fill}{pad}"),
        Alignment::Right => format!("{pad}{fill}{fitted}{pad}"),
    }
}

/// Builds a horizontal rule that spans the width of the table.
pub fn horizontal_rule(widths: &[usize], padding: usize) -> String {
    if widths.is_empty() {
        return String::new();
    }
    let ch = if current_preferences().plain_mode {
        '-'
    } else {
        '─'
    };
    ch.to_string().repeat(table_width(widths, padding))
}
