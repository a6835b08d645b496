use std::borrow::Cow;

const COLUMN_GAP: &str = "  ";
const HEADER_RULE: char = '-';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Plain-text table with one header line, a dashed rule and aligned cells.
pub struct TextTable<'a> {
    columns: Vec<(&'a str, Alignment)>,
    rows: Vec<Vec<Cow<'a, str>>>,
}

impl<'a> TextTable<'a> {
    pub fn new(columns: impl IntoIterator<Item = (&'a str, Alignment)>) -> Self {
        Self {
            columns: columns.into_iter().collect(),
            rows: Vec::new(),
        }
    }

    /// Missing trailing cells render blank; extra cells are dropped.
    pub fn push_row(&mut self, cells: impl IntoIterator<Item = Cow<'a, str>>) {
        let row = cells.into_iter().take(self.columns.len()).collect();
        self.rows.push(row);
    }

    /// Every line ends with `\n` and has no trailing spaces.
    pub fn render(&self) -> String {
        if self.columns.is_empty() {
            return String::new();
        }

        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|(header, _)| text_width(header))
            .collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(text_width(cell));
            }
        }

        let mut out = String::new();
        let headers: Vec<&str> = self.columns.iter().map(|(header, _)| *header).collect();
        self.push_line(&mut out, &headers, &widths);
        let rules: Vec<String> = widths
            .iter()
            .map(|&width| HEADER_RULE.to_string().repeat(width))
            .collect();
        let rules: Vec<&str> = rules.iter().map(String::as_str).collect();
        self.push_line(&mut out, &rules, &widths);
        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(AsRef::as_ref).collect();
            self.push_line(&mut out, &cells, &widths);
        }
        out
    }

    fn push_line(&self, out: &mut String, cells: &[&str], widths: &[usize]) {
        let mut line = String::new();
        for (i, (&width, &(_, alignment))) in widths.iter().zip(&self.columns).enumerate() {
            if i > 0 {
                line.push_str(COLUMN_GAP);
            }
            let cell = cells.get(i).copied().unwrap_or("");
            let padding = " ".repeat(width.saturating_sub(text_width(cell)));
            match alignment {
                Alignment::Left => {
                    line.push_str(cell);
                    line.push_str(&padding);
                }
                Alignment::Right => {
                    line.push_str(&padding);
                    line.push_str(cell);
                }
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
}

// Wide (non-ASCII) characters take two terminal columns.
fn text_width(text: &str) -> usize {
    text.chars()
        .map(|c| if c.is_ascii() { 1 } else { 2 })
        .sum()
}
