//! Markdown pipe-table rendering

/// Column alignment in a rendered table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Align {
    Left,
    Right,
}

/// Render a pipe table with padded cells and alignment markers
///
/// Every row must have as many cells as there are headers.
pub(crate) fn render_table(headers: &[String], aligns: &[Align], rows: &[Vec<String>]) -> String {
    let headers: Vec<String> = headers.iter().map(|h| escape_cell(h)).collect();
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|cell| escape_cell(cell)).collect())
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .map(|row| display_width(&row[i]))
                .chain(std::iter::once(display_width(header)))
                .max()
                .unwrap_or(0)
                .max(1)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_row(&headers, aligns, &widths));
    lines.push(render_separator(aligns, &widths));
    for row in &rows {
        lines.push(render_row(row, aligns, &widths));
    }
    lines.join("\n")
}

fn render_row(cells: &[String], aligns: &[Align], widths: &[usize]) -> String {
    let cells: Vec<String> = cells
        .iter()
        .zip(aligns)
        .zip(widths)
        .map(|((cell, align), width)| match align {
            Align::Left => format!(" {:<width$} ", cell, width = width),
            Align::Right => format!(" {:>width$} ", cell, width = width),
        })
        .collect();
    format!("|{}|", cells.join("|"))
}

fn render_separator(aligns: &[Align], widths: &[usize]) -> String {
    let cells: Vec<String> = aligns
        .iter()
        .zip(widths)
        .map(|(align, width)| match align {
            Align::Left => format!(":{}", "-".repeat(width + 1)),
            Align::Right => format!("{}:", "-".repeat(width + 1)),
        })
        .collect();
    format!("|{}|", cells.join("|"))
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

fn display_width(text: &str) -> usize {
    text.chars().count()
}
