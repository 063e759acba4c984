/// Width limit and color switch for [`render_entity_table`].
#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 6;
const GAP: &str = "  ";
const ELLIPSIS: char = '…';

struct Column<'a> {
    header: &'a str,
    width: usize,
}

impl Column<'_> {
    /// Narrowest a column may get while shrinking.
    fn floor(&self) -> usize {
        self.header.chars().count().max(MIN_COLUMN)
    }
}

/// Render an aligned table for string rows.
///
/// Columns shrink (widest first, never below the header) until the table fits
/// `max_width`; cut cells end in an ellipsis. Numbers and dates align right.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut columns: Vec<Column<'_>> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let widest_cell = rows
                .iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0);
            let column = Column { header, width: 0 };
            Column {
                width: widest_cell.max(column.floor()),
                ..column
            }
        })
        .collect();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut columns, max_width);
    }

    let header_line = columns
        .iter()
        .map(|column| pad(&clip(column.header, column.width), column.width, false))
        .collect::<Vec<_>>()
        .join(GAP);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line.clone());
    lines.push("-".repeat(header_line.chars().count()));

    for row in rows {
        let cells = columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                let text = clip(row.get(index).map_or("-", String::as_str), column.width);
                let right = looks_numeric(&text);
                let padded = pad(&text, column.width, right);
                if options.color {
                    colorize_status(&padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>();
        lines.push(cells.join(GAP));
    }

    lines.join("\n")
}

fn total_width(columns: &[Column<'_>]) -> usize {
    columns.iter().map(|column| column.width).sum::<usize>()
        + GAP.len() * columns.len().saturating_sub(1)
}

/// Take one character at a time from the widest shrinkable column.
fn shrink_to_fit(columns: &mut [Column<'_>], max_width: usize) {
    while total_width(columns) > max_width {
        let widest = columns
            .iter_mut()
            .filter(|column| column.width > column.floor())
            .max_by_key(|column| column.width);
        match widest {
            Some(column) => column.width -= 1,
            None => break,
        }
    }
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut clipped: String = value.chars().take(width.saturating_sub(1)).collect();
    clipped.push(ELLIPSIS);
    clipped
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.chars().any(|ch| ch.is_ascii_digit())
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

/// Wrap a padded cell in an ANSI color when its word is a known status.
fn colorize_status(cell: &str) -> String {
    let code = match cell.trim().to_ascii_lowercase().as_str() {
        "completed" | "true" => "32",
        "in-progress" | "scheduled" => "33",
        "not-started" | "false" => "90",
        "advanced" | "overdue" => "31",
        _ => return cell.to_string(),
    };
    format!("\u{1b}[{code}m{cell}\u{1b}[0m")
}

#[cfg(test)]
fn strip_ansi(value: &str) -> String {
    let mut plain = String::with_capacity(value.len());
    let mut in_escape = false;
    for ch in value.chars() {
        match (in_escape, ch) {
            (false, '\u{1b}') => in_escape = true,
            (true, 'm') => in_escape = false,
            (true, _) => {}
            (false, _) => plain.push(ch),
        }
    }
    plain
}

#[cfg(test)]
mod tests {
    use super::{TableOptions, clip, colorize_status, render_entity_table, strip_ansi};

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn header_divider_and_rows_align() {
        let headers = ["id", "status", "title"];
        let rows = vec![
            vec!["1".to_string(), "completed".to_string(), "HTML & CSS".to_string()],
            vec![
                "1767225600000-0-3".to_string(),
                "in-progress".to_string(),
                "JavaScript".to_string(),
            ],
        ];

        let table = render_entity_table(&headers, &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2].find("completed"), lines[3].find("in-progress"));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let headers = ["id", "description"];
        let rows = vec![vec![
            "1".to_string(),
            "Semantic markup, flexbox, grid and responsive layouts".to_string(),
        ]];
        let table = render_entity_table(
            &headers,
            &rows,
            TableOptions {
                max_width: Some(30),
                color: false,
            },
        );
        assert!(table.lines().all(|line| line.chars().count() <= 30));
        assert!(table.contains('…'));
    }

    #[test]
    fn non_ascii_cells_pad_by_characters() {
        let rows = vec![vec!["Питон".to_string()], vec!["Go".to_string()]];
        let table = render_entity_table(&["title"], &rows, PLAIN);
        let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();
        assert_eq!(widths[2], widths[3]);
    }

    #[test]
    fn statuses_get_colors_that_strip_cleanly() {
        let colored = colorize_status("completed");
        assert!(colored.starts_with("\u{1b}[32m"));
        assert_eq!(strip_ansi(&colored), "completed");
        assert_eq!(colorize_status("Rust"), "Rust");
    }

    #[test]
    fn clipping_keeps_width() {
        assert_eq!(clip("abcdef", 4), "abc…");
        assert_eq!(clip("abc", 4), "abc");
    }
}
