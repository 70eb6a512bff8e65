//! Fixed-width table rendering for the roster.

use std::fmt;

use super::store::Staff;

const INDEX_WIDTH: usize = 4;
const NAME_WIDTH: usize = 30;
const POST_WIDTH: usize = 20;
const YEAR_WIDTH: usize = 8;

fn border() -> String {
    format!(
        "+-{}-+-{}-+-{}-+-{}-+",
        "-".repeat(INDEX_WIDTH),
        "-".repeat(NAME_WIDTH),
        "-".repeat(POST_WIDTH),
        "-".repeat(YEAR_WIDTH)
    )
}

impl Staff {
    /// Renders the roster as a fixed-width text table.
    ///
    /// Columns are the 1-based index, name, post and joining year. Headers
    /// are centered; the index and year are right-aligned, name and post
    /// left-aligned. Border lines bracket the header and the body.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Staff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = border();
        writeln!(f, "{line}")?;
        writeln!(
            f,
            "| {:^INDEX_WIDTH$} | {:^NAME_WIDTH$} | {:^POST_WIDTH$} | {:^YEAR_WIDTH$} |",
            "№", "Ф.И.О.", "Должность", "Год"
        )?;
        writeln!(f, "{line}")?;

        for (idx, worker) in self.workers.iter().enumerate() {
            writeln!(
                f,
                "| {:>INDEX_WIDTH$} | {:<NAME_WIDTH$} | {:<POST_WIDTH$} | {:>YEAR_WIDTH$} |",
                idx + 1,
                worker.name,
                worker.post,
                worker.year
            )?;
        }

        write!(f, "{line}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_roster_renders_header_only() {
        let staff = Staff::new();
        let rendered = staff.render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], border());
        assert_eq!(lines[2], border());
        assert!(lines[1].contains("Ф.И.О."));
        assert!(lines[1].contains("Должность"));
    }

    #[test]
    fn test_rows_are_indexed_from_one() {
        let mut staff = Staff::new();
        staff.add("Ivanov I. I.", "engineer", 2015);
        staff.add("Petrov P. P.", "manager", 2020);

        let rendered = staff.render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[3].starts_with("|    1 | Ivanov I. I."));
        assert!(lines[4].starts_with("|    2 | Petrov P. P."));
    }

    #[test]
    fn test_columns_are_padded_to_fixed_widths() {
        let mut staff = Staff::new();
        staff.add("A", "b", 2020);

        let rendered = staff.render();
        let row = rendered.lines().nth(3).unwrap();

        assert_eq!(
            row,
            format!(
                "| {:>4} | {:<30} | {:<20} | {:>8} |",
                1, "A", "b", 2020
            )
        );
    }

    #[test]
    fn test_body_is_bracketed_by_border_lines() {
        let mut staff = Staff::new();
        staff.add("Ivanov I. I.", "engineer", 2015);

        let rendered = staff.render();
        let lines: Vec<&str> = rendered.lines().collect();
        let line = border();

        assert_eq!(lines[0], line);
        assert_eq!(lines[2], line);
        assert_eq!(*lines.last().unwrap(), line);
    }
}
