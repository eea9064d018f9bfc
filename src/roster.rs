use core::fmt;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::Student;

static SEL_TBODY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tbody").unwrap());
static SEL_TR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static SEL_TD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());

/// Cells per roster row: a leading photo/checkbox column plus six fields.
const CELLS: usize = 7;

#[derive(Debug, PartialEq, Eq)]
pub enum RosterError {
    /// The page has no table body. Tabula leaves the table out entirely when
    /// a year has no students yet.
    NoStudents,
    MalformedRow { row: usize, cells: usize },
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoStudents => f.write_str("couldn't find students. try setting a year earlier"),
            Self::MalformedRow { row, cells } => {
                write!(f, "roster row {row} has {cells} cells, expected {CELLS}")
            }
        }
    }
}

impl core::error::Error for RosterError {}

fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<String>().trim().to_owned()
}

/// Parses the first table body of a roster page, one student per row.
pub fn parse_roster(html: &str) -> Result<Vec<Student>, RosterError> {
    let document = Html::parse_document(html);

    let tbody = document
        .select(&SEL_TBODY)
        .next()
        .ok_or(RosterError::NoStudents)?;

    tbody
        .select(&SEL_TR)
        .enumerate()
        .map(|(row, tr)| {
            let mut cells = tr.select(&SEL_TD).map(cell_text).collect::<Vec<_>>();
            let count = cells.len();
            cells.truncate(CELLS);
            let Ok([_, first_name, last_name, id, kind, year, course]) =
                <[String; CELLS]>::try_from(cells)
            else {
                return Err(RosterError::MalformedRow { row, cells: count });
            };

            Ok(Student {
                first_name: first_name.into(),
                last_name: last_name.into(),
                id: id.into(),
                kind: kind.into(),
                year: year.into(),
                course,
                pronouns: None,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(rows: &str) -> String {
        format!(
            r#"<html><body><table class="table students">
            <thead><tr><th></th><th>First name</th><th>Last name</th><th>ID</th><th>Type</th><th>Year</th><th>Course</th></tr></thead>
            <tbody>{rows}</tbody>
            </table></body></html>"#
        )
    }

    const ADA: &str = r#"<tr>
        <td><img src="/photo/1"></td>
        <td>Ada</td><td>Lovelace</td><td>1815001</td><td>UG</td><td>2</td>
        <td><a href="/course/G100">G100 Mathematics</a></td>
    </tr>"#;

    const ALAN: &str = r"<tr>
        <td></td><td> Alan </td><td>Turing</td><td>1912001</td><td>PGR</td><td>1</td><td>P-G1P0 Maths (PhD)</td>
    </tr>";

    #[test]
    fn rows_become_students_in_order() {
        let students = parse_roster(&page(&format!("{ADA}{ALAN}"))).unwrap();

        assert_eq!(students.len(), 2);
        assert_eq!(
            students[0],
            Student {
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                id: "1815001".into(),
                kind: "UG".into(),
                year: "2".into(),
                course: "G100 Mathematics".to_owned(),
                pronouns: None,
            }
        );
        assert_eq!(students[1].first_name, "Alan");
        assert_eq!(students[1].kind, "PGR");
        assert_eq!(students[1].course, "P-G1P0 Maths (PhD)");
    }

    #[test]
    fn many_rows() {
        let rows = (0..250)
            .map(|i| {
                format!("<tr><td></td><td>F{i}</td><td>L{i}</td><td>{i}</td><td>UG</td><td>1</td><td>C</td></tr>")
            })
            .collect::<String>();
        let students = parse_roster(&page(&rows)).unwrap();

        assert_eq!(students.len(), 250);
        assert!(students.iter().enumerate().all(|(i, s)| s.id == i.to_string()));
    }

    #[test]
    fn empty_table_body() {
        assert_eq!(parse_roster(&page("")), Ok(Vec::new()));
    }

    #[test]
    fn missing_table_body() {
        let html = "<html><body><p>No students match your search.</p></body></html>";
        assert_eq!(parse_roster(html), Err(RosterError::NoStudents));
    }

    #[test]
    fn only_first_table_body_is_read() {
        let html = format!(
            "{}<table><tbody><tr><td></td><td>X</td><td>Y</td><td>0</td><td>UG</td><td>1</td><td>C</td></tr></tbody></table>",
            page(ADA)
        );
        let students = parse_roster(&html).unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].id, "1815001");
    }

    #[test]
    fn short_row_aborts() {
        let rows = format!("{ADA}<tr><td></td><td>Only</td><td>Three</td></tr>");
        assert_eq!(
            parse_roster(&page(&rows)),
            Err(RosterError::MalformedRow { row: 1, cells: 3 })
        );
    }

    #[test]
    fn extra_cells_are_ignored() {
        let rows = r"<tr><td></td><td>A</td><td>B</td><td>1</td><td>UG</td><td>3</td><td>C</td><td>extra</td></tr>";
        let students = parse_roster(&page(rows)).unwrap();
        assert_eq!(students[0].course, "C");
    }
}
