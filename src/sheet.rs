use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::Student;

pub const HEADER: [&str; 6] = ["First Name", "Last Name", "ID", "Type", "Year", "Course"];
pub const PRONOUNS_HEADER: &str = "Pronouns";

fn header(with_pronouns: bool) -> Vec<&'static str> {
    let mut header = HEADER.to_vec();
    if with_pronouns {
        header.push(PRONOUNS_HEADER);
    }
    header
}

fn row(student: &Student, with_pronouns: bool) -> Vec<&str> {
    let mut row = vec![
        &*student.first_name,
        &*student.last_name,
        &*student.id,
        &*student.kind,
        &*student.year,
        &*student.course,
    ];
    if with_pronouns {
        row.push(student.pronouns_cell());
    }
    row
}

/// Every cell of the sheet, header row first.
#[must_use]
pub fn rows(students: &[Student], with_pronouns: bool) -> Vec<Vec<&str>> {
    core::iter::once(header(with_pronouns))
        .chain(students.iter().map(|s| row(s, with_pronouns)))
        .collect()
}

/// Writes `students` to a single-sheet workbook at `path`, replacing it.
pub fn save(path: &Path, students: &[Student], with_pronouns: bool) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    for (r, cells) in rows(students, with_pronouns).into_iter().enumerate() {
        for (c, cell) in cells.into_iter().enumerate() {
            let (r, c) = (r as u32, c as u16);
            if r == 0 {
                worksheet.write_string_with_format(r, c, cell, &bold)?;
            } else if !cell.is_empty() {
                worksheet.write_string(r, c, cell)?;
            }
        }
    }

    workbook.save(path)?;
    tracing::info!(target: "sheet", "wrote {} rows to {}", students.len(), path.display());
    Ok(())
}
