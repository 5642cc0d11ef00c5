use crate::core::display::{format_date, format_score, StudentDisplay};
use crate::domain::model::Student;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
}

const HEADERS: [&str; 8] = [
    "ID",
    "Name",
    "Email",
    "College",
    "Major",
    "Graduation",
    "Final Score",
    "Status",
];

fn row(student: &Student, display: &StudentDisplay) -> [String; 8] {
    [
        student.id.to_string(),
        student.full_name(),
        student.email.clone(),
        student.college_info.college_name.clone(),
        student.college_info.major.clone(),
        format_date(&student.graduation_details.graduation_date),
        format_score(student.final_score),
        display.status_text(student.final_score).to_string(),
    ]
}

pub fn write_students<W: Write>(
    out: &mut W,
    students: &[Student],
    display: &StudentDisplay,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(out, students, display),
        OutputFormat::Csv => write_csv(out, students, display),
    }
}

fn write_table<W: Write>(out: &mut W, students: &[Student], display: &StudentDisplay) -> Result<()> {
    let rows: Vec<[String; 8]> = students.iter().map(|s| row(s, display)).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    write_line(out, &header, &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_line(out, &rule, &widths)?;
    for cells in &rows {
        write_line(out, cells, &widths)?;
    }

    writeln!(
        out,
        "\nTotal: {}  Selected: {}",
        display.total_count(students),
        display.selected_count(students)
    )?;
    Ok(())
}

fn write_line<W: Write>(out: &mut W, cells: &[String], widths: &[usize; 8]) -> Result<()> {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    writeln!(out, "{}", padded.join("  ").trim_end())?;
    Ok(())
}

fn write_csv<W: Write>(out: &mut W, students: &[Student], display: &StudentDisplay) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(HEADERS)?;
    for student in students {
        writer.write_record(row(student, display))?;
    }
    writer.flush()?;
    Ok(())
}
