use chrono::{DateTime, Utc};

use crate::client::form::field_label;
use crate::features::villas::dtos::VillaResponseDto;
use crate::features::villas::patch::PatchableField;

const DATE_FORMAT: &str = "%Y-%m-%d %I:%M:%S %p";

pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn headers() -> Vec<&'static str> {
    let mut headers = vec!["ID"];
    headers.extend(PatchableField::ALL.into_iter().map(field_label));
    headers.extend(["Created Date", "Updated Date"]);
    headers
}

fn row(villa: &VillaResponseDto) -> Vec<String> {
    vec![
        villa.id.to_string(),
        villa.name.clone(),
        villa.details.clone(),
        villa.rate.to_string(),
        villa.sqft.to_string(),
        villa.occupancy.to_string(),
        villa.image_url.clone(),
        villa.amenity.clone(),
        format_date(&villa.created_date),
        format_date(&villa.updated_date),
    ]
}

fn format_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.zip(widths) {
        let padding = width - cell.chars().count();
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(padding + 1));
        line.push('|');
    }
    line
}

/// Render villas as a bordered text table
pub fn render_table(villas: &[VillaResponseDto]) -> String {
    let headers = headers();
    let rows: Vec<Vec<String>> = villas.iter().map(row).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator = {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    };

    let mut out = vec![separator.clone()];
    out.push(format_line(headers.iter().copied(), &widths));
    out.push(separator.clone());
    for row in &rows {
        out.push(format_line(row.iter().map(String::as_str), &widths));
    }
    out.push(separator);
    out.join("\n")
}

/// Render a single villa as `Label: value` lines
pub fn render_record(villa: &VillaResponseDto) -> String {
    headers()
        .into_iter()
        .zip(row(villa))
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn villa() -> VillaResponseDto {
        let created = Utc.with_ymd_and_hms(2025, 6, 1, 14, 30, 5).unwrap();
        VillaResponseDto {
            id: 1,
            name: "Royal Villa".to_string(),
            details: "Sea view".to_string(),
            rate: 199.5,
            sqft: 550,
            occupancy: 4,
            image_url: "https://img.example.com/1.png".to_string(),
            amenity: "Pool".to_string(),
            created_date: created,
            updated_date: created,
        }
    }

    #[test]
    fn test_format_date_uses_twelve_hour_clock() {
        assert_eq!(format_date(&villa().created_date), "2025-06-01 02:30:05 PM");
    }

    #[test]
    fn test_render_record() {
        let text = render_record(&villa());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "ID: 1");
        assert_eq!(lines[3], "Rate: 199.5");
        assert_eq!(lines[6], "Image URL: https://img.example.com/1.png");
        assert_eq!(lines[9], "Updated Date: 2025-06-01 02:30:05 PM");
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let mut second = villa();
        second.id = 22;
        second.name = "Cottage".to_string();

        let table = render_table(&[villa(), second]);
        let lines: Vec<&str> = table.lines().collect();

        // border, header, border, two rows, border
        assert_eq!(lines.len(), 6);
        assert!(lines[1].starts_with("| ID | Name        |"));
        assert!(lines[3].starts_with("| 1  | Royal Villa |"));
        assert!(lines[4].starts_with("| 22 | Cottage     |"));
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }
}
