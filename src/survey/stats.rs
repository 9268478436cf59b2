//! Aggregation over submitted responses: the averages shown on the
//! results page, the filter/sort behind the admin table, and the CSV
//! export.

use chrono::NaiveDateTime;

use super::fields;
use crate::models::survey::StoredResponse;

/// CSV columns between Resident Status and Community Importance, i.e. the
/// nine rating columns, in their fixed export order.
const CSV_RATING_COLUMNS: [(&str, &str); 9] = [
    ("amenities_satisfaction", "Amenities"),
    ("security_satisfaction", "Security"),
    ("concierge_rating", "Concierge"),
    ("maintenance_satisfaction", "Maintenance"),
    ("maintenance_response_satisfaction", "Maintenance Response"),
    ("financial_satisfaction", "Financial"),
    ("financial_transparency", "Financial Transparency"),
    ("communication_satisfaction", "Communication"),
    ("projects_satisfaction", "Projects"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn from_param(param: &str) -> Self {
        match param {
            "asc" => SortDir::Asc,
            _ => SortDir::Desc,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }
}

/// Arithmetic mean of a rating field, rounded to one decimal. Records
/// without the field set are skipped; with no data at all this is `None`,
/// never a NaN from a zero division.
pub fn average(records: &[StoredResponse], field: &str) -> Option<f64> {
    let values: Vec<i64> = records.iter().filter_map(|r| r.rating(field)).collect();
    if values.is_empty() {
        return None;
    }
    let mean = values.iter().sum::<i64>() as f64 / values.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}

/// Keep the responses with the given resident status; `"all"` keeps
/// everything. Relative order is preserved.
pub fn filter_by_status(records: Vec<StoredResponse>, status: &str) -> Vec<StoredResponse> {
    if status == "all" {
        return records;
    }
    records
        .into_iter()
        .filter(|r| r.survey.resident_status == status)
        .collect()
}

/// Stable sort by a named field. Unknown field names sort by submission
/// time. Equal keys keep their input order in both directions: the
/// comparator maps equal keys to `Ordering::Equal` and descending order
/// reverses the ordering rather than swapping the operands, so the
/// stability of `sort_by` carries through.
pub fn sort_by(records: &mut [StoredResponse], field: &str, dir: SortDir) {
    records.sort_by(|a, b| {
        let ord = match field {
            "resident_status" => a.survey.resident_status.cmp(&b.survey.resident_status),
            "created_at" => a.created_at.cmp(&b.created_at),
            f if is_rating_field(f) => a.rating(f).cmp(&b.rating(f)),
            _ => a.created_at.cmp(&b.created_at),
        };
        match dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    });
}

fn is_rating_field(field: &str) -> bool {
    matches!(fields::kind_of(field), Some(fields::FieldKind::Rating))
}

/// How many responses picked each option of a multi-select field, in
/// option order.
pub fn tag_counts(records: &[StoredResponse], field: &str) -> Vec<(String, usize)> {
    let Some(options) = fields::options_of(field) else {
        return Vec::new();
    };
    options
        .iter()
        .map(|opt| {
            let count = records
                .iter()
                .filter(|r| r.survey.has_tag(field, opt.value))
                .count();
            (opt.label.to_string(), count)
        })
        .collect()
}

/// Export the given rows, in the given order, as CSV. Optional fields
/// that were left empty become empty cells.
pub fn to_csv(records: &[StoredResponse]) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header: Vec<&str> = vec!["Date", "Resident Status"];
    header.extend(CSV_RATING_COLUMNS.iter().map(|(_, h)| *h));
    header.extend(["Community Importance", "Unit", "Name", "Email"]);
    writer.write_record(&header)?;

    for record in records {
        let mut row: Vec<String> = vec![
            display_date(&record.created_at),
            fields::option_label("resident_status", &record.survey.resident_status),
        ];
        for (field, _) in CSV_RATING_COLUMNS.iter() {
            row.push(rating_cell(record.rating(field)));
        }
        row.push(rating_cell(record.rating("community_importance")));
        row.push(record.survey.contact_unit.clone());
        row.push(record.survey.contact_name.clone());
        row.push(record.survey.contact_email.clone());
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8(bytes).expect("csv output is valid utf-8"))
}

fn rating_cell(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Timestamps are stored ISO-style; the export shows them as a plain
/// date. Unparseable values pass through untouched.
pub fn display_date(created_at: &str) -> String {
    NaiveDateTime::parse_from_str(created_at, "%Y-%m-%dT%H:%M:%S")
        .map(|dt| dt.format("%m/%d/%Y").to_string())
        .unwrap_or_else(|_| created_at.to_string())
}
