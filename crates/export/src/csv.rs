//! Inventory -> CSV text.

use chrono::NaiveDate;

use estate_inventory::Item;

/// Fixed header row.
pub const CSV_HEADER: [&str; 6] = [
    "Description",
    "Value ($)",
    "Recipient",
    "Notes",
    "Date Added",
    "Photo URLs",
];

/// Joins an item's photo URLs inside the single "Photo URLs" column.
pub const PHOTO_SEPARATOR: &str = " ; ";

const DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Quote a field if (and only if) it contains `"`, `,` or `\n`, doubling any
/// embedded quotes.
pub fn escape_field(field: &str) -> String {
    if field.contains(['"', ',', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Serialize items (in the given order) to CSV.
///
/// The header is always present; rows are separated by `\n` with no trailing
/// newline. The canonical (ungrouped) value is written, never the display
/// form.
pub fn export_to_csv(items: &[Item]) -> String {
    let mut rows = Vec::with_capacity(items.len() + 1);
    rows.push(join_row(CSV_HEADER.iter().copied()));

    for item in items {
        let date_added = item.date_added().format(DATE_FORMAT).to_string();
        let photos = item.photos().join(PHOTO_SEPARATOR);
        rows.push(join_row([
            item.description(),
            item.value().as_str(),
            item.recipient(),
            item.notes(),
            date_added.as_str(),
            photos.as_str(),
        ]));
    }

    rows.join("\n")
}

/// Suggested download filename, e.g. `estate-inventory-3-7-2025.csv`.
pub fn export_filename(prefix: &str, date: NaiveDate) -> String {
    format!("{prefix}-{}.csv", date.format("%-m-%-d-%Y"))
}

fn join_row<'a>(fields: impl IntoIterator<Item = &'a str>) -> String {
    fields
        .into_iter()
        .map(escape_field)
        .collect::<Vec<_>>()
        .join(",")
}
