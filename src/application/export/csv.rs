// src/application/export/csv.rs

/// One flat record: column name paired with an optional scalar, in render
/// order. `None` renders as an empty string.
pub type CsvRecord = Vec<(String, Option<String>)>;

/// Render records to CSV. Column order is the first record's key order;
/// every cell, header row included, is quote-wrapped with embedded quotes
/// doubled. Empty input yields an empty string, not a header-only string.
pub fn to_csv(records: &[CsvRecord]) -> String {
    let Some(first) = records.first() else {
        return String::new();
    };

    let headers: Vec<&str> = first.iter().map(|(name, _)| name.as_str()).collect();
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(
        headers
            .iter()
            .map(|name| quote(name))
            .collect::<Vec<_>>()
            .join(","),
    );

    for record in records {
        let row: Vec<String> = headers
            .iter()
            .map(|header| {
                let value = record
                    .iter()
                    .find(|(name, _)| name == header)
                    .and_then(|(_, value)| value.as_deref())
                    .unwrap_or("");
                quote(value)
            })
            .collect();
        lines.push(row.join(","));
    }

    lines.join("\n")
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
