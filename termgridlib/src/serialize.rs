//! Object-graph serialization: JSON records into header/body pairs.
//!
//! Deliberately separate from the layout engine: schema inference produces a
//! `(header, body)` pair that feeds [`Table`] like any hand-built input.
//! Nested arrays and objects render as embedded tables until the
//! `max_deep` limit, then fall back to compact JSON text.

use serde_json::Value;

use crate::border::Border;
use crate::settings::Settings;
use crate::table::Table;
use crate::Result;

/// Renders slices of arbitrary JSON records as tables.
#[derive(Debug, Clone, Default)]
pub struct Serializer {
    settings: Settings,
    border: Border,
}

impl Serializer {
    /// Serializer rendering borderless tables with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            border: Border::blank(),
        }
    }

    /// Serializer with border glyphs for every table it renders, nested
    /// ones included.
    pub fn with_border(settings: Settings, border: Border) -> Self {
        Self { settings, border }
    }

    /// Infer a header from the union of record keys and format one body row
    /// per record.
    ///
    /// The header is the union of all object keys across the records, in
    /// the order the underlying JSON maps iterate them, first appearance
    /// winning. Missing fields and nulls become blank cells.
    pub fn to_table(&self, records: &[Value]) -> (Vec<String>, Vec<Vec<String>>) {
        self.build(records, 1)
    }

    /// Render the records as a finished table string.
    pub fn render(&self, records: &[Value]) -> Result<String> {
        let (header, body) = self.build(records, 1);
        let table = Table::with_border(&header, &body, &self.settings, &self.border)?;
        Ok(table.get())
    }

    fn build(&self, records: &[Value], depth: usize) -> (Vec<String>, Vec<Vec<String>>) {
        let header = infer_schema(records);
        let body = records
            .iter()
            .map(|record| {
                header
                    .iter()
                    .map(|field| match record.get(field) {
                        None | Some(Value::Null) => String::new(),
                        Some(value) => self.format_value(value, depth),
                    })
                    .collect()
            })
            .collect();
        (header, body)
    }

    fn format_value(&self, value: &Value, depth: usize) -> String {
        match value {
            Value::Null => String::new(),
            Value::Bool(flag) => flag.to_string(),
            Value::Number(number) => number.to_string(),
            Value::String(text) => text.clone(),
            Value::Array(items) => self.nested(items, depth),
            Value::Object(_) => self.nested(std::slice::from_ref(value), depth),
        }
    }

    /// Render a nested structure one level deeper, or as compact JSON once
    /// the depth limit is reached.
    fn nested(&self, records: &[Value], depth: usize) -> String {
        if depth >= self.settings.max_deep {
            return compact(records);
        }
        if records.iter().all(|record| !record.is_object()) {
            // scalar list: one value per line of a multi-line cell
            return records
                .iter()
                .map(|record| self.format_value(record, depth))
                .collect::<Vec<_>>()
                .join("\n");
        }
        let (header, body) = self.build(records, depth + 1);
        match Table::with_border(&header, &body, &self.settings, &self.border) {
            Ok(table) => table.get(),
            // schema-less records (e.g. all-empty objects) degrade to text
            Err(_) => compact(records),
        }
    }
}

fn compact(records: &[Value]) -> String {
    match records {
        [single] if single.is_object() => single.to_string(),
        _ => Value::Array(records.to_vec()).to_string(),
    }
}

fn infer_schema(records: &[Value]) -> Vec<String> {
    let mut schema = Vec::new();
    for record in records {
        if let Value::Object(fields) = record {
            for key in fields.keys() {
                if !schema.contains(key) {
                    schema.push(key.clone());
                }
            }
        }
    }
    schema
}
