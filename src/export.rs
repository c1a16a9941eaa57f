//! Price sheet export - serialize the catalog's id and price columns into a
//! delimited table that Google Sheets (or any spreadsheet) can re-import.

use crate::dishes::{Dish, PriceField};
use crate::error::{MenuError, Result};
use csv::WriterBuilder;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Output file written next to the process working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "prices-sheet.csv";

/// A rendered sheet plus the duplicate ids found while building it.
#[derive(Debug, Clone)]
pub struct RenderedSheet {
    pub table: String,
    pub duplicates: Vec<String>,
}

/// Exporter for the catalog price table.
///
/// Rows are sorted by id (byte order) so repeated exports of an unchanged
/// catalog are byte-identical. The delimiter is switchable because some
/// spreadsheet locales read comma-delimited files as a single column.
pub struct PriceSheetExporter {
    delimiter: u8,
    output_path: PathBuf,
}

impl PriceSheetExporter {
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn output_path(&self) -> &PathBuf {
        &self.output_path
    }

    /// Build the delimited table in memory.
    ///
    /// Duplicate ids keep their first occurrence and are reported through a
    /// warning; the export itself never aborts on them. Absent prices render
    /// as empty fields.
    pub fn render(&self, dishes: &[Dish]) -> Result<RenderedSheet> {
        let mut seen: HashMap<&str, &Dish> = HashMap::new();
        let mut duplicates: Vec<String> = Vec::new();

        for dish in dishes {
            if seen.contains_key(dish.id.as_str()) {
                if !duplicates.contains(&dish.id) {
                    duplicates.push(dish.id.clone());
                }
            } else {
                seen.insert(dish.id.as_str(), dish);
            }
        }

        if !duplicates.is_empty() {
            warn!(
                "Duplicate dish ids in catalog (first occurrence wins): {}",
                duplicates.join(", ")
            );
        }

        let mut ids: Vec<&str> = seen.keys().copied().collect();
        ids.sort_unstable();

        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(Vec::new());

        let mut header = vec!["id".to_string()];
        header.extend(PriceField::ALL.iter().map(|f| f.as_str().to_string()));
        writer.write_record(&header)?;

        for id in ids {
            let dish = seen[id];
            let mut record = vec![id.to_string()];
            for field in PriceField::ALL {
                record.push(match dish.price_field(field) {
                    Some(value) => format_price(value),
                    None => String::new(),
                });
            }
            writer.write_record(&record)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| MenuError::Export(format!("Failed to flush sheet writer: {}", e)))?;
        let mut table = String::from_utf8(bytes)
            .map_err(|e| MenuError::Export(format!("Sheet output is not UTF-8: {}", e)))?;

        // single newline between rows, none after the last
        if table.ends_with('\n') {
            table.pop();
        }

        Ok(RenderedSheet { table, duplicates })
    }

    /// Render and write the table in one replace-the-file write.
    pub fn write(&self, dishes: &[Dish]) -> Result<RenderedSheet> {
        let rendered = self.render(dishes)?;
        fs::write(&self.output_path, rendered.table.as_bytes())?;
        Ok(rendered)
    }
}

impl Default for PriceSheetExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain decimal rendering, no padding and no extra rounding.
fn format_price(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dishes::Category;

    fn dish(id: &str, price: Option<f64>) -> Dish {
        let mut d = Dish::new(id, Category::Main, id, "img/x.webp");
        d.price = price;
        d
    }

    #[test]
    fn test_render_sorts_and_renders_empty_fields() {
        let catalog = vec![
            dish("zumo", Some(3.0)),
            dish("cafe", Some(1.2)),
            dish("escaldon", None),
        ];
        let rendered = PriceSheetExporter::new().render(&catalog).unwrap();

        let lines: Vec<&str> = rendered.table.lines().collect();
        assert_eq!(lines[0], "id,price,priceShot,priceGlass,priceHalf,priceWhole");
        assert_eq!(lines[1], "cafe,1.2,,,,");
        assert_eq!(lines[2], "escaldon,,,,,");
        assert_eq!(lines[3], "zumo,3,,,,");
        assert_eq!(lines.len(), 4);
        assert!(!rendered.table.ends_with('\n'));
    }

    #[test]
    fn test_render_is_deterministic() {
        let catalog = vec![dish("b", Some(2.0)), dish("a", Some(1.0))];
        let exporter = PriceSheetExporter::new();
        let first = exporter.render(&catalog).unwrap();
        let second = exporter.render(&catalog).unwrap();
        assert_eq!(first.table, second.table);
    }

    #[test]
    fn test_duplicates_first_occurrence_wins() {
        let catalog = vec![dish("x", Some(1.0)), dish("x", Some(9.0)), dish("a", None)];
        let rendered = PriceSheetExporter::new().render(&catalog).unwrap();

        assert_eq!(rendered.duplicates, vec!["x".to_string()]);
        let x_rows: Vec<&str> = rendered
            .table
            .lines()
            .filter(|l| l.starts_with("x,"))
            .collect();
        assert_eq!(x_rows, vec!["x,1,,,,"]);
    }

    #[test]
    fn test_fields_with_delimiter_or_quotes_are_quoted() {
        let catalog = vec![dish("weird,id", Some(1.0)), dish("qu\"ote", None)];
        let rendered = PriceSheetExporter::new().render(&catalog).unwrap();

        assert!(rendered.table.contains("\"weird,id\",1,,,,"));
        assert!(rendered.table.contains("\"qu\"\"ote\",,,,,"));
    }

    #[test]
    fn test_semicolon_delimiter() {
        let catalog = vec![dish("cafe", Some(1.2))];
        let rendered = PriceSheetExporter::new()
            .with_delimiter(b';')
            .render(&catalog)
            .unwrap();

        let lines: Vec<&str> = rendered.table.lines().collect();
        assert_eq!(lines[0], "id;price;priceShot;priceGlass;priceHalf;priceWhole");
        assert_eq!(lines[1], "cafe;1.2;;;;");
        // a comma no longer needs quoting under ';'
        let catalog = vec![dish("weird,id", None)];
        let rendered = PriceSheetExporter::new()
            .with_delimiter(b';')
            .render(&catalog)
            .unwrap();
        assert!(rendered.table.contains("weird,id;;;;;"));
    }

    #[test]
    fn test_write_replaces_file() {
        let path = std::env::temp_dir().join(format!("prices-sheet-test-{}.csv", std::process::id()));
        let exporter = PriceSheetExporter::new().with_output_path(&path);

        exporter.write(&[dish("cafe", Some(1.2))]).unwrap();
        let first = fs::read_to_string(&path).unwrap();
        assert!(first.contains("cafe,1.2"));

        exporter.write(&[dish("zumo", Some(3.0))]).unwrap();
        let second = fs::read_to_string(&path).unwrap();
        assert!(!second.contains("cafe"));
        assert!(second.contains("zumo,3"));

        fs::remove_file(&path).ok();
    }
}
