//! Food log CSV interchange
//!
//! One row per entry in log order, with a header row:
//! `date,food_name,amount,kcal,carb_g,protein_g,fat_g`.

use crate::error::{ApiError, ApiResult};
use chrono::NaiveDate;
use nutrition_coach_shared::validation::{
    validate_food_name, validate_nutrient_amount, validate_serving_multiplier,
};
use nutrition_coach_shared::{CoreError, CoreResult, FoodEntry};
use serde::{Deserialize, Serialize};

/// Column names, in export order
pub const LOG_COLUMNS: [&str; 7] = [
    "date",
    "food_name",
    "amount",
    "kcal",
    "carb_g",
    "protein_g",
    "fat_g",
];

/// One CSV row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogCsvRow {
    pub date: NaiveDate,
    pub food_name: String,
    pub amount: f64,
    pub kcal: f64,
    pub carb_g: f64,
    pub protein_g: f64,
    pub fat_g: f64,
}

impl From<&FoodEntry> for LogCsvRow {
    fn from(entry: &FoodEntry) -> Self {
        Self {
            date: entry.date,
            food_name: entry.name.clone(),
            amount: entry.serving_multiplier,
            kcal: entry.kcal,
            carb_g: entry.carb_g,
            protein_g: entry.protein_g,
            fat_g: entry.fat_g,
        }
    }
}

impl LogCsvRow {
    fn into_entry(self) -> Result<FoodEntry, String> {
        validate_food_name(&self.food_name).map_err(|m| format!("food_name {}", m))?;
        validate_serving_multiplier(self.amount).map_err(|m| format!("amount {}", m))?;
        for (column, value) in [
            ("kcal", self.kcal),
            ("carb_g", self.carb_g),
            ("protein_g", self.protein_g),
            ("fat_g", self.fat_g),
        ] {
            validate_nutrient_amount(value).map_err(|m| format!("{} {}", column, m))?;
        }

        Ok(FoodEntry {
            date: self.date,
            name: self.food_name.trim().to_string(),
            serving_multiplier: self.amount,
            kcal: self.kcal,
            carb_g: self.carb_g,
            protein_g: self.protein_g,
            fat_g: self.fat_g,
        })
    }
}

/// Food log CSV service
pub struct LogCsvService;

impl LogCsvService {
    /// Write entries as CSV; the header row is always present
    pub fn export_csv<'a, I>(entries: I) -> ApiResult<String>
    where
        I: IntoIterator<Item = &'a FoodEntry>,
    {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(vec![]);

        wtr.write_record(LOG_COLUMNS)
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV serialization error: {}", e)))?;
        for entry in entries {
            wtr.serialize(LogCsvRow::from(entry))
                .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV serialization error: {}", e)))?;
        }

        let bytes = wtr
            .into_inner()
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV flush error: {}", e)))?;
        String::from_utf8(bytes)
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV encoding error: {}", e)))
    }

    /// Parse a CSV document into entries
    ///
    /// Either every row is valid and all entries are returned, or nothing is.
    pub fn parse_csv(input: &str) -> CoreResult<Vec<FoodEntry>> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(input.as_bytes());

        let headers = rdr
            .headers()
            .map_err(|e| CoreError::InvalidInput(format!("Unreadable CSV header: {}", e)))?
            .clone();

        let missing: Vec<&str> = LOG_COLUMNS
            .iter()
            .copied()
            .filter(|column| !headers.iter().any(|h| h == *column))
            .collect();
        if !missing.is_empty() {
            return Err(CoreError::InvalidInput(format!(
                "CSV is missing required columns: {}",
                missing.join(", ")
            )));
        }

        let mut entries = Vec::new();
        for (index, record) in rdr.records().enumerate() {
            let row = index + 1;
            let record =
                record.map_err(|e| CoreError::InvalidInput(format!("Row {}: {}", row, e)))?;
            let parsed: LogCsvRow = record
                .deserialize(Some(&headers))
                .map_err(|e| CoreError::InvalidInput(format!("Row {}: {}", row, e)))?;
            let entry = parsed
                .into_entry()
                .map_err(|m| CoreError::InvalidInput(format!("Row {}: {}", row, m)))?;
            entries.push(entry);
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn entry(day: u32, name: &str, amount: f64, kcal: f64) -> FoodEntry {
        FoodEntry {
            date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            name: name.to_string(),
            serving_multiplier: amount,
            kcal,
            carb_g: 12.5,
            protein_g: 3.25,
            fat_g: 0.1,
        }
    }

    #[test]
    fn test_empty_log_exports_header_only() {
        let empty: Vec<FoodEntry> = Vec::new();
        let csv = LogCsvService::export_csv(&empty).unwrap();
        assert_eq!(csv.trim_end(), "date,food_name,amount,kcal,carb_g,protein_g,fat_g");
        assert!(LogCsvService::parse_csv(&csv).unwrap().is_empty());
    }

    #[test]
    fn test_export_then_import_reproduces_entries() {
        let entries = vec![
            entry(1, "Cooked rice (1 bowl)", 1.5, 450.0),
            entry(1, "Egg, boiled", 2.0, 144.0),
            entry(2, "Apple (1 medium)", 0.3, 28.5),
        ];
        let csv = LogCsvService::export_csv(&entries).unwrap();
        let parsed = LogCsvService::parse_csv(&csv).unwrap();
        assert_eq!(parsed, entries);
    }

    #[test]
    fn test_missing_column_named_in_error() {
        let csv = "date,food_name,amount,kcal,carb_g,protein_g\n2024-06-01,Apple,1,95,25,0.5\n";
        let err = LogCsvService::parse_csv(csv).unwrap_err();
        match err {
            CoreError::InvalidInput(msg) => assert!(msg.contains("fat_g"), "{}", msg),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_extra_columns_and_order_ignored() {
        let csv = "note,fat_g,protein_g,carb_g,kcal,amount,food_name,date\n\
                   lunch,0.3,0.5,25,95,1,Apple,2024-06-01\n";
        let parsed = LogCsvService::parse_csv(csv).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "Apple");
        assert_eq!(parsed[0].kcal, 95.0);
    }

    #[test]
    fn test_malformed_row_reports_row_number() {
        let csv = "date,food_name,amount,kcal,carb_g,protein_g,fat_g\n\
                   2024-06-01,Apple,1,95,25,0.5,0.3\n\
                   2024-06-01,Egg,1,lots,0.4,6.3,4.8\n";
        let err = LogCsvService::parse_csv(csv).unwrap_err();
        assert!(err.to_string().contains("Row 2"), "{}", err);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let header = "date,food_name,amount,kcal,carb_g,protein_g,fat_g\n";
        for row in [
            "2024-13-01,Apple,1,95,25,0.5,0.3",
            "2024-06-01,,1,95,25,0.5,0.3",
            "2024-06-01,Apple,0,95,25,0.5,0.3",
            "2024-06-01,Apple,1,-95,25,0.5,0.3",
        ] {
            let csv = format!("{}{}\n", header, row);
            assert!(LogCsvService::parse_csv(&csv).is_err(), "accepted: {}", row);
        }
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(LogCsvService::parse_csv("").is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_roundtrip_preserves_values(
            amount in 0.01f64..10.0,
            kcal in 0.0f64..2000.0,
            name in "[A-Za-z][A-Za-z ,()]{0,20}[A-Za-z)]",
        ) {
            let entries = vec![entry(5, &name, amount, kcal)];
            let csv = LogCsvService::export_csv(&entries).unwrap();
            let parsed = LogCsvService::parse_csv(&csv).unwrap();
            prop_assert_eq!(parsed, entries);
        }
    }
}
