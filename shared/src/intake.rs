//! Food log and daily intake aggregation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One logged food, values already scaled by the serving multiplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub date: NaiveDate,
    pub name: String,
    pub serving_multiplier: f64,
    pub kcal: f64,
    pub carb_g: f64,
    pub protein_g: f64,
    pub fat_g: f64,
}

/// Summed intake for a single day
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub kcal: f64,
    pub carb_g: f64,
    pub protein_g: f64,
    pub fat_g: f64,
}

impl std::ops::Add<&FoodEntry> for Totals {
    type Output = Totals;

    fn add(self, entry: &FoodEntry) -> Totals {
        Totals {
            kcal: self.kcal + entry.kcal,
            carb_g: self.carb_g + entry.carb_g,
            protein_g: self.protein_g + entry.protein_g,
            fat_g: self.fat_g + entry.fat_g,
        }
    }
}

/// Sum entries logged on `date`
pub fn aggregate_daily_intake<'a, I>(entries: I, date: NaiveDate) -> Totals
where
    I: IntoIterator<Item = &'a FoodEntry>,
{
    entries
        .into_iter()
        .filter(|e| e.date == date)
        .fold(Totals::default(), |acc, e| acc + e)
}

/// Append-only food log; entries can only be removed a whole date at a time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyLog {
    entries: Vec<FoodEntry>,
}

impl DailyLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: FoodEntry) {
        self.entries.push(entry);
    }

    /// Append several entries at once
    pub fn extend(&mut self, entries: impl IntoIterator<Item = FoodEntry>) {
        self.entries.extend(entries);
    }

    pub fn entries(&self) -> &[FoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries_on(&self, date: NaiveDate) -> impl Iterator<Item = &FoodEntry> {
        self.entries.iter().filter(move |e| e.date == date)
    }

    pub fn totals(&self, date: NaiveDate) -> Totals {
        aggregate_daily_intake(&self.entries, date)
    }

    /// Distinct logged dates, ascending
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.entries
            .iter()
            .map(|e| e.date)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Remove every entry for `date`; returns how many were removed
    pub fn clear_date(&mut self, date: NaiveDate) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.date != date);
        before - self.entries.len()
    }
}
