//! Coaching session: the profile, food log, sugar log and catalog of one user
//!
//! The session is the only mutable state in the service. It is owned by
//! [`AppState`](crate::state::AppState) behind a lock; every method here is
//! synchronous.

use chrono::NaiveDate;
use nutrition_coach_shared::{
    classify_intake, CatalogItem, CoreResult, DailyLog, Feedback, FeedbackBands, FoodCatalog,
    FoodEntry, NutritionPlan, Profile, SugarCheck, SugarLog, SugarProfile, SugarRecord,
    TargetPolicy, Totals,
};
use tracing::{debug, info};

/// In-memory session state
#[derive(Debug, Clone)]
pub struct Session {
    policy: TargetPolicy,
    bands: FeedbackBands,
    profile: Option<Profile>,
    plan: Option<NutritionPlan>,
    log: DailyLog,
    sugar_log: SugarLog,
    catalog: FoodCatalog,
}

impl Session {
    /// Fresh session with the built-in catalog and an empty log
    pub fn new(policy: TargetPolicy, bands: FeedbackBands) -> Self {
        Self {
            policy,
            bands,
            profile: None,
            plan: None,
            log: DailyLog::new(),
            sugar_log: SugarLog::new(),
            catalog: FoodCatalog::with_builtin(),
        }
    }

    pub fn policy(&self) -> &TargetPolicy {
        &self.policy
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn plan(&self) -> Option<&NutritionPlan> {
        self.plan.as_ref()
    }

    pub fn log(&self) -> &DailyLog {
        &self.log
    }

    pub fn catalog(&self) -> &FoodCatalog {
        &self.catalog
    }

    /// Replace the profile and recompute the plan
    ///
    /// On error the previous profile and plan are kept.
    pub fn set_profile(&mut self, profile: Profile) -> CoreResult<&NutritionPlan> {
        let plan = NutritionPlan::compute(&profile, &self.policy)?;
        info!(
            condition = ?profile.condition,
            activity = ?profile.activity_level,
            target_kcal = plan.target.kcal,
            "Profile updated"
        );
        self.profile = Some(profile);
        Ok(self.plan.insert(plan))
    }

    pub fn add_catalog_item(&mut self, item: CatalogItem) -> CoreResult<()> {
        let name = item.name.clone();
        self.catalog.add_custom(item)?;
        debug!(name = %name.trim(), "Custom catalog item added");
        Ok(())
    }

    /// Append a catalog food to the log
    pub fn log_food(&mut self, name: &str, multiplier: f64, date: NaiveDate) -> CoreResult<FoodEntry> {
        let entry = self.catalog.entry(name, multiplier, date)?;
        debug!(food = %entry.name, %date, kcal = entry.kcal, "Food logged");
        self.log.append(entry.clone());
        Ok(entry)
    }

    /// Merge already-validated entries into the log
    pub fn import_entries(&mut self, entries: Vec<FoodEntry>) -> usize {
        let count = entries.len();
        self.log.extend(entries);
        info!(imported = count, total = self.log.len(), "Food log imported");
        count
    }

    pub fn entries_on(&self, date: NaiveDate) -> Vec<FoodEntry> {
        self.log.entries_on(date).cloned().collect()
    }

    pub fn totals(&self, date: NaiveDate) -> Totals {
        self.log.totals(date)
    }

    /// Feedback for `date`, or `None` until a profile is set
    pub fn feedback(&self, date: NaiveDate) -> Option<Feedback> {
        let plan = self.plan.as_ref()?;
        let totals = self.totals(date);
        Some(classify_intake(totals.kcal, plan.target.kcal, &self.bands))
    }

    pub fn logged_dates(&self) -> Vec<NaiveDate> {
        self.log.dates()
    }

    /// Record sugar eaten on `date`
    pub fn log_sugar(
        &mut self,
        food: &str,
        quantity: u32,
        sugar_per_unit_g: f64,
        date: NaiveDate,
    ) -> CoreResult<SugarRecord> {
        let record = SugarRecord::new(food, quantity, sugar_per_unit_g, date)?;
        debug!(food = %record.food, %date, total_g = record.total_g, "Sugar logged");
        self.sugar_log.append(record.clone());
        Ok(record)
    }

    pub fn sugar_records_on(&self, date: NaiveDate) -> Vec<SugarRecord> {
        self.sugar_log.records_on(date).cloned().collect()
    }

    pub fn sugar_total_g(&self, date: NaiveDate) -> f64 {
        self.sugar_log.total_g(date)
    }

    /// Sugar limit check for `date`, or `None` until a profile is set
    pub fn sugar_check(&self, date: NaiveDate) -> CoreResult<Option<SugarCheck>> {
        self.profile
            .as_ref()
            .map(|profile| SugarProfile::from(profile).check(self.sugar_total_g(date)))
            .transpose()
    }

    pub fn clear_date(&mut self, date: NaiveDate) -> usize {
        let removed = self.log.clear_date(date);
        info!(%date, removed, "Food log cleared for date");
        removed
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(TargetPolicy::default(), FeedbackBands::default())
    }
}
