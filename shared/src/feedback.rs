//! Intake feedback: how the day's calories compare with the target

use crate::errors::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// Categorical intake status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackStatus {
    Deficient,
    OnTarget,
    Excess,
}

impl FeedbackStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FeedbackStatus::Deficient => "deficient",
            FeedbackStatus::OnTarget => "on-target",
            FeedbackStatus::Excess => "excess",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FeedbackStatus::Deficient => "Intake is well below the target; add a balanced meal or snack.",
            FeedbackStatus::OnTarget => "Intake is within the target range.",
            FeedbackStatus::Excess => "Intake is above the target; consider lighter meals for the rest of the day.",
        }
    }
}

/// Percent-of-target band counted as on target (both ends inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedbackBands {
    pub low_pct: f64,
    pub high_pct: f64,
}

impl Default for FeedbackBands {
    fn default() -> Self {
        Self {
            low_pct: 70.0,
            high_pct: 110.0,
        }
    }
}

impl FeedbackBands {
    pub fn validate(&self) -> CoreResult<()> {
        if !self.low_pct.is_finite() || !self.high_pct.is_finite() {
            return Err(CoreError::InvalidInput(
                "feedback band limits must be valid numbers".to_string(),
            ));
        }
        if self.low_pct < 0.0 || self.low_pct >= self.high_pct {
            return Err(CoreError::InvalidInput(format!(
                "feedback band must satisfy 0 <= low < high, got {}..{}",
                self.low_pct, self.high_pct
            )));
        }
        Ok(())
    }

    pub fn classify_pct(&self, pct: f64) -> FeedbackStatus {
        if pct < self.low_pct {
            FeedbackStatus::Deficient
        } else if pct <= self.high_pct {
            FeedbackStatus::OnTarget
        } else {
            FeedbackStatus::Excess
        }
    }
}

/// Classifier output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub pct: f64,
    pub status: FeedbackStatus,
}

/// Percent of target reached; 0 when the target is 0
pub fn intake_pct(total_kcal: f64, target_kcal: f64) -> f64 {
    if target_kcal == 0.0 {
        return 0.0;
    }
    total_kcal * 100.0 / target_kcal
}

/// Classify a day's calories against the target
pub fn classify_intake(total_kcal: f64, target_kcal: f64, bands: &FeedbackBands) -> Feedback {
    let pct = intake_pct(total_kcal, target_kcal);
    Feedback {
        pct,
        status: bands.classify_pct(pct),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, FeedbackStatus::Deficient)]
    #[case(69.99, FeedbackStatus::Deficient)]
    #[case(70.0, FeedbackStatus::OnTarget)]
    #[case(100.0, FeedbackStatus::OnTarget)]
    #[case(110.0, FeedbackStatus::OnTarget)]
    #[case(110.01, FeedbackStatus::Excess)]
    fn test_band_boundaries(#[case] pct: f64, #[case] expected: FeedbackStatus) {
        assert_eq!(FeedbackBands::default().classify_pct(pct), expected);
    }

    #[test]
    fn test_exact_boundaries_through_kcal() {
        let bands = FeedbackBands::default();
        assert_eq!(classify_intake(1400.0, 2000.0, &bands).status, FeedbackStatus::OnTarget);
        assert_eq!(classify_intake(2200.0, 2000.0, &bands).status, FeedbackStatus::OnTarget);
    }

    #[test]
    fn test_zero_target_guard() {
        let feedback = classify_intake(0.0, 0.0, &FeedbackBands::default());
        assert_eq!(feedback.pct, 0.0);
        assert_eq!(feedback.status, FeedbackStatus::Deficient);

        let feedback = classify_intake(500.0, 0.0, &FeedbackBands::default());
        assert_eq!(feedback.pct, 0.0);
        assert_eq!(feedback.status, FeedbackStatus::Deficient);
    }

    #[test]
    fn test_status_serializes_as_label() {
        let json = serde_json::to_string(&FeedbackStatus::OnTarget).unwrap();
        assert_eq!(json, "\"on-target\"");
        assert_eq!(FeedbackStatus::OnTarget.label(), "on-target");
    }

    #[test]
    fn test_band_validation() {
        assert!(FeedbackBands::default().validate().is_ok());
        assert!(FeedbackBands { low_pct: 110.0, high_pct: 70.0 }.validate().is_err());
        assert!(FeedbackBands { low_pct: -1.0, high_pct: 70.0 }.validate().is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_status_matches_band(total in 0.0f64..10000.0, target in 1.0f64..5000.0) {
            let feedback = classify_intake(total, target, &FeedbackBands::default());
            let expected = if feedback.pct < 70.0 {
                FeedbackStatus::Deficient
            } else if feedback.pct <= 110.0 {
                FeedbackStatus::OnTarget
            } else {
                FeedbackStatus::Excess
            };
            prop_assert_eq!(feedback.status, expected);
        }
    }
}
