use serde::Serialize;

use crate::projection::round2;

pub const MINIMUM_ATTENDANCE_PERCENT: f64 = 75.0;

/// Attendance bands, ordered from worst to best.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusTier {
    Critical,
    Satisfactory,
    Good,
    VeryGood,
    Excellent,
}

impl StatusTier {
    pub fn label(self) -> &'static str {
        match self {
            StatusTier::Critical => "CRITICAL",
            StatusTier::Satisfactory => "SATISFACTORY",
            StatusTier::Good => "GOOD",
            StatusTier::VeryGood => "VERY GOOD",
            StatusTier::Excellent => "EXCELLENT",
        }
    }

    pub fn rating(self) -> &'static str {
        match self {
            StatusTier::Critical => "⚠",
            StatusTier::Satisfactory => "✓",
            StatusTier::Good => "★☆☆",
            StatusTier::VeryGood => "★★☆",
            StatusTier::Excellent => "★★★",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            StatusTier::Critical => "Below minimum! Take action now!",
            StatusTier::Satisfactory => "Just meeting the requirement.",
            StatusTier::Good => "Good, but aim higher!",
            StatusTier::VeryGood => "Great attendance record!",
            StatusTier::Excellent => "Outstanding attendance! Keep it up!",
        }
    }
}

/// Lower bound of each band is inclusive: 75.00 is Satisfactory.
pub fn classify(percentage: f64) -> StatusTier {
    if percentage >= 90.0 {
        StatusTier::Excellent
    } else if percentage >= 85.0 {
        StatusTier::VeryGood
    } else if percentage >= 80.0 {
        StatusTier::Good
    } else if percentage >= MINIMUM_ATTENDANCE_PERCENT {
        StatusTier::Satisfactory
    } else {
        StatusTier::Critical
    }
}

/// Signed distance from `minimum`, to two decimals. Positive is above.
pub fn delta_from_minimum(percentage: f64, minimum: f64) -> f64 {
    round2(percentage - minimum)
}

pub fn is_eligible(percentage: f64) -> bool {
    percentage >= MINIMUM_ATTENDANCE_PERCENT
}

/// Monthly report recommendations. Coarser than `StatusTier`: 80-90 share one band.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportAdvice {
    ImproveNow,
    Maintain,
    KeepItUp,
    Outstanding,
}

impl ReportAdvice {
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage < MINIMUM_ATTENDANCE_PERCENT {
            ReportAdvice::ImproveNow
        } else if percentage < 80.0 {
            ReportAdvice::Maintain
        } else if percentage < 90.0 {
            ReportAdvice::KeepItUp
        } else {
            ReportAdvice::Outstanding
        }
    }

    pub fn recommendations(self) -> [&'static str; 2] {
        match self {
            ReportAdvice::ImproveNow => [
                "Improve attendance immediately",
                "Avoid taking any more leaves",
            ],
            ReportAdvice::Maintain => [
                "Maintain current attendance",
                "Limit leaves to emergencies only",
            ],
            ReportAdvice::KeepItUp => ["Good job! Keep it up", "You have some buffer for leaves"],
            ReportAdvice::Outstanding => [
                "Excellent attendance!",
                "You're setting a great example",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(74.99), StatusTier::Critical);
        assert_eq!(classify(75.00), StatusTier::Satisfactory);
        assert_eq!(classify(79.99), StatusTier::Satisfactory);
        assert_eq!(classify(80.00), StatusTier::Good);
        assert_eq!(classify(84.99), StatusTier::Good);
        assert_eq!(classify(85.00), StatusTier::VeryGood);
        assert_eq!(classify(89.99), StatusTier::VeryGood);
        assert_eq!(classify(90.00), StatusTier::Excellent);
        assert_eq!(classify(100.0), StatusTier::Excellent);
        assert_eq!(classify(0.0), StatusTier::Critical);
    }

    #[test]
    fn test_tiers_are_ordered() {
        assert!(StatusTier::Critical < StatusTier::Satisfactory);
        assert!(StatusTier::VeryGood < StatusTier::Excellent);
        assert!(classify(60.0) <= classify(61.0));
    }

    #[test]
    fn test_delta_from_minimum() {
        assert_eq!(delta_from_minimum(94.44, MINIMUM_ATTENDANCE_PERCENT), 19.44);
        assert_eq!(delta_from_minimum(70.0, MINIMUM_ATTENDANCE_PERCENT), -5.0);
        assert_eq!(delta_from_minimum(74.99, MINIMUM_ATTENDANCE_PERCENT), -0.01);
        assert_eq!(delta_from_minimum(75.0, MINIMUM_ATTENDANCE_PERCENT), 0.0);
        assert_eq!(delta_from_minimum(88.0, 80.0), 8.0);
    }

    #[test]
    fn test_eligibility() {
        assert!(is_eligible(75.0));
        assert!(!is_eligible(74.99));
    }

    #[test]
    fn test_report_advice_bands() {
        assert_eq!(ReportAdvice::for_percentage(74.99), ReportAdvice::ImproveNow);
        assert_eq!(ReportAdvice::for_percentage(75.0), ReportAdvice::Maintain);
        assert_eq!(ReportAdvice::for_percentage(80.0), ReportAdvice::KeepItUp);
        assert_eq!(ReportAdvice::for_percentage(89.99), ReportAdvice::KeepItUp);
        assert_eq!(ReportAdvice::for_percentage(90.0), ReportAdvice::Outstanding);
        assert_eq!(
            ReportAdvice::ImproveNow.recommendations()[1],
            "Avoid taking any more leaves"
        );
    }
}
