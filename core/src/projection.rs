use serde::{Deserialize, Serialize};

use crate::model::record::AttendanceRecord;

/// Attendance thresholds offered by the calculators.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Minimum,
    Safe,
    Good,
    Excellent,
}

impl Target {
    pub const ALL: [Target; 4] = [Target::Minimum, Target::Safe, Target::Good, Target::Excellent];

    /// Rows of the days-needed projection.
    pub const PROJECTED: [Target; 3] = [Target::Minimum, Target::Safe, Target::Good];

    pub fn percent(self) -> u32 {
        match self {
            Target::Minimum => 75,
            Target::Safe => 80,
            Target::Good => 85,
            Target::Excellent => 90,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Target::Minimum => "Min",
            Target::Safe => "Safe",
            Target::Good => "Good",
            Target::Excellent => "Excellent",
        }
    }

    pub fn from_percent(percent: u32) -> Option<Target> {
        Target::ALL.into_iter().find(|t| t.percent() == percent)
    }

    /// Menu choice 1-4, in ascending order of percent.
    pub fn from_choice(choice: u32) -> Option<Target> {
        let index = usize::try_from(choice).ok()?.checked_sub(1)?;
        Target::ALL.get(index).copied()
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Attendance percentage to two decimals, ties rounded to even.
/// An empty month is 0.0 rather than NaN.
pub fn percentage(days_present: u32, total_days: u32) -> f64 {
    if total_days == 0 {
        return 0.0;
    }
    let raw = f64::from(days_present) / f64::from(total_days) * 100.0;
    round2(raw)
}

/// Smallest whole number of present days that reaches `target_percent` of
/// `total_days`.
pub fn required_days_for_target(target_percent: u32, total_days: u32) -> u32 {
    let required = (u64::from(target_percent) * u64::from(total_days)).div_ceil(100);
    u32::try_from(required).unwrap_or(u32::MAX)
}

/// Additional present days needed by month end. Zero or negative when the
/// target is already secured; may exceed `remaining_days`.
pub fn days_needed(record: &AttendanceRecord, remaining_days: u32, target_percent: u32) -> i64 {
    let new_total = record.total_days() + remaining_days;
    let required = required_days_for_target(target_percent, new_total);
    i64::from(required) - i64::from(record.days_present())
}

/// Leaves that can still be taken while reaching `target_percent`.
/// Negative means unreachable; the magnitude is the present-day shortfall.
pub fn safe_leaves(record: &AttendanceRecord, remaining_days: u32, target_percent: u32) -> i64 {
    i64::from(remaining_days) - days_needed(record, remaining_days, target_percent)
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TargetProjection {
    pub target: Target,
    pub required_present: u32,
    pub days_needed: i64,
    /// `remaining - max(0, days_needed)`. Only negative when not achievable.
    pub leaves_available: i64,
    pub achievable: bool,
}

impl TargetProjection {
    /// Days to attend, never below zero.
    pub fn days_to_attend(&self) -> u32 {
        u32::try_from(self.days_needed.max(0)).unwrap_or(u32::MAX)
    }

    /// Leave count suitable for display, never below zero.
    pub fn suggested_leaves(&self) -> u32 {
        u32::try_from(self.leaves_available.max(0)).unwrap_or(u32::MAX)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub new_total: u32,
    pub remaining_days: u32,
    pub targets: Vec<TargetProjection>,
}

impl Projection {
    pub fn for_target(&self, target: Target) -> Option<&TargetProjection> {
        self.targets.iter().find(|t| t.target == target)
    }

    /// Recommendation against the minimum requirement.
    pub fn advice(&self) -> ProjectionAdvice {
        let needed = self
            .for_target(Target::Minimum)
            .map(|t| t.days_needed)
            .unwrap_or(0);
        ProjectionAdvice::new(needed, self.remaining_days)
    }
}

/// Projects the 75/80/85% targets over the rest of the month.
/// Returns `None` when there are no remaining days to project over.
pub fn projection(record: &AttendanceRecord, remaining_days: u32) -> Option<Projection> {
    if remaining_days == 0 {
        return None;
    }

    let new_total = record.total_days() + remaining_days;
    let remaining = i64::from(remaining_days);

    let targets = Target::PROJECTED
        .into_iter()
        .map(|target| {
            let days_needed = days_needed(record, remaining_days, target.percent());
            TargetProjection {
                target,
                required_present: required_days_for_target(target.percent(), new_total),
                days_needed,
                leaves_available: remaining - days_needed.max(0),
                achievable: days_needed <= remaining,
            }
        })
        .collect();

    Some(Projection {
        new_total,
        remaining_days,
        targets,
    })
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProjectionAdvice {
    /// Target already met; leaves include the surplus present days.
    AlreadyQualified { extra_leaves: u32 },
    AttendAtLeast { days: u32, of: u32 },
    Unreachable { shortfall: u32 },
}

impl ProjectionAdvice {
    pub fn new(days_needed: i64, remaining_days: u32) -> Self {
        let remaining = i64::from(remaining_days);
        let clamp = |v: i64| u32::try_from(v).unwrap_or(u32::MAX);

        if days_needed <= 0 {
            ProjectionAdvice::AlreadyQualified {
                extra_leaves: clamp(remaining + days_needed.abs()),
            }
        } else if days_needed <= remaining {
            ProjectionAdvice::AttendAtLeast {
                days: clamp(days_needed),
                of: remaining_days,
            }
        } else {
            ProjectionAdvice::Unreachable {
                shortfall: clamp(days_needed - remaining),
            }
        }
    }
}

/// Breakdown behind `safe_leaves` for one target.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SafeLeaves {
    pub target: Target,
    pub new_total: u32,
    pub required_present: u32,
    pub currently_present: u32,
    pub additional_needed: i64,
    pub safe_leaves: i64,
}

impl SafeLeaves {
    pub fn is_reachable(&self) -> bool {
        self.safe_leaves >= 0
    }

    /// Present days missing even with zero leave.
    pub fn shortfall(&self) -> u32 {
        u32::try_from((-self.safe_leaves).max(0)).unwrap_or(u32::MAX)
    }
}

pub fn safe_leaves_breakdown(record: &AttendanceRecord, remaining_days: u32, target: Target) -> SafeLeaves {
    let new_total = record.total_days() + remaining_days;
    let required_present = required_days_for_target(target.percent(), new_total);
    let additional_needed = i64::from(required_present) - i64::from(record.days_present());

    SafeLeaves {
        target,
        new_total,
        required_present,
        currently_present: record.days_present(),
        additional_needed,
        safe_leaves: i64::from(remaining_days) - additional_needed,
    }
}
