//! Summary counts for the admin dashboard.
//!
//! Derived from an in-memory report list without mutating it; the clock is
//! a parameter so the 7-day window is testable.

use chrono::{DateTime, Duration, Utc};

use crate::features::problems::models::{Problem, ProblemCategory, ProblemStatus};
use crate::shared::constants::RECENT_WINDOW_DAYS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCount {
    pub status: ProblemStatus,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: ProblemCategory,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemStats {
    pub total_problems: i64,
    /// One entry per status present in the list, in first-seen order
    pub problems_by_status: Vec<StatusCount>,
    /// One entry per category present in the list, in first-seen order
    pub problems_by_category: Vec<CategoryCount>,
    /// Problems created within the last 7x24h before `now`
    pub recent_problems: i64,
}

pub fn compute(problems: &[Problem], now: DateTime<Utc>) -> ProblemStats {
    let recent_cutoff = now - Duration::days(RECENT_WINDOW_DAYS);

    let mut by_status: Vec<StatusCount> = Vec::new();
    let mut by_category: Vec<CategoryCount> = Vec::new();
    let mut recent = 0i64;

    for problem in problems {
        match by_status.iter_mut().find(|s| s.status == problem.status) {
            Some(entry) => entry.count += 1,
            None => by_status.push(StatusCount {
                status: problem.status,
                count: 1,
            }),
        }

        match by_category
            .iter_mut()
            .find(|c| c.category == problem.category)
        {
            Some(entry) => entry.count += 1,
            None => by_category.push(CategoryCount {
                category: problem.category,
                count: 1,
            }),
        }

        if problem.created_at >= recent_cutoff {
            recent += 1;
        }
    }

    ProblemStats {
        total_problems: problems.len() as i64,
        problems_by_status: by_status,
        problems_by_category: by_category,
        recent_problems: recent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn problem(
        id: u128,
        status: ProblemStatus,
        category: ProblemCategory,
        created_at: DateTime<Utc>,
    ) -> Problem {
        Problem {
            id: Uuid::from_u128(id),
            owner_id: Uuid::from_u128(1),
            category,
            title: "t".to_string(),
            description: "d".to_string(),
            location_address: "l".to_string(),
            latitude: None,
            longitude: None,
            status,
            likes_count: 0,
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn test_empty_list_yields_zeroes() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        let stats = compute(&[], now);

        assert_eq!(stats.total_problems, 0);
        assert_eq!(stats.recent_problems, 0);
        assert!(stats.problems_by_status.is_empty());
        assert!(stats.problems_by_category.is_empty());
    }

    #[test]
    fn test_recent_window_includes_only_last_seven_days() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        let ten_days_ago = now - Duration::days(10);
        let one_day_ago = now - Duration::days(1);

        let problems = vec![
            problem(1, ProblemStatus::Pending, ProblemCategory::Pothole, ten_days_ago),
            problem(2, ProblemStatus::Pending, ProblemCategory::Pothole, one_day_ago),
        ];

        let stats = compute(&problems, now);

        assert_eq!(stats.total_problems, 2);
        assert_eq!(stats.recent_problems, 1);
    }

    #[test]
    fn test_groups_only_contain_values_present() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        let at = now - Duration::days(2);

        let problems = vec![
            problem(1, ProblemStatus::Pending, ProblemCategory::Pothole, at),
            problem(2, ProblemStatus::Pending, ProblemCategory::AccumulatedTrash, at),
            problem(3, ProblemStatus::Resolved, ProblemCategory::Pothole, at),
        ];

        let stats = compute(&problems, now);

        assert_eq!(
            stats.problems_by_status,
            vec![
                StatusCount {
                    status: ProblemStatus::Pending,
                    count: 2
                },
                StatusCount {
                    status: ProblemStatus::Resolved,
                    count: 1
                },
            ]
        );
        assert_eq!(stats.problems_by_category.len(), 2);
        assert_eq!(stats.problems_by_category[0].count, 2);
        // No entry for statuses or categories with zero members
        assert!(stats
            .problems_by_status
            .iter()
            .all(|s| s.status != ProblemStatus::InProgress));
    }
}
