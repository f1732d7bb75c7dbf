//! Pure filtering and search over a hydrated report list.
//!
//! All criteria are AND-combined and individually optional. The functions
//! here never touch the database and never re-sort: output order is
//! whatever the input order was (creation-descending in practice).

use chrono::{DateTime, NaiveDate, Utc};

use crate::features::problems::models::{ProblemCategory, ProblemStatus};
use crate::features::problems::snapshot::ProblemView;

#[derive(Debug, Clone, Default)]
pub struct ProblemFilter {
    /// Case-insensitive substring over title, description or address
    pub search: Option<String>,
    pub category: Option<ProblemCategory>,
    pub status: Option<ProblemStatus>,
    /// Case-insensitive substring over the address only (advanced filter)
    pub location: Option<String>,
    /// Inclusive, from 00:00:00 on the given day
    pub date_from: Option<NaiveDate>,
    /// Inclusive, through 23:59:59.999 on the given day
    pub date_to: Option<NaiveDate>,
}

impl ProblemFilter {
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.category.is_none()
            && self.status.is_none()
            && self.location.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }

    pub fn matches(&self, view: &ProblemView) -> bool {
        let problem = &view.problem;

        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let hit = problem.title.to_lowercase().contains(&needle)
                || problem.description.to_lowercase().contains(&needle)
                || problem.location_address.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        if let Some(category) = self.category {
            if problem.category != category {
                return false;
            }
        }

        if let Some(status) = self.status {
            if problem.status != status {
                return false;
            }
        }

        if let Some(location) = &self.location {
            if !problem
                .location_address
                .to_lowercase()
                .contains(&location.to_lowercase())
            {
                return false;
            }
        }

        if let Some(from) = self.date_from {
            if problem.created_at < start_of_day(from) {
                return false;
            }
        }

        if let Some(to) = self.date_to {
            if problem.created_at > end_of_day(to) {
                return false;
            }
        }

        true
    }

    /// Keep the matching subset, preserving input order
    pub fn apply(&self, views: Vec<ProblemView>) -> Vec<ProblemView> {
        if self.is_empty() {
            return views;
        }
        views.into_iter().filter(|v| self.matches(v)).collect()
    }
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid time")
        .and_utc()
}

fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .expect("end of day is always a valid time")
        .and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::problems::models::Problem;
    use crate::features::problems::snapshot::hydrate;
    use chrono::TimeZone;
    use std::collections::{HashMap, HashSet};
    use uuid::Uuid;

    fn view(id: u128, title: &str, address: &str, created_at: DateTime<Utc>) -> ProblemView {
        let problem = Problem {
            id: Uuid::from_u128(id),
            owner_id: Uuid::from_u128(1),
            category: ProblemCategory::Pothole,
            title: title.to_string(),
            description: "descrição".to_string(),
            location_address: address.to_string(),
            latitude: None,
            longitude: None,
            status: ProblemStatus::Pending,
            likes_count: 0,
            created_at,
            updated_at: created_at,
        };
        hydrate(vec![problem], HashMap::new(), &HashSet::new())
            .pop()
            .unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_filter_returns_input_unchanged() {
        use fake::faker::lorem::en::Sentence;
        use fake::Fake;

        // Content is irrelevant here: whatever comes in must go out as-is
        let views: Vec<ProblemView> = (1u128..=4)
            .map(|i| {
                view(
                    i,
                    &Sentence(1..4).fake::<String>(),
                    &Sentence(1..3).fake::<String>(),
                    at(2024, 5, i as u32, 9),
                )
            })
            .collect();

        let out = ProblemFilter::default().apply(views.clone());

        assert_eq!(out, views);
    }

    #[test]
    fn test_free_text_search_is_case_insensitive() {
        let views = vec![
            view(1, "Buraco na Rua X", "Centro", at(2024, 5, 2, 9)),
            view(2, "Lixo acumulado", "Centro", at(2024, 5, 1, 9)),
        ];

        let filter = ProblemFilter {
            search: Some("buraco".to_string()),
            ..Default::default()
        };
        let out = filter.apply(views);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].problem.title, "Buraco na Rua X");
    }

    #[test]
    fn test_free_text_search_matches_address_too() {
        let views = vec![
            view(1, "Poste apagado", "Rua das Flores", at(2024, 5, 2, 9)),
            view(2, "Poste apagado", "Av. Brasil", at(2024, 5, 1, 9)),
        ];

        let filter = ProblemFilter {
            search: Some("flores".to_string()),
            ..Default::default()
        };

        assert_eq!(filter.apply(views).len(), 1);
    }

    #[test]
    fn test_status_and_category_are_exact_matches() {
        let mut resolved = view(1, "a", "x", at(2024, 5, 2, 9));
        resolved.problem.status = ProblemStatus::Resolved;
        let mut trash = view(2, "b", "x", at(2024, 5, 1, 9));
        trash.problem.category = ProblemCategory::AccumulatedTrash;

        let by_status = ProblemFilter {
            status: Some(ProblemStatus::Resolved),
            ..Default::default()
        };
        assert_eq!(by_status.apply(vec![resolved.clone(), trash.clone()]).len(), 1);

        let by_category = ProblemFilter {
            category: Some(ProblemCategory::AccumulatedTrash),
            ..Default::default()
        };
        assert_eq!(by_category.apply(vec![resolved, trash]).len(), 1);
    }

    #[test]
    fn test_same_day_range_is_end_of_day_inclusive() {
        let d = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let filter = ProblemFilter {
            date_from: Some(d),
            date_to: Some(d),
            ..Default::default()
        };

        // 23:00 on the day is in, midnight of the next day is out
        let late = view(1, "a", "x", at(2024, 5, 10, 23));
        let next_day = view(2, "b", "x", at(2024, 5, 11, 0));

        let out = filter.apply(vec![late, next_day]);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].problem.id, Uuid::from_u128(1));
    }

    #[test]
    fn test_date_from_includes_midnight() {
        let d = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let filter = ProblemFilter {
            date_from: Some(d),
            ..Default::default()
        };

        let at_midnight = view(1, "a", "x", at(2024, 5, 10, 0));
        let day_before = view(2, "b", "x", at(2024, 5, 9, 23));

        let out = filter.apply(vec![at_midnight, day_before]);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].problem.id, Uuid::from_u128(1));
    }

    #[test]
    fn test_filter_is_idempotent_and_keeps_order() {
        let views = vec![
            view(3, "Buraco grande", "Centro", at(2024, 5, 3, 9)),
            view(2, "Buraco pequeno", "Bairro", at(2024, 5, 2, 9)),
            view(1, "Lixo", "Centro", at(2024, 5, 1, 9)),
        ];

        let filter = ProblemFilter {
            search: Some("buraco".to_string()),
            location: Some("centro".to_string()),
            ..Default::default()
        };

        let once = filter.apply(views);
        let twice = filter.apply(once.clone());

        assert_eq!(once, twice);
        assert_eq!(once.len(), 1);
        assert_eq!(once[0].problem.id, Uuid::from_u128(3));
    }
}
