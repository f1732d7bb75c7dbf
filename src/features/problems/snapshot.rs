//! In-memory view of the report collection.
//!
//! The HTTP layer serves hydrated snapshots: each problem row joined with its
//! image URLs and a per-viewer "has liked" flag. Hydration and the
//! confirm-then-apply like transitions are pure functions over immutable
//! data, so the bookkeeping can be tested without a database.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::features::problems::models::Problem;

/// A problem row hydrated for a particular viewer
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemView {
    pub problem: Problem,
    /// Attached image URLs, in attachment order
    pub images: Vec<String>,
    /// Whether the viewing identity has liked this problem.
    /// Always false for anonymous viewers.
    pub user_has_liked: bool,
}

/// Join problem rows with their images and the viewer's liked set.
///
/// Input order is preserved. Problems without images get an empty list;
/// an empty `liked` set (the anonymous case) marks every flag false.
pub fn hydrate(
    problems: Vec<Problem>,
    mut images: HashMap<Uuid, Vec<String>>,
    liked: &HashSet<Uuid>,
) -> Vec<ProblemView> {
    problems
        .into_iter()
        .map(|problem| {
            let problem_images = images.remove(&problem.id).unwrap_or_default();
            let user_has_liked = liked.contains(&problem.id);
            ProblemView {
                problem,
                images: problem_images,
                user_has_liked,
            }
        })
        .collect()
}

/// Apply a like toggle that the backend has already confirmed.
///
/// Flips the flag and moves the count by one in the corresponding
/// direction, returning a new snapshot. Callers only invoke this after the
/// insert/delete committed, so a failed backend call leaves the previous
/// snapshot untouched.
pub fn apply_confirmed_toggle(view: ProblemView) -> ProblemView {
    let delta = if view.user_has_liked { -1 } else { 1 };
    ProblemView {
        problem: Problem {
            likes_count: view.problem.likes_count + delta,
            ..view.problem
        },
        user_has_liked: !view.user_has_liked,
        images: view.images,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::problems::models::{ProblemCategory, ProblemStatus};
    use chrono::{TimeZone, Utc};

    fn sample_problem(id: u128, likes: i64) -> Problem {
        Problem {
            id: Uuid::from_u128(id),
            owner_id: Uuid::from_u128(1),
            category: ProblemCategory::Pothole,
            title: "Buraco na Rua X".to_string(),
            description: "Buraco grande na pista".to_string(),
            location_address: "Rua X, Centro".to_string(),
            latitude: None,
            longitude: None,
            status: ProblemStatus::Pending,
            likes_count: likes,
            created_at: Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_hydrate_preserves_order_and_attaches_images() {
        let problems = vec![sample_problem(10, 0), sample_problem(20, 3)];
        let mut images = HashMap::new();
        images.insert(
            Uuid::from_u128(20),
            vec!["http://img/a.jpg".to_string(), "http://img/b.jpg".to_string()],
        );

        let views = hydrate(problems, images, &HashSet::new());

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].problem.id, Uuid::from_u128(10));
        assert!(views[0].images.is_empty());
        assert_eq!(views[1].images.len(), 2);
        assert_eq!(views[1].images[0], "http://img/a.jpg");
    }

    #[test]
    fn test_hydrate_anonymous_viewer_never_has_liked() {
        let problems = vec![sample_problem(1, 5), sample_problem(2, 2)];

        // No liked set at all: every flag must come out false even though
        // like rows exist (the counts are non-zero)
        let views = hydrate(problems, HashMap::new(), &HashSet::new());

        assert!(views.iter().all(|v| !v.user_has_liked));
    }

    #[test]
    fn test_hydrate_marks_viewer_likes() {
        let problems = vec![sample_problem(1, 5), sample_problem(2, 2)];
        let liked: HashSet<Uuid> = [Uuid::from_u128(2)].into_iter().collect();

        let views = hydrate(problems, HashMap::new(), &liked);

        assert!(!views[0].user_has_liked);
        assert!(views[1].user_has_liked);
    }

    #[test]
    fn test_toggle_like_then_unlike_round_trips() {
        let original = hydrate(vec![sample_problem(7, 4)], HashMap::new(), &HashSet::new())
            .pop()
            .unwrap();

        let liked = apply_confirmed_toggle(original.clone());
        assert!(liked.user_has_liked);
        assert_eq!(liked.problem.likes_count, 5);

        let back = apply_confirmed_toggle(liked);
        assert_eq!(back, original);
    }

    #[test]
    fn test_toggle_unlike_decrements() {
        let liked: HashSet<Uuid> = [Uuid::from_u128(7)].into_iter().collect();
        let view = hydrate(vec![sample_problem(7, 4)], HashMap::new(), &liked)
            .pop()
            .unwrap();

        let unliked = apply_confirmed_toggle(view);
        assert!(!unliked.user_has_liked);
        assert_eq!(unliked.problem.likes_count, 3);
    }
}
