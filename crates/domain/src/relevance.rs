//! Relevance of catalog exercises for a user profile.
//!
//! All functions borrow the catalog and return new sequences; the catalog itself is never
//! reordered.

use std::cmp::Reverse;

use crate::{Exercise, UserProfile};

/// Keeps the exercises suiting the profile's level and serving at least one of its goals.
///
/// An empty goal list does not exclude anything. Without a profile, all exercises are returned
/// in their original order.
#[must_use]
pub fn filter<'a>(
    exercises: impl IntoIterator<Item = &'a Exercise>,
    profile: Option<&UserProfile>,
) -> Vec<&'a Exercise> {
    let exercises = exercises.into_iter();
    let Some(profile) = profile else {
        return exercises.collect();
    };
    exercises
        .filter(|e| {
            e.suits(profile.level) && (profile.goals.is_empty() || e.serves_any(profile))
        })
        .collect()
}

/// Orders exercises by relevance, most relevant first.
///
/// Exercises whose difficulty equals the profile's level come first, ties are broken by the
/// number of matching goals. Exercises that compare equal keep their relative order.
#[must_use]
pub fn rank<'a>(
    exercises: impl IntoIterator<Item = &'a Exercise>,
    profile: &UserProfile,
) -> Vec<&'a Exercise> {
    let mut result = exercises.into_iter().collect::<Vec<_>>();
    let relevance = |e: &&Exercise| (e.difficulty == profile.level, e.matching_goals(profile));
    // `sort_by_key` is stable
    result.sort_by_key(|e| Reverse(relevance(e)));
    result
}

/// Filters the exercises and, if a profile is given, ranks the remaining ones.
#[must_use]
pub fn recommend<'a>(
    exercises: impl IntoIterator<Item = &'a Exercise>,
    profile: Option<&UserProfile>,
) -> Vec<&'a Exercise> {
    let filtered = filter(exercises, profile);
    match profile {
        Some(profile) => rank(filtered, profile),
        None => filtered,
    }
}

/// Distinct categories in order of first appearance.
#[must_use]
pub fn categories<'a>(exercises: impl IntoIterator<Item = &'a Exercise>) -> Vec<&'a str> {
    let mut result: Vec<&str> = vec![];
    for exercise in exercises {
        if !result.contains(&exercise.category.as_str()) {
            result.push(&exercise.category);
        }
    }
    result
}
