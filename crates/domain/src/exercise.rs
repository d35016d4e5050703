use derive_more::{Deref, Display};

use crate::{Level, ReadError, UserProfile};

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait ExerciseService {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    async fn get_exercise(&self, id: ExerciseID) -> Result<Exercise, ReadError>;
    async fn get_exercises_by_category(&self, category: &str) -> Result<Vec<Exercise>, ReadError>;
    async fn get_exercises_by_difficulty(
        &self,
        difficulty: Level,
    ) -> Result<Vec<Exercise>, ReadError>;
    async fn search_exercises(&self, query: &str) -> Result<Vec<Exercise>, ReadError>;
    async fn get_recommended_exercises(
        &self,
        profile: Option<&UserProfile>,
    ) -> Result<Vec<Exercise>, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: String,
    pub category: String,
    pub difficulty: Level,
    pub target_muscles: Vec<String>,
    pub description: String,
    /// Levels the exercise suits.
    pub user_profiles: Vec<Level>,
    /// Goals the exercise serves.
    pub goals: Vec<String>,
    pub instructions: Vec<String>,
    pub common_mistakes: Vec<String>,
    pub image_url: String,
}

impl Exercise {
    #[must_use]
    pub fn suits(&self, level: Level) -> bool {
        self.user_profiles.contains(&level)
    }

    #[must_use]
    pub fn serves_any(&self, profile: &UserProfile) -> bool {
        self.goals.iter().any(|g| profile.has_goal(g))
    }

    /// Number of the exercise's goals that are also goals of the profile.
    #[must_use]
    pub fn matching_goals(&self, profile: &UserProfile) -> usize {
        self.goals.iter().filter(|g| profile.has_goal(g)).count()
    }

    /// Case-insensitive match of `query` against name and description.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(u32);

impl From<u32> for ExerciseID {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Post-filters applied by the catalog view after the relevance ranking.
///
/// The relative order of the given exercises is kept.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub search: String,
    pub category: Option<String>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn exercises<'a>(
        &self,
        exercises: impl IntoIterator<Item = &'a Exercise>,
    ) -> Vec<&'a Exercise> {
        exercises
            .into_iter()
            .filter(|e| {
                self.category.as_ref().is_none_or(|c| *c == e.category)
                    && (self.search.trim().is_empty() || e.matches(&self.search))
            })
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.category.is_none()
    }

    pub fn select_category(&mut self, category: Option<&str>) {
        self.category = category.map(ToString::to_string);
    }
}
