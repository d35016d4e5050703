use sportif_domain::{Exercise, ExerciseFilter, QuestionResponse, UserProfile, recommend};

/// Profile and responses of the current user.
///
/// Completing the questionnaire or resetting replaces both at once.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UserSession {
    profile: Option<UserProfile>,
    responses: Vec<QuestionResponse>,
}

impl UserSession {
    #[must_use]
    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    #[must_use]
    pub fn responses(&self) -> &[QuestionResponse] {
        &self.responses
    }

    pub fn complete(&mut self, responses: Vec<QuestionResponse>, profile: UserProfile) {
        self.responses = responses;
        self.profile = Some(profile);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Recommended exercises narrowed down by the filter.
    #[must_use]
    pub fn exercises<'a>(
        &self,
        catalog: &'a [Exercise],
        filter: &ExerciseFilter,
    ) -> Vec<&'a Exercise> {
        filter.exercises(recommend(catalog, self.profile.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use sportif_domain::{Level, build_profile};

    use super::*;

    fn exercise(
        id: u32,
        name: &str,
        category: &str,
        difficulty: Level,
        goals: &[&str],
    ) -> Exercise {
        Exercise {
            id: id.into(),
            name: name.to_string(),
            category: category.to_string(),
            difficulty,
            target_muscles: vec![],
            description: String::new(),
            user_profiles: vec![Level::Beginner, Level::Intermediate],
            goals: goals.iter().map(ToString::to_string).collect(),
            instructions: vec![],
            common_mistakes: vec![],
            image_url: String::new(),
        }
    }

    fn catalog() -> Vec<Exercise> {
        vec![
            exercise(1, "Squat", "jambes", Level::Intermediate, &["force"]),
            exercise(2, "Planche", "gainage", Level::Beginner, &["posture"]),
            exercise(
                3,
                "Fente",
                "jambes",
                Level::Beginner,
                &["force", "endurance"],
            ),
        ]
    }

    fn responses() -> Vec<QuestionResponse> {
        vec![
            QuestionResponse::single(1, "débutant"),
            QuestionResponse::multiple(3, &["force", "endurance"]),
        ]
    }

    #[test]
    fn test_user_session_complete_and_reset() {
        let mut session = UserSession::default();

        assert_eq!(session.profile(), None);
        assert!(session.responses().is_empty());

        let profile = build_profile(&responses());
        session.complete(responses(), profile.clone());

        assert_eq!(session.profile(), Some(&profile));
        assert_eq!(session.responses(), responses());

        session.reset();

        assert_eq!(session, UserSession::default());
    }

    #[rstest]
    #[case::no_filter("", None, vec![3, 1])]
    #[case::category("", Some("jambes"), vec![3, 1])]
    #[case::search("squat", None, vec![1])]
    #[case::search_and_category("fente", Some("gainage"), vec![])]
    fn test_user_session_exercises(
        #[case] search: &str,
        #[case] category: Option<&str>,
        #[case] expected: Vec<u32>,
    ) {
        let mut session = UserSession::default();
        session.complete(responses(), build_profile(&responses()));
        let catalog = catalog();
        let filter = ExerciseFilter {
            search: search.to_string(),
            category: category.map(ToString::to_string),
        };

        assert_eq!(
            session
                .exercises(&catalog, &filter)
                .iter()
                .map(|e| *e.id)
                .collect::<Vec<_>>(),
            expected
        );
    }

    #[test]
    fn test_user_session_exercises_without_profile() {
        let session = UserSession::default();
        let catalog = catalog();

        assert_eq!(
            session
                .exercises(&catalog, &ExerciseFilter::default())
                .iter()
                .map(|e| *e.id)
                .collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }
}
