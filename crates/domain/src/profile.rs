use std::{fmt, slice::Iter};

use log::debug;

use crate::{Answer, Property, Question, QuestionID, QuestionKind, QuestionResponse};

/// Sport profile derived from the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub level: Level,
    pub sports: Vec<String>,
    pub goals: Vec<String>,
    pub frequency: Frequency,
    pub limitations: String,
    pub duration: SessionDuration,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            level: Level::default(),
            sports: vec![],
            goals: vec![],
            frequency: Frequency::default(),
            limitations: "aucune".to_string(),
            duration: SessionDuration::default(),
        }
    }
}

impl UserProfile {
    #[must_use]
    pub fn has_goal(&self, goal: &str) -> bool {
        self.goals.iter().any(|g| g == goal)
    }
}

#[derive(Clone, Copy, Default, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Property for Level {
    fn iter() -> Iter<'static, Level> {
        static LEVEL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];
        LEVEL.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Level::Beginner => "débutant",
            Level::Intermediate => "intermédiaire",
            Level::Advanced => "avancé",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for Level {
    type Error = LevelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Level::iter()
            .find(|l| l.name() == value)
            .copied()
            .ok_or_else(|| LevelError::Invalid(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("Invalid level \"{0}\"")]
    Invalid(String),
}

#[derive(Clone, Copy, Default, Debug, Eq, Hash, PartialEq)]
pub enum Frequency {
    #[default]
    Low,
    Moderate,
    High,
}

impl Frequency {
    /// Maps a sessions-per-week range ("1-2", "3-4", "5+").
    #[must_use]
    pub fn from_sessions_per_week(value: &str) -> Option<Self> {
        match value {
            "1-2" => Some(Frequency::Low),
            "3-4" => Some(Frequency::Moderate),
            "5+" => Some(Frequency::High),
            _ => None,
        }
    }
}

impl Property for Frequency {
    fn iter() -> Iter<'static, Frequency> {
        static FREQUENCY: [Frequency; 3] = [Frequency::Low, Frequency::Moderate, Frequency::High];
        FREQUENCY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Frequency::Low => "faible",
            Frequency::Moderate => "modérée",
            Frequency::High => "élevée",
        }
    }
}

#[derive(Clone, Copy, Default, Debug, Eq, Hash, PartialEq)]
pub enum SessionDuration {
    #[default]
    Short,
    Medium,
    Long,
}

impl SessionDuration {
    /// Maps a minutes range ("15-30", "30-45", "45+").
    #[must_use]
    pub fn from_minutes(value: &str) -> Option<Self> {
        match value {
            "15-30" => Some(SessionDuration::Short),
            "30-45" => Some(SessionDuration::Medium),
            "45+" => Some(SessionDuration::Long),
            _ => None,
        }
    }
}

impl Property for SessionDuration {
    fn iter() -> Iter<'static, SessionDuration> {
        static DURATION: [SessionDuration; 3] = [
            SessionDuration::Short,
            SessionDuration::Medium,
            SessionDuration::Long,
        ];
        DURATION.iter()
    }

    fn name(self) -> &'static str {
        match self {
            SessionDuration::Short => "courte",
            SessionDuration::Medium => "moyenne",
            SessionDuration::Long => "longue",
        }
    }
}

/// Handling of answers that do not fit the question they belong to.
#[derive(Clone, Copy, Default, Debug, Eq, PartialEq)]
pub enum ValidationPolicy {
    #[default]
    Ignore,
    Error,
}

/// The questions the profile is derived from, identified by their fixed question ID.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ProfileQuestion {
    Level = 1,
    Sports = 2,
    Goals = 3,
    Frequency = 4,
    Limitations = 5,
    Duration = 6,
}

impl ProfileQuestion {
    #[must_use]
    pub fn id(self) -> QuestionID {
        (self as u32).into()
    }

    #[must_use]
    pub fn kind(self) -> QuestionKind {
        match self {
            ProfileQuestion::Sports | ProfileQuestion::Goals => QuestionKind::Multiple,
            ProfileQuestion::Level
            | ProfileQuestion::Frequency
            | ProfileQuestion::Limitations
            | ProfileQuestion::Duration => QuestionKind::Single,
        }
    }
}

impl Property for ProfileQuestion {
    fn iter() -> Iter<'static, ProfileQuestion> {
        static QUESTIONS: [ProfileQuestion; 6] = [
            ProfileQuestion::Level,
            ProfileQuestion::Sports,
            ProfileQuestion::Goals,
            ProfileQuestion::Frequency,
            ProfileQuestion::Limitations,
            ProfileQuestion::Duration,
        ];
        QUESTIONS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            ProfileQuestion::Level => "level",
            ProfileQuestion::Sports => "sports",
            ProfileQuestion::Goals => "goals",
            ProfileQuestion::Frequency => "frequency",
            ProfileQuestion::Limitations => "limitations",
            ProfileQuestion::Duration => "duration",
        }
    }
}

impl TryFrom<QuestionID> for ProfileQuestion {
    type Error = QuestionID;

    fn try_from(value: QuestionID) -> Result<Self, Self::Error> {
        ProfileQuestion::iter()
            .find(|q| q.id() == value)
            .copied()
            .ok_or(value)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("question {question_id} expects a {expected} answer, not a {actual} one")]
    ShapeMismatch {
        question_id: QuestionID,
        expected: QuestionKind,
        actual: QuestionKind,
    },
    #[error("question {question_id} has unrecognized answer \"{answer}\"")]
    UnrecognizedAnswer {
        question_id: QuestionID,
        answer: String,
    },
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ProfileBuilder {
    policy: ValidationPolicy,
}

impl ProfileBuilder {
    #[must_use]
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    /// Derives a profile from the default profile by applying each response in turn.
    ///
    /// Responses to unknown questions are skipped regardless of the policy. If a question is
    /// answered more than once, the last response wins.
    pub fn build(self, responses: &[QuestionResponse]) -> Result<UserProfile, ProfileError> {
        let mut profile = UserProfile::default();
        for response in responses {
            self.apply(&mut profile, response)?;
        }
        Ok(profile)
    }

    /// Checks a single response without deriving a profile.
    pub fn check(self, response: &QuestionResponse) -> Result<(), ProfileError> {
        self.apply(&mut UserProfile::default(), response)
    }

    fn apply(
        self,
        profile: &mut UserProfile,
        response: &QuestionResponse,
    ) -> Result<(), ProfileError> {
        let Ok(question) = ProfileQuestion::try_from(response.question_id) else {
            debug!("ignoring unknown question {}", response.question_id);
            return Ok(());
        };

        match (question, &response.answer) {
            (ProfileQuestion::Level, Answer::Single(value)) => {
                match Level::try_from(value.as_str()) {
                    Ok(level) => profile.level = level,
                    Err(_) => self.reject(unrecognized(question, value))?,
                }
            }
            (ProfileQuestion::Sports, Answer::Multiple(values)) => {
                profile.sports.clone_from(values);
            }
            (ProfileQuestion::Goals, Answer::Multiple(values)) => {
                profile.goals.clone_from(values);
            }
            (ProfileQuestion::Frequency, Answer::Single(value)) => {
                match Frequency::from_sessions_per_week(value) {
                    Some(frequency) => profile.frequency = frequency,
                    None => self.reject(unrecognized(question, value))?,
                }
            }
            (ProfileQuestion::Limitations, Answer::Single(value)) => {
                profile.limitations.clone_from(value);
            }
            (ProfileQuestion::Duration, Answer::Single(value)) => {
                match SessionDuration::from_minutes(value) {
                    Some(duration) => profile.duration = duration,
                    None => self.reject(unrecognized(question, value))?,
                }
            }
            (question, answer) => self.reject(ProfileError::ShapeMismatch {
                question_id: question.id(),
                expected: question.kind(),
                actual: answer.kind(),
            })?,
        }

        Ok(())
    }

    fn reject(self, error: ProfileError) -> Result<(), ProfileError> {
        match self.policy {
            ValidationPolicy::Ignore => {
                debug!("ignoring answer: {error}");
                Ok(())
            }
            ValidationPolicy::Error => Err(error),
        }
    }
}

fn unrecognized(question: ProfileQuestion, answer: &str) -> ProfileError {
    ProfileError::UnrecognizedAnswer {
        question_id: question.id(),
        answer: answer.to_string(),
    }
}

/// Derives a profile, silently skipping answers that do not fit their question.
#[must_use]
pub fn build_profile(responses: &[QuestionResponse]) -> UserProfile {
    // The lenient policy never rejects an answer.
    ProfileBuilder::new(ValidationPolicy::Ignore)
        .build(responses)
        .unwrap_or_default()
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignmentError {
    #[error("question {0} is missing")]
    Missing(QuestionID),
    #[error("question {question_id} is {actual}, but {expected} is expected")]
    KindMismatch {
        question_id: QuestionID,
        expected: QuestionKind,
        actual: QuestionKind,
    },
}

/// Checks that the questionnaire provides every profile question with the expected kind.
pub fn check_alignment(questions: &[Question]) -> Result<(), AlignmentError> {
    for profile_question in ProfileQuestion::iter() {
        let id = profile_question.id();
        let Some(question) = questions.iter().find(|q| q.id == id) else {
            return Err(AlignmentError::Missing(id));
        };
        if question.kind != profile_question.kind() {
            return Err(AlignmentError::KindMismatch {
                question_id: id,
                expected: profile_question.kind(),
                actual: question.kind,
            });
        }
    }
    Ok(())
}
