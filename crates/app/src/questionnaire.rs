use log::debug;
use sportif_domain::{
    Answer, ProfileBuilder, ProfileError, Question, QuestionKind, QuestionResponse, UserProfile,
    ValidationPolicy,
};

/// Outcome of answering the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Next,
    Completed(UserProfile),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuestionnaireError {
    #[error("no questions available")]
    NoQuestions,
    #[error("no answer selected")]
    NoSelection,
    #[error("questionnaire already completed")]
    AlreadyCompleted,
    #[error(transparent)]
    Profile(#[from] ProfileError),
}

/// Step-by-step answering of a questionnaire.
///
/// Responses accumulate one per answered question. Stepping back removes the most recent
/// response and restores it as the current selection. Answering the last question derives the
/// profile from all responses.
#[derive(Debug, Clone)]
pub struct Questionnaire {
    questions: Vec<Question>,
    current: usize,
    responses: Vec<QuestionResponse>,
    selected: Vec<String>,
    completed: bool,
}

impl Questionnaire {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current: 0,
            responses: vec![],
            selected: vec![],
            completed: false,
        }
    }

    #[must_use]
    pub fn question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn responses(&self) -> &[QuestionResponse] {
        &self.responses
    }

    #[must_use]
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    #[must_use]
    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|v| v == value)
    }

    /// Position of the current question in percent.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f32 {
        if self.questions.is_empty() {
            return 0.0;
        }
        (self.current + 1) as f32 / self.questions.len() as f32 * 100.0
    }

    #[must_use]
    pub fn can_proceed(&self) -> bool {
        !self.completed && !self.selected.is_empty()
    }

    /// Selects an option of the current question.
    ///
    /// For single-choice questions the selection is replaced, for multiple-choice questions the
    /// option is toggled. Values that are not an option of the current question are ignored.
    pub fn select(&mut self, value: &str) {
        let Some(question) = self.question() else {
            return;
        };
        if question.option(value).is_none() {
            debug!(
                "ignoring selection of \"{value}\" for question {}",
                question.id
            );
            return;
        }
        match question.kind {
            QuestionKind::Single => {
                self.selected = vec![value.to_string()];
            }
            QuestionKind::Multiple => {
                if self.is_selected(value) {
                    self.selected.retain(|v| v != value);
                } else {
                    self.selected.push(value.to_string());
                }
            }
        }
    }

    /// Records the selection as response to the current question.
    ///
    /// # Errors
    ///
    /// Returns an error if the questionnaire is completed or empty, nothing is selected, or the
    /// response is rejected under the given policy. The questionnaire stays unchanged in that
    /// case.
    pub fn next(&mut self, policy: ValidationPolicy) -> Result<Step, QuestionnaireError> {
        if self.completed {
            return Err(QuestionnaireError::AlreadyCompleted);
        }
        let Some(question) = self.question() else {
            return Err(QuestionnaireError::NoQuestions);
        };
        let answer = match question.kind {
            QuestionKind::Single => match self.selected.first() {
                Some(value) => Answer::Single(value.clone()),
                None => return Err(QuestionnaireError::NoSelection),
            },
            QuestionKind::Multiple if self.selected.is_empty() => {
                return Err(QuestionnaireError::NoSelection);
            }
            QuestionKind::Multiple => Answer::Multiple(self.selected.clone()),
        };
        let response = QuestionResponse {
            question_id: question.id,
            answer,
        };
        let builder = ProfileBuilder::new(policy);
        builder.check(&response)?;

        if !self.is_last() {
            self.responses.push(response);
            self.current += 1;
            self.selected.clear();
            return Ok(Step::Next);
        }

        let mut responses = self.responses.clone();
        responses.push(response);
        let profile = builder.build(&responses)?;
        debug!("questionnaire completed with {} responses", responses.len());
        self.responses = responses;
        self.completed = true;

        Ok(Step::Completed(profile))
    }

    /// Steps back to the previous question.
    ///
    /// Returns false if there is no previous question or the questionnaire is completed.
    pub fn previous(&mut self) -> bool {
        if self.completed || self.current == 0 {
            return false;
        }
        self.current -= 1;
        if let Some(response) = self.responses.pop() {
            self.selected = response.answer.values().to_vec();
        }
        true
    }
}
