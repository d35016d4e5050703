use std::{fmt, slice::Iter};

use derive_more::{Deref, Display};

use crate::{Property, ReadError};

#[allow(async_fn_in_trait)]
pub trait QuestionRepository {
    async fn read_questions(&self) -> Result<Vec<Question>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait QuestionService {
    async fn get_questions(&self) -> Result<Vec<Question>, ReadError>;
    async fn get_question(&self, id: QuestionID) -> Result<Question, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionID,
    pub question: String,
    pub kind: QuestionKind,
    pub options: Vec<QuestionOption>,
}

impl Question {
    #[must_use]
    pub fn option(&self, value: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct QuestionID(u32);

impl From<u32> for QuestionID {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum QuestionKind {
    Single,
    Multiple,
}

impl Property for QuestionKind {
    fn iter() -> Iter<'static, QuestionKind> {
        static KIND: [QuestionKind; 2] = [QuestionKind::Single, QuestionKind::Multiple];
        KIND.iter()
    }

    fn name(self) -> &'static str {
        match self {
            QuestionKind::Single => "single",
            QuestionKind::Multiple => "multiple",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for QuestionKind {
    type Error = QuestionKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        QuestionKind::iter()
            .find(|k| k.name() == value)
            .copied()
            .ok_or_else(|| QuestionKindError::Invalid(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum QuestionKindError {
    #[error("Invalid question kind \"{0}\"")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionResponse {
    pub question_id: QuestionID,
    pub answer: Answer,
}

impl QuestionResponse {
    #[must_use]
    pub fn single(question_id: impl Into<QuestionID>, value: &str) -> Self {
        Self {
            question_id: question_id.into(),
            answer: Answer::Single(value.to_string()),
        }
    }

    #[must_use]
    pub fn multiple(question_id: impl Into<QuestionID>, values: &[&str]) -> Self {
        Self {
            question_id: question_id.into(),
            answer: Answer::Multiple(values.iter().map(ToString::to_string).collect()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Single(String),
    Multiple(Vec<String>),
}

impl Answer {
    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        match self {
            Answer::Single(_) => QuestionKind::Single,
            Answer::Multiple(_) => QuestionKind::Multiple,
        }
    }

    /// Selected option values, a single answer yielding one element.
    #[must_use]
    pub fn values(&self) -> &[String] {
        match self {
            Answer::Single(value) => std::slice::from_ref(value),
            Answer::Multiple(values) => values,
        }
    }
}
