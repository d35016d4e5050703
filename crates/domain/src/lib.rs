#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::slice::Iter;

mod error;
mod exercise;
mod product;
mod profile;
mod question;
mod relevance;
mod service;

pub use error::{ReadError, StorageError};
pub use exercise::{Exercise, ExerciseFilter, ExerciseID, ExerciseRepository, ExerciseService};
pub use product::{Product, ProductID, ProductRepository, ProductService};
pub use profile::{
    AlignmentError, Frequency, Level, LevelError, ProfileBuilder, ProfileError, ProfileQuestion,
    SessionDuration, UserProfile, ValidationPolicy, build_profile, check_alignment,
};
pub use question::{
    Answer, Question, QuestionID, QuestionKind, QuestionKindError, QuestionOption,
    QuestionRepository, QuestionResponse, QuestionService,
};
pub use relevance::{categories, filter, rank, recommend};
pub use service::Service;

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
