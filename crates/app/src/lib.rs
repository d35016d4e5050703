#![warn(clippy::pedantic)]

pub mod log;
mod questionnaire;
mod service;
mod session;
mod settings;

pub use questionnaire::{Questionnaire, QuestionnaireError, Step};
pub use service::Service;
pub use session::UserSession;
pub use settings::{Settings, SettingsRepository, SettingsService};
