use log::{debug, error};

use crate::{
    Exercise, ExerciseID, ExerciseRepository, ExerciseService, Level, Product, ProductID,
    ProductRepository, ProductService, Question, QuestionID, QuestionRepository, QuestionService,
    ReadError, UserProfile, recommend,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: QuestionRepository> QuestionService for Service<R> {
    async fn get_questions(&self) -> Result<Vec<Question>, ReadError> {
        log_on_error!(
            self.repository.read_questions(),
            ReadError,
            "get",
            "questions"
        )
    }

    async fn get_question(&self, id: QuestionID) -> Result<Question, ReadError> {
        log_on_error!(
            async {
                self.repository
                    .read_questions()
                    .await?
                    .into_iter()
                    .find(|q| q.id == id)
                    .ok_or(ReadError::NotFound)
            },
            ReadError,
            "get",
            "question"
        )
    }
}

impl<R: ExerciseRepository> Service<R> {
    async fn read_exercises_where(
        &self,
        predicate: impl Fn(&Exercise) -> bool,
    ) -> Result<Vec<Exercise>, ReadError> {
        Ok(self
            .repository
            .read_exercises()
            .await?
            .into_iter()
            .filter(|e| predicate(e))
            .collect())
    }

    async fn recommended_exercises(
        &self,
        profile: Option<&UserProfile>,
    ) -> Result<Vec<Exercise>, ReadError> {
        let exercises = self.repository.read_exercises().await?;
        Ok(recommend(&exercises, profile)
            .into_iter()
            .cloned()
            .collect())
    }
}

impl<R: ExerciseRepository> ExerciseService for Service<R> {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.repository.read_exercises(),
            ReadError,
            "get",
            "exercises"
        )
    }

    async fn get_exercise(&self, id: ExerciseID) -> Result<Exercise, ReadError> {
        log_on_error!(
            async {
                self.read_exercises_where(|e| e.id == id)
                    .await?
                    .into_iter()
                    .next()
                    .ok_or(ReadError::NotFound)
            },
            ReadError,
            "get",
            "exercise"
        )
    }

    async fn get_exercises_by_category(&self, category: &str) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.read_exercises_where(|e| e.category == category),
            ReadError,
            "get",
            "exercises"
        )
    }

    async fn get_exercises_by_difficulty(
        &self,
        difficulty: Level,
    ) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.read_exercises_where(|e| e.difficulty == difficulty),
            ReadError,
            "get",
            "exercises"
        )
    }

    async fn search_exercises(&self, query: &str) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.read_exercises_where(|e| e.matches(query)),
            ReadError,
            "search",
            "exercises"
        )
    }

    async fn get_recommended_exercises(
        &self,
        profile: Option<&UserProfile>,
    ) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.recommended_exercises(profile),
            ReadError,
            "get",
            "recommended exercises"
        )
    }
}

impl<R: ProductRepository> Service<R> {
    async fn read_products_where(
        &self,
        predicate: impl Fn(&Product) -> bool,
    ) -> Result<Vec<Product>, ReadError> {
        Ok(self
            .repository
            .read_products()
            .await?
            .into_iter()
            .filter(|p| predicate(p))
            .collect())
    }
}

impl<R: ProductRepository> ProductService for Service<R> {
    async fn get_products(&self) -> Result<Vec<Product>, ReadError> {
        log_on_error!(
            self.repository.read_products(),
            ReadError,
            "get",
            "products"
        )
    }

    async fn get_product(&self, id: ProductID) -> Result<Product, ReadError> {
        log_on_error!(
            async {
                self.read_products_where(|p| p.id == id)
                    .await?
                    .into_iter()
                    .next()
                    .ok_or(ReadError::NotFound)
            },
            ReadError,
            "get",
            "product"
        )
    }

    async fn get_products_for_exercise(
        &self,
        exercise_id: ExerciseID,
    ) -> Result<Vec<Product>, ReadError> {
        log_on_error!(
            self.read_products_where(|p| p.is_related_to(exercise_id)),
            ReadError,
            "get",
            "products"
        )
    }

    async fn get_products_by_category(&self, category: &str) -> Result<Vec<Product>, ReadError> {
        log_on_error!(
            self.read_products_where(|p| p.category == category),
            ReadError,
            "get",
            "products"
        )
    }
}
