use derive_more::{Deref, Display};

use crate::{ExerciseID, ReadError};

#[allow(async_fn_in_trait)]
pub trait ProductRepository {
    async fn read_products(&self) -> Result<Vec<Product>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait ProductService {
    async fn get_products(&self) -> Result<Vec<Product>, ReadError>;
    async fn get_product(&self, id: ProductID) -> Result<Product, ReadError>;
    async fn get_products_for_exercise(
        &self,
        exercise_id: ExerciseID,
    ) -> Result<Vec<Product>, ReadError>;
    async fn get_products_by_category(&self, category: &str) -> Result<Vec<Product>, ReadError>;
}

/// Retail product recommended for a set of exercises.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductID,
    pub name: String,
    pub price: f32,
    pub category: String,
    pub related_exercises: Vec<ExerciseID>,
    pub image_url: String,
    pub description: String,
    pub store_url: String,
}

impl Product {
    #[must_use]
    pub fn is_related_to(&self, exercise_id: ExerciseID) -> bool {
        self.related_exercises.contains(&exercise_id)
    }
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ProductID(u32);

impl From<u32> for ProductID {
    fn from(value: u32) -> Self {
        Self(value)
    }
}
