use log::{debug, warn};
use sportif_domain::{self as domain, ReadError};

const QUESTIONS: &str = include_str!("../data/questions.json");
const EXERCISES: &str = include_str!("../data/exercises.json");
const PRODUCTS: &str = include_str!("../data/products.json");

/// Questionnaire and catalog shipped with the application.
#[derive(Debug, Clone)]
pub struct Bundled {
    questions: Vec<domain::Question>,
    exercises: Vec<domain::Exercise>,
    products: Vec<domain::Product>,
}

impl Bundled {
    pub fn new() -> Result<Self, DataError> {
        Self::from_json(QUESTIONS, EXERCISES, PRODUCTS)
    }

    pub fn from_json(questions: &str, exercises: &str, products: &str) -> Result<Self, DataError> {
        let questions = serde_json::from_str::<Vec<Question>>(questions)?
            .into_iter()
            .map(domain::Question::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let exercises = serde_json::from_str::<Vec<Exercise>>(exercises)?
            .into_iter()
            .map(domain::Exercise::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let products = serde_json::from_str::<Vec<Product>>(products)?
            .into_iter()
            .map(domain::Product::from)
            .collect::<Vec<_>>();

        if let Err(err) = domain::check_alignment(&questions) {
            warn!("questionnaire does not fit profile derivation: {err}");
        }
        debug!(
            "loaded {} questions, {} exercises and {} products",
            questions.len(),
            exercises.len(),
            products.len()
        );

        Ok(Self {
            questions,
            exercises,
            products,
        })
    }
}

impl domain::QuestionRepository for Bundled {
    async fn read_questions(&self) -> Result<Vec<domain::Question>, ReadError> {
        Ok(self.questions.clone())
    }
}

impl domain::ExerciseRepository for Bundled {
    async fn read_exercises(&self) -> Result<Vec<domain::Exercise>, ReadError> {
        Ok(self.exercises.clone())
    }
}

impl domain::ProductRepository for Bundled {
    async fn read_products(&self) -> Result<Vec<domain::Product>, ReadError> {
        Ok(self.products.clone())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum DataError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    InvalidQuestionKind(#[from] domain::QuestionKindError),
    #[error(transparent)]
    InvalidLevel(#[from] domain::LevelError),
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub question: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub options: Vec<QuestionOption>,
}

impl TryFrom<Question> for domain::Question {
    type Error = domain::QuestionKindError;

    fn try_from(value: Question) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            question: value.question,
            kind: domain::QuestionKind::try_from(value.kind.as_str())?,
            options: value
                .options
                .into_iter()
                .map(domain::QuestionOption::from)
                .collect(),
        })
    }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuestionOption {
    pub value: String,
    pub label: String,
}

impl From<QuestionOption> for domain::QuestionOption {
    fn from(value: QuestionOption) -> Self {
        Self {
            value: value.value,
            label: value.label,
        }
    }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub difficulty: String,
    #[serde(default)]
    pub target_muscles: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub user_profiles: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub common_mistakes: Vec<String>,
    #[serde(default)]
    pub image_url: String,
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = domain::LevelError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: value.name,
            category: value.category,
            difficulty: domain::Level::try_from(value.difficulty.as_str())?,
            target_muscles: value.target_muscles,
            description: value.description,
            user_profiles: value
                .user_profiles
                .iter()
                .map(|l| domain::Level::try_from(l.as_str()))
                .collect::<Result<Vec<_>, _>>()?,
            goals: value.goals,
            instructions: value.instructions,
            common_mistakes: value.common_mistakes,
            image_url: value.image_url,
        })
    }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f32,
    pub category: String,
    #[serde(default)]
    pub related_exercises: Vec<u32>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "decathlonUrl")]
    pub store_url: String,
}

impl From<Product> for domain::Product {
    fn from(value: Product) -> Self {
        Self {
            id: value.id.into(),
            name: value.name,
            price: value.price,
            category: value.category,
            related_exercises: value
                .related_exercises
                .into_iter()
                .map(domain::ExerciseID::from)
                .collect(),
            image_url: value.image_url,
            description: value.description,
            store_url: value.store_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use sportif_domain::{
        ExerciseRepository, ExerciseService, ProductRepository, ProductService,
        QuestionRepository, QuestionService, Service,
    };

    use crate::tests::data::{
        EXERCISE, EXERCISES_JSON, PRODUCT, PRODUCTS_JSON, QUESTION, QUESTIONS_JSON,
    };

    use super::*;

    #[tokio::test]
    async fn test_from_json() {
        let bundled = Bundled::from_json(QUESTIONS_JSON, EXERCISES_JSON, PRODUCTS_JSON).unwrap();

        assert_eq!(
            bundled.read_questions().await.unwrap(),
            vec![QUESTION.clone()]
        );
        assert_eq!(
            bundled.read_exercises().await.unwrap(),
            vec![EXERCISE.clone()]
        );
        assert_eq!(
            bundled.read_products().await.unwrap(),
            vec![PRODUCT.clone()]
        );
    }

    #[rstest]
    #[case::invalid_json("{", EXERCISES_JSON, PRODUCTS_JSON)]
    #[case::invalid_kind(
        r#"[{"id":1,"question":"?","type":"ranking","options":[]}]"#,
        EXERCISES_JSON,
        PRODUCTS_JSON
    )]
    #[case::invalid_difficulty(
        QUESTIONS_JSON,
        r#"[{"id":1,"name":"Squat","category":"jambes","difficulty":"expert"}]"#,
        PRODUCTS_JSON
    )]
    #[case::invalid_user_profile(
        QUESTIONS_JSON,
        r#"[{
            "id": 1, "name": "Squat", "category": "jambes", "difficulty": "débutant",
            "userProfiles": ["pro"]
        }]"#,
        PRODUCTS_JSON
    )]
    #[case::missing_price(
        QUESTIONS_JSON,
        EXERCISES_JSON,
        r#"[{"id":1,"name":"Tapis","category":"accessoires"}]"#
    )]
    fn test_from_json_invalid(
        #[case] questions: &str,
        #[case] exercises: &str,
        #[case] products: &str,
    ) {
        assert!(Bundled::from_json(questions, exercises, products).is_err());
    }

    #[test]
    fn test_from_json_error_kinds() {
        assert!(matches!(
            Bundled::from_json(
                r#"[{"id":1,"question":"?","type":"ranking","options":[]}]"#,
                "[]",
                "[]"
            ),
            Err(DataError::InvalidQuestionKind(_))
        ));
        assert!(matches!(
            Bundled::from_json(
                "[]",
                r#"[{"id":1,"name":"Squat","category":"jambes","difficulty":"expert"}]"#,
                "[]"
            ),
            Err(DataError::InvalidLevel(domain::LevelError::Invalid(level))) if level == "expert"
        ));
    }

    #[test]
    fn test_product_store_url_alias() {
        let json = r#"{
            "id": 1, "name": "Tapis", "price": 9.5, "category": "accessoires",
            "decathlonUrl": "https://example.org"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.store_url, "https://example.org");
        assert!(product.related_exercises.is_empty());
    }

    #[tokio::test]
    async fn test_bundled_dataset() {
        let bundled = Bundled::new().unwrap();
        let questions = bundled.read_questions().await.unwrap();
        let exercises = bundled.read_exercises().await.unwrap();
        let products = bundled.read_products().await.unwrap();

        assert_eq!(questions.len(), 6);
        assert_eq!(domain::check_alignment(&questions), Ok(()));
        assert!(!exercises.is_empty());
        assert!(products.iter().all(|p| {
            p.related_exercises
                .iter()
                .all(|id| exercises.iter().any(|e| e.id == *id))
        }));
    }

    #[tokio::test]
    async fn test_bundled_service() {
        let service = Service::new(Bundled::new().unwrap());
        let profile = domain::build_profile(&[
            domain::QuestionResponse::single(1, "débutant"),
            domain::QuestionResponse::multiple(3, &["souplesse", "posture"]),
        ]);

        assert_eq!(service.get_questions().await.unwrap().len(), 6);
        assert_eq!(service.get_exercise(1.into()).await.unwrap().name, "Squat");
        assert_eq!(
            service
                .get_recommended_exercises(Some(&profile))
                .await
                .unwrap()
                .iter()
                .map(|e| *e.id)
                .collect::<Vec<_>>(),
            vec![7, 3]
        );
        assert_eq!(
            service
                .get_products_for_exercise(7.into())
                .await
                .unwrap()
                .iter()
                .map(|p| *p.id)
                .collect::<Vec<_>>(),
            vec![1, 6]
        );
    }
}
