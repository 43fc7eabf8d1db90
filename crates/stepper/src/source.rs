use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use catalog::{CatalogError, QuestionCatalog};
use trivia_core::model::{CategoryKey, Question, QuestionRecord};

use crate::error::SourceError;

/// Where the stepper gets a category's questions from.
///
/// A single fetch per playthrough; the stepper operates on the returned
/// snapshot for the rest of the session.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch the ordered questions for a category.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::CategoryNotFound` for an unknown key,
    /// `SourceError::Malformed` for a payload that fails shape validation,
    /// and transport-level variants for everything else.
    async fn fetch_questions(&self, category: &CategoryKey) -> Result<Vec<Question>, SourceError>;
}

//
// ─── HTTP SOURCE ───────────────────────────────────────────────────────────────
//

/// HTTP source backed by the question provider.
#[derive(Clone)]
pub struct HttpQuestionSource {
    client: Client,
    base_url: String,
}

impl HttpQuestionSource {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl QuestionSource for HttpQuestionSource {
    async fn fetch_questions(&self, category: &CategoryKey) -> Result<Vec<Question>, SourceError> {
        let url = format!("{}/api/questions", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(url)
            .query(&[("category", category.as_str())])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(SourceError::CategoryNotFound);
        }
        if !response.status().is_success() {
            return Err(SourceError::HttpStatus(response.status()));
        }

        let records: Vec<QuestionRecord> = response
            .json()
            .await
            .map_err(|err| SourceError::Malformed(err.to_string()))?;

        records
            .into_iter()
            .map(|record| {
                record
                    .into_question()
                    .map_err(|err| SourceError::Malformed(err.to_string()))
            })
            .collect()
    }
}

//
// ─── CATALOG SOURCE ────────────────────────────────────────────────────────────
//

/// In-process source that reads straight from a catalog.
///
/// Used when the stepper is embedded next to the provider, and in tests.
#[derive(Clone)]
pub struct CatalogSource {
    catalog: Arc<dyn QuestionCatalog>,
}

impl CatalogSource {
    #[must_use]
    pub fn new(catalog: Arc<dyn QuestionCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl QuestionSource for CatalogSource {
    async fn fetch_questions(&self, category: &CategoryKey) -> Result<Vec<Question>, SourceError> {
        match self.catalog.questions(category).await {
            Ok(questions) => Ok(questions),
            Err(CatalogError::UnknownCategory(_)) => Err(SourceError::CategoryNotFound),
            Err(err) => Err(SourceError::Malformed(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::StaticCatalog;

    #[tokio::test]
    async fn catalog_source_passes_questions_through() {
        let source = CatalogSource::new(Arc::new(StaticCatalog::builtin().unwrap()));
        let key: CategoryKey = "sains".parse().unwrap();

        let questions = source.fetch_questions(&key).await.unwrap();
        assert_eq!(questions[0].prompt(), "Apa rumus kimia air?");
    }

    #[tokio::test]
    async fn catalog_source_maps_unknown_category() {
        let source = CatalogSource::new(Arc::new(StaticCatalog::builtin().unwrap()));
        let key: CategoryKey = "olahraga".parse().unwrap();

        let err = source.fetch_questions(&key).await.unwrap_err();
        assert!(matches!(err, SourceError::CategoryNotFound));
    }
}
