use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

use trivia_core::model::{CategoryKey, ParseCategoryError, Question, QuestionError};

/// Errors surfaced by question lookups.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("unknown category: {0}")]
    UnknownCategory(CategoryKey),

    #[error(transparent)]
    Question(#[from] QuestionError),

    #[error(transparent)]
    Category(#[from] ParseCategoryError),
}

/// Read-only lookup contract from category key to its ordered questions.
#[async_trait]
pub trait QuestionCatalog: Send + Sync {
    /// Fetch the ordered question list for a category.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownCategory` if the key is absent from the
    /// table.
    async fn questions(&self, category: &CategoryKey) -> Result<Vec<Question>, CatalogError>;
}

/// The fixed in-source question table.
///
/// The key set is closed once constructed; lookups hand out an owned snapshot
/// so callers never observe shared mutable state.
#[derive(Clone, Default)]
pub struct StaticCatalog {
    table: HashMap<CategoryKey, Vec<Question>>,
}

impl StaticCatalog {
    /// Builds the built-in trivia table.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if any built-in entry fails question or key
    /// validation.
    pub fn builtin() -> Result<Self, CatalogError> {
        let mut catalog = Self::default();

        catalog.insert(
            "sejarah",
            vec![
                question(
                    "Siapa presiden pertama Indonesia?",
                    &["Soekarno", "Soeharto", "BJ Habibie"],
                    "Soekarno",
                )?,
                question(
                    "Kapan Indonesia merdeka?",
                    &["17 Agustus 1945", "28 Oktober 1928", "11 Maret 1966"],
                    "17 Agustus 1945",
                )?,
                question(
                    "Di kota mana teks proklamasi dibacakan?",
                    &["Jakarta", "Bandung", "Surabaya"],
                    "Jakarta",
                )?,
            ],
        )?;

        catalog.insert(
            "sains",
            vec![
                question("Apa rumus kimia air?", &["H2O", "CO2", "O2"], "H2O")?,
                question(
                    "Apa planet terdekat dari Matahari?",
                    &["Merkurius", "Venus", "Bumi"],
                    "Merkurius",
                )?,
                question(
                    "Berapa jumlah planet di tata surya?",
                    &["7", "8", "9"],
                    "8",
                )?,
            ],
        )?;

        Ok(catalog)
    }

    fn insert(&mut self, key: &str, questions: Vec<Question>) -> Result<(), CatalogError> {
        self.table.insert(CategoryKey::new(key)?, questions);
        Ok(())
    }

    /// Returns the known category keys.
    #[must_use]
    pub fn categories(&self) -> Vec<CategoryKey> {
        self.table.keys().cloned().collect()
    }
}

fn question(prompt: &str, answers: &[&str], correct: &str) -> Result<Question, QuestionError> {
    Question::new(
        prompt,
        answers.iter().map(|answer| (*answer).to_string()).collect(),
        correct,
    )
}

#[async_trait]
impl QuestionCatalog for StaticCatalog {
    async fn questions(&self, category: &CategoryKey) -> Result<Vec<Question>, CatalogError> {
        self.table
            .get(category)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownCategory(category.clone()))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn every_builtin_category_is_nonempty_and_valid() {
        let catalog = StaticCatalog::builtin().unwrap();
        let categories = catalog.categories();
        assert!(!categories.is_empty());

        for category in categories {
            let questions = catalog.questions(&category).await.unwrap();
            assert!(!questions.is_empty(), "category {category} has no questions");
            for q in questions {
                assert!(q.answers().contains(&q.correct().to_string()));
            }
        }
    }

    #[tokio::test]
    async fn sejarah_questions_keep_their_order() {
        let catalog = StaticCatalog::builtin().unwrap();
        let key = CategoryKey::new("sejarah").unwrap();

        let questions = catalog.questions(&key).await.unwrap();
        assert_eq!(questions[0].prompt(), "Siapa presiden pertama Indonesia?");
        assert_eq!(questions[1].prompt(), "Kapan Indonesia merdeka?");
    }

    #[tokio::test]
    async fn unknown_category_is_not_found() {
        let catalog = StaticCatalog::builtin().unwrap();
        let key = CategoryKey::new("olahraga").unwrap();

        let err = catalog.questions(&key).await.unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory(_)));
    }
}
