use async_trait::async_trait;

use super::domain::{Exam, ExamKey};
use crate::errors::ServiceError;

/// Durable storage for exams keyed by `(name, title)`.
///
/// Absence is never an error: `find_by_key` returns `None` and `delete_by_key` is a no-op.
/// Implementations report backend failures as [`ServiceError::StorageUnavailable`].
#[async_trait]
pub trait ExamRepository: Send + Sync {
    /// Every stored exam, ordered by name then title.
    async fn find_all(&self) -> Result<Vec<Exam>, ServiceError>;
    async fn find_by_key(&self, key: &ExamKey) -> Result<Option<Exam>, ServiceError>;
    /// Insert, or replace every column of the row with the same key. Returns the stored row.
    async fn save(&self, exam: Exam) -> Result<Exam, ServiceError>;
    async fn delete_by_key(&self, key: &ExamKey) -> Result<(), ServiceError>;
}

/// In-memory repository for tests, benches and the `memory` storage backend.
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct InMemoryExamRepository {
        exams: RwLock<BTreeMap<ExamKey, Exam>>,
    }

    impl InMemoryExamRepository {
        pub fn new() -> Self { Self::default() }

        pub fn with_exams(exams: impl IntoIterator<Item = Exam>) -> Self {
            let map = exams.into_iter().map(|e| (e.key(), e)).collect();
            Self { exams: RwLock::new(map) }
        }

        pub async fn len(&self) -> usize { self.exams.read().await.len() }

        pub async fn is_empty(&self) -> bool { self.exams.read().await.is_empty() }
    }

    #[async_trait]
    impl ExamRepository for InMemoryExamRepository {
        async fn find_all(&self) -> Result<Vec<Exam>, ServiceError> {
            let exams = self.exams.read().await;
            Ok(exams.values().cloned().collect())
        }

        async fn find_by_key(&self, key: &ExamKey) -> Result<Option<Exam>, ServiceError> {
            let exams = self.exams.read().await;
            Ok(exams.get(key).cloned())
        }

        async fn save(&self, exam: Exam) -> Result<Exam, ServiceError> {
            let mut exams = self.exams.write().await;
            exams.insert(exam.key(), exam.clone());
            Ok(exam)
        }

        async fn delete_by_key(&self, key: &ExamKey) -> Result<(), ServiceError> {
            let mut exams = self.exams.write().await;
            exams.remove(key);
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn exam(name: &str, title: &str, location: &str) -> Exam {
            Exam {
                name: name.into(),
                title: title.into(),
                start_date: None,
                start_time: None,
                duration: None,
                location: Some(location.into()),
            }
        }

        #[tokio::test]
        async fn save_replaces_same_key() -> Result<(), ServiceError> {
            let repo = InMemoryExamRepository::new();
            repo.save(exam("Smith", "Midterm", "Hall A")).await?;
            repo.save(exam("Smith", "Final", "Hall B")).await?;
            repo.save(exam("Smith", "Midterm", "Hall C")).await?;

            assert_eq!(repo.len().await, 2);
            let found = repo.find_by_key(&ExamKey::new("Smith", "Midterm")).await?.unwrap();
            assert_eq!(found.location.as_deref(), Some("Hall C"));
            Ok(())
        }

        #[tokio::test]
        async fn find_all_is_key_ordered() -> Result<(), ServiceError> {
            let repo = InMemoryExamRepository::with_exams([
                exam("b", "x", "1"),
                exam("a", "z", "2"),
                exam("a", "b", "3"),
            ]);
            let keys: Vec<ExamKey> = repo.find_all().await?.iter().map(Exam::key).collect();
            assert_eq!(keys, vec![ExamKey::new("a", "b"), ExamKey::new("a", "z"), ExamKey::new("b", "x")]);
            Ok(())
        }

        #[tokio::test]
        async fn delete_missing_key_is_noop() -> Result<(), ServiceError> {
            let repo = InMemoryExamRepository::with_exams([exam("a", "b", "1")]);
            repo.delete_by_key(&ExamKey::new("nope", "b")).await?;
            assert_eq!(repo.len().await, 1);
            repo.delete_by_key(&ExamKey::new("a", "b")).await?;
            assert!(repo.is_empty().await);
            assert!(repo.find_by_key(&ExamKey::new("a", "b")).await?.is_none());
            Ok(())
        }
    }
}
