use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::domain::{name_has_prefix, Exam, ExamKey, ExamUpdate};
use super::repository::ExamRepository;
use crate::errors::ServiceError;

/// Application service for exam records: name-prefix search and update-merge.
/// Stateless; every call goes straight to the injected repository.
pub struct ExamService<R: ExamRepository + ?Sized> {
    repo: Arc<R>,
}

/// Service over a type-erased repository, chosen at startup.
pub type DynExamService = ExamService<dyn ExamRepository>;

impl<R: ExamRepository + ?Sized> Clone for ExamService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl<R: ExamRepository + ?Sized> ExamService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list_all(&self) -> Result<Vec<Exam>, ServiceError> {
        self.repo.find_all().await
    }

    /// Exams whose name starts with `prefix`, ignoring case. An empty prefix matches every exam.
    pub async fn list_by_name_prefix(&self, prefix: &str) -> Result<Vec<Exam>, ServiceError> {
        let prefix = prefix.to_lowercase();
        let exams = self.repo.find_all().await?;
        let matched: Vec<Exam> = exams.into_iter().filter(|e| name_has_prefix(&e.name, &prefix)).collect();
        debug!(%prefix, count = matched.len(), "list exams by name prefix");
        Ok(matched)
    }

    /// Exams whose name starts with any of `prefixes`, ignoring case.
    /// Each exam appears once however many prefixes it matches; no prefixes match nothing.
    pub async fn list_by_any_name_prefix<S>(&self, prefixes: &[S]) -> Result<Vec<Exam>, ServiceError>
    where
        S: AsRef<str> + Sync,
    {
        let lowered: Vec<String> = prefixes.iter().map(|p| p.as_ref().to_lowercase()).collect();
        let exams = self.repo.find_all().await?;
        let matched: Vec<Exam> = exams
            .into_iter()
            .filter(|e| lowered.iter().any(|p| name_has_prefix(&e.name, p)))
            .collect();
        debug!(prefixes = lowered.len(), count = matched.len(), "list exams by any name prefix");
        Ok(matched)
    }

    pub async fn get(&self, key: &ExamKey) -> Result<Option<Exam>, ServiceError> {
        self.repo.find_by_key(key).await
    }

    /// Store a new exam. An existing exam with the same key is replaced, not rejected.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::exam::{Exam, ExamKey, ExamService};
    /// use service::exam::repository::memory::InMemoryExamRepository;
    ///
    /// let svc = ExamService::new(Arc::new(InMemoryExamRepository::new()));
    /// let exam = Exam {
    ///     name: "Smith".into(),
    ///     title: "Midterm".into(),
    ///     start_date: None,
    ///     start_time: None,
    ///     duration: Some("02:00".into()),
    ///     location: Some("Hall A".into()),
    /// };
    /// let created = tokio_test::block_on(svc.create(exam.clone())).unwrap();
    /// assert_eq!(created, exam);
    /// let found = tokio_test::block_on(svc.get(&ExamKey::new("Smith", "Midterm"))).unwrap();
    /// assert_eq!(found, Some(exam));
    /// ```
    #[instrument(skip(self, exam), fields(name = %exam.name, title = %exam.title))]
    pub async fn create(&self, exam: Exam) -> Result<Exam, ServiceError> {
        let saved = self.repo.save(exam).await?;
        info!("exam saved");
        Ok(saved)
    }

    /// Merge `changes` into the exam stored under `key` and persist it.
    /// Returns `None` without touching storage when no such exam exists.
    #[instrument(skip(self, changes), fields(name = %key.name, title = %key.title))]
    pub async fn update(&self, key: &ExamKey, changes: ExamUpdate) -> Result<Option<Exam>, ServiceError> {
        let Some(mut current) = self.repo.find_by_key(key).await? else {
            debug!("exam to update not found");
            return Ok(None);
        };
        changes.apply_to(&mut current);
        let saved = self.repo.save(current).await?;
        info!("exam updated");
        Ok(Some(saved))
    }

    /// Delete the exam stored under `key`. Returns whether one existed; a missing exam is not an error.
    #[instrument(skip(self), fields(name = %key.name, title = %key.title))]
    pub async fn delete(&self, key: &ExamKey) -> Result<bool, ServiceError> {
        if self.repo.find_by_key(key).await?.is_none() {
            debug!("exam to delete not found");
            return Ok(false);
        }
        self.repo.delete_by_key(key).await?;
        info!("exam deleted");
        Ok(true)
    }
}
