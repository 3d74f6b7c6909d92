use std::sync::Arc;

use service::exam::{service::DynExamService, ExamRepository, ExamService};

/// Shared handler state. Cloned per request; the repository behind it is shared.
#[derive(Clone)]
pub struct ServerState {
    pub exams: DynExamService,
}

impl ServerState {
    pub fn new(repo: Arc<dyn ExamRepository>) -> Self {
        Self { exams: ExamService::new(repo) }
    }
}
