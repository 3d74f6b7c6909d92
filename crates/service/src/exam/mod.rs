//! Exam records: domain types, the storage seam and the business service.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{Exam, ExamKey, ExamUpdate};
pub use repository::ExamRepository;
pub use service::ExamService;
