//! Service layer for exam records.
//! - `exam::repository` is the storage seam (`ExamRepository`), with SeaORM and in-memory stores.
//! - `exam::service` holds the search and update-merge rules on top of any store.

pub mod errors;
pub mod exam;
#[cfg(test)]
pub mod test_support;
