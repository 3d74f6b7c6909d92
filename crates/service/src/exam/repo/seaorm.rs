use sea_orm::{sea_query::OnConflict, DatabaseConnection, EntityTrait, QueryOrder};
use tracing::debug;

use crate::errors::ServiceError;
use crate::exam::domain::{Exam, ExamKey};
use crate::exam::repository::ExamRepository;
use models::exam::{Column, Entity as ExamEntity};

pub struct SeaOrmExamRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmExamRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn primary_key(key: &ExamKey) -> (String, String) {
    (key.name.clone(), key.title.clone())
}

#[async_trait::async_trait]
impl ExamRepository for SeaOrmExamRepository {
    async fn find_all(&self) -> Result<Vec<Exam>, ServiceError> {
        let rows = ExamEntity::find()
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Title)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn find_by_key(&self, key: &ExamKey) -> Result<Option<Exam>, ServiceError> {
        let found = ExamEntity::find_by_id(primary_key(key)).one(&self.db).await?;
        Ok(found)
    }

    async fn save(&self, exam: Exam) -> Result<Exam, ServiceError> {
        let key = exam.key();
        let upsert = OnConflict::columns([Column::Name, Column::Title])
            .update_columns([Column::StartDate, Column::StartTime, Column::Duration, Column::Location])
            .to_owned();
        let affected = ExamEntity::insert(exam.into_full_active_model())
            .on_conflict(upsert)
            .exec_without_returning(&self.db)
            .await?;
        debug!(%key, affected, "exam upserted");

        ExamEntity::find_by_id(primary_key(&key))
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::StorageUnavailable(format!("exam {} missing after save", key)))
    }

    async fn delete_by_key(&self, key: &ExamKey) -> Result<(), ServiceError> {
        let res = ExamEntity::delete_by_id(primary_key(key)).exec(&self.db).await?;
        debug!(%key, rows = res.rows_affected, "exam delete executed");
        Ok(())
    }
}
