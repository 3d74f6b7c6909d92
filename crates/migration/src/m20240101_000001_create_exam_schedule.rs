//! Create `exam_schedule` table.
//!
//! One row per exam, identified by the composite primary key `(name, title)`.
//! Everything besides the key is nullable and stored as given.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExamSchedule::Table)
                    .if_not_exists()
                    .col(string_len(ExamSchedule::Name, 255))
                    .col(string_len(ExamSchedule::Title, 255))
                    .col(date_null(ExamSchedule::StartDate))
                    .col(time_null(ExamSchedule::StartTime))
                    .col(string_null(ExamSchedule::Duration))
                    .col(string_len_null(ExamSchedule::Location, 255))
                    .primary_key(
                        Index::create()
                            .name("pk_exam_schedule")
                            .col(ExamSchedule::Name)
                            .col(ExamSchedule::Title),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ExamSchedule::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ExamSchedule {
    Table,
    Name,
    Title,
    StartDate,
    StartTime,
    #[sea_orm(iden = "exam_duration")]
    Duration,
    Location,
}
