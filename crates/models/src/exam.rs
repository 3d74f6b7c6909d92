use std::fmt;

use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

/// A scheduled exam. `(name, title)` is the primary key; the remaining columns are
/// free-form and nullable. `duration` is conventionally `HH:MM` but never parsed.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exam_schedule")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub title: String,
    pub start_date: Option<Date>,
    pub start_time: Option<Time>,
    #[sea_orm(column_name = "exam_duration")]
    pub duration: Option<String>,
    pub location: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Composite identity of an exam.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ExamKey {
    pub name: String,
    pub title: String,
}

impl ExamKey {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self { name: name.into(), title: title.into() }
    }
}

impl fmt::Display for ExamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.title)
    }
}

impl From<ExamKey> for (String, String) {
    fn from(key: ExamKey) -> Self {
        (key.name, key.title)
    }
}

impl Model {
    pub fn key(&self) -> ExamKey {
        ExamKey::new(self.name.clone(), self.title.clone())
    }

    /// Active model with every column set, for a full-row insert or replace.
    pub fn into_full_active_model(self) -> ActiveModel {
        ActiveModel {
            name: Set(self.name),
            title: Set(self.title),
            start_date: Set(self.start_date),
            start_time: Set(self.start_time),
            duration: Set(self.duration),
            location: Set(self.location),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use serde_json::json;

    #[test]
    fn serializes_with_camel_case_iso_fields() {
        let exam = Model {
            name: "Smith".into(),
            title: "Midterm".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1),
            start_time: NaiveTime::from_hms_opt(9, 0, 0),
            duration: Some("02:00".into()),
            location: Some("Hall A".into()),
        };
        let v = serde_json::to_value(&exam).unwrap();
        assert_eq!(
            v,
            json!({
                "name": "Smith",
                "title": "Midterm",
                "startDate": "2024-05-01",
                "startTime": "09:00:00",
                "duration": "02:00",
                "location": "Hall A"
            })
        );
    }

    #[test]
    fn missing_optional_fields_deserialize_as_none() {
        let exam: Model = serde_json::from_value(json!({"name": "Lee", "title": "Final"})).unwrap();
        assert_eq!(exam.key(), ExamKey::new("Lee", "Final"));
        assert!(exam.start_date.is_none());
        assert!(exam.start_time.is_none());
        assert!(exam.duration.is_none());
        assert!(exam.location.is_none());
    }

    #[test]
    fn key_is_required() {
        assert!(serde_json::from_value::<Model>(json!({"name": "Lee"})).is_err());
    }

    #[test]
    fn keys_order_by_name_then_title() {
        let mut keys = vec![ExamKey::new("b", "a"), ExamKey::new("a", "z"), ExamKey::new("a", "b")];
        keys.sort();
        assert_eq!(keys, vec![ExamKey::new("a", "b"), ExamKey::new("a", "z"), ExamKey::new("b", "a")]);
        assert_eq!(ExamKey::new("Smith", "Midterm").to_string(), "Smith/Midterm");
    }
}
