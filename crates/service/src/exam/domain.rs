use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

pub use models::exam::{ExamKey, Model as Exam};

/// New values for an existing exam. Absent fields keep their stored value,
/// an explicit `null` clears it.
/// The key is not part of the update; `name`/`title` in a request body are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "::serde_with::rust::double_option")]
    pub start_date: Option<Option<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "::serde_with::rust::double_option")]
    pub start_time: Option<Option<NaiveTime>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "::serde_with::rust::double_option")]
    pub duration: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "::serde_with::rust::double_option")]
    pub location: Option<Option<String>>,
}

impl ExamUpdate {
    pub fn apply_to(self, exam: &mut Exam) {
        if let Some(d) = self.start_date { exam.start_date = d; }
        if let Some(t) = self.start_time { exam.start_time = t; }
        if let Some(d) = self.duration { exam.duration = d; }
        if let Some(l) = self.location { exam.location = l; }
    }
}

/// Case-insensitive prefix match; `lowered_prefix` must already be lower-cased.
pub(crate) fn name_has_prefix(name: &str, lowered_prefix: &str) -> bool {
    name.to_lowercase().starts_with(lowered_prefix)
}
