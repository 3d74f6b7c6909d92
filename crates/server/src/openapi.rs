use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// An exam as exchanged over HTTP.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExamDoc {
    #[schema(example = "Smith")]
    pub name: String,
    #[schema(example = "Midterm")]
    pub title: String,
    #[schema(example = "2024-05-01")]
    pub start_date: Option<String>,
    #[schema(example = "09:00:00")]
    pub start_time: Option<String>,
    /// Free text, conventionally HH:MM
    #[schema(example = "02:00")]
    pub duration: Option<String>,
    #[schema(example = "Hall A")]
    pub location: Option<String>,
}

/// Fields that may be changed on an existing exam; omitted fields are kept, `null` clears.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExamUpdateDoc {
    #[schema(example = "2024-05-02")]
    pub start_date: Option<String>,
    #[schema(example = "10:00:00")]
    pub start_time: Option<String>,
    #[schema(example = "03:00")]
    pub duration: Option<String>,
    #[schema(example = "Hall B")]
    pub location: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::exams::list,
        crate::routes::exams::list_multiple,
        crate::routes::exams::create,
        crate::routes::exams::update,
        crate::routes::exams::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ExamDoc,
            ExamUpdateDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "exam")
    ),
    info(title = "Exam Scheduler API", description = "Exam records keyed by (name, title)")
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_exam_operation() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let exam = &doc["paths"]["/api/v1/exam"];
        for method in ["get", "post", "put", "delete"] {
            assert!(exam.get(method).is_some(), "missing {method}");
        }
        assert!(doc["paths"]["/api/v1/exam/multiple"].get("get").is_some());
        assert!(doc["components"]["schemas"]["ExamDoc"]["properties"].get("startDate").is_some());
    }
}
