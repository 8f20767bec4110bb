use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct Lecture {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Media reference (URL). Upload handling lives outside this service.
    pub video: String,
    /// Owning course id.
    pub course: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLectureDto {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(url)]
    pub video: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LecturesResponse {
    pub lectures: Vec<Lecture>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LectureResponse {
    pub lecture: Lecture,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LectureCreatedResponse {
    pub message: String,
    pub lecture: Lecture,
}
