use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    /// Duration in weeks.
    pub duration: i32,
    pub category: String,
    /// Media reference (URL). Upload handling lives outside this service.
    pub image: String,
    /// Id of the admin who created the course.
    pub created_by: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct Payment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_email: String,
    pub course_id: Uuid,
    pub course_title: String,
    pub amount_paid: f64,
    pub payment_date: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCourseDto {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 1))]
    pub duration: i32,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(url)]
    pub image: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CoursesResponse {
    pub courses: Vec<Course>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub course: Course,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckoutResponse {
    pub message: String,
    pub payment_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Stats {
    pub total_courses: i64,
    pub total_lectures: i64,
    pub total_users: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    pub stats: Stats,
}
