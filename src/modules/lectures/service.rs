use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::role::{UserRole, check_min_role};
use crate::modules::courses::model::Course;
use crate::modules::users::model::User;
use crate::utils::errors::AppError;

use super::model::{CreateLectureDto, Lecture};

/// Subscription gate: admins (and above) get through unconditionally,
/// everyone else must have the course in their subscription set.
pub fn ensure_course_access(user: &User, course_id: &Uuid) -> Result<(), AppError> {
    if check_min_role(user, UserRole::Admin).is_ok() {
        return Ok(());
    }

    if !user.subscription.contains(course_id) {
        return Err(AppError::bad_request(anyhow!(
            "You have not subscribed to this course"
        )));
    }

    Ok(())
}

pub struct LectureService;

impl LectureService {
    /// List the lectures of a course, behind the subscription gate.
    #[instrument(skip(db, user), fields(user_id = %user.id))]
    pub async fn fetch_lectures(
        db: &PgPool,
        user: &User,
        course_id: Uuid,
    ) -> Result<Vec<Lecture>, AppError> {
        ensure_course_access(user, &course_id)?;

        let lectures = sqlx::query_as::<_, Lecture>(
            "SELECT * FROM lectures WHERE course = $1 ORDER BY created_at",
        )
        .bind(course_id)
        .fetch_all(db)
        .await?;

        Ok(lectures)
    }

    /// Fetch a single lecture; the gate is applied against the lecture's
    /// owning course.
    #[instrument(skip(db, user), fields(user_id = %user.id))]
    pub async fn fetch_lecture(
        db: &PgPool,
        user: &User,
        lecture_id: Uuid,
    ) -> Result<Lecture, AppError> {
        let lecture = sqlx::query_as::<_, Lecture>("SELECT * FROM lectures WHERE id = $1")
            .bind(lecture_id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("No lecture with this ID")))?;

        ensure_course_access(user, &lecture.course)?;

        Ok(lecture)
    }

    #[instrument(skip(db, dto))]
    pub async fn add_lecture(
        db: &PgPool,
        course_id: Uuid,
        dto: CreateLectureDto,
    ) -> Result<Lecture, AppError> {
        let course = sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE id = $1")
            .bind(course_id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("No course with this ID")))?;

        let lecture = sqlx::query_as::<_, Lecture>(
            "INSERT INTO lectures (title, description, video, course) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(&dto.video)
        .bind(course.id)
        .fetch_one(db)
        .await?;

        Ok(lecture)
    }

    #[instrument(skip(db))]
    pub async fn delete_lecture(db: &PgPool, lecture_id: Uuid) -> Result<(), AppError> {
        let lecture = sqlx::query_as::<_, Lecture>("SELECT * FROM lectures WHERE id = $1")
            .bind(lecture_id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("No lecture with this ID")))?;

        sqlx::query("DELETE FROM lectures WHERE id = $1")
            .bind(lecture.id)
            .execute(db)
            .await?;

        Ok(())
    }
}
