use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::role::{UserRole, check_min_role};
use crate::modules::users::model::User;
use crate::utils::errors::AppError;

use super::model::{Course, CreateCourseDto, Payment, Stats};

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db))]
    pub async fn get_all(db: &PgPool) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>("SELECT * FROM courses ORDER BY created_at")
            .fetch_all(db)
            .await?;

        Ok(courses)
    }

    #[instrument(skip(db))]
    pub async fn get_single(db: &PgPool, course_id: Uuid) -> Result<Course, AppError> {
        sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE id = $1")
            .bind(course_id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("No course with this ID")))
    }

    /// Courses relevant to the requester: admins see the courses they
    /// created, everyone else sees their subscribed courses.
    #[instrument(skip(db, user), fields(user_id = %user.id))]
    pub async fn get_my_courses(db: &PgPool, user: &User) -> Result<Vec<Course>, AppError> {
        let courses = if check_min_role(user, UserRole::Admin).is_ok() {
            sqlx::query_as::<_, Course>(
                "SELECT * FROM courses WHERE created_by = $1 ORDER BY created_at",
            )
            .bind(user.id)
            .fetch_all(db)
            .await?
        } else {
            sqlx::query_as::<_, Course>(
                "SELECT * FROM courses WHERE id = ANY($1) ORDER BY created_at",
            )
            .bind(&user.subscription)
            .fetch_all(db)
            .await?
        };

        Ok(courses)
    }

    /// Record a purchase: append the course to the user's subscription set
    /// and store the payment. Payment-provider session handling happens
    /// outside this service; by the time we are called the purchase is a
    /// fact to book.
    #[instrument(skip(db, user), fields(user_id = %user.id))]
    pub async fn checkout(db: &PgPool, user: &User, course_id: Uuid) -> Result<Payment, AppError> {
        let course = sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE id = $1")
            .bind(course_id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Course not found")))?;

        if user.subscription.contains(&course.id) {
            return Err(AppError::bad_request(anyhow!("You already have this course")));
        }

        sqlx::query(
            "UPDATE users SET subscription = array_append(subscription, $1), updated_at = now() \
             WHERE id = $2",
        )
        .bind(course.id)
        .bind(user.id)
        .execute(db)
        .await?;

        let payment = sqlx::query_as::<_, Payment>(
            "INSERT INTO payments (user_id, user_name, user_email, course_id, course_title, amount_paid) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(course.id)
        .bind(&course.title)
        .bind(course.price)
        .fetch_one(db)
        .await?;

        Ok(payment)
    }

    #[instrument(skip(db, dto))]
    pub async fn create_course(
        db: &PgPool,
        dto: CreateCourseDto,
        created_by: Uuid,
    ) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(
            "INSERT INTO courses (title, description, price, duration, category, image, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(dto.price)
        .bind(dto.duration)
        .bind(&dto.category)
        .bind(&dto.image)
        .bind(created_by)
        .fetch_one(db)
        .await?;

        Ok(course)
    }

    /// Delete a course, its lectures, and every subscription reference to it.
    #[instrument(skip(db))]
    pub async fn delete_course(db: &PgPool, course_id: Uuid) -> Result<(), AppError> {
        let course = sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE id = $1")
            .bind(course_id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("No course with this ID")))?;

        sqlx::query("DELETE FROM lectures WHERE course = $1")
            .bind(course.id)
            .execute(db)
            .await?;

        sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(course.id)
            .execute(db)
            .await?;

        sqlx::query(
            "UPDATE users SET subscription = array_remove(subscription, $1), updated_at = now()",
        )
        .bind(course.id)
        .execute(db)
        .await?;

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn get_stats(db: &PgPool) -> Result<Stats, AppError> {
        let (total_courses,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM courses")
            .fetch_one(db)
            .await?;
        let (total_lectures,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM lectures")
            .fetch_one(db)
            .await?;
        let (total_users,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(db)
            .await?;

        Ok(Stats {
            total_courses,
            total_lectures,
            total_users,
        })
    }
}
