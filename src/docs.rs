use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{
    ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse, RegisterRequest,
    RegisterResponse, ResetPasswordRequest, VerifyRequest,
};
use crate::modules::courses::model::{
    CheckoutResponse, Course, CourseResponse, CoursesResponse, CreateCourseDto, Payment, Stats,
    StatsResponse,
};
use crate::modules::lectures::model::{
    CreateLectureDto, Lecture, LectureCreatedResponse, LectureResponse, LecturesResponse,
};
use crate::modules::users::model::{ProfileResponse, PublicUser, User, UsersResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register,
        crate::modules::auth::controller::verify,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::my_profile,
        crate::modules::auth::controller::forgot_password,
        crate::modules::auth::controller::reset_password,
        crate::modules::users::controller::get_all_users,
        crate::modules::users::controller::update_role,
        crate::modules::courses::controller::get_all_courses,
        crate::modules::courses::controller::get_single_course,
        crate::modules::courses::controller::get_my_courses,
        crate::modules::courses::controller::checkout,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::delete_course,
        crate::modules::courses::controller::get_all_stats,
        crate::modules::lectures::controller::fetch_lectures,
        crate::modules::lectures::controller::fetch_lecture,
        crate::modules::lectures::controller::add_lecture,
        crate::modules::lectures::controller::delete_lecture,
    ),
    components(
        schemas(
            User,
            PublicUser,
            UsersResponse,
            ProfileResponse,
            RegisterRequest,
            RegisterResponse,
            VerifyRequest,
            LoginRequest,
            LoginResponse,
            ForgotPasswordRequest,
            ResetPasswordRequest,
            MessageResponse,
            ErrorResponse,
            Course,
            CourseResponse,
            CoursesResponse,
            CreateCourseDto,
            CheckoutResponse,
            Payment,
            Stats,
            StatsResponse,
            Lecture,
            LectureResponse,
            LecturesResponse,
            LectureCreatedResponse,
            CreateLectureDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login, and password reset"),
        (name = "Users", description = "User administration"),
        (name = "Courses", description = "Course catalog and purchases"),
        (name = "Lectures", description = "Subscription-gated lecture content")
    ),
    info(
        title = "Lectern API",
        version = "0.1.0",
        description = "E-learning backend with OTP-gated registration, JWT sessions, and subscription-gated content.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            // Session tokens travel in a plain `token` header, not a bearer
            // Authorization header.
            components.add_security_scheme(
                "token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("token"))),
            )
        }
    }
}
