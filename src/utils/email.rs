use anyhow::anyhow;
use lettre::message::{MultiPart, SinglePart, header};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::{debug, instrument};

use crate::config::email::EmailConfig;
use crate::utils::errors::AppError;
use crate::utils::otp::format_otp;

/// SMTP mail collaborator. The auth flow treats sends as fire-and-forget:
/// callers log failures and carry on, they never fail the request over an
/// undeliverable mail.
pub struct EmailService {
    config: EmailConfig,
}

impl EmailService {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Send the registration OTP.
    #[instrument(skip(self, otp))]
    pub async fn send_otp_email(
        &self,
        to_email: &str,
        to_name: &str,
        otp: u32,
    ) -> Result<(), AppError> {
        let code = format_otp(otp);
        let html_body = format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
    <h2>Welcome to Lectern, {}!</h2>
    <p>Your one-time code is:</p>
    <p style="font-size: 32px; font-weight: bold; letter-spacing: 6px;">{}</p>
    <p>The code expires in 5 minutes. If you didn't sign up, ignore this email.</p>
</div>"#,
            to_name, code
        );
        let text_body = format!(
            "Hi {},\n\n\
             Your one-time code is: {}\n\n\
             The code expires in 5 minutes.\n\n\
             If you didn't sign up, ignore this email.\n\n\
             Lectern Team",
            to_name, code
        );

        self.send_email(to_email, "Verify your Lectern account", &text_body, &html_body)
            .await
    }

    /// Send the password-reset link.
    #[instrument(skip(self, reset_token))]
    pub async fn send_reset_email(&self, to_email: &str, reset_token: &str) -> Result<(), AppError> {
        let reset_link = format!(
            "{}/reset-password?token={}",
            self.config.frontend_url, reset_token
        );

        let html_body = format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
    <h2>Password Reset Request</h2>
    <p>Click the link below to reset your password:</p>
    <p><a href="{}">{}</a></p>
    <p>The link expires in 5 minutes. If you didn't request this, ignore this email.</p>
</div>"#,
            reset_link, reset_link
        );
        let text_body = format!(
            "You requested to reset your password.\n\n\
             Open the link below to choose a new one:\n\
             {}\n\n\
             The link expires in 5 minutes.\n\n\
             If you didn't request this, ignore this email.\n\n\
             Lectern Team",
            reset_link
        );

        self.send_email(to_email, "Reset your Lectern password", &text_body, &html_body)
            .await
    }

    #[instrument(skip(self, html_body, text_body))]
    async fn send_email(
        &self,
        to_email: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<(), AppError> {
        if !self.config.enabled {
            debug!(to = %to_email, subject = %subject, "SMTP disabled, skipping email delivery");
            return Ok(());
        }

        let from = format!("{} <{}>", self.config.from_name, self.config.from_email);

        let email = Message::builder()
            .from(
                from.parse()
                    .map_err(|e| AppError::internal(anyhow!("Invalid from email: {}", e)))?,
            )
            .to(to_email
                .parse()
                .map_err(|e| AppError::internal(anyhow!("Invalid to email: {}", e)))?)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_PLAIN)
                            .body(text_body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_HTML)
                            .body(html_body.to_string()),
                    ),
            )
            .map_err(|e| AppError::internal(anyhow!("Failed to build email: {}", e)))?;

        let mailer = if self.config.smtp_username.is_empty() {
            SmtpTransport::builder_dangerous(&self.config.smtp_host)
                .port(self.config.smtp_port)
                .build()
        } else {
            let creds = Credentials::new(
                self.config.smtp_username.clone(),
                self.config.smtp_password.clone(),
            );

            SmtpTransport::relay(&self.config.smtp_host)
                .map_err(|e| AppError::internal(anyhow!("Failed to create SMTP relay: {}", e)))?
                .port(self.config.smtp_port)
                .credentials(creds)
                .build()
        };

        tokio::task::spawn_blocking(move || mailer.send(&email))
            .await
            .map_err(|e| AppError::internal(anyhow!("Task join error: {}", e)))?
            .map_err(|e| AppError::internal(anyhow!("Failed to send email: {}", e)))?;

        Ok(())
    }
}
