use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::net::response::ApiResponse;
use crate::types::dto::user::SignupRequest;

pub const PASSWORD_RULE: &str =
    "Password must be at least 8 characters and include a letter plus a digit or special character";
pub const PHONE_RULE: &str = "Invalid phone number format (example: 01012345678)";
pub const MISMATCH_RULE: &str = "Passwords do not match";

fn letter_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Za-z]").unwrap())
}

fn digit_or_special_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r##"[\d!@#$%^&*()_+={}\[\]:;"'<>,.?/\\|`~-]"##).unwrap())
}

fn phone_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^010\d{8}$").unwrap())
}

/// At least 8 characters mixing letters with digits or specials.
pub fn password_error(password: &str) -> Option<&'static str> {
    let strong = password.chars().count() >= 8
        && letter_pattern().is_match(password)
        && digit_or_special_pattern().is_match(password);
    (!strong).then_some(PASSWORD_RULE)
}

/// 010 followed by 8 digits, checked after stripping separators.
pub fn phone_error(phone: &str) -> Option<&'static str> {
    let cleaned: String = phone.chars().filter(char::is_ascii_digit).collect();
    (!phone_pattern().is_match(&cleaned)).then_some(PHONE_RULE)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        FieldError {
            field,
            message: message.into(),
        }
    }
}

/// Which duplicate pre-checks came back available. Editing a field
/// invalidates its check.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateChecks {
    pub login_id: bool,
    pub email: bool,
    pub nickname: bool,
}

#[derive(Debug, Default, Clone)]
pub struct SignupForm {
    pub login_id: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub nickname: String,
    pub phone: String,
    pub profile_image: Option<String>,
    pub checks: DuplicateChecks,
}

#[derive(Debug, Error)]
pub enum SignupError {
    #[error("signup form is invalid")]
    Invalid(Vec<FieldError>),

    #[error("signup rejected: {0}")]
    Rejected(String),

    #[error(transparent)]
    Network(#[from] reqwest::Error),
}

impl SignupForm {
    /// All inline field checks the form runs before it will submit.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("loginId", &self.login_id),
            ("email", &self.email),
            ("password", &self.password),
            ("nickname", &self.nickname),
            ("phone", &self.phone),
        ] {
            if value.trim().is_empty() {
                errors.push(FieldError::new(field, "This field is required"));
            }
        }

        if !self.password.is_empty() {
            if let Some(message) = password_error(&self.password) {
                errors.push(FieldError::new("password", message));
            }
        }
        if self.password != self.password_confirm {
            errors.push(FieldError::new("passwordConfirm", MISMATCH_RULE));
        }
        if !self.phone.is_empty() {
            if let Some(message) = phone_error(&self.phone) {
                errors.push(FieldError::new("phone", message));
            }
        }

        if !self.checks.login_id {
            errors.push(FieldError::new("loginId", "Please check id availability"));
        }
        if !self.checks.email {
            errors.push(FieldError::new("email", "Please check email availability"));
        }
        if !self.checks.nickname {
            errors.push(FieldError::new(
                "nickname",
                "Please check nickname availability",
            ));
        }

        errors
    }

    pub fn to_request(&self) -> SignupRequest {
        SignupRequest {
            login_id: self.login_id.clone(),
            email: self.email.clone(),
            password_raw: self.password.clone(),
            nickname: self.nickname.clone(),
            profile_image: self.profile_image.clone(),
        }
    }

    /// Validation failures block the submit before any request is made.
    pub async fn submit(
        &self,
        client: &reqwest::Client,
        base_url: &str,
    ) -> Result<(), SignupError> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(SignupError::Invalid(errors));
        }

        let envelope: ApiResponse<serde_json::Value> = client
            .post(format!("{base_url}/api/users/signup"))
            .json(&self.to_request())
            .send()
            .await?
            .json()
            .await?;
        if !envelope.success {
            return Err(SignupError::Rejected(
                envelope
                    .message
                    .unwrap_or_else(|| "signup failed".to_string()),
            ));
        }
        Ok(())
    }
}

/// `true` means the value is already taken.
pub async fn is_login_id_taken(
    client: &reqwest::Client,
    base_url: &str,
    login_id: &str,
) -> Result<bool, SignupError> {
    check(client, format!("{base_url}/api/users/check-id"), "loginId", login_id).await
}

pub async fn is_email_taken(
    client: &reqwest::Client,
    base_url: &str,
    email: &str,
) -> Result<bool, SignupError> {
    check(client, format!("{base_url}/api/users/check-email"), "email", email).await
}

pub async fn is_nickname_taken(
    client: &reqwest::Client,
    base_url: &str,
    nickname: &str,
) -> Result<bool, SignupError> {
    check(
        client,
        format!("{base_url}/api/users/check-nickname"),
        "nickname",
        nickname,
    )
    .await
}

async fn check(
    client: &reqwest::Client,
    url: String,
    param: &str,
    value: &str,
) -> Result<bool, SignupError> {
    let envelope: ApiResponse<bool> = client
        .get(url)
        .query(&[(param, value)])
        .send()
        .await?
        .json()
        .await?;
    if !envelope.success {
        return Err(SignupError::Rejected(
            envelope
                .message
                .unwrap_or_else(|| "availability check failed".to_string()),
        ));
    }
    Ok(envelope.data.unwrap_or(false))
}
