use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Tenant,
    Client,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Local,
    Google,
    Facebook,
}

/// Providers the user can be redirected to from the sign-in step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialProvider {
    Google,
    Facebook,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub role: UserRole,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: User,
}

#[derive(Debug, Serialize, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Raw sign-up form input, validated client-side before it becomes a
/// `RegisterRequest`.
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest, String> {
        if self.email.trim().is_empty()
            || self.password.is_empty()
            || self.first_name.trim().is_empty()
            || self.last_name.trim().is_empty()
        {
            return Err("All fields are required".to_string());
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match".to_string());
        }
        validate_password(&self.password)?;

        Ok(RegisterRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
        })
    }
}

/// At least 8 characters with uppercase, lowercase, and a number or special
/// character. Matches what the registration endpoint enforces.
pub fn validate_password(password: &str) -> Result<(), String> {
    let long_enough = password.chars().count() >= 8;
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_digit_or_special = password.chars().any(|c| c.is_ascii_digit() || !c.is_alphanumeric());

    if long_enough && has_upper && has_lower && has_digit_or_special {
        Ok(())
    } else {
        Err(
            "Password must be at least 8 characters with uppercase, lowercase, and number/special character"
                .to_string(),
        )
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MessageResponse {
    pub message: String,
}
