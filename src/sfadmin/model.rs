use crate::error::{Result, SfAdminError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User roles, each bound to a Salesforce profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UserRole {
    #[default]
    #[serde(rename = "standard")]
    Standard,
    #[serde(rename = "admin")]
    Administrator,
    #[serde(rename = "read_only")]
    ReadOnly,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [
        UserRole::Standard,
        UserRole::Administrator,
        UserRole::ReadOnly,
    ];

    /// The profile display name this role maps to in the org.
    pub fn profile_name(&self) -> &'static str {
        match self {
            UserRole::Standard => "Standard User",
            UserRole::Administrator => "System Administrator",
            UserRole::ReadOnly => "Read Only",
        }
    }

    /// The key accepted on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            UserRole::Standard => "standard",
            UserRole::Administrator => "admin",
            UserRole::ReadOnly => "read_only",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.profile_name())
    }
}

impl FromStr for UserRole {
    type Err = SfAdminError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(UserRole::Standard),
            "admin" => Ok(UserRole::Administrator),
            "read_only" | "read-only" => Ok(UserRole::ReadOnly),
            _ => Err(SfAdminError::InvalidRole(s.to_string())),
        }
    }
}

/// A Salesforce user as seen by this tool.
///
/// `id` and `created_date` only ever come back from the org: a user built
/// locally has neither until it has been created or listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub created_date: Option<DateTime<Utc>>,
    pub phone: Option<String>,
    pub title: Option<String>,
    pub department: Option<String>,
    pub company: Option<String>,
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: None,
            username: None,
            email: None,
            first_name: None,
            last_name: None,
            role: UserRole::Standard,
            is_active: true,
            created_date: None,
            phone: None,
            title: None,
            department: None,
            company: None,
        }
    }
}

impl User {
    /// "First Last", skipping whichever part is missing.
    pub fn full_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or("");
        let last = self.last_name.as_deref().unwrap_or("");
        format!("{} {}", first, last).trim().to_string()
    }
}

/// Input for creating a user. The role is kept as the raw key and only
/// validated when the user is actually created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserParams {
    pub email: String,
    pub last_name: String,
    pub first_name: Option<String>,
    pub username: Option<String>,
    pub role: String,
    pub phone: Option<String>,
    pub title: Option<String>,
    pub department: Option<String>,
    pub company: Option<String>,
}

impl CreateUserParams {
    pub fn new(email: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            last_name: last_name.into(),
            first_name: None,
            username: None,
            role: UserRole::Standard.key().to_string(),
            phone: None,
            title: None,
            department: None,
            company: None,
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Validates the role key and builds the user that will be sent to the
    /// org. The username falls back to the email.
    pub fn into_user(self) -> Result<User> {
        if self.email.trim().is_empty() {
            return Err(SfAdminError::Api("Email cannot be empty".into()));
        }
        if self.last_name.trim().is_empty() {
            return Err(SfAdminError::Api("Last name cannot be empty".into()));
        }
        let role = UserRole::from_str(&self.role)?;
        let username = self.username.unwrap_or_else(|| self.email.clone());
        Ok(User {
            username: Some(username),
            email: Some(self.email),
            first_name: self.first_name,
            last_name: Some(self.last_name),
            role,
            phone: self.phone,
            title: self.title,
            department: self.department,
            company: self.company,
            ..User::default()
        })
    }
}
