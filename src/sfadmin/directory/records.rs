//! Maps `User` query records back into [`User`] values.

use crate::model::{User, UserRole};
use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::debug;

/// Timestamp format used by the org, e.g. `2024-01-15T14:30:00.000+0000`.
const SF_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Infers a role from a profile name.
///
/// Anything that is not recognisably an administrator or read-only profile is
/// treated as a standard user.
pub fn classify_role(profile_name: Option<&str>) -> UserRole {
    let name = match profile_name {
        Some(name) if !name.is_empty() => name,
        _ => return UserRole::Standard,
    };

    if name.contains("Administrator") {
        UserRole::Administrator
    } else if name.contains("Read Only") {
        UserRole::ReadOnly
    } else {
        if name != UserRole::Standard.profile_name() {
            debug!(profile = name, "unrecognised profile, treating as standard");
        }
        UserRole::Standard
    }
}

pub fn records_to_users(records: &[Value]) -> Vec<User> {
    records.iter().map(record_to_user).collect()
}

pub fn record_to_user(record: &Value) -> User {
    let profile_name = record
        .get("Profile")
        .and_then(|p| p.get("Name"))
        .and_then(Value::as_str);

    User {
        id: text(record, "Id"),
        username: text(record, "Username"),
        email: text(record, "Email"),
        first_name: text(record, "FirstName"),
        last_name: text(record, "LastName"),
        role: classify_role(profile_name),
        is_active: record
            .get("IsActive")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        created_date: text(record, "CreatedDate").and_then(|s| parse_datetime(&s)),
        phone: text(record, "Phone"),
        title: text(record, "Title"),
        department: text(record, "Department"),
        company: text(record, "CompanyName"),
    }
}

fn text(record: &Value, key: &str) -> Option<String> {
    record.get(key).and_then(Value::as_str).map(str::to_string)
}

pub fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_str(raw, SF_DATETIME_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}
