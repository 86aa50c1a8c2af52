//! SOQL text for the queries this tool issues.

use crate::model::UserRole;

/// Fields read back for every listed user.
pub const USER_FIELDS: &[&str] = &[
    "Id",
    "Username",
    "Email",
    "FirstName",
    "LastName",
    "Profile.Name",
    "IsActive",
    "CreatedDate",
    "Phone",
    "Title",
    "Department",
    "CompanyName",
];

/// Escapes a value for use inside a single-quoted SOQL string literal.
pub fn escape_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

pub fn profile_lookup(role: UserRole) -> String {
    format!(
        "SELECT Id FROM Profile WHERE Name = '{}'",
        escape_literal(role.profile_name())
    )
}

pub fn list_users(active_only: bool) -> String {
    let mut soql = format!("SELECT {} FROM User", USER_FIELDS.join(", "));
    if active_only {
        soql.push_str(" WHERE IsActive = true");
    }
    soql.push_str(" ORDER BY LastName");
    soql
}
