//! Builds the `Key=Value` list passed to `sf data create record --values`.

use crate::error::{Result, SfAdminError};
use crate::model::User;

/// Maximum alias length accepted by the org.
pub const ALIAS_LEN: usize = 5;

/// Locale defaults applied to every created user.
pub const FIXED_DEFAULTS: [(&str, &str); 4] = [
    ("TimeZoneSidKey", "America/New_York"),
    ("LocaleSidKey", "en_US"),
    ("EmailEncodingKey", "UTF-8"),
    ("LanguageLocaleKey", "en_US"),
];

/// Fields for creating `user` with the given profile.
///
/// Absent or empty optional values contribute nothing.
pub fn build_create_fields(user: &User, profile_id: &str) -> Result<Vec<String>> {
    let email = user.email.as_deref();
    let alias = user.username.as_deref().map(alias_for);
    let mut fields = vec![
        field("Username", email)?,
        field("Email", email)?,
        field("FirstName", user.first_name.as_deref())?,
        field("LastName", user.last_name.as_deref())?,
        field("Alias", alias.as_deref())?,
        field("ProfileId", Some(profile_id))?,
    ];
    for &(key, value) in FIXED_DEFAULTS.iter() {
        fields.push(field(key, Some(value))?);
    }
    fields.extend([
        field("Phone", user.phone.as_deref())?,
        field("Title", user.title.as_deref())?,
        field("Department", user.department.as_deref())?,
        field("CompanyName", user.company.as_deref())?,
    ]);

    fields.retain(|f| !f.is_empty());
    Ok(fields)
}

/// First [`ALIAS_LEN`] characters of the username. Shorter names pass through.
pub fn alias_for(username: &str) -> String {
    username.chars().take(ALIAS_LEN).collect()
}

/// Joins fields into the single `--values` argument.
pub fn join_values(fields: &[String]) -> String {
    fields.join(" ")
}

fn field(key: &str, value: Option<&str>) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(format!("{}={}", key, quote_value(v)?)),
        _ => Ok(String::new()),
    }
}

/// Quotes a value for the `--values` syntax.
///
/// Pairs are split on whitespace and a quoted run (`'...'` or `"..."`) is
/// taken literally. There is no escape character, so a value holding an
/// apostrophe goes in double quotes, and one holding both quote kinds cannot
/// be expressed at all.
pub fn quote_value(value: &str) -> Result<String> {
    let has_single = value.contains('\'');
    let has_double = value.contains('"');

    if has_single && has_double {
        return Err(SfAdminError::Api(format!(
            "Value cannot contain both single and double quotes: {}",
            value
        )));
    }
    if has_single {
        return Ok(format!("\"{}\"", value));
    }
    if has_double || value.chars().any(char::is_whitespace) {
        return Ok(format!("'{}'", value));
    }
    Ok(value.to_string())
}
