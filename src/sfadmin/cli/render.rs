//! # Rendering Module
//!
//! Turns `CmdResult` contents into terminal output. Layout math (column
//! widths, padding) is done on plain text with Unicode-aware widths; styles
//! are applied afterwards so escape codes never skew the alignment.

use super::styles::TABLE_STYLES;
use chrono::{DateTime, Utc};
use colored::Colorize;
use console::Style;
use sfadmin::api::{CmdMessage, MessageLevel};
use sfadmin::error::Result;
use sfadmin::model::User;
use unicode_width::UnicodeWidthStr;

const TABLE_TITLE: &str = "Salesforce Users";
const COLUMN_GAP: &str = "  ";
const HEADERS: [&str; 7] = ["ID", "Username", "Email", "Name", "Role", "Active", "Created"];

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

pub(super) fn print_user_table(users: &[User]) {
    print!("{}", render_user_table(users, console::colors_enabled()));
}

pub(super) fn print_users_json(users: &[User]) -> Result<()> {
    println!("{}", render_users_json(users)?);
    Ok(())
}

/// Field-by-field dump of a user, shown before it is created in verbose mode.
pub(super) fn print_user_details(user: &User) {
    println!("{}", "Creating user:".yellow().bold());
    for (label, value) in user_details(user) {
        println!("  {:<12} {}", label, value);
    }
}

pub(super) fn render_users_json(users: &[User]) -> Result<String> {
    Ok(serde_json::to_string_pretty(users)?)
}

pub(super) fn render_user_table(users: &[User], use_color: bool) -> String {
    if users.is_empty() {
        return String::new();
    }

    let rows: Vec<[String; 7]> = users.iter().map(table_row).collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.width());
        }
    }

    let s = &*TABLE_STYLES;
    let total_width = widths.iter().sum::<usize>() + COLUMN_GAP.len() * (widths.len() - 1);
    let mut out = String::new();

    out.push_str(&paint(&s.title, &center(TABLE_TITLE, total_width), use_color));
    out.push('\n');

    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| paint(&s.header, &pad(h, *w), use_color))
        .collect();
    out.push_str(header.join(COLUMN_GAP).trim_end());
    out.push('\n');

    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    out.push_str(&rule.join(COLUMN_GAP));
    out.push('\n');

    for (row, user) in rows.iter().zip(users) {
        let active_style = if user.is_active { &s.active } else { &s.inactive };
        let styles = [
            &s.id,
            &s.username,
            &s.email,
            &s.name,
            &s.role,
            active_style,
            &s.time,
        ];
        let cells: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .zip(styles.iter())
            .map(|((cell, w), style)| paint(style, &pad(cell, *w), use_color))
            .collect();
        out.push_str(cells.join(COLUMN_GAP).trim_end());
        out.push('\n');
    }

    out
}

fn table_row(user: &User) -> [String; 7] {
    [
        user.id.clone().unwrap_or_default(),
        user.username.clone().unwrap_or_default(),
        user.email.clone().unwrap_or_default(),
        user.full_name(),
        user.role.profile_name().to_string(),
        yes_no(user.is_active).to_string(),
        user.created_date.map(format_time_ago).unwrap_or_default(),
    ]
}

fn user_details(user: &User) -> Vec<(&'static str, String)> {
    let optional = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
    vec![
        ("Username", optional(&user.username)),
        ("Email", optional(&user.email)),
        ("First name", optional(&user.first_name)),
        ("Last name", optional(&user.last_name)),
        ("Role", user.role.profile_name().to_string()),
        ("Active", yes_no(user.is_active).to_string()),
        ("Phone", optional(&user.phone)),
        ("Title", optional(&user.title)),
        ("Department", optional(&user.department)),
        ("Company", optional(&user.company)),
    ]
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn paint(style: &Style, text: &str, use_color: bool) -> String {
    style
        .clone()
        .force_styling(use_color)
        .apply_to(text)
        .to_string()
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn center(text: &str, width: usize) -> String {
    let left = width.saturating_sub(text.width()) / 2;
    format!("{}{}", " ".repeat(left), text)
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}
