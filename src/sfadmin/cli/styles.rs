use console::Style;
use once_cell::sync::Lazy;

/// Styles for the user table columns.
pub struct TableStyles {
    pub title: Style,
    pub header: Style,
    pub id: Style,
    pub username: Style,
    pub email: Style,
    pub name: Style,
    pub role: Style,
    pub active: Style,
    pub inactive: Style,
    pub time: Style,
}

pub static TABLE_STYLES: Lazy<TableStyles> = Lazy::new(|| TableStyles {
    title: Style::new().bold().italic(),
    header: Style::new().bold(),
    id: Style::new().cyan(),
    username: Style::new().magenta(),
    email: Style::new().green(),
    name: Style::new().yellow(),
    role: Style::new().blue(),
    active: Style::new().green(),
    inactive: Style::new().red(),
    time: Style::new().color256(246).italic(),
});
