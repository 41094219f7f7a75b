// Column names are the on-disk compatibility contract; existing
// newcontacts.db files must keep loading unchanged.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS newcontacts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    mobileNumber TEXT,
    landlineNumber TEXT,
    photo TEXT,
    isFavorite INTEGER
);
"#;
