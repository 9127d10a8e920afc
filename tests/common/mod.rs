#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Once;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

static INIT: Once = Once::new();

pub fn setup() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt::try_init();
    });
}

/// Writes an xlsx with a `settings` sheet holding `rows` under a `setting`/`value` header.
pub fn write_settings_workbook(dir: &Path, file_name: &str, rows: &[(&str, &str)]) -> PathBuf {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.new_sheet("settings").unwrap();
    sheet.get_cell_mut("A1").set_value("setting");
    sheet.get_cell_mut("B1").set_value("value");
    for (i, (key, value)) in rows.iter().enumerate() {
        let row = i + 2;
        sheet.get_cell_mut(format!("A{}", row).as_str()).set_value(*key);
        sheet.get_cell_mut(format!("B{}", row).as_str()).set_value(*value);
    }

    let path = dir.join(file_name);
    umya_spreadsheet::writer::xlsx::write(&book, &path).unwrap();
    path
}

/// Writes an xlsx that only has the default sheet.
pub fn write_workbook_without_settings(dir: &Path, file_name: &str) -> PathBuf {
    let book = umya_spreadsheet::new_file();

    let path = dir.join(file_name);
    umya_spreadsheet::writer::xlsx::write(&book, &path).unwrap();
    path
}

pub fn acme_settings() -> Vec<(&'static str, &'static str)> {
    vec![
        ("campaign_name", "Acme Fall Sale"),
        ("company", "Acme Corp"),
        ("website", "acme.example.com"),
    ]
}

pub async fn memory_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    // One connection so every query sees the same in-memory database.
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    Database::connect(opts).await.unwrap()
}
