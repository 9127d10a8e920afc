//! Reads the `settings` tab of a campaign setup workbook.
//!
//! The sheet is a two-column key/value table: a header row naming the `setting` and
//! `value` columns, then one row per setting. Other columns and rows are ignored.

use std::path::Path;

use calamine::{open_workbook_auto, Data, DataType, Range, Reader};
use tracing::debug;

use crate::entities::CampaignRecord;
use crate::error::SettingsError;

pub const SETTINGS_SHEET: &str = "settings";
pub const SETTING_COLUMN: &str = "setting";
pub const VALUE_COLUMN: &str = "value";

pub const CAMPAIGN_NAME_KEY: &str = "campaign_name";
pub const COMPANY_KEY: &str = "company";
pub const WEBSITE_KEY: &str = "website";

/// Key/value rows of the settings sheet, in sheet order.
#[derive(Debug, Clone, Default)]
pub struct SettingsSheet {
    rows: Vec<(String, Data)>,
}

impl SettingsSheet {
    /// Opens the workbook at `path` and loads its settings sheet.
    pub fn open(path: &Path) -> Result<Self, SettingsError> {
        let mut workbook = open_workbook_auto(path).map_err(|source| SettingsError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        if !workbook.sheet_names().iter().any(|name| name == SETTINGS_SHEET) {
            return Err(SettingsError::MissingSheet(SETTINGS_SHEET.to_string()));
        }

        let range = workbook
            .worksheet_range(SETTINGS_SHEET)
            .map_err(|source| SettingsError::ReadSheet {
                sheet: SETTINGS_SHEET.to_string(),
                source,
            })?;

        Self::from_range(&range)
    }

    /// Builds the table from a sheet range whose first row is the header.
    pub fn from_range(range: &Range<Data>) -> Result<Self, SettingsError> {
        let mut rows = range.rows();
        let header = rows.next().unwrap_or(&[]);

        let setting_idx = column_index(header, SETTING_COLUMN)?;
        let value_idx = column_index(header, VALUE_COLUMN)?;

        let rows = rows
            .filter_map(|row| match row.get(setting_idx) {
                Some(Data::String(key)) => {
                    let value = row.get(value_idx).cloned().unwrap_or(Data::Empty);
                    Some((key.clone(), value))
                }
                // Only string keys can match a setting name.
                _ => None,
            })
            .collect();

        Ok(SettingsSheet { rows })
    }

    /// Value of the first row whose setting equals `key`.
    pub fn value(&self, key: &'static str) -> Result<String, SettingsError> {
        let (_, cell) = self
            .rows
            .iter()
            .find(|(setting, _)| setting == key)
            .ok_or(SettingsError::MissingSetting(key))?;

        let value = match cell {
            Data::Empty => None,
            Data::String(s) if s.is_empty() => None,
            Data::String(s) => Some(s.clone()),
            Data::DateTimeIso(s) => Some(s.clone()),
            // Date-formatted cells read as `YYYY-MM-DD HH:MM:SS`, not the raw serial number.
            Data::DateTime(_) => Some(
                cell.as_datetime()
                    .map_or_else(|| cell.to_string(), |dt| dt.to_string()),
            ),
            other => Some(other.to_string()),
        };
        let value = value.ok_or(SettingsError::EmptyValue(key))?;

        debug!(key, value = %value, "Found setting");
        Ok(value)
    }

    pub fn campaign_record(&self) -> Result<CampaignRecord, SettingsError> {
        Ok(CampaignRecord {
            name: self.value(CAMPAIGN_NAME_KEY)?,
            company_name: self.value(COMPANY_KEY)?,
            company_site: self.value(WEBSITE_KEY)?,
        })
    }
}

fn column_index(header: &[Data], column: &'static str) -> Result<usize, SettingsError> {
    header
        .iter()
        .position(|cell| matches!(cell, Data::String(s) if s == column))
        .ok_or(SettingsError::MissingColumn(column))
}

/// Reads the campaign record out of the workbook at `path`.
pub fn read_campaign_record(path: &Path) -> Result<CampaignRecord, SettingsError> {
    SettingsSheet::open(path)?.campaign_record()
}
