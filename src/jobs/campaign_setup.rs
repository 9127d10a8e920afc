use std::path::Path;

use sea_orm::{ConnectionTrait, TransactionTrait};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::db;
use crate::entities::CampaignRecord;
use crate::error::ImportError;
use crate::settings;

/// Full import run: connect with `config`, read the campaign from `workbook`,
/// replace the campaigns table and close the connection.
///
/// Credentials are checked before the workbook is opened.
#[tracing::instrument(skip(config, workbook), fields(workbook = %workbook.display()))]
pub async fn run_campaign_setup(
    config: &DatabaseConfig,
    workbook: &Path,
) -> Result<CampaignRecord, ImportError> {
    let conn = db::connect(config).await?;

    let record = import_campaign(&conn, workbook).await?;

    conn.close().await?;
    info!("Campaign setup finished");
    Ok(record)
}

/// Reads the campaign record from `workbook` and writes it over the campaigns table.
/// A workbook that can't be read leaves the table untouched.
pub async fn import_campaign<C>(db: &C, workbook: &Path) -> Result<CampaignRecord, ImportError>
where
    C: ConnectionTrait + TransactionTrait,
{
    let record = settings::read_campaign_record(workbook)?;
    info!(
        name = %record.name,
        company = %record.company_name,
        website = %record.company_site,
        "Read campaign settings"
    );

    db::replace_campaign_record(db, &record).await?;
    Ok(record)
}
