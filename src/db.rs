use sea_orm::sea_query::{ColumnDef, Table};
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, TransactionTrait,
};
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::entities::campaigns::{self, Column};
use crate::entities::{CampaignRecord, Campaigns};
use crate::error::ImportError;

pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, ImportError> {
    let url = config.connection_url()?;
    info!(
        host = config.host.as_deref().unwrap_or_default(),
        database = config.database.as_deref().unwrap_or_default(),
        "Connecting to Postgres"
    );
    Ok(Database::connect(&url).await?)
}

/// Replaces the whole campaigns staging table with a single row holding `record`.
///
/// Drop, create and insert run in one transaction: on any error it is rolled back and
/// the table keeps whatever it held before. Nothing is appended to existing rows.
pub async fn replace_campaign_record<C>(db: &C, record: &CampaignRecord) -> Result<(), DbErr>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await?;
    let backend = txn.get_database_backend();

    let drop_stmt = Table::drop().table(Campaigns).if_exists().to_owned();
    txn.execute(backend.build(&drop_stmt)).await?;

    let create_stmt = Table::create()
        .table(Campaigns)
        .col(ColumnDef::new(Column::Name).text().not_null())
        .col(ColumnDef::new(Column::CompanyName).text().not_null())
        .col(ColumnDef::new(Column::CompanySite).text().not_null())
        .to_owned();
    txn.execute(backend.build(&create_stmt)).await?;
    debug!("Recreated campaigns table");

    let row: campaigns::ActiveModel = record.clone().into();
    Campaigns::insert(row).exec_without_returning(&txn).await?;

    txn.commit().await?;
    info!(campaign = %record.name, "Replaced campaigns table");
    Ok(())
}

/// Current contents of the campaigns table.
pub async fn campaign_records<C: ConnectionTrait>(db: &C) -> Result<Vec<CampaignRecord>, DbErr> {
    let models = Campaigns::find().all(db).await?;
    Ok(models.into_iter().map(CampaignRecord::from).collect())
}
