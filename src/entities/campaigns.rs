use sea_orm::entity::prelude::*;
use sea_orm::Set;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Campaigns_temp")]
pub struct Model {
    // The staging table carries no key; `name` only stands in for one on the ORM side.
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    pub company_name: String,
    pub company_site: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// One campaign as read from the settings sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CampaignRecord {
    pub name: String,
    pub company_name: String,
    pub company_site: String,
}

impl From<CampaignRecord> for ActiveModel {
    fn from(record: CampaignRecord) -> Self {
        ActiveModel {
            name: Set(record.name),
            company_name: Set(record.company_name),
            company_site: Set(record.company_site),
        }
    }
}

impl From<Model> for CampaignRecord {
    fn from(model: Model) -> Self {
        CampaignRecord {
            name: model.name,
            company_name: model.company_name,
            company_site: model.company_site,
        }
    }
}
