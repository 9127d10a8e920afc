pub mod campaigns;

pub use campaigns::CampaignRecord;

pub use campaigns::Entity as Campaigns;
