pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod jobs;
pub mod settings;

pub use config::DatabaseConfig;
pub use entities::CampaignRecord;
pub use error::ImportError;
pub use jobs::{import_campaign, run_campaign_setup};
