pub mod campaign_setup;

pub use campaign_setup::{import_campaign, run_campaign_setup};
