use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use campaign_import::config::{DatabaseConfig, ENV_FILE};
use campaign_import::run_campaign_setup;
use clap::Parser;
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

/// Load a campaign's settings sheet into the campaigns staging table.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the campaign setup workbook
    workbook: PathBuf,
}

async fn run(cli: &Cli, env_file: &Path) -> anyhow::Result<()> {
    let config = DatabaseConfig::load(env_file)
        .with_context(|| format!("failed to load database settings from {}", env_file.display()))?;

    run_campaign_setup(&config, &cli.workbook)
        .await
        .with_context(|| format!("campaign setup failed for {}", cli.workbook.display()))?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Arguments first: a bad invocation exits before any file or network I/O.
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    match run(&cli, Path::new(ENV_FILE)).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_workbook_argument_is_required() {
        let err = Cli::try_parse_from(["campaign-import"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_single_positional_workbook() {
        let cli = Cli::try_parse_from(["campaign-import", "setup.xlsx"]).unwrap();
        assert_eq!(cli.workbook, PathBuf::from("setup.xlsx"));
    }

    #[test]
    fn test_extra_arguments_rejected() {
        assert!(Cli::try_parse_from(["campaign-import", "a.xlsx", "b.xlsx"]).is_err());
    }

    #[tokio::test]
    async fn test_run_reports_config_failure_as_one_error() {
        let dir = tempfile::tempdir().unwrap();
        let env_file = dir.path().join(".env");
        std::fs::write(&env_file, "POSTGRESQL_USER camp\n").unwrap();
        let cli = Cli::try_parse_from(["campaign-import", "setup.xlsx"]).unwrap();

        let err = run(&cli, &env_file).await.unwrap_err();
        let report = format!("{:#}", err);
        assert!(report.starts_with("failed to load database settings from"));
        assert!(report.contains("failed to read environment file"));
    }
}
