use std::collections::HashMap;
use std::env;
use std::fmt;
use std::path::Path;

use tracing::debug;
use url::Url;

use crate::error::ConfigError;

/// Environment file read by the binary, relative to the working directory.
pub const ENV_FILE: &str = ".env";

pub const USER_VAR: &str = "POSTGRESQL_USER";
pub const PASSWORD_VAR: &str = "POSTGRESQL_PASSWORD";
pub const HOST_VAR: &str = "POSTGRESQL_HOST";
pub const DATABASE_VAR: &str = "POSTGRESQL_DATABASE";

const VARS: [&str; 4] = [USER_VAR, PASSWORD_VAR, HOST_VAR, DATABASE_VAR];

/// Postgres credentials for the import run.
///
/// Values are kept as loaded; presence is only checked by [`DatabaseConfig::connection_url`],
/// so a missing credential surfaces when the connection is attempted.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub user: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub database: Option<String>,
}

impl DatabaseConfig {
    /// Reads the env file at `path` without touching the process environment.
    /// Variables already set in the process override the file; a missing file is skipped.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, |key| env::var(key).ok())
    }

    /// Like [`DatabaseConfig::load`], with `process` standing in for the process environment.
    pub fn load_with<F>(path: impl AsRef<Path>, process: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();
        let mut vars: HashMap<String, String> = HashMap::new();

        match dotenvy::from_path_iter(path) {
            Ok(iter) => {
                for item in iter {
                    let (key, value) = item?;
                    vars.insert(key, value);
                }
            }
            Err(e) if e.not_found() => {
                debug!("No env file at {}; using process environment", path.display());
            }
            Err(e) => return Err(e.into()),
        }

        for key in VARS {
            if let Some(value) = process(key) {
                vars.insert(key.to_string(), value);
            }
        }

        Ok(Self::from_lookup(|key| vars.get(key).cloned()))
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        DatabaseConfig {
            user: lookup(USER_VAR),
            password: lookup(PASSWORD_VAR),
            host: lookup(HOST_VAR),
            database: lookup(DATABASE_VAR),
        }
    }

    /// `postgresql://<user>:<password>@<host>/<database>`, with user and password percent-encoded.
    pub fn connection_url(&self) -> Result<String, ConfigError> {
        let user = required(&self.user, USER_VAR)?;
        let password = self
            .password
            .as_deref()
            .ok_or(ConfigError::MissingVar(PASSWORD_VAR))?;
        let host = required(&self.host, HOST_VAR)?;
        let database = required(&self.database, DATABASE_VAR)?;

        let invalid_host = || ConfigError::InvalidHost(host.to_string());
        let mut url = Url::parse(&format!("postgresql://{}", host)).map_err(|_| invalid_host())?;
        // Anything past the authority means the value was not a bare host[:port].
        let bare = url.host_str().is_some_and(|h| !h.is_empty())
            && url.path().is_empty()
            && url.query().is_none()
            && url.fragment().is_none()
            && url.username().is_empty()
            && url.password().is_none();
        if !bare {
            return Err(invalid_host());
        }
        url.set_username(user).map_err(|_| invalid_host())?;
        url.set_password(Some(password)).map_err(|_| invalid_host())?;
        url.set_path(&format!("/{}", database));

        Ok(url.to_string())
    }
}

fn required<'a>(value: &'a Option<String>, key: &'static str) -> Result<&'a str, ConfigError> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingVar(key))
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("host", &self.host)
            .field("database", &self.database)
            .finish()
    }
}
