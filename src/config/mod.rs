//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. All values have working defaults, so a
//! bare environment yields a usable configuration.

mod error;

pub use error::ConfigError;

use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::dialog::SheetNames;

/// Flow configuration
///
/// Load using [`FlowConfig::load()`], which reads a `.env` file when present
/// and then the process environment:
///
/// - `APPLICATIONS_SHEET_NAME` - sheet receiving job applications
/// - `CONTACTS_SHEET_NAME` - sheet receiving contact requests
/// - `JOB_DESCRIPTIONS_DIR` - directory of per-language description files
#[derive(Debug, Clone, Deserialize)]
pub struct FlowConfig {
    /// Sheet name for finalized job applications.
    #[serde(default = "default_applications_sheet")]
    pub applications_sheet_name: String,

    /// Sheet name for finalized contact requests.
    #[serde(default = "default_contacts_sheet")]
    pub contacts_sheet_name: String,

    /// Directory holding `Job_descriptions_<suffix>.md` files.
    #[serde(default = "default_descriptions_dir")]
    pub job_descriptions_dir: PathBuf,
}

fn default_applications_sheet() -> String {
    "Applications".to_string()
}

fn default_contacts_sheet() -> String {
    "Contacts".to_string()
}

fn default_descriptions_dir() -> PathBuf {
    PathBuf::from("JobDescriptions")
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            applications_sheet_name: default_applications_sheet(),
            contacts_sheet_name: default_contacts_sheet(),
            job_descriptions_dir: default_descriptions_dir(),
        }
    }
}

impl FlowConfig {
    /// Load configuration from environment variables
    ///
    /// Reads `.env` if present (development), then deserializes the
    /// environment into the typed struct. Missing variables fall back to
    /// the defaults above.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// The sheet names in the form the dialog engine consumes.
    pub fn sheet_names(&self) -> SheetNames {
        SheetNames {
            applications: self.applications_sheet_name.clone(),
            contacts: self.contacts_sheet_name.clone(),
        }
    }
}
