//! Profile source arguments shared by every subcommand

use clap::Args;
use std::path::PathBuf;

use crate::services::{ProfileSource, Settings};
use crate::types::{Result, RhythmError};

/// Where to read the profile payload from.
/// Precedence when several are given: file, stdin, user.
#[derive(Args, Debug, Default, Clone)]
pub struct SourceArgs {
    /// Read the payload from a JSON file
    #[arg(long, value_name = "PATH", global = true)]
    pub file: Option<PathBuf>,

    /// Read the payload from stdin
    #[arg(long, global = true)]
    pub stdin: bool,

    /// Fetch this user's profile from the API (e.g. u-xxxxx)
    #[arg(long, value_name = "USER_ID", global = true)]
    pub user: Option<String>,

    /// API base URL (overrides the config file)
    #[arg(long, value_name = "URL", global = true)]
    pub api: Option<String>,

    /// Fetch the full profile document instead of the review-rhythm component
    #[arg(long, global = true)]
    pub full_profile: bool,
}

impl SourceArgs {
    /// Turn the flags into a [`ProfileSource`], taking the API URL from
    /// settings when `--api` is not given
    pub fn resolve(&self, settings: &Settings) -> Result<ProfileSource> {
        if let Some(path) = &self.file {
            return Ok(ProfileSource::File(path.clone()));
        }
        if self.stdin {
            return Ok(ProfileSource::Stdin);
        }
        if let Some(user_id) = &self.user {
            let user_id = user_id.trim();
            if user_id.is_empty() {
                return Err(RhythmError::Config("--user must not be empty".into()));
            }
            let base_url = self
                .api
                .clone()
                .unwrap_or_else(|| settings.api_base_url.clone());
            return Ok(ProfileSource::Api {
                base_url,
                user_id: user_id.to_string(),
                full_profile: self.full_profile,
            });
        }
        Err(RhythmError::Config(
            "no profile source: pass --file, --stdin or --user".into(),
        ))
    }
}
