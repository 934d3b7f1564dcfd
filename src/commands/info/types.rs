use std::fmt::Display;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::WORKSPACE_ROOT_ENV;
use crate::utils::current_username;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectInfo {
    pub branch: String,
    pub name: String,
    pub owner: String,
    pub repo: String,
    pub revision: String,
    pub version: String,
}

impl Display for ProjectInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Version: {}", self.version)?;
        writeln!(f, "Owner: {}", self.owner)?;
        writeln!(f, "Repo: {}", self.repo)?;
        writeln!(f, "Branch: {}", self.branch)?;
        write!(f, "Revision: {}", self.revision)
    }
}

/// Process environment a project is resolved in.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    pub cwd: PathBuf,
    pub workspace_root: Option<PathBuf>,
    pub username: Option<String>,
}

impl Environment {
    pub fn from_process() -> Result<Self> {
        let cwd = std::env::current_dir().context("Couldn't get current working directory")?;

        let workspace_root = std::env::var_os(WORKSPACE_ROOT_ENV)
            .filter(|root| !root.is_empty())
            .map(PathBuf::from);

        // only needed outside of a checkout, the resolver reports a missing user
        let username = current_username()
            .map_err(|error| log::debug!("{error}"))
            .ok();

        Ok(Self {
            cwd,
            workspace_root,
            username,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display_order() {
        let info = ProjectInfo {
            branch: "main".to_string(),
            name: "promu".to_string(),
            owner: "prometheus".to_string(),
            repo: "github.com/prometheus/promu".to_string(),
            revision: "3f1b2c".to_string(),
            version: "0.15.0".to_string(),
        };

        assert_eq!(
            info.to_string(),
            "Name: promu\n\
             Version: 0.15.0\n\
             Owner: prometheus\n\
             Repo: github.com/prometheus/promu\n\
             Branch: main\n\
             Revision: 3f1b2c"
        );
    }

    #[test]
    fn test_display_empty_version() {
        let info = ProjectInfo::default();

        assert!(info.to_string().lines().any(|line| line == "Version: "));
        assert_eq!(info.to_string().lines().count(), 6);
    }
}
