use std::path::Path;

use anyhow::{anyhow, Context, Result};
use tokio::fs;

use super::parse::{normalize_remote_url, owner_and_name};
use super::types::{Environment, ProjectInfo};
use crate::config::{NON_GIT, VERSION_FILES};
use crate::utils::git::RevisionSource;

pub async fn resolve<S>(source: &S, env: &Environment) -> Result<ProjectInfo>
where
    S: RevisionSource + ?Sized,
{
    let (mut info, root) = match source.toplevel().await {
        Some(toplevel) => {
            log::debug!("Found git checkout at {toplevel:?}");

            (from_git(source).await?, toplevel)
        }

        None => {
            log::debug!("Not a git checkout, using {:?}", env.cwd);

            (from_cwd(env)?, env.cwd.clone())
        }
    };

    match find_version(&root).await? {
        Some(version) => info.version = version,
        None => log::warn!(
            "Unable to find project's version: missing `{}` or `{}` file",
            VERSION_FILES[0],
            VERSION_FILES[1]
        ),
    }

    Ok(info)
}

async fn from_git<S>(source: &S) -> Result<ProjectInfo>
where
    S: RevisionSource + ?Sized,
{
    let repo =
        normalize_remote_url(&source.remote_url().await).context("Couldn't parse repo location")?;

    if repo.is_empty() {
        log::warn!("No `remote.origin.url` configured, leaving repo location empty");
    }

    let (owner, name) = owner_and_name(&repo);

    Ok(ProjectInfo {
        branch: source.branch().await,
        name,
        owner,
        repo,
        revision: source.revision().await,
        version: String::new(),
    })
}

fn from_cwd(env: &Environment) -> Result<ProjectInfo> {
    let repo = workspace_relative(&env.cwd, env.workspace_root.as_deref());

    let name = env
        .cwd
        .file_name()
        .map_or_else(|| repo.clone(), |name| name.to_string_lossy().to_string());

    let owner = env
        .username
        .clone()
        .ok_or_else(|| anyhow!("Couldn't get current user"))?;

    Ok(ProjectInfo {
        branch: NON_GIT.to_string(),
        name,
        owner,
        repo,
        revision: NON_GIT.to_string(),
        version: String::new(),
    })
}

/// `cwd` below `<workspace_root>/src`, or `cwd` itself when it is elsewhere.
pub fn workspace_relative(cwd: &Path, workspace_root: Option<&Path>) -> String {
    let relative = workspace_root
        .and_then(|root| cwd.strip_prefix(root).ok())
        .unwrap_or(cwd);

    let relative = relative.strip_prefix("src").unwrap_or(relative);

    relative.to_string_lossy().to_string()
}

/// Trimmed content of the first version file found in `root`.
pub async fn find_version(root: &Path) -> Result<Option<String>> {
    for file in VERSION_FILES {
        let path = root.join(file);

        if !fs::try_exists(&path).await.unwrap_or(false) {
            continue;
        }

        log::debug!("Reading version from {path:?}");

        let content = fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {path:?}"))?;

        return Ok(Some(content.trim().to_string()));
    }

    Ok(None)
}
