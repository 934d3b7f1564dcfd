use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::config::GIT;

/// Version control queries needed to describe a project.
#[async_trait]
pub trait RevisionSource {
    /// Top-level directory of the checkout, `None` outside of one.
    async fn toplevel(&self) -> Option<PathBuf>;

    async fn remote_url(&self) -> String;

    async fn branch(&self) -> String;

    async fn revision(&self) -> String;
}

/// Shells out to the `git` binary on `PATH`.
#[derive(Debug, Clone)]
pub struct GitCli {
    dir: Option<PathBuf>,
}

impl GitCli {
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }

    async fn output(&self, args: &[&str]) -> Option<String> {
        let mut command = Command::new(GIT);

        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(dir) = &self.dir {
            command.current_dir(dir);
        }

        let output = match command.output().await {
            Ok(output) => output,
            Err(error) => {
                log::debug!("Failed to run `{GIT} {}`: {error}", args.join(" "));
                return None;
            }
        };

        if !output.status.success() {
            log::debug!(
                "`{GIT} {}` exited with {}: {}",
                args.join(" "),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return None;
        }

        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    // best effort, a failed query is reported as an empty string
    async fn query(&self, args: &[&str]) -> String {
        self.output(args).await.unwrap_or_default()
    }
}

#[async_trait]
impl RevisionSource for GitCli {
    async fn toplevel(&self) -> Option<PathBuf> {
        self.output(&["rev-parse", "--show-toplevel"])
            .await
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
    }

    async fn remote_url(&self) -> String {
        self.query(&["config", "--get", "remote.origin.url"]).await
    }

    async fn branch(&self) -> String {
        self.query(&["rev-parse", "--abbrev-ref", "HEAD"]).await
    }

    async fn revision(&self) -> String {
        self.query(&["rev-parse", "HEAD"]).await
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn test_query_missing_dir_is_empty() {
        let git = GitCli::new(Some(PathBuf::from("/this/path/does/not/exist")));

        assert_eq!(git.revision().await, "");
        assert_eq!(git.branch().await, "");
        assert!(git.toplevel().await.is_none());
    }
}
