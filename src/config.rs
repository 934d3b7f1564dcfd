#[cfg(not(windows))]
pub const EXEC_NAME: &str = "promu";
#[cfg(windows)]
pub const EXEC_NAME: &str = "promu.exe";

pub const GIT: &str = "git";

/// Branch and revision of a project that is not a git checkout.
pub const NON_GIT: &str = "non-git";

/// Workspace root, stripped from the working directory of non-git projects.
pub const WORKSPACE_ROOT_ENV: &str = "GOPATH";

pub const VERSION_FILES: &[&str] = &["VERSION", "version/VERSION"];
