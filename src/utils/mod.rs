pub mod git;

use anyhow::{anyhow, Result};
use fern::colors::{Color, ColoredLevelConfig};
use log::{Level, LevelFilter};

pub fn set_hook() {
    // a panic is reported like any other fatal error, then exit 1
    std::panic::set_hook(Box::new(|panic_info| {
        let message = if let Some(message) = panic_info.payload().downcast_ref::<String>() {
            message.clone()
        } else if let Some(message) = panic_info.payload().downcast_ref::<&str>() {
            (*message).to_string()
        } else {
            format!("{panic_info:?}")
        };

        log::error!("{message}");

        #[cfg(debug_assertions)]
        log::debug!("{panic_info}");

        std::process::exit(1);
    }));
}

/// Diagnostics go to stderr, stdout only carries command output.
pub fn logs(verbose: bool) {
    let colors = ColoredLevelConfig::new()
        .info(Color::BrightCyan)
        .error(Color::BrightRed)
        .warn(Color::BrightYellow)
        .debug(Color::BrightWhite);

    fern::Dispatch::new()
        .format(move |out, message, record| match record.level() {
            Level::Debug => out.finish(format_args!(
                "{} [{}]: {}",
                colors.color(Level::Debug).to_string().to_lowercase(),
                record.target(),
                message
            )),

            level => out.finish(format_args!(
                "{}: {}",
                colors.color(level).to_string().to_lowercase(),
                message
            )),
        })
        .level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .chain(std::io::stderr())
        .apply()
        .ok();
}

/// Name of the user running the process.
///
/// Looked up in the user database first, then `USER` and `USERNAME` (windows).
pub fn current_username() -> Result<String> {
    if let Some(user) = os_username() {
        return Ok(user);
    }

    ["USER", "USERNAME"]
        .iter()
        .find_map(|key| std::env::var(key).ok().filter(|user| !user.is_empty()))
        .ok_or_else(|| {
            anyhow!("No user entry for the current uid and neither `USER` nor `USERNAME` is set")
        })
}

#[cfg(unix)]
fn os_username() -> Option<String> {
    use nix::unistd::{getuid, User};

    let uid = getuid();

    match User::from_uid(uid) {
        Ok(Some(user)) => Some(user.name),
        Ok(None) => {
            log::debug!("No user entry for uid {uid}");
            None
        }
        Err(error) => {
            log::debug!("Failed to look up uid {uid}: {error}");
            None
        }
    }
}

#[cfg(not(unix))]
fn os_username() -> Option<String> {
    None
}

#[cfg(test)]
mod test {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_username_from_user_database() {
        let user = os_username().unwrap();

        assert!(!user.is_empty());
        assert_eq!(current_username().unwrap(), user);
    }
}

