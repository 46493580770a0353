//! Errors raised while managing the hooks directory.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::hook_name::HookName;

#[derive(Error, Debug)]
pub enum HookError {
    #[error("Unrecognized hook name(s): {}", .0.join(", "))]
    UnknownHookNames(Vec<String>),

    #[error("`always_override = false` is not supported yet. Please, set this parameter to true")]
    OverrideDisabled,

    #[error("Hook `{name}` already exists and overriding is disabled")]
    HookExists { name: HookName },

    #[error("Cannot read hooks directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot create hooks directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot back up hook {}: {source}", .path.display())]
    Backup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot write hook `{name}`: {source}")]
    WriteHook {
        name: HookName,
        #[source]
        source: io::Error,
    },

    #[error("Cannot delete hook {}: {source}", .path.display())]
    DeleteHook {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl HookError {
    /// True for errors caused by the supplied configuration rather than the filesystem.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            HookError::UnknownHookNames(_) | HookError::OverrideDisabled | HookError::HookExists { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, HookError>;
