//! Filesystem operations on a repository's hooks directory.
//!
//! Every hook file is copied to `<name>.bkp` before it is overwritten or
//! deleted, so the previous script can always be recovered by hand.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::error::{HookError, Result};
use crate::core::hook_name::{HookName, UnknownHookName};
use crate::utils::config::HookScripts;

pub const BACKUP_SUFFIX: &str = ".bkp";

pub struct HooksDirManager {
    hooks_dir: PathBuf,
}

impl HooksDirManager {
    pub fn new(hooks_dir: impl Into<PathBuf>) -> Self {
        Self {
            hooks_dir: hooks_dir.into(),
        }
    }

    pub fn hooks_dir(&self) -> &Path {
        &self.hooks_dir
    }

    pub fn hook_path(&self, name: HookName) -> PathBuf {
        self.hooks_dir.join(name.as_str())
    }

    /// Backup location for a hook file: same directory, `.bkp` appended.
    pub fn backup_path(hook_file: &Path) -> PathBuf {
        let mut name = hook_file.as_os_str().to_owned();
        name.push(BACKUP_SUFFIX);
        PathBuf::from(name)
    }

    /// Files in the hooks directory named after a known hook, sorted by path.
    ///
    /// A missing directory has no hooks; any other read failure is an error.
    pub fn existing_hook_files(&self) -> Result<Vec<PathBuf>> {
        let read_err = |source: io::Error| HookError::ReadDir {
            path: self.hooks_dir.clone(),
            source,
        };

        let entries = match fs::read_dir(&self.hooks_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("Hooks directory {} does not exist", self.hooks_dir.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(read_err(e)),
        };

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(read_err)?;
            let is_known = entry
                .file_name()
                .to_str()
                .map(|name| name.parse::<HookName>().is_ok())
                .unwrap_or(false);
            if !is_known {
                continue;
            }
            if entry.file_type().map_err(read_err)?.is_dir() {
                log::warn!("Skipping directory named like a hook: {}", entry.path().display());
                continue;
            }
            files.push(entry.path());
        }
        files.sort();

        log::debug!("Found {} existing hook(s) in {}", files.len(), self.hooks_dir.display());
        Ok(files)
    }

    /// Creates the hooks directory and any missing parents.
    pub fn ensure_hooks_dir(&self) -> Result<()> {
        if self.hooks_dir.is_dir() {
            return Ok(());
        }
        fs::create_dir_all(&self.hooks_dir).map_err(|source| HookError::CreateDir {
            path: self.hooks_dir.clone(),
            source,
        })?;
        log::info!("Created hooks directory {}", self.hooks_dir.display());
        Ok(())
    }

    /// Checks every configured name against the known hook set.
    ///
    /// All unknown names are reported together, in configuration order.
    pub fn check_hook_names<'a>(&self, scripts: &'a HookScripts) -> Result<Vec<(HookName, &'a str)>> {
        let mut valid = Vec::with_capacity(scripts.len());
        let mut unknown = Vec::new();

        for (name, script) in scripts.iter() {
            match name.parse::<HookName>() {
                Ok(hook) => valid.push((hook, script)),
                Err(UnknownHookName(name)) => unknown.push(name),
            }
        }

        if !unknown.is_empty() {
            return Err(HookError::UnknownHookNames(unknown));
        }
        Ok(valid)
    }

    /// Copies each existing file to its backup path, replacing older backups.
    ///
    /// Stops at the first failure; backups already written are kept.
    pub fn backup_existing_hooks(&self, files: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut backups = Vec::with_capacity(files.len());

        for file in files {
            if !file.is_file() {
                continue;
            }
            let backup = Self::backup_path(file);
            fs::copy(file, &backup).map_err(|source| HookError::Backup {
                path: file.clone(),
                source,
            })?;
            log::info!("Backed up {} to {}", file.display(), backup.display());
            backups.push(backup);
        }

        Ok(backups)
    }

    /// Writes `content` as the hook script and makes it executable.
    ///
    /// With `allow_override` unset an existing hook is an error; there is no
    /// keep-existing mode.
    pub fn create_hook(&self, name: HookName, content: &str, allow_override: bool) -> Result<PathBuf> {
        let path = self.hook_path(name);

        let existing = fs::symlink_metadata(&path).ok();
        if !allow_override && existing.is_some() {
            return Err(HookError::HookExists { name });
        }

        let write_err = |source: io::Error| HookError::WriteHook { name, source };

        // Replace a symlinked hook with a regular file; never write through the link.
        if existing.is_some_and(|meta| meta.file_type().is_symlink()) {
            fs::remove_file(&path).map_err(write_err)?;
            log::debug!("Replacing symlinked hook {}", path.display());
        }
        fs::write(&path, content).map_err(write_err)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path).map_err(write_err)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&path, perms).map_err(write_err)?;
        }

        log::info!("Wrote hook {}", path.display());
        Ok(path)
    }

    pub fn remove_hook(&self, file: &Path) -> Result<()> {
        fs::remove_file(file).map_err(|source| HookError::DeleteHook {
            path: file.to_path_buf(),
            source,
        })?;
        log::info!("Removed hook {}", file.display());
        Ok(())
    }
}
