use anyhow::Result;
use std::path::PathBuf;

use crate::core::hooks_dir::HooksDirManager;

#[derive(Debug, PartialEq, Eq)]
pub struct HookStatus {
    pub name: String,
    pub backup: Option<PathBuf>,
}

/// Known hooks present in the hooks directory, with their backup if any.
pub fn hook_statuses(manager: &HooksDirManager) -> Result<Vec<HookStatus>> {
    let statuses = manager
        .existing_hook_files()?
        .into_iter()
        .map(|path| {
            let backup = HooksDirManager::backup_path(&path);
            HookStatus {
                name: path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                backup: backup.is_file().then_some(backup),
            }
        })
        .collect();
    Ok(statuses)
}

pub fn list_hooks(manager: &HooksDirManager) -> Result<()> {
    let statuses = hook_statuses(manager)?;

    println!("Hooks directory: {}\n", manager.hooks_dir().display());

    if statuses.is_empty() {
        println!("No hooks installed.");
        return Ok(());
    }

    for status in &statuses {
        match &status.backup {
            Some(backup) => println!("  ✓ {:<22} (backup: {})", status.name, backup.display()),
            None => println!("  ✓ {}", status.name),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reports_hooks_and_backups() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("hooks");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("pre-commit"), "a").unwrap();
        fs::write(dir.join("pre-commit.bkp"), "old").unwrap();
        fs::write(dir.join("pre-push"), "b").unwrap();
        let manager = HooksDirManager::new(&dir);

        let statuses = hook_statuses(&manager).unwrap();

        assert_eq!(
            statuses,
            vec![
                HookStatus {
                    name: "pre-commit".into(),
                    backup: Some(dir.join("pre-commit.bkp")),
                },
                HookStatus {
                    name: "pre-push".into(),
                    backup: None,
                },
            ]
        );
    }

    #[test]
    fn empty_when_directory_missing() {
        let tmp = TempDir::new().unwrap();
        let manager = HooksDirManager::new(tmp.path().join("hooks"));
        assert!(hook_statuses(&manager).unwrap().is_empty());
    }
}
