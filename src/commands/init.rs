use std::path::PathBuf;

use crate::core::error::{HookError, Result};
use crate::core::hook_name::HookName;
use crate::core::hooks_dir::HooksDirManager;
use crate::utils::config::{Config, HookConfiguration};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    Install,
    Remove,
}

/// What a single `init` run changed on disk.
#[derive(Debug)]
pub struct InitReport {
    pub mode: InitMode,
    pub backups: Vec<PathBuf>,
    pub installed: Vec<HookName>,
    pub removed: Vec<PathBuf>,
}

impl InitReport {
    fn new(mode: InitMode) -> Self {
        Self {
            mode,
            backups: Vec::new(),
            installed: Vec::new(),
            removed: Vec::new(),
        }
    }
}

/// Runs one initialization against the hooks directory owned by `manager`.
///
/// Without configured hooks every known hook is backed up and deleted.
/// Otherwise the configured hooks are validated and written in order; the
/// first write failure aborts the run and leaves later hooks untouched.
pub fn run(manager: &HooksDirManager, config: &Config) -> Result<InitReport> {
    match &config.hooks {
        HookConfiguration::Absent => remove_hooks(manager),
        HookConfiguration::Present(scripts) => {
            if !config.always_override {
                return Err(HookError::OverrideDisabled);
            }

            let hooks = manager.check_hook_names(scripts)?;
            manager.ensure_hooks_dir()?;

            let mut report = InitReport::new(InitMode::Install);
            let existing = manager.existing_hook_files()?;
            report.backups = manager.backup_existing_hooks(&existing)?;

            for (name, script) in hooks {
                manager.create_hook(name, script, config.always_override)?;
                report.installed.push(name);
            }

            log::info!("Installed {} hook(s)", report.installed.len());
            Ok(report)
        }
    }
}

fn remove_hooks(manager: &HooksDirManager) -> Result<InitReport> {
    let mut report = InitReport::new(InitMode::Remove);

    let existing = manager.existing_hook_files()?;
    report.backups = manager.backup_existing_hooks(&existing)?;

    for file in existing {
        manager.remove_hook(&file)?;
        report.removed.push(file);
    }

    log::info!("Removed {} hook(s)", report.removed.len());
    Ok(report)
}

pub fn print_report(manager: &HooksDirManager, report: &InitReport) {
    for backup in &report.backups {
        println!("  ✓ Backed up to {}", backup.display());
    }

    match report.mode {
        InitMode::Install => {
            for name in &report.installed {
                println!("  ✓ Installed {}", manager.hook_path(*name).display());
            }
            println!("✓ {} hook(s) installed", report.installed.len());
        }
        InitMode::Remove => {
            for file in &report.removed {
                println!("  ✓ Removed {}", file.display());
            }
            if report.removed.is_empty() {
                println!("No hooks configured and none installed. Nothing to do.");
            } else {
                println!("✓ {} hook(s) removed", report.removed.len());
            }
        }
    }
}
