use anyhow::Result;
use std::path::Path;

use crate::utils::config::{Config, HookConfiguration};

pub fn show_config(config_path: &Path, config: &Config) -> Result<()> {
    println!("📋 Configuration ({})\n", config_path.display());
    println!("  Always override: {}", config.always_override);

    match &config.hooks {
        HookConfiguration::Absent => {
            println!("  Hooks:           none (init removes installed hooks)");
        }
        HookConfiguration::Present(scripts) if scripts.is_empty() => {
            println!("  Hooks:           none (init only backs up installed hooks)");
        }
        HookConfiguration::Present(scripts) => {
            println!("  Hooks:           {}", scripts.len());
            for (name, _) in scripts.iter() {
                println!("    - {}", name);
            }
        }
    }

    println!();
    println!("{}", serde_json::to_string_pretty(config)?);

    Ok(())
}
