use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

mod commands;
mod core;
mod utils;

use crate::core::git::GitRepo;
use crate::core::hooks_dir::HooksDirManager;
use crate::utils::config::{parse_hook_arg, Config};

#[derive(Parser)]
#[command(name = "githooks")]
#[command(version)]
#[command(about = "Install, back up and remove git hooks from a project configuration", long_about = None)]
struct Cli {
    /// Print debug logs
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Only print warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RepoArgs {
    /// Any path inside the repository (defaults to the current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,
    /// Manage this directory instead of the repository's `.git/hooks`
    #[arg(long)]
    hooks_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Install the configured hooks, or remove installed hooks when none are configured
    Init {
        #[command(flatten)]
        repo: RepoArgs,
        /// Config file (defaults to `.githooks.json` at the repository root)
        #[arg(short, long, env = "GITHOOKS_CONFIG")]
        config: Option<PathBuf>,
        /// Hook script given inline; replaces the hooks from the config file
        #[arg(long = "hook", value_name = "NAME=SCRIPT", value_parser = parse_hook_arg)]
        hooks: Vec<(String, String)>,
        /// Allow existing hooks to be overwritten
        #[arg(long)]
        always_override: bool,
    },
    /// List installed hooks and their backups
    List {
        #[command(flatten)]
        repo: RepoArgs,
    },
    /// Show the effective configuration
    Config {
        #[command(flatten)]
        repo: RepoArgs,
        #[arg(short, long, env = "GITHOOKS_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Repository root and hooks directory a command operates on.
struct Target {
    root: PathBuf,
    hooks_dir: PathBuf,
}

fn resolve_target(repo: RepoArgs) -> Result<Target> {
    let path = match repo.path {
        Some(path) => path,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };

    if let Some(hooks_dir) = repo.hooks_dir {
        return Ok(Target {
            root: path,
            hooks_dir,
        });
    }

    let git = GitRepo::discover(&path).with_context(|| {
        format!(
            "Cannot open git repository at {}. Run 'git init' first or pass --hooks-dir.",
            path.display()
        )
    })?;
    Ok(Target {
        root: git.workdir(),
        hooks_dir: git.hooks_path(),
    })
}

fn load_config(target: &Target, config: Option<PathBuf>) -> Result<(PathBuf, Config)> {
    let config_path = config.unwrap_or_else(|| Config::default_path(&target.root));
    let config = Config::load(&config_path)
        .with_context(|| format!("Cannot load config {}", config_path.display()))?;
    Ok((config_path, config))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    utils::logger::init_logger(utils::logger::level_for(cli.verbose, cli.quiet));
    log::debug!("githooks started: {:?}", std::env::args().collect::<Vec<_>>());

    match cli.command {
        Commands::Init {
            repo,
            config,
            hooks,
            always_override,
        } => {
            let target = resolve_target(repo)?;
            let (config_path, mut config) = load_config(&target, config)?;
            config.apply_overrides(hooks, always_override)?;
            log::debug!("Using config {}", config_path.display());

            let manager = HooksDirManager::new(target.hooks_dir);
            println!("Initializing git hooks in {}...", manager.hooks_dir().display());
            let report = commands::init::run(&manager, &config).map_err(|e| {
                if e.is_configuration() {
                    log::error!("Check the hook configuration in {}", config_path.display());
                }
                e
            })?;
            commands::init::print_report(&manager, &report);
        }

        Commands::List { repo } => {
            let target = resolve_target(repo)?;
            let manager = HooksDirManager::new(target.hooks_dir);
            commands::list::list_hooks(&manager)?;
        }

        Commands::Config { repo, config } => {
            let target = resolve_target(repo)?;
            let (config_path, config) = load_config(&target, config)?;
            commands::config_cmd::show_config(&config_path, &config)?;
        }

        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "githooks", &mut std::io::stdout());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_inline_hooks_in_order() {
        let cli = Cli::try_parse_from([
            "githooks",
            "init",
            "--hooks-dir",
            "/tmp/hooks",
            "--hook",
            "pre-push=cargo test",
            "--hook",
            "pre-commit=cargo fmt --check",
            "--always-override",
        ])
        .unwrap();

        let Commands::Init {
            repo,
            hooks,
            always_override,
            ..
        } = cli.command
        else {
            panic!("expected init");
        };
        assert_eq!(repo.hooks_dir, Some(PathBuf::from("/tmp/hooks")));
        assert!(always_override);
        assert_eq!(
            hooks,
            vec![
                ("pre-push".to_string(), "cargo test".to_string()),
                ("pre-commit".to_string(), "cargo fmt --check".to_string()),
            ]
        );
    }

    #[test]
    fn rejects_malformed_inline_hook() {
        assert!(Cli::try_parse_from(["githooks", "init", "--hook", "pre-commit"]).is_err());
    }

    #[test]
    fn discovery_failure_keeps_git_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        // Deliberately broken `.git` file: points at a git dir that does not exist.
        std::fs::write(tmp.path().join(".git"), "gitdir: missing-dir\n").unwrap();

        let err = resolve_target(RepoArgs {
            path: Some(tmp.path().to_path_buf()),
            hooks_dir: None,
        })
        .err()
        .unwrap();

        assert!(err.to_string().starts_with("Cannot open git repository at"));
        assert!(err.chain().count() > 1);
        assert!(err.root_cause().downcast_ref::<git2::Error>().is_some());
    }

    #[test]
    fn explicit_hooks_dir_skips_discovery() {
        let target = resolve_target(RepoArgs {
            path: Some(PathBuf::from("/not/a/repo")),
            hooks_dir: Some(PathBuf::from("/tmp/hooks")),
        })
        .unwrap();
        assert_eq!(target.root, PathBuf::from("/not/a/repo"));
        assert_eq!(target.hooks_dir, PathBuf::from("/tmp/hooks"));
    }

    #[test]
    fn discovers_hooks_dir_of_repository() {
        let tmp = tempfile::TempDir::new().unwrap();
        git2::Repository::init(tmp.path()).unwrap();

        let target = resolve_target(RepoArgs {
            path: Some(tmp.path().to_path_buf()),
            hooks_dir: None,
        })
        .unwrap();
        assert!(target.hooks_dir.ends_with(".git/hooks"));
    }
}
