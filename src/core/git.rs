use git2::Repository;
use std::path::{Path, PathBuf};

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Opens the repository containing `path`, searching parent directories.
    pub fn discover(path: &Path) -> anyhow::Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(Self { repo })
    }

    /// `<common-dir>/hooks`, shared by the main checkout and all linked
    /// worktrees. The directory may not exist yet.
    pub fn hooks_path(&self) -> PathBuf {
        self.repo.commondir().join("hooks")
    }

    /// Root of the working tree, or the git dir itself for bare repositories.
    pub fn workdir(&self) -> PathBuf {
        self.repo
            .workdir()
            .unwrap_or_else(|| self.repo.path())
            .to_path_buf()
    }
}
