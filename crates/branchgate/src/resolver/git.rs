//! git2-backed branch source.

use std::path::{Path, PathBuf};

use branchgate_core::constants::LOCAL_BRANCH_PREFIX;
use branchgate_core::{BranchSource, GateConfig, ResolveError};
use git2::{ErrorCode as GitErrorCode, Repository};

/// Reads the active branch of the repository enclosing a start directory.
///
/// Discovery walks up from the start directory until it finds repository
/// metadata, the same way `git` itself does.
#[derive(Debug, Clone, Default)]
pub struct GitBranchSource {
    start_dir: Option<PathBuf>,
}

impl GitBranchSource {
    /// Discover from the process working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover from `dir`.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            start_dir: Some(dir.into()),
        }
    }

    /// Discover from the configured start directory, or the working directory.
    pub fn from_config(config: &GateConfig) -> Self {
        Self {
            start_dir: config.effective_start_dir().map(Path::to_path_buf),
        }
    }

    fn start_dir(&self) -> Result<PathBuf, ResolveError> {
        match &self.start_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().map_err(|e| ResolveError::RepositoryNotFound {
                start_dir: PathBuf::from("."),
                message: format!("cannot read working directory: {e}"),
            }),
        }
    }
}

impl BranchSource for GitBranchSource {
    fn current_branch(&self) -> Result<String, ResolveError> {
        let start_dir = self.start_dir()?;
        let repo = Repository::discover(&start_dir).map_err(|e| match e.code() {
            GitErrorCode::NotFound => ResolveError::RepositoryNotFound {
                start_dir: start_dir.clone(),
                message: e.message().to_string(),
            },
            _ => ResolveError::branch_read(e.message()),
        })?;
        let branch = head_branch_name(&repo)?;
        tracing::debug!(branch = %branch, path = %repo.path().display(), "read branch from repository");
        Ok(branch)
    }
}

/// Name of the local branch `HEAD` points at.
///
/// An unborn branch (no commits yet) is named from the symbolic target of
/// `HEAD`. A detached `HEAD` has no branch name.
pub fn head_branch_name(repo: &Repository) -> Result<String, ResolveError> {
    match repo.head() {
        Ok(head) => {
            let detached = repo
                .head_detached()
                .map_err(|e| ResolveError::branch_read(e.message()))?;
            if detached {
                return Err(ResolveError::DetachedHead);
            }
            if !head.is_branch() {
                return Err(ResolveError::branch_read(format!(
                    "HEAD does not point at a local branch: {}",
                    String::from_utf8_lossy(head.name_bytes())
                )));
            }
            head.shorthand()
                .map(str::to_owned)
                .ok_or_else(|| ResolveError::branch_read("branch name is not valid UTF-8"))
        }
        Err(e) if e.code() == GitErrorCode::UnbornBranch => unborn_branch_name(repo),
        Err(e) => Err(ResolveError::branch_read(e.message())),
    }
}

fn unborn_branch_name(repo: &Repository) -> Result<String, ResolveError> {
    let head = repo
        .find_reference("HEAD")
        .map_err(|e| ResolveError::branch_read(e.message()))?;
    let target = head
        .symbolic_target()
        .ok_or_else(|| ResolveError::branch_read("HEAD has no symbolic target"))?;
    target
        .strip_prefix(LOCAL_BRANCH_PREFIX)
        .map(str::to_owned)
        .ok_or_else(|| {
            ResolveError::branch_read(format!("HEAD does not point at a local branch: {target}"))
        })
}
