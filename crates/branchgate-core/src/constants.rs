//! Shared constants for branchgate.

/// Environment variable holding the comma-separated it-branches.
pub const ENV_IT_BRANCHES: &str = "BRANCHGATE_ITBRANCHES";

/// Environment variable overriding the resolved branch name.
pub const ENV_CURRENT_BRANCH: &str = "BRANCHGATE_CURRENT_BRANCH";

/// Environment variable setting the repository discovery start directory.
pub const ENV_START_DIR: &str = "BRANCHGATE_START_DIR";

/// Environment variable toggling the process-wide branch cache.
pub const ENV_CACHE_BRANCH: &str = "BRANCHGATE_CACHE_BRANCH";

/// Environment variable read by `init_tracing` for log filtering.
pub const ENV_LOG: &str = "BRANCHGATE_LOG";

/// Default tracing filter when `BRANCHGATE_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "branchgate=info";

/// Project-level config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "branchgate.toml";

/// User-level config directory name under the home directory.
pub const USER_CONFIG_DIR: &str = ".branchgate";

/// User-level config file name inside [`USER_CONFIG_DIR`].
pub const USER_CONFIG_FILE: &str = "config.toml";

/// Separator between entries of a branch list.
pub const BRANCH_LIST_SEPARATOR: char = ',';

/// Whether the resolved branch is cached process-wide by default.
pub const DEFAULT_CACHE_BRANCH: bool = true;

/// Ref namespace prefix for local branches.
pub const LOCAL_BRANCH_PREFIX: &str = "refs/heads/";
