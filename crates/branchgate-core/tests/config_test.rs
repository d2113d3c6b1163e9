//! Tests for the branchgate configuration system.

use std::path::PathBuf;
use std::sync::Mutex;

use branchgate_core::config::{ConfigOverrides, GateConfig};
use branchgate_core::errors::ConfigError;
use branchgate_core::types::BranchSet;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper: create a temporary directory.
fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all BRANCHGATE_ env vars and point HOME at an empty directory so the
/// developer's own user config cannot leak in.
fn isolate_env(home: &std::path::Path) {
    for key in [
        "BRANCHGATE_ITBRANCHES",
        "BRANCHGATE_CURRENT_BRANCH",
        "BRANCHGATE_START_DIR",
        "BRANCHGATE_CACHE_BRANCH",
        "USERPROFILE",
    ] {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", home);
}

fn names(set: &BranchSet) -> Vec<&str> {
    set.iter().map(String::as_str).collect()
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::fs::create_dir_all(home.path().join(".branchgate")).unwrap();
    std::fs::write(
        home.path().join(".branchgate/config.toml"),
        r#"
[gate]
it_branches = ["user-branch"]
cache_branch = false
current_branch = "from-user"
"#,
    )
    .unwrap();

    let project = tempdir();
    std::fs::write(
        project.path().join("branchgate.toml"),
        r#"
[gate]
it_branches = ["main", "release"]
current_branch = "from-project"
"#,
    )
    .unwrap();

    std::env::set_var("BRANCHGATE_CURRENT_BRANCH", "from-env");

    let overrides = ConfigOverrides {
        it_branches: Some(BranchSet::parse("override")),
        ..Default::default()
    };
    let config = GateConfig::load(project.path(), Some(&overrides)).unwrap();

    // Overrides beat the project file
    assert_eq!(names(&config.it_branches), vec!["override"]);
    // Env beats project and user
    assert_eq!(config.effective_current_branch(), Some("from-env"));
    // User value survives where nobody above sets it
    assert_eq!(config.cache_branch, Some(false));

    std::env::remove_var("BRANCHGATE_CURRENT_BRANCH");
}

#[test]
fn test_load_missing_files_fallback() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let project = tempdir();
    let config = GateConfig::load(project.path(), None).unwrap();

    assert!(config.it_branches.is_empty());
    assert_eq!(config.effective_current_branch(), None);
    assert_eq!(config.effective_start_dir(), None);
    assert!(config.effective_cache_branch());
}

#[test]
fn test_env_it_branches_parsed_from_comma_list() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::env::set_var("BRANCHGATE_ITBRANCHES", "release,hotfix");
    let config = GateConfig::from_env();
    assert_eq!(names(&config.it_branches), vec!["hotfix", "release"]);

    std::env::remove_var("BRANCHGATE_ITBRANCHES");
    let config = GateConfig::from_env();
    assert!(config.it_branches.is_empty());
}

#[test]
fn test_env_empty_it_branches_clears_project_list() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let project = tempdir();
    std::fs::write(
        project.path().join("branchgate.toml"),
        "[gate]\nit_branches = [\"main\"]\n",
    )
    .unwrap();
    std::env::set_var("BRANCHGATE_ITBRANCHES", "");

    let config = GateConfig::load(project.path(), None).unwrap();
    assert!(config.it_branches.is_empty());

    std::env::remove_var("BRANCHGATE_ITBRANCHES");
}

#[test]
fn test_empty_current_branch_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::env::set_var("BRANCHGATE_CURRENT_BRANCH", "");
    let config = GateConfig::from_env();
    assert_eq!(config.current_branch.as_deref(), Some(""));
    assert_eq!(config.effective_current_branch(), None);

    std::env::remove_var("BRANCHGATE_CURRENT_BRANCH");
}

#[test]
fn test_invalid_cache_flag_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::env::set_var("BRANCHGATE_CACHE_BRANCH", "sometimes");
    let config = GateConfig::from_env();
    assert_eq!(config.cache_branch, None);
    assert!(config.effective_cache_branch());

    std::env::set_var("BRANCHGATE_CACHE_BRANCH", "false");
    let config = GateConfig::from_env();
    assert!(!config.effective_cache_branch());

    std::env::remove_var("BRANCHGATE_CACHE_BRANCH");
}

#[test]
fn test_invalid_toml_syntax() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let project = tempdir();
    std::fs::write(project.path().join("branchgate.toml"), "this is not valid toml {{{{").unwrap();

    match GateConfig::load(project.path(), None) {
        Err(ConfigError::ParseError { .. }) => {}
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn test_invalid_user_config_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::fs::create_dir_all(home.path().join(".branchgate")).unwrap();
    std::fs::write(home.path().join(".branchgate/config.toml"), "[gate\n").unwrap();

    let project = tempdir();
    let result = GateConfig::load(project.path(), None);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_start_dir_must_be_a_directory() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let project = tempdir();
    let overrides = ConfigOverrides {
        start_dir: Some(project.path().join("does-not-exist")),
        ..Default::default()
    };
    match GateConfig::load(project.path(), Some(&overrides)) {
        Err(ConfigError::ValidationFailed { field, .. }) => assert_eq!(field, "gate.start_dir"),
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }
}

#[test]
fn test_relative_start_dir_resolved_against_config_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let project = tempdir();
    std::fs::create_dir(project.path().join("checkout")).unwrap();
    std::fs::write(
        project.path().join("branchgate.toml"),
        "[gate]\nstart_dir = \"checkout\"\n",
    )
    .unwrap();

    let config = GateConfig::load(project.path(), None).unwrap();
    assert_eq!(
        config.start_dir,
        Some(PathBuf::from(project.path()).join("checkout"))
    );
}

#[test]
fn test_it_branches_accepts_string_or_array() {
    let from_string = GateConfig::from_toml("[gate]\nit_branches = \"main, release,,\"\n").unwrap();
    let from_array = GateConfig::from_toml("[gate]\nit_branches = [\"release\", \"main\"]\n").unwrap();
    assert_eq!(from_string.it_branches, from_array.it_branches);
    assert_eq!(names(&from_array.it_branches), vec!["main", "release"]);
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = GateConfig::from_toml(
        r#"
[gate]
current_branch = "main"
future_option = 3

[other]
x = 1
"#,
    )
    .unwrap();
    assert_eq!(config.effective_current_branch(), Some("main"));
}

#[test]
fn test_toml_round_trip() {
    let config = GateConfig::default()
        .with_it_branches(["main", "release"])
        .with_current_branch("feature-x");
    let text = config.to_toml().unwrap();
    assert!(text.contains("[gate]"));
    assert_eq!(GateConfig::from_toml(&text).unwrap(), config);
}

#[test]
fn test_lenient_load_drops_only_invalid_start_dir() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let project = tempdir();
    std::fs::write(
        project.path().join("branchgate.toml"),
        "[gate]\nit_branches = [\"main\"]\nstart_dir = \"no-such-dir\"\n",
    )
    .unwrap();

    assert!(GateConfig::load(project.path(), None).is_err());

    let (config, errors) = GateConfig::load_lenient(project.path(), None);
    assert_eq!(names(&config.it_branches), vec!["main"]);
    assert_eq!(config.start_dir, None);
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], ConfigError::ValidationFailed { .. }));
}

#[test]
fn test_lenient_load_skips_broken_user_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::fs::create_dir_all(home.path().join(".branchgate")).unwrap();
    std::fs::write(home.path().join(".branchgate/config.toml"), "[gate\n").unwrap();

    let project = tempdir();
    std::fs::write(
        project.path().join("branchgate.toml"),
        "[gate]\nit_branches = \"main,release\"\n",
    )
    .unwrap();
    std::env::set_var("BRANCHGATE_CURRENT_BRANCH", "release");

    let (config, errors) = GateConfig::load_lenient(project.path(), None);
    assert_eq!(names(&config.it_branches), vec!["main", "release"]);
    assert_eq!(config.effective_current_branch(), Some("release"));
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], ConfigError::ParseError { .. }));

    std::env::remove_var("BRANCHGATE_CURRENT_BRANCH");
}

#[test]
fn test_lenient_load_matches_strict_load_when_valid() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let project = tempdir();
    std::fs::write(
        project.path().join("branchgate.toml"),
        "[gate]\nit_branches = [\"main\"]\ncache_branch = false\n",
    )
    .unwrap();

    let strict = GateConfig::load(project.path(), None).unwrap();
    let (lenient, errors) = GateConfig::load_lenient(project.path(), None);
    assert!(errors.is_empty());
    assert_eq!(strict, lenient);
}
