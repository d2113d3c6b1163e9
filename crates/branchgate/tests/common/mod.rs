//! Shared helpers for branchgate integration tests.
#![allow(dead_code)]

use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use branchgate::{BranchSource, ResolveError};
use git2::{Repository, Signature};
use tracing_subscriber::fmt::MakeWriter;

/// Branch source answering from a fixed result and counting calls.
pub struct FakeSource {
    result: Result<String, ResolveError>,
    calls: AtomicUsize,
}

impl FakeSource {
    pub fn on(branch: &str) -> Self {
        Self {
            result: Ok(branch.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: ResolveError) -> Self {
        Self {
            result: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl BranchSource for FakeSource {
    fn current_branch(&self) -> Result<String, ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

pub fn not_found() -> ResolveError {
    ResolveError::RepositoryNotFound {
        start_dir: "/nowhere".into(),
        message: "could not find repository".into(),
    }
}

/// Initialise a repository whose unborn HEAD points at `branch`.
pub fn init_repo(dir: &Path, branch: &str) -> Repository {
    let repo = Repository::init(dir).unwrap();
    repo.set_head(&format!("refs/heads/{branch}")).unwrap();
    repo
}

/// Create an empty commit on HEAD and return its id.
pub fn commit(repo: &Repository, message: &str) -> git2::Oid {
    let sig = Signature::now("branchgate", "branchgate@example.com").unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let parents = match repo.head() {
        Ok(head) => vec![head.peel_to_commit().unwrap()],
        Err(_) => Vec::new(),
    };
    let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .unwrap()
}

/// In-memory log sink for asserting on emitted events.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with every tracing event routed into the returned sink.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs.contents())
}
