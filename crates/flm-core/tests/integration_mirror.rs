//! Integration tests: a local list server, a temp store dir, and full mirror runs.

mod common;

use common::list_server::{self, Route};
use flm_core::catalog::{FilterGroup, Source};
use flm_core::fetch::{FetchError, Fetcher};
use flm_core::mirror::{self, Outcome, RunSummary, SyncOptions};
use flm_core::retry::RetryPolicy;
use flm_core::store::Store;
use std::time::Duration;
use tempfile::tempdir;

fn fast_fetcher() -> Fetcher {
    Fetcher::default().with_policy(RetryPolicy {
        max_attempts: 2,
        base_delay: Duration::from_millis(1),
        max_delay: Duration::from_millis(1),
        ..RetryPolicy::default()
    })
}

fn sync(sources: &[Source], store: &Store) -> anyhow::Result<RunSummary> {
    mirror::run(sources, &fast_fetcher(), store, SyncOptions::default())
}

#[test]
fn fetch_appends_cache_busting_parameter() {
    let server = list_server::start(vec![("a.txt", Route::ok("a\n"))]);
    let body = fast_fetcher().fetch(&server.url("a.txt")).unwrap();
    assert_eq!(body, "a\n");
    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].starts_with("/a.txt?t="), "{}", requests[0]);
}

#[test]
fn fetch_status_error_is_not_retried() {
    let server = list_server::start(vec![("broken.txt", Route::status(500))]);
    let err = fast_fetcher().fetch(&server.url("broken.txt")).unwrap_err();
    assert!(matches!(err, FetchError::Status { code: 500, .. }));
    assert_eq!(server.requests().len(), 1);
}

#[test]
fn fetch_transport_error_after_retries() {
    let err = fast_fetcher().fetch(&list_server::unreachable_url()).unwrap_err();
    match err {
        FetchError::Transport { attempts, .. } => assert_eq!(attempts, 2),
        other => panic!("expected transport error, got {other}"),
    }
}

#[test]
fn new_list_is_written_and_listed() {
    let fetched = "[v1]\n!2024-01-01\na\nb\n";
    let server = list_server::start(vec![("one.txt", Route::ok(fetched))]);
    let source = Source::new(&server.url("one.txt"), "One", FilterGroup::Default, true);
    let dir = tempdir().unwrap();
    let store = Store::open(dir.path()).unwrap();

    let summary = sync(&[source.clone()], &store).unwrap();

    assert_eq!(summary.updated(), 1);
    assert_eq!(std::fs::read_to_string(store.list_path(&source.id)).unwrap(), fetched);
    let manifest = std::fs::read_to_string(store.manifest_path()).unwrap();
    assert!(manifest.contains(&format!("\"file_name\": \"{}.txt\"", source.id)));
    assert!(manifest.contains("\"group\": \"default\""));
}

#[test]
fn equivalent_list_keeps_file_untouched() {
    let server =
        list_server::start(vec![("two.txt", Route::ok("[v2]\n!2024-02-02\na\nb\n"))]);
    let source = Source::new(&server.url("two.txt"), "Two", FilterGroup::Ads, false);
    let dir = tempdir().unwrap();
    let store = Store::open(dir.path()).unwrap();
    store.write(&source.id, "b\na").unwrap();
    let mtime = |s: &Store| {
        std::fs::metadata(s.list_path(&source.id))
            .unwrap()
            .modified()
            .unwrap()
    };
    let before = mtime(&store);

    let summary = sync(&[source.clone()], &store).unwrap();

    assert_eq!(summary.unchanged(), 1);
    assert_eq!(summary.manifest.len(), 1);
    assert_eq!(store.read(&source.id).unwrap(), "b\na");
    let after = mtime(&store);
    assert_eq!(before, after);
}

#[test]
fn failed_list_is_skipped_and_run_continues() {
    let server = list_server::start(vec![
        ("bad.txt", Route::status(500)),
        ("good.txt", Route::ok("||ads.example^\n")),
    ]);
    let bad = Source::new(&server.url("bad.txt"), "Bad", FilterGroup::Privacy, false);
    let good = Source::new(&server.url("good.txt"), "Good", FilterGroup::Social, false);
    let dir = tempdir().unwrap();
    let store = Store::open(dir.path()).unwrap();

    let summary = sync(&[bad.clone(), good.clone()], &store).unwrap();

    assert_eq!(summary.failed(), 1);
    assert_eq!(summary.updated(), 1);
    assert!(matches!(
        summary.reports[0].outcome,
        Outcome::Failed(FetchError::Status { code: 500, .. })
    ));
    assert!(!store.list_path(&bad.id).exists());
    assert_eq!(summary.manifest.len(), 1);
    assert_eq!(summary.manifest.entries()[0].title, "Good");
    let manifest = std::fs::read_to_string(store.manifest_path()).unwrap();
    assert!(!manifest.contains("Bad"));
}

#[test]
fn manifest_is_byte_identical_across_runs() {
    let server = list_server::start(vec![
        ("x.txt", Route::ok("[x]\n!t1\nx\n")),
        ("y.txt", Route::ok("y\n")),
    ]);
    let sources = vec![
        Source::new(
            &server.url("x.txt"),
            "CHN: AdGuard Chinese (中文)",
            FilterGroup::Regional,
            false,
        ),
        Source::new(&server.url("y.txt"), "Y", FilterGroup::Malware, true),
    ];
    let dir = tempdir().unwrap();
    let store = Store::open(dir.path()).unwrap();

    sync(&sources, &store).unwrap();
    let first = std::fs::read(store.manifest_path()).unwrap();
    let second_summary = sync(&sources, &store).unwrap();
    let second = std::fs::read(store.manifest_path()).unwrap();

    assert_eq!(first, second);
    assert_eq!(second_summary.unchanged(), 2);
    assert!(String::from_utf8(second).unwrap().contains("中文"));
}

#[test]
fn dry_run_writes_nothing() {
    let server = list_server::start(vec![("d.txt", Route::ok("d\n"))]);
    let source = Source::new(&server.url("d.txt"), "D", FilterGroup::Ads, false);
    let dir = tempdir().unwrap();
    let store = Store::open(dir.path()).unwrap();

    let opts = SyncOptions { dry_run: true };
    let summary = mirror::run(&[source.clone()], &fast_fetcher(), &store, opts).unwrap();

    assert_eq!(summary.updated(), 1);
    assert!(!store.list_path(&source.id).exists());
    assert!(!store.manifest_path().exists());
}

#[test]
fn unwritable_manifest_aborts_run() {
    let server = list_server::start(vec![("m.txt", Route::ok("m\n"))]);
    let source = Source::new(&server.url("m.txt"), "M", FilterGroup::Ads, false);
    let dir = tempdir().unwrap();
    let store = Store::open(dir.path()).unwrap();
    std::fs::create_dir(store.manifest_path()).unwrap();

    let err = sync(&[source.clone()], &store).unwrap_err();

    assert!(format!("{:#}", err).contains("metadata.json"), "{:#}", err);
    // The list itself was processed before the manifest write failed.
    assert_eq!(store.read(&source.id).unwrap(), "m\n");
    assert!(store.manifest_path().is_dir());
}
