//! End-to-end runs of the engine over temporary trees.

use std::fs;
use std::path::Path;
use unixize_engine::bom::Bom;
use unixize_engine::config::{Config, ConfigBuilder};
use unixize_engine::error::EngineError;
use unixize_engine::events::{Event, NullReporter};
use unixize_engine::options::{Action, LineEnding};
use unixize_engine::run;

fn write(root: &Path, rel: &str, bytes: &[u8]) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, bytes).unwrap();
}

fn config(paths: Vec<std::path::PathBuf>) -> ConfigBuilder {
    let mut builder = ConfigBuilder::default();
    builder.paths(paths);
    builder
}

#[test]
fn flat_directory_leaves_subdirectories_alone() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "top.txt", b"\xEF\xBB\xBFa\r\n");
    write(dir.path(), "nested/deep.txt", b"b\r\n");

    let cfg: Config = config(vec![dir.path().to_path_buf()]).build().unwrap();
    let mut events = Vec::new();
    let summary = run(&cfg, &mut events).unwrap();

    assert_eq!(summary.processed, 1);
    assert_eq!(fs::read(dir.path().join("top.txt")).unwrap(), b"a\n");
    assert_eq!(fs::read(dir.path().join("nested/deep.txt")).unwrap(), b"b\r\n");
    assert!(!events.iter().any(|e| matches!(e, Event::DirectoryEntered(_))));
}

#[test]
fn recursive_run_processes_whole_tree() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "top.txt", b"a\r\n");
    write(dir.path(), "nested/deep.py", b"print(1)\r\n");
    write(dir.path(), "nested/logo.png", b"\x89PNG\r\n");

    let cfg = config(vec![dir.path().to_path_buf()])
        .recursive(true)
        .build()
        .unwrap();
    let mut events = Vec::new();
    let summary = run(&cfg, &mut events).unwrap();

    assert_eq!((summary.processed, summary.skipped), (2, 1));
    assert_eq!(fs::read(dir.path().join("nested/deep.py")).unwrap(), b"print(1)\n");
    assert_eq!(fs::read(dir.path().join("nested/logo.png")).unwrap(), b"\x89PNG\r\n");

    let dirs: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            Event::DirectoryEntered(p) => Some(p.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(dirs, vec![dir.path().to_path_buf(), dir.path().join("nested")]);
}

#[test]
fn missing_path_aborts_before_any_change() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.txt", b"a\r\n");

    let cfg = config(vec![dir.path().join("a.txt"), dir.path().join("missing.txt")])
        .build()
        .unwrap();
    let err = run(&cfg, &mut NullReporter).unwrap_err();

    assert!(matches!(err, EngineError::PathNotFound(_)));
    assert_eq!(fs::read(dir.path().join("a.txt")).unwrap(), b"a\r\n");
}

#[test]
fn single_file_uses_selected_action() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.txt", b"\xFE\xFF\x00h\x00\r\x00\n");

    let cfg = config(vec![dir.path().join("a.txt")])
        .action(Action::Decode)
        .build()
        .unwrap();
    let mut events = Vec::new();
    run(&cfg, &mut events).unwrap();

    assert!(events.contains(&Event::Decoded {
        path: dir.path().join("a.txt"),
        bom: Some(Bom::Utf16Be),
    }));
    assert_eq!(
        fs::read(dir.path().join("a.txt")).unwrap(),
        b"\xFE\xFF\x00h\x00\r\x00\n"
    );

    let cfg = config(vec![dir.path().join("a.txt")])
        .line_ending(LineEnding::Crlf)
        .build()
        .unwrap();
    run(&cfg, &mut NullReporter).unwrap();
    assert_eq!(fs::read(dir.path().join("a.txt")).unwrap(), b"h\r\n");
}

#[test]
fn failure_stops_run_unless_keep_going() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a_bad.txt", b"\xFF\xFEx");
    write(dir.path(), "b_good.txt", b"ok\r\n");

    let cfg = config(vec![dir.path().to_path_buf()]).build().unwrap();
    let err = run(&cfg, &mut NullReporter).unwrap_err();
    assert!(matches!(err, EngineError::Decode { .. }));
    assert_eq!(fs::read(dir.path().join("b_good.txt")).unwrap(), b"ok\r\n");

    let cfg = config(vec![dir.path().to_path_buf()])
        .keep_going(true)
        .build()
        .unwrap();
    let summary = run(&cfg, &mut NullReporter).unwrap();
    assert!(!summary.is_success());
    assert_eq!(summary.errors.len(), 1);
    assert_eq!(summary.errors[0].0, dir.path().join("a_bad.txt"));
    assert_eq!(summary.processed, 1);
    assert_eq!(fs::read(dir.path().join("b_good.txt")).unwrap(), b"ok\n");
    assert_eq!(fs::read(dir.path().join("a_bad.txt")).unwrap(), b"\xFF\xFEx");
}

#[test]
fn extra_text_extensions() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "query.sql", b"select 1;\r\n");

    let cfg = config(vec![dir.path().join("query.sql")]).build().unwrap();
    let summary = run(&cfg, &mut NullReporter).unwrap();
    assert_eq!(summary.skipped, 1);

    let mut exts = config(vec![]).build().unwrap().text_extensions;
    exts.push("sql".into());
    let cfg = config(vec![dir.path().join("query.sql")])
        .text_extensions(exts)
        .build()
        .unwrap();
    run(&cfg, &mut NullReporter).unwrap();
    assert_eq!(fs::read(dir.path().join("query.sql")).unwrap(), b"select 1;\n");
}

#[test]
fn zero_chunk_size_is_rejected() {
    let cfg = ConfigBuilder::default().chunk_size(0usize).build().unwrap();
    assert!(matches!(run(&cfg, &mut NullReporter), Err(EngineError::Config(_))));
}

#[test]
fn files_are_reported_under_their_own_directory() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a_sub/x.txt", b"x\r\n");
    write(dir.path(), "b.txt", b"b\r\n");

    let cfg = config(vec![dir.path().to_path_buf()])
        .recursive(true)
        .build()
        .unwrap();
    let mut events = Vec::new();
    run(&cfg, &mut events).unwrap();

    let order: Vec<_> = events
        .into_iter()
        .filter_map(|e| match e {
            Event::DirectoryEntered(p) | Event::FileStarted(p) => Some(p),
            _ => None,
        })
        .collect();
    assert_eq!(
        order,
        vec![
            dir.path().to_path_buf(),
            dir.path().join("b.txt"),
            dir.path().join("a_sub"),
            dir.path().join("a_sub/x.txt"),
        ]
    );
}

#[cfg(unix)]
#[test]
fn symlinked_input_file_is_left_alone() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "real.txt", b"a\r\n");
    let link = dir.path().join("link.txt");
    std::os::unix::fs::symlink(dir.path().join("real.txt"), &link).unwrap();

    let cfg = config(vec![link.clone()]).build().unwrap();
    let summary = run(&cfg, &mut NullReporter).unwrap();

    assert_eq!((summary.processed, summary.skipped), (0, 0));
    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(fs::read(dir.path().join("real.txt")).unwrap(), b"a\r\n");
}
