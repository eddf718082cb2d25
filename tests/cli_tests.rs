//! End-to-end tests of the command-line entry point.

use std::io::Cursor;

use gdfetch::cli::{execute, ERROR_PREFIX};
use gdfetch::LinePrompt;

mod common;
use common::helpers::*;

struct Run {
    code: i32,
    out: String,
    err: String,
    prompt: String,
}

async fn run(server: &TestServer, dir: &std::path::Path, args: &[&str], input: &str) -> Run {
    let mut prompt = LinePrompt::new(Cursor::new(input.to_string()), Vec::new());
    let mut out = Vec::new();
    let mut err = Vec::new();

    let mut argv = vec!["gdfetch"];
    argv.extend_from_slice(args);
    let code = execute(
        argv,
        configured_test_builder(server, dir),
        &mut prompt,
        &mut out,
        &mut err,
    )
    .await;

    Run {
        code,
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
        prompt: String::from_utf8(prompt.output().clone()).unwrap(),
    }
}

#[tokio::test]
async fn test_show_mode() {
    let temp_dir = create_temp_dir();
    let server = TestServer::start(MockResponse::file(create_test_content(1536))).await;

    let run = run(
        &server,
        temp_dir.path(),
        &["-mode", "show", "-url", TEST_SHARE_URL],
        "",
    )
    .await;

    assert_eq!(run.code, 0);
    assert_eq!(
        run.out,
        "[Information of the file]\nfilename: report.pdf\nfilesize: 1.50 KiB\n"
    );
    assert!(run.err.is_empty());
    assert!(run.prompt.is_empty());
    assert!(dir_entries(temp_dir.path()).is_empty());
}

#[tokio::test]
async fn test_download_skip_confirmation_with_output() {
    let temp_dir = create_temp_dir();
    let content = create_test_content(10_000);
    let server = TestServer::start(MockResponse::file(content.clone())).await;

    let run = run(
        &server,
        temp_dir.path(),
        &["-y", "-url", TEST_SHARE_URL, "-o", "saved.bin"],
        "",
    )
    .await;

    assert_eq!(run.code, 0, "stderr: {}", run.err);
    assert!(run.prompt.is_empty());
    let saved = temp_dir.path().join("saved.bin");
    assert_file_size(&saved, 10_000);
    assert_eq!(std::fs::read(saved).unwrap(), content);
}

#[tokio::test]
async fn test_empty_output_uses_remote_name() {
    let temp_dir = create_temp_dir();
    let server = TestServer::start(MockResponse::file(create_test_content(10))).await;

    let run = run(
        &server,
        temp_dir.path(),
        &["-y", "-url", TEST_SHARE_URL, "-o", ""],
        "",
    )
    .await;

    assert_eq!(run.code, 0, "stderr: {}", run.err);
    assert_eq!(
        dir_entries(temp_dir.path()),
        vec![temp_dir.path().join("report.pdf")]
    );
}

#[tokio::test]
async fn test_download_declined_prints_abort() {
    let temp_dir = create_temp_dir();
    let server = TestServer::start(MockResponse::file(create_test_content(10))).await;

    let run = run(&server, temp_dir.path(), &["-url", TEST_SHARE_URL], "n\n").await;

    assert_eq!(run.code, 0);
    assert_eq!(run.out, "Abort.\n");
    assert!(run.prompt.starts_with("Download report.pdf (10 B) and save as "));
    assert!(run.prompt.ends_with("? [Y/n]: "));
    assert!(dir_entries(temp_dir.path()).is_empty());
}

#[tokio::test]
async fn test_download_accepts_empty_answer() {
    let temp_dir = create_temp_dir();
    let server = TestServer::start(MockResponse::file(create_test_content(10))).await;

    let run = run(&server, temp_dir.path(), &["-url", TEST_SHARE_URL], "\n").await;

    assert_eq!(run.code, 0, "stderr: {}", run.err);
    assert!(run.out.is_empty());
    assert_file_size(&temp_dir.path().join("report.pdf"), 10);
}

#[tokio::test]
async fn test_not_found_exit_code() {
    let temp_dir = create_temp_dir();
    let server = TestServer::start(MockResponse::status(404)).await;

    let run = run(
        &server,
        temp_dir.path(),
        &["-mode", "show", "-url", TEST_SHARE_URL],
        "",
    )
    .await;

    assert_eq!(run.code, 3);
    assert!(run.out.is_empty());
    assert_eq!(
        run.err,
        format!("{} Got an unusual response. Status code: 404\n", ERROR_PREFIX)
    );
}

#[tokio::test]
async fn test_missing_filename_exit_code() {
    let temp_dir = create_temp_dir();
    let response =
        MockResponse::file(create_test_content(10)).without_header("Content-Disposition");
    let server = TestServer::start(response).await;

    let run = run(&server, temp_dir.path(), &["-y", "-url", TEST_SHARE_URL], "").await;

    assert_eq!(run.code, 4);
    assert!(run.err.starts_with(ERROR_PREFIX));
    assert!(!run.err.contains("Usage:"));
}

#[tokio::test]
async fn test_short_body_exit_code() {
    let temp_dir = create_temp_dir();
    let response =
        MockResponse::file(create_test_content(40)).with_header("Content-Length", "100");
    let server = TestServer::start(response).await;

    let run = run(&server, temp_dir.path(), &["-y", "-url", TEST_SHARE_URL], "").await;

    assert_eq!(run.code, 5);
    assert!(run.err.starts_with(ERROR_PREFIX));
}

#[tokio::test]
async fn test_invalid_link_never_contacts_server() {
    let temp_dir = create_temp_dir();
    let server = TestServer::start(MockResponse::file(create_test_content(10))).await;

    let run = run(
        &server,
        temp_dir.path(),
        &["-url", "https://drive.google.com/file/d/short/view"],
        "",
    )
    .await;

    assert_eq!(run.code, 1);
    assert!(run.err.contains("Usage:"));
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_timeout_flag() {
    let temp_dir = create_temp_dir();
    let server = TestServer::start(MockResponse::stalled()).await;

    // One second is the smallest value the flag accepts.
    let run = run(
        &server,
        temp_dir.path(),
        &["-mode", "show", "-timeout", "1", "-url", TEST_SHARE_URL],
        "",
    )
    .await;

    assert_eq!(run.code, 3);
    assert!(run.err.starts_with(ERROR_PREFIX));
}
