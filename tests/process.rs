#![cfg(unix)]

use hotupdate_bundler::bundler::{Error, utils::process::run_streaming};

fn sh(script: &str) -> Vec<String> {
    vec!["-c".to_string(), script.to_string()]
}

#[tokio::test]
async fn non_utf8_output_is_drained_to_the_end() {
    let dir = tempfile::tempdir().unwrap();
    // a legacy code page line followed by more output than a pipe buffer holds
    let script = "printf 'ok\\n\\377\\376 legacy codepage\\n'; sleep 0.2; \
                  seq 1 20000; printf '\\377\\n' >&2; seq 1 20000 >&2; exit 0";

    run_streaming("sh", &sh(script), dir.path()).await.unwrap();
}

#[tokio::test]
async fn nonzero_exit_is_a_tool_failure() {
    let dir = tempfile::tempdir().unwrap();

    let err = run_streaming("sh", &sh("echo building; exit 3"), dir.path())
        .await
        .unwrap_err();

    match err {
        Error::ToolFailed { command, reason } => {
            assert!(command.starts_with("sh -c"));
            assert_eq!(reason, "exited with status 3");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn spawn_failure_is_a_tool_failure() {
    let dir = tempfile::tempdir().unwrap();

    let err = run_streaming("./no-such-engine-binary", &[], dir.path())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ToolFailed { .. }));
}

#[tokio::test]
async fn runs_in_the_given_directory() {
    let dir = tempfile::tempdir().unwrap();

    run_streaming("sh", &sh("touch marker"), dir.path()).await.unwrap();

    assert!(dir.path().join("marker").exists());
}
