mod common;

use assert_cmd::Command;
use common::TestProject;
use predicates::prelude::*;

fn bundler_cmd(project: &TestProject) -> Command {
    let mut cmd = Command::cargo_bin("hotupdate_bundler").unwrap();
    cmd.env_remove("HOTUPDATE_BUILD_TARGET")
        .env_remove("RUST_LOG")
        .env_remove("CLICOLOR_FORCE")
        .arg("--project")
        .arg(project.root())
        .args(["--target", "android"]);
    cmd
}

#[test]
fn manifest_command_writes_versions_file() {
    let project = TestProject::new();
    project.write("AssetBundles/Android/a.dll.bytes", b"X");
    project.write("AssetBundles/Android/b.dll.bytes", b"Y");

    bundler_cmd(&project)
        .arg("manifest")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Wrote"))
        .stdout(predicate::str::contains("2 entries"))
        .stdout(predicate::str::contains("\u{1b}[").not());

    let text = project.read("AssetBundles/Android/Versions.txt");
    assert_eq!(text.lines().count(), 2);
    assert!(text.contains("a.dll.bytes,02129bb861061d1a052c592e2dc6b383"));
    assert!(text.contains("b.dll.bytes,57cec4137b614c87cb4e24a3d003a3e0"));
}

#[test]
fn json_manifest_output_is_parseable() {
    let project = TestProject::new();
    project.write("AssetBundles/Android/a.dll.bytes", b"X");

    let output = bundler_cmd(&project)
        .args(["--json", "manifest"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["entries"][0]["name"], "a.dll.bytes");
}

#[test]
fn verify_exits_with_two_on_mismatch() {
    let project = TestProject::new();
    project.write("AssetBundles/Android/a.bytes", b"one");
    bundler_cmd(&project).arg("manifest").assert().success();
    bundler_cmd(&project).arg("verify").assert().success();

    project.write("AssetBundles/Android/a.bytes", b"two");
    bundler_cmd(&project)
        .arg("verify")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("changed: a.bytes"));
}

#[test]
fn stage_fails_when_hot_update_assembly_is_missing() {
    let project = TestProject::new();

    bundler_cmd(&project)
        .arg("stage")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing build artifact"))
        .stderr(predicate::str::contains("HotUpdate.dll"));

    assert!(!project.exists("AssetBundles/Android/Versions.txt"));
}

#[test]
fn stage_reads_config_file() {
    let project = TestProject::new();
    project.write(
        "HotUpdate.toml",
        br#"
[assemblies]
aot = []
hot_update = ["Game.dll"]

[relocation]
entries = ["prefabs"]
"#,
    );
    project.write("AssetBundles/Android/prefabs", b"bundle");
    project.write("HybridCLRData/HotUpdateDlls/Android/Game.dll", b"game");

    bundler_cmd(&project).arg("stage").assert().success();

    assert_eq!(project.read("AssetBundles/Android/Game.dll.bytes"), "game");
    assert_eq!(project.read("Assets/StreamingAssets/prefabs"), "bundle");
    let text = project.read("AssetBundles/Android/Versions.txt");
    assert!(text.contains("Game.dll.bytes,"));
    assert!(text.contains("prefabs,"));
}

#[test]
fn stage_exits_with_one_when_relocation_aborts() {
    let project = TestProject::new();
    project.write("HybridCLRData/HotUpdateDlls/Android/HotUpdate.dll", b"hot");

    bundler_cmd(&project)
        .arg("stage")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("manually"));

    // later stages still ran
    assert_eq!(project.read("AssetBundles/Android/HotUpdate.dll.bytes"), "hot");
    assert!(project.exists("AssetBundles/Android/Versions.txt"));
}

#[test]
fn json_stage_report_keeps_abort_exit_code() {
    let project = TestProject::new();
    project.write("HybridCLRData/HotUpdateDlls/Android/HotUpdate.dll", b"hot");

    let output = bundler_cmd(&project)
        .args(["--json", "stage"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["relocation"]["status"], "aborted");
    assert_eq!(report["manifest_entries"], 1);
}

#[test]
fn build_without_tools_stages_existing_artifacts() {
    let project = TestProject::new();
    project.write("Assets/Prefabs/HotUpdatePrefab.prefab", b"prefab");
    project.write(
        "HotUpdate.toml",
        b"[relocation]\nentries = [\"prefabs\"]\n",
    );
    project.write("AssetBundles/Android/prefabs", b"bundle");
    project.write("HybridCLRData/HotUpdateDlls/Android/HotUpdate.dll", b"hot");

    bundler_cmd(&project).arg("build").assert().success();

    assert_eq!(project.read("Assets/StreamingAssets/prefabs"), "bundle");
    assert!(project.read("AssetBundles/Android/Versions.txt").contains("HotUpdate.dll.bytes,"));
}

#[test]
fn copy_to_streaming_reports_abort() {
    let project = TestProject::new();

    bundler_cmd(&project)
        .arg("copy-to-streaming")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("manually"));
}

#[test]
fn open_persistent_print_shows_company_and_product() {
    let project = TestProject::new();
    project.write(
        "HotUpdate.toml",
        b"[project]\ncompany = \"Acme\"\nproduct = \"Dungeon\"\n",
    );

    bundler_cmd(&project)
        .args(["open-persistent", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme").and(predicate::str::contains("Dungeon")));
}

#[test]
fn invalid_target_is_rejected_by_argument_parser() {
    let project = TestProject::new();
    let mut cmd = Command::cargo_bin("hotupdate_bundler").unwrap();
    cmd.arg("--project")
        .arg(project.root())
        .args(["--target", "dreamcast", "manifest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid build target"));
}

#[test]
fn target_can_come_from_environment() {
    let project = TestProject::new();
    project.write("AssetBundles/iOS/a.bytes", b"a");

    let mut cmd = Command::cargo_bin("hotupdate_bundler").unwrap();
    cmd.env("HOTUPDATE_BUILD_TARGET", "ios")
        .arg("--project")
        .arg(project.root())
        .arg("manifest")
        .assert()
        .success();

    assert!(project.exists("AssetBundles/iOS/Versions.txt"));
}
