#![cfg(unix)]

mod common;

use std::path::PathBuf;

use common::TestProject;
use hotupdate_bundler::bundler::{Bundler, Error, ToolCommand, ToolSettings};

/// `sh -c <script> sh <args...>` so the script sees the args as `$1..`.
fn sh_tool(script: &str, args: &[&str]) -> ToolCommand {
    let mut all = vec!["-c".to_string(), script.to_string(), "sh".to_string()];
    all.extend(args.iter().map(|a| a.to_string()));
    ToolCommand::new("sh", all)
}

fn project_with_prefab() -> TestProject {
    let project = TestProject::new();
    project.write("Assets/Prefabs/HotUpdatePrefab.prefab", b"prefab");
    project
}

#[tokio::test]
async fn bundle_tool_receives_build_map_and_temp_file_is_removed() {
    let project = project_with_prefab();
    let tools = ToolSettings {
        bundle: Some(sh_tool(
            r#"cp "$1" "$2" && printf %s "$1" > "$3""#,
            &[
                "{build_map}",
                "{project}/captured-{target}.json",
                "{project}/map-path.txt",
            ],
        )),
        compile: None,
    };
    let settings = project.builder().tools(tools).build().unwrap();
    let output_dir = settings.output_dir();
    let bundler = Bundler::new(settings);

    let plan = bundler.build_asset_bundles().await.unwrap();

    assert!(output_dir.is_dir());
    let captured: serde_json::Value =
        serde_json::from_str(&project.read("captured-Android.json")).unwrap();
    assert_eq!(captured["target"], "Android");
    assert_eq!(
        captured["outputDir"].as_str().map(PathBuf::from),
        Some(output_dir)
    );
    assert_eq!(captured["bundles"][0]["assetBundleName"], "prefabs");
    assert_eq!(
        captured["bundles"][0]["assetNames"],
        serde_json::json!(["Assets/Prefabs/HotUpdatePrefab.prefab"])
    );
    assert_eq!(captured, serde_json::to_value(&plan).unwrap());

    let map_path = PathBuf::from(project.read("map-path.txt"));
    assert!(map_path.starts_with(std::env::temp_dir()));
    assert!(!map_path.exists());
}

#[tokio::test]
async fn compile_tool_expands_placeholders() {
    let project = TestProject::new();
    let tools = ToolSettings {
        bundle: None,
        compile: Some(sh_tool(
            r#"mkdir -p "$1" && printf %s "$2" > "$1/HotUpdate.dll""#,
            &["{project}/HybridCLRData/HotUpdateDlls/{target}", "{output_dir}"],
        )),
    };
    let settings = project.builder().tools(tools).build().unwrap();
    let expected = settings.output_dir();

    Bundler::new(settings).compile_assemblies().await.unwrap();

    assert_eq!(
        project.read("HybridCLRData/HotUpdateDlls/Android/HotUpdate.dll"),
        expected.display().to_string()
    );
}

#[tokio::test]
async fn unconfigured_tools_are_skipped() {
    let project = project_with_prefab();
    let bundler = Bundler::new(project.settings());

    let plan = bundler.build_asset_bundles().await.unwrap();
    bundler.compile_assemblies().await.unwrap();

    assert_eq!(plan.bundles.len(), 1);
    assert!(project.exists("AssetBundles/Android"));
}

#[tokio::test]
async fn failing_tool_is_reported_and_map_is_still_removed() {
    let project = project_with_prefab();
    let tools = ToolSettings {
        bundle: Some(sh_tool(
            r#"printf %s "$1" > "$2"; exit 3"#,
            &["{build_map}", "{project}/map-path.txt"],
        )),
        compile: None,
    };
    let bundler = Bundler::new(project.builder().tools(tools).build().unwrap());

    let err = bundler.build_asset_bundles().await.unwrap_err();

    match err {
        Error::ToolFailed { reason, .. } => assert_eq!(reason, "exited with status 3"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!PathBuf::from(project.read("map-path.txt")).exists());
}

#[tokio::test]
async fn missing_program_is_reported() {
    let project = TestProject::new();
    let tools = ToolSettings {
        bundle: None,
        compile: Some(ToolCommand::new("hotupdate-no-such-compiler", vec![])),
    };
    let bundler = Bundler::new(project.builder().tools(tools).build().unwrap());

    let err = bundler.compile_assemblies().await.unwrap_err();

    match err {
        Error::ToolFailed { command, reason } => {
            assert_eq!(command, "hotupdate-no-such-compiler");
            assert!(reason.contains("program not found"), "{reason}");
        }
        other => panic!("unexpected error: {other}"),
    }
}
