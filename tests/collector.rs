mod common;

use common::TestProject;
use hotupdate_bundler::bundler::{
    Error,
    stages::collector::{copy_aot_assemblies, copy_hot_update_assemblies},
};

const AOT_DIR: &str = "HybridCLRData/AssembliesPostIl2CppStrip/Android";
const HOT_DIR: &str = "HybridCLRData/HotUpdateDlls/Android";

#[tokio::test]
async fn aot_copy_skips_missing_and_continues() {
    let project = TestProject::new();
    project.write(format!("{AOT_DIR}/mscorlib.dll"), b"corlib");
    project.write(format!("{AOT_DIR}/System.Core.dll"), b"core");
    let settings = project.settings();

    let report = copy_aot_assemblies(&settings).await.unwrap();

    assert_eq!(report.copied.len(), 2);
    assert_eq!(report.missing, vec![settings.stripped_aot_dir().join("System.dll")]);
    assert!(!report.is_complete());
    assert_eq!(project.read("AssetBundles/Android/mscorlib.dll.bytes"), "corlib");
    assert_eq!(project.read("AssetBundles/Android/System.Core.dll.bytes"), "core");
    assert!(!project.exists("AssetBundles/Android/System.dll.bytes"));
}

#[tokio::test]
async fn aot_copy_with_nothing_built_reports_all_missing() {
    let project = TestProject::new();
    let report = copy_aot_assemblies(&project.settings()).await.unwrap();
    assert!(report.copied.is_empty());
    assert_eq!(report.missing.len(), 3);
}

#[tokio::test]
async fn hot_update_copy_renames_with_bytes_suffix() {
    let project = TestProject::new();
    project.write(format!("{HOT_DIR}/HotUpdate.dll"), b"managed");
    let settings = project.settings();

    let report = copy_hot_update_assemblies(&settings).await.unwrap();

    assert_eq!(report.copied.len(), 1);
    assert_eq!(
        report.copied[0].destination,
        settings.output_dir().join("HotUpdate.dll.bytes")
    );
    assert_eq!(project.read("AssetBundles/Android/HotUpdate.dll.bytes"), "managed");
}

#[tokio::test]
async fn hot_update_copy_fails_on_missing_source() {
    let project = TestProject::new();
    project.write(format!("{HOT_DIR}/First.dll"), b"1");
    let settings = project
        .builder()
        .hot_update_assemblies(vec!["First.dll".into(), "Second.dll".into()])
        .build()
        .unwrap();

    let err = copy_hot_update_assemblies(&settings).await.unwrap_err();

    match err {
        Error::MissingArtifact { path, .. } => {
            assert_eq!(path, settings.hot_update_dir().join("Second.dll"))
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn preserved_assemblies_are_not_staged() {
    let project = TestProject::new();
    project.write(format!("{HOT_DIR}/HotUpdate.dll"), b"hot");
    let settings = project
        .builder()
        .hot_update_assemblies(vec!["HotUpdate.dll".into(), "Preserved.Core.dll".into()])
        .preserved_assemblies(vec!["Preserved.*".into()])
        .build()
        .unwrap();

    let report = copy_hot_update_assemblies(&settings).await.unwrap();

    assert_eq!(report.copied.len(), 1);
    assert!(!project.exists("AssetBundles/Android/Preserved.Core.dll.bytes"));
}

#[tokio::test]
async fn invalid_preserved_pattern_is_an_error() {
    let project = TestProject::new();
    let settings = project
        .builder()
        .preserved_assemblies(vec!["[".into()])
        .build()
        .unwrap();

    let err = copy_hot_update_assemblies(&settings).await.unwrap_err();
    assert!(matches!(err, Error::Pattern(_)), "unexpected error: {err}");
}

#[tokio::test]
async fn copies_are_idempotent_and_overwrite() {
    let project = TestProject::new();
    project.write(format!("{HOT_DIR}/HotUpdate.dll"), b"v1");
    let settings = project.settings();

    copy_hot_update_assemblies(&settings).await.unwrap();
    copy_hot_update_assemblies(&settings).await.unwrap();
    assert_eq!(project.read("AssetBundles/Android/HotUpdate.dll.bytes"), "v1");

    project.write(format!("{HOT_DIR}/HotUpdate.dll"), b"v2");
    copy_hot_update_assemblies(&settings).await.unwrap();
    assert_eq!(project.read("AssetBundles/Android/HotUpdate.dll.bytes"), "v2");
}
