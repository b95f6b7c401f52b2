mod common;

use common::{TestProject, nl};
use hotupdate_bundler::bundler::{
    Error,
    builder::md5_hex,
    stages::manifest::{ManifestEntry, VersionManifest, generate_version_manifest},
};

const MD5_X: &str = "02129bb861061d1a052c592e2dc6b383";
const MD5_Y: &str = "57cec4137b614c87cb4e24a3d003a3e0";

#[test]
fn md5_hex_matches_known_digests() {
    assert_eq!(md5_hex(b"X"), MD5_X);
    assert_eq!(md5_hex(b"Y"), MD5_Y);
    assert_eq!(md5_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
}

#[tokio::test]
async fn writes_one_line_per_file_sorted_by_name() {
    let project = TestProject::new();
    project.write("AssetBundles/Android/b.dll.bytes", b"Y");
    project.write("AssetBundles/Android/a.dll.bytes", b"X");
    let settings = project.settings();

    let (path, manifest) = generate_version_manifest(&settings).await.unwrap();

    assert_eq!(path, settings.output_dir().join("Versions.txt"));
    assert_eq!(manifest.len(), 2);
    let expected = format!("a.dll.bytes,{MD5_X}{nl}b.dll.bytes,{MD5_Y}{nl}", nl = nl());
    assert_eq!(project.read("AssetBundles/Android/Versions.txt"), expected);
}

#[tokio::test]
async fn skips_manifest_suffix_and_subdirectories() {
    let project = TestProject::new();
    project.write("AssetBundles/Android/prefabs", b"bundle");
    project.write("AssetBundles/Android/prefabs.manifest", b"index");
    project.write("AssetBundles/Android/Android.manifest", b"index");
    project.write("AssetBundles/Android/nested/inner.bytes", b"deep");

    let (_, manifest) = generate_version_manifest(&project.settings()).await.unwrap();

    let names: Vec<&str> = manifest.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["prefabs"]);
    let checksum = &manifest.entries()[0].checksum;
    assert_eq!(checksum.len(), 32);
    assert!(checksum.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[tokio::test]
async fn replaces_existing_manifest_instead_of_appending() {
    let project = TestProject::new();
    project.write("AssetBundles/Android/a.dll.bytes", b"X");
    project.write(
        "AssetBundles/Android/Versions.txt",
        b"stale.bytes,00000000000000000000000000000000\nother.bytes,11111111111111111111111111111111\n",
    );

    generate_version_manifest(&project.settings()).await.unwrap();

    let text = project.read("AssetBundles/Android/Versions.txt");
    assert_eq!(text, format!("a.dll.bytes,{MD5_X}{}", nl()));
    assert!(!text.contains("stale.bytes"));
}

#[tokio::test]
async fn regeneration_of_unchanged_directory_is_identical() {
    let project = TestProject::new();
    project.write("AssetBundles/Android/one.bytes", b"1");
    project.write("AssetBundles/Android/two.bytes", b"2");
    let settings = project.settings();

    generate_version_manifest(&settings).await.unwrap();
    let first = project.read("AssetBundles/Android/Versions.txt");
    generate_version_manifest(&settings).await.unwrap();
    let second = project.read("AssetBundles/Android/Versions.txt");

    assert_eq!(first, second);
}

#[tokio::test]
async fn missing_output_directory_is_an_error() {
    let project = TestProject::new();
    let err = generate_version_manifest(&project.settings()).await.unwrap_err();
    assert!(matches!(err, Error::Fs { .. }), "unexpected error: {err}");
}

#[test]
fn parse_accepts_crlf_blank_lines_and_commas_in_names() {
    let text = format!("b,c.bytes,{MD5_Y}\r\n\r\na.bytes,{MD5_X}\n");
    let manifest = VersionManifest::parse(&text).unwrap();

    assert_eq!(
        manifest.entries(),
        &[
            ManifestEntry {
                name: "a.bytes".into(),
                checksum: MD5_X.into()
            },
            ManifestEntry {
                name: "b,c.bytes".into(),
                checksum: MD5_Y.into()
            },
        ]
    );
    assert_eq!(manifest.checksum_of("b,c.bytes"), Some(MD5_Y));
    assert_eq!(manifest.checksum_of("nope"), None);
}

#[test]
fn parse_rejects_malformed_lines() {
    for bad in ["no-comma-here", ",02129bb861061d1a052c592e2dc6b383", "a.bytes,XYZ", "a.bytes,02129BB861061D1A052C592E2DC6B383"] {
        let err = VersionManifest::parse(bad).unwrap_err();
        assert!(
            matches!(err, Error::MalformedManifest { line: 1, .. }),
            "{bad:?} gave {err}"
        );
    }
}

#[test]
fn render_of_parsed_manifest_is_canonical() {
    let text = format!("b.bytes,{MD5_Y}\na.bytes,{MD5_X}\n");
    let rendered = VersionManifest::parse(&text).unwrap().render();
    assert_eq!(rendered, format!("a.bytes,{MD5_X}{nl}b.bytes,{MD5_Y}{nl}", nl = nl()));
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn non_utf8_names_are_left_out_and_verify_stays_clean() {
    use hotupdate_bundler::bundler::stages::verify::verify_version_manifest;
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

    let project = TestProject::new();
    project.write("AssetBundles/Android/a.dll.bytes", b"X");
    let settings = project.settings();
    let odd = settings
        .output_dir()
        .join(OsStr::from_bytes(b"legacy-\xff\xfe.bytes"));
    std::fs::write(&odd, b"Y").unwrap();

    let (_, manifest) = generate_version_manifest(&settings).await.unwrap();

    assert_eq!(manifest.len(), 1);
    assert_eq!(
        project.read("AssetBundles/Android/Versions.txt"),
        format!("a.dll.bytes,{MD5_X}{}", nl())
    );
    assert!(verify_version_manifest(&settings).await.unwrap().is_empty());
}
