use assert_fs::prelude::*;
use jdts_fs::{DEFAULT_EXTENSIONS, Error, discover_sources};
use predicates::prelude::*;
use rstest::rstest;

fn relative(temp: &assert_fs::TempDir, paths: Vec<std::path::PathBuf>) -> Vec<String> {
    paths
        .into_iter()
        .map(|p| {
            p.strip_prefix(temp.path())
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn test_discovers_java_files_recursively_in_sorted_order() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("src/main/java/b/Beta.java").touch().unwrap();
    temp.child("src/main/java/a/Alpha.java").touch().unwrap();
    temp.child("src/main/resources/notes.txt").touch().unwrap();

    let found = discover_sources(&[temp.path().to_path_buf()], DEFAULT_EXTENSIONS).unwrap();

    assert_eq!(
        relative(&temp, found),
        vec!["src/main/java/a/Alpha.java", "src/main/java/b/Beta.java"]
    );
}

#[rstest]
#[case(".git/Hidden.java")]
#[case("target/Generated.java")]
#[case("build/Generated.java")]
#[case("node_modules/pkg/Thing.java")]
fn test_skips_hidden_and_build_directories(#[case] skipped: &str) {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child(skipped).touch().unwrap();
    temp.child("Kept.java").touch().unwrap();

    let found = discover_sources(&[temp.path().to_path_buf()], DEFAULT_EXTENSIONS).unwrap();

    assert_eq!(relative(&temp, found), vec!["Kept.java"]);
}

#[test]
fn test_file_roots_are_included_once() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("Widget.java");
    file.write_str("class Widget {}").unwrap();
    file.assert(predicate::path::is_file());

    let roots = vec![file.path().to_path_buf(), temp.path().to_path_buf()];
    let found = discover_sources(&roots, DEFAULT_EXTENSIONS).unwrap();

    assert_eq!(relative(&temp, found), vec!["Widget.java"]);
}

#[test]
fn test_extension_match_is_case_insensitive() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("Upper.JAVA").touch().unwrap();
    temp.child("Script.kt").touch().unwrap();

    let found = discover_sources(&[temp.path().to_path_buf()], &["java"]).unwrap();

    assert_eq!(relative(&temp, found), vec!["Upper.JAVA"]);
}

#[test]
fn test_missing_root_is_an_error() {
    let temp = assert_fs::TempDir::new().unwrap();
    let missing = temp.path().join("nope");

    let err = discover_sources(&[missing], DEFAULT_EXTENSIONS).unwrap_err();

    assert!(matches!(err, Error::NotFound { .. }));
}
