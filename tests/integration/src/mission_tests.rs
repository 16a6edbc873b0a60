//! Mission-based integration tests
//!
//! Each test walks one user-facing scenario through the library crates the
//! way the CLI does: one configuration per run, many files.

use std::fs;

use jdts_config::ConfigLoader;
use jdts_core::{NullSink, ReplacementSummary, replace};
use jdts_test_utils::{java, project::TestProject};
use pretty_assertions::assert_eq;

/// Reconcile every Java file under the project root, returning the merged summary.
fn apply_tree(project: &TestProject, config_name: &str) -> ReplacementSummary {
    let config = ConfigLoader::new()
        .load(&project.path(config_name))
        .unwrap();
    let files = jdts_fs::discover_sources(&[project.root().to_path_buf()], &["java"]).unwrap();

    let mut total = ReplacementSummary::default();
    for path in files {
        let source = jdts_fs::read_text(&path).unwrap();
        let model = jdts_parser::parse_source(&source).unwrap();
        let result = replace(&config.rules, &model, &mut NullSink).unwrap();
        if result.rewritten_source != source {
            jdts_fs::write_text(&path, &result.rewritten_source).unwrap();
        }
        total.merge(&result.summary);
    }
    total
}

// =============================================================================
// Mission 1: Stamp a release version across a tree
// =============================================================================

#[test]
fn mission_stamp_since_across_tree() {
    let project = TestProject::new();
    project.write_config("[[tags]]\nid = \"since\"\nvalue = \"3.1\"\noverwrite = \"always\"\n");
    project.write_source("src/demo/Counter.java", java::UNTAGGED_CLASS);
    project.write_source("src/demo/Parser.java", java::MESSY_CLASS);
    project.write_source("src/demo/Shapes.java", java::MIXED_TYPES);

    let summary = apply_tree(&project, "jdts.toml");

    // Counter: 4 added; Parser: class + method replaced, field added;
    // Shapes: 7 added
    assert_eq!(summary.added, 4 + 1 + 7);
    assert_eq!(summary.replaced, 2);
    for file in ["Counter", "Parser", "Shapes"] {
        let content = project.read(&format!("src/demo/{file}.java"));
        assert!(!content.contains("@since 0.9"), "{file} kept a stale tag");
        assert!(content.contains("@since 3.1"));
    }

    let again = apply_tree(&project, "jdts.toml");
    assert_eq!(again.edits(), 0);
}

// =============================================================================
// Mission 2: Strip tags that do not belong
// =============================================================================

#[test]
fn mission_remove_disallowed_return_tags() {
    let project = TestProject::new();
    fs::write(
        project.path("jdts.yaml"),
        "tags:\n  - id: return\n    add_missing: false\n    overwrite: never\n    location:\n      mode: compliant\n      remove_if_misplaced: true\n",
    )
    .unwrap();
    project.write_source("Parser.java", java::MESSY_CLASS);

    let summary = apply_tree(&project, "jdts.yaml");

    assert_eq!(summary.removed, 1);
    let content = project.read("Parser.java");
    assert!(!content.contains("@return never meaningful here"));
    assert!(content.contains("    /**\n     * Maximum depth.\n     */\n    public static final int MAX_DEPTH"));
}

// =============================================================================
// Mission 3: Fill blank authors without touching real ones
// =============================================================================

#[test]
fn mission_fill_blank_authors_only() {
    let project = TestProject::new();
    fs::write(
        project.path("jdts.json"),
        r#"{"tags": [{"id": "author", "value": "Platform Team", "overwrite": "if-blank",
                     "add_missing": false, "targets": ["class"]}]}"#,
    )
    .unwrap();
    project.write_source("A.java", "/**\n * A.\n *\n * @author\n */\nclass A {}\n");
    project.write_source("B.java", "/**\n * B.\n *\n * @author Someone Else\n */\nclass B {}\n");
    project.write_source("C.java", "/**\n * C.\n */\nclass C {}\n");

    let summary = apply_tree(&project, "jdts.json");

    assert_eq!(summary.replaced, 1);
    project.assert_file_eq("A.java", "/**\n * A.\n *\n * @author Platform Team\n */\nclass A {}\n");
    project.assert_file_eq("B.java", "/**\n * B.\n *\n * @author Someone Else\n */\nclass B {}\n");
    project.assert_file_eq("C.java", "/**\n * C.\n */\nclass C {}\n");
}

// =============================================================================
// Mission 4: Put tags back in canonical order
// =============================================================================

#[test]
fn mission_reorder_method_tags() {
    let project = TestProject::new();
    project.write_config(
        r#"
[[tags]]
id = "param"
value = "a"
description = "first"
location = { mode = "compliant" }

[[tags]]
id = "return"
value = "the sum"
location = { mode = "compliant" }
"#,
    );
    project.write_source(
        "Math.java",
        r#"class Math {
    /**
     * Adds.
     *
     * @return the sum
     * @param a first
     */
    int add(int a) { return a; }
}
"#,
    );

    let summary = apply_tree(&project, "jdts.toml");

    assert_eq!(summary.repositioned, 1);
    assert_eq!(summary.unchanged, 1);
    assert!(project
        .read("Math.java")
        .contains("     * @param a first\n     * @return the sum\n     */"));
}

// =============================================================================
// Mission 5: Windows line endings survive a rewrite
// =============================================================================

#[test]
fn mission_crlf_sources_keep_line_endings() {
    let project = TestProject::new();
    project.write_config("[[tags]]\nid = \"since\"\nvalue = \"1.0\"\n");
    let source = java::DUPLICATE_COMMENTS.replace('\n', "\r\n");
    project.write_source("Point.java", &source);

    apply_tree(&project, "jdts.toml");

    let content = project.read("Point.java");
    assert_eq!(content.matches("@since 1.0\r\n").count(), 2);
    assert!(!content.replace("\r\n", "").contains('\n'));
}
