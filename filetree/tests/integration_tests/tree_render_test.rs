// tests/integration_tests/tree_render_test.rs
use super::common::{StubBlame, create_ignore_file, create_test_file, dir_name};
use anyhow::Result;
use filetree::{Args, render};

fn render_to_string(files: bool, root: &std::path::Path, source: &StubBlame) -> Result<String> {
    let args = Args { files };
    let mut out = Vec::new();
    render(&args, root, source, &mut out)?;
    Ok(console::strip_ansi_codes(&String::from_utf8(out)?).into_owned())
}

#[test]
fn test_file_mode_skips_ignored_log() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let root = temp_dir.path();
    create_test_file(root, "a.txt", "1\n2\n3\n4\n5\n6\n7\n8\n9\n10\n")?;
    create_test_file(root, "b.log", "noise")?;
    create_ignore_file(root, ".filetree.toml", &["*.log", ".filetree.toml"])?;

    let source = StubBlame::new(root).file("a.txt", &[("x@example.com", 10)]);
    let output = render_to_string(true, root, &source)?;

    assert_eq!(
        output,
        format!(
            "├── {}\n    ├── a.txt\n    │   ├── x@example.com (100.0%)\n",
            dir_name(root)
        )
    );
    Ok(())
}

#[test]
fn test_file_mode_colors_full_ownership_in_top_band() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let root = temp_dir.path();
    create_test_file(root, "a.txt", "x")?;

    let source = StubBlame::new(root).file("a.txt", &[("x@example.com", 10)]);
    let mut out = Vec::new();
    render(&Args { files: true }, root, &source, &mut out)?;
    let raw = String::from_utf8(out)?;

    let expected = filetree::ColorBand::Highest.paint(100.0, true);
    assert!(raw.contains(&format!("x@example.com ({expected})")));
    Ok(())
}

#[test]
fn test_aggregate_mode_hides_file_names() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let root = temp_dir.path();
    create_test_file(root, "src/main.rs", "")?;
    create_test_file(root, "src/util.rs", "")?;

    let source = StubBlame::new(root)
        .file("src/main.rs", &[("ana@example.com", 6), ("ben@example.com", 1)])
        .file("src/util.rs", &[("ana@example.com", 1), ("ben@example.com", 2)]);
    let output = render_to_string(false, root, &source)?;

    assert!(!output.contains("main.rs"));
    assert!(!output.contains("util.rs"));
    let stats: Vec<&str> = output.lines().filter(|l| l.contains('@')).collect();
    assert_eq!(
        stats,
        vec![
            "    │   ├── ana@example.com (70.0%)",
            "    │   ├── ben@example.com (30.0%)",
        ]
    );
    Ok(())
}

#[test]
fn test_ignored_subtree_contributes_nothing() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let root = temp_dir.path();
    create_test_file(root, "lib.rs", "")?;
    create_test_file(root, "build/gen.rs", "")?;
    create_ignore_file(root, ".gitignore", &["build/", ".gitignore"])?;

    // gen.rs is not known to the stub, so visiting it would fail the render
    let source = StubBlame::new(root).file("lib.rs", &[("me@example.com", 4)]);
    for files in [true, false] {
        let output = render_to_string(files, root, &source)?;
        assert!(!output.contains("build"));
        assert!(output.contains("me@example.com (100.0%)"));
    }
    Ok(())
}

#[test]
fn test_unattributable_file_aborts_render() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let root = temp_dir.path();
    create_test_file(root, "new.txt", "uncommitted")?;

    let mut out = Vec::new();
    let err = render(&Args { files: true }, root, &StubBlame::new(root), &mut out)
        .err()
        .ok_or_else(|| anyhow::anyhow!("expected render to fail"))?;

    let message = format!("{err:#}");
    assert!(message.starts_with("Error printing directory tree: "));
    assert!(message.contains("new.txt"));
    assert!(
        !out.is_empty(),
        "The root line is already written when the walk fails"
    );
    Ok(())
}

#[test]
fn test_unreadable_ignore_file_is_reported() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let root = temp_dir.path();
    std::fs::create_dir(root.join(".filetree.toml"))?;

    let mut out = Vec::new();
    let err = render(&Args::default(), root, &StubBlame::new(root), &mut out)
        .err()
        .ok_or_else(|| anyhow::anyhow!("expected render to fail"))?;

    assert!(format!("{err:#}").starts_with("Error loading ignore patterns: error loading .filetree.toml"));
    assert!(out.is_empty());
    Ok(())
}

#[test]
fn test_render_is_idempotent() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let root = temp_dir.path();
    for name in ["b.rs", "a.rs", "docs/guide.md", "docs/api/index.md"] {
        create_test_file(root, name, "")?;
    }
    let source = StubBlame::new(root)
        .file("a.rs", &[("p@x", 1), ("q@x", 1)])
        .file("b.rs", &[("q@x", 4)])
        .file("docs/guide.md", &[("r@x", 2), ("p@x", 2)])
        .file("docs/api/index.md", &[("p@x", 9)]);

    for files in [true, false] {
        let first = render_to_string(files, root, &source)?;
        let second = render_to_string(files, root, &source)?;
        assert_eq!(first, second);
    }
    Ok(())
}
