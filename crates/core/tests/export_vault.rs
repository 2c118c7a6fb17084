use std::fs;
use std::path::Path;
use tempfile::tempdir;
use vaultpress_core::ErrorKind;
use vaultpress_core::export::{ExportOptions, Exporter};
use vaultpress_core::vault::{NoteRepository, inject_backlinks};

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn two_note_vault_gets_backlinks_heading() {
    let vault = tempdir().unwrap();
    write(vault.path(), "A.md", "");
    write(vault.path(), "B.md", "[[A|See A]]");

    let out = tempdir().unwrap();
    let options = ExportOptions {
        extra_folders: vec![".".into()],
        out_dir: Some(out.path().to_path_buf()),
        ..ExportOptions::new(vault.path())
    };

    let report = Exporter::new(options).run().expect("export ok");
    assert_eq!(report.notes, 2);
    assert_eq!(report.pages_written, 2);
    assert_eq!(report.backlinks, 1);

    let a = fs::read_to_string(out.path().join("A.html")).unwrap();
    assert!(a.contains("Backlinks</h2>"), "missing heading in {a}");
    assert!(a.contains("<a href=\"b\">B</a>"), "missing backlink in {a}");

    let b = fs::read_to_string(out.path().join("B.html")).unwrap();
    assert!(b.contains("<a href=\"a\">See A</a>"));
    assert!(!b.contains("Backlinks"));
}

#[test]
fn nested_notes_and_assets_are_mirrored() {
    let vault = tempdir().unwrap();
    write(vault.path(), "Projects/Plan.md", "# Plan\n\n![logo](../img/logo.png)");
    write(vault.path(), "Journal/Monday.md", "Worked on [[Projects/Plan#Plan|the plan]] #work");
    write(vault.path(), "img/logo.png", "not really a png");
    write(vault.path(), "README.md", "root notes are not exported by default");

    let report = Exporter::new(ExportOptions::new(vault.path())).run().expect("export ok");

    let out = vault.path().join("html");
    assert_eq!(report.out_dir, out);
    assert_eq!(report.notes, 2);
    assert_eq!(report.assets_copied, 1);
    assert!(!out.join("README.html").exists());
    assert_eq!(fs::read_to_string(out.join("img/logo.png")).unwrap(), "not really a png");

    let monday = fs::read_to_string(out.join("Journal/Monday.html")).unwrap();
    assert!(monday.contains("<a href=\"projects/plan#plan\">the plan</a>"));
    assert!(monday.contains("<span class=\"tag\">work</span>"));

    let plan = fs::read_to_string(out.join("Projects/Plan.html")).unwrap();
    assert!(plan.contains("<a href=\"journal/monday\">Journal/Monday</a>"));
}

#[test]
fn second_run_does_not_copy_output_into_itself() {
    let vault = tempdir().unwrap();
    write(vault.path(), "notes/A.md", "a");
    write(vault.path(), "notes/pic.jpg", "jpg");

    Exporter::new(ExportOptions::new(vault.path())).run().expect("first run");
    let report = Exporter::new(ExportOptions::new(vault.path())).run().expect("second run");

    assert_eq!(report.assets_copied, 1);
    assert!(!vault.path().join("html/html").exists());
}

#[test]
fn template_wraps_pages() {
    let vault = tempdir().unwrap();
    write(vault.path(), "notes/Home.md", "Hello");
    write(
        vault.path(),
        "site/page.html",
        "<html><style>p {{ margin: 0 }}</style><title>{title}</title>{content}</html>",
    );

    let out = tempdir().unwrap();
    let options = ExportOptions {
        html_template: Some(vault.path().join("site/page.html")),
        out_dir: Some(out.path().to_path_buf()),
        ..ExportOptions::new(vault.path())
    };
    Exporter::new(options).run().expect("export ok");

    let home = fs::read_to_string(out.path().join("notes/Home.html")).unwrap();
    assert!(home.starts_with(
        "<html><style>p { margin: 0 }</style><title>notes/Home</title><div id=\"content\">"
    ));
    assert!(home.contains("<p>Hello</p>"));
    assert!(home.ends_with("</div></html>"));
}

#[test]
fn missing_template_aborts_before_output() {
    let vault = tempdir().unwrap();
    write(vault.path(), "notes/A.md", "a");
    let out = vault.path().join("public");

    let options = ExportOptions {
        html_template: Some(vault.path().join("missing.html")),
        out_dir: Some(out.clone()),
        ..ExportOptions::new(vault.path())
    };
    let err = Exporter::new(options).run().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().contains("missing.html"));
    assert!(!out.exists());
}

#[test]
fn missing_extra_folder_aborts_before_output() {
    let vault = tempdir().unwrap();
    write(vault.path(), "notes/A.md", "a");

    let options =
        ExportOptions { extra_folders: vec!["nope".into()], ..ExportOptions::new(vault.path()) };
    let err = Exporter::new(options).run().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(!vault.path().join("html").exists());
}

#[test]
fn missing_vault_root_is_not_found() {
    let err = Exporter::new(ExportOptions::new("/definitely/not/a/vault")).run().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn unreferenced_notes_are_unchanged_by_backlinks() {
    let vault = tempdir().unwrap();
    write(vault.path(), "n/A.md", "alpha [[B]]");
    write(vault.path(), "n/B.md", "beta");

    let repo = NoteRepository::discover(vault.path(), &[]).unwrap();
    let updated = inject_backlinks(&repo);

    for (before, after) in repo.iter().zip(updated.iter()) {
        assert_eq!(before, after);
    }
}

#[test]
fn dot_folders_are_exported_like_any_other() {
    let vault = tempdir().unwrap();
    write(vault.path(), "notes/A.md", "![pic](.assets/pic.png)");
    write(vault.path(), "notes/.assets/pic.png", "png bytes");
    write(vault.path(), ".trash/old/B.md", "[[notes/A|old link]]");

    let out = tempdir().unwrap();
    let options =
        ExportOptions { out_dir: Some(out.path().to_path_buf()), ..ExportOptions::new(vault.path()) };
    let report = Exporter::new(options).run().expect("export ok");

    assert_eq!(report.notes, 2);
    assert_eq!(report.assets_copied, 1);
    assert_eq!(fs::read_to_string(out.path().join("notes/.assets/pic.png")).unwrap(), "png bytes");
    assert!(out.path().join(".trash/old/B.html").exists());
}

#[test]
fn excluded_dot_folder_is_skipped() {
    let vault = tempdir().unwrap();
    write(vault.path(), "notes/A.md", "a");
    write(vault.path(), ".obsidian/workspace.json", "{}");
    write(vault.path(), ".obsidian/snippets/x.md", "x");

    let out = tempdir().unwrap();
    let options = ExportOptions {
        out_dir: Some(out.path().to_path_buf()),
        excluded_folders: vec![".obsidian".into()],
        ..ExportOptions::new(vault.path())
    };
    let report = Exporter::new(options).run().expect("export ok");

    assert_eq!(report.notes, 1);
    assert_eq!(report.assets_copied, 0);
    assert!(!out.path().join(".obsidian").exists());
}

#[test]
fn unwritable_page_is_an_io_error_naming_the_page() {
    let vault = tempdir().unwrap();
    write(vault.path(), "notes/A.md", "a");

    let out = tempdir().unwrap();
    // A directory where the page file should go.
    fs::create_dir_all(out.path().join("notes/A.html")).unwrap();

    let options =
        ExportOptions { out_dir: Some(out.path().to_path_buf()), ..ExportOptions::new(vault.path()) };
    let err = Exporter::new(options).run().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(err.to_string().contains("A.html"), "unexpected message: {err}");
}

#[test]
fn non_utf8_template_is_an_encoding_error() {
    let vault = tempdir().unwrap();
    write(vault.path(), "notes/A.md", "a");
    fs::write(vault.path().join("page.html"), b"<p>\xff{content}</p>").unwrap();

    let options = ExportOptions {
        html_template: Some(vault.path().join("page.html")),
        ..ExportOptions::new(vault.path())
    };
    let err = Exporter::new(options).run().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Encoding);
    assert!(err.to_string().contains("page.html"));
    assert!(!vault.path().join("html").exists());
}
