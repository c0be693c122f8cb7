//! Integration tests for booklet assembly and PDF output.

use std::fs;
use std::path::Path;

use gtmkit::render::PAGE_BREAK_MARKER;
use gtmkit::{
    build, build_gtm_kit, Assembler, BookletOptions, DocumentPlan, Error, Flowable,
    RenderOptions, StyleName, GTM_KIT_FILES,
};
use tempfile::TempDir;

fn write_docs(dir: &Path, files: &[(&str, &str)]) -> DocumentPlan {
    for (name, body) in files {
        fs::write(dir.join(name), body).unwrap();
    }
    DocumentPlan::new(dir, files.iter().map(|(name, _)| *name))
}

fn uncompressed() -> BookletOptions {
    BookletOptions::default().with_render_options(
        RenderOptions::new()
            .with_title("Test Kit")
            .with_creation_date(None)
            .with_compression(false),
    )
}

fn three_docs(dir: &Path) -> DocumentPlan {
    write_docs(
        dir,
        &[
            ("c.md", "# Gamma\n\nThird document."),
            ("a.md", "# Alpha\n\nFirst document."),
            ("b.md", "intro line\n## Beta\n- point"),
        ],
    )
}

#[test]
fn test_toc_lists_titles_in_plan_order() {
    let dir = TempDir::new().unwrap();
    let plan = three_docs(dir.path());

    let flowables = Assembler::new(plan, BookletOptions::default())
        .assemble()
        .unwrap();

    let toc_start = flowables
        .iter()
        .position(|f| *f == Flowable::paragraph("Table of Contents", StyleName::Heading1))
        .unwrap();
    assert_eq!(
        &flowables[toc_start + 1..toc_start + 5],
        &[
            Flowable::paragraph("1. Gamma", StyleName::Body),
            Flowable::paragraph("2. Alpha", StyleName::Body),
            Flowable::paragraph("3. Beta", StyleName::Body),
            Flowable::PageBreak,
        ]
    );
}

#[test]
fn test_sections_follow_plan_order() {
    let dir = TempDir::new().unwrap();
    let plan = three_docs(dir.path());

    let text = gtmkit::to_text(plan, BookletOptions::default()).unwrap();
    let pages: Vec<&str> = text.split(PAGE_BREAK_MARKER).collect();

    // cover, contents, three sections, trailing break
    assert_eq!(pages.len(), 6);
    assert!(pages[0].contains("AER Go-To-Market Execution Kit"));
    assert!(pages[2].trim_start().starts_with("Gamma"));
    assert!(pages[3].trim_start().starts_with("Alpha"));
    assert!(pages[4].trim_start().starts_with("Beta"));
    assert!(pages[4].contains("* point"));
}

#[test]
fn test_build_writes_pdf() {
    let dir = TempDir::new().unwrap();
    let plan = three_docs(dir.path());
    let output = dir.path().join("out").join("kit.pdf");

    let report = build(plan, &output, uncompressed()).unwrap();
    assert_eq!(report.output, output);
    assert_eq!(report.titles, vec!["Gamma", "Alpha", "Beta"]);
    assert_eq!(report.page_count, 5);

    let bytes = fs::read(&output).unwrap();
    assert_eq!(bytes.len(), report.bytes_written);
    assert!(bytes.starts_with(b"%PDF-"));

    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 5);
    assert!(doc.catalog().unwrap().get(b"Outlines").is_ok());

    let raw = String::from_utf8_lossy(&bytes);
    assert!(raw.contains("(Table of Contents) Tj"));
    assert!(raw.contains("(1. Gamma) Tj"));
}

#[test]
fn test_build_overwrites_existing_output() {
    let dir = TempDir::new().unwrap();
    let plan = write_docs(dir.path(), &[("one.md", "# One")]);
    let output = dir.path().join("kit.pdf");
    fs::write(&output, b"stale").unwrap();

    build(plan, &output, uncompressed()).unwrap();

    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_build_is_reproducible_with_fixed_date() {
    let dir = TempDir::new().unwrap();
    let plan = write_docs(dir.path(), &[("one.md", "# One\n\n```\nlet x = 1;\n```")]);

    let first = dir.path().join("first.pdf");
    let second = dir.path().join("second.pdf");
    build(plan.clone(), &first, uncompressed()).unwrap();
    build(plan, &second, uncompressed()).unwrap();

    assert_eq!(fs::read(first).unwrap(), fs::read(second).unwrap());
}

#[test]
fn test_missing_source_aborts_without_output() {
    let dir = TempDir::new().unwrap();
    let plan = write_docs(dir.path(), &[("present.md", "# Present")]);
    let plan = DocumentPlan::new(plan.docs_dir, ["present.md", "absent.md"]);
    let output = dir.path().join("out").join("kit.pdf");

    let err = build(plan, &output, BookletOptions::default()).unwrap_err();
    match err {
        Error::Read { path, .. } => assert!(path.ends_with("absent.md")),
        other => panic!("Expected Read error, got {:?}", other),
    }
    assert!(!output.exists());
}

#[test]
fn test_gtm_kit_layout() {
    let dir = TempDir::new().unwrap();
    let docs = dir.path().join("docs").join("go-to-market");
    fs::create_dir_all(&docs).unwrap();
    for name in GTM_KIT_FILES {
        let stem = name.trim_end_matches(".md");
        fs::write(docs.join(name), format!("# {}\n\nBody of {}.", stem, stem)).unwrap();
    }

    let report = build_gtm_kit(dir.path()).unwrap();
    assert_eq!(
        report.output,
        docs.join("out").join("AER_GTM_Kit.pdf")
    );
    assert!(report.output.exists());
    assert_eq!(report.titles.len(), 13);
    assert_eq!(report.titles[0], "README");
    assert_eq!(report.page_count, 15);
}

#[test]
fn test_special_characters_are_escaped() {
    let dir = TempDir::new().unwrap();
    let plan = write_docs(dir.path(), &[("amp.md", "# R&D <beta>\n\nUse `a<b` & more")]);

    let flowables = Assembler::new(plan.clone(), BookletOptions::default())
        .assemble()
        .unwrap();
    assert!(flowables.contains(&Flowable::paragraph(
        "1. R&amp;D &lt;beta&gt;",
        StyleName::Body
    )));
    assert!(flowables.contains(&Flowable::paragraph(
        "Use <font face=\"Courier\">a&lt;b</font> &amp; more",
        StyleName::Body
    )));

    let text = gtmkit::to_text(plan, BookletOptions::default()).unwrap();
    assert!(text.contains("R&D <beta>"));
    assert!(text.contains("Use a<b & more"));
}

#[test]
fn test_unterminated_fence_is_kept() {
    let dir = TempDir::new().unwrap();
    let plan = write_docs(dir.path(), &[("code.md", "# Code\n```\nraw <text>\n  indented")]);

    let flowables = Assembler::new(plan, BookletOptions::default())
        .assemble()
        .unwrap();
    assert!(flowables.contains(&Flowable::Preformatted {
        text: "raw <text>\n  indented".to_string(),
        style: StyleName::Code,
    }));
}

#[test]
fn test_empty_document_still_gets_section() {
    let dir = TempDir::new().unwrap();
    let plan = write_docs(dir.path(), &[("EMPTY.md", "")]);
    let output = dir.path().join("kit.pdf");

    let report = build(plan, &output, uncompressed()).unwrap();
    assert_eq!(report.titles, vec!["EMPTY"]);
    assert_eq!(report.page_count, 3);
}
