use super::{render, render_html, render_outline, to_json, NodeView, OutputFormat};
use crate::sectionize::{sectionize_levels, Options};
use crate::tree::{Document, Tag};

fn nested() -> Document {
    let mut doc = Document::new();
    let root = doc.root();
    let paragraph = || Tag::Block {
        kind: "paragraph".to_string(),
    };
    doc.push(root, Tag::Heading { level: 2 }, Some("A".into()))
        .unwrap();
    doc.push(root, paragraph(), Some("p & q".into())).unwrap();
    doc.push(root, Tag::Heading { level: 3 }, Some("B".into()))
        .unwrap();
    doc.push(root, paragraph(), Some("r".into())).unwrap();
    sectionize_levels(&mut doc, root, &[2, 3], &Options::default()).unwrap();
    doc
}

#[test]
fn test_html_nesting_and_escaping() {
    let doc = nested();
    let html = render_html(&doc, doc.root()).unwrap();

    let expected = "\
<div class=\"section\">
  <h2>A</h2>
  <div class=\"section-content\">
    <p>p &amp; q</p>
    <div class=\"section\">
      <h3>B</h3>
      <div class=\"section-content\">
        <p>r</p>
      </div>
    </div>
  </div>
</div>
";
    assert_eq!(html, expected);
}

#[test]
fn test_html_other_blocks() {
    let mut doc = Document::new();
    let root = doc.root();
    doc.push(
        root,
        Tag::Block {
            kind: "fenced_code_block".to_string(),
        },
        Some("<code>".into()),
    )
    .unwrap();
    doc.push(
        root,
        Tag::Block {
            kind: "list".to_string(),
        },
        Some("- x".into()),
    )
    .unwrap();
    doc.push(root, Tag::Heading { level: 9 }, Some("deep".into()))
        .unwrap();

    let html = render_html(&doc, root).unwrap();

    assert_eq!(
        html,
        "<pre>&lt;code&gt;</pre>\n<div data-kind=\"list\">- x</div>\n\
         <div role=\"heading\" aria-level=\"9\">deep</div>\n"
    );
}

#[test]
fn test_outline_box_drawing() {
    let doc = nested();
    let outline = render_outline(&doc, doc.root()).unwrap();

    let expected = "\
└── .section
    ├── h2 A
    └── .section-content
        ├── paragraph: p & q
        └── .section
            ├── h3 B
            └── .section-content
                └── paragraph: r
";
    assert_eq!(outline, expected);
}

#[test]
fn test_outline_truncates_long_blocks() {
    let mut doc = Document::new();
    let root = doc.root();
    doc.push(
        root,
        Tag::Block {
            kind: "paragraph".to_string(),
        },
        Some("x".repeat(60)),
    )
    .unwrap();

    let outline = render_outline(&doc, root).unwrap();

    assert_eq!(outline, format!("└── paragraph: {}…\n", "x".repeat(40)));
}

#[test]
fn test_json_round_trips_structure() {
    let doc = nested();
    let json = to_json(&doc, doc.root()).unwrap();

    let views: Vec<NodeView> = serde_json::from_str(&json).unwrap();

    assert_eq!(views.len(), 1);
    let section = &views[0];
    assert_eq!(section.tag, "container");
    assert_eq!(section.class.as_deref(), Some("section"));
    assert_eq!(section.children[0].level, Some(2));
    let content = &section.children[1];
    assert_eq!(content.class.as_deref(), Some("section-content"));
    assert_eq!(content.children[0].text.as_deref(), Some("p & q"));
    assert_eq!(content.children[1].children[0].text.as_deref(), Some("B"));
}

#[test]
fn test_render_dispatch() {
    let doc = nested();
    let root = doc.root();

    assert_eq!(
        render(&doc, root, OutputFormat::Html).unwrap(),
        render_html(&doc, root).unwrap()
    );
    assert_eq!(
        render(&doc, root, OutputFormat::Outline).unwrap(),
        render_outline(&doc, root).unwrap()
    );
    assert!(render(&doc, root, OutputFormat::Json)
        .unwrap()
        .starts_with('['));
}

#[test]
fn test_empty_document_renders_nothing() {
    let doc = Document::new();

    assert_eq!(render_html(&doc, doc.root()).unwrap(), "");
    assert_eq!(render_outline(&doc, doc.root()).unwrap(), "");
    assert_eq!(to_json(&doc, doc.root()).unwrap(), "[]");
}

#[test]
fn test_html_heading_levels_one_to_six() {
    let mut doc = Document::new();
    let root = doc.root();
    for level in 1..=7 {
        doc.push(root, Tag::Heading { level }, Some(format!("t{level}")))
            .unwrap();
    }

    let html = render_html(&doc, root).unwrap();
    let lines: Vec<&str> = html.lines().collect();

    assert_eq!(lines[0], "<h1>t1</h1>");
    assert_eq!(lines[5], "<h6>t6</h6>");
    assert_eq!(
        lines[6],
        "<div role=\"heading\" aria-level=\"7\">t7</div>"
    );
}
