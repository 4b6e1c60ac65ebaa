use std::io::Write;

use cnmdoc::renderer::RenderError;
use cnmdoc::text_exporter::TextExportError;
use cnmdoc::{manifest, text_exporter};

/// Write a manifest to a temporary file, load it, and render it as text.
fn browse(manifest_text: &str) -> Result<String, TextExportError> {
    let mut file = tempfile::NamedTempFile::new().expect("create temp manifest");
    file.write_all(manifest_text.as_bytes())
        .expect("write temp manifest");

    let document = manifest::load(file.path()).expect("load manifest");
    let mut out = Vec::new();
    text_exporter::write_document(&document, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn renders_metadata_then_content() {
    let text = browse(
        r#"
title = "Field Guide"

[sitemap]
path = "/guide"

[[sitemap.entries]]
path = "/guide/birds"

[[links]]
url = "https://example.org/atlas"
name = "atlas"
description = "companion atlas"

[content]
kind = "section"
name = "intro"
title = "Introduction"

[[content.children]]
kind = "text"
format = "plain"
paragraphs = ["Hello", "World"]
"#,
    )
    .unwrap();

    let expected = "Title:\tField Guide\n\
                    Sitemap:\n\
                    \t/guide\n\
                    \t\t/guide/birds\n\
                    Links:\n\
                    \tURL=https://example.org/atlas Name=atlas Description=companion atlas\n\
                    section: name=intro title=Introduction\n\
                    \x20 text: name= format=plain\n\
                    \x20   Hello\n\
                    \x20   World\n";
    assert_eq!(text, expected);
}

#[test]
fn omits_absent_sitemap_and_empty_links() {
    let text = browse(
        r#"
title = "Bare"

[content]
kind = "text"
format = "plain"
paragraphs = ["only body"]
"#,
    )
    .unwrap();

    assert_eq!(
        text,
        "Title:\tBare\ntext: name= format=plain\n  only body\n"
    );
}

#[test]
fn renders_every_container_kind_in_order() {
    let text = browse(
        r#"
title = "Kinds"

[content]
kind = "content"
name = "root"

[[content.children]]
kind = "table"
name = "measurements"
args = ["compact"]

[[content.children.children]]
kind = "header"

[[content.children.children.children]]
kind = "text"
format = "plain"
paragraphs = ["Species"]

[[content.children.children]]
kind = "row"

[[content.children.children.children]]
kind = "text"
format = "plain"
paragraphs = ["Swift"]

[[content.children]]
kind = "list"
name = "notes"
ordered = true

[[content.children.children]]
kind = "text"
format = "plain"
paragraphs = ["first note"]

[[content.children]]
kind = "embed"
name = "map"
url = "https://example.org/map.png"
description = "range map"
media_type = "image/png"

[[content.children]]
kind = "raw"
syntax = "sh"
text = "cnm fetch guide"
"#,
    )
    .unwrap();

    let expected = "Title:\tKinds\n\
                    content: name=root\n\
                    \x20 table: name=measurements args=[compact]\n\
                    \x20   header: name=\n\
                    \x20     text: name= format=plain\n\
                    \x20       Species\n\
                    \x20   row: name=\n\
                    \x20     text: name= format=plain\n\
                    \x20       Swift\n\
                    \x20 list: name=notes ordered=true\n\
                    \x20   text: name= format=plain\n\
                    \x20     first note\n\
                    \x20 embed: name=map url=https://example.org/map.png description=range map type=image/png\n\
                    \x20 raw: name= syntax=sh\n\
                    \x20   cnm fetch guide\n";
    assert_eq!(text, expected);
}

#[test]
fn browsing_twice_is_byte_identical() {
    let manifest_text = r#"
title = "Stable"

[content]
kind = "section"
title = "S"

[[content.children]]
kind = "text"
format = "preformatted"
preformatted = "  two\n   spaces"
"#;

    let first = browse(manifest_text).unwrap();
    let second = browse(manifest_text).unwrap();
    assert_eq!(first, second);
}

#[test]
fn unknown_kind_aborts_with_its_tag() {
    let err = browse(
        r#"
title = "Skewed"

[content]
kind = "section"
title = "S"

[[content.children]]
kind = "carousel"
name = "pics"
"#,
    )
    .unwrap_err();

    match err {
        TextExportError::Render(RenderError::UnknownBlockTag { tag }) => {
            assert_eq!(tag, "carousel");
        }
        other => panic!("expected unknown block tag error, got {:?}", other),
    }
}

#[test]
fn format_tag_disagreeing_with_contents_aborts() {
    let err = browse(
        r#"
title = "Mismatch"

[content]
kind = "text"
format = "preformatted"
paragraphs = ["not preformatted at all"]
"#,
    )
    .unwrap_err();

    match err {
        TextExportError::Render(RenderError::TextFormatMismatch { format, contents }) => {
            assert_eq!(format, "preformatted");
            assert_eq!(contents, "plain");
        }
        other => panic!("expected format mismatch error, got {:?}", other),
    }
}
