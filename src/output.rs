//! Writing the reduced tree.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::types::SimplifiedNode;

/// Renders the reduced roots as a 2-space indented JSON array.
///
/// Non-ASCII text is emitted as-is rather than `\u` escaped.
pub fn render_simplified(roots: &[SimplifiedNode]) -> Result<String> {
    Ok(serde_json::to_string_pretty(roots)?)
}

/// Renders `roots` fully in memory, then writes the file in one go.
///
/// Missing parent directories are created.
pub fn write_simplified(path: &Path, roots: &[SimplifiedNode]) -> Result<()> {
    let content = render_simplified(roots)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{KeptNode, TextContent, WrapperNode};
    use serde_json::json;
    use tempfile::TempDir;

    fn text(characters: &str) -> SimplifiedNode {
        SimplifiedNode::Kept(KeptNode {
            name: Some("Label".into()),
            node_type: "TEXT".into(),
            absolute_bounding_box: None,
            children: vec![],
            text: Some(TextContent::new(
                Some(characters.into()),
                Some(json!({"fontSize": 14})),
            )),
        })
    }

    #[test]
    fn empty_output_is_bare_array() {
        assert_eq!(render_simplified(&[]).unwrap(), "[]");
    }

    #[test]
    fn uses_two_space_indent_and_declared_key_order() {
        let rendered = render_simplified(&[SimplifiedNode::Wrapper(WrapperNode {
            children: vec![text("Hi")],
        })])
        .unwrap();
        let expected = r#"[
  {
    "children": [
      {
        "name": "Label",
        "type": "TEXT",
        "absoluteBoundingBox": null,
        "children": [],
        "characters": "Hi",
        "style": {
          "fontSize": 14
        }
      }
    ]
  }
]"#;
        assert_eq!(rendered, expected);
    }

    #[test]
    fn non_ascii_is_written_literally() {
        let rendered = render_simplified(&[text("Grüße, 世界 👋")]).unwrap();
        assert!(rendered.contains("Grüße, 世界 👋"));
        assert!(!rendered.contains("\\u"));
    }

    #[test]
    fn writes_file_creating_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("out.json");
        write_simplified(&path, &[text("Hello")]).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("[\n  {"));
        assert!(written.contains("\"characters\": \"Hello\""));
    }
}
