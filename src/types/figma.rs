//! Figma file response types.
//!
//! These types mirror the subset of the `GET /v1/files/:key` payload the
//! reducer reads. Every field is optional and unknown fields are ignored;
//! geometry and text style records are kept as raw JSON and never inspected.
//! `type`, `name` and `characters` are read as raw JSON too, so a value of an
//! unexpected kind never fails the parse.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Body of a successful `GET /v1/files/:key` call.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FigmaFileResponse {
    /// File name as shown in the Figma UI
    #[serde(default)]
    pub name: Option<Value>,
    /// Root of the document tree
    #[serde(default)]
    pub document: Option<FigmaDocument>,
}

impl FigmaFileResponse {
    /// Parses a files-endpoint body of any nesting depth.
    ///
    /// serde_json's recursion limit is lifted and the stack grows on demand,
    /// so deeply nested layer trees parse instead of failing.
    pub fn from_json_str(body: &str) -> serde_json::Result<Self> {
        let mut de = serde_json::Deserializer::from_str(body);
        de.disable_recursion_limit();
        let file = Self::deserialize(serde_stacker::Deserializer::new(&mut de))?;
        de.end()?;
        Ok(file)
    }

    /// File name when it is a string.
    pub fn file_name(&self) -> Option<&str> {
        self.name.as_ref().and_then(Value::as_str)
    }

    /// Top-level children of the document, empty when either the document or
    /// its children list is missing.
    pub fn top_level_nodes(&self) -> &[FigmaNode] {
        self.document
            .as_ref()
            .and_then(|doc| doc.children.as_deref())
            .unwrap_or(&[])
    }
}

/// The DOCUMENT node; its children are the pages (canvases) of the file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FigmaDocument {
    #[serde(default)]
    pub children: Option<Vec<FigmaNode>>,
}

/// A single node of the Figma document tree.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaNode {
    /// Figma node type (FRAME, TEXT, RECTANGLE, etc.)
    #[serde(default, rename = "type")]
    pub node_type: Option<Value>,
    /// Node name in Figma, copied through as-is
    #[serde(default)]
    pub name: Option<Value>,
    /// Absolute position and size, passed through untouched
    #[serde(default)]
    pub absolute_bounding_box: Option<Value>,
    /// Child nodes in layer order; `None` when the node has no children field
    #[serde(default)]
    pub children: Option<Vec<FigmaNode>>,
    /// Text content (TEXT nodes), copied through as-is
    #[serde(default)]
    pub characters: Option<Value>,
    /// Font and formatting record (TEXT nodes), passed through untouched.
    /// An explicit `null` is kept as `Some(Value::Null)`.
    #[serde(default, deserialize_with = "present")]
    pub style: Option<Value>,
}

impl FigmaNode {
    /// The node type when it is a string; anything else counts as no type.
    pub fn type_str(&self) -> Option<&str> {
        self.node_type.as_ref().and_then(Value::as_str)
    }
}

// Tear down deep trees without recursing once per level.
impl Drop for FigmaNode {
    fn drop(&mut self) {
        let mut pending = self.children.take().unwrap_or_default();
        while let Some(mut node) = pending.pop() {
            if let Some(children) = node.children.take() {
                pending.extend(children);
            }
        }
    }
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
