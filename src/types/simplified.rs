//! Reduced tree types.
//!
//! A reduced tree holds two shapes: kept nodes (FRAME, COMPONENT, INSTANCE,
//! TEXT) carrying their identifying fields, and wrappers that only connect
//! kept descendants of a dropped ancestor. Both serialize untagged, so the
//! output JSON is distinguished purely by which keys are present.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

// Headroom kept below the stack limit, and size of each new segment, when a
// deep tree is serialized.
const STACK_RED_ZONE: usize = 64 * 1024;
const STACK_SEGMENT: usize = 2 * 1024 * 1024;

/// One entry of the reduced tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SimplifiedNode {
    Kept(KeptNode),
    Wrapper(WrapperNode),
}

impl SimplifiedNode {
    pub fn children(&self) -> &[SimplifiedNode] {
        match self {
            SimplifiedNode::Kept(node) => &node.children,
            SimplifiedNode::Wrapper(wrapper) => &wrapper.children,
        }
    }

    pub fn as_kept(&self) -> Option<&KeptNode> {
        match self {
            SimplifiedNode::Kept(node) => Some(node),
            SimplifiedNode::Wrapper(_) => None,
        }
    }

    pub fn is_wrapper(&self) -> bool {
        matches!(self, SimplifiedNode::Wrapper(_))
    }

    fn children_mut(&mut self) -> &mut Vec<SimplifiedNode> {
        match self {
            SimplifiedNode::Kept(node) => &mut node.children,
            SimplifiedNode::Wrapper(wrapper) => &mut wrapper.children,
        }
    }
}

// Tear down deep trees without recursing once per level.
impl Drop for SimplifiedNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(self.children_mut());
        while let Some(mut node) = pending.pop() {
            pending.append(node.children_mut());
        }
    }
}

#[allow(clippy::ptr_arg)]
fn serialize_children<S>(
    children: &Vec<SimplifiedNode>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT, || {
        children.serialize(serializer)
    })
}

/// A node whose type is one of the kept types.
///
/// Field order matters: it is the key order of the written file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeptNode {
    /// Copied through as-is; `null` when the source had no name.
    pub name: Option<Value>,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(rename = "absoluteBoundingBox")]
    pub absolute_bounding_box: Option<Value>,
    #[serde(serialize_with = "serialize_children")]
    pub children: Vec<SimplifiedNode>,
    /// Present only for TEXT nodes.
    #[serde(flatten)]
    pub text: Option<TextContent>,
}

impl KeptNode {
    /// The name when it is a string.
    pub fn name_str(&self) -> Option<&str> {
        self.name.as_ref().and_then(Value::as_str)
    }
}

/// Text payload of a kept TEXT node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextContent {
    /// Copied through as-is; `null` when the source had no characters.
    pub characters: Option<Value>,
    pub style: Value,
}

impl TextContent {
    /// Builds the payload, defaulting a missing style to an empty record.
    pub fn new(characters: Option<Value>, style: Option<Value>) -> Self {
        Self {
            characters,
            style: style.unwrap_or_else(|| Value::Object(Map::new())),
        }
    }
}

/// Stand-in for a dropped node that still has kept descendants.
///
/// Never constructed with an empty `children` list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WrapperNode {
    #[serde(serialize_with = "serialize_children")]
    pub children: Vec<SimplifiedNode>,
}
