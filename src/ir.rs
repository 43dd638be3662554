// Renderer-facing model. No serde_json::Value here.
use serde::Serialize;

/// Type name given to inline `object` schemas (untyped dictionary semantics).
pub const OBJECT_MARKER: &str = "Object";
/// Item type of an array whose `items` could not be resolved.
pub const ANY_OBJECT_MARKER: &str = "AnyObject";
/// Sentinel for properties whose type could not be resolved.
pub const UNKNOWN_TYPE: &str = "Any";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    pub is_array: bool,
    /// names another generated model
    pub is_reference: bool,
    pub type_name: String,
}

impl TypeDescriptor {
    pub fn primitive(type_name: impl Into<String>) -> Self {
        Self { is_array: false, is_reference: false, type_name: type_name.into() }
    }
    pub fn reference(type_name: impl Into<String>) -> Self {
        Self { is_array: false, is_reference: true, type_name: type_name.into() }
    }
    pub fn object_marker() -> Self { Self::primitive(OBJECT_MARKER) }
    pub fn unknown() -> Self { Self::primitive(UNKNOWN_TYPE) }

    /// Wrap as array-of-`item`; a missing item type degrades to `AnyObject`.
    pub fn array_of(item: Option<TypeDescriptor>) -> Self {
        match item {
            Some(item) => Self { is_array: true, ..item },
            None => Self { is_array: true, is_reference: false, type_name: ANY_OBJECT_MARKER.into() },
        }
    }

    pub fn is_object_marker(&self) -> bool {
        !self.is_reference && !self.is_array && self.type_name == OBJECT_MARKER
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
    pub key: String,
    #[serde(flatten)]
    pub ty: TypeDescriptor,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    pub model_name: String,
    pub properties: Vec<PropertyDescriptor>,   // schema declaration order
    pub extends_list: Vec<String>,
    pub has_super_class: bool,
    pub is_struct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<Header>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub project_name: String,
    pub author: String,
    pub now: String,          // dd/mm/yy
    pub copyright: String,    // "<year> <company>"
}
