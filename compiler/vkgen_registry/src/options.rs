//! Parser configuration.

use roxmltree::Node;

/// API variant the registry is read for.
pub const DEFAULT_API: &str = "vulkan";

/// Options controlling which parts of the registry are read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Target API name.
    ///
    /// Elements carrying an `api` attribute (comma-separated list) are only
    /// read when the list names this API. Elements without one always apply.
    pub api: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            api: DEFAULT_API.to_string(),
        }
    }
}

impl ParseOptions {
    pub fn with_api(api: impl Into<String>) -> Self {
        Self { api: api.into() }
    }

    pub(crate) fn applies_to(&self, node: Node<'_, '_>) -> bool {
        match node.attribute("api") {
            Some(apis) => apis.split(',').any(|api| api.trim() == self.api),
            None => true,
        }
    }
}
