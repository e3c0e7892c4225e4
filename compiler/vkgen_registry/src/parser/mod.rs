//! Three-pass registry walker.

mod commands;
mod extensions;
mod features;

use roxmltree::{Document, Node};
use vkgen_ir::{SymbolTable, SymbolTableBuilder};

use crate::{ParseOptions, SchemaError};

/// Parse a registry document into a resolved symbol table.
///
/// The passes run in a fixed order (commands, extensions, features); see the
/// crate documentation for the guard rules of each.
#[tracing::instrument(level = "debug", skip_all, fields(api = %options.api, bytes = source.len()))]
pub fn parse_registry(source: &str, options: &ParseOptions) -> Result<SymbolTable, SchemaError> {
    let document = Document::parse(source)?;
    let root = document.root_element();
    if !root.has_tag_name("registry") {
        return Err(SchemaError::UnexpectedRoot {
            found: root.tag_name().name().to_string(),
        });
    }

    let mut parser = RegistryParser::new(options);
    parser.commands_pass(root)?;
    parser.extensions_pass(root);
    parser.features_pass(root);

    let table = parser.finish();
    tracing::debug!(
        functions = table.len(),
        extensions = table.extensions().count(),
        "registry parsed"
    );
    Ok(table)
}

/// Parser state shared by the three passes.
pub(crate) struct RegistryParser<'a> {
    options: &'a ParseOptions,
    builder: SymbolTableBuilder,
}

impl<'a> RegistryParser<'a> {
    fn new(options: &'a ParseOptions) -> Self {
        Self {
            options,
            builder: SymbolTableBuilder::new(),
        }
    }

    fn finish(self) -> SymbolTable {
        self.builder.finish()
    }
}

/// Element children of `parent` named `tag` that apply to the target API.
fn children_named<'d, 'input>(
    parent: Node<'d, 'input>,
    tag: &str,
    options: &ParseOptions,
) -> Vec<Node<'d, 'input>> {
    parent
        .children()
        .filter(|node| node.has_tag_name(tag) && options.applies_to(*node))
        .collect()
}

/// 1-based line of the start of `node`.
fn line_of(node: Node<'_, '_>) -> u32 {
    node.document().text_pos_at(node.range().start).row
}

/// Require an attribute on `node`.
fn required_attribute<'d>(
    node: Node<'d, '_>,
    element: &'static str,
    attribute: &'static str,
) -> Result<&'d str, SchemaError> {
    node.attribute(attribute)
        .ok_or_else(|| SchemaError::MissingAttribute {
            element,
            attribute,
            line: line_of(node),
        })
}

/// Require a child element on `node`.
fn required_child<'d, 'input>(
    node: Node<'d, 'input>,
    element: &'static str,
    child: &'static str,
) -> Result<Node<'d, 'input>, SchemaError> {
    node.children()
        .find(|candidate| candidate.has_tag_name(child))
        .ok_or_else(|| SchemaError::MissingChild {
            element,
            child,
            line: line_of(node),
        })
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used, clippy::expect_used,
    reason = "tests can panic"
)]
