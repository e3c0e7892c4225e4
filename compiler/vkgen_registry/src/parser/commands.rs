//! Commands pass: declares every function and resolves aliases.

use roxmltree::Node;
use vkgen_ir::{FunctionSymbol, ParameterDescriptor};

use super::{children_named, line_of, required_attribute, required_child, RegistryParser};
use crate::SchemaError;

impl RegistryParser<'_> {
    /// Declare every `<commands>/<command>` in document order.
    ///
    /// Single forward pass: an alias must name a command declared earlier.
    #[tracing::instrument(level = "debug", skip_all)]
    pub(super) fn commands_pass(&mut self, root: Node<'_, '_>) -> Result<(), SchemaError> {
        let options = self.options;
        for commands in children_named(root, "commands", options) {
            for command in children_named(commands, "command", options) {
                let symbol = self.read_command(command)?;
                let name = symbol.name.clone();
                if !self.builder.declare_function(symbol) {
                    return Err(SchemaError::DuplicateCommand {
                        name,
                        line: line_of(command),
                    });
                }
            }
        }
        Ok(())
    }

    fn read_command(&self, command: Node<'_, '_>) -> Result<FunctionSymbol, SchemaError> {
        if let Some(target) = command.attribute("alias") {
            let name = required_attribute(command, "command", "name")?;
            let Some(target_symbol) = self.builder.function(target) else {
                return Err(SchemaError::UnresolvedAlias {
                    name: name.to_string(),
                    target: target.to_string(),
                    line: line_of(command),
                });
            };
            tracing::trace!(name, target, "alias resolved");
            return Ok(FunctionSymbol::alias(name, target_symbol));
        }

        let Some(proto) = command.children().find(|node| node.has_tag_name("proto")) else {
            return Err(SchemaError::MissingProto {
                line: line_of(command),
            });
        };
        let return_type = type_text(required_child(proto, "proto", "type")?);
        let name = element_text(required_child(proto, "proto", "name")?);

        let params = children_named(command, "param", self.options)
            .into_iter()
            .map(read_param)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FunctionSymbol::new(name, return_type, params))
    }
}

/// Read one `<param>`.
///
/// `<param>const <type>VkFoo</type>* <name>pFoo</name>[4]</param>` becomes
/// type `const VkFoo*`, name `pFoo`, qualifier `[4]`.
fn read_param(param: Node<'_, '_>) -> Result<ParameterDescriptor, SchemaError> {
    let ty_node = required_child(param, "param", "type")?;
    let name_node = required_child(param, "param", "name")?;

    let leading = leading_text(param);
    let ty = if leading.is_empty() {
        type_text(ty_node)
    } else {
        format!("{leading} {}", type_text(ty_node))
    };

    let mut descriptor = ParameterDescriptor::new(ty, element_text(name_node));
    let trailing = trailing_text(name_node);
    if !trailing.is_empty() {
        descriptor = descriptor.with_qualifier(trailing);
    }
    Ok(descriptor)
}

/// Type name plus the pointer/const text directly after `<type>`.
fn type_text(ty: Node<'_, '_>) -> String {
    let base = element_text(ty);
    match ty.tail().map(str::trim) {
        Some(tail) if !tail.is_empty() => format!("{base}{tail}"),
        _ => base,
    }
}

fn element_text(node: Node<'_, '_>) -> String {
    node.text().map(str::trim).unwrap_or_default().to_string()
}

/// Text before the first child element (`const` in `const <type>..`).
fn leading_text(param: Node<'_, '_>) -> String {
    param
        .first_child()
        .filter(Node::is_text)
        .and_then(|node| node.text())
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

/// Everything after `<name>`, including nested elements such as
/// `[<enum>VK_UUID_SIZE</enum>]`.
fn trailing_text(name: Node<'_, '_>) -> String {
    let mut text = String::new();
    let mut next = name.next_sibling();
    while let Some(sibling) = next {
        for node in sibling.descendants().filter(Node::is_text) {
            text.push_str(node.text().unwrap_or_default());
        }
        next = sibling.next_sibling();
    }
    text.trim().to_string()
}
