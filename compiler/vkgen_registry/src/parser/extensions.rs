//! Extensions pass: first extension listing a command owns it.

use roxmltree::Node;
use vkgen_ir::ExtensionSymbol;

use super::{children_named, RegistryParser};

impl RegistryParser<'_> {
    /// Record extensions and claim command ownership.
    ///
    /// Guard: a command keeps the first extension that lists it. The latest
    /// `feature` attribute seen on the extension's `<require>` blocks (this
    /// one or an earlier one) is written as the command's core version, and
    /// only when ownership was won here.
    #[tracing::instrument(level = "debug", skip_all)]
    pub(super) fn extensions_pass(&mut self, root: Node<'_, '_>) {
        let options = self.options;
        for extensions in children_named(root, "extensions", options) {
            for extension in children_named(extensions, "extension", options) {
                let Some(ext_name) = extension.attribute("name") else {
                    tracing::debug!("skipping unnamed <extension>");
                    continue;
                };
                if !self.builder.declare_extension(ExtensionSymbol::new(ext_name)) {
                    tracing::debug!(extension = ext_name, "extension declared twice");
                }

                // Sticky for the rest of this extension once a block names it.
                let mut promoted_in = None;
                for require in children_named(extension, "require", options) {
                    if let Some(feature) = require.attribute("feature") {
                        promoted_in = Some(feature);
                    }
                    for command in children_named(require, "command", options) {
                        let Some(cmd_name) = command.attribute("name") else {
                            continue;
                        };
                        self.claim(cmd_name, ext_name, promoted_in);
                    }
                }
            }
        }
    }

    fn claim(&mut self, command: &str, extension: &str, promoted_in: Option<&str>) {
        if !self.builder.contains_function(command) {
            tracing::debug!(command, extension, "extension lists undeclared command");
            return;
        }
        if !self.builder.claim_extension(command, extension) {
            tracing::trace!(command, extension, "command already owned");
            return;
        }
        if let Some(version) = promoted_in {
            self.builder.set_core_version(command, version);
        }
    }
}
