//! Features pass: core versions overwrite, last one wins.

use roxmltree::Node;

use super::{children_named, RegistryParser};

impl RegistryParser<'_> {
    /// Stamp every listed command with the feature's version name.
    ///
    /// No first-wins guard: features appear in ascending version order, so a
    /// command ends up tagged with the highest version that lists it. This
    /// also replaces any version written by the extensions pass. Only
    /// `<require>` blocks are read; `<remove>` entries keep their version.
    #[tracing::instrument(level = "debug", skip_all)]
    pub(super) fn features_pass(&mut self, root: Node<'_, '_>) {
        let options = self.options;
        for feature in children_named(root, "feature", options) {
            let Some(version) = feature.attribute("name") else {
                tracing::debug!("skipping unnamed <feature>");
                continue;
            };
            for require in children_named(feature, "require", options) {
                for command in children_named(require, "command", options) {
                    let Some(cmd_name) = command.attribute("name") else {
                        continue;
                    };
                    if !self.builder.set_core_version(cmd_name, version) {
                        tracing::debug!(command = cmd_name, version, "feature lists undeclared command");
                    }
                }
            }
        }
    }
}
