//! Static configuration lists.
//!
//! These lists are versioned independently of the registry. The defaults
//! match what the Android loader ships; a JSON file can replace any of them.
//!
//! ```json
//! {
//!     "blacklisted_extensions": ["VK_KHR_win32_surface"],
//!     "exported_extensions": ["VK_KHR_surface", "VK_KHR_swapchain"],
//!     "optional_commands": ["vkGetSwapchainGrallocUsage2ANDROID"]
//! }
//! ```

use std::fmt;

use serde::Deserialize;
use vkgen_ir::SymbolTable;

const BLACKLISTED_EXTENSIONS: &[&str] = &[
    "VK_EXT_acquire_xlib_display",
    "VK_EXT_direct_mode_display",
    "VK_EXT_display_control",
    "VK_EXT_display_surface_counter",
    "VK_EXT_full_screen_exclusive",
    "VK_EXT_headless_surface",
    "VK_EXT_metal_surface",
    "VK_FUCHSIA_imagepipe_surface",
    "VK_GGP_stream_descriptor_surface",
    "VK_KHR_display",
    "VK_KHR_display_swapchain",
    "VK_KHR_external_fence_win32",
    "VK_KHR_external_memory_win32",
    "VK_KHR_external_semaphore_win32",
    "VK_KHR_mir_surface",
    "VK_KHR_wayland_surface",
    "VK_KHR_win32_keyed_mutex",
    "VK_KHR_win32_surface",
    "VK_KHR_xcb_surface",
    "VK_KHR_xlib_surface",
    "VK_MVK_ios_surface",
    "VK_MVK_macos_surface",
    "VK_NN_vi_surface",
    "VK_NV_cooperative_matrix",
    "VK_NV_coverage_reduction_mode",
    "VK_NV_external_memory_win32",
    "VK_NV_win32_keyed_mutex",
    "VK_NVX_image_view_handle",
];

const EXPORTED_EXTENSIONS: &[&str] = &[
    "VK_ANDROID_external_memory_android_hardware_buffer",
    "VK_KHR_android_surface",
    "VK_KHR_surface",
    "VK_KHR_swapchain",
];

const OPTIONAL_COMMANDS: &[&str] = &[
    "vkGetSwapchainGrallocUsageANDROID",
    "vkGetSwapchainGrallocUsage2ANDROID",
];

/// Allow/deny lists consulted by the classifier.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DispatchConfig {
    /// Extensions whose functions never appear in any dispatch table.
    pub blacklisted_extensions: Vec<String>,

    /// Extensions whose functions the loader re-exports.
    pub exported_extensions: Vec<String>,

    /// Functions that may fail to resolve regardless of version.
    pub optional_commands: Vec<String>,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        fn owned(names: &[&str]) -> Vec<String> {
            names.iter().map(|name| (*name).to_string()).collect()
        }
        Self {
            blacklisted_extensions: owned(BLACKLISTED_EXTENSIONS),
            exported_extensions: owned(EXPORTED_EXTENSIONS),
            optional_commands: owned(OPTIONAL_COMMANDS),
        }
    }
}

impl DispatchConfig {
    /// Configuration with all three lists empty.
    pub fn empty() -> Self {
        Self {
            blacklisted_extensions: Vec::new(),
            exported_extensions: Vec::new(),
            optional_commands: Vec::new(),
        }
    }

    /// Parse a JSON override. Missing keys keep their default lists.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Report list entries that name nothing in `table`.
    ///
    /// Lists are allowed to be broader than any one registry revision, so
    /// these are warnings for the caller to log, never errors.
    pub fn validate(&self, table: &SymbolTable) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        for (list, names) in [
            (ConfigList::BlacklistedExtensions, &self.blacklisted_extensions),
            (ConfigList::ExportedExtensions, &self.exported_extensions),
        ] {
            warnings.extend(
                names
                    .iter()
                    .filter(|name| !table.contains_extension(name))
                    .map(|name| ConfigWarning {
                        list,
                        name: name.clone(),
                    }),
            );
        }
        warnings.extend(
            self.optional_commands
                .iter()
                .filter(|name| !table.contains_function(name))
                .map(|name| ConfigWarning {
                    list: ConfigList::OptionalCommands,
                    name: name.clone(),
                }),
        );
        warnings
    }
}

/// Which configuration list an entry came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigList {
    BlacklistedExtensions,
    ExportedExtensions,
    OptionalCommands,
}

impl ConfigList {
    pub fn key(self) -> &'static str {
        match self {
            ConfigList::BlacklistedExtensions => "blacklisted_extensions",
            ConfigList::ExportedExtensions => "exported_extensions",
            ConfigList::OptionalCommands => "optional_commands",
        }
    }
}

/// A configuration entry that does not resolve against the loaded table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigWarning {
    pub list: ConfigList,
    pub name: String,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.list {
            ConfigList::OptionalCommands => "command",
            ConfigList::BlacklistedExtensions | ConfigList::ExportedExtensions => "extension",
        };
        write!(
            f,
            "`{}` lists unknown {kind} `{}`",
            self.list.key(),
            self.name
        )
    }
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests use expect for concise assertions"
)]
