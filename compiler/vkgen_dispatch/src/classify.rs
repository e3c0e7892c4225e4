//! Dispatch predicates over a resolved symbol table.

use rustc_hash::FxHashSet;
use vkgen_ir::{FunctionSymbol, ParameterDescriptor, SymbolTable};

use crate::DispatchConfig;

/// Legacy function kept out of the instance dispatch table.
///
/// Deprecated in favour of instance layer enumeration and never called by
/// the loader itself. Removed by name only; this is not a general rule.
pub const LEGACY_INSTANCE_EXCLUSION: &str = "vkEnumerateDeviceLayerProperties";

/// Core version whose functions may be missing on 1.0 implementations.
pub const OPTIONAL_CORE_VERSION: &str = "VK_VERSION_1_1";

/// Dispatch table a function is looked up through.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DispatchKind {
    /// No dispatchable handle available; resolved through the global table.
    Global,
    /// Dispatched through a `VkInstance`-derived handle.
    Instance,
    /// Dispatched through a `VkDevice`-derived handle.
    Device,
}

impl DispatchKind {
    /// Classify by the type of the first parameter only.
    pub fn of_first_param_type(ty: Option<&str>) -> Self {
        ty.and_then(HandleType::from_type_name)
            .map_or(DispatchKind::Global, HandleType::dispatch_kind)
    }

    pub fn of_params(params: &[ParameterDescriptor]) -> Self {
        Self::of_first_param_type(params.first().map(|param| param.ty.as_str()))
    }
}

/// Dispatchable handle types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HandleType {
    Instance,
    PhysicalDevice,
    Device,
    Queue,
    CommandBuffer,
}

impl HandleType {
    pub const ALL: [HandleType; 5] = [
        HandleType::Instance,
        HandleType::PhysicalDevice,
        HandleType::Device,
        HandleType::Queue,
        HandleType::CommandBuffer,
    ];

    /// Match a parameter type exactly. Pointers to handles are not handles.
    pub fn from_type_name(ty: &str) -> Option<Self> {
        match ty {
            "VkInstance" => Some(HandleType::Instance),
            "VkPhysicalDevice" => Some(HandleType::PhysicalDevice),
            "VkDevice" => Some(HandleType::Device),
            "VkQueue" => Some(HandleType::Queue),
            "VkCommandBuffer" => Some(HandleType::CommandBuffer),
            _ => None,
        }
    }

    pub fn type_name(self) -> &'static str {
        match self {
            HandleType::Instance => "VkInstance",
            HandleType::PhysicalDevice => "VkPhysicalDevice",
            HandleType::Device => "VkDevice",
            HandleType::Queue => "VkQueue",
            HandleType::CommandBuffer => "VkCommandBuffer",
        }
    }

    pub fn dispatch_kind(self) -> DispatchKind {
        match self {
            HandleType::Instance | HandleType::PhysicalDevice => DispatchKind::Instance,
            HandleType::Device | HandleType::Queue | HandleType::CommandBuffer => {
                DispatchKind::Device
            }
        }
    }
}

/// Answers dispatch questions for one table and one configuration.
///
/// Unknown names and functions owned by a blacklisted extension are rejected
/// by every support, export and dispatch predicate.
pub struct Classifier<'a> {
    table: &'a SymbolTable,
    blacklisted: FxHashSet<&'a str>,
    exported: FxHashSet<&'a str>,
    optional: FxHashSet<&'a str>,
}

impl<'a> Classifier<'a> {
    pub fn new(table: &'a SymbolTable, config: &'a DispatchConfig) -> Self {
        fn set(names: &[String]) -> FxHashSet<&str> {
            names.iter().map(String::as_str).collect()
        }
        Self {
            table,
            blacklisted: set(&config.blacklisted_extensions),
            exported: set(&config.exported_extensions),
            optional: set(&config.optional_commands),
        }
    }

    pub fn function(&self, name: &str) -> Option<&'a FunctionSymbol> {
        self.table.function(name)
    }

    pub fn is_extension_blacklisted(&self, extension: &str) -> bool {
        self.blacklisted.contains(extension)
    }

    pub fn is_extension_exported(&self, extension: &str) -> bool {
        self.exported.contains(extension)
    }

    /// Whether `extension` is the loader-internal extension.
    ///
    /// Informational only: no export or support decision reads it.
    pub fn is_extension_internal(&self, extension: &str) -> bool {
        self.table
            .extension(extension)
            .is_some_and(|symbol| symbol.internal)
    }

    /// Known, and not owned by a blacklisted extension.
    pub fn is_supported(&self, name: &str) -> bool {
        self.supported_function(name).is_some()
    }

    /// Dispatch table of a supported function; `None` otherwise.
    pub fn dispatch_kind(&self, name: &str) -> Option<DispatchKind> {
        self.supported_function(name)
            .map(|function| DispatchKind::of_first_param_type(function.first_param_type()))
    }

    pub fn is_globally_dispatched(&self, name: &str) -> bool {
        self.dispatch_kind(name) == Some(DispatchKind::Global)
    }

    pub fn is_instance_dispatched(&self, name: &str) -> bool {
        self.dispatch_kind(name) == Some(DispatchKind::Instance)
    }

    pub fn is_device_dispatched(&self, name: &str) -> bool {
        self.dispatch_kind(name) == Some(DispatchKind::Device)
    }

    /// Core functions are exported; extension functions only when their
    /// extension is on the export allow-list.
    pub fn is_exported(&self, name: &str) -> bool {
        self.supported_function(name)
            .is_some_and(|function| match function.extension.as_deref() {
                Some(extension) => self.is_extension_exported(extension),
                None => true,
            })
    }

    pub fn is_instance_dispatch_entry(&self, name: &str) -> bool {
        name != LEGACY_INSTANCE_EXCLUSION
            && self.is_exported(name)
            && self.is_instance_dispatched(name)
    }

    pub fn is_device_dispatch_entry(&self, name: &str) -> bool {
        self.is_exported(name) && self.is_device_dispatched(name)
    }

    /// Whether failing to resolve `name` at load time is fatal.
    ///
    /// Functions that entered core in [`OPTIONAL_CORE_VERSION`], and those on
    /// the optional-commands list, may be absent.
    pub fn is_required(&self, name: &str) -> bool {
        let version_gated = self
            .table
            .function(name)
            .and_then(|function| function.core_version.as_deref())
            == Some(OPTIONAL_CORE_VERSION);
        !version_gated && !self.optional.contains(name)
    }

    /// Instance dispatch entries in declaration order.
    pub fn instance_entries(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.table
            .function_names()
            .filter(|name| self.is_instance_dispatch_entry(name))
    }

    /// Device dispatch entries in declaration order.
    pub fn device_entries(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.table
            .function_names()
            .filter(|name| self.is_device_dispatch_entry(name))
    }

    fn supported_function(&self, name: &str) -> Option<&'a FunctionSymbol> {
        let function = self.table.function(name)?;
        match function.extension.as_deref() {
            Some(extension) if self.is_extension_blacklisted(extension) => None,
            _ => Some(function),
        }
    }
}

#[cfg(test)]
mod tests;
