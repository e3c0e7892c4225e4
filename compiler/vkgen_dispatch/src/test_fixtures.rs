//! Shared symbol table for unit tests.

use vkgen_ir::{ExtensionSymbol, FunctionSymbol, ParameterDescriptor, SymbolTable, SymbolTableBuilder};

struct Decl {
    name: &'static str,
    first_param: Option<&'static str>,
    extension: Option<&'static str>,
    core_version: Option<&'static str>,
}

const fn decl(name: &'static str, first_param: Option<&'static str>) -> Decl {
    Decl {
        name,
        first_param,
        extension: None,
        core_version: Some("VK_VERSION_1_0"),
    }
}

const fn ext(name: &'static str, first_param: &'static str, extension: &'static str) -> Decl {
    Decl {
        name,
        first_param: Some(first_param),
        extension: Some(extension),
        core_version: None,
    }
}

const DECLS: &[Decl] = &[
    decl("vkCreateInstance", Some("const VkInstanceCreateInfo*")),
    decl("vkEnumerateInstanceExtensionProperties", Some("const char*")),
    decl("vkDestroyInstance", Some("VkInstance")),
    decl("vkEnumeratePhysicalDevices", Some("VkInstance")),
    decl("vkGetInstanceProcAddr", Some("VkInstance")),
    decl("vkEnumerateDeviceLayerProperties", Some("VkPhysicalDevice")),
    decl("vkEnumerateDeviceExtensionProperties", Some("VkPhysicalDevice")),
    decl("vkCreateBuffer", Some("VkDevice")),
    decl("vkQueueSubmit", Some("VkQueue")),
    decl("vkCmdDraw", Some("VkCommandBuffer")),
    Decl {
        name: "vkTrimCommandPool",
        first_param: Some("VkDevice"),
        extension: None,
        core_version: Some("VK_VERSION_1_1"),
    },
    ext("vkDestroySurfaceKHR", "VkInstance", "VK_KHR_surface"),
    ext("vkCreateSwapchainKHR", "VkDevice", "VK_KHR_swapchain"),
    ext("vkCreateWin32SurfaceKHR", "VkInstance", "VK_KHR_win32_surface"),
    ext("vkGetMemoryWin32HandleKHR", "VkDevice", "VK_KHR_external_memory_win32"),
    ext("vkCmdDrawIndirectCountKHR", "VkCommandBuffer", "VK_KHR_draw_indirect_count"),
    ext("vkGetSwapchainGrallocUsage2ANDROID", "VkDevice", "VK_ANDROID_native_buffer"),
];

const EXTENSIONS: &[&str] = &[
    "VK_KHR_surface",
    "VK_KHR_swapchain",
    "VK_KHR_win32_surface",
    "VK_KHR_external_memory_win32",
    "VK_KHR_draw_indirect_count",
    "VK_ANDROID_native_buffer",
];

/// A small registry covering every classification path.
pub(crate) fn table() -> SymbolTable {
    let mut builder = SymbolTableBuilder::new();
    for decl in DECLS {
        let params = decl
            .first_param
            .map(|ty| vec![ParameterDescriptor::new(ty, "handle")])
            .unwrap_or_default();
        builder.declare_function(FunctionSymbol::new(decl.name, "void", params));
        if let Some(extension) = decl.extension {
            builder.claim_extension(decl.name, extension);
        }
        if let Some(version) = decl.core_version {
            builder.set_core_version(decl.name, version);
        }
    }
    for name in EXTENSIONS {
        builder.declare_extension(ExtensionSymbol::new(*name));
    }
    builder.finish()
}
