use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::test_fixtures;

fn param(ty: &str) -> ParameterDescriptor {
    ParameterDescriptor::new(ty, "p")
}

// DispatchKind

#[test]
fn handle_types_map_to_tables() {
    assert_eq!(DispatchKind::of_params(&[param("VkInstance")]), DispatchKind::Instance);
    assert_eq!(
        DispatchKind::of_params(&[param("VkPhysicalDevice")]),
        DispatchKind::Instance
    );
    assert_eq!(DispatchKind::of_params(&[param("VkDevice")]), DispatchKind::Device);
    assert_eq!(DispatchKind::of_params(&[param("VkQueue")]), DispatchKind::Device);
    assert_eq!(
        DispatchKind::of_params(&[param("VkCommandBuffer")]),
        DispatchKind::Device
    );
}

#[test]
fn no_parameters_is_global() {
    assert_eq!(DispatchKind::of_params(&[]), DispatchKind::Global);
    assert_eq!(DispatchKind::of_first_param_type(None), DispatchKind::Global);
}

#[test]
fn only_first_parameter_counts() {
    let params = [param("const VkInstanceCreateInfo*"), param("VkDevice")];
    assert_eq!(DispatchKind::of_params(&params), DispatchKind::Global);

    let params = [param("VkDevice"), param("VkInstance")];
    assert_eq!(DispatchKind::of_params(&params), DispatchKind::Device);
}

#[test]
fn pointer_to_handle_is_not_a_handle() {
    assert_eq!(DispatchKind::of_params(&[param("VkDevice*")]), DispatchKind::Global);
    assert_eq!(
        DispatchKind::of_params(&[param("const VkInstance*")]),
        DispatchKind::Global
    );
}

#[test]
fn handle_type_names_round_trip() {
    for handle in HandleType::ALL {
        assert_eq!(HandleType::from_type_name(handle.type_name()), Some(handle));
    }
}

proptest! {
    #[test]
    fn non_handle_first_param_is_global(
        ty in "[A-Za-z_][A-Za-z0-9_ *]{0,24}",
        rest in prop::collection::vec("[A-Za-z][A-Za-z0-9]{0,12}", 0..4),
    ) {
        prop_assume!(HandleType::from_type_name(&ty).is_none());
        let mut params = vec![param(&ty)];
        params.extend(rest.iter().map(|ty| param(ty)));
        prop_assert_eq!(DispatchKind::of_params(&params), DispatchKind::Global);
    }

    #[test]
    fn handle_first_param_ignores_rest(
        index in 0..HandleType::ALL.len(),
        rest in prop::collection::vec("[A-Za-z][A-Za-z0-9]{0,12}", 0..4),
    ) {
        let handle = HandleType::ALL[index];
        let mut params = vec![param(handle.type_name())];
        params.extend(rest.iter().map(|ty| param(ty)));
        prop_assert_eq!(DispatchKind::of_params(&params), handle.dispatch_kind());
    }
}

// Classifier

#[test]
fn core_device_function_is_exported_device_entry() {
    let table = test_fixtures::table();
    let config = DispatchConfig::default();
    let classifier = Classifier::new(&table, &config);

    assert!(classifier.is_supported("vkCreateBuffer"));
    assert!(classifier.is_exported("vkCreateBuffer"));
    assert_eq!(classifier.dispatch_kind("vkCreateBuffer"), Some(DispatchKind::Device));
    assert!(classifier.is_device_dispatch_entry("vkCreateBuffer"));
    assert!(!classifier.is_instance_dispatch_entry("vkCreateBuffer"));
    assert!(classifier.is_required("vkCreateBuffer"));
}

#[test]
fn blacklisted_functions_are_rejected_everywhere() {
    let table = test_fixtures::table();
    let config = DispatchConfig::default();
    let classifier = Classifier::new(&table, &config);

    for name in ["vkCreateWin32SurfaceKHR", "vkGetMemoryWin32HandleKHR"] {
        assert!(!classifier.is_supported(name), "{name}");
        assert!(!classifier.is_exported(name), "{name}");
        assert!(!classifier.is_instance_dispatch_entry(name), "{name}");
        assert!(!classifier.is_device_dispatch_entry(name), "{name}");
        assert_eq!(classifier.dispatch_kind(name), None, "{name}");
    }
}

#[test]
fn unblacklisting_restores_support() {
    let table = test_fixtures::table();
    let config = DispatchConfig::empty();
    let classifier = Classifier::new(&table, &config);

    assert!(classifier.is_supported("vkCreateWin32SurfaceKHR"));
    assert!(classifier.is_instance_dispatched("vkCreateWin32SurfaceKHR"));
    // Supported but not on the export list.
    assert!(!classifier.is_exported("vkCreateWin32SurfaceKHR"));
}

#[test]
fn extension_functions_need_export_allow_list() {
    let table = test_fixtures::table();
    let config = DispatchConfig::default();
    let classifier = Classifier::new(&table, &config);

    assert!(classifier.is_exported("vkCreateSwapchainKHR"));
    assert!(classifier.is_device_dispatch_entry("vkCreateSwapchainKHR"));
    assert!(classifier.is_exported("vkDestroySurfaceKHR"));
    assert!(classifier.is_instance_dispatch_entry("vkDestroySurfaceKHR"));

    assert!(classifier.is_supported("vkCmdDrawIndirectCountKHR"));
    assert!(!classifier.is_exported("vkCmdDrawIndirectCountKHR"));
    assert!(!classifier.is_device_dispatch_entry("vkCmdDrawIndirectCountKHR"));
}

#[test]
fn legacy_exclusion_removes_exactly_one_instance_entry() {
    let table = test_fixtures::table();
    let config = DispatchConfig::default();
    let classifier = Classifier::new(&table, &config);

    assert!(classifier.is_exported(LEGACY_INSTANCE_EXCLUSION));
    assert!(classifier.is_instance_dispatched(LEGACY_INSTANCE_EXCLUSION));
    assert!(!classifier.is_instance_dispatch_entry(LEGACY_INSTANCE_EXCLUSION));

    let excluded: Vec<_> = table
        .function_names()
        .filter(|name| {
            classifier.is_exported(name)
                && classifier.is_instance_dispatched(name)
                && !classifier.is_instance_dispatch_entry(name)
        })
        .collect();
    assert_eq!(excluded, vec![LEGACY_INSTANCE_EXCLUSION]);
}

#[test]
fn global_functions_are_in_no_table() {
    let table = test_fixtures::table();
    let config = DispatchConfig::default();
    let classifier = Classifier::new(&table, &config);

    assert!(classifier.is_globally_dispatched("vkCreateInstance"));
    assert!(classifier.is_globally_dispatched("vkEnumerateInstanceExtensionProperties"));
    assert!(!classifier.is_instance_dispatch_entry("vkCreateInstance"));
    assert!(!classifier.is_device_dispatch_entry("vkCreateInstance"));
}

#[test]
fn version_gated_and_listed_functions_are_optional() {
    let table = test_fixtures::table();
    let config = DispatchConfig::default();
    let classifier = Classifier::new(&table, &config);

    assert!(!classifier.is_required("vkTrimCommandPool"));
    assert!(!classifier.is_required("vkGetSwapchainGrallocUsage2ANDROID"));
    assert!(classifier.is_required("vkQueueSubmit"));
    assert!(classifier.is_required("vkCreateSwapchainKHR"));
}

#[test]
fn unknown_functions_are_rejected() {
    let table = test_fixtures::table();
    let config = DispatchConfig::default();
    let classifier = Classifier::new(&table, &config);

    assert!(!classifier.is_supported("vkDoesNotExist"));
    assert!(!classifier.is_exported("vkDoesNotExist"));
    assert_eq!(classifier.dispatch_kind("vkDoesNotExist"), None);
}

#[test]
fn internal_flag_is_informational() {
    let table = test_fixtures::table();
    let config = DispatchConfig::default();
    let classifier = Classifier::new(&table, &config);

    assert!(classifier.is_extension_internal("VK_ANDROID_native_buffer"));
    assert!(!classifier.is_extension_internal("VK_KHR_swapchain"));
    // Neither blacklisted nor exported by virtue of being internal.
    assert!(classifier.is_supported("vkGetSwapchainGrallocUsage2ANDROID"));
    assert!(!classifier.is_exported("vkGetSwapchainGrallocUsage2ANDROID"));
}

#[test]
fn entries_follow_declaration_order() {
    let table = test_fixtures::table();
    let config = DispatchConfig::default();
    let classifier = Classifier::new(&table, &config);

    let instance: Vec<_> = classifier.instance_entries().collect();
    assert_eq!(
        instance,
        vec![
            "vkDestroyInstance",
            "vkEnumeratePhysicalDevices",
            "vkGetInstanceProcAddr",
            "vkEnumerateDeviceExtensionProperties",
            "vkDestroySurfaceKHR",
        ]
    );

    let device: Vec<_> = classifier.device_entries().collect();
    assert_eq!(
        device,
        vec![
            "vkCreateBuffer",
            "vkQueueSubmit",
            "vkCmdDraw",
            "vkTrimCommandPool",
            "vkCreateSwapchainKHR",
        ]
    );
}

#[test]
fn dispatch_kind_matches_parameter_classification() {
    let table = test_fixtures::table();
    let config = DispatchConfig::empty();
    let classifier = Classifier::new(&table, &config);

    for function in table.functions() {
        assert_eq!(
            classifier.dispatch_kind(&function.name),
            Some(DispatchKind::of_params(&function.params)),
            "{}",
            function.name
        );
    }
}
