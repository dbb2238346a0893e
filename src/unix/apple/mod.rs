// Take a look at the license at the top of the repository in the LICENSE file.

mod registry;

use self::registry::{registry_entry_string, registry_entry_uuid};
use crate::{
    BiosInfo, BoardInfo, ChassisInfo, MemoryInfo, ProcessorInfo, QueryError, SystemInfo,
};

/// `true` if the current platform has a native acquisition driver.
pub const IS_SUPPORTED_SYSTEM: bool = true;

const PLATFORM_EXPERT: &str = "IOPlatformExpertDevice";
const CPU0: &str = "IODeviceTree:/cpus/cpu@0";

// The registry rarely exposes the manufacturer directly.
const VENDOR: &str = "Apple Inc.";

// The firmware interface here exposes far fewer structured fields than the
// DMI tree or WMI do, so several fields carry this sentinel rather than a
// real query.
const NOT_AVAILABLE: &str = "N/A";

fn platform_property(property: &str) -> String {
    registry_entry_string(PLATFORM_EXPERT, property).unwrap_or_default()
}

pub(crate) fn bios_info() -> Result<BiosInfo, QueryError> {
    // Boot ROM identification supersedes the generic version when present.
    let mut version = platform_property("version");
    let target_type = platform_property("target-type");
    if !target_type.is_empty() {
        version = target_type;
    }

    let rom_version = platform_property("version-major");
    let characteristics = if rom_version.is_empty() {
        String::new()
    } else {
        format!("ROM Version: {rom_version}")
    };

    Ok(BiosInfo {
        vendor: VENDOR.to_owned(),
        version,
        release_date: platform_property("release-date"),
        characteristics,
    })
}

pub(crate) fn system_info() -> Result<SystemInfo, QueryError> {
    Ok(SystemInfo {
        manufacturer: VENDOR.to_owned(),
        product_name: platform_property("model"),
        serial_number: platform_property("IOPlatformSerialNumber"),
        uuid: registry_entry_uuid(PLATFORM_EXPERT, "IOPlatformUUID").unwrap_or_default(),
        sku_number: platform_property("model-number"),
        family: platform_property("model-name"),
        wake_up_type: platform_property("clock-frequency"),
    })
}

pub(crate) fn board_info() -> Result<BoardInfo, QueryError> {
    Ok(BoardInfo {
        manufacturer: VENDOR.to_owned(),
        product: platform_property("board-id"),
        version: platform_property("model-number"),
        serial_number: platform_property("IOPlatformSerialNumber"),
        asset_tag: platform_property("target-type"),
        location_in_chassis: platform_property("product-name"),
    })
}

pub(crate) fn processor_info() -> Result<ProcessorInfo, QueryError> {
    let mut manufacturer = registry_entry_string(CPU0, "vendor").unwrap_or_default();
    if manufacturer.is_empty() {
        manufacturer = "Apple".to_owned();
    }

    Ok(ProcessorInfo {
        manufacturer,
        version: registry_entry_string(CPU0, "name").unwrap_or_default(),
        socket_designation: platform_property("target-type"),
        processor_type: registry_entry_string(CPU0, "device_type").unwrap_or_default(),
        processor_family: platform_property("compatible"),
        max_speed: NOT_AVAILABLE.to_owned(),
        current_speed: NOT_AVAILABLE.to_owned(),
        core_count: NOT_AVAILABLE.to_owned(),
        thread_count: NOT_AVAILABLE.to_owned(),
        l2_cache_size: NOT_AVAILABLE.to_owned(),
        l3_cache_size: NOT_AVAILABLE.to_owned(),
    })
}

pub(crate) fn memory_info() -> Result<MemoryInfo, QueryError> {
    Ok(MemoryInfo {
        total_physical_memory: NOT_AVAILABLE.to_owned(),
        available_physical_memory: NOT_AVAILABLE.to_owned(),
        total_virtual_memory: NOT_AVAILABLE.to_owned(),
        available_virtual_memory: NOT_AVAILABLE.to_owned(),
        memory_devices: NOT_AVAILABLE.to_owned(),
        max_capacity: NOT_AVAILABLE.to_owned(),
    })
}

pub(crate) fn chassis_info() -> Result<ChassisInfo, QueryError> {
    Ok(ChassisInfo {
        manufacturer: VENDOR.to_owned(),
        kind: platform_property("product-name"),
        version: platform_property("version"),
        serial_number: platform_property("IOPlatformSerialNumber"),
        asset_tag: platform_property("model"),
        boot_up_state: "Normal".to_owned(),
        power_supply_state: "Safe".to_owned(),
        thermal_state: "Safe".to_owned(),
    })
}
