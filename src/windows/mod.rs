// Take a look at the license at the top of the repository in the LICENSE file.

mod wmi;

use std::mem::zeroed;

use windows::Win32::System::SystemInformation::{GlobalMemoryStatusEx, MEMORYSTATUSEX};

use self::wmi::WmiSession;
use crate::common::cleanup::OEM_PLACEHOLDER;
use crate::{
    BiosInfo, BoardInfo, ChassisInfo, MemoryInfo, ProcessorInfo, QueryError, SystemInfo,
};

/// `true` if the current platform has a native acquisition driver.
pub const IS_SUPPORTED_SYSTEM: bool = true;

pub(crate) fn bios_info() -> Result<BiosInfo, QueryError> {
    let wmi = WmiSession::connect();
    Ok(BiosInfo {
        vendor: wmi.query_property("Win32_BIOS", "Manufacturer"),
        version: wmi.query_property("Win32_BIOS", "SMBIOSBIOSVersion"),
        release_date: wmi.query_property("Win32_BIOS", "ReleaseDate"),
        characteristics: wmi.query_property("Win32_BIOS", "BIOSVersion"),
    })
}

pub(crate) fn system_info() -> Result<SystemInfo, QueryError> {
    let wmi = WmiSession::connect();

    // The product class carries the hardware-identifying number; fall back
    // to the BIOS serial when it is unpopulated.
    let mut serial_number = wmi.query_property("Win32_ComputerSystemProduct", "IdentifyingNumber");
    if serial_number.is_empty() || serial_number == OEM_PLACEHOLDER {
        serial_number = wmi.query_property("Win32_BIOS", "SerialNumber");
    }

    Ok(SystemInfo {
        manufacturer: wmi.query_property("Win32_ComputerSystem", "Manufacturer"),
        product_name: wmi.query_property("Win32_ComputerSystem", "Model"),
        serial_number,
        uuid: wmi.query_property("Win32_ComputerSystemProduct", "UUID"),
        sku_number: wmi.query_property("Win32_ComputerSystemProduct", "SKUNumber"),
        family: wmi.query_property("Win32_ComputerSystemProduct", "Version"),
        wake_up_type: wmi.query_property("Win32_ComputerSystem", "WakeUpType"),
    })
}

pub(crate) fn board_info() -> Result<BoardInfo, QueryError> {
    let wmi = WmiSession::connect();
    Ok(BoardInfo {
        manufacturer: wmi.query_property("Win32_BaseBoard", "Manufacturer"),
        product: wmi.query_property("Win32_BaseBoard", "Product"),
        version: wmi.query_property("Win32_BaseBoard", "Version"),
        serial_number: wmi.query_property("Win32_BaseBoard", "SerialNumber"),
        asset_tag: wmi.query_property("Win32_BaseBoard", "Tag"),
        location_in_chassis: wmi.query_property("Win32_BaseBoard", "Model"),
    })
}

pub(crate) fn processor_info() -> Result<ProcessorInfo, QueryError> {
    let wmi = WmiSession::connect();
    Ok(ProcessorInfo {
        manufacturer: wmi.query_property("Win32_Processor", "Manufacturer"),
        version: wmi.query_property("Win32_Processor", "Name"),
        socket_designation: wmi.query_property("Win32_Processor", "SocketDesignation"),
        processor_type: wmi.query_property("Win32_Processor", "Architecture"),
        processor_family: wmi.query_property("Win32_Processor", "Family"),
        max_speed: wmi.query_property("Win32_Processor", "MaxClockSpeed"),
        current_speed: wmi.query_property("Win32_Processor", "CurrentClockSpeed"),
        core_count: wmi.query_property("Win32_Processor", "NumberOfCores"),
        thread_count: wmi.query_property("Win32_Processor", "NumberOfLogicalProcessors"),
        l2_cache_size: wmi.query_property("Win32_Processor", "L2CacheSize"),
        l3_cache_size: wmi.query_property("Win32_Processor", "L3CacheSize"),
    })
}

// The one record that mixes two native sources: installed/maximum figures
// come from the management service, live figures from the memory-status
// call (already in bytes).
pub(crate) fn memory_info() -> Result<MemoryInfo, QueryError> {
    let wmi = WmiSession::connect();
    let mut info = MemoryInfo {
        total_physical_memory: wmi.query_property("Win32_ComputerSystem", "TotalPhysicalMemory"),
        max_capacity: wmi.query_property("Win32_PhysicalMemoryArray", "MaxCapacity"),
        memory_devices: wmi.query_property("Win32_PhysicalMemoryArray", "MemoryDevices"),
        ..Default::default()
    };

    unsafe {
        let mut status: MEMORYSTATUSEX = zeroed();
        status.dwLength = size_of::<MEMORYSTATUSEX>() as u32;
        if GlobalMemoryStatusEx(&mut status).is_ok() {
            info.available_physical_memory = status.ullAvailPhys.to_string();
            info.total_virtual_memory = status.ullTotalVirtual.to_string();
            info.available_virtual_memory = status.ullAvailVirtual.to_string();
        }
    }

    Ok(info)
}

pub(crate) fn chassis_info() -> Result<ChassisInfo, QueryError> {
    let wmi = WmiSession::connect();
    Ok(ChassisInfo {
        manufacturer: wmi.query_property("Win32_SystemEnclosure", "Manufacturer"),
        kind: wmi.query_property("Win32_SystemEnclosure", "ChassisTypes"),
        version: wmi.query_property("Win32_SystemEnclosure", "Version"),
        serial_number: wmi.query_property("Win32_SystemEnclosure", "SerialNumber"),
        asset_tag: wmi.query_property("Win32_SystemEnclosure", "SMBIOSAssetTag"),
        boot_up_state: wmi.query_property("Win32_ComputerSystem", "BootupState"),
        power_supply_state: wmi.query_property("Win32_ComputerSystem", "PowerState"),
        thermal_state: wmi.query_property("Win32_ComputerSystem", "ThermalState"),
    })
}
