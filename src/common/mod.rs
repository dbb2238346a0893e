// Take a look at the license at the top of the repository in the LICENSE file.

pub(crate) mod cleanup;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a query cannot produce a record at all.
///
/// Per-field absence is never an error: a field whose underlying source is
/// missing resolves to an empty string instead. This error is reserved for
/// the case where the whole acquisition channel is unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum QueryError {
    /// No acquisition driver exists for the current platform.
    #[error("hardware identification is not supported on this platform")]
    Unsupported,
}

/// BIOS identification data.
///
/// All fields are plain strings; a field whose underlying source is missing
/// or unreadable is the empty string.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct BiosInfo {
    /// BIOS vendor name.
    pub vendor: String,
    /// BIOS version string.
    pub version: String,
    /// Release date as reported by the firmware.
    pub release_date: String,
    /// Firmware characteristics summary.
    #[cfg_attr(feature = "serde", serde(rename = "biosCharacteristics"))]
    pub characteristics: String,
}

impl BiosInfo {
    /// Reads the BIOS record from the platform's native source.
    ///
    /// ```no_run
    /// let bios = smbios_info::BiosInfo::query().unwrap();
    /// println!("{} {}", bios.vendor, bios.version);
    /// ```
    pub fn query() -> Result<Self, QueryError> {
        crate::sys::bios_info()
    }
}

/// System (product) identification data.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SystemInfo {
    /// System manufacturer.
    pub manufacturer: String,
    /// Product name.
    pub product_name: String,
    /// Serial number, with known vendor placeholders normalized to empty.
    pub serial_number: String,
    /// System UUID; the all-zero UUID is normalized to empty.
    pub uuid: String,
    /// Stock keeping unit number.
    pub sku_number: String,
    /// Product family.
    pub family: String,
    /// Wake-up type.
    pub wake_up_type: String,
}

impl SystemInfo {
    /// Reads the system record from the platform's native source.
    pub fn query() -> Result<Self, QueryError> {
        crate::sys::system_info()
    }
}

/// Baseboard identification data.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct BoardInfo {
    /// Board manufacturer.
    pub manufacturer: String,
    /// Board product name.
    pub product: String,
    /// Board version.
    pub version: String,
    /// Serial number, with known vendor placeholders normalized to empty.
    pub serial_number: String,
    /// Asset tag, with known vendor placeholders normalized to empty.
    pub asset_tag: String,
    /// Location within the chassis.
    pub location_in_chassis: String,
}

impl BoardInfo {
    /// Reads the baseboard record from the platform's native source.
    pub fn query() -> Result<Self, QueryError> {
        crate::sys::board_info()
    }
}

/// Processor identification data.
///
/// Speeds, counts and cache sizes are reported as the platform exposes them
/// and are not unit-normalized across platforms.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ProcessorInfo {
    /// Processor manufacturer.
    pub manufacturer: String,
    /// Processor version (model name).
    pub version: String,
    /// Socket designation.
    pub socket_designation: String,
    /// Processor type.
    pub processor_type: String,
    /// Processor family.
    pub processor_family: String,
    /// Maximum speed.
    pub max_speed: String,
    /// Current speed.
    pub current_speed: String,
    /// Physical core count.
    pub core_count: String,
    /// Logical thread count.
    pub thread_count: String,
    /// L2 cache size.
    pub l2_cache_size: String,
    /// L3 cache size.
    pub l3_cache_size: String,
}

impl ProcessorInfo {
    /// Reads the processor record from the platform's native source.
    pub fn query() -> Result<Self, QueryError> {
        crate::sys::processor_info()
    }
}

/// Memory figures.
///
/// On Linux and Windows the physical and virtual figures are byte counts;
/// where the platform exposes nothing, fields carry the `"N/A"` sentinel.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct MemoryInfo {
    /// Total physical memory.
    pub total_physical_memory: String,
    /// Available physical memory.
    pub available_physical_memory: String,
    /// Total virtual memory.
    pub total_virtual_memory: String,
    /// Available virtual memory.
    pub available_virtual_memory: String,
    /// Number of memory devices.
    pub memory_devices: String,
    /// Maximum installable capacity.
    pub max_capacity: String,
}

impl MemoryInfo {
    /// Reads the memory record from the platform's native source.
    pub fn query() -> Result<Self, QueryError> {
        crate::sys::memory_info()
    }
}

/// Chassis identification data.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ChassisInfo {
    /// Chassis manufacturer.
    pub manufacturer: String,
    /// Chassis type.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    /// Chassis version.
    pub version: String,
    /// Chassis serial number.
    pub serial_number: String,
    /// Chassis asset tag.
    pub asset_tag: String,
    /// Boot-up state.
    pub boot_up_state: String,
    /// Power supply state.
    pub power_supply_state: String,
    /// Thermal state.
    pub thermal_state: String,
}

impl ChassisInfo {
    /// Reads the chassis record from the platform's native source.
    pub fn query() -> Result<Self, QueryError> {
        crate::sys::chassis_info()
    }
}

/// All six records, captured in one call.
///
/// Records are captured independently: a fault in one query does not
/// prevent the others from being returned, so a caller can still use the
/// records that succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HardwareSnapshot {
    /// BIOS record, or the fault that prevented reading it.
    pub bios: Result<BiosInfo, QueryError>,
    /// System record, or the fault that prevented reading it.
    pub system: Result<SystemInfo, QueryError>,
    /// Baseboard record, or the fault that prevented reading it.
    pub board: Result<BoardInfo, QueryError>,
    /// Processor record, or the fault that prevented reading it.
    pub processor: Result<ProcessorInfo, QueryError>,
    /// Memory record, or the fault that prevented reading it.
    pub memory: Result<MemoryInfo, QueryError>,
    /// Chassis record, or the fault that prevented reading it.
    pub chassis: Result<ChassisInfo, QueryError>,
}

impl HardwareSnapshot {
    /// Runs all six queries in sequence against live system state.
    ///
    /// ```no_run
    /// let snapshot = smbios_info::HardwareSnapshot::query();
    /// if let Ok(bios) = &snapshot.bios {
    ///     println!("{}", bios.vendor);
    /// }
    /// ```
    pub fn query() -> Self {
        Self {
            bios: BiosInfo::query(),
            system: SystemInfo::query(),
            board: BoardInfo::query(),
            processor: ProcessorInfo::query(),
            memory: MemoryInfo::query(),
            chassis: ChassisInfo::query(),
        }
    }

    /// Returns `true` when every record was captured successfully.
    pub fn is_complete(&self) -> bool {
        self.bios.is_ok()
            && self.system.is_ok()
            && self.board.is_ok()
            && self.processor.is_ok()
            && self.memory.is_ok()
            && self.chassis.is_ok()
    }
}
