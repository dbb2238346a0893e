// Take a look at the license at the top of the repository in the LICENSE file.

use std::fs;

use crate::{MemoryInfo, QueryError};

const MEMINFO: &str = "/proc/meminfo";

pub(crate) fn memory_info() -> Result<MemoryInfo, QueryError> {
    Ok(parse_meminfo(&fs::read_to_string(MEMINFO).unwrap_or_default()))
}

// /proc/meminfo reports KiB, though it says "kB". Physical and swap figures
// are all normalized to bytes; a value that does not parse is passed through
// verbatim rather than failing the whole query.
fn parse_meminfo(content: &str) -> MemoryInfo {
    let mut info = MemoryInfo {
        memory_devices: "N/A".to_owned(),
        ..Default::default()
    };

    for line in content.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim_ascii();
        if key.contains("MemTotal") {
            info.total_physical_memory = kib_to_bytes(value);
        } else if key.contains("MemAvailable") {
            info.available_physical_memory = kib_to_bytes(value);
        } else if key.contains("SwapTotal") {
            info.total_virtual_memory = kib_to_bytes(value);
        } else if key.contains("SwapFree") {
            info.available_virtual_memory = kib_to_bytes(value);
        }
    }

    info.max_capacity = info.total_physical_memory.clone();
    info
}

fn kib_to_bytes(value: &str) -> String {
    match value
        .split_ascii_whitespace()
        .next()
        .and_then(|v| v.parse::<u64>().ok())
    {
        Some(kib) => kib.saturating_mul(1_024).to_string(),
        None => value.to_owned(),
    }
}

#[cfg(test)]
mod test {
    use super::{kib_to_bytes, parse_meminfo};

    const MEMINFO_FIXTURE: &str = "\
MemTotal:       16384000 kB
MemFree:         1062712 kB
MemAvailable:    8289864 kB
Buffers:          593964 kB
Cached:          6481444 kB
SwapCached:         1044 kB
SwapTotal:       2097148 kB
SwapFree:        2078420 kB
";

    #[test]
    fn physical_memory_is_converted_to_bytes() {
        let info = parse_meminfo(MEMINFO_FIXTURE);
        assert_eq!(info.total_physical_memory, "16777216000");
        assert_eq!(info.available_physical_memory, "8488820736");
    }

    // Swap figures get the same kB-to-bytes normalization as the physical
    // ones; this test pins that choice.
    #[test]
    fn swap_is_converted_to_bytes_too() {
        let info = parse_meminfo(MEMINFO_FIXTURE);
        assert_eq!(info.total_virtual_memory, "2147479552");
        assert_eq!(info.available_virtual_memory, "2128302080");
    }

    #[test]
    fn devices_and_capacity_are_derived() {
        let info = parse_meminfo(MEMINFO_FIXTURE);
        assert_eq!(info.memory_devices, "N/A");
        assert_eq!(info.max_capacity, info.total_physical_memory);
    }

    #[test]
    fn unparseable_values_fall_back_to_the_raw_string() {
        assert_eq!(kib_to_bytes("not-a-number"), "not-a-number");
        let info = parse_meminfo("MemTotal: unavailable\n");
        assert_eq!(info.total_physical_memory, "unavailable");
    }

    #[test]
    fn empty_scan_leaves_fields_empty() {
        let info = parse_meminfo("");
        assert_eq!(info.total_physical_memory, "");
        assert_eq!(info.total_virtual_memory, "");
        assert_eq!(info.memory_devices, "N/A");
        assert_eq!(info.max_capacity, "");
    }
}
