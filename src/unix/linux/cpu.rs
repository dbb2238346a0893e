// Take a look at the license at the top of the repository in the LICENSE file.

use std::fs;
use std::path::Path;

use crate::utils::read_text_file;
use crate::{ProcessorInfo, QueryError};

const CPUINFO: &str = "/proc/cpuinfo";
// Cache sizes are scoped to logical CPU 0.
const L2_CACHE_SIZE: &str = "/sys/devices/system/cpu/cpu0/cache/index2/size";
const L3_CACHE_SIZE: &str = "/sys/devices/system/cpu/cpu0/cache/index3/size";

pub(crate) fn processor_info() -> Result<ProcessorInfo, QueryError> {
    let mut info = parse_cpuinfo(&fs::read_to_string(CPUINFO).unwrap_or_default());
    info.l2_cache_size = read_text_file(Path::new(L2_CACHE_SIZE));
    info.l3_cache_size = read_text_file(Path::new(L3_CACHE_SIZE));
    Ok(info)
}

// Keys are matched as case-sensitive substrings of the line, values are the
// byte-trimmed text after the first colon. The file repeats one block per
// logical CPU, so later blocks overwrite earlier matches; `siblings` keeps
// the first occurrence only, i.e. the thread count of logical CPU 0.
fn parse_cpuinfo(content: &str) -> ProcessorInfo {
    let mut info = ProcessorInfo {
        socket_designation: "CPU Socket".to_owned(),
        processor_type: "Central Processor".to_owned(),
        ..Default::default()
    };

    for line in content.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim_ascii();
        if key.contains("vendor_id") {
            info.manufacturer = value.to_owned();
        } else if key.contains("model name") {
            info.version = value.to_owned();
        } else if key.contains("cpu family") {
            info.processor_family = value.to_owned();
        } else if key.contains("cpu MHz") {
            info.current_speed = value.to_owned();
        } else if key.contains("cpu cores") {
            info.core_count = value.to_owned();
        } else if key.contains("siblings") && info.thread_count.is_empty() {
            info.thread_count = value.to_owned();
        }
    }

    // No separate maximum-frequency source is read; mirror the current one.
    info.max_speed = info.current_speed.clone();
    info
}
