// Take a look at the license at the top of the repository in the LICENSE file.

use smbios_info::{HardwareSnapshot, IS_SUPPORTED_SYSTEM};

#[test]
fn snapshot_completeness_matches_support() {
    let snapshot = HardwareSnapshot::query();
    assert_eq!(snapshot.is_complete(), IS_SUPPORTED_SYSTEM);
}

#[test]
fn snapshot_matches_individual_queries() {
    if !IS_SUPPORTED_SYSTEM {
        return;
    }
    let snapshot = HardwareSnapshot::query();
    // Identity records must agree with the single-record operations.
    assert_eq!(snapshot.bios, smbios_info::BiosInfo::query());
    assert_eq!(snapshot.system, smbios_info::SystemInfo::query());
    assert_eq!(snapshot.board, smbios_info::BoardInfo::query());
    assert_eq!(snapshot.chassis, smbios_info::ChassisInfo::query());
}

// A faulting record must not take the others down with it; on a target
// without a driver all six fault independently.
#[cfg(feature = "unknown-ci")]
#[test]
fn snapshot_reports_per_record_faults() {
    use smbios_info::QueryError;

    let snapshot = HardwareSnapshot::query();
    assert!(!snapshot.is_complete());
    assert_eq!(snapshot.bios, Err(QueryError::Unsupported));
    assert_eq!(snapshot.system, Err(QueryError::Unsupported));
    assert_eq!(snapshot.board, Err(QueryError::Unsupported));
    assert_eq!(snapshot.processor, Err(QueryError::Unsupported));
    assert_eq!(snapshot.memory, Err(QueryError::Unsupported));
    assert_eq!(snapshot.chassis, Err(QueryError::Unsupported));
}
