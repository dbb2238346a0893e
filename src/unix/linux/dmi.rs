// Take a look at the license at the top of the repository in the LICENSE file.

use std::path::Path;

use crate::common::cleanup::{scrub_placeholders, scrub_uuid};
use crate::utils::read_text_file;
use crate::{BiosInfo, BoardInfo, ChassisInfo, QueryError, SystemInfo};

// One pseudo-file per attribute, each holding a single value.
const DMI_DIR: &str = "/sys/class/dmi/id";

fn read_dmi(dir: &Path, name: &str) -> String {
    read_text_file(dir.join(name))
}

pub(crate) fn bios_info() -> Result<BiosInfo, QueryError> {
    Ok(bios_info_at(Path::new(DMI_DIR)))
}

fn bios_info_at(dir: &Path) -> BiosInfo {
    BiosInfo {
        vendor: read_dmi(dir, "bios_vendor"),
        version: read_dmi(dir, "bios_version"),
        release_date: read_dmi(dir, "bios_date"),
        characteristics: read_dmi(dir, "modalias"),
    }
}

pub(crate) fn system_info() -> Result<SystemInfo, QueryError> {
    Ok(system_info_at(Path::new(DMI_DIR)))
}

fn system_info_at(dir: &Path) -> SystemInfo {
    SystemInfo {
        manufacturer: read_dmi(dir, "sys_vendor"),
        product_name: read_dmi(dir, "product_name"),
        serial_number: scrub_placeholders(
            read_dmi(dir, "product_serial"),
            &["System Serial Number"],
        ),
        uuid: scrub_uuid(read_dmi(dir, "product_uuid")),
        sku_number: read_dmi(dir, "product_sku"),
        family: read_dmi(dir, "product_family"),
        wake_up_type: read_dmi(dir, "chassis_type"),
    }
}

pub(crate) fn board_info() -> Result<BoardInfo, QueryError> {
    Ok(board_info_at(Path::new(DMI_DIR)))
}

fn board_info_at(dir: &Path) -> BoardInfo {
    BoardInfo {
        manufacturer: read_dmi(dir, "board_vendor"),
        product: read_dmi(dir, "board_name"),
        version: read_dmi(dir, "board_version"),
        serial_number: scrub_placeholders(read_dmi(dir, "board_serial"), &["Board Serial Number"]),
        asset_tag: scrub_placeholders(read_dmi(dir, "board_asset_tag"), &["Asset Tag"]),
        // The DMI tree exposes no board-location attribute; the chassis
        // vendor is reported here instead.
        location_in_chassis: read_dmi(dir, "chassis_vendor"),
    }
}

pub(crate) fn chassis_info() -> Result<ChassisInfo, QueryError> {
    Ok(chassis_info_at(Path::new(DMI_DIR)))
}

fn chassis_info_at(dir: &Path) -> ChassisInfo {
    ChassisInfo {
        manufacturer: read_dmi(dir, "chassis_vendor"),
        kind: read_dmi(dir, "chassis_type"),
        version: read_dmi(dir, "chassis_version"),
        serial_number: read_dmi(dir, "chassis_serial"),
        asset_tag: read_dmi(dir, "chassis_asset_tag"),
        boot_up_state: "Normal".to_owned(),
        power_supply_state: "Safe".to_owned(),
        thermal_state: "Safe".to_owned(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;

    fn write_attr(dir: &Path, name: &str, value: &str) {
        fs::write(dir.join(name), value).expect("failed to write attribute");
    }

    #[test]
    fn missing_attributes_yield_empty_fields() {
        let dir = tempfile::tempdir().expect("failed to create temporary directory");
        let bios = bios_info_at(dir.path());
        assert_eq!(bios, BiosInfo::default());

        let board = board_info_at(dir.path());
        assert_eq!(board, BoardInfo::default());
    }

    #[test]
    fn attributes_are_read_and_trimmed() {
        let dir = tempfile::tempdir().expect("failed to create temporary directory");
        write_attr(dir.path(), "bios_vendor", "LENOVO\n");
        write_attr(dir.path(), "bios_version", "R1CET65W(1.34 )\n");
        write_attr(dir.path(), "bios_date", "07/08/2024\n");

        let bios = bios_info_at(dir.path());
        assert_eq!(bios.vendor, "LENOVO");
        assert_eq!(bios.version, "R1CET65W(1.34 )");
        assert_eq!(bios.release_date, "07/08/2024");
        assert_eq!(bios.characteristics, "");
    }

    #[test]
    fn zero_uuid_and_placeholder_serial_are_scrubbed() {
        let dir = tempfile::tempdir().expect("failed to create temporary directory");
        write_attr(dir.path(), "sys_vendor", "LENOVO\n");
        write_attr(dir.path(), "product_serial", "To Be Filled By O.E.M.\n");
        write_attr(
            dir.path(),
            "product_uuid",
            "00000000-0000-0000-0000-000000000000\n",
        );

        let system = system_info_at(dir.path());
        assert_eq!(system.manufacturer, "LENOVO");
        assert_eq!(system.serial_number, "");
        assert_eq!(system.uuid, "");
    }

    #[test]
    fn real_serial_and_uuid_pass_through() {
        let dir = tempfile::tempdir().expect("failed to create temporary directory");
        write_attr(dir.path(), "product_serial", "PF3A8XYZ\n");
        write_attr(
            dir.path(),
            "product_uuid",
            "4c4c4544-0051-3010-8048-b7c04f443732\n",
        );

        let system = system_info_at(dir.path());
        assert_eq!(system.serial_number, "PF3A8XYZ");
        assert_eq!(system.uuid, "4c4c4544-0051-3010-8048-b7c04f443732");
    }

    #[test]
    fn board_placeholders_are_scrubbed() {
        let dir = tempfile::tempdir().expect("failed to create temporary directory");
        write_attr(dir.path(), "board_serial", "Board Serial Number\n");
        write_attr(dir.path(), "board_asset_tag", "Asset Tag\n");
        write_attr(dir.path(), "board_vendor", "ASUSTeK COMPUTER INC.\n");

        let board = board_info_at(dir.path());
        assert_eq!(board.serial_number, "");
        assert_eq!(board.asset_tag, "");
        assert_eq!(board.manufacturer, "ASUSTeK COMPUTER INC.");
    }

    #[test]
    fn board_location_comes_from_chassis_vendor() {
        let dir = tempfile::tempdir().expect("failed to create temporary directory");
        write_attr(dir.path(), "chassis_vendor", "LENOVO\n");

        let board = board_info_at(dir.path());
        assert_eq!(board.location_in_chassis, "LENOVO");
    }

    #[test]
    fn chassis_states_are_constants() {
        let dir = tempfile::tempdir().expect("failed to create temporary directory");
        write_attr(dir.path(), "chassis_type", "10\n");

        let chassis = chassis_info_at(dir.path());
        assert_eq!(chassis.kind, "10");
        assert_eq!(chassis.boot_up_state, "Normal");
        assert_eq!(chassis.power_supply_state, "Safe");
        assert_eq!(chassis.thermal_state, "Safe");
    }
}
