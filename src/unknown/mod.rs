// Take a look at the license at the top of the repository in the LICENSE file.

use crate::{
    BiosInfo, BoardInfo, ChassisInfo, MemoryInfo, ProcessorInfo, QueryError, SystemInfo,
};

/// `false`: no acquisition driver exists for this target.
pub const IS_SUPPORTED_SYSTEM: bool = false;

pub(crate) fn bios_info() -> Result<BiosInfo, QueryError> {
    Err(QueryError::Unsupported)
}

pub(crate) fn system_info() -> Result<SystemInfo, QueryError> {
    Err(QueryError::Unsupported)
}

pub(crate) fn board_info() -> Result<BoardInfo, QueryError> {
    Err(QueryError::Unsupported)
}

pub(crate) fn processor_info() -> Result<ProcessorInfo, QueryError> {
    Err(QueryError::Unsupported)
}

pub(crate) fn memory_info() -> Result<MemoryInfo, QueryError> {
    Err(QueryError::Unsupported)
}

pub(crate) fn chassis_info() -> Result<ChassisInfo, QueryError> {
    Err(QueryError::Unsupported)
}
