// Take a look at the license at the top of the repository in the LICENSE file.

#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

#[macro_use]
mod macros;

cfg_if::cfg_if! {
    if #[cfg(feature = "unknown-ci")] {
        // This is used in CI to check that the build for unknown targets is compiling fine.
        mod unknown;
        use crate::unknown as sys;
    } else if #[cfg(any(target_os = "linux", target_os = "android", target_os = "macos"))] {
        mod unix;
        use crate::unix::sys as sys;

        #[cfg(any(target_os = "linux", target_os = "android"))]
        mod utils;
    } else if #[cfg(windows)] {
        mod windows;
        use crate::windows as sys;
    } else {
        mod unknown;
        use crate::unknown as sys;
    }
}

pub use crate::common::{
    BiosInfo, BoardInfo, ChassisInfo, HardwareSnapshot, MemoryInfo, ProcessorInfo, QueryError,
    SystemInfo,
};
pub use crate::sys::IS_SUPPORTED_SYSTEM;

mod common;

#[cfg(test)]
mod test {
    use crate::*;

    #[cfg(feature = "unknown-ci")]
    #[test]
    fn check_unknown_ci_feature() {
        assert!(!IS_SUPPORTED_SYSTEM);
    }

    // If this test doesn't compile, it means the current OS doesn't implement it correctly.
    #[test]
    fn check_supported_flag_type() {
        fn check_is_supported(_: bool) {}

        check_is_supported(IS_SUPPORTED_SYSTEM);
    }

    #[test]
    fn check_record_implemented_traits() {
        fn check<T: Sized + std::fmt::Debug + Default + Clone + PartialEq + Send + Sync>(_: T) {}

        check(BiosInfo::default());
        check(SystemInfo::default());
        check(BoardInfo::default());
        check(ProcessorInfo::default());
        check(MemoryInfo::default());
        check(ChassisInfo::default());
    }

    #[test]
    fn check_queries_match_support() {
        assert_eq!(BiosInfo::query().is_ok(), IS_SUPPORTED_SYSTEM);
        assert_eq!(SystemInfo::query().is_ok(), IS_SUPPORTED_SYSTEM);
        assert_eq!(BoardInfo::query().is_ok(), IS_SUPPORTED_SYSTEM);
        assert_eq!(ProcessorInfo::query().is_ok(), IS_SUPPORTED_SYSTEM);
        assert_eq!(MemoryInfo::query().is_ok(), IS_SUPPORTED_SYSTEM);
        assert_eq!(ChassisInfo::query().is_ok(), IS_SUPPORTED_SYSTEM);
    }
}
