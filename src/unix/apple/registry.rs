// Take a look at the license at the top of the repository in the LICENSE file.

use std::ffi::CString;
use std::num::NonZeroU32;

use objc2_core_foundation::{CFData, CFGetTypeID, CFString, ConcreteType, kCFAllocatorDefault};
use objc2_io_kit::{
    IOObjectRelease, IORegistryEntryCreateCFProperty, IOServiceGetMatchingService,
    IOServiceMatching, kIOMasterPortDefault,
};

// Releases the matched service object when the lookup scope ends.
struct IoReleaser(NonZeroU32);

impl IoReleaser {
    fn new(obj: u32) -> Option<Self> {
        NonZeroU32::new(obj).map(Self)
    }

    #[inline]
    fn inner(&self) -> u32 {
        self.0.get()
    }
}

impl Drop for IoReleaser {
    fn drop(&mut self) {
        unsafe { IOObjectRelease(self.0.get() as _) };
    }
}

fn matching_service(service: &str) -> Option<IoReleaser> {
    let class = CString::new(service).ok()?;
    let matching = match unsafe { IOServiceMatching(class.as_ptr().cast()) } {
        Some(matching) => matching,
        None => {
            smbios_debug!("IOServiceMatching call failed, `{service}` not found");
            return None;
        }
    };

    let result = unsafe {
        IOServiceGetMatchingService(kIOMasterPortDefault, Some(matching.as_opaque().into()))
    };
    if result == 0 {
        smbios_debug!("IOServiceGetMatchingService failed for `{service}`");
        return None;
    }
    IoReleaser::new(result)
}

/// Fetches a named property that may be string-typed or byte-buffer-typed.
///
/// Byte buffers are common for firmware-exposed fields and are null-padded
/// fixed-size values; they decode as UTF-8 up to the first null byte.
/// A missing service or property yields `None`, never an error.
pub(crate) fn registry_entry_string(service: &str, property: &str) -> Option<String> {
    let entry = matching_service(service)?;
    let key = CFString::from_str(property);
    let value = unsafe {
        IORegistryEntryCreateCFProperty(entry.inner(), Some(&key), kCFAllocatorDefault, 0)
    }?;

    let decoded = if CFGetTypeID(Some(&*value)) == CFString::type_id() {
        value.downcast::<CFString>().ok().map(|s| s.to_string())
    } else {
        value.downcast::<CFData>().ok().and_then(|data| {
            let bytes = data.to_vec();
            let prefix = bytes.split(|&b| b == 0).next().unwrap_or(&[]);
            std::str::from_utf8(prefix).ok().map(str::to_owned)
        })
    };
    decoded.map(|s| s.trim_ascii().to_owned())
}

/// Fetches a named property accepting only the string-typed representation.
/// Byte-buffer UUIDs are not decoded.
pub(crate) fn registry_entry_uuid(service: &str, property: &str) -> Option<String> {
    let entry = matching_service(service)?;
    let key = CFString::from_str(property);
    let value = unsafe {
        IORegistryEntryCreateCFProperty(entry.inner(), Some(&key), kCFAllocatorDefault, 0)
    }?;

    value
        .downcast::<CFString>()
        .ok()
        .map(|s| s.to_string().trim_ascii().to_owned())
}
