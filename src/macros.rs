// Take a look at the license at the top of the repository in the LICENSE file.

// Trace for acquisition failures. Routed through `log` so the host
// application decides whether it is visible.
#[doc(hidden)]
#[allow(unused)]
macro_rules! smbios_debug {
    ($($x:tt)*) => {{
        log::debug!($($x)*);
    }}
}
