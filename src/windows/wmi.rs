// Take a look at the license at the top of the repository in the LICENSE file.

use windows::Win32::System::Com::{
    CLSCTX_INPROC_SERVER, COINIT_MULTITHREADED, CoCreateInstance, CoInitializeEx,
    CoInitializeSecurity, CoSetProxyBlanket, CoUninitialize, EOAC_NONE, RPC_C_AUTHN_LEVEL_CALL,
    RPC_C_AUTHN_LEVEL_DEFAULT, RPC_C_IMP_LEVEL_IMPERSONATE,
};
use windows::Win32::System::Rpc::{RPC_C_AUTHN_WINNT, RPC_C_AUTHZ_NONE};
use windows::Win32::System::Variant::{VARENUM, VT_BSTR, VT_I2, VT_I4, VT_UI1, VT_UI2, VT_UI4};
use windows::Win32::System::Wmi::{
    IEnumWbemClassObject, IWbemClassObject, IWbemLocator, IWbemServices, WBEM_FLAG_FORWARD_ONLY,
    WBEM_FLAG_RETURN_IMMEDIATELY, WBEM_INFINITE, WbemLocator,
};
use windows::core::{BSTR, VARIANT};

// COM has to be initialized per use and uninitialized exactly as many times
// on teardown.
struct ComGuard {
    initialized: bool,
}

impl ComGuard {
    fn new() -> Self {
        let initialized = unsafe { CoInitializeEx(None, COINIT_MULTITHREADED).is_ok() };
        if initialized {
            // May legitimately fail when the host process already configured
            // COM security; queries still work in that case.
            let _ = unsafe {
                CoInitializeSecurity(
                    None,
                    -1,
                    None,
                    None,
                    RPC_C_AUTHN_LEVEL_DEFAULT,
                    RPC_C_IMP_LEVEL_IMPERSONATE,
                    None,
                    EOAC_NONE,
                    None,
                )
            };
        }
        Self { initialized }
    }
}

impl Drop for ComGuard {
    fn drop(&mut self) {
        if self.initialized {
            unsafe { CoUninitialize() };
        }
    }
}

/// One acquisition session against the local management service.
///
/// A session is built per record query and torn down when dropped. If any
/// establishment step fails the session stays degraded: every property read
/// on it returns an empty string. No retry is attempted.
pub(crate) struct WmiSession {
    // Declared before the guard so the service proxy is released ahead of
    // `CoUninitialize`.
    services: Option<IWbemServices>,
    _com: ComGuard,
}

impl WmiSession {
    pub(crate) fn connect() -> Self {
        let com = ComGuard::new();
        let services = if com.initialized {
            connect_server()
        } else {
            None
        };
        if services.is_none() {
            smbios_debug!("management service session failed, property reads degrade to empty");
        }
        Self {
            services,
            _com: com,
        }
    }

    /// Runs `SELECT <property> FROM <class>` and extracts the first row's
    /// value as text. Unsupported variant types yield an empty string.
    pub(crate) fn query_property(&self, class: &str, property: &str) -> String {
        let Some(services) = &self.services else {
            return String::new();
        };

        unsafe {
            let enumerator: IEnumWbemClassObject = match services.ExecQuery(
                &BSTR::from("WQL"),
                &BSTR::from(format!("SELECT {property} FROM {class}")),
                WBEM_FLAG_FORWARD_ONLY | WBEM_FLAG_RETURN_IMMEDIATELY,
                None,
            ) {
                Ok(enumerator) => enumerator,
                Err(_e) => {
                    smbios_debug!("{class}.{property} query failed: {_e}");
                    return String::new();
                }
            };

            let mut rows: [Option<IWbemClassObject>; 1] = [None];
            let mut returned = 0;
            let _ = enumerator.Next(WBEM_INFINITE.0, &mut rows, &mut returned);
            if returned == 0 {
                return String::new();
            }
            let Some(row) = rows[0].take() else {
                return String::new();
            };

            let name = BSTR::from(property);
            let mut value = VARIANT::default();
            if row.Get(&name, 0, &mut value, None, None).is_err() {
                return String::new();
            }
            variant_to_string(&value)
                .unwrap_or_default()
                .trim_ascii()
                .to_owned()
        }
    }
}

fn connect_server() -> Option<IWbemServices> {
    unsafe {
        let locator: IWbemLocator =
            CoCreateInstance(&WbemLocator, None, CLSCTX_INPROC_SERVER).ok()?;

        let services = locator
            .ConnectServer(
                &BSTR::from("ROOT\\CIMV2"),
                &BSTR::new(),
                &BSTR::new(),
                &BSTR::new(),
                0,
                &BSTR::new(),
                None,
            )
            .ok()?;

        CoSetProxyBlanket(
            &services,
            RPC_C_AUTHN_WINNT,
            RPC_C_AUTHZ_NONE,
            None,
            RPC_C_AUTHN_LEVEL_CALL,
            RPC_C_IMP_LEVEL_IMPERSONATE,
            None,
            EOAC_NONE,
        )
        .ok()?;

        Some(services)
    }
}

// The type tag is the leading 16-bit field of the VARIANT layout.
#[inline]
fn variant_vt(value: &VARIANT) -> VARENUM {
    unsafe { VARENUM(*(value as *const VARIANT as *const u16)) }
}

fn variant_to_string(value: &VARIANT) -> Option<String> {
    let vt = variant_vt(value);
    if vt == VT_BSTR {
        return BSTR::try_from(value).ok().map(|s| s.to_string());
    }
    if vt == VT_I4 {
        return i32::try_from(value).ok().map(|v| v.to_string());
    }
    if vt == VT_UI4 {
        return u32::try_from(value).ok().map(|v| v.to_string());
    }
    if vt == VT_I2 {
        return i16::try_from(value).ok().map(|v| v.to_string());
    }
    if vt == VT_UI2 {
        return u16::try_from(value).ok().map(|v| v.to_string());
    }
    if vt == VT_UI1 {
        // No conversion trait exists for unsigned bytes; the payload starts
        // at offset 8 of the VARIANT layout.
        let byte = unsafe { *(value as *const VARIANT as *const u8).add(8) };
        return Some(byte.to_string());
    }
    None
}
