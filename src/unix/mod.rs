// Take a look at the license at the top of the repository in the LICENSE file.

cfg_if::cfg_if! {
    if #[cfg(any(target_os = "linux", target_os = "android"))] {
        pub(crate) mod linux;
        pub(crate) use linux as sys;
    } else if #[cfg(target_os = "macos")] {
        pub(crate) mod apple;
        pub(crate) use apple as sys;
    } else {
        compile_error!("Invalid cfg!");
    }
}
