// Take a look at the license at the top of the repository in the LICENSE file.

use std::fs;
use std::path::Path;

/// Slurps a single-value attribute file.
///
/// A missing or unreadable file is an expected condition, not a fault, and
/// yields an empty string. Trailing newline/carriage-return characters are
/// stripped before the byte-level ASCII trim.
pub(crate) fn read_text_file<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => content
            .trim_end_matches(['\n', '\r'])
            .trim_ascii()
            .to_owned(),
        Err(e) => {
            smbios_debug!("cannot read {path:?}: {e}");
            String::new()
        }
    }
}
