use std::env;
use std::path::{Path, PathBuf};

/// Expand a leading `~` or `~/` to the user's home directory.
///
/// Paths that do not start with a tilde, and `~user` forms, are returned
/// unchanged. Also unchanged if no home directory can be determined.
pub fn expand_tilde<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();

    if let Some(raw) = path.to_str() {
        if raw == "~" {
            if let Some(home) = env::var_os("HOME") {
                return PathBuf::from(home);
            }
        } else if let Some(rest) = raw.strip_prefix("~/") {
            if let Some(home) = env::var_os("HOME") {
                return PathBuf::from(home).join(rest);
            }
        }
    }

    path.to_path_buf()
}
