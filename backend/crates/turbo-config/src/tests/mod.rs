
use std::env;
use std::path::Path;

use tempfile::TempDir;

/// Sets an env var for the lifetime of the value and puts back whatever was
/// there before. Only use from `#[serial]` tests.
pub(crate) struct ScopedVar {
    key: &'static str,
    previous: Option<String>,
}

impl ScopedVar {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        let previous = env::var(key).ok();
        // SAFETY: callers are serialized
        unsafe { env::set_var(key, value) };
        Self { key, previous }
    }
}

impl Drop for ScopedVar {
    fn drop(&mut self) {
        // SAFETY: callers are serialized
        unsafe {
            if let Some(previous) = self.previous.take() {
                env::set_var(self.key, previous);
            } else {
                env::remove_var(self.key);
            }
        }
    }
}

/// Fresh config directory that `Config::load` will read from
pub(crate) fn setup_config_dir() -> (TempDir, ScopedVar) {
    let dir = TempDir::new().unwrap();
    let var = ScopedVar::set(crate::CONFIG_DIR_ENV, dir.path().to_str().unwrap());
    (dir, var)
}

pub(crate) fn write_config(dir: &Path, toml: &str) {
    std::fs::write(dir.join(crate::CONFIG_FILENAME), toml).unwrap();
}
