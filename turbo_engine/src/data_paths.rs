//! Locating the bundled `world.ron` and `quest.toml`.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Environment variable that overrides data directory detection.
pub const DATA_DIR_ENV: &str = "TURBO_DATA_DIR";

const ENGINE_DATA: &str = "turbo_engine/data";

static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

fn detect_data_root() -> PathBuf {
    if let Some(dir) = env::var_os(DATA_DIR_ENV).filter(|dir| !dir.is_empty()) {
        return PathBuf::from(dir);
    }
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    candidate_dirs(exe_dir.as_deref())
        .into_iter()
        .find(|dir| dir.is_dir())
        .unwrap_or_else(|| PathBuf::from(ENGINE_DATA))
}

/// Places the data directory may live, in search order: relative to the working
/// directory first (workspace root or crate root), then next to the executable
/// and one level above it.
fn candidate_dirs(exe_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut bases = vec![PathBuf::new()];
    if let Some(dir) = exe_dir {
        bases.push(dir.to_path_buf());
        if let Some(parent) = dir.parent() {
            bases.push(parent.to_path_buf());
        }
    }
    bases
        .iter()
        .flat_map(|base| [base.join(ENGINE_DATA), base.join("data")])
        .collect()
}
