//! Where the demo keeps its config and logs.

use std::path::PathBuf;

use directories::ProjectDirs;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "combobox", "combobox-demo")
}

/// Directory holding `latest.log` and its archived predecessors.
///
/// On Linux this is `$XDG_CACHE_HOME/combobox-demo`.
pub fn log_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Options file read when no path is given on the command line.
///
/// On Linux this is `$XDG_CONFIG_HOME/combobox-demo/combobox.json`.
pub fn config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("combobox.json"))
}
