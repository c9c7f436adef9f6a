use std::path::{Path, PathBuf};

const ASSETS_ENV: &str = "SHELF_ASSETS";

/// Picks the directory holding `assets/catalog/content.toml`.
///
/// Order: `--assets`, then `SHELF_ASSETS`, then the nearest ancestor of the
/// working directory or the crate root that has a content file, then CWD.
pub fn resolve_assets_root(cli: Option<String>) -> PathBuf {
    let explicit = cli
        .map(PathBuf::from)
        .into_iter()
        .chain(std::env::var_os(ASSETS_ENV).map(PathBuf::from));
    for dir in explicit {
        if dir.is_dir() {
            return dir;
        }
        log::warn!("assets dir {} not found; searching defaults", dir.display());
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let found = [cwd.as_path(), manifest.as_path()]
        .into_iter()
        .flat_map(Path::ancestors)
        .find(|dir| content_path(dir).is_file())
        .map(Path::to_path_buf);
    found.unwrap_or(cwd)
}

pub fn content_path(root: &Path) -> PathBuf {
    root.join("assets/catalog/content.toml")
}
