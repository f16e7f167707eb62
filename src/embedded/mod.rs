//! Site assets bundled at compile time
//!
//! This module embeds the `assets` directory into the binary so the server
//! and the static export need no files next to the executable.

use include_dir::{include_dir, Dir};

/// Embedded assets directory
///
/// Directory structure:
/// ```text
/// assets/
/// ├── templates/   minijinja page templates
/// ├── static/      css and js served under /static/
/// ├── sw.js
/// └── manifest.webmanifest
/// ```
pub static SITE_ASSETS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Get an embedded file's raw bytes by path relative to `assets/`
pub fn get_bytes(path: &str) -> Option<&'static [u8]> {
    SITE_ASSETS.get_file(path).map(|file| file.contents())
}

/// List all templates as `(name, source)` pairs
///
/// Names are relative to `templates/`, e.g. `home.html`.
pub fn templates() -> Vec<(&'static str, &'static str)> {
    SITE_ASSETS
        .get_dir("templates")
        .map(|dir| {
            dir.files()
                .filter_map(|file| {
                    let name = file.path().file_name()?.to_str()?;
                    Some((name, file.contents_utf8()?))
                })
                .collect()
        })
        .unwrap_or_default()
}

/// List every file under `static/` as a path relative to `static/`
pub fn static_files() -> Vec<&'static str> {
    let mut paths = Vec::new();
    if let Some(dir) = SITE_ASSETS.get_dir("static") {
        collect_files(dir, &mut paths);
    }
    paths
        .into_iter()
        .filter_map(|path| path.strip_prefix("static/"))
        .collect()
}

fn collect_files(dir: &'static Dir<'static>, out: &mut Vec<&'static str>) {
    for file in dir.files() {
        if let Some(path) = file.path().to_str() {
            out.push(path);
        }
    }
    for sub in dir.dirs() {
        collect_files(sub, out);
    }
}
