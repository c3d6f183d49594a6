//! Filesystem-based asset source for item images.

use gpui::{AssetSource, SharedString};
use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

/// Image shown for an item type
pub fn item_image_path(item_type: &str) -> SharedString {
    SharedString::from(format!("assets/images/{item_type}.webp"))
}

/// Looks next to the executable first, then relative to the working directory
pub struct FileAssets {
    roots: Vec<PathBuf>,
}

impl FileAssets {
    pub fn new() -> Self {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()));
        let roots = exe_dir
            .into_iter()
            .chain(std::env::current_dir().ok())
            .chain(std::iter::once(PathBuf::new()))
            .collect();
        Self { roots }
    }
}

impl Default for FileAssets {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetSource for FileAssets {
    fn load(&self, path: &str) -> gpui::Result<Option<Cow<'static, [u8]>>> {
        for root in &self.roots {
            if let Ok(data) = fs::read(root.join(path)) {
                return Ok(Some(Cow::Owned(data)));
            }
        }
        tracing::debug!(path, "asset not found");
        Ok(None)
    }

    fn list(&self, path: &str) -> gpui::Result<Vec<SharedString>> {
        let mut results = Vec::new();
        for root in &self.roots {
            if let Ok(entries) = fs::read_dir(root.join(path)) {
                for entry in entries.flatten() {
                    if let Some(name) = entry.file_name().to_str() {
                        results.push(SharedString::from(name.to_string()));
                    }
                }
                break;
            }
        }
        Ok(results)
    }
}
