//! Local file materialisation for exported content

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes downloads into a single directory
#[derive(Clone, Debug)]
pub struct Downloads {
    dir: PathBuf,
}

impl Downloads {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Save `content` under the suggested name and return the final path.
    ///
    /// Only the last path component of `filename` is used. An existing
    /// file is never overwritten; `name (1).ext`, `name (2).ext`, ... are tried.
    pub fn save(&self, filename: &str, content: &str) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let name = sanitize_filename(filename);
        let path = self.unused_path(&name);
        fs::write(&path, content)?;
        info!("Saved download {} ({} bytes)", path.display(), content.len());
        Ok(path)
    }

    fn unused_path(&self, name: &str) -> PathBuf {
        let candidate = self.dir.join(name);
        if !candidate.exists() {
            return candidate;
        }

        let as_path = Path::new(name);
        let stem = as_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| name.to_string());
        let ext = as_path.extension().map(|e| e.to_string_lossy().to_string());

        (1..)
            .map(|n| match &ext {
                Some(ext) => self.dir.join(format!("{} ({}).{}", stem, n, ext)),
                None => self.dir.join(format!("{} ({})", stem, n)),
            })
            .find(|p| !p.exists())
            .unwrap_or(candidate)
    }
}

fn sanitize_filename(filename: &str) -> String {
    Path::new(filename.trim())
        .file_name()
        .map(|f| f.to_string_lossy().to_string())
        .filter(|f| !f.is_empty())
        .unwrap_or_else(|| "export.txt".to_string())
}
