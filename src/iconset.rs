// ---------------------------------------------------------------------------
// Iconset driver: renders every entry of the macOS .iconset layout
// ---------------------------------------------------------------------------

use crate::{icon, png};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Directory name `iconutil` expects.
pub const ICONSET_DIR_NAME: &str = "icon.iconset";

/// Follow-up command printed once the iconset is written.
pub const ICONUTIL_HINT: &str = "iconutil -c icns icon.iconset -o icon.icns";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconsetEntry {
    pub filename: &'static str,
    pub size: u32,
}

const fn entry(filename: &'static str, size: u32) -> IconsetEntry {
    IconsetEntry { filename, size }
}

/// 16, 32, 128, 256 and 512 points, each at 1x and 2x.
pub const ICONSET_ENTRIES: [IconsetEntry; 10] = [
    entry("icon_16x16.png", 16),
    entry("icon_16x16@2x.png", 32),
    entry("icon_32x32.png", 32),
    entry("icon_32x32@2x.png", 64),
    entry("icon_128x128.png", 128),
    entry("icon_128x128@2x.png", 256),
    entry("icon_256x256.png", 256),
    entry("icon_256x256@2x.png", 512),
    entry("icon_512x512.png", 512),
    entry("icon_512x512@2x.png", 1024),
];

/// Rendered pixel buffers keyed by size, alive for one run.
pub struct RenderCache<F> {
    render: F,
    rendered: HashMap<u32, Vec<u8>>,
    renders: usize,
}

impl<F: FnMut(u32) -> Vec<u8>> RenderCache<F> {
    pub fn new(render: F) -> Self {
        Self {
            render,
            rendered: HashMap::new(),
            renders: 0,
        }
    }

    pub fn get(&mut self, size: u32) -> &[u8] {
        let Self {
            render,
            rendered,
            renders,
        } = self;
        rendered
            .entry(size)
            .or_insert_with(|| {
                log::debug!("Rendering {size}x{size}");
                *renders += 1;
                render(size)
            })
            .as_slice()
    }

    /// How many times the renderer actually ran.
    pub fn renders(&self) -> usize {
        self.renders
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconsetReport {
    pub dir: PathBuf,
    pub files: Vec<PathBuf>,
    pub renders: usize,
}

/// Write every iconset entry into `dir`, creating it if needed.
pub fn generate_iconset(dir: &Path) -> Result<IconsetReport> {
    generate_iconset_with(dir, icon::create_icon)
}

pub fn generate_iconset_with<F>(dir: &Path, render: F) -> Result<IconsetReport>
where
    F: FnMut(u32) -> Vec<u8>,
{
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create iconset dir {}", dir.display()))?;

    let mut cache = RenderCache::new(render);
    let mut files = Vec::with_capacity(ICONSET_ENTRIES.len());

    for IconsetEntry { filename, size } in ICONSET_ENTRIES {
        log::info!("Generating {filename} ({size}x{size})...");
        let pixels = cache.get(size);
        let data = png::encode_rgba(size, size, pixels)
            .with_context(|| format!("encode {filename}"))?;

        let path = dir.join(filename);
        std::fs::write(&path, &data).with_context(|| format!("write {}", path.display()))?;
        files.push(path);
    }

    Ok(IconsetReport {
        dir: dir.to_path_buf(),
        files,
        renders: cache.renders(),
    })
}
