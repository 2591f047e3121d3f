use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::error::{Error, Result};

/// Sprite categories shipped at double resolution; their images are halved
/// before use, matching the downscale the rest of the asset pipeline applies.
const HALVED_SUBDIRS: &[&str] = &["blocks", "mechs", "walls"];

/// Locates and caches sprite images under a search root.
///
/// A sprite name maps to the file `<name>.png` found anywhere below the
/// root. The search is depth-first with directory entries visited in
/// lexicographic order, so resolution between same-named files in different
/// subdirectories is deterministic: the lexicographically first path wins.
pub struct SpriteLookup {
    root: PathBuf,
    cache: HashMap<String, RgbaImage>,
}

impl SpriteLookup {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Locate, load and cache the sprite if it is not cached yet.
    pub fn preload(&mut self, name: &str) -> Result<()> {
        if self.cache.contains_key(name) {
            return Ok(());
        }

        let file_name = format!("{name}.png");
        let path = find_file(&self.root, &file_name)?.ok_or_else(|| Error::SpriteNotFound {
            name: name.to_string(),
        })?;

        let mut sprite = image::open(&path)?.to_rgba8();
        if requires_halving(&self.root, &path) {
            sprite = halve(&sprite);
        }
        self.cache.insert(name.to_string(), sprite);
        Ok(())
    }

    /// Fetch a previously preloaded sprite.
    pub fn get(&self, name: &str) -> Option<&RgbaImage> {
        self.cache.get(name)
    }
}

fn find_file(dir: &Path, file_name: &str) -> io::Result<Option<PathBuf>> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .collect();
    entries.sort();

    for path in entries {
        if path.is_dir() {
            if let Some(found) = find_file(&path, file_name)? {
                return Ok(Some(found));
            }
        } else if path.file_name().is_some_and(|n| n == file_name) {
            return Ok(Some(path));
        }
    }
    Ok(None)
}

fn requires_halving(root: &Path, path: &Path) -> bool {
    path.strip_prefix(root)
        .ok()
        .and_then(|rel| rel.components().next())
        .map(|first| {
            HALVED_SUBDIRS
                .iter()
                .any(|dir| first.as_os_str() == *dir)
        })
        .unwrap_or(false)
}

fn halve(sprite: &RgbaImage) -> RgbaImage {
    imageops::resize(
        sprite,
        (sprite.width() / 2).max(1),
        (sprite.height() / 2).max(1),
        FilterType::Nearest,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::TempDir;

    fn write_sprite(dir: &Path, name: &str, size: u32, color: [u8; 4]) {
        fs::create_dir_all(dir).unwrap();
        let img = RgbaImage::from_pixel(size, size, Rgba(color));
        img.save(dir.join(format!("{name}.png"))).unwrap();
    }

    #[test]
    fn test_recursive_lookup_and_halving() {
        let root = TempDir::new().unwrap();
        write_sprite(
            &root.path().join("blocks").join("environment"),
            "stone1",
            32,
            [10, 20, 30, 255],
        );

        let mut sprites = SpriteLookup::new(root.path());
        sprites.preload("stone1").unwrap();
        let sprite = sprites.get("stone1").unwrap();
        // Under blocks/ the 32px source is halved to 16px.
        assert_eq!(sprite.dimensions(), (16, 16));
        assert_eq!(sprite.get_pixel(0, 0).0, [10, 20, 30, 255]);
    }

    #[test]
    fn test_unhalved_outside_marked_subdirs() {
        let root = TempDir::new().unwrap();
        write_sprite(&root.path().join("items"), "salt", 32, [1, 2, 3, 255]);

        let mut sprites = SpriteLookup::new(root.path());
        sprites.preload("salt").unwrap();
        assert_eq!(sprites.get("salt").unwrap().dimensions(), (32, 32));
    }

    #[test]
    fn test_duplicate_names_resolve_lexicographically() {
        let root = TempDir::new().unwrap();
        write_sprite(&root.path().join("items").join("boulders"), "salt", 8, [9, 9, 9, 255]);
        write_sprite(&root.path().join("items").join("ores"), "salt", 8, [7, 7, 7, 255]);

        let mut sprites = SpriteLookup::new(root.path());
        sprites.preload("salt").unwrap();
        // "boulders" sorts before "ores".
        assert_eq!(sprites.get("salt").unwrap().get_pixel(0, 0).0, [9, 9, 9, 255]);
    }

    #[test]
    fn test_missing_sprite() {
        let root = TempDir::new().unwrap();
        let mut sprites = SpriteLookup::new(root.path());
        assert!(matches!(
            sprites.preload("no-such-tile"),
            Err(Error::SpriteNotFound { .. })
        ));
        assert!(sprites.get("no-such-tile").is_none());
    }
}
