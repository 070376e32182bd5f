//! Product catalog loading.
//!
//! The catalog is the fixed content of the page: gallery photos, showcase
//! clips, product variants and statistics. It is assembled once at startup
//! from `catalog.json` in the assets directory plus a scan for photo and
//! clip files the manifest does not mention. Entries whose file is missing
//! are kept with `present = false` so the page keeps its shape and the
//! affected slot renders a placeholder.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::data::{ClipEntry, ImageEntry, ProductVariant, StatSpec};
use crate::error::CatalogError;

/// File extensions scanned as gallery photos
pub const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// File extensions scanned as clip soundtracks
pub const CLIP_EXTENSIONS: &[&str] = &["mp3", "ogg", "flac", "wav"];

/// Fallback variants used when the manifest lists none
const DEFAULT_VARIANTS: [ProductVariant; 3] = [
    ProductVariant {
        weight_grams: 1,
        price_eur: 120.0,
    },
    ProductVariant {
        weight_grams: 3,
        price_eur: 330.0,
    },
    ProductVariant {
        weight_grams: 5,
        price_eur: 510.0,
    },
];

/// The fully resolved page content
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub images: Vec<ImageEntry>,
    pub clips: Vec<ClipEntry>,
    pub variants: Vec<ProductVariant>,
    pub stats: Vec<StatSpec>,
}

/// Raw shape of `catalog.json`
#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    images: Vec<ImageManifest>,
    #[serde(default)]
    clips: Vec<ClipManifest>,
    #[serde(default)]
    variants: Vec<ProductVariant>,
    #[serde(default)]
    stats: Vec<StatSpec>,
}

#[derive(Debug, Deserialize)]
struct ImageManifest {
    file: String,
    alt: String,
}

#[derive(Debug, Deserialize)]
struct ClipManifest {
    file: String,
    title: String,
    #[serde(default)]
    poster: Option<String>,
}

/// Resolve the assets directory.
///
/// `SAFFRON_VITRINE_ASSETS` overrides the default `assets/` next to the
/// working directory.
pub fn assets_dir() -> PathBuf {
    std::env::var_os("SAFFRON_VITRINE_ASSETS")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets"))
}

/// Load and resolve the catalog. Runs as a background task at startup.
pub async fn load(assets: PathBuf) -> Result<Catalog, CatalogError> {
    let manifest_path = assets.join("catalog.json");
    let raw = tokio::fs::read_to_string(&manifest_path)
        .await
        .map_err(|source| CatalogError::ManifestRead {
            path: manifest_path.clone(),
            source,
        })?;
    let manifest: Manifest =
        serde_json::from_str(&raw).map_err(|source| CatalogError::ManifestParse {
            path: manifest_path,
            source,
        })?;

    Ok(resolve(manifest, &assets))
}

fn resolve(manifest: Manifest, assets: &Path) -> Catalog {
    let mut images: Vec<ImageEntry> = manifest
        .images
        .iter()
        .map(|entry| {
            let path = assets.join(&entry.file);
            let present = path.is_file();
            if !present {
                warn!(path = %path.display(), "gallery photo missing, slot keeps a placeholder");
            }
            ImageEntry {
                path,
                alt: entry.alt.clone(),
                present,
            }
        })
        .collect();

    // Photos on disk that the manifest does not mention join the end of the
    // gallery, captioned from their file name.
    for path in discover(&assets.join("photos"), PHOTO_EXTENSIONS) {
        if images.iter().any(|entry| entry.path == path) {
            continue;
        }
        let alt = title_from_stem(&path);
        debug!(path = %path.display(), "discovered unlisted gallery photo");
        images.push(ImageEntry {
            path,
            alt,
            present: true,
        });
    }

    let mut clips: Vec<ClipEntry> = manifest
        .clips
        .iter()
        .map(|entry| {
            let path = assets.join(&entry.file);
            let present = path.is_file();
            if !present {
                warn!(path = %path.display(), "showcase clip missing, card will not play");
            }
            ClipEntry {
                path,
                title: entry.title.clone(),
                poster: entry.poster.as_ref().map(|poster| assets.join(poster)),
                present,
            }
        })
        .collect();

    for path in discover(&assets.join("clips"), CLIP_EXTENSIONS) {
        if clips.iter().any(|entry| entry.path == path) {
            continue;
        }
        let title = title_from_stem(&path);
        debug!(path = %path.display(), "discovered unlisted showcase clip");
        clips.push(ClipEntry {
            path,
            title,
            poster: None,
            present: true,
        });
    }

    let variants = if manifest.variants.is_empty() {
        DEFAULT_VARIANTS.to_vec()
    } else {
        manifest.variants
    };

    Catalog {
        images,
        clips,
        variants,
        stats: manifest.stats,
    }
}

/// Walk a directory for files with one of the given extensions, in
/// file-name order.
fn discover(dir: &Path, extensions: &[&str]) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .map(|ext| {
                    let ext = ext.to_string_lossy().to_lowercase();
                    extensions.contains(&ext.as_str())
                })
                .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();
    found.sort();
    found
}

/// "crocus-harvest_2024.jpg" becomes "Crocus harvest 2024"
fn title_from_stem(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let spaced: String = stem
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect();
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "saffron-vitrine-{name}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("photos")).unwrap();
        fs::create_dir_all(dir.join("clips")).unwrap();
        dir
    }

    #[test]
    fn manifest_parses_with_defaults() {
        let manifest: Manifest = serde_json::from_str(
            r#"{ "images": [{ "file": "photos/a.jpg", "alt": "A" }] }"#,
        )
        .unwrap();

        assert_eq!(manifest.images.len(), 1);
        assert!(manifest.clips.is_empty());
        assert!(manifest.variants.is_empty());
        assert!(manifest.stats.is_empty());
    }

    #[test]
    fn missing_files_keep_their_slot() {
        let dir = scratch_dir("missing");
        let manifest: Manifest = serde_json::from_str(
            r#"{ "images": [{ "file": "photos/ghost.jpg", "alt": "Ghost" }] }"#,
        )
        .unwrap();

        let catalog = resolve(manifest, &dir);

        assert_eq!(catalog.images.len(), 1);
        assert!(!catalog.images[0].present);
        assert_eq!(catalog.variants.len(), DEFAULT_VARIANTS.len());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn unlisted_photos_join_after_manifest_entries() {
        let dir = scratch_dir("discover");
        fs::write(dir.join("photos/listed.jpg"), b"x").unwrap();
        fs::write(dir.join("photos/extra.jpg"), b"x").unwrap();
        fs::write(dir.join("photos/notes.txt"), b"x").unwrap();

        let manifest: Manifest = serde_json::from_str(
            r#"{ "images": [{ "file": "photos/listed.jpg", "alt": "Listed" }] }"#,
        )
        .unwrap();

        let catalog = resolve(manifest, &dir);

        assert_eq!(catalog.images.len(), 2);
        assert_eq!(catalog.images[0].alt, "Listed");
        assert_eq!(catalog.images[1].alt, "Extra");
        assert!(catalog.images[1].present);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn stem_titles_are_humanized() {
        assert_eq!(
            title_from_stem(Path::new("photos/crocus-harvest_2024.jpg")),
            "Crocus harvest 2024"
        );
        assert_eq!(title_from_stem(Path::new("x/saffron.webp")), "Saffron");
    }
}
