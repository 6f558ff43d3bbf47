//! Where the editor's gallery selection comes from.
//!
//! A host hands the editor a JSON array of gallery snapshots. Without one the
//! editor opens on a small built-in selection so the dialog can be tried out.

use std::fs;
use std::path::Path;

use anyhow::Context;
use curator_model::prelude::*;

/// Reads a JSON array of [`SelectedGallery`] from `path`.
pub fn load_from_file(path: &Path) -> anyhow::Result<Vec<SelectedGallery>> {
    let raw = fs::read_to_string(path).with_context(|| {
        format!("failed to read selection from {}", path.display())
    })?;
    parse(&raw)
        .with_context(|| format!("invalid selection file {}", path.display()))
}

pub fn parse(raw: &str) -> anyhow::Result<Vec<SelectedGallery>> {
    let selection: Vec<SelectedGallery> = serde_json::from_str(raw)?;
    Ok(selection)
}

/// Three galleries that agree on some fields and disagree on others.
pub fn demo_selection() -> anyhow::Result<Vec<SelectedGallery>> {
    let studio = StudioID::new("s1")?;
    let ann = PerformerID::new("p1")?;
    let bea = PerformerID::new("p2")?;
    let outdoor = TagID::new("t1")?;
    let film = TagID::new("t2")?;

    Ok(vec![
        SelectedGallery::new(GalleryID::new("101")?)
            .with_title("Coastline")
            .with_rating(4)
            .with_studio(studio.clone(), "North Light")
            .with_performer(ann.clone(), "Ann")
            .with_tag(outdoor.clone(), "Outdoor")
            .with_organized(true),
        SelectedGallery::new(GalleryID::new("102")?)
            .with_title("Coastline")
            .with_rating(3)
            .with_studio(studio.clone(), "North Light")
            .with_performer(ann.clone(), "Ann")
            .with_performer(bea, "Bea")
            .with_tag(outdoor.clone(), "Outdoor")
            .with_organized(true),
        SelectedGallery::new(GalleryID::new("103")?)
            .with_title("Coastline")
            .with_studio(studio, "North Light")
            .with_performer(ann, "Ann")
            .with_tag(outdoor, "Outdoor")
            .with_tag(film, "Film")
            .with_organized(false),
    ])
}
