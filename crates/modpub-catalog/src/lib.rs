//! Known game version catalog handling and publish-time version selection
//!
//! The publish workflow keeps a local catalog of known runtime versions,
//! assembled from the launcher version manifest and annotated with
//! CurseForge game-version ids. This crate owns the data model for that
//! catalog and the selection logic that, given a mod's declared version
//! range, decides which catalog entries to pre-select for a release.
//!
//! Nothing here performs I/O: callers hand in JSON they fetched or cached
//! themselves and get transformed values back.

mod error;
pub mod manifest;
pub mod selection;

pub use error::CatalogError;
pub use manifest::{
    catalog_to_json, merge_curseforge_ids, parse_catalog, process_manifest, CurseForgeVersion,
    GameVersion, LatestVersions, ManifestVersion, ReleaseChannel, VersionManifest,
};
pub use selection::{compatible_versions, infer_constraint, selection_span, strip_version_prefix};
