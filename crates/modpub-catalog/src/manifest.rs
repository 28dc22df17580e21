//! Launcher manifest and version catalog models

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::CatalogError;

/// Release channel a game version was published under, as named by the
/// launcher version manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseChannel {
    Release,
    Snapshot,
    OldBeta,
    OldAlpha,
}

impl ReleaseChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseChannel::Release => "release",
            ReleaseChannel::Snapshot => "snapshot",
            ReleaseChannel::OldBeta => "old_beta",
            ReleaseChannel::OldAlpha => "old_alpha",
        }
    }
}

/// One entry of the local version catalog. Serialized with single-letter
/// keys to keep the cached file small.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameVersion {
    /// Version string as published, e.g. `1.16.5` or `13w41a`
    #[serde(rename = "v")]
    pub version: String,
    /// Release channel
    #[serde(rename = "t")]
    pub channel: ReleaseChannel,
    /// CurseForge game-version id, `-1` when no mapping is known. Absent
    /// in catalogs written before the CurseForge merge step.
    #[serde(rename = "i", default = "unmatched_id")]
    pub curseforge_id: i32,
    /// Release timestamp, UTC, `Z`-suffixed
    #[serde(rename = "d")]
    pub released: String,
}

fn unmatched_id() -> i32 {
    -1
}

impl GameVersion {
    pub fn is_curseforge_matched(&self) -> bool {
        self.curseforge_id != -1
    }
}

/// `latest` block of the launcher version manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct LatestVersions {
    pub release: String,
    pub snapshot: String,
}

/// One version entry of the launcher manifest, reduced to the fields the
/// catalog keeps.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestVersion {
    pub id: String,
    #[serde(rename = "type")]
    pub channel: ReleaseChannel,
    #[serde(rename = "releaseTime")]
    pub release_time: String,
}

/// The launcher version manifest, newest versions first.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionManifest {
    pub latest: LatestVersions,
    pub versions: Vec<ManifestVersion>,
}

/// One entry of the CurseForge version listing.
#[derive(Debug, Clone, Deserialize)]
pub struct CurseForgeVersion {
    #[serde(rename = "versionString")]
    pub version_string: String,
    #[serde(rename = "gameVersionId")]
    pub game_version_id: i32,
}

/// Reduce a launcher manifest to catalog entries. Timestamps are
/// normalized to the `Z` suffix; CurseForge ids start out unmatched.
pub fn process_manifest(manifest: &VersionManifest) -> Vec<GameVersion> {
    let versions: Vec<GameVersion> = manifest
        .versions
        .iter()
        .map(|entry| GameVersion {
            version: entry.id.clone(),
            channel: entry.channel,
            curseforge_id: unmatched_id(),
            released: normalize_release_time(&entry.release_time),
        })
        .collect();

    log::info!(
        "processed {} versions (latest release {}, latest snapshot {})",
        versions.len(),
        manifest.latest.release,
        manifest.latest.snapshot
    );

    versions
}

fn normalize_release_time(release_time: &str) -> String {
    match release_time.strip_suffix("+00:00") {
        Some(trimmed) => format!("{}Z", trimmed),
        None => release_time.to_string(),
    }
}

/// Annotate catalog entries with CurseForge game-version ids. Entries
/// without a mapping keep the unmatched id.
pub fn merge_curseforge_ids(
    versions: &[GameVersion],
    curseforge: &[CurseForgeVersion],
) -> Vec<GameVersion> {
    let mapping: HashMap<&str, i32> = curseforge
        .iter()
        .filter(|entry| !entry.version_string.is_empty())
        .map(|entry| (entry.version_string.as_str(), entry.game_version_id))
        .collect();
    log::info!("created version mapping table with {} entries", mapping.len());

    let mut matched = 0usize;
    let merged: Vec<GameVersion> = versions
        .iter()
        .map(|entry| {
            let id = mapping.get(entry.version.as_str()).copied().unwrap_or(-1);
            if id != -1 {
                matched += 1;
            }
            GameVersion {
                curseforge_id: id,
                ..entry.clone()
            }
        })
        .collect();

    log::info!(
        "merged CurseForge ids: {}/{} versions matched",
        matched,
        merged.len()
    );

    merged
}

/// Load a cached catalog file.
pub fn parse_catalog(json: &str) -> Result<Vec<GameVersion>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a catalog for caching.
pub fn catalog_to_json(versions: &[GameVersion]) -> Result<String, CatalogError> {
    Ok(serde_json::to_string_pretty(versions)?)
}
