use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to parse version catalog: {0}")]
    Json(#[from] serde_json::Error),
}
