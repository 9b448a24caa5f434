//! Read-only course catalog.

use store::{Course, RecordStore};

use crate::error::ApiError;

/// All courses, unfiltered and unpaginated.
pub async fn list(store: &dyn RecordStore) -> Result<Vec<Course>, ApiError> {
    store
        .list_courses()
        .await
        .map_err(|e| ApiError::internal("Failed to fetch courses", e))
}
