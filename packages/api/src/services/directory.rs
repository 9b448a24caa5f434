//! Irregular-student directory: list, create and delete. There is no update.

use store::{IrregularStudent, NewIrregularStudent, RecordStore};
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::error::ApiError;

/// Every record flagged as irregular. A failed read yields an empty list.
pub async fn list(store: &dyn RecordStore) -> Vec<IrregularStudent> {
    store.list_irregular_students().await.unwrap_or_else(|e| {
        error!("Failed to fetch irregular students: {}", e);
        Vec::new()
    })
}

/// Store a new irregular student. The irregular flag is forced on.
pub async fn create(
    store: &dyn RecordStore,
    mut student: NewIrregularStudent,
) -> Result<IrregularStudent, ApiError> {
    student.student_id = student.student_id.trim().to_string();
    student.user_id = student.user_id.trim().to_string();
    if student.student_id.is_empty() || student.user_id.is_empty() {
        return Err(ApiError::Validation(
            "student_id and user_id are required".to_string(),
        ));
    }
    if student.level < 1 {
        return Err(ApiError::Validation("level must be positive".to_string()));
    }
    student.irregulars = true;

    let stored = store
        .insert_irregular_student(student)
        .await
        .map_err(|e| ApiError::internal("Failed to add irregular student", e))?;
    info!(id = %stored.id, student_id = %stored.student_id, "added irregular student");
    Ok(stored)
}

/// Delete by identifier. Succeeds whether or not the record existed.
pub async fn delete(store: &dyn RecordStore, id: &str) -> Result<(), ApiError> {
    let Ok(id) = Uuid::parse_str(id) else {
        debug!(id, "delete of malformed irregular student id ignored");
        return Ok(());
    };

    let deleted = store
        .delete_irregular_student(id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete irregular student", e))?;
    debug!(%id, deleted, "irregular student delete");
    Ok(())
}
