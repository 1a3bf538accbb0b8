use crate::error::AppError;

/// Admin service implementation
pub mod admin_service;
/// Article service implementation
pub mod article_service;
/// Challenge service implementation
pub mod challenge_service;
/// Company service implementation
pub mod company_service;
/// Job service implementation
pub mod job_service;
/// Learning service implementation
pub mod learning_service;
/// Notification service implementation
pub mod notification_service;
/// Package service implementation
pub mod package_service;
/// Recruiter service implementation
pub mod recruiter_service;
/// Student service implementation
pub mod student_service;

/// Validates an identifier interpolated into a request path
///
/// Rejects anything URL normalisation could turn into another path segment.
pub(crate) fn path_id<'a>(name: &str, id: &'a str) -> Result<&'a str, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty()
        || matches!(trimmed, "." | "..")
        || trimmed.contains(['/', '\\', '?', '#', '%'])
    {
        return Err(AppError::InvalidInput(format!("invalid {name}: {id:?}")));
    }
    Ok(trimmed)
}

/// Maps a 404 to `None`
pub(crate) fn optional<T>(result: Result<T, AppError>) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}
