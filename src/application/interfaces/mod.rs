/// Admin service interface
pub mod admin;
/// Article service interface
pub mod article;
/// Challenge service interface
pub mod challenge;
/// Company service interface
pub mod company;
/// Job service interface
pub mod job;
/// Learning service interface
pub mod learning;
/// Notification service interface
pub mod notification;
/// Package service interface
pub mod package;
/// Recruiter service interface
pub mod recruiter;
/// Student service interface
pub mod student;
