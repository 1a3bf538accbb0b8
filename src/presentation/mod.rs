/// Admin dashboard and user management models
pub mod admin;
/// Community article models
pub mod article;
/// Challenge and badge models
pub mod challenge;
/// Company and rating models
pub mod company;
/// Job and application models
pub mod job;
/// Course and enrollment models
pub mod learning;
/// Notification models
pub mod notification;
/// Package and subscription models
pub mod package;
/// Recruiter profile models
pub mod recruiter;
/// Student profile, CV and AI models
pub mod student;
