/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/25
******************************************************************************/

//! # CareerMate Client Prelude
//!
//! Re-exports the types most callers need: configuration, the clients, session
//! management, the service traits and their models.
//!
//! ## Usage
//!
//! ```rust
//! use careermate_client::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:8080/api");
//! let client = Client::new(config).unwrap();
//! assert_eq!(client.http().config().rest_api.base_url, "http://localhost:8080/api");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Client configuration
pub use crate::application::config::Config;

/// Library version information
pub use crate::{VERSION, version};

/// Logging setup
pub use crate::utils::logger::setup_logger;

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type and result alias
pub use crate::error::{ApiResult, AppError};

/// Structured error body sent by the backend
pub use crate::model::responses::ApiErrorBody;

// ============================================================================
// CLIENTS AND SESSION MANAGEMENT
// ============================================================================

/// High level client implementing every service trait
pub use crate::application::client::Client;

/// Authenticated HTTP client
pub use crate::model::http::HttpClient;

/// Session manager, session and lifecycle events
pub use crate::application::auth::{Auth, Session, SessionEvent};

/// Session persistence
pub use crate::storage::{FileStore, MemoryStore, SessionStore};

/// Per-request options and file parts
pub use crate::model::requests::{FilePart, RequestOptions};

/// Authentication payloads
pub use crate::model::auth::{
    AuthResponse, LoginRequest, OtpKind, RegisterRequest, StoredSession, UserInfo, UserRole,
};

/// Paging and counters
pub use crate::model::responses::{CountResponse, MessageResponse, Page};

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

pub use crate::application::interfaces::admin::AdminService;
pub use crate::application::interfaces::article::ArticleService;
pub use crate::application::interfaces::challenge::ChallengeService;
pub use crate::application::interfaces::company::CompanyService;
pub use crate::application::interfaces::job::JobService;
pub use crate::application::interfaces::learning::LearningService;
pub use crate::application::interfaces::notification::NotificationService;
pub use crate::application::interfaces::package::PackageService;
pub use crate::application::interfaces::recruiter::RecruiterService;
pub use crate::application::interfaces::student::StudentService;

// ============================================================================
// DOMAIN MODELS
// ============================================================================

pub use crate::presentation::admin::{DashboardStats, UserAccount, UserStatus};
pub use crate::presentation::article::{
    Article, ArticleComment, ArticleQuery, ArticleReaction, NewArticle, ReactionKind,
};
pub use crate::presentation::challenge::{Badge, Challenge, Participation};
pub use crate::presentation::company::{Company, CompanyRating, RatingRequest};
pub use crate::presentation::job::{
    Application, ApplicationCheck, ApplicationStatus, ApplyRequest, Job, JobSearchQuery, JobStatus,
    NewJob,
};
pub use crate::presentation::learning::{
    Course, Enrollment, LessonProgress, LessonProgressUpdate,
};
pub use crate::presentation::notification::Notification;
pub use crate::presentation::package::{Package, Subscription};
pub use crate::presentation::recruiter::RecruiterProfile;
pub use crate::presentation::student::{Cv, CvAnalysis, RoadmapRequest, StudentProfile};

// ============================================================================
// EXTERNAL DEPENDENCIES
// ============================================================================

pub use async_trait::async_trait;
pub use tokio_util::sync::CancellationToken;
pub use tracing::{debug, error, info, warn};
