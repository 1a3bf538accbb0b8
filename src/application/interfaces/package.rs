use crate::error::AppError;
use crate::presentation::package::{Package, Subscription};
use async_trait::async_trait;

/// Interface for subscription packages
#[async_trait]
pub trait PackageService: Send + Sync {
    /// Lists available packages
    async fn get_packages(&self) -> Result<Vec<Package>, AppError>;

    /// Current subscription; `None` when the user has none
    async fn get_my_subscription(&self) -> Result<Option<Subscription>, AppError>;

    /// Requests a subscription, pending admin approval
    async fn request_subscription(&self, package_id: &str) -> Result<Subscription, AppError>;
}
