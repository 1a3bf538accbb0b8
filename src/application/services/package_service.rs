use crate::application::client::Client;
use crate::application::interfaces::package::PackageService;
use crate::application::services::{optional, path_id};
use crate::error::AppError;
use crate::model::requests::RequestOptions;
use crate::presentation::package::{Package, Subscription};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl PackageService for Client {
    async fn get_packages(&self) -> Result<Vec<Package>, AppError> {
        let packages: Vec<Package> = self.http().get("packages").await?;
        debug!("Packages obtained: {}", packages.len());
        Ok(packages)
    }

    async fn get_my_subscription(&self) -> Result<Option<Subscription>, AppError> {
        optional(self.http().get("packages/my-subscription").await)
    }

    async fn request_subscription(&self, package_id: &str) -> Result<Subscription, AppError> {
        let path = format!("packages/{}/request", path_id("package id", package_id)?);
        info!("Requesting subscription to package {}", package_id);
        self.http().post_empty(&path, &RequestOptions::default()).await
    }
}
