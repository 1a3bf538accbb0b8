use crate::application::client::Client;
use crate::application::interfaces::company::CompanyService;
use crate::application::services::path_id;
use crate::error::AppError;
use crate::model::requests::RequestOptions;
use crate::model::responses::Page;
use crate::presentation::company::{AverageRating, Company, CompanyRating, RatingRequest};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

#[async_trait]
impl CompanyService for Client {
    async fn get_companies(
        &self,
        page: u32,
        size: u32,
        keyword: Option<&str>,
    ) -> Result<Page<Company>, AppError> {
        let options = RequestOptions::new()
            .query_opt("keyword", keyword)
            .paged(page, size);
        let result: Page<Company> = self.http().get_with("companies", &options).await?;
        debug!("Companies obtained: {}", result.content.len());
        Ok(result)
    }

    async fn get_company(&self, company_id: &str) -> Result<Company, AppError> {
        let path = format!("companies/{}", path_id("company id", company_id)?);
        self.http().get(&path).await
    }

    async fn get_company_ratings(&self, company_id: &str) -> Result<Vec<CompanyRating>, AppError> {
        let path = format!("companies/{}/ratings", path_id("company id", company_id)?);
        self.http().get(&path).await
    }

    async fn get_average_rating(&self, company_id: &str) -> Result<Option<f64>, AppError> {
        let path = format!("companies/{}/rating/average", path_id("company id", company_id)?);
        let average: AverageRating = self.http().get(&path).await?;
        Ok(average.average_rating)
    }

    async fn submit_rating(
        &self,
        company_id: &str,
        rating: &RatingRequest,
    ) -> Result<CompanyRating, AppError> {
        if !rating.is_valid() {
            return Err(AppError::InvalidInput(format!(
                "rating must be between 1 and 5, got {}",
                rating.rating
            )));
        }
        let path = format!("companies/{}/ratings", path_id("company id", company_id)?);
        info!("Rating company {} with {} stars", company_id, rating.rating);
        self.http().post_empty(&path, &rating.to_options()).await
    }

    async fn delete_rating(&self, company_id: &str) -> Result<(), AppError> {
        let path = format!("companies/{}/ratings/my", path_id("company id", company_id)?);
        info!("Deleting rating of company {}", company_id);
        let _: Value = self.http().delete(&path).await?;
        Ok(())
    }
}
