use crate::error::AppError;
use crate::model::responses::Page;
use crate::presentation::company::{Company, CompanyRating, RatingRequest};
use async_trait::async_trait;

/// Interface for company pages and ratings
#[async_trait]
pub trait CompanyService: Send + Sync {
    /// Lists companies, optionally filtered by keyword
    async fn get_companies(
        &self,
        page: u32,
        size: u32,
        keyword: Option<&str>,
    ) -> Result<Page<Company>, AppError>;

    /// Gets one company
    async fn get_company(&self, company_id: &str) -> Result<Company, AppError>;

    /// Lists the ratings of a company
    async fn get_company_ratings(&self, company_id: &str) -> Result<Vec<CompanyRating>, AppError>;

    /// Average star rating; `None` when the company has no ratings
    async fn get_average_rating(&self, company_id: &str) -> Result<Option<f64>, AppError>;

    /// Creates or replaces the current student's rating
    async fn submit_rating(
        &self,
        company_id: &str,
        rating: &RatingRequest,
    ) -> Result<CompanyRating, AppError>;

    /// Removes the current student's rating
    async fn delete_rating(&self, company_id: &str) -> Result<(), AppError>;
}
