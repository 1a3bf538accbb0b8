use crate::error::AppError;
use crate::presentation::challenge::{Badge, Challenge, Participation};
use async_trait::async_trait;

/// Interface for challenges and badges
#[async_trait]
pub trait ChallengeService: Send + Sync {
    /// Lists challenges, optionally in one category
    async fn get_challenges(&self, category: Option<&str>) -> Result<Vec<Challenge>, AppError>;

    /// Gets one challenge
    async fn get_challenge(&self, challenge_id: &str) -> Result<Challenge, AppError>;

    /// Joins a challenge
    async fn join_challenge(&self, challenge_id: &str) -> Result<Participation, AppError>;

    /// Marks a participation as completed
    async fn complete_challenge(&self, participation_id: &str) -> Result<Participation, AppError>;

    /// Lists the current student's participations
    async fn get_my_participations(&self) -> Result<Vec<Participation>, AppError>;

    /// Lists badges earned by the current student
    async fn get_my_badges(&self) -> Result<Vec<Badge>, AppError>;
}
