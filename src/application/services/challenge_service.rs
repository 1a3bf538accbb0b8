use crate::application::client::Client;
use crate::application::interfaces::challenge::ChallengeService;
use crate::application::services::path_id;
use crate::error::AppError;
use crate::model::requests::RequestOptions;
use crate::presentation::challenge::{Badge, Challenge, Participation};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl ChallengeService for Client {
    async fn get_challenges(&self, category: Option<&str>) -> Result<Vec<Challenge>, AppError> {
        let options = RequestOptions::new().query_opt("category", category);
        let challenges: Vec<Challenge> = self.http().get_with("challenges", &options).await?;
        debug!("Challenges obtained: {}", challenges.len());
        Ok(challenges)
    }

    async fn get_challenge(&self, challenge_id: &str) -> Result<Challenge, AppError> {
        let path = format!("challenges/{}", path_id("challenge id", challenge_id)?);
        self.http().get(&path).await
    }

    async fn join_challenge(&self, challenge_id: &str) -> Result<Participation, AppError> {
        let path = format!("challenges/{}/join", path_id("challenge id", challenge_id)?);
        info!("Joining challenge {}", challenge_id);
        self.http().post_empty(&path, &RequestOptions::default()).await
    }

    async fn complete_challenge(&self, participation_id: &str) -> Result<Participation, AppError> {
        let path = format!(
            "challenges/participations/{}/complete",
            path_id("participation id", participation_id)?
        );
        info!("Completing participation {}", participation_id);
        self.http().post_empty(&path, &RequestOptions::default()).await
    }

    async fn get_my_participations(&self) -> Result<Vec<Participation>, AppError> {
        self.http().get("challenges/my-participations").await
    }

    async fn get_my_badges(&self) -> Result<Vec<Badge>, AppError> {
        let badges: Vec<Badge> = self.http().get("challenges/my-badges").await?;
        debug!("Badges obtained: {}", badges.len());
        Ok(badges)
    }
}
