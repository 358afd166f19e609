use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, recommendation::entities::Recommendation,
};

pub trait RecommendationService: Send + Sync {
    fn get_recommendations(
        &self,
    ) -> impl Future<Output = Result<Vec<Recommendation>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecommendationRepository: Send + Sync {
    fn fetch_recommendations(
        &self,
    ) -> impl Future<Output = Result<Vec<Recommendation>, CoreError>> + Send;
}
