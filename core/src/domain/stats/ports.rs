use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, stats::value_objects::DashboardStats,
};

pub trait StatsService: Send + Sync {
    fn get_stats(&self) -> impl Future<Output = Result<DashboardStats, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait StatsRepository: Send + Sync {
    fn count_users(&self) -> impl Future<Output = Result<i64, CoreError>> + Send;

    fn count_diagnoses(&self) -> impl Future<Output = Result<i64, CoreError>> + Send;

    fn count_symptoms(&self) -> impl Future<Output = Result<i64, CoreError>> + Send;

    fn count_recommendations(&self) -> impl Future<Output = Result<i64, CoreError>> + Send;
}
