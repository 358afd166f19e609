use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

pub trait HealthCheckService: Send + Sync {
    /// Round-trips a trivial `SELECT 1 + 1` through the database to assert
    /// connectivity. Touches no business table.
    fn test_db(&self) -> impl Future<Output = Result<i32, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckRepository: Send + Sync {
    fn select_arithmetic(&self) -> impl Future<Output = Result<i32, CoreError>> + Send;
}
