use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, user::entities::User};

pub trait UserService: Send + Sync {
    fn get_users(&self) -> impl Future<Output = Result<Vec<User>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    /// Full unfiltered table scan; no pagination by design, tables are small.
    fn fetch_users(&self) -> impl Future<Output = Result<Vec<User>, CoreError>> + Send;
}
