use std::future::Future;

use crate::domain::{
    admin::{entities::Admin, value_objects::AuthenticateAdminInput},
    common::entities::app_errors::CoreError,
};

pub trait AdminService: Send + Sync {
    /// Stateless credential check. No session or token is issued; every call
    /// re-authenticates against the stored row.
    fn authenticate_admin(
        &self,
        input: AuthenticateAdminInput,
    ) -> impl Future<Output = Result<Admin, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait AdminRepository: Send + Sync {
    fn find_by_credentials(
        &self,
        name: String,
        sandi: String,
    ) -> impl Future<Output = Result<Option<Admin>, CoreError>> + Send;
}
