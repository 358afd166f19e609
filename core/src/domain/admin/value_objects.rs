#[derive(Debug, Clone)]
pub struct AuthenticateAdminInput {
    pub name: String,
    pub sandi: String,
}
