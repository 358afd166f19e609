use chrono::{TimeZone, Utc};

use crate::domain::admin::entities::Admin;
use crate::entity::admin::Model as AdminModel;

impl From<AdminModel> for Admin {
    fn from(model: AdminModel) -> Self {
        Admin {
            id: model.id,
            name: model.name,
            sandi: model.sandi,
            nama_lengkap: model.nama_lengkap,
            email: model.email,
            created_at: Utc.from_utc_datetime(&model.created_at),
        }
    }
}
