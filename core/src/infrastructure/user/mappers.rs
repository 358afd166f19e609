use chrono::{TimeZone, Utc};
use tracing::warn;

use crate::domain::user::entities::{Gender, User};
use crate::entity::users::Model as UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        let jenis_kelamin = model.jenis_kelamin.as_deref().and_then(|value| {
            let gender = Gender::from_str_opt(value);
            if gender.is_none() {
                warn!("unrecognized jenis_kelamin value: {}", value);
            }
            gender
        });

        User {
            id: model.id,
            nama_lengkap: model.nama_lengkap,
            email: model.email,
            tanggal_lahir: model.tanggal_lahir,
            jenis_kelamin,
            created_at: Utc.from_utc_datetime(&model.created_at),
        }
    }
}
