use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use tracing::{error, info};

use crate::domain::common::entities::app_errors::CoreError;

/// Idempotent bootstrap: creates the five tables and inserts the seed rows.
/// Safe to run repeatedly; every statement is insert-if-absent.
const DDL: [&str; 5] = [
    r#"
    CREATE TABLE IF NOT EXISTS admin (
        id SERIAL PRIMARY KEY,
        name VARCHAR(50) UNIQUE NOT NULL,
        sandi VARCHAR(100) NOT NULL,
        nama_lengkap VARCHAR(100),
        email VARCHAR(100),
        created_at TIMESTAMP NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        nama_lengkap VARCHAR(100) NOT NULL,
        email VARCHAR(100),
        tanggal_lahir DATE,
        jenis_kelamin VARCHAR(20),
        created_at TIMESTAMP NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS symptoms (
        id SERIAL PRIMARY KEY,
        kode VARCHAR(20) UNIQUE NOT NULL,
        nama_gejala TEXT NOT NULL,
        kategori VARCHAR(50),
        created_at TIMESTAMP NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS diagnoses (
        id SERIAL PRIMARY KEY,
        user_id INT REFERENCES users(id) ON DELETE SET NULL,
        skor_akhir DOUBLE PRECISION,
        tingkat_risiko VARCHAR(10),
        gejala_terpilih TEXT,
        created_at TIMESTAMP NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS recommendations (
        id SERIAL PRIMARY KEY,
        tingkat_risiko VARCHAR(10) NOT NULL,
        rekomendasi TEXT NOT NULL,
        created_at TIMESTAMP NOT NULL DEFAULT now()
    )
    "#,
];

const SEED_ADMIN: &str = r#"
    INSERT INTO admin (name, sandi, nama_lengkap, email)
    VALUES ('admin', 'admin123', 'Administrator', 'admin@diabetes.com')
    ON CONFLICT (name) DO NOTHING
"#;

const SEED_SYMPTOMS: [(&str, &str, &str); 5] = [
    ("G001", "Sering haus dan banyak minum", "Gejala Umum"),
    ("G002", "Sering buang air kecil", "Gejala Umum"),
    ("G003", "Cepat lapar", "Gejala Umum"),
    ("G004", "Penurunan berat badan tanpa sebab", "Gejala Umum"),
    ("G005", "Penglihatan kabur", "Gejala Lanjut"),
];

const SEED_SYMPTOM_SQL: &str = r#"
    INSERT INTO symptoms (kode, nama_gejala, kategori)
    VALUES ($1, $2, $3)
    ON CONFLICT (kode) DO NOTHING
"#;

const SEED_RECOMMENDATIONS: [(&str, &str); 3] = [
    ("Rendah", "Pertahankan pola makan sehat dan rutin berolahraga"),
    ("Sedang", "Periksa gula darah rutin dan konsultasi dengan dokter"),
    (
        "Tinggi",
        "Segera konsultasi dengan dokter spesialis dan lakukan pemeriksaan lengkap",
    ),
];

// The recommendations table has no unique key, so the seed guards itself
// with NOT EXISTS on the risk level to stay idempotent.
const SEED_RECOMMENDATION_SQL: &str = r#"
    INSERT INTO recommendations (tingkat_risiko, rekomendasi)
    SELECT $1, $2
    WHERE NOT EXISTS (
        SELECT 1 FROM recommendations WHERE tingkat_risiko = $1
    )
"#;

pub async fn run(db: &DatabaseConnection) -> Result<(), CoreError> {
    for ddl in DDL {
        execute(db, Statement::from_string(db.get_database_backend(), ddl)).await?;
    }
    info!("all tables created/verified");

    execute(
        db,
        Statement::from_string(db.get_database_backend(), SEED_ADMIN),
    )
    .await?;

    for (kode, nama_gejala, kategori) in SEED_SYMPTOMS {
        execute(
            db,
            Statement::from_sql_and_values(
                db.get_database_backend(),
                SEED_SYMPTOM_SQL,
                [kode.into(), nama_gejala.into(), kategori.into()],
            ),
        )
        .await?;
    }

    for (tingkat_risiko, rekomendasi) in SEED_RECOMMENDATIONS {
        execute(
            db,
            Statement::from_sql_and_values(
                db.get_database_backend(),
                SEED_RECOMMENDATION_SQL,
                [tingkat_risiko.into(), rekomendasi.into()],
            ),
        )
        .await?;
    }
    info!("seed data inserted");

    Ok(())
}

async fn execute(db: &DatabaseConnection, statement: Statement) -> Result<(), CoreError> {
    db.execute(statement).await.map_err(|e| {
        error!("setup statement failed: {}", e);
        CoreError::Database(e.to_string())
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_is_created_if_absent() {
        for ddl in DDL {
            assert!(ddl.contains("CREATE TABLE IF NOT EXISTS"));
        }
    }

    #[test]
    fn seeds_are_insert_if_absent() {
        assert!(SEED_ADMIN.contains("ON CONFLICT (name) DO NOTHING"));
        assert!(SEED_SYMPTOM_SQL.contains("ON CONFLICT (kode) DO NOTHING"));
        assert!(SEED_RECOMMENDATION_SQL.contains("WHERE NOT EXISTS"));
    }

    #[test]
    fn seed_covers_one_recommendation_per_risk_level() {
        let levels: Vec<&str> = SEED_RECOMMENDATIONS.iter().map(|(l, _)| *l).collect();
        assert_eq!(levels, ["Rendah", "Sedang", "Tinggi"]);
    }
}
