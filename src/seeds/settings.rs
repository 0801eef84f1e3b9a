use crate::error::Result;
use sqlx::PgPool;
use tracing::info;

pub struct SettingRow {
    pub id: i64,
    pub key: &'static str,
    pub value: &'static str,
    pub value_type: &'static str,
    pub is_public: bool,
}

pub fn rows() -> Vec<SettingRow> {
    vec![
        SettingRow {
            id: 1,
            key: "site_name",
            value: "Acme Recruitment",
            value_type: "string",
            is_public: true,
        },
        SettingRow {
            id: 2,
            key: "maintenance_mode",
            value: "false",
            value_type: "boolean",
            is_public: true,
        },
        SettingRow {
            id: 3,
            key: "max_resume_upload_mb",
            value: "10",
            value_type: "integer",
            is_public: false,
        },
        SettingRow {
            id: 4,
            key: "notification_footer",
            value: "You are receiving this email because you applied through our careers page.",
            value_type: "text",
            is_public: false,
        },
        SettingRow {
            id: 5,
            key: "pipeline_stages",
            value: r#"["received","screening","interview","offer","hired"]"#,
            value_type: "json",
            is_public: false,
        },
    ]
}

pub async fn run(pool: &PgPool) -> Result<()> {
    sqlx::query("DELETE FROM system_settings")
        .execute(pool)
        .await?;
    for row in rows() {
        sqlx::query(
            "INSERT INTO system_settings (id, key, value, type, is_public)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(row.id)
        .bind(row.key)
        .bind(row.value)
        .bind(row.value_type)
        .bind(row.is_public)
        .execute(pool)
        .await?;
    }
    info!(count = rows().len(), "seeded system_settings");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::setting::SettingType;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let fixture = rows();
        let keys: HashSet<_> = fixture.iter().map(|r| r.key).collect();
        assert_eq!(keys.len(), fixture.len());
    }

    #[test]
    fn value_types_parse() {
        for row in rows() {
            assert!(
                row.value_type.parse::<SettingType>().is_ok(),
                "{}",
                row.key
            );
        }
    }

    #[test]
    fn json_values_are_well_formed() {
        for row in rows().iter().filter(|r| r.value_type == "json") {
            assert!(serde_json::from_str::<serde_json::Value>(row.value).is_ok());
        }
    }
}
