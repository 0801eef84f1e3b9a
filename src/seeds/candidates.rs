use crate::error::Result;
use crate::utils::ident::unique_ids;
use sqlx::PgPool;
use tracing::info;

pub struct CandidateRow {
    pub id: i64,
    pub email: &'static str,
    pub full_name: &'static str,
    pub phone: Option<&'static str>,
    pub whatsapp_number: Option<&'static str>,
    pub city: Option<&'static str>,
    pub linkedin_url: Option<&'static str>,
    pub resume_url: Option<&'static str>,
}

pub fn rows() -> Vec<CandidateRow> {
    vec![
        CandidateRow {
            id: 1,
            email: "lina.haddad@example.com",
            full_name: "Lina Haddad",
            phone: Some("+31201234567"),
            whatsapp_number: Some("+31611112222"),
            city: Some("Amsterdam"),
            linkedin_url: Some("https://linkedin.com/in/lina-haddad"),
            resume_url: Some("https://cdn.example.com/resumes/lina-haddad.pdf"),
        },
        CandidateRow {
            id: 2,
            email: "marco.bianchi@example.com",
            full_name: "Marco Bianchi",
            phone: Some("+390612345678"),
            whatsapp_number: Some("+393331234567"),
            city: Some("Rome"),
            linkedin_url: Some("https://linkedin.com/in/marco-bianchi"),
            resume_url: None,
        },
        CandidateRow {
            id: 3,
            email: "sofia.petrova@example.com",
            full_name: "Sofia Petrova",
            phone: None,
            whatsapp_number: Some("+359881234567"),
            city: Some("Sofia"),
            linkedin_url: None,
            resume_url: Some("https://cdn.example.com/resumes/sofia-petrova.pdf"),
        },
        CandidateRow {
            id: 4,
            email: "dev.kapoor@example.com",
            full_name: "Dev Kapoor",
            phone: Some("+911123456789"),
            whatsapp_number: None,
            city: Some("Pune"),
            linkedin_url: Some("https://linkedin.com/in/dev-kapoor"),
            resume_url: None,
        },
        CandidateRow {
            id: 5,
            email: "amara@example.com",
            full_name: "Amara",
            phone: None,
            whatsapp_number: Some("+2348012345678"),
            city: None,
            linkedin_url: None,
            resume_url: None,
        },
    ]
}

pub async fn run(pool: &PgPool) -> Result<()> {
    sqlx::query("DELETE FROM candidates").execute(pool).await?;

    let fixture = rows();
    // The uuid column is filled from the opaque unique-id generator, one
    // distinct identifier per row.
    let uuids = unique_ids(fixture.len());
    for (row, uuid) in fixture.iter().zip(uuids) {
        sqlx::query(
            "INSERT INTO candidates
                (id, uuid, email, full_name, phone, whatsapp_number, city, linkedin_url, resume_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(row.id)
        .bind(uuid)
        .bind(row.email)
        .bind(row.full_name)
        .bind(row.phone)
        .bind(row.whatsapp_number)
        .bind(row.city)
        .bind(row.linkedin_url)
        .bind(row.resume_url)
        .execute(pool)
        .await?;
    }
    info!(count = fixture.len(), "seeded candidates");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn emails_and_whatsapp_numbers_are_unique() {
        let fixture = rows();
        let emails: HashSet<_> = fixture.iter().map(|r| r.email).collect();
        assert_eq!(emails.len(), fixture.len());

        let numbers: Vec<_> = fixture.iter().filter_map(|r| r.whatsapp_number).collect();
        let unique: HashSet<_> = numbers.iter().collect();
        assert_eq!(unique.len(), numbers.len());
    }
}
