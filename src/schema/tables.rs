use super::migrator::Migration;
use super::ColumnType::{BigInt, BigSerial, Boolean, Date, Integer, Text, TimestampTz, VarChar};
use super::{col, foreign_key, nullable, Column, FkAction, TableDef};

fn id() -> Column {
    col("id", BigSerial)
}

fn created_at() -> Column {
    Column {
        default: Some("now()"),
        ..nullable("created_at", TimestampTz)
    }
}

fn updated_at() -> Column {
    Column {
        default: Some("now()"),
        ..nullable("updated_at", TimestampTz)
    }
}

pub fn roles() -> TableDef {
    TableDef {
        name: "roles",
        columns: vec![
            id(),
            Column {
                unique: true,
                ..col("name", Text)
            },
            col("display_name", Text),
            nullable("description", Text),
            created_at(),
            updated_at(),
        ],
        primary_key: &["id"],
        foreign_keys: vec![],
        uniques: vec![],
    }
}

pub fn permissions() -> TableDef {
    TableDef {
        name: "permissions",
        columns: vec![
            id(),
            Column {
                unique: true,
                ..col("name", Text)
            },
            nullable("description", Text),
            created_at(),
        ],
        primary_key: &["id"],
        foreign_keys: vec![],
        uniques: vec![],
    }
}

pub fn role_permissions() -> TableDef {
    TableDef {
        name: "role_permissions",
        columns: vec![col("role_id", BigInt), col("permission_id", BigInt)],
        primary_key: &["role_id", "permission_id"],
        foreign_keys: vec![
            foreign_key("role_id", "roles", FkAction::Cascade, FkAction::Cascade),
            foreign_key(
                "permission_id",
                "permissions",
                FkAction::Cascade,
                FkAction::Cascade,
            ),
        ],
        uniques: vec![],
    }
}

pub fn users() -> TableDef {
    TableDef {
        name: "users",
        columns: vec![
            id(),
            col("name", Text),
            Column {
                unique: true,
                ..col("email", Text)
            },
            Column {
                default: Some("'active'"),
                ..col("status", Text)
            },
            created_at(),
            updated_at(),
        ],
        primary_key: &["id"],
        foreign_keys: vec![],
        uniques: vec![],
    }
}

fn lookup(name: &'static str) -> TableDef {
    TableDef {
        name,
        columns: vec![
            id(),
            Column {
                unique: true,
                ..col("name", Text)
            },
        ],
        primary_key: &["id"],
        foreign_keys: vec![],
        uniques: vec![],
    }
}

pub fn job_posting_statuses() -> TableDef {
    lookup("job_posting_statuses")
}

pub fn job_categories() -> TableDef {
    lookup("job_categories")
}

pub fn job_types() -> TableDef {
    lookup("job_types")
}

pub fn application_statuses() -> TableDef {
    lookup("application_statuses")
}

pub fn candidates() -> TableDef {
    TableDef {
        name: "candidates",
        columns: vec![
            id(),
            Column {
                unique: true,
                ..col("uuid", Text)
            },
            Column {
                unique: true,
                ..col("email", Text)
            },
            col("full_name", Text),
            nullable("phone", VarChar(32)),
            Column {
                unique: true,
                ..nullable("whatsapp_number", VarChar(32))
            },
            nullable("city", Text),
            nullable("linkedin_url", Text),
            nullable("resume_url", Text),
            nullable("deleted_at", TimestampTz),
            created_at(),
            updated_at(),
        ],
        primary_key: &["id"],
        foreign_keys: vec![],
        uniques: vec![],
    }
}

pub fn departments() -> TableDef {
    TableDef {
        name: "departments",
        columns: vec![
            id(),
            col("name", Text),
            nullable("description", Text),
            Column {
                default: Some("'active'"),
                check: Some("status IN ('active', 'inactive')"),
                ..col("status", Text)
            },
            col("created_by", BigInt),
            nullable("deleted_at", TimestampTz),
            created_at(),
            updated_at(),
        ],
        primary_key: &["id"],
        foreign_keys: vec![foreign_key(
            "created_by",
            "users",
            FkAction::Restrict,
            FkAction::NoAction,
        )],
        uniques: vec![],
    }
}

pub fn job_postings() -> TableDef {
    TableDef {
        name: "job_postings",
        columns: vec![
            id(),
            col("title", Text),
            nullable("description", Text),
            nullable("department_id", BigInt),
            nullable("category_id", BigInt),
            nullable("type_id", BigInt),
            nullable("status_id", BigInt),
            created_at(),
            updated_at(),
        ],
        primary_key: &["id"],
        foreign_keys: vec![
            foreign_key(
                "department_id",
                "departments",
                FkAction::SetNull,
                FkAction::Cascade,
            ),
            foreign_key(
                "category_id",
                "job_categories",
                FkAction::SetNull,
                FkAction::Cascade,
            ),
            foreign_key("type_id", "job_types", FkAction::SetNull, FkAction::Cascade),
            foreign_key(
                "status_id",
                "job_posting_statuses",
                FkAction::SetNull,
                FkAction::Cascade,
            ),
        ],
        uniques: vec![],
    }
}

pub fn applications() -> TableDef {
    TableDef {
        name: "applications",
        columns: vec![
            id(),
            col("candidate_id", BigInt),
            col("job_posting_id", BigInt),
            nullable("status_id", BigInt),
            created_at(),
            updated_at(),
        ],
        primary_key: &["id"],
        foreign_keys: vec![
            foreign_key(
                "candidate_id",
                "candidates",
                FkAction::Cascade,
                FkAction::Cascade,
            ),
            foreign_key(
                "job_posting_id",
                "job_postings",
                FkAction::Cascade,
                FkAction::Cascade,
            ),
            foreign_key(
                "status_id",
                "application_statuses",
                FkAction::SetNull,
                FkAction::Cascade,
            ),
        ],
        uniques: vec![&["candidate_id", "job_posting_id"][..]],
    }
}

pub fn application_documents() -> TableDef {
    TableDef {
        name: "application_documents",
        columns: vec![
            id(),
            col("application_id", BigInt),
            col("document_type", Text),
            col("url", Text),
            col("filename", Text),
            created_at(),
        ],
        primary_key: &["id"],
        foreign_keys: vec![foreign_key(
            "application_id",
            "applications",
            FkAction::Cascade,
            FkAction::Cascade,
        )],
        uniques: vec![],
    }
}

pub fn sessions() -> TableDef {
    TableDef {
        name: "sessions",
        columns: vec![
            col("id", VarChar(255)),
            nullable("user_id", BigInt),
            nullable("ip_address", VarChar(45)),
            nullable("user_agent", Text),
            col("payload", Text),
            col("last_activity", BigInt),
        ],
        primary_key: &["id"],
        foreign_keys: vec![foreign_key(
            "user_id",
            "users",
            FkAction::Cascade,
            FkAction::Cascade,
        )],
        uniques: vec![],
    }
}

pub fn email_notifications() -> TableDef {
    TableDef {
        name: "email_notifications",
        columns: vec![
            id(),
            col("recipient_email", Text),
            col("subject", Text),
            col("body", Text),
            nullable("related_type", VarChar(64)),
            nullable("related_id", BigInt),
            Column {
                default: Some("'pending'"),
                check: Some("status IN ('pending', 'sent', 'failed', 'bounced')"),
                ..col("status", Text)
            },
            nullable("sent_at", TimestampTz),
            nullable("failed_reason", Text),
            Column {
                default: Some("0"),
                ..col("attempts", Integer)
            },
            created_at(),
        ],
        primary_key: &["id"],
        foreign_keys: vec![],
        uniques: vec![],
    }
}

pub fn system_settings() -> TableDef {
    TableDef {
        name: "system_settings",
        columns: vec![
            id(),
            Column {
                unique: true,
                ..col("key", Text)
            },
            nullable("value", Text),
            Column {
                default: Some("'string'"),
                check: Some("type IN ('string', 'integer', 'boolean', 'json', 'text')"),
                ..col("type", Text)
            },
            Column {
                default: Some("false"),
                ..col("is_public", Boolean)
            },
            created_at(),
            updated_at(),
        ],
        primary_key: &["id"],
        foreign_keys: vec![],
        uniques: vec![],
    }
}

pub fn email_verification_tokens() -> TableDef {
    TableDef {
        name: "email_verification_tokens",
        columns: vec![
            id(),
            col("token", Text),
            col("user_id", BigInt),
            Column {
                check: Some("type IN ('email_verification', 'password_reset')"),
                ..col("type", Text)
            },
            Column {
                default: Some("false"),
                ..col("is_used", Boolean)
            },
            col("expires_at", TimestampTz),
            nullable("used_at", TimestampTz),
            nullable("ip_address", VarChar(45)),
            nullable("user_agent", Text),
            created_at(),
        ],
        primary_key: &["id"],
        foreign_keys: vec![foreign_key(
            "user_id",
            "users",
            FkAction::Cascade,
            FkAction::Cascade,
        )],
        uniques: vec![],
    }
}

pub fn monthly_analytics() -> TableDef {
    TableDef {
        name: "monthly_analytics",
        columns: vec![
            id(),
            Column {
                unique: true,
                ..col("month", Date)
            },
            Column {
                default: Some("0"),
                ..col("total_applications", Integer)
            },
            Column {
                default: Some("0"),
                ..col("total_hires", Integer)
            },
            nullable("top_department_id", BigInt),
            nullable("top_category_id", BigInt),
            created_at(),
        ],
        primary_key: &["id"],
        foreign_keys: vec![
            foreign_key(
                "top_department_id",
                "departments",
                FkAction::SetNull,
                FkAction::Cascade,
            ),
            foreign_key(
                "top_category_id",
                "job_categories",
                FkAction::SetNull,
                FkAction::Cascade,
            ),
        ],
        uniques: vec![],
    }
}

/// The full migration sequence. Versions are timestamp-style and strictly
/// increasing; tables with foreign keys come after their referents so the
/// reverse order is always safe to drop.
pub fn migrations() -> Vec<Migration> {
    vec![
        Migration::new(20240311080000, roles()),
        Migration::new(20240311080100, permissions()),
        Migration::new(20240311080200, role_permissions()),
        Migration::new(20240311081500, users()),
        Migration::new(20240325093000, job_posting_statuses()),
        Migration::new(20240325093100, job_categories()),
        Migration::new(20240325093200, job_types()),
        Migration::new(20240325093300, application_statuses()),
        Migration::new(20240402110000, candidates()),
        Migration::new(20240409141500, departments()),
        Migration::new(20240415100000, job_postings()),
        Migration::new(20240415101000, applications()),
        Migration::new(20240422090000, application_documents()),
        Migration::new(20240506153000, sessions()),
        Migration::new(20240513120000, email_notifications()),
        Migration::new(20240520083000, system_settings()),
        Migration::new(20240527164500, email_verification_tokens()),
        Migration::new(20240610090000, monthly_analytics()),
    ]
}
