use recruitment_db::dto::auth_dto::{format_login_response, LoginData};
use recruitment_db::models::user::User;
use serde_json::json;

// End-to-end over the public API: issuer payload in, wire envelope out.
#[test]
fn login_flow_produces_the_documented_envelope() {
    let login: LoginData = serde_json::from_value(json!({
        "role": "recruiter",
        "tokens": {"accessToken": "acc-123", "refreshToken": "ref-456"}
    }))
    .expect("issuer payload");

    let user = User {
        id: 42,
        name: "Nadia El Amrani".to_string(),
        email: "nadia.elamrani@example.com".to_string(),
        status: "active".to_string(),
        created_at: None,
        updated_at: None,
    };

    let response = format_login_response(&login, &user);
    assert_eq!(
        serde_json::to_value(&response).expect("serialize"),
        json!({
            "user": {
                "id": "42",
                "email": "nadia.elamrani@example.com",
                "username": "nadia.elamrani",
                "first_name": "Nadia",
                "last_name": "El Amrani",
                "is_active": true
            },
            "role": "recruiter",
            "tokens": {
                "access_token": "acc-123",
                "refresh_token": "ref-456"
            }
        })
    );
}
