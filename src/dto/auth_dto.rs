use crate::models::user::User;
use crate::utils::name::{split_full_name, username_from_email};
use serde::{Deserialize, Serialize};

/// Token pair as produced by the external token issuer (camelCase keys).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}

/// Login payload handed over by the (out of scope) authentication layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginData {
    pub role: String,
    pub tokens: TokenPair,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user: UserResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tokens {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub role: String,
    pub tokens: Tokens,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

fn format_user(user: &User) -> UserResponse {
    let (first_name, last_name) = split_full_name(&user.name);
    UserResponse {
        id: user.id.to_string(),
        email: user.email.clone(),
        username: username_from_email(&user.email),
        first_name,
        last_name,
        is_active: user.status == "active",
    }
}

pub fn format_register_response(user: &User) -> RegisterResponse {
    RegisterResponse {
        user: format_user(user),
    }
}

pub fn format_login_response(login: &LoginData, user: &User) -> LoginResponse {
    LoginResponse {
        user: format_user(user),
        role: login.role.clone(),
        tokens: Tokens {
            access_token: login.tokens.access_token.clone(),
            refresh_token: login.tokens.refresh_token.clone(),
        },
    }
}

pub fn format_refresh_token_response(tokens: &TokenPair, expires_in: i64) -> RefreshTokenResponse {
    RefreshTokenResponse {
        access_token: tokens.access_token.clone(),
        refresh_token: tokens.refresh_token.clone(),
        expires_in,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(name: &str, email: &str, status: &str) -> User {
        User {
            id: 17,
            name: name.to_string(),
            email: email.to_string(),
            status: status.to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn splits_name_into_first_and_rest() {
        let response = format_register_response(&user("A B C", "a@example.com", "active"));
        assert_eq!(response.user.first_name, "A");
        assert_eq!(response.user.last_name, "B C");
    }

    #[test]
    fn single_name_leaves_last_name_empty() {
        let response = format_register_response(&user("A", "a@example.com", "active"));
        assert_eq!(response.user.first_name, "A");
        assert_eq!(response.user.last_name, "");
    }

    #[test]
    fn empty_name_degrades_to_empty_strings() {
        let response = format_register_response(&user("", "a@example.com", "active"));
        assert_eq!(response.user.first_name, "");
        assert_eq!(response.user.last_name, "");
    }

    #[test]
    fn username_comes_from_email_local_part() {
        let response = format_register_response(&user("A", "local@domain", "active"));
        assert_eq!(response.user.username, "local");
    }

    #[test]
    fn id_is_rendered_as_string_and_status_as_flag() {
        let response = format_register_response(&user("A", "a@example.com", "active"));
        assert_eq!(response.user.id, "17");
        assert!(response.user.is_active);

        let response = format_register_response(&user("A", "a@example.com", "pending"));
        assert!(!response.user.is_active);
    }

    #[test]
    fn register_response_wire_shape() {
        let response = format_register_response(&user("Jane Q Doe", "jane@example.com", "active"));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "user": {
                    "id": "17",
                    "email": "jane@example.com",
                    "username": "jane",
                    "first_name": "Jane",
                    "last_name": "Q Doe",
                    "is_active": true
                }
            })
        );
    }

    #[test]
    fn login_response_rekeys_tokens_and_copies_role() {
        let login = LoginData {
            role: "hr_manager".to_string(),
            tokens: TokenPair {
                access_token: "acc".to_string(),
                refresh_token: "ref".to_string(),
            },
        };
        let response = format_login_response(&login, &user("Jane Doe", "jane@example.com", "active"));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["role"], "hr_manager");
        assert_eq!(value["tokens"]["access_token"], "acc");
        assert_eq!(value["tokens"]["refresh_token"], "ref");
        assert_eq!(value["user"]["username"], "jane");
    }

    #[test]
    fn login_accepts_issuer_camel_case_tokens() {
        let login: LoginData = serde_json::from_value(json!({
            "role": "viewer",
            "tokens": {"accessToken": "a", "refreshToken": "b"}
        }))
        .unwrap();
        assert_eq!(login.tokens.access_token, "a");
        assert_eq!(login.tokens.refresh_token, "b");
    }

    #[test]
    fn refresh_response_attaches_expiry_verbatim() {
        let tokens = TokenPair {
            access_token: "a".to_string(),
            refresh_token: "b".to_string(),
        };
        let response = format_refresh_token_response(&tokens, 3600);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"access_token": "a", "refresh_token": "b", "expires_in": 3600})
        );
    }
}
