//! User Entity Implementation
//!
//! 영속 계층에서 읽어 온 사용자 레코드입니다.
//! [`AttributeSource`]를 구현하므로 `UserResponse::from_attributes`의 입력이 됩니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::attributes::AttributeSource;

/// 사용자 엔티티
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    /// 사용자 이름 (unique)
    pub username: String,
    /// 해시된 비밀번호. 응답 스키마에는 노출되지 않음
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub age: Option<i64>,
}

impl User {
    pub fn new(
        id: i64,
        username: impl Into<String>,
        hashed_password: impl Into<String>,
        age: Option<i64>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            hashed_password: hashed_password.into(),
            age,
        }
    }
}

impl AttributeSource for User {
    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(Value::from(self.id)),
            "username" => Some(Value::from(self.username.as_str())),
            "hashed_password" => Some(Value::from(self.hashed_password.as_str())),
            "age" => Some(Value::from(self.age)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::attributes::FromAttributes;
    use crate::core::schema::Schema;
    use crate::domain::dto::users::response::UserResponse;
    use serde_json::json;

    #[test]
    fn test_user_to_response() {
        let user = User::new(1, "alice", "$2b$12$abcdefghijklmnopqrstuv", Some(30));

        let response = UserResponse::from_attributes(&user).unwrap();

        assert_eq!(response.id(), 1);
        assert_eq!(response.username(), "alice");
        assert_eq!(response.age(), Some(30));
    }

    #[test]
    fn test_response_hides_password() {
        let user = User::new(2, "bob", "$2b$12$secret-hash", None);

        let response = UserResponse::from_attributes(&user).unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, json!({ "id": 2, "username": "bob", "age": null }));
    }

    #[test]
    fn test_unknown_attribute() {
        let user = User::new(3, "carol", "hash", Some(41));

        assert_eq!(user.attribute("email"), None);
        assert_eq!(user.attribute("age"), Some(json!(41)));
    }

    #[test]
    fn test_response_same_as_mapping() {
        let user = User::new(1, "a", "hash", Some(30));
        let raw = json!({ "id": 1, "username": "a", "age": 30 });

        assert_eq!(
            UserResponse::from_attributes(&user).unwrap(),
            UserResponse::validate_value(&raw).unwrap()
        );
    }
}
