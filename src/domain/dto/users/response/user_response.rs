use serde::{Deserialize, Serialize};

use crate::core::attributes::FromAttributes;
use crate::core::schema::{FieldKind, FieldSpec, Schema};

/// 사용자 응답 DTO
///
/// 클라이언트에게 반환되는 사용자 정보입니다. 비밀번호 관련 필드는 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    /// 사용자 ID
    ///
    /// - 영속 계층 레코드의 식별자
    id: i64,

    /// 사용자명
    username: String,

    /// 나이
    ///
    /// - 세 스키마 중 유일한 선택 필드
    /// - 값이 없으면 JSON에 `null`로 출력
    age: Option<i64>,
}

impl UserResponse {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn age(&self) -> Option<i64> {
        self.age
    }
}

impl Schema for UserResponse {
    const NAME: &'static str = "UserResponse";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("id", FieldKind::Integer),
        FieldSpec::required("username", FieldKind::String),
        FieldSpec::optional("age", FieldKind::Integer),
    ];
}

/// DB 레코드에서 바로 생성 가능 (ORM 모드)
impl FromAttributes for UserResponse {}
