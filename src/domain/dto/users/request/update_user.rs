//! 사용자 수정 요청 DTO
//!
//! `username` 필드가 없으므로 이 경로로는 사용자명을 변경할 수 없습니다.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::schema::{FieldKind, FieldSpec, Schema};

/// 사용자 정보 수정 요청 DTO
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdateRequest {
    /// 새 비밀번호 (평문, `Debug` 출력에서 마스킹)
    password: String,

    /// 나이 (필수, `null` 불허)
    age: i64,
}

impl UserUpdateRequest {
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn age(&self) -> i64 {
        self.age
    }
}

impl Schema for UserUpdateRequest {
    const NAME: &'static str = "UserUpdateRequest";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("password", FieldKind::String),
        FieldSpec::required("age", FieldKind::Integer),
    ];
}

impl fmt::Debug for UserUpdateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserUpdateRequest")
            .field("password", &"***")
            .field("age", &self.age)
            .finish()
    }
}
