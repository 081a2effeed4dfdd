//! 사용자 생성 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//!
//! ## 필드
//!
//! | 필드 | 타입 | 필수 |
//! |------|------|------|
//! | `username` | string | ✅ |
//! | `password` | string (평문) | ✅ |
//! | `age` | integer | ✅ |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::schema::{FieldKind, FieldSpec, Schema};

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "username": "bob",
///   "password": "secret",
///   "age": 25
/// }
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCreateRequest {
    /// 사용자명
    ///
    /// - 생성 이후에는 수정 요청으로 변경할 수 없음
    username: String,

    /// 계정 비밀번호
    ///
    /// - 이 계층에서는 평문으로 유지
    /// - 해싱은 영속 계층에 저장하기 전에 수행
    /// - `Debug` 출력에서는 마스킹됨
    password: String,

    /// 나이
    ///
    /// - 필수 정수 필드 (`null` 불허)
    /// - `"25"`, `25.0` 형태의 입력은 `25`로 정규화
    age: i64,
}

impl UserCreateRequest {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn age(&self) -> i64 {
        self.age
    }
}

impl Schema for UserCreateRequest {
    const NAME: &'static str = "UserCreateRequest";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("username", FieldKind::String),
        FieldSpec::required("password", FieldKind::String),
        FieldSpec::required("age", FieldKind::Integer),
    ];
}

// 비밀번호가 로그에 남지 않도록 마스킹
impl fmt::Debug for UserCreateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCreateRequest")
            .field("username", &self.username)
            .field("password", &"***")
            .field("age", &self.age)
            .finish()
    }
}
