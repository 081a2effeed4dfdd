//! # User Data Transfer Objects Module
//!
//! ```text
//! users/
//! ├── request/                # 클라이언트 → 서버
//! │   ├── create_user.rs     # 사용자 생성 요청
//! │   └── update_user.rs     # 사용자 수정 요청 (username 변경 불가)
//! └── response/               # 서버 → 클라이언트
//!     └── user_response.rs   # 사용자 응답 (ORM 모드)
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
