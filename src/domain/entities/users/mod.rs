//! Users Entity Module
//!
//! 사용자 레코드 엔티티를 정의합니다.
//!
//! ```rust,ignore
//! use user_schemas::domain::entities::users::User;
//!
//! let user = User::new(1, "alice", "$2b$12$...", Some(30));
//! ```

pub mod user;

pub use user::User;
