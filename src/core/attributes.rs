//! # Attribute-Access Conversion (ORM mode)
//!
//! 영속 계층의 객체(DB 레코드)에서 이름으로 속성을 읽어 스키마를 생성합니다.
//! 리플렉션 대신 명시적인 어댑터를 사용합니다:
//!
//! ```text
//! AttributeSource ──attributes_to_map()──▶ Map<String, Value> ──Schema::validate()──▶ Schema
//! ```
//!
//! 매핑 입력과 객체 입력은 같은 검증기를 거치므로 결과가 동일합니다.
//! ORM 모드는 [`FromAttributes`]를 구현한 스키마에서만 사용할 수 있습니다.

use log::trace;
use serde_json::{Map, Value};

use crate::core::errors::SchemaResult;
use crate::core::schema::{FieldSpec, Schema};

/// 이름으로 속성을 읽을 수 있는 객체
///
/// - `None`: 해당 속성이 없음 (필수 필드라면 `missing`)
/// - `Some(Value::Null)`: 속성은 있지만 값이 비어 있음
pub trait AttributeSource {
    fn attribute(&self, name: &str) -> Option<Value>;
}

impl AttributeSource for Map<String, Value> {
    fn attribute(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

/// 객체의 속성 중 선언된 필드만 읽어 매핑으로 변환합니다.
pub fn attributes_to_map<A>(source: &A, fields: &[FieldSpec]) -> Map<String, Value>
where
    A: AttributeSource + ?Sized,
{
    fields
        .iter()
        .filter_map(|spec| {
            source
                .attribute(spec.name)
                .map(|value| (spec.name.to_string(), value))
        })
        .collect()
}

/// ORM 모드를 활성화한 스키마
pub trait FromAttributes: Schema {
    /// 객체의 속성으로부터 검증 후 생성합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use user_schemas::{FromAttributes, User, UserResponse};
    ///
    /// let record = User::new(1, "alice", "$2b$12$...", Some(30));
    /// let response = UserResponse::from_attributes(&record)?;
    /// ```
    fn from_attributes<A>(source: &A) -> SchemaResult<Self>
    where
        A: AttributeSource + ?Sized,
    {
        trace!("building {} from attributes", Self::NAME);
        Self::validate(&attributes_to_map(source, Self::FIELDS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::FieldKind;
    use serde_json::json;

    struct Record {
        name: &'static str,
    }

    impl AttributeSource for Record {
        fn attribute(&self, name: &str) -> Option<Value> {
            match name {
                "name" => Some(Value::from(self.name)),
                "nickname" => Some(Value::Null),
                _ => None,
            }
        }
    }

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::required("name", FieldKind::String),
        FieldSpec::optional("nickname", FieldKind::String),
        FieldSpec::optional("rank", FieldKind::Integer),
    ];

    #[test]
    fn test_attributes_to_map_reads_declared_fields() {
        let map = attributes_to_map(&Record { name: "ada" }, FIELDS);

        assert_eq!(map.get("name"), Some(&json!("ada")));
        assert_eq!(map.get("nickname"), Some(&Value::Null));
        assert!(!map.contains_key("rank"));
    }

    #[test]
    fn test_map_is_an_attribute_source() {
        let raw = json!({ "name": "ada", "secret": "x" });
        let map = raw.as_object().unwrap();

        let converted = attributes_to_map(map, FIELDS);

        assert_eq!(converted.len(), 1);
        assert!(!converted.contains_key("secret"));
    }
}
