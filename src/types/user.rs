use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Display text used for any field the record does not carry.
pub const FALLBACK: &str = "N/A";

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<Address>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub city: Option<String>,
}

impl User {
    pub fn display_name(&self) -> &str {
        or_fallback(self.name.as_deref())
    }

    pub fn display_email(&self) -> &str {
        or_fallback(self.email.as_deref())
    }

    pub fn display_city(&self) -> &str {
        or_fallback(self.address.as_ref().and_then(|a| a.city.as_deref()))
    }

    fn from_fields(fields: &Map<String, Value>) -> Self {
        let address = match fields.get("address") {
            Some(Value::Object(address)) => Some(Address {
                city: address.get("city").and_then(text),
            }),
            _ => None,
        };

        Self {
            name: fields.get("name").and_then(text),
            email: fields.get("email").and_then(text),
            address,
        }
    }
}

/// Records degrade field by field: an element that is not an object becomes
/// an all-fallback record. Only a `null` element is rejected.
impl<'de> Deserialize<'de> for User {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Err(de::Error::custom("user record is null")),
            Value::Object(fields) => Ok(Self::from_fields(&fields)),
            _ => Ok(Self::default()),
        }
    }
}

/// Scalars display as text; `false`, `0` and non-scalars count as missing.
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// Empty strings count as missing.
fn or_fallback(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_record() {
        let user: User = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "Leanne Graham",
                "username": "Bret",
                "email": "Sincere@april.biz",
                "address": { "street": "Kulas Light", "city": "Gwenborough" }
            }"#,
        )
        .unwrap();

        assert_eq!(user.display_name(), "Leanne Graham");
        assert_eq!(user.display_email(), "Sincere@april.biz");
        assert_eq!(user.display_city(), "Gwenborough");
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let user: User = serde_json::from_str("{}").unwrap();
        assert_eq!(user.display_name(), FALLBACK);
        assert_eq!(user.display_email(), FALLBACK);
        assert_eq!(user.display_city(), FALLBACK);
    }

    #[test]
    fn test_address_without_city() {
        let user: User =
            serde_json::from_str(r#"{ "name": "Ervin", "address": { "zipcode": "90566" } }"#)
                .unwrap();
        assert_eq!(user.display_name(), "Ervin");
        assert_eq!(user.display_city(), FALLBACK);
    }

    #[test]
    fn test_null_and_empty_fields_fall_back() {
        let user: User =
            serde_json::from_str(r#"{ "name": "", "email": null, "address": null }"#).unwrap();
        assert_eq!(user.display_name(), FALLBACK);
        assert_eq!(user.display_email(), FALLBACK);
        assert_eq!(user.display_city(), FALLBACK);
    }

    #[test]
    fn test_non_object_address_is_missing() {
        let user: User =
            serde_json::from_str(r#"{ "name": "Ann", "address": "somewhere" }"#).unwrap();
        assert_eq!(user.display_name(), "Ann");
        assert_eq!(user.address, None);
        assert_eq!(user.display_city(), FALLBACK);
    }

    #[test]
    fn test_scalar_fields_display_as_text() {
        let user: User = serde_json::from_str(
            r#"{ "name": 42, "email": true, "address": { "city": 1.5 } }"#,
        )
        .unwrap();
        assert_eq!(user.display_name(), "42");
        assert_eq!(user.display_email(), "true");
        assert_eq!(user.display_city(), "1.5");
    }

    #[test]
    fn test_falsy_and_structured_fields_fall_back() {
        let user: User =
            serde_json::from_str(r#"{ "name": 0, "email": false, "address": { "city": ["x"] } }"#)
                .unwrap();
        assert_eq!(user.display_name(), FALLBACK);
        assert_eq!(user.display_email(), FALLBACK);
        assert_eq!(user.display_city(), FALLBACK);
    }

    #[test]
    fn test_non_object_elements_become_fallback_records() {
        let users: Vec<User> = serde_json::from_str(r#"[1, "two", [3], true]"#).unwrap();
        assert_eq!(users.len(), 4);
        assert!(users.iter().all(|u| *u == User::default()));
    }

    #[test]
    fn test_null_element_is_rejected() {
        assert!(serde_json::from_str::<Vec<User>>(r#"[{"name": "Ann"}, null]"#).is_err());
    }
}
