//! Employee domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Employee domain entity.
///
/// Only ever constructed from a persisted row, so `id` is always assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "William")]
    pub first_name: String,
    #[schema(example = "Feliciano")]
    pub last_name: String,
    /// Unique across all employees
    #[schema(example = "wf@gmail.com")]
    pub email: String,
}

impl Employee {
    /// Overwrite every mutable field with the payload's values.
    ///
    /// The identifier is left untouched. No field is skipped, so an empty
    /// string in the payload replaces the stored value.
    pub fn apply(&mut self, payload: NewEmployee) {
        self.first_name = payload.first_name;
        self.last_name = payload.last_name;
        self.email = payload.email;
    }
}

/// Employee data without an identifier.
///
/// Used both as the create candidate and as the full-overwrite update payload.
/// An `id` sent by the client is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    #[schema(example = "William")]
    pub first_name: String,
    #[schema(example = "Feliciano")]
    pub last_name: String,
    #[schema(example = "wf@gmail.com")]
    pub email: String,
}

impl NewEmployee {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Employee {
        Employee {
            id: 1,
            first_name: "William".to_string(),
            last_name: "Feliciano".to_string(),
            email: "wf@gmail.com".to_string(),
        }
    }

    #[test]
    fn test_apply_overwrites_fields_and_keeps_id() {
        let mut employee = stored();
        employee.apply(NewEmployee::new("Will", "Felici", "w@x.com"));

        assert_eq!(employee.id, 1);
        assert_eq!(employee.first_name, "Will");
        assert_eq!(employee.last_name, "Felici");
        assert_eq!(employee.email, "w@x.com");
    }

    #[test]
    fn test_apply_does_not_skip_empty_values() {
        let mut employee = stored();
        employee.apply(NewEmployee::new("", "Feliciano", "wf@gmail.com"));

        assert_eq!(employee.first_name, "");
    }

    #[test]
    fn test_employee_serializes_camel_case() {
        let json = serde_json::to_value(stored()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "firstName": "William",
                "lastName": "Feliciano",
                "email": "wf@gmail.com"
            })
        );
    }

    #[test]
    fn test_new_employee_ignores_client_id() {
        let payload: NewEmployee = serde_json::from_str(
            r#"{"id": 42, "firstName": "John", "lastName": "Cena", "email": "cena@gmail.com"}"#,
        )
        .unwrap();

        assert_eq!(payload, NewEmployee::new("John", "Cena", "cena@gmail.com"));
    }

    #[test]
    fn test_new_employee_requires_all_fields() {
        let result: Result<NewEmployee, _> =
            serde_json::from_str(r#"{"firstName": "John", "lastName": "Cena"}"#);

        assert!(result.is_err());
    }
}
