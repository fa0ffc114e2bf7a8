//! Device documents and their embedded log entries.
//!
//! A [`DeviceEntry`] is the unit of persistence: its `logList` has no storage
//! of its own and only changes when the owning entry is written back. Field
//! names serialise in camelCase to match the wire and stored document shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::json;
use uuid::Uuid;

use super::Error;

/// Identifier clients send when they want the server to allocate one.
pub const NEW_ID_PLACEHOLDER: &str = "@new";

/// Return true when `id` asks for a server-generated identifier.
///
/// # Examples
/// ```
/// use device_list::domain::device::requests_generated_id;
///
/// assert!(requests_generated_id(""));
/// assert!(requests_generated_id("@new"));
/// assert!(!requests_generated_id("x321ab3"));
/// ```
pub fn requests_generated_id(id: &str) -> bool {
    id.is_empty() || id == NEW_ID_PLACEHOLDER
}

/// Allocate a fresh identifier for a document or log entry.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Department owning a device. Plain value object without identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
}

/// Log entry embedded in a device's `logList`.
///
/// `id` is unique only within the owning entry. `device_id` mirrors the
/// owner's `deviceId` and is not used for lookups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceLog {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub device_id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Top-level device document.
///
/// A `null` or missing `logList` deserialises as an empty list, so the list
/// always serialises as an array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub device_id: String,
    #[serde(default)]
    pub warranty_until: Option<DateTime<Utc>>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub department: Department,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub log_list: Vec<DeviceLog>,
}

impl DeviceEntry {
    /// Position of the log with the given id, if present.
    pub fn log_position(&self, log_id: &str) -> Option<usize> {
        self.log_list.iter().position(|log| log.id == log_id)
    }

    /// Borrow the log with the given id, if present.
    pub fn find_log(&self, log_id: &str) -> Option<&DeviceLog> {
        self.log_list.iter().find(|log| log.id == log_id)
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Raw request body for a log entry, parsed lazily.
///
/// Log mutations decode the body only after the owning device has been
/// loaded, so an unknown device reports 404 even when the body is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceLogPayload(Vec<u8>);

impl DeviceLogPayload {
    /// Wrap raw request bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Decode the payload as a [`DeviceLog`].
    ///
    /// # Examples
    /// ```
    /// use device_list::domain::device::DeviceLogPayload;
    ///
    /// let payload = DeviceLogPayload::new(r#"{"id":"1","deviceId":"1-crp"}"#);
    /// let log = payload.parse().expect("valid body");
    /// assert_eq!(log.device_id, "1-crp");
    ///
    /// assert!(DeviceLogPayload::new("{").parse().is_err());
    /// ```
    pub fn parse(&self) -> Result<DeviceLog, Error> {
        serde_json::from_slice(&self.0).map_err(|err| {
            Error::invalid_request("Invalid request body").with_details(json!({
                "error": err.to_string(),
                "code": "invalid_body",
            }))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::Value;

    fn sample_json(log_list: Value) -> Value {
        json!({
            "id": "test-device",
            "name": "test-device-name",
            "deviceId": "test-device-id",
            "warrantyUntil": "2021-09-01T00:00:00Z",
            "price": 42.0,
            "logList": log_list,
            "department": { "name": "test-department-name", "code": "test-department-code" }
        })
    }

    #[rstest]
    #[case(Value::Null)]
    #[case(json!([]))]
    fn null_or_empty_log_list_reads_as_empty(#[case] log_list: Value) {
        let entry: DeviceEntry = serde_json::from_value(sample_json(log_list)).expect("entry");
        assert!(entry.log_list.is_empty());
        assert_eq!(entry.department.code, "test-department-code");
    }

    #[rstest]
    fn missing_log_list_serialises_as_array() {
        let mut body = sample_json(Value::Null);
        body.as_object_mut().expect("object").remove("logList");
        let entry: DeviceEntry = serde_json::from_value(body).expect("entry");

        let value = serde_json::to_value(&entry).expect("serialise");
        assert_eq!(value["logList"], json!([]));
        assert_eq!(value["deviceId"], "test-device-id");
    }

    #[rstest]
    fn log_position_finds_by_id() {
        let entry = DeviceEntry {
            log_list: vec![
                DeviceLog {
                    id: "a".to_owned(),
                    ..DeviceLog::default()
                },
                DeviceLog {
                    id: "b".to_owned(),
                    ..DeviceLog::default()
                },
            ],
            ..DeviceEntry::default()
        };
        assert_eq!(entry.log_position("b"), Some(1));
        assert!(entry.find_log("c").is_none());
    }

    #[rstest]
    fn payload_parse_failure_is_invalid_request() {
        let error = DeviceLogPayload::new("not json").parse().expect_err("parse fails");
        assert_eq!(error.code(), crate::domain::ErrorCode::InvalidRequest);
        assert_eq!(
            error.details().and_then(|d| d.get("code")).and_then(Value::as_str),
            Some("invalid_body")
        );
    }

    #[rstest]
    fn payload_from_serialised_log_parses_back() -> Result<(), serde_json::Error> {
        let log = DeviceLog {
            id: "1".to_owned(),
            device_id: "1-crp".to_owned(),
            text: "zakupenie zariadenia".to_owned(),
            created_at: None,
        };

        let payload = DeviceLogPayload::new(serde_json::to_vec(&log)?);

        assert_eq!(payload.parse().expect("serialised log parses"), log);
        Ok(())
    }

    #[rstest]
    fn generated_ids_are_distinct() {
        assert_ne!(generate_id(), generate_id());
    }
}
