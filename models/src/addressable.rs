use serde::{Deserialize, Serialize};

use crate::base::{impl_entity, null_as_default, BaseObject};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Protocol {
    #[default]
    Http,
    Tcp,
    Mac,
    Zmq,
    Other,
}

/// Network location of a device, device service or schedule event target.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Addressable {
    #[serde(flatten)]
    pub base: BaseObject,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub protocol: Protocol,
    /// HTTP verb used when the target is called, e.g. `POST`.
    #[serde(rename = "method")]
    pub http_method: Option<String>,
    pub address: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub port: i32,
    pub path: Option<String>,
    pub publisher: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub topic: Option<String>,
}

impl_entity!(Addressable);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_service_payload() {
        let payload = r#"{
            "id": "59b9d2b1e4b0ed79a1a93a52",
            "created": 1505350321000,
            "modified": 1505350321000,
            "origin": 1471806386919,
            "name": "camera addr",
            "protocol": "HTTP",
            "method": "POST",
            "address": "172.17.0.1",
            "port": 49977,
            "path": "/camera1",
            "publisher": null,
            "user": null,
            "password": null,
            "topic": null,
            "baseURL": "HTTP://172.17.0.1:49977",
            "url": "HTTP://172.17.0.1:49977/camera1"
        }"#;
        let addr: Addressable = serde_json::from_str(payload).unwrap();
        assert_eq!(addr.name, "camera addr");
        assert_eq!(addr.http_method.as_deref(), Some("POST"));
        assert_eq!(addr.port, 49977);
        assert_eq!(addr.base.created, 1_505_350_321_000);
        assert!(addr.topic.is_none());
    }
}
