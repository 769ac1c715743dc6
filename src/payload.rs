use serde::{Deserialize, Serialize};

/// Separator between the fields of a jpnkn `body`.
pub const BODY_DELIMITER: &str = "<>";

/// A post as published on the jpnkn MQTT feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourcePayload {
    /// `name<>mail<>date<>message<>`
    pub body: String,
    /// Post number within the thread
    pub no: String,
    #[serde(rename = "bbsid", alias = "boardId")]
    pub board_id: String,
    #[serde(rename = "threadkey", alias = "threadKey")]
    pub thread_key: String,
}

/// Positional fields of a jpnkn `body`. Missing segments are empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BodySegments<'a> {
    pub name: &'a str,
    pub mail: &'a str,
    /// Read but never forwarded
    pub date: &'a str,
    pub message: &'a str,
}

impl<'a> BodySegments<'a> {
    pub fn parse(body: &'a str) -> Self {
        let mut parts = body.split(BODY_DELIMITER);
        let mut next = || parts.next().unwrap_or("");
        Self {
            name: next(),
            mail: next(),
            date: next(),
            message: next(),
        }
    }
}

/// Payload accepted by the OneComme comment API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetPayload {
    pub service: TargetService,
    pub comment: TargetComment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetService {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetComment {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub comment: String,
    /// OneComme treats a missing key differently from an empty one, so this is
    /// left out of the JSON entirely when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

/// Per-call settings for [`transform`](crate::transform::transform).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformOptions {
    pub service_id: String,
    #[serde(default)]
    pub prefix_res_no: bool,
    #[serde(default)]
    pub profile_image_path: Option<String>,
}

impl TransformOptions {
    pub fn new(service_id: impl Into<String>) -> Self {
        Self {
            service_id: service_id.into(),
            ..Default::default()
        }
    }
}
