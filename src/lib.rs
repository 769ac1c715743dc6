//! Convert jpnkn MQTT posts into OneComme comment API payloads.

pub mod config;
pub mod error;
pub mod format;
pub mod payload;
pub mod transform;

pub use error::{ErrorKind, TransformError};
pub use format::format_payload;
pub use payload::{SourcePayload, TargetPayload, TransformOptions};
pub use transform::{transform, transform_value};
