use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::TransformError;
use crate::payload::{
    BodySegments, SourcePayload, TargetComment, TargetPayload, TargetService, TransformOptions,
};

/// Prefix for every identifier derived from a jpnkn post.
pub const PROTOCOL_TAG: &str = "jpnkn";

/// Name shown when a post leaves the name field blank. Displayed verbatim.
pub const ANONYMOUS_NAME: &str = "名無し";

/// `userId` for posts without a mail field.
pub const ANONYMOUS_USER_ID: &str = "jpnkn:anonymous";

/// Minimum width of the post-number column when `prefix_res_no` is set.
const RES_NO_WIDTH: usize = 4;

/// Convert a jpnkn post into a OneComme comment.
///
/// The resulting `comment.id` depends only on board, thread and post number,
/// so re-delivered posts map to the same comment and OneComme can drop them.
pub fn transform(
    source: &SourcePayload,
    options: &TransformOptions,
) -> Result<TargetPayload, TransformError> {
    check_options(options)?;

    let segments = BodySegments::parse(&source.body);
    if segments.message.is_empty() {
        return Err(TransformError::Validation(
            "message is required in source payload".to_string(),
        ));
    }

    let base_name = if segments.name.is_empty() {
        ANONYMOUS_NAME
    } else {
        segments.name
    };
    let name = if options.prefix_res_no {
        format!("{:<width$} {}", source.no, base_name, width = RES_NO_WIDTH)
    } else {
        base_name.to_string()
    };

    let user_id = if segments.mail.is_empty() {
        ANONYMOUS_USER_ID
    } else {
        segments.mail
    };

    let comment_id = format!(
        "{}:{}:{}:{}",
        PROTOCOL_TAG, source.board_id, source.thread_key, source.no
    );

    let profile_image = options
        .profile_image_path
        .as_deref()
        .filter(|path| !path.is_empty())
        .map(str::to_string);

    debug!(comment_id = %comment_id, "Transformed jpnkn post");

    Ok(TargetPayload {
        service: TargetService {
            id: options.service_id.clone(),
        },
        comment: TargetComment {
            id: comment_id,
            user_id: user_id.to_string(),
            name,
            comment: segments.message.to_string(),
            profile_image,
        },
    })
}

/// Like [`transform`], but for a payload that has not been decoded yet.
///
/// Anything that isn't a JSON object shaped like [`SourcePayload`] is rejected
/// as an invalid payload. Configuration problems are still reported first.
pub fn transform_value(
    source: &Value,
    options: &TransformOptions,
) -> Result<TargetPayload, TransformError> {
    check_options(options)?;

    if !source.is_object() {
        return Err(invalid_payload());
    }
    let source = SourcePayload::deserialize(source).map_err(|e| {
        debug!("Source payload did not decode: {}", e);
        invalid_payload()
    })?;

    transform(&source, options)
}

fn check_options(options: &TransformOptions) -> Result<(), TransformError> {
    if options.service_id.is_empty() {
        return Err(TransformError::Configuration(
            "serviceId is required".to_string(),
        ));
    }
    Ok(())
}

fn invalid_payload() -> TransformError {
    TransformError::Validation("invalid source payload".to_string())
}
