//! Mapping from AWS SDK failures to [`ArenaError`].

use arena_core::ArenaError;
use aws_sdk_bedrockagentruntime::error::{DisplayErrorContext, SdkError};
use aws_sdk_bedrockagentruntime::operation::invoke_agent::InvokeAgentError;
use aws_sdk_bedrockagentruntime::types::error::ResponseStreamError;
use std::error::Error as StdError;

const STOP_SEQUENCES_HINT: &str = "\n\nHint: this model does not accept stop sequences. \
Update the Bedrock agent:\n\
1. Open the AWS Console, then Bedrock, then Agents\n\
2. Select the agent and edit it\n\
3. Remove all stop sequences from the model's inference configuration\n\
4. Save, then create a new version and alias";

/// Broad failure category, decided before the message is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FailureClass {
    Auth,
    Throttled,
    Network,
    Validation,
    Provider,
    Malformed,
}

/// Append operator guidance for provider errors that have a known fix.
pub fn with_remediation_hint(message: String) -> String {
    if message.contains("stopSequences") {
        message + STOP_SEQUENCES_HINT
    } else {
        message
    }
}

pub(crate) fn to_arena_error(class: FailureClass, message: String) -> ArenaError {
    let message = with_remediation_hint(message);
    match class {
        FailureClass::Auth => ArenaError::Auth(message),
        FailureClass::Throttled => ArenaError::Throttled(message),
        FailureClass::Network => ArenaError::Network(message),
        FailureClass::Validation => ArenaError::Validation(message),
        FailureClass::Provider => ArenaError::Provider(message),
        FailureClass::Malformed => ArenaError::MalformedResponse(message),
    }
}

fn mentions_credentials(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    lower.contains("credential") || lower.contains("security token") || lower.contains("expired")
}

fn classify_sdk_error<E, R>(
    err: &SdkError<E, R>,
    service: impl FnOnce(&E) -> FailureClass,
    message: &str,
) -> FailureClass {
    if mentions_credentials(message) {
        return FailureClass::Auth;
    }
    match err {
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => FailureClass::Network,
        SdkError::ServiceError(ctx) => service(ctx.err()),
        SdkError::ResponseError(_) => FailureClass::Malformed,
        _ => FailureClass::Provider,
    }
}

pub(crate) fn classify_invoke_error(err: &InvokeAgentError) -> FailureClass {
    if err.is_access_denied_exception() {
        FailureClass::Auth
    } else if err.is_throttling_exception() || err.is_service_quota_exceeded_exception() {
        FailureClass::Throttled
    } else if err.is_validation_exception() || err.is_resource_not_found_exception() {
        FailureClass::Validation
    } else {
        FailureClass::Provider
    }
}

pub(crate) fn classify_stream_error(err: &ResponseStreamError) -> FailureClass {
    if err.is_access_denied_exception() {
        FailureClass::Auth
    } else if err.is_throttling_exception() || err.is_service_quota_exceeded_exception() {
        FailureClass::Throttled
    } else if err.is_validation_exception() || err.is_resource_not_found_exception() {
        FailureClass::Validation
    } else {
        FailureClass::Provider
    }
}

/// Convert a failed `InvokeAgent` call.
pub(crate) fn from_invoke_error<R>(err: SdkError<InvokeAgentError, R>, context: &str) -> ArenaError
where
    R: std::fmt::Debug,
    SdkError<InvokeAgentError, R>: StdError,
{
    let message = format!("{context}: {}", DisplayErrorContext(&err));
    let class = classify_sdk_error(&err, classify_invoke_error, &message);
    to_arena_error(class, message)
}

/// Convert a failure while reading the completion stream.
pub(crate) fn from_stream_error<R>(
    err: SdkError<ResponseStreamError, R>,
    context: &str,
) -> ArenaError
where
    R: std::fmt::Debug,
    SdkError<ResponseStreamError, R>: StdError,
{
    let message = format!("{context}: {}", DisplayErrorContext(&err));
    let class = match classify_sdk_error(&err, classify_stream_error, &message) {
        FailureClass::Network | FailureClass::Provider => FailureClass::Malformed,
        other => other,
    };
    to_arena_error(class, message)
}
