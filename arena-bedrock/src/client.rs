//! Amazon Bedrock Agent Runtime client implementation.
//!
//! Calls `InvokeAgent` once per request and drains the `completion` event
//! stream into text. Credentials are loaded automatically from the
//! environment via `aws-config`.

use crate::completion::CompletionBuffer;
use crate::config::BedrockAgentConfig;
use crate::error::{from_invoke_error, from_stream_error};
use arena_core::{AgentInvoker, InvocationRequest, Result};
use async_trait::async_trait;
use aws_sdk_bedrockagentruntime::types::ResponseStream;
use tracing::{debug, info, instrument};

/// Invoker backed by the AWS SDK `InvokeAgent` operation.
///
/// # Example
///
/// ```rust,ignore
/// use arena_bedrock::{BedrockAgentClient, BedrockAgentConfig};
///
/// let client = BedrockAgentClient::new(BedrockAgentConfig::new("us-west-2")).await;
/// let text = client.invoke(request).await?;
/// ```
pub struct BedrockAgentClient {
    client: aws_sdk_bedrockagentruntime::Client,
    region: String,
}

impl BedrockAgentClient {
    /// Create a client for the configured region.
    ///
    /// Loads AWS credentials from the standard credential chain. A missing
    /// credential is not detected here; it surfaces as an `Auth` error on
    /// the first invocation.
    pub async fn new(config: BedrockAgentConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        let sdk_config = loader.load().await;
        let client = aws_sdk_bedrockagentruntime::Client::new(&sdk_config);

        info!(region = %config.region, "bedrock agent runtime client created");

        Self { client, region: config.region }
    }

    /// Wrap an already configured SDK client.
    pub fn from_client(
        client: aws_sdk_bedrockagentruntime::Client,
        region: impl Into<String>,
    ) -> Self {
        Self { client, region: region.into() }
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}

#[async_trait]
impl AgentInvoker for BedrockAgentClient {
    fn name(&self) -> &str {
        "bedrock-agent-runtime"
    }

    #[instrument(
        skip_all,
        fields(region = %self.region, agent_id = %request.agent_id, alias_id = %request.alias_id)
    )]
    async fn invoke(&self, request: InvocationRequest) -> Result<String> {
        let context = format!(
            "InvokeAgent failed for agent={}, alias={}, region={}",
            request.agent_id, request.alias_id, self.region
        );

        let mut output = self
            .client
            .invoke_agent()
            .agent_id(&request.agent_id)
            .agent_alias_id(&request.alias_id)
            .session_id(&request.session_id)
            .input_text(&request.prompt)
            .send()
            .await
            .map_err(|e| from_invoke_error(e, &context))?;

        let mut buffer = CompletionBuffer::new();
        while let Some(event) =
            output.completion.recv().await.map_err(|e| from_stream_error(e, &context))?
        {
            match event {
                ResponseStream::Chunk(part) => {
                    if let Some(bytes) = part.bytes() {
                        buffer.push(bytes.as_ref());
                    }
                }
                _ => {
                    // Traces, files and return-control events carry no answer text.
                }
            }
        }

        debug!(chunks = buffer.chunk_count(), "completion stream drained");
        buffer.finish()
    }
}
