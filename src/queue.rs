use async_trait::async_trait;
use aws_sdk_sqs::error::DisplayErrorContext;
use aws_sdk_sqs::types::{Message, MessageSystemAttributeName};

use crate::errors::EventWorkerError;
use crate::receiver::config::QueueConfig;

/// Parameters of a single receive call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiveRequest {
    pub queue_url: String,
    pub attribute_names: Vec<String>,
    pub max_messages: i32,
    pub message_attribute_names: Vec<String>,
    pub visibility_timeout: i32,
    pub wait_timeout: i32,
}

impl From<&QueueConfig> for ReceiveRequest {
    fn from(config: &QueueConfig) -> Self {
        ReceiveRequest {
            queue_url: config.url.clone(),
            attribute_names: config.attribute_names.clone(),
            max_messages: config.max_messages,
            message_attribute_names: config.message_attribute_names.clone(),
            visibility_timeout: config.visibility_timeout,
            wait_timeout: config.wait_timeout,
        }
    }
}

/// The queue operations the poller depends on.
///
/// Implemented for [`aws_sdk_sqs::Client`]; tests substitute an in-memory
/// queue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueueService: Send + Sync {
    /// Long-polls the queue. An empty vector means the wait elapsed with no
    /// message available.
    async fn receive(&self, request: &ReceiveRequest) -> Result<Vec<Message>, EventWorkerError>;

    /// Deletes one delivered message by its receipt handle.
    async fn delete(&self, queue_url: &str, receipt_handle: &str) -> Result<(), EventWorkerError>;
}

#[async_trait]
impl QueueService for aws_sdk_sqs::Client {
    async fn receive(&self, request: &ReceiveRequest) -> Result<Vec<Message>, EventWorkerError> {
        let attribute_names = request
            .attribute_names
            .iter()
            .map(|name| MessageSystemAttributeName::from(name.as_str()))
            .collect();

        let output = self
            .receive_message()
            .queue_url(&request.queue_url)
            .set_message_system_attribute_names(Some(attribute_names))
            .max_number_of_messages(request.max_messages)
            .set_message_attribute_names(Some(request.message_attribute_names.clone()))
            .visibility_timeout(request.visibility_timeout)
            .wait_time_seconds(request.wait_timeout)
            .send()
            .await
            .map_err(|err| EventWorkerError::Receive {
                queue_url: request.queue_url.clone(),
                message: DisplayErrorContext(&err).to_string(),
            })?;

        Ok(output.messages().to_vec())
    }

    async fn delete(&self, queue_url: &str, receipt_handle: &str) -> Result<(), EventWorkerError> {
        self.delete_message()
            .queue_url(queue_url)
            .receipt_handle(receipt_handle)
            .send()
            .await
            .map_err(|err| EventWorkerError::Delete {
                receipt_handle: receipt_handle.to_string(),
                message: DisplayErrorContext(&err).to_string(),
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receive_request_mirrors_config() {
        let config = QueueConfig {
            url: "https://sqs.eu-west-1.amazonaws.com/1/todo".to_string(),
            wait_timeout: 5,
            visibility_timeout: 60,
            attribute_names: vec!["SentTimestamp".to_string()],
            message_attribute_names: vec!["All".to_string()],
            max_messages: 3,
        };

        let request = ReceiveRequest::from(&config);

        assert_eq!(request.queue_url, config.url);
        assert_eq!(request.wait_timeout, 5);
        assert_eq!(request.visibility_timeout, 60);
        assert_eq!(request.max_messages, 3);
        assert_eq!(request.attribute_names, vec!["SentTimestamp"]);
        assert_eq!(request.message_attribute_names, vec!["All"]);
    }
}
