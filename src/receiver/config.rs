use crate::errors::EventWorkerError;

pub const QUEUE_URL: &str = "QUEUE_URL";
pub const QUEUE_WAIT_TIMEOUT: &str = "QUEUE_WAIT_TIMEOUT";
pub const QUEUE_VISIBILITY_TIMEOUT: &str = "QUEUE_VISIBILITY_TIMEOUT";
pub const QUEUE_RECV_MAX_MESSAGES: &str = "QUEUE_RECV_MAX_MESSAGES";

/// Upper bound SQS accepts for `WaitTimeSeconds`.
pub const MAX_WAIT_TIMEOUT: i32 = 20;
/// Upper bound SQS accepts for `VisibilityTimeout` (12 hours).
pub const MAX_VISIBILITY_TIMEOUT: i32 = 43_200;
/// Upper bound SQS accepts for `MaxNumberOfMessages`.
pub const MAX_RECV_MESSAGES: i32 = 10;

/// Configuration for polling the to-do event queue.
///
/// Built once at startup from the environment and never mutated afterwards.
/// The attribute lists are fixed: the worker always asks for the
/// `SentTimestamp` system attribute and every message attribute.
///
/// # Fields
/// - `url`: The queue URL to poll.
/// - `wait_timeout`: Long-poll wait time, in seconds.
/// - `visibility_timeout`: How long received messages stay hidden, in seconds.
/// - `attribute_names`: System attributes requested with each message.
/// - `message_attribute_names`: Message attributes requested with each message.
/// - `max_messages`: The maximum number of messages to receive in a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueConfig {
    pub url: String,
    pub wait_timeout: i32,
    pub visibility_timeout: i32,
    pub attribute_names: Vec<String>,
    pub message_attribute_names: Vec<String>,
    pub max_messages: i32,
}

impl QueueConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, EventWorkerError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Every variable is required. Integer values are trimmed before parsing
    /// and checked against the limits the queue service enforces, so a bad
    /// setting is reported here rather than by the first receive call.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EventWorkerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = required(&lookup, QUEUE_URL)?.trim().to_string();
        if url.is_empty() {
            return Err(EventWorkerError::EmptyQueueUrl);
        }

        let wait_timeout = bounded(&lookup, QUEUE_WAIT_TIMEOUT, 0, MAX_WAIT_TIMEOUT)?;
        let visibility_timeout =
            bounded(&lookup, QUEUE_VISIBILITY_TIMEOUT, 0, MAX_VISIBILITY_TIMEOUT)?;
        let max_messages = bounded(&lookup, QUEUE_RECV_MAX_MESSAGES, 1, MAX_RECV_MESSAGES)?;

        Ok(QueueConfig {
            url,
            wait_timeout,
            visibility_timeout,
            attribute_names: vec!["SentTimestamp".to_string()],
            message_attribute_names: vec!["All".to_string()],
            max_messages,
        })
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, EventWorkerError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).ok_or(EventWorkerError::MissingVar { name })
}

fn bounded<F>(lookup: &F, name: &'static str, min: i32, max: i32) -> Result<i32, EventWorkerError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = required(lookup, name)?;
    let value = raw
        .trim()
        .parse::<i32>()
        .map_err(|source| EventWorkerError::InvalidVar {
            name,
            value: raw.clone(),
            source,
        })?;

    if !(min..=max).contains(&value) {
        return Err(EventWorkerError::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn valid() -> HashMap<String, String> {
        vars(&[
            (
                QUEUE_URL,
                "https://sqs.us-east-1.amazonaws.com/123456789012/devo_TodoEventQueue",
            ),
            (QUEUE_WAIT_TIMEOUT, "20"),
            (QUEUE_VISIBILITY_TIMEOUT, "30"),
            (QUEUE_RECV_MAX_MESSAGES, "10"),
        ])
    }

    fn load(env: &HashMap<String, String>) -> Result<QueueConfig, EventWorkerError> {
        QueueConfig::from_lookup(|name| env.get(name).cloned())
    }

    #[test]
    fn builds_from_valid_environment() {
        let config = load(&valid()).unwrap();

        assert_eq!(
            config.url,
            "https://sqs.us-east-1.amazonaws.com/123456789012/devo_TodoEventQueue"
        );
        assert_eq!(config.wait_timeout, 20);
        assert_eq!(config.visibility_timeout, 30);
        assert_eq!(config.max_messages, 10);
        assert_eq!(config.attribute_names, vec!["SentTimestamp"]);
        assert_eq!(config.message_attribute_names, vec!["All"]);
    }

    #[test]
    fn each_missing_variable_is_reported() {
        for name in [
            QUEUE_URL,
            QUEUE_WAIT_TIMEOUT,
            QUEUE_VISIBILITY_TIMEOUT,
            QUEUE_RECV_MAX_MESSAGES,
        ] {
            let mut env = valid();
            env.remove(name);

            match load(&env) {
                Err(EventWorkerError::MissingVar { name: missing }) => assert_eq!(missing, name),
                other => panic!("expected MissingVar for {name}, got {other:?}"),
            }
        }
    }

    #[test]
    fn non_numeric_value_is_rejected() {
        let mut env = valid();
        env.insert(QUEUE_WAIT_TIMEOUT.to_string(), "twenty".to_string());

        let err = load(&env).unwrap_err();
        assert!(matches!(
            err,
            EventWorkerError::InvalidVar {
                name: QUEUE_WAIT_TIMEOUT,
                ref value,
                ..
            } if value == "twenty"
        ));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let mut env = valid();
        env.insert(QUEUE_RECV_MAX_MESSAGES.to_string(), " 5\n".to_string());

        assert_eq!(load(&env).unwrap().max_messages, 5);
    }

    #[test]
    fn limits_are_enforced() {
        let cases = [
            (QUEUE_WAIT_TIMEOUT, "21"),
            (QUEUE_WAIT_TIMEOUT, "-1"),
            (QUEUE_VISIBILITY_TIMEOUT, "43201"),
            (QUEUE_RECV_MAX_MESSAGES, "0"),
            (QUEUE_RECV_MAX_MESSAGES, "11"),
        ];

        for (name, value) in cases {
            let mut env = valid();
            env.insert(name.to_string(), value.to_string());

            match load(&env) {
                Err(EventWorkerError::OutOfRange { name: bad, .. }) => assert_eq!(bad, name),
                other => panic!("expected OutOfRange for {name}={value}, got {other:?}"),
            }
        }
    }

    #[test]
    fn boundary_values_are_accepted() {
        let mut env = valid();
        env.insert(QUEUE_WAIT_TIMEOUT.to_string(), "0".to_string());
        env.insert(QUEUE_VISIBILITY_TIMEOUT.to_string(), "43200".to_string());
        env.insert(QUEUE_RECV_MAX_MESSAGES.to_string(), "1".to_string());

        let config = load(&env).unwrap();
        assert_eq!(config.wait_timeout, 0);
        assert_eq!(config.visibility_timeout, MAX_VISIBILITY_TIMEOUT);
        assert_eq!(config.max_messages, 1);
    }

    #[test]
    fn blank_queue_url_is_rejected() {
        let mut env = valid();
        env.insert(QUEUE_URL.to_string(), "   ".to_string());

        assert!(matches!(load(&env), Err(EventWorkerError::EmptyQueueUrl)));
    }
}
