use futures::FutureExt;

/// Creates an AWS SQS client using credentials and configuration from the environment.
///
/// This function loads AWS configuration from the standard provider chain,
/// including environment variables such as:
/// - `AWS_ACCESS_KEY_ID`
/// - `AWS_SECRET_ACCESS_KEY`
/// - `AWS_REGION`
/// - `AWS_PROFILE`
/// - `AWS_ENDPOINT_URL` (useful for local queue emulators)
///
/// # Example
///
/// ```rust,no_run
/// use todo_event_worker::client::create_sqs_client_from_env;
///
/// #[tokio::main]
/// async fn main() {
///     let client = create_sqs_client_from_env().await;
///     // Use the client...
/// }
/// ```
pub async fn create_sqs_client_from_env() -> aws_sdk_sqs::Client {
    // The load future is large; boxing keeps the caller's state machine small.
    let config = aws_config::load_from_env().boxed().await;
    aws_sdk_sqs::Client::new(&config)
}
