use aws_config::SdkConfig;
use aws_sdk_sts::config::{Credentials, Region};
use aws_sdk_sts::error::SdkError;
use tracing_subscriber::EnvFilter;
use crate::core::library::{BookstoreError, BookstoreResult};

// helper method to build the shared aws config, scoped to an assumed role when one is given
pub async fn build_sdk_config(region: &str, role_arn: Option<&str>, session_name: &str) -> BookstoreResult<SdkConfig> {
    //Get config from environment.
    let base = aws_config::from_env()
        .region(Region::new(region.to_string()))
        .load()
        .await;
    let Some(role_arn) = role_arn else {
        return Ok(base);
    };

    let credentials = assume_role(&base, role_arn, session_name).await?;
    Ok(aws_config::from_env()
        .region(Region::new(region.to_string()))
        .credentials_provider(credentials)
        .load()
        .await)
}

async fn assume_role(base: &SdkConfig, role_arn: &str, session_name: &str) -> BookstoreResult<Credentials> {
    let out = aws_sdk_sts::Client::new(base)
        .assume_role()
        .role_arn(role_arn)
        .role_session_name(session_name)
        .send()
        .await?;
    let creds = out.credentials().ok_or_else(|| BookstoreError::credentials(
        format!("assume role {} returned no credentials", role_arn).as_str(), None, false))?;
    tracing::info!(role_arn, session_name, "assumed role");
    Ok(Credentials::new(
        creds.access_key_id().unwrap_or_default(),
        creds.secret_access_key().unwrap_or_default(),
        creds.session_token().map(str::to_string),
        None,
        "assumed-role",
    ))
}

// required to enable CloudWatch error logging by the runtime
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        // disable printing the name of the module in every log line.
        .with_target(false)
        // this needs to be set to false, otherwise ANSI color codes will
        // show up in a confusing manner in CloudWatch logs.
        .with_ansi(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .json()
        .init();
}

impl<E, R> From<SdkError<E, R>> for BookstoreError where SdkError<E, R>: std::fmt::Debug {
    fn from(err: SdkError<E, R>) -> Self {
        let (retryable, reason) = retryable_sdk_error(&err);
        BookstoreError::credentials(format!("{:?}", err).as_str(), reason, retryable)
    }
}

fn retryable_sdk_error<E, R>(err: &SdkError<E, R>) -> (bool, Option<String>) {
    match err {
        SdkError::ConstructionFailure(_) => { (false, Some("ConstructionFailure".to_string())) }
        SdkError::TimeoutError(_) => { (true, Some("TimeoutError".to_string())) }
        SdkError::DispatchFailure(_) => { (true, Some("DispatchFailure".to_string())) }
        SdkError::ResponseError { .. } => { (true, Some("ResponseError".to_string())) }
        SdkError::ServiceError(_) => { (false, Some("ServiceError".to_string())) }
        _ => { (true, Some("Unknown".to_string())) }
    }
}
