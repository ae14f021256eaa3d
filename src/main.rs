mod cli_arguments;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use pod_request::http_client::reqwest_http_client::ReqwestHttpClient;
use pod_request::{RequestExecutor, RequestHeaders, ServiceCall};
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli_arguments::CliArguments;

impl From<CliArguments> for ServiceCall {
    fn from(args: CliArguments) -> Self {
        let mut call = ServiceCall::new(args.base_url, args.api_path, args.method)
            .url_encoded(args.url_encoded);

        if !args.headers.is_empty() {
            call = call.headers(args.headers.into_iter().collect::<RequestHeaders>());
        }
        if let Some(data) = args.data {
            call = call.data(data);
        }
        if let Some(trail) = args.url_trail {
            call = call.url_trailing_segment(trail);
        }
        call
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: CliArguments = CliArguments::parse();

    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(args.timeout_secs))
        .build()
    {
        Ok(client) => client,
        Err(err) => {
            error!("Failed to build HTTP client: {err}");
            return ExitCode::FAILURE;
        }
    };

    let executor = RequestExecutor::new(Arc::new(ReqwestHttpClient::new(client)));

    match executor.execute(args.into()).await {
        Ok(payload) => {
            info!("Call succeeded");
            println!(
                "{}",
                serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string())
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&err).unwrap_or_else(|_| err.to_string())
            );
            ExitCode::FAILURE
        }
    }
}
