use clap::Parser;
use pod_request::RequestMethod;
use serde_json::Value;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Calls a pod service and prints the normalized outcome", long_about = None)]
pub(crate) struct CliArguments {
    #[arg(short, long)]
    pub base_url: String,

    #[arg(short, long)]
    pub api_path: String,

    #[arg(short, long, default_value = "GET")]
    pub method: RequestMethod,

    /// Repeatable, as NAME:VALUE
    #[arg(short = 'H', long = "header", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// JSON object sent as query params (GET) or body
    #[arg(short, long, value_parser = parse_json)]
    pub data: Option<Value>,

    #[arg(short = 'u', long)]
    pub url_encoded: bool,

    #[arg(short = 't', long)]
    pub url_trail: Option<String>,

    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("header `{raw}` is not NAME:VALUE"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("header `{raw}` has an empty name"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

fn parse_json(raw: &str) -> Result<Value, String> {
    serde_json::from_str(raw).map_err(|e| format!("invalid JSON: {e}"))
}
