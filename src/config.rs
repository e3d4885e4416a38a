use std::env;
use std::time::Duration;

use dotenv::dotenv;

use crate::pipeline::{FailurePolicy, RunOptions};

const DEFAULT_GEOCODER_URL: &str =
    "https://geocode.arcgis.com/arcgis/rest/services/World/GeocodeServer";

const DEFAULT_ROW_CAP: usize = 5;
const DEFAULT_RATE_LIMIT_SECS: u64 = 2;
const DEFAULT_RETRY_ATTEMPTS: usize = 2;

pub struct Config {
    pub input_path: String,
    pub output_path: String,
    pub geocoder_url: String,
    pub options: RunOptions
}

pub fn init_config() -> Config {
    dotenv().ok();

    let input_path = env::var("INPUT_PATH")
        .expect("INPUT_PATH must be set");

    let output_path = env::var("OUTPUT_PATH")
        .expect("OUTPUT_PATH must be set");

    let geocoder_url = env::var("GEOCODER_URL")
        .unwrap_or_else(|_| DEFAULT_GEOCODER_URL.to_string());

    let row_cap = env::var("ROW_CAP")
        .map(|cap| cap
            .parse::<usize>()
            .expect("ROW_CAP must be an integer")
        )
        .unwrap_or(DEFAULT_ROW_CAP);

    let rate_limit_secs = env::var("RATE_LIMIT_SECS")
        .map(|secs| secs
            .parse::<u64>()
            .expect("RATE_LIMIT_SECS must be an integer")
        )
        .unwrap_or(DEFAULT_RATE_LIMIT_SECS);

    let failure_policy = match env::var("ON_GEOCODE_FAILURE").as_ref().map(|policy| policy.as_str()) {
        Ok("skip") | Err(_) => FailurePolicy::Skip,
        Ok("fail-fast") => FailurePolicy::FailFast,
        Ok("retry") => FailurePolicy::Retry(DEFAULT_RETRY_ATTEMPTS),
        Ok(other) => panic!("ON_GEOCODE_FAILURE must be skip, fail-fast or retry (got {})", other)
    };

    Config {
        input_path,
        output_path,
        geocoder_url,
        options: RunOptions {
            row_cap,
            rate_limit: Duration::from_secs(rate_limit_secs),
            failure_policy
        }
    }
}
