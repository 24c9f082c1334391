use std::path::PathBuf;

use log::debug;

use crate::aggregator::aggregate;
use crate::config::Config;
use crate::error::AppError;
use crate::format::compose;
use crate::model::{AggregationRequest, HiddenRootPolicy};

pub struct SizeOptions {
    pub path: PathBuf,
    pub recursive: bool,
    pub human: bool,
    pub all: bool,
    pub hidden_root: Option<HiddenRootPolicy>,
}

/// Size `options.path` and print the result line. Returns the byte total.
pub fn execute_size(options: SizeOptions) -> Result<u64, AppError> {
    let config = Config::load()?;
    let human = options.human || config.human;
    let request = build_request(&options, &config);
    debug!(
        "Sizing {} (recursive: {}, all: {}, hidden root: {})",
        request.path.display(),
        request.recursive,
        request.include_hidden,
        request.hidden_root
    );

    let total = aggregate(&request)?;
    println!("{}", compose(total, human, &options.path));
    Ok(total)
}

fn build_request(options: &SizeOptions, config: &Config) -> AggregationRequest {
    AggregationRequest::new(&options.path)
        .recursive(options.recursive || config.recursive)
        .include_hidden(options.all || config.all)
        .hidden_root(options.hidden_root.unwrap_or(config.hidden_root))
}
