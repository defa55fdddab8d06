use anyhow::Result;
use clap::builder::NonEmptyStringValueParser;
use clap::Args;
use std::path::PathBuf;

use crate::api::{GeminiClient, API_KEY_VAR, LEGACY_API_KEY_VAR};
use crate::config::Config;
use crate::core::{GenerateParams, Model};

/// The basic front-end always talks to the fast model
pub const BASIC_MODEL: Model = Model::Flash;

#[derive(Args, Debug)]
pub struct BasicArgs {
    /// The prompt describing the image to generate
    #[arg(required = true, value_parser = NonEmptyStringValueParser::new())]
    pub prompt: String,

    /// Output file path [default: output.png]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read settings from this config file instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl BasicArgs {
    pub fn to_params(&self, config: &Config) -> GenerateParams {
        GenerateParams::new(&self.prompt)
            .with_model(BASIC_MODEL.id())
            .with_output(self.output.clone().unwrap_or_else(|| config.defaults.output.clone()))
    }
}

pub async fn run(args: BasicArgs) -> Result<Vec<PathBuf>> {
    let config = Config::load(args.config.as_deref())?;
    let client = GeminiClient::from_env(&[API_KEY_VAR, LEGACY_API_KEY_VAR], &config.api.base_url)?;
    let params = args.to_params(&config);

    crate::cli::execute(client, &params).await
}
