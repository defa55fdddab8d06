use anyhow::Result;
use clap::builder::NonEmptyStringValueParser;
use clap::Args;
use std::path::PathBuf;

use crate::api::{GeminiClient, API_KEY_VAR};
use crate::config::Config;
use crate::core::{AspectRatio, GenerateParams, ImageSize, Model};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// The prompt describing the image to generate
    #[arg(required = true, value_parser = NonEmptyStringValueParser::new())]
    pub prompt: String,

    /// Output file path; extra images get a _N suffix [default: output.png]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Model to use [default: pro]
    #[arg(short, long, value_enum)]
    pub model: Option<Model>,

    /// Reference image for image-to-image generation (repeatable)
    #[arg(short = 'i', long = "input", value_name = "IMAGE")]
    pub inputs: Vec<PathBuf>,

    /// Number of images to generate
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Aspect ratio
    #[arg(long, value_enum)]
    pub aspect: Option<AspectRatio>,

    /// Image size (4K only with the pro model)
    #[arg(long, value_enum)]
    pub size: Option<ImageSize>,

    /// Use Google Search grounding to reflect current information
    #[arg(long)]
    pub search: bool,

    /// Read settings from this config file instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl GenerateArgs {
    /// Merge flags over config defaults
    pub fn to_params(&self, config: &Config) -> GenerateParams {
        let model = self.model.unwrap_or(config.defaults.model);

        GenerateParams::new(&self.prompt)
            .with_model(model.id())
            .with_input_images(self.inputs.clone())
            .with_count(self.count)
            .with_aspect_ratio(self.aspect)
            .with_size(self.size)
            .with_search(self.search)
            .with_output(self.output.clone().unwrap_or_else(|| config.defaults.output.clone()))
    }
}

pub async fn run(args: GenerateArgs) -> Result<Vec<PathBuf>> {
    let config = Config::load(args.config.as_deref())?;
    let client = GeminiClient::from_env(&[API_KEY_VAR], &config.api.base_url)?;
    let params = args.to_params(&config);

    if params.is_edit() {
        tracing::debug!("Using {} reference image(s)", params.input_images.len());
    }

    crate::cli::execute(client, &params).await
}
