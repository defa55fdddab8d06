pub mod commands;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

use crate::api::GeminiClient;
use crate::core::GenerateParams;
use crate::generator::ImageGenerator;

#[derive(Parser, Debug)]
#[command(
    name = "nanobanana",
    version,
    about = "Generate images with Google Gemini (Nano Banana)",
    long_about = r#"Generate images with Google Gemini (Nano Banana)

Sends a prompt, and optionally reference images, to the Gemini API and saves
the generated image(s) to disk.

SETUP:
  export GEMINI_API_KEY=your-key-here     (https://aistudio.google.com/)

EXAMPLES:
  Text to image:
    nanobanana "sunset over a quiet beach" -o beach.png

  Image to image with a reference:
    nanobanana "redraw this in anime style" -i reference.png -o anime.png

  Several variants (written as cat_1.png, cat_2.png, ...):
    nanobanana "a cute cat" -n 3 -o cat.png

  Wide landscape at 2K:
    nanobanana "mountain panorama" --aspect 16:9 --size 2K -o landscape.png

  Ground the prompt in current web results:
    nanobanana "poster for this week's top tech news" --search"#,
    after_help = r#"MODELS:
  pro    gemini-3-pro-image-preview (default, higher quality)
  flash  gemini-2.5-flash-image (fast)

  4K output is only served by the pro model.

CONFIGURATION:
  Optional config.toml in the platform config directory, or --config <path>:
    [api]
    base_url = "https://generativelanguage.googleapis.com/v1beta"
    [defaults]
    model = "pro"
    output = "output.png""#
)]
pub struct Cli {
    #[command(flatten)]
    pub args: commands::generate::GenerateArgs,
}

#[derive(Parser, Debug)]
#[command(
    name = "nanobanana-basic",
    version,
    about = "Generate a single image from a text prompt with Google Gemini",
    long_about = r#"Generate a single image from a text prompt with Google Gemini

Uses the fast Nano Banana model (gemini-2.5-flash-image).

SETUP:
  export GEMINI_API_KEY=your-key-here
  (GOOGLE_API_KEY is accepted as a fallback)

EXAMPLE:
  nanobanana-basic "a lighthouse in a storm" -o lighthouse.png"#
)]
pub struct BasicCli {
    #[command(flatten)]
    pub args: commands::basic::BasicArgs,
}

/// Run one generation with a spinner on stderr and report the results.
pub(crate) async fn execute(client: GeminiClient, params: &GenerateParams) -> Result<Vec<PathBuf>> {
    let pb = spinner(format!("Generating image with {}...", params.model));

    let result = ImageGenerator::new(client)
        .generate(params, |text| {
            pb.suspend(|| println!("{}: {}", "Model response".cyan().bold(), text));
        })
        .await;

    pb.finish_and_clear();
    let paths = result?;

    for path in &paths {
        println!("{} {}", "Saved image:".green(), path.display());
    }

    Ok(paths)
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.yellow} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
