use clap::ValueEnum;
use serde::Deserialize;
use std::path::PathBuf;

/// Model variants exposed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Model {
    /// Nano Banana: fast and efficient
    Flash,
    /// Nano Banana Pro: higher quality, stronger reasoning
    #[default]
    Pro,
}

impl Model {
    /// Gemini model identifier used in the endpoint path
    pub fn id(&self) -> &'static str {
        match self {
            Model::Flash => "gemini-2.5-flash-image",
            Model::Pro => "gemini-3-pro-image-preview",
        }
    }
}

/// Supported output aspect ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AspectRatio {
    #[value(name = "1:1")]
    Square,
    #[value(name = "2:3")]
    Portrait2x3,
    #[value(name = "3:2")]
    Landscape3x2,
    #[value(name = "3:4")]
    Portrait3x4,
    #[value(name = "4:3")]
    Landscape4x3,
    #[value(name = "4:5")]
    Portrait4x5,
    #[value(name = "5:4")]
    Landscape5x4,
    #[value(name = "9:16")]
    Portrait9x16,
    #[value(name = "16:9")]
    Landscape16x9,
    #[value(name = "21:9")]
    Ultrawide21x9,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait2x3 => "2:3",
            AspectRatio::Landscape3x2 => "3:2",
            AspectRatio::Portrait3x4 => "3:4",
            AspectRatio::Landscape4x3 => "4:3",
            AspectRatio::Portrait4x5 => "4:5",
            AspectRatio::Landscape5x4 => "5:4",
            AspectRatio::Portrait9x16 => "9:16",
            AspectRatio::Landscape16x9 => "16:9",
            AspectRatio::Ultrawide21x9 => "21:9",
        }
    }
}

/// Output resolution tiers (4K is only served by the Pro model)
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ImageSize {
    #[value(name = "1K")]
    OneK,
    #[value(name = "2K")]
    TwoK,
    #[value(name = "4K")]
    FourK,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::OneK => "1K",
            ImageSize::TwoK => "2K",
            ImageSize::FourK => "4K",
        }
    }
}

/// Parameters for a single generation run
#[derive(Debug, Clone)]
pub struct GenerateParams {
    /// The prompt for image generation
    pub prompt: String,

    /// Gemini model identifier
    pub model: String,

    /// Reference images for image-to-image generation, in request order
    pub input_images: Vec<PathBuf>,

    /// Number of variants requested
    pub count: u32,

    pub aspect_ratio: Option<AspectRatio>,

    pub size: Option<ImageSize>,

    /// Attach the Google Search grounding tool
    pub use_search: bool,

    /// Requested output path; other file names derive from it
    pub output: PathBuf,
}

impl GenerateParams {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: Model::default().id().to_string(),
            input_images: Vec::new(),
            count: 1,
            aspect_ratio: None,
            size: None,
            use_search: false,
            output: PathBuf::from("output.png"),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_input_images(mut self, paths: Vec<PathBuf>) -> Self {
        self.input_images = paths;
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count.max(1);
        self
    }

    pub fn with_aspect_ratio(mut self, ar: Option<AspectRatio>) -> Self {
        self.aspect_ratio = ar;
        self
    }

    pub fn with_size(mut self, size: Option<ImageSize>) -> Self {
        self.size = size;
        self
    }

    pub fn with_search(mut self, enabled: bool) -> Self {
        self.use_search = enabled;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Check if this is an image-to-image request
    pub fn is_edit(&self) -> bool {
        !self.input_images.is_empty()
    }
}
