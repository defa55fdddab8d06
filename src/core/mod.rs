pub mod error;
pub mod naming;
pub mod params;

pub use error::GenError;
pub use naming::output_path_for;
pub use params::{AspectRatio, GenerateParams, ImageSize, Model};
