use std::path::{Path, PathBuf};

const DEFAULT_EXTENSION: &str = "png";

/// Resolve where the `index`-th (0-based) image of a run is written.
///
/// Only a single-variant request writes its first image to `requested`
/// verbatim. Everything else becomes `<stem>_<index + 1>.<ext>` next to it.
pub fn output_path_for(requested: &Path, count: u32, index: usize) -> PathBuf {
    if count == 1 && index == 0 {
        return requested.to_path_buf();
    }

    let stem = requested
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = requested
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
    let filename = format!("{}_{}.{}", stem, index + 1, ext);

    match requested.parent() {
        Some(parent) => parent.join(filename),
        None => PathBuf::from(filename),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_variant_first_image_uses_exact_path() {
        let p = output_path_for(Path::new("out/cat.jpg"), 1, 0);
        assert_eq!(p, PathBuf::from("out/cat.jpg"));
    }

    #[test]
    fn single_variant_extra_images_start_at_two() {
        let requested = Path::new("out/cat.jpg");
        assert_eq!(output_path_for(requested, 1, 1), PathBuf::from("out/cat_2.jpg"));
        assert_eq!(output_path_for(requested, 1, 2), PathBuf::from("out/cat_3.jpg"));
    }

    #[test]
    fn multi_variant_indexes_from_one() {
        let requested = Path::new("cat.png");
        assert_eq!(output_path_for(requested, 3, 0), PathBuf::from("cat_1.png"));
        assert_eq!(output_path_for(requested, 3, 1), PathBuf::from("cat_2.png"));
    }

    #[test]
    fn missing_extension_defaults_to_png() {
        assert_eq!(output_path_for(Path::new("shots/cat"), 2, 0), PathBuf::from("shots/cat_1.png"));
        // the bare path is kept as-is when it is used verbatim
        assert_eq!(output_path_for(Path::new("shots/cat"), 1, 0), PathBuf::from("shots/cat"));
    }

    #[test]
    fn only_last_extension_is_split() {
        assert_eq!(
            output_path_for(Path::new("a.tar.webp"), 2, 1),
            PathBuf::from("a.tar_2.webp")
        );
    }
}
