//! Shared patterns for request validation.

use once_cell::sync::Lazy;
use regex::Regex;

/// `#RRGGBB` colour
pub(crate) static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex color regex should compile")
});

/// Path or file name of a jpg/jpeg/png image
pub(crate) static IMAGE_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[^\s]+\.(jpe?g|png)$").expect("image path regex should compile")
});
