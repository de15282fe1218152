/// Instagram-banner detection for uploaded images.
///
/// A banner image carries the headline itself, so a news item whose image
/// is detected as a banner may be submitted without a title. Detection is a
/// business rule keyed on dimensions only: either an exact allow-listed
/// size or a 9:16 portrait ratio within a tight tolerance.

/// Exact story/banner export sizes seen in the wild.
const EXACT_DIMENSIONS: &[(u32, u32)] = &[(1080, 1920), (720, 1280)];

/// Target portrait ratio and how far off it may be.
const PORTRAIT_RATIO: f64 = 9.0 / 16.0;
const RATIO_TOLERANCE: f64 = 0.01;

/// Below this height nothing is treated as a banner regardless of ratio.
const MIN_BANNER_HEIGHT: u32 = 800;

pub fn is_banner(width: u32, height: u32) -> bool {
    if width == 0 || height == 0 {
        return false;
    }

    if EXACT_DIMENSIONS.contains(&(width, height)) {
        return true;
    }

    if height < MIN_BANNER_HEIGHT {
        return false;
    }

    let ratio = width as f64 / height as f64;
    (ratio - PORTRAIT_RATIO).abs() <= RATIO_TOLERANCE
}
