//! Per-platform output specifications.
//!
//! Static lookup from a platform name to its aspect ratios, duration
//! limits, resolution, and container format. Lookup is case-insensitive
//! and falls back to the Instagram entry for unknown names.

use serde::Serialize;

/// Output constraints for one target platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformSpecs {
    pub aspect_ratios: &'static [&'static str],
    pub max_duration_secs: u32,
    pub recommended_duration_secs: u32,
    pub resolution: &'static str,
    pub container: &'static str,
}

const INSTAGRAM: PlatformSpecs = PlatformSpecs {
    aspect_ratios: &["16:9", "1:1", "9:16"],
    max_duration_secs: 60,
    recommended_duration_secs: 30,
    resolution: "1080x1080",
    container: "mp4",
};

const TIKTOK: PlatformSpecs = PlatformSpecs {
    aspect_ratios: &["9:16"],
    max_duration_secs: 60,
    recommended_duration_secs: 15,
    resolution: "1080x1920",
    container: "mp4",
};

const YOUTUBE_SHORTS: PlatformSpecs = PlatformSpecs {
    aspect_ratios: &["9:16"],
    max_duration_secs: 60,
    recommended_duration_secs: 30,
    resolution: "1080x1920",
    container: "mp4",
};

const LINKEDIN: PlatformSpecs = PlatformSpecs {
    aspect_ratios: &["16:9"],
    max_duration_secs: 600,
    recommended_duration_secs: 30,
    resolution: "1920x1080",
    container: "mp4",
};

const FACEBOOK: PlatformSpecs = PlatformSpecs {
    aspect_ratios: &["16:9", "1:1"],
    max_duration_secs: 240,
    recommended_duration_secs: 30,
    resolution: "1920x1080",
    container: "mp4",
};

const TWITTER: PlatformSpecs = PlatformSpecs {
    aspect_ratios: &["16:9", "1:1"],
    max_duration_secs: 140,
    recommended_duration_secs: 30,
    resolution: "1920x1080",
    container: "mp4",
};

/// Look up the specs for a platform by name.
///
/// Matching is case-insensitive. Unknown names fall back to Instagram.
pub fn platform_specs(platform: &str) -> &'static PlatformSpecs {
    match platform.to_lowercase().as_str() {
        "instagram" => &INSTAGRAM,
        "tiktok" => &TIKTOK,
        "youtube_shorts" => &YOUTUBE_SHORTS,
        "linkedin" => &LINKEDIN,
        "facebook" => &FACEBOOK,
        "twitter" => &TWITTER,
        _ => &INSTAGRAM,
    }
}
