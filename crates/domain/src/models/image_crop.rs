//! Image cropping options used when generating image URLs.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How an image is fitted into the requested dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageCropMode {
    /// Crops to the exact dimensions, cutting overflow
    #[default]
    Crop,
    /// Resizes to fit within the dimensions, keeping aspect ratio
    Max,
    /// Stretches to the exact dimensions
    Stretch,
    /// Pads to the exact dimensions
    Pad,
    /// Pads only when the image is smaller than the dimensions
    BoxPad,
    /// Resizes until the smaller side matches
    Min,
}

impl FromStr for ImageCropMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "crop" => Ok(ImageCropMode::Crop),
            "max" => Ok(ImageCropMode::Max),
            "stretch" => Ok(ImageCropMode::Stretch),
            "pad" => Ok(ImageCropMode::Pad),
            "boxpad" => Ok(ImageCropMode::BoxPad),
            "min" => Ok(ImageCropMode::Min),
            _ => Err(format!("Unknown crop mode: {}", s)),
        }
    }
}

impl std::fmt::Display for ImageCropMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageCropMode::Crop => write!(f, "crop"),
            ImageCropMode::Max => write!(f, "max"),
            ImageCropMode::Stretch => write!(f, "stretch"),
            ImageCropMode::Pad => write!(f, "pad"),
            ImageCropMode::BoxPad => write!(f, "boxPad"),
            ImageCropMode::Min => write!(f, "min"),
        }
    }
}

/// Anchor point kept in view when cropping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageCropAnchor {
    #[default]
    Center,
    Top,
    Right,
    Bottom,
    Left,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl FromStr for ImageCropAnchor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "center" => Ok(ImageCropAnchor::Center),
            "top" => Ok(ImageCropAnchor::Top),
            "right" => Ok(ImageCropAnchor::Right),
            "bottom" => Ok(ImageCropAnchor::Bottom),
            "left" => Ok(ImageCropAnchor::Left),
            "topleft" => Ok(ImageCropAnchor::TopLeft),
            "topright" => Ok(ImageCropAnchor::TopRight),
            "bottomleft" => Ok(ImageCropAnchor::BottomLeft),
            "bottomright" => Ok(ImageCropAnchor::BottomRight),
            _ => Err(format!("Unknown crop anchor: {}", s)),
        }
    }
}

impl std::fmt::Display for ImageCropAnchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ImageCropAnchor::Center => "center",
            ImageCropAnchor::Top => "top",
            ImageCropAnchor::Right => "right",
            ImageCropAnchor::Bottom => "bottom",
            ImageCropAnchor::Left => "left",
            ImageCropAnchor::TopLeft => "topLeft",
            ImageCropAnchor::TopRight => "topRight",
            ImageCropAnchor::BottomLeft => "bottomLeft",
            ImageCropAnchor::BottomRight => "bottomRight",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_mode_from_str() {
        assert_eq!(ImageCropMode::from_str("BoxPad").unwrap(), ImageCropMode::BoxPad);
        assert_eq!(ImageCropMode::from_str("max").unwrap(), ImageCropMode::Max);
        assert!(ImageCropMode::from_str("zoom").is_err());
    }

    #[test]
    fn test_crop_mode_display_round_trips_through_from_str() {
        for mode in [
            ImageCropMode::Crop,
            ImageCropMode::Max,
            ImageCropMode::Stretch,
            ImageCropMode::Pad,
            ImageCropMode::BoxPad,
            ImageCropMode::Min,
        ] {
            assert_eq!(ImageCropMode::from_str(&mode.to_string()).unwrap(), mode);
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ImageCropMode::default(), ImageCropMode::Crop);
        assert_eq!(ImageCropAnchor::default(), ImageCropAnchor::Center);
    }

    #[test]
    fn test_anchor_serialization() {
        let json = serde_json::to_string(&ImageCropAnchor::BottomRight).unwrap();
        assert_eq!(json, "\"bottomRight\"");
        assert_eq!(ImageCropAnchor::from_str("bottomRight").unwrap(), ImageCropAnchor::BottomRight);
    }
}
