// SPDX-License-Identifier: MIT OR Apache-2.0
//! Animatable property channels.

use serde::{Deserialize, Serialize};

/// A numeric channel of a target that can be animated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Property {
    /// Horizontal translation offset
    TranslationX,
    /// Vertical translation offset
    TranslationY,
    /// Depth translation offset
    TranslationZ,
    /// Horizontal scale factor
    ScaleX,
    /// Vertical scale factor
    ScaleY,
    /// Rotation around the view axis (degrees)
    Rotation,
    /// Rotation around the horizontal axis (degrees)
    RotationX,
    /// Rotation around the vertical axis (degrees)
    RotationY,
    /// Absolute horizontal position
    X,
    /// Absolute vertical position
    Y,
    /// Absolute depth position
    Z,
    /// Opacity
    Alpha,
}

impl Property {
    /// Every property, in ascending identity order
    pub const ALL: [Property; 12] = [
        Property::TranslationX,
        Property::TranslationY,
        Property::TranslationZ,
        Property::ScaleX,
        Property::ScaleY,
        Property::Rotation,
        Property::RotationX,
        Property::RotationY,
        Property::X,
        Property::Y,
        Property::Z,
        Property::Alpha,
    ];

    /// Stable numeric identity, used as the last tie-break when ordering entries.
    pub fn id(&self) -> u16 {
        match self {
            Self::TranslationX => 0x0001,
            Self::TranslationY => 0x0002,
            Self::TranslationZ => 0x0004,
            Self::ScaleX => 0x0008,
            Self::ScaleY => 0x0010,
            Self::Rotation => 0x0020,
            Self::RotationX => 0x0040,
            Self::RotationY => 0x0080,
            Self::X => 0x0100,
            Self::Y => 0x0200,
            Self::Z => 0x0400,
            Self::Alpha => 0x0800,
        }
    }

    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::TranslationX => "translationX",
            Self::TranslationY => "translationY",
            Self::TranslationZ => "translationZ",
            Self::ScaleX => "scaleX",
            Self::ScaleY => "scaleY",
            Self::Rotation => "rotation",
            Self::RotationX => "rotationX",
            Self::RotationY => "rotationY",
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
            Self::Alpha => "alpha",
        }
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
