// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright © 2023 Adrian <adrian.eddy at gmail>

use std::collections::HashMap;
use std::str::FromStr;
use thiserror::Error;

use crate::util::select_custom_option;

/// Pixel dimensions of a view or a video frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero, i.e. there is nothing to scale.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self { Self { width, height } }
}

/// Point of the view that stays fixed while the frame is scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PivotPoint {
    LeftTop,    LeftCenter,   LeftBottom,
    CenterTop,  Center,       CenterBottom,
    RightTop,   RightCenter,  RightBottom,
}

impl PivotPoint {
    /// Pivot coordinates inside a view of the given size.
    pub fn position(&self, view: Size) -> (f32, f32) {
        let w = view.width as f32;
        let h = view.height as f32;
        match self {
            Self::LeftTop      => (0.0,       0.0),
            Self::LeftCenter   => (0.0,       h / 2.0),
            Self::LeftBottom   => (0.0,       h),
            Self::CenterTop    => (w / 2.0,   0.0),
            Self::Center       => (w / 2.0,   h / 2.0),
            Self::CenterBottom => (w / 2.0,   h),
            Self::RightTop     => (w,         0.0),
            Self::RightCenter  => (w,         h / 2.0),
            Self::RightBottom  => (w,         h),
        }
    }
}

/// Scaling rule that maps the video frame onto the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScaleType {
    /// Native pixel size, anchored top-left.
    None,
    /// Stretch to fill the view exactly.
    FitXY,
    FitStart,
    #[default]
    FitCenter,
    FitEnd,

    LeftTop,    LeftCenter,   LeftBottom,
    CenterTop,  Center,       CenterBottom,
    RightTop,   RightCenter,  RightBottom,

    LeftTopCrop,    LeftCenterCrop,   LeftBottomCrop,
    CenterTopCrop,  CenterCrop,       CenterBottomCrop,
    RightTopCrop,   RightCenterCrop,  RightBottomCrop,

    StartInside,
    CenterInside,
    EndInside,
}

const SCALE_TYPE_NAMES: &[(&str, ScaleType)] = &[
    ("none",               ScaleType::None),
    ("fit_xy",             ScaleType::FitXY),
    ("fit_start",          ScaleType::FitStart),
    ("fit_center",         ScaleType::FitCenter),
    ("fit_end",            ScaleType::FitEnd),
    ("left_top",           ScaleType::LeftTop),
    ("left_center",        ScaleType::LeftCenter),
    ("left_bottom",        ScaleType::LeftBottom),
    ("center_top",         ScaleType::CenterTop),
    ("center",             ScaleType::Center),
    ("center_bottom",      ScaleType::CenterBottom),
    ("right_top",          ScaleType::RightTop),
    ("right_center",       ScaleType::RightCenter),
    ("right_bottom",       ScaleType::RightBottom),
    ("left_top_crop",      ScaleType::LeftTopCrop),
    ("left_center_crop",   ScaleType::LeftCenterCrop),
    ("left_bottom_crop",   ScaleType::LeftBottomCrop),
    ("center_top_crop",    ScaleType::CenterTopCrop),
    ("center_crop",        ScaleType::CenterCrop),
    ("center_bottom_crop", ScaleType::CenterBottomCrop),
    ("right_top_crop",     ScaleType::RightTopCrop),
    ("right_center_crop",  ScaleType::RightCenterCrop),
    ("right_bottom_crop",  ScaleType::RightBottomCrop),
    ("start_inside",       ScaleType::StartInside),
    ("center_inside",      ScaleType::CenterInside),
    ("end_inside",         ScaleType::EndInside),
];

impl ScaleType {
    pub fn name(&self) -> &'static str {
        SCALE_TYPE_NAMES.iter()
            .find(|(_, t)| t == self)
            .map(|(name, _)| *name)
            .unwrap_or("unknown")
    }
}

impl FromStr for ScaleType {
    type Err = PresenterError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        SCALE_TYPE_NAMES.iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, t)| *t)
            .ok_or_else(|| PresenterError::UnknownScaleType(s.to_string()))
    }
}

/// High-level resize policy as exposed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResizeMode {
    /// Fit inside the view, letterboxed or pillarboxed.
    #[default]
    Contain,
    /// Cover the whole view, cropping the overflow.
    Cover,
    /// Fill the view exactly, ignoring aspect ratio.
    Stretch,
}

impl ResizeMode {
    pub fn scale_type(&self) -> ScaleType {
        match self {
            Self::Contain => ScaleType::FitCenter,
            Self::Cover   => ScaleType::CenterCrop,
            Self::Stretch => ScaleType::FitXY,
        }
    }
}

impl From<ResizeMode> for ScaleType {
    fn from(mode: ResizeMode) -> Self { mode.scale_type() }
}

impl FromStr for ResizeMode {
    type Err = PresenterError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "contain" | "fit" => Ok(Self::Contain),
            "cover"   | "fill" => Ok(Self::Cover),
            "stretch" => Ok(Self::Stretch),
            _ => Err(PresenterError::UnknownResizeMode(s.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PresenterError {
    #[error("Unknown resize mode '{0}'")]
    UnknownResizeMode(String),
    #[error("Unknown scale type '{0}'")]
    UnknownScaleType(String),
}

/// Parses either a resize mode (`contain`, `cover`, `stretch`) or a scale type name.
pub fn parse_scale_type(value: &str) -> Result<ScaleType, PresenterError> {
    match value.parse::<ResizeMode>() {
        Ok(mode) => Ok(mode.scale_type()),
        Err(_) => value.parse::<ScaleType>(),
    }
}

#[derive(Default, Debug, Clone)]
pub struct PresenterOptions {
    pub scale_type: ScaleType,
    pub custom_options: HashMap<String, String>,
}

impl PresenterOptions {
    /// Applies recognised `custom_options` on top of the typed fields.
    pub fn resolve(mut self) -> Self {
        if let Some(value) = select_custom_option(&self.custom_options, &["resize_mode", "resizeMode", "scale_type"]) {
            match parse_scale_type(value) {
                Ok(scale_type) => self.scale_type = scale_type,
                Err(e) => log::warn!("Presenter: ignoring {e}"),
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_mode_mapping() {
        assert_eq!(ScaleType::from(ResizeMode::Contain), ScaleType::FitCenter);
        assert_eq!(ScaleType::from(ResizeMode::Cover), ScaleType::CenterCrop);
        assert_eq!(ScaleType::from(ResizeMode::Stretch), ScaleType::FitXY);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Cover".parse::<ResizeMode>(), Ok(ResizeMode::Cover));
        assert_eq!(" center_crop ".parse::<ScaleType>(), Ok(ScaleType::CenterCrop));
        assert_eq!(parse_scale_type("stretch"), Ok(ScaleType::FitXY));
        assert_eq!(parse_scale_type("right_bottom_crop"), Ok(ScaleType::RightBottomCrop));
        assert_eq!(parse_scale_type("zoom"), Err(PresenterError::UnknownScaleType("zoom".into())));
        assert!("zoom".parse::<ResizeMode>().is_err());

        for (name, t) in SCALE_TYPE_NAMES {
            assert_eq!(t.name(), *name);
        }
    }

    #[test]
    fn test_options_resolve() {
        let mut options = PresenterOptions::default();
        options.custom_options.insert("resizeMode".into(), "cover".into());
        assert_eq!(options.resolve().scale_type, ScaleType::CenterCrop);

        let mut options = PresenterOptions { scale_type: ScaleType::FitXY, ..Default::default() };
        options.custom_options.insert("resize_mode".into(), "bogus".into());
        assert_eq!(options.resolve().scale_type, ScaleType::FitXY);
    }

    #[test]
    fn test_pivot_position() {
        let view = Size::new(1000, 500);
        assert_eq!(PivotPoint::LeftTop.position(view), (0.0, 0.0));
        assert_eq!(PivotPoint::Center.position(view), (500.0, 250.0));
        assert_eq!(PivotPoint::RightBottom.position(view), (1000.0, 500.0));
        assert_eq!(PivotPoint::CenterBottom.position(view), (500.0, 500.0));
    }
}
