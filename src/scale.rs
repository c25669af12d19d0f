// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright © 2023 Adrian <adrian.eddy at gmail>

use crate::types::*;
use crate::transform::Transform;

// The texture is stretched to the view by default, so every rule expresses the
// frame's size relative to the view and scales around a pivot of the view.

#[enum_dispatch::enum_dispatch(ScaleRuleKind)]
pub trait ScaleRule {
    /// Both sizes are non-empty when this is called.
    fn transform(&self, view: Size, video: Size) -> Option<Transform>;
}

#[enum_dispatch::enum_dispatch]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleRuleKind {
    Stretch(StretchRule),
    Original(OriginalRule),
    Fit(FitRule),
    Crop(CropRule),
    Inside(InsideRule),
}

fn ratios(view: Size, video: Size) -> (f32, f32) {
    (view.width as f32 / video.width as f32, view.height as f32 / video.height as f32)
}

fn scaled(sx: f32, sy: f32, pivot: PivotPoint, view: Size) -> Transform {
    let (px, py) = pivot.position(view);
    Transform::scale(sx, sy, px, py)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StretchRule;

impl ScaleRule for StretchRule {
    fn transform(&self, view: Size, _video: Size) -> Option<Transform> {
        Some(scaled(1.0, 1.0, PivotPoint::LeftTop, view))
    }
}

/// Native pixel size of the video.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OriginalRule { pub pivot: PivotPoint }

impl ScaleRule for OriginalRule {
    fn transform(&self, view: Size, video: Size) -> Option<Transform> {
        let sx = video.width as f32 / view.width as f32;
        let sy = video.height as f32 / view.height as f32;
        Some(scaled(sx, sy, self.pivot, view))
    }
}

/// Uniform scale so the whole frame is visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitRule { pub pivot: PivotPoint }

impl ScaleRule for FitRule {
    fn transform(&self, view: Size, video: Size) -> Option<Transform> {
        let (rx, ry) = ratios(view, video);
        let m = rx.min(ry);
        Some(scaled(m / rx, m / ry, self.pivot, view))
    }
}

/// Uniform scale so the view is fully covered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRule { pub pivot: PivotPoint }

impl ScaleRule for CropRule {
    fn transform(&self, view: Size, video: Size) -> Option<Transform> {
        let (rx, ry) = ratios(view, video);
        let m = rx.max(ry);
        Some(scaled(m / rx, m / ry, self.pivot, view))
    }
}

/// Native size when the frame fits in the view, otherwise fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsideRule { pub pivot: PivotPoint }

impl ScaleRule for InsideRule {
    fn transform(&self, view: Size, video: Size) -> Option<Transform> {
        if video.width <= view.width && video.height <= view.height {
            OriginalRule { pivot: self.pivot }.transform(view, video)
        } else {
            FitRule { pivot: self.pivot }.transform(view, video)
        }
    }
}

impl ScaleType {
    pub fn rule(&self) -> ScaleRuleKind {
        use PivotPoint as P;
        match self {
            Self::None             => OriginalRule { pivot: P::LeftTop }.into(),
            Self::FitXY            => StretchRule.into(),
            Self::FitStart         => FitRule { pivot: P::LeftTop }.into(),
            Self::FitCenter        => FitRule { pivot: P::Center }.into(),
            Self::FitEnd           => FitRule { pivot: P::RightBottom }.into(),

            Self::LeftTop          => OriginalRule { pivot: P::LeftTop }.into(),
            Self::LeftCenter       => OriginalRule { pivot: P::LeftCenter }.into(),
            Self::LeftBottom       => OriginalRule { pivot: P::LeftBottom }.into(),
            Self::CenterTop        => OriginalRule { pivot: P::CenterTop }.into(),
            Self::Center           => OriginalRule { pivot: P::Center }.into(),
            Self::CenterBottom     => OriginalRule { pivot: P::CenterBottom }.into(),
            Self::RightTop         => OriginalRule { pivot: P::RightTop }.into(),
            Self::RightCenter      => OriginalRule { pivot: P::RightCenter }.into(),
            Self::RightBottom      => OriginalRule { pivot: P::RightBottom }.into(),

            Self::LeftTopCrop      => CropRule { pivot: P::LeftTop }.into(),
            Self::LeftCenterCrop   => CropRule { pivot: P::LeftCenter }.into(),
            Self::LeftBottomCrop   => CropRule { pivot: P::LeftBottom }.into(),
            Self::CenterTopCrop    => CropRule { pivot: P::CenterTop }.into(),
            Self::CenterCrop       => CropRule { pivot: P::Center }.into(),
            Self::CenterBottomCrop => CropRule { pivot: P::CenterBottom }.into(),
            Self::RightTopCrop     => CropRule { pivot: P::RightTop }.into(),
            Self::RightCenterCrop  => CropRule { pivot: P::RightCenter }.into(),
            Self::RightBottomCrop  => CropRule { pivot: P::RightBottom }.into(),

            Self::StartInside      => InsideRule { pivot: P::LeftTop }.into(),
            Self::CenterInside     => InsideRule { pivot: P::Center }.into(),
            Self::EndInside        => InsideRule { pivot: P::RightBottom }.into(),
        }
    }
}

/// Transform that places a `video`-sized frame inside a `view`-sized texture view.
///
/// Returns `None` when either size has a zero dimension; there is no meaningful
/// scale in that case and the caller should keep whatever transform it has.
pub fn scale_transform(view: Size, video: Size, scale_type: ScaleType) -> Option<Transform> {
    if view.is_empty() || video.is_empty() {
        return None;
    }
    scale_type.rule().transform(view, video)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Rect;

    const VIEW: Size = Size::new(1000, 500);

    fn content(view: Size, video: Size, scale_type: ScaleType) -> Rect {
        let t = scale_transform(view, video, scale_type).unwrap();
        t.map_rect(Rect { left: 0.0, top: 0.0, right: view.width as f32, bottom: view.height as f32 })
    }

    #[test]
    fn test_fit_center_pillarbox() {
        let r = content(VIEW, Size::new(400, 400), ScaleType::FitCenter);
        assert_eq!(r, Rect { left: 250.0, top: 0.0, right: 750.0, bottom: 500.0 });
    }

    #[test]
    fn test_center_crop() {
        let r = content(VIEW, Size::new(400, 400), ScaleType::CenterCrop);
        assert_eq!(r, Rect { left: 0.0, top: -250.0, right: 1000.0, bottom: 750.0 });
    }

    #[test]
    fn test_fit_start_and_end() {
        let video = Size::new(400, 400);
        assert_eq!(content(VIEW, video, ScaleType::FitStart), Rect { left: 0.0, top: 0.0, right: 500.0, bottom: 500.0 });
        assert_eq!(content(VIEW, video, ScaleType::FitEnd), Rect { left: 500.0, top: 0.0, right: 1000.0, bottom: 500.0 });
    }

    #[test]
    fn test_stretch_is_identity() {
        let t = scale_transform(VIEW, Size::new(1920, 1080), ScaleType::FitXY).unwrap();
        assert!(t.is_identity());
    }

    #[test]
    fn test_original_size() {
        let r = content(VIEW, Size::new(200, 100), ScaleType::None);
        assert_eq!(r, Rect { left: 0.0, top: 0.0, right: 200.0, bottom: 100.0 });

        let r = content(VIEW, Size::new(200, 100), ScaleType::RightBottom);
        assert_eq!(r, Rect { left: 800.0, top: 400.0, right: 1000.0, bottom: 500.0 });
    }

    #[test]
    fn test_inside_switches_to_fit_for_large_video() {
        let small = content(VIEW, Size::new(200, 100), ScaleType::CenterInside);
        assert_eq!(small, Rect { left: 400.0, top: 200.0, right: 600.0, bottom: 300.0 });

        // Taller than the view: falls back to fit.
        let large = content(VIEW, Size::new(400, 800), ScaleType::CenterInside);
        assert_eq!(large, Rect { left: 375.0, top: 0.0, right: 625.0, bottom: 500.0 });
    }

    #[test]
    fn test_empty_sizes_yield_nothing() {
        assert_eq!(scale_transform(VIEW, Size::new(0, 480), ScaleType::FitCenter), None);
        assert_eq!(scale_transform(Size::new(0, 0), Size::new(640, 480), ScaleType::CenterCrop), None);
    }

    #[test]
    fn test_every_scale_type_has_a_rule() {
        for t in ["none", "fit_xy", "left_bottom_crop", "end_inside", "center_top"] {
            let t: ScaleType = t.parse().unwrap();
            assert!(scale_transform(VIEW, Size::new(640, 360), t).is_some());
        }
    }
}
