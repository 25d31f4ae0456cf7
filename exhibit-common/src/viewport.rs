//! Viewport classification
//!
//! A window is portrait when it is narrower than it is tall, and mobile when
//! its short side is below [`MOBILE_BREAKPOINT`].

/// Short-side width (px) below which the mobile layout is used
pub const MOBILE_BREAKPOINT: u32 = 800;

/// Shape of the current browser window
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportInfo {
    pub is_mobile: bool,
    pub is_portrait: bool,
    pub width: u32,
    pub height: u32,
    /// `height / width`
    pub ratio: f64,
}

/// Before the first measurement the page renders as a mobile portrait screen.
impl Default for ViewportInfo {
    fn default() -> Self {
        Self {
            is_mobile: true,
            is_portrait: true,
            width: 0,
            height: 0,
            ratio: 1.0,
        }
    }
}

impl ViewportInfo {
    /// Classify a window against the default breakpoint.
    pub fn classify(width: u32, height: u32) -> Self {
        Self::classify_with(width, height, MOBILE_BREAKPOINT)
    }

    pub fn classify_with(width: u32, height: u32, breakpoint: u32) -> Self {
        let is_portrait = width < height;
        let short_side = if is_portrait { width } else { height };
        let ratio = if width == 0 {
            1.0
        } else {
            height as f64 / width as f64
        };

        Self {
            is_mobile: short_side < breakpoint,
            is_portrait,
            width,
            height,
            ratio,
        }
    }

    /// Whether the carousel accepts swipe gestures and animates with CSS.
    pub fn gestures_enabled(&self) -> bool {
        self.is_mobile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_portrait() {
        let info = ViewportInfo::classify(390, 844);
        assert!(info.is_mobile);
        assert!(info.is_portrait);
        assert!((info.ratio - 844.0 / 390.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_phone_landscape_uses_height() {
        let info = ViewportInfo::classify(844, 390);
        assert!(info.is_mobile);
        assert!(!info.is_portrait);
    }

    #[test]
    fn test_desktop_landscape() {
        let info = ViewportInfo::classify(1920, 1080);
        assert!(!info.is_mobile);
        assert!(!info.is_portrait);
        assert!(!info.gestures_enabled());
    }

    #[test]
    fn test_tall_tablet_portrait_is_not_mobile() {
        let info = ViewportInfo::classify(834, 1194);
        assert!(!info.is_mobile);
        assert!(info.is_portrait);
    }

    #[test]
    fn test_square_window_is_landscape() {
        let info = ViewportInfo::classify(700, 700);
        assert!(!info.is_portrait);
        assert!(info.is_mobile);
        assert_eq!(info.ratio, 1.0);
    }

    #[test]
    fn test_breakpoint_is_exclusive() {
        assert!(!ViewportInfo::classify(800, 1200).is_mobile);
        assert!(ViewportInfo::classify(799, 1200).is_mobile);
    }

    #[test]
    fn test_zero_width_ratio() {
        let info = ViewportInfo::classify(0, 0);
        assert_eq!(info.ratio, 1.0);
    }

    #[test]
    fn test_default_is_mobile_portrait() {
        let info = ViewportInfo::default();
        assert!(info.is_mobile && info.is_portrait);
        assert_eq!((info.width, info.height), (0, 0));
    }
}
