//! Scale mode registry.
//!
//! Codes `0..=8` are stable: declarative configuration refers to modes by
//! code or by name.

/// Scaling behaviours the host image surface implements itself.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum NativeScale {
    /// Draw through the matrix supplied with `request_transform`.
    Matrix,
    /// Stretch both axes independently to fill the frame.
    FitXy,
    FitStart,
    FitCenter,
    FitEnd,
    /// Center without scaling.
    Center,
    CenterCrop,
    CenterInside,
}

/// How content is scaled into the view's frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum ScaleMode {
    Matrix,
    /// Fill the frame on both axes, ignoring aspect ratio.
    FitFill,
    FitStart,
    #[default]
    FitCenter,
    FitEnd,
    Center,
    CenterCrop,
    CenterInside,
    /// Uniformly scale to the frame's width with the top edges aligned; any
    /// excess height is cropped from the bottom.
    TopCrop,
}

/// Indexed by code.
const REGISTRY: [(ScaleMode, &str, Option<NativeScale>); 9] = [
    (ScaleMode::Matrix, "matrix", Some(NativeScale::Matrix)),
    (ScaleMode::FitFill, "fitXY", Some(NativeScale::FitXy)),
    (ScaleMode::FitStart, "fitStart", Some(NativeScale::FitStart)),
    (ScaleMode::FitCenter, "fitCenter", Some(NativeScale::FitCenter)),
    (ScaleMode::FitEnd, "fitEnd", Some(NativeScale::FitEnd)),
    (ScaleMode::Center, "center", Some(NativeScale::Center)),
    (ScaleMode::CenterCrop, "centerCrop", Some(NativeScale::CenterCrop)),
    (ScaleMode::CenterInside, "centerInside", Some(NativeScale::CenterInside)),
    (ScaleMode::TopCrop, "top_crop", None),
];

impl ScaleMode {
    pub const ALL: [ScaleMode; 9] = [
        ScaleMode::Matrix,
        ScaleMode::FitFill,
        ScaleMode::FitStart,
        ScaleMode::FitCenter,
        ScaleMode::FitEnd,
        ScaleMode::Center,
        ScaleMode::CenterCrop,
        ScaleMode::CenterInside,
        ScaleMode::TopCrop,
    ];

    /// Looks a mode up by its stable code. Negative or unknown codes yield
    /// `None`.
    pub fn from_code(code: i32) -> Option<ScaleMode> {
        usize::try_from(code).ok().and_then(|i| REGISTRY.get(i)).map(|e| e.0)
    }

    /// Looks a mode up by its declarative name (`"fitXY"`, `"top_crop"`, …).
    pub fn from_name(name: &str) -> Option<ScaleMode> {
        REGISTRY.iter().find(|e| e.1 == name).map(|e| e.0)
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        REGISTRY[self as usize].1
    }

    /// The host mode that implements this one, or `None` if the view computes
    /// the transform itself.
    pub fn native(self) -> Option<NativeScale> {
        REGISTRY[self as usize].2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        for (i, mode) in ScaleMode::ALL.iter().enumerate() {
            assert_eq!(mode.code() as usize, i);
            assert_eq!(ScaleMode::from_code(i as i32), Some(*mode));
            assert_eq!(REGISTRY[i].0, *mode, "registry out of order at {i}");
        }
        assert_eq!(ScaleMode::from_code(8), Some(ScaleMode::TopCrop));
        assert_eq!(ScaleMode::from_code(1), Some(ScaleMode::FitFill));
    }

    #[test]
    fn unknown_codes() {
        assert_eq!(ScaleMode::from_code(-1), None);
        assert_eq!(ScaleMode::from_code(9), None);
    }

    #[test]
    fn only_top_crop_is_custom() {
        let custom: Vec<ScaleMode> =
            ScaleMode::ALL.into_iter().filter(|m| m.native().is_none()).collect();
        assert_eq!(custom, vec![ScaleMode::TopCrop]);
        assert_eq!(ScaleMode::CenterCrop.native(), Some(NativeScale::CenterCrop));
    }

    #[test]
    fn names_round_trip() {
        for mode in ScaleMode::ALL {
            assert_eq!(ScaleMode::from_name(mode.name()), Some(mode));
        }
        assert_eq!(ScaleMode::from_name("fitXY"), Some(ScaleMode::FitFill));
        assert_eq!(ScaleMode::from_name("topCrop"), None);
    }
}
