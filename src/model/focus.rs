//! Focus settings: mode, size and background style.
//!
//! Each setting is a closed enum with a stable string id (what goes into the
//! preference store), a display label and a fixed cyclic order.

use super::constants::*;

/// Returns the element after `current` in `ordered`, wrapping around.
///
/// If `current` is not in the list the first element is returned, so a
/// cycle always lands on a valid value.
///
/// # Panics
///
/// Panics if `ordered` is empty.
pub fn cycle_next<T: Copy + PartialEq>(current: T, ordered: &[T]) -> T {
    match ordered.iter().position(|v| *v == current) {
        Some(idx) => ordered[(idx + 1) % ordered.len()],
        None => ordered[0],
    }
}

/// A setting with a fixed circular order.
pub trait Cyclic: Copy + PartialEq + 'static {
    /// Every value, in cycling order.
    const ALL: &'static [Self];

    /// The next value in `ALL`, wrapping from last to first.
    fn next(self) -> Self {
        cycle_next(self, Self::ALL)
    }
}

/// Shape of the spotlight cut out of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusMode {
    /// Full-width horizontal band following the cursor vertically.
    Rectangle,
    /// Horizontally centered column following the cursor vertically.
    CenterColumn,
    /// Box centered on the cursor.
    Square,
    /// Circle centered on the cursor.
    Circle,
}

impl Cyclic for FocusMode {
    const ALL: &'static [Self] = &[
        FocusMode::Rectangle,
        FocusMode::CenterColumn,
        FocusMode::Square,
        FocusMode::Circle,
    ];
}

impl FocusMode {
    /// Identifier stored in preferences and sent with analytics.
    pub fn id(self) -> &'static str {
        match self {
            FocusMode::Rectangle => "rectangle",
            FocusMode::CenterColumn => "centerColumn",
            FocusMode::Square => "square",
            FocusMode::Circle => "circle",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            FocusMode::Rectangle => "Reading Line",
            FocusMode::CenterColumn => "Center Column",
            FocusMode::Square => "Square Focus",
            FocusMode::Circle => "James Bond",
        }
    }
}

/// Scale applied to the base dimensions of every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusSize {
    Small,
    Medium,
    Large,
}

impl Cyclic for FocusSize {
    const ALL: &'static [Self] = &[FocusSize::Small, FocusSize::Medium, FocusSize::Large];
}

impl FocusSize {
    pub fn id(self) -> &'static str {
        match self {
            FocusSize::Small => "S",
            FocusSize::Medium => "M",
            FocusSize::Large => "L",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            FocusSize::Small => "Small",
            FocusSize::Medium => "Medium",
            FocusSize::Large => "Large",
        }
    }

    /// 1.0, 1.5 and 2.25. Large is medium squared, not a separate constant.
    pub fn multiplier(self) -> f64 {
        match self {
            FocusSize::Small => SMALL_MULTIPLIER,
            FocusSize::Medium => MEDIUM_MULTIPLIER,
            FocusSize::Large => MEDIUM_MULTIPLIER * MEDIUM_MULTIPLIER,
        }
    }
}

/// RGBA color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// Color and opacity of the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackgroundStyle {
    Black,
    BlackTranslucent,
    White,
    WhiteTranslucent,
}

impl Cyclic for BackgroundStyle {
    const ALL: &'static [Self] = &[
        BackgroundStyle::Black,
        BackgroundStyle::BlackTranslucent,
        BackgroundStyle::White,
        BackgroundStyle::WhiteTranslucent,
    ];
}

impl BackgroundStyle {
    pub fn id(self) -> &'static str {
        match self {
            BackgroundStyle::Black => "black",
            BackgroundStyle::BlackTranslucent => "black70",
            BackgroundStyle::White => "white",
            BackgroundStyle::WhiteTranslucent => "white70",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|b| b.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            BackgroundStyle::Black => "Black",
            BackgroundStyle::BlackTranslucent => "Black 70%",
            BackgroundStyle::White => "White",
            BackgroundStyle::WhiteTranslucent => "White 70%",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(
            self,
            BackgroundStyle::Black | BackgroundStyle::BlackTranslucent
        )
    }

    pub fn alpha(self) -> f64 {
        match self {
            BackgroundStyle::Black | BackgroundStyle::White => OPAQUE_ALPHA,
            BackgroundStyle::BlackTranslucent | BackgroundStyle::WhiteTranslucent => {
                TRANSLUCENT_ALPHA
            }
        }
    }

    /// Fill color of the overlay.
    pub fn mask_color(self) -> Rgba {
        let c = if self.is_dark() { 0.0 } else { 1.0 };
        Rgba::new(c, c, c, self.alpha())
    }

    /// Opaque color that stands out against the mask (indicator bar, flash).
    pub fn foreground_color(self) -> Rgba {
        let c = if self.is_dark() { 1.0 } else { 0.0 };
        Rgba::new(c, c, c, 1.0)
    }
}
