//! Fixed dark palette for the phone mockup. There is no theming system; the
//! home screen always renders in its published look.

use iced::Color;

/// Window backdrop behind the phone.
pub const BACKDROP: Color = Color { r: 0.07, g: 0.07, b: 0.10, a: 1.0 };

/// Phone body around the screen.
pub const PHONE_BODY: Color = Color { r: 0.04, g: 0.04, b: 0.05, a: 1.0 };

/// Screen background inside the bezel.
pub const SCREEN: Color = Color { r: 0.10, g: 0.11, b: 0.16, a: 1.0 };

/// Widget cards and link rows.
pub const CARD: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 0.08 };

/// Dock backdrop.
pub const DOCK: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 0.12 };

pub const TEXT_PRIMARY: Color = Color { r: 0.95, g: 0.96, b: 0.98, a: 1.0 };

pub const TEXT_MUTED: Color = Color { r: 0.62, g: 0.65, b: 0.72, a: 1.0 };

pub const DOT_ACTIVE: Color = Color { r: 0.95, g: 0.96, b: 0.98, a: 1.0 };

pub const DOT_INACTIVE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 0.30 };

/// Home-indicator bar at the bottom of the screen.
pub const HOME_INDICATOR: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 0.45 };
