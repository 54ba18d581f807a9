//! Theme classes
//!
//! Tailwind class sets for the light and dark themes.

/// Class lookup for the current theme
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    dark: bool,
}

impl Palette {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    /// Full-window gradient behind every route
    pub fn shell(&self) -> &'static str {
        if self.dark {
            "bg-gradient-to-br from-gray-900 via-gray-800 to-gray-900"
        } else {
            "bg-gradient-to-br from-orange-50 via-pink-50 to-orange-100"
        }
    }

    pub fn page(&self) -> &'static str {
        if self.dark {
            "bg-gray-900"
        } else {
            "bg-gray-50"
        }
    }

    /// Frosted card surface
    pub fn card(&self) -> &'static str {
        if self.dark {
            "bg-gray-800/50 border-gray-700"
        } else {
            "bg-white/30 border-white/20"
        }
    }

    pub fn divider(&self) -> &'static str {
        if self.dark {
            "border-gray-700"
        } else {
            "border-white/20"
        }
    }

    pub fn heading(&self) -> &'static str {
        if self.dark {
            "text-white"
        } else {
            "text-gray-800"
        }
    }

    pub fn body(&self) -> &'static str {
        if self.dark {
            "text-gray-300"
        } else {
            "text-gray-600"
        }
    }

    pub fn muted(&self) -> &'static str {
        if self.dark {
            "text-gray-400"
        } else {
            "text-gray-600"
        }
    }

    pub fn stat_label(&self) -> &'static str {
        if self.dark {
            "text-gray-300 font-medium"
        } else {
            "text-gray-700 font-medium"
        }
    }

    pub fn stat_value(&self) -> &'static str {
        if self.dark {
            "text-white font-bold"
        } else {
            "text-gray-800 font-bold"
        }
    }

    pub fn input(&self) -> &'static str {
        if self.dark {
            "bg-gray-800 text-white border-gray-700 focus:border-orange-500"
        } else {
            "bg-white/70 text-gray-800 border-white/40 focus:border-orange-400"
        }
    }

    pub fn nav(&self) -> &'static str {
        if self.dark {
            "bg-gray-900/80 border-gray-800"
        } else {
            "bg-white/60 border-white/30"
        }
    }
}

/// Classes for a voice/gesture toggle.
///
/// Active wins only while the control is enabled; a disabled control is
/// always greyed out.
pub fn control_button_class(active: bool, enabled: bool, dark: bool) -> &'static str {
    match (active && enabled, enabled, dark) {
        (true, _, _) => "bg-orange-500 text-white shadow-lg",
        (false, true, true) => "bg-gray-700 text-gray-200 hover:bg-gray-600",
        (false, true, false) => "bg-white/50 text-gray-700 hover:bg-white/70",
        (false, false, _) => "bg-gray-200 text-gray-400 cursor-not-allowed",
    }
}

/// Classes for a quick-action button
pub fn action_button_class(dark: bool) -> &'static str {
    if dark {
        "bg-gray-700 text-gray-200 hover:bg-gray-600"
    } else {
        "bg-white/50 text-gray-700 hover:bg-white/70"
    }
}

/// Kind of toast notice
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    Success,
    Error,
}

/// Classes for a toast. Success uses the brand gradient in both themes;
/// errors stay red but sit on the theme's surface.
pub fn toast_class(notice: Notice, dark: bool) -> &'static str {
    match (notice, dark) {
        (Notice::Success, _) => "bg-gradient-to-r from-orange-500 to-pink-500 text-white",
        (Notice::Error, true) => "bg-gray-800/90 text-red-300 border border-red-500/60",
        (Notice::Error, false) => "bg-white/90 text-red-600 border border-red-300",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_button_active() {
        assert_eq!(
            control_button_class(true, true, false),
            "bg-orange-500 text-white shadow-lg"
        );
        assert_eq!(
            control_button_class(true, true, true),
            "bg-orange-500 text-white shadow-lg"
        );
    }

    #[test]
    fn test_control_button_inactive_follows_theme() {
        assert!(control_button_class(false, true, true).contains("bg-gray-700"));
        assert!(control_button_class(false, true, false).contains("bg-white/50"));
    }

    #[test]
    fn test_control_button_disabled_ignores_active() {
        assert!(control_button_class(true, false, true).contains("cursor-not-allowed"));
        assert!(control_button_class(false, false, false).contains("cursor-not-allowed"));
    }

    #[test]
    fn test_palette_switches() {
        assert_ne!(Palette::new(true).shell(), Palette::new(false).shell());
        assert_eq!(Palette::new(true).page(), "bg-gray-900");
        assert_eq!(Palette::new(false).card(), "bg-white/30 border-white/20");
    }

    #[test]
    fn test_toast_success_uses_brand_gradient() {
        assert_eq!(toast_class(Notice::Success, true), toast_class(Notice::Success, false));
        assert!(toast_class(Notice::Success, false).contains("from-orange-500 to-pink-500"));
    }

    #[test]
    fn test_toast_error_follows_theme() {
        assert_ne!(toast_class(Notice::Error, true), toast_class(Notice::Error, false));
        assert!(toast_class(Notice::Error, true).contains("text-red-300"));
        assert!(toast_class(Notice::Error, false).contains("text-red-600"));
    }
}
