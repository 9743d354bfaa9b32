/// Light/dark theme flag, persisted as the string `"true"`/`"false"`
/// (dark = `"true"`, matching the stored `darkMode` layout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a stored flag; anything but `"true"` is the light default.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("true") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Theme::Dark => "true",
            Theme::Light => "false",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}
