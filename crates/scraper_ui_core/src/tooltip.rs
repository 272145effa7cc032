/// Scraper backend picked in the form's mode selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScraperMode {
    #[default]
    Basic,
    Enhanced,
}

impl ScraperMode {
    /// Maps the selector's value; anything but `"enhanced"` is basic.
    pub fn from_select_value(value: &str) -> Self {
        if value == "enhanced" {
            ScraperMode::Enhanced
        } else {
            ScraperMode::Basic
        }
    }

    pub fn tooltip(self) -> &'static str {
        match self {
            ScraperMode::Enhanced => {
                "Enhanced mode uses a full browser environment to load JavaScript and render dynamic content. Best for modern web apps."
            }
            ScraperMode::Basic => {
                "Basic mode is faster but only processes HTML. Use for simpler websites without complex JavaScript interactions."
            }
        }
    }
}
