use tracing::info;

use crate::config::DashboardConfig;
use crate::error::Result;
use crate::i18n::{Bundle, Language};

/// User-selected state of one mounted dashboard. The stage index is owned by
/// the [`Ticker`](crate::ticker::Ticker).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardState {
    language: Language,
}

impl DashboardState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            language: config.default_language,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn bundle(&self) -> &'static Bundle {
        self.language.bundle()
    }

    pub fn select(&mut self, language: Language) {
        if self.language != language {
            info!(from = %self.language, to = %language, "language selected");
        }
        self.language = language;
    }

    /// Selects by code; an unsupported code leaves the state untouched.
    pub fn select_code(&mut self, code: &str) -> Result<()> {
        let language = Language::from_code(code)?;
        self.select(language);
        Ok(())
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(&DashboardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;

    #[test]
    fn test_starts_with_first_language() {
        let state = DashboardState::default();
        assert_eq!(state.language(), Language::Vi);
        assert_eq!(state.bundle().micro_title, "Yếu tố Vi mô");
    }

    #[test]
    fn test_starts_with_configured_language() {
        let config = DashboardConfig {
            default_language: Language::De,
            ..DashboardConfig::default()
        };
        assert_eq!(DashboardState::new(&config).language(), Language::De);
    }

    #[test]
    fn test_select_each_language_renders_complete_bundle() {
        let mut state = DashboardState::default();
        for lang in Language::all() {
            state.select(*lang);
            assert_eq!(state.language(), *lang);
            assert!(state.bundle().fields().iter().all(|(_, v)| !v.is_empty()));
        }
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut once = DashboardState::default();
        once.select(Language::De);

        let mut twice = DashboardState::default();
        twice.select(Language::De);
        twice.select(Language::De);

        assert_eq!(once, twice);
        assert_eq!(once.bundle().fields(), twice.bundle().fields());
    }

    #[test]
    fn test_unsupported_code_fails_fast() {
        let mut state = DashboardState::default();
        state.select_code("en").unwrap();

        let err = state.select_code("jp").unwrap_err();
        assert_eq!(err, DashboardError::UnsupportedLanguage("jp".to_string()));
        assert_eq!(state.language(), Language::En);
    }
}
