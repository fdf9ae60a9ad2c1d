//! Navigation bar state

use serde::Serialize;

use super::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 6] = [
    NavLink { href: "/", label: "Home" },
    NavLink { href: "/projects", label: "Projects" },
    NavLink { href: "/map", label: "Map" },
    NavLink { href: "/investment", label: "Investment" },
    NavLink { href: "/blog", label: "Blog" },
    NavLink { href: "/booking", label: "Contact" },
];

/// Mobile menu and language label state
#[derive(Debug, Clone, Default)]
pub struct Navigation {
    menu_open: bool,
    language: Language,
}

impl Navigation {
    pub fn new(language: Language) -> Self {
        Self {
            menu_open: false,
            language,
        }
    }

    pub fn links(&self) -> &'static [NavLink] {
        &NAV_LINKS
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Follow a link; the mobile menu closes either way
    pub fn follow(&mut self, href: &str) -> Option<NavLink> {
        self.menu_open = false;
        NAV_LINKS.iter().find(|link| link.href == href).copied()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        tracing::debug!(language = %self.language, "Language label switched");
        self.language
    }
}
