use super::super::Model;
use super::super::Msg;
use std::str::FromStr;
use strum::{AsRefStr, EnumString};
use yew::html::Scope;
use yew::prelude::*;

const DARK_CLASS: &str = "dark-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Reads a remembered theme, falling back to light for anything unknown.
    pub fn from_stored(value: Option<String>) -> Self {
        value
            .and_then(|v| Theme::from_str(&v).ok())
            .unwrap_or_default()
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn switch_label(self) -> &'static str {
        match self {
            Theme::Light => "Switch to Dark Mode",
            Theme::Dark => "Switch to Light Mode",
        }
    }

    fn icon_class(self) -> &'static str {
        match self {
            Theme::Light => "fa-solid fa-sun toggle-icon",
            Theme::Dark => "fa-solid fa-moon toggle-icon",
        }
    }
}

pub fn apply_theme(theme: Theme) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };

    let classes = body.class_list();
    let outcome = match theme {
        Theme::Dark => classes.add_1(DARK_CLASS),
        Theme::Light => classes.remove_1(DARK_CLASS),
    };
    if outcome.is_err() {
        log::warn!("Could not apply {} theme", theme.as_ref());
    }
}

pub fn render_theme_toggle(theme: Theme, link: &Scope<Model>) -> Html {
    html! {
        <button
            id="theme-toggle"
            class="theme-toggle"
            onclick={link.callback(|_| Msg::ToggleTheme)}
            title={theme.switch_label()}
            aria-pressed={(theme == Theme::Dark).to_string()}
        >
            <i class={theme.icon_class()}></i>
        </button>
    }
}
