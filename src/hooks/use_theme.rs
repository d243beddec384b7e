use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Color scheme applied to the page
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// Handle returned by use_theme hook
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

/// Follows the system color scheme until the user toggles it.
/// The choice lives in memory only.
#[hook]
pub fn use_theme() -> ThemeHandle {
    let system_preference = use_state(detect_system_preference);
    let user_choice = use_state(|| None::<Theme>);

    let theme = (*user_choice).unwrap_or(*system_preference);

    // Effect: Apply theme to DOM
    use_effect_with(theme, move |theme| {
        apply_theme_to_dom(*theme);
        || ()
    });

    // Effect: Listen to system preference changes
    {
        let system_preference = system_preference.clone();
        use_effect_with((), move |_| {
            let listener = setup_media_query_listener(system_preference.setter());
            move || drop(listener)
        });
    }

    let toggle = {
        let user_choice = user_choice.clone();
        Callback::from(move |_| user_choice.set(Some(theme.toggled())))
    };

    ThemeHandle { theme, toggle }
}

/// Detect system's preferred color scheme
fn detect_system_preference() -> Theme {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map_or(Theme::Light, |mq| {
            if mq.matches() { Theme::Dark } else { Theme::Light }
        })
}

/// Apply theme to DOM by setting data-theme attribute on <html>
fn apply_theme_to_dom(theme: Theme) {
    if let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = html.set_attribute("data-theme", theme.as_str());
    }
}

/// Setup MediaQueryList event listener for system preference changes
fn setup_media_query_listener(setter: UseStateSetter<Theme>) -> Option<EventListener> {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .and_then(|mq| mq.dyn_into::<web_sys::EventTarget>().ok())
        .map(|target| {
            EventListener::new(&target, "change", move |_event| {
                setter.set(detect_system_preference());
            })
        })
}
