use dioxus::prelude::*;

use crate::t;

#[component]
pub fn Profile() -> Element {
    let _lang = try_use_context::<Signal<String>>().map(|c| c()).unwrap_or_default();

    rsx! {
        section { class: "page page-placeholder",
            h2 { class: "page__title", {t!("profile-title")} }
            p { {t!("profile-placeholder")} }
        }
    }
}
