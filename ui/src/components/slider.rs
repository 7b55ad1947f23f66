//! Auto-advancing hero carousel.
//!
//! Slide data is static and ordered; index arithmetic lives in
//! [`Carousel`]. The rotation timer is owned by this component's
//! `use_future`, so unmounting drops it and no callback outlives the view.
//! Manual prev/next/dot input mutates the same state and deliberately
//! does not reset the running period.

use dioxus::document;
use dioxus::prelude::*;

use crate::core::carousel::{Carousel, AUTO_ADVANCE_MS};
use crate::core::timing;
use crate::components::icons;
use crate::i18n;

const SLIDER_CSS: Asset = asset!("/assets/styling/slider.css");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideLayout {
    /// Single full-bleed image.
    Full,
    /// Text column next to the image, for slides that carry copy.
    Split,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub id: &'static str,
    pub bg_color: &'static str,
    pub text_color: &'static str,
    pub image_url: &'static str,
    pub alt_key: &'static str,
    pub title_key: Option<&'static str>,
    pub description_key: Option<&'static str>,
    pub cta_key: Option<&'static str>,
    pub layout: SlideLayout,
}

const fn full_slide(id: &'static str, image_url: &'static str, alt_key: &'static str) -> Slide {
    Slide {
        id,
        bg_color: "#000000",
        text_color: "#ffffff",
        image_url,
        alt_key,
        title_key: None,
        description_key: None,
        cta_key: None,
        layout: SlideLayout::Full,
    }
}

pub static SLIDES: [Slide; 3] = [
    full_slide(
        "summer",
        "https://res.cloudinary.com/dt1rhz43z/image/upload/v1763696118/Slyder_2_svcjti.png",
        "slide-summer-alt",
    ),
    full_slide(
        "collection",
        "https://res.cloudinary.com/dt1rhz43z/image/upload/v1763696117/slyder_33_cdnp5x.png",
        "slide-collection-alt",
    ),
    full_slide(
        "lookbook",
        "https://res.cloudinary.com/dt1rhz43z/image/upload/v1763696117/Slyder_1_pjkplh.png",
        "slide-lookbook-alt",
    ),
];

#[component]
pub fn Slider() -> Element {
    let _lang = try_use_context::<Signal<String>>().map(|c| c()).unwrap_or_default();

    let mut carousel = use_signal(|| Carousel::new(SLIDES.len()));

    use_future(move || async move {
        if !carousel.peek().auto_advances() {
            return;
        }
        loop {
            timing::sleep_ms(AUTO_ADVANCE_MS).await;
            carousel.with_mut(|c| c.advance());
        }
    });

    let state = carousel();
    let current = state.index();

    rsx! {
        document::Link { rel: "stylesheet", href: SLIDER_CSS }

        section { class: "slider", aria_roledescription: "carousel",
            for (index, slide) in SLIDES.iter().enumerate() {
                div {
                    key: "{slide.id}",
                    class: if index == current { "slider__slide slider__slide--active" } else { "slider__slide" },
                    style: "background-color: {slide.bg_color}; color: {slide.text_color};",
                    if slide.layout == SlideLayout::Full {
                        img {
                            class: "slider__image",
                            src: "{slide.image_url}",
                            alt: i18n::tr(slide.alt_key),
                        }
                    } else {
                        div { class: "slider__split",
                            div { class: "slider__copy",
                                if let Some(title_key) = slide.title_key {
                                    h2 { class: "slider__title", {i18n::tr(title_key)} }
                                }
                                if let Some(description_key) = slide.description_key {
                                    p { class: "slider__description", {i18n::tr(description_key)} }
                                }
                                if let Some(cta_key) = slide.cta_key {
                                    button { class: "slider__cta", {i18n::tr(cta_key)} }
                                }
                            }
                            img {
                                class: "slider__split-image",
                                src: "{slide.image_url}",
                                alt: i18n::tr(slide.alt_key),
                            }
                        }
                    }
                }
            }

            if state.auto_advances() {
                button {
                    class: "slider__control slider__control--prev",
                    onclick: move |_| carousel.with_mut(|c| c.retreat()),
                    {icons::chevron_left("slider__chevron")}
                }
                button {
                    class: "slider__control slider__control--next",
                    onclick: move |_| carousel.with_mut(|c| c.advance()),
                    {icons::chevron_right("slider__chevron")}
                }
                div { class: "slider__dots",
                    for index in 0..state.len() {
                        button {
                            key: "{index}",
                            class: if index == current { "slider__dot slider__dot--active" } else { "slider__dot" },
                            aria_label: "{index + 1}",
                            onclick: move |_| carousel.with_mut(|c| c.jump_to(index)),
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EN_US: &str = include_str!("../../i18n/en-US/chic44-ui.ftl");

    #[test]
    fn slide_deck_is_non_empty_with_unique_ids() {
        assert!(!SLIDES.is_empty());
        let mut seen = std::collections::HashSet::new();
        for slide in &SLIDES {
            assert!(seen.insert(slide.id), "duplicate slide id {}", slide.id);
        }
    }

    #[test]
    fn every_slide_alt_key_is_translated() {
        for slide in &SLIDES {
            assert!(
                EN_US.contains(&format!("{} =", slide.alt_key)),
                "missing translation for {}",
                slide.alt_key
            );
        }
    }
}
