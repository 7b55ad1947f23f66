//! Storefront footer: brand and social links, company blurb, the three
//! physical stores, and contact details.

use dioxus::document;
use dioxus::prelude::*;

use crate::components::icons;
use crate::t;

const FOOTER_CSS: Asset = asset!("/assets/styling/footer.css");

#[component]
pub fn Footer() -> Element {
    // Re-render when the platform shell's language signal changes.
    let _lang = try_use_context::<Signal<String>>().map(|c| c()).unwrap_or_default();

    let year = time::OffsetDateTime::now_utc().year();
    let email = t!("footer-contact-email");

    rsx! {
        document::Link { rel: "stylesheet", href: FOOTER_CSS }

        footer { class: "footer",
            div { class: "footer__grid",
                div { class: "footer__column",
                    h3 { class: "footer__brand", "CHIC 44" }
                    p { class: "footer__muted", {t!("brand-subtitle")} }
                    div { class: "footer__social",
                        a {
                            href: "https://www.instagram.com/novedaddelbolso",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: "Instagram Novedad del Bolso",
                            {icons::instagram("footer__icon")}
                        }
                        a {
                            href: "https://www.instagram.com/chic44boutique",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: "Instagram Chic 44 Boutique",
                            {icons::instagram("footer__icon")}
                        }
                    }
                }

                div { class: "footer__column",
                    h3 { class: "footer__heading", {t!("footer-company")} }
                    p { class: "footer__muted", {t!("footer-company-text")} }
                }

                div { class: "footer__column",
                    h3 { class: "footer__heading", {t!("footer-our-stores")} }
                    ul { class: "footer__stores",
                        li {
                            strong { {t!("footer-store-copacabana")} }
                            p { {t!("footer-store-copacabana-address")} }
                        }
                        li {
                            strong { {t!("footer-store-girardota")} }
                            p { {t!("footer-store-girardota-address")} }
                        }
                        li {
                            strong { {t!("footer-store-barbosa")} }
                            p { {t!("footer-store-barbosa-address-1")} }
                            p { {t!("footer-store-barbosa-address-2")} }
                        }
                    }
                }

                div { class: "footer__column",
                    h3 { class: "footer__heading", {t!("footer-contact")} }
                    a { class: "footer__link", href: "mailto:{email}", "{email}" }
                    h3 { class: "footer__heading footer__heading--spaced", {t!("footer-info")} }
                    a { class: "footer__link", href: "#", {t!("footer-terms")} }
                }
            }

            div { class: "footer__legal",
                p { {t!("footer-copyright", year = year.to_string())} }
            }
        }
    }
}
