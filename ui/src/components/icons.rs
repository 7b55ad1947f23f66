//! Inline SVG icons used across the chrome. Stroke follows `currentColor`
//! so the surrounding element controls the tint.

use dioxus::prelude::*;

pub fn menu(class: &'static str) -> Element {
    rsx! {
        svg { class, view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2",
            path { stroke_linecap: "round", d: "M4 6h16M4 12h16M4 18h16" }
        }
    }
}

pub fn close(class: &'static str) -> Element {
    rsx! {
        svg { class, view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2",
            path { stroke_linecap: "round", d: "M6 6l12 12M18 6L6 18" }
        }
    }
}

pub fn search(class: &'static str) -> Element {
    rsx! {
        svg { class, view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2",
            path { stroke_linecap: "round", d: "M21 21l-4.35-4.35M17 11a6 6 0 1 1-12 0 6 6 0 0 1 12 0z" }
        }
    }
}

pub fn user(class: &'static str) -> Element {
    rsx! {
        svg { class, view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2",
            path { stroke_linecap: "round", d: "M16 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0zM5 21v-1a7 7 0 0 1 14 0v1" }
        }
    }
}

pub fn cart(class: &'static str) -> Element {
    rsx! {
        svg { class, view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                d: "M3 3h2l.4 2M7 13h10l4-8H5.4M7 13L5.4 5M7 13l-2 5h14M10 21a1 1 0 1 1-2 0 1 1 0 0 1 2 0zM19 21a1 1 0 1 1-2 0 1 1 0 0 1 2 0z",
            }
        }
    }
}

pub fn chevron_down(class: &'static str) -> Element {
    rsx! {
        svg { class, view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2",
            path { stroke_linecap: "round", d: "M6 9l6 6 6-6" }
        }
    }
}

pub fn chevron_up(class: &'static str) -> Element {
    rsx! {
        svg { class, view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2",
            path { stroke_linecap: "round", d: "M18 15l-6-6-6 6" }
        }
    }
}

pub fn chevron_left(class: &'static str) -> Element {
    rsx! {
        svg { class, view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2",
            path { stroke_linecap: "round", d: "M15 19l-7-7 7-7" }
        }
    }
}

pub fn chevron_right(class: &'static str) -> Element {
    rsx! {
        svg { class, view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2",
            path { stroke_linecap: "round", d: "M9 5l7 7-7 7" }
        }
    }
}

pub fn instagram(class: &'static str) -> Element {
    rsx! {
        svg { class, view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2",
            rect { x: "3", y: "3", width: "18", height: "18", rx: "5" }
            circle { cx: "12", cy: "12", r: "4" }
            circle { cx: "17.5", cy: "6.5", r: "0.5", fill: "currentColor" }
        }
    }
}
