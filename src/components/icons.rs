use dioxus::prelude::*;

/// Glyphs used by the player and the episode list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Headphones,
    Shuffle,
    Previous,
    Play,
    Pause,
    Next,
    Repeat,
}

impl IconKind {
    /// Text alternative for the glyph.
    pub fn label(self) -> &'static str {
        match self {
            IconKind::Headphones => "Now playing",
            IconKind::Shuffle => "Shuffle",
            IconKind::Previous => "Previous episode",
            IconKind::Play => "Play",
            IconKind::Pause => "Pause",
            IconKind::Next => "Next episode",
            IconKind::Repeat => "Repeat",
        }
    }
}

#[component]
pub fn Icon(kind: IconKind, class: String) -> Element {
    match kind {
        IconKind::Headphones => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                path { d: "M3 18v-6a9 9 0 0 1 18 0v6" }
                path { d: "M21 19a2 2 0 0 1-2 2h-1a2 2 0 0 1-2-2v-3a2 2 0 0 1 2-2h3z" }
                path { d: "M3 19a2 2 0 0 0 2 2h1a2 2 0 0 0 2-2v-3a2 2 0 0 0-2-2H3z" }
            }
        },
        IconKind::Shuffle => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                polyline { points: "16 3 21 3 21 8" }
                line { x1: "4", y1: "20", x2: "21", y2: "3" }
                polyline { points: "21 16 21 21 16 21" }
                line { x1: "15", y1: "15", x2: "21", y2: "21" }
                line { x1: "4", y1: "4", x2: "9", y2: "9" }
            }
        },
        IconKind::Previous => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                polygon { points: "19 20 9 12 19 4 19 20" }
                line {
                    x1: "5",
                    y1: "19",
                    x2: "5",
                    y2: "5",
                    stroke: "currentColor",
                    stroke_width: "2",
                }
            }
        },
        IconKind::Play => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                polygon { points: "5 3 19 12 5 21 5 3" }
            }
        },
        IconKind::Pause => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                rect { x: "6", y: "4", width: "4", height: "16" }
                rect { x: "14", y: "4", width: "4", height: "16" }
            }
        },
        IconKind::Next => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                polygon { points: "5 4 15 12 5 20 5 4" }
                line {
                    x1: "19",
                    y1: "5",
                    x2: "19",
                    y2: "19",
                    stroke: "currentColor",
                    stroke_width: "2",
                }
            }
        },
        IconKind::Repeat => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                polyline { points: "17 1 21 5 17 9" }
                path { d: "M3 11V9a4 4 0 0 1 4-4h14" }
                polyline { points: "7 23 3 19 7 15" }
                path { d: "M21 13v2a4 4 0 0 1-4 4H3" }
            }
        },
    }
}
