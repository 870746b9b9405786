use dioxus::prelude::*;

use podcastr::components::AppShell;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Podcastr" }
        document::Meta { name: "theme-color", content: "#8257e5" }
        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
