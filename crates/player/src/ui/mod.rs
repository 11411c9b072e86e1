use dioxus::prelude::*;

pub mod presentation;

use presentation::views::CharacterSheetView;

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    rsx! {
        div {
            style: "width: 100vw; min-height: 100vh; overflow-y: auto;",
            CharacterSheetView {}
        }
    }
}
