//! Character Sheet View - the whole editing form

use dioxus::prelude::*;

use charsheet_domain::CharacterSheet;

use crate::presentation::components::{AttributePanel, ClassRequirements, SkillPanel};
use crate::presentation::services::use_character_sheet_service;

/// Result of the last load or save, shown above the form.
#[derive(Debug, Clone, PartialEq)]
enum Status {
    Loading,
    Saved,
    Error(String),
}

#[component]
pub fn CharacterSheetView() -> Element {
    let service = use_character_sheet_service();

    let mut sheet = use_signal({
        let service = service.clone();
        move || service.blank_sheet()
    });
    let mut status: Signal<Option<Status>> = use_signal(|| Some(Status::Loading));
    let mut is_saving = use_signal(|| false);

    // Load the stored character once
    {
        let service = service.clone();
        use_effect(move || {
            let svc = service.clone();
            spawn(async move {
                match svc.initialize().await {
                    Ok(loaded) => {
                        sheet.set(loaded);
                        status.set(None);
                    }
                    Err(e) => status.set(Some(Status::Error(e.user_message()))),
                }
            });
        });
    }

    let save = move |_| {
        if *is_saving.read() {
            return;
        }
        let current: CharacterSheet = sheet.read().clone();
        let svc = service.clone();

        is_saving.set(true);
        status.set(None);

        spawn(async move {
            match svc.save(&current).await {
                Ok(()) => status.set(Some(Status::Saved)),
                Err(e) => status.set(Some(Status::Error(e.user_message()))),
            }
            is_saving.set(false);
        });
    };

    let name = sheet.read().name().to_string();

    rsx! {
        div {
            class: "sheet",

            h1 {
                class: "sheet-title",
                "Character Sheet"
            }

            match status.read().as_ref() {
                Some(Status::Loading) => rsx! {
                    div { class: "banner info", "Loading character..." }
                },
                Some(Status::Saved) => rsx! {
                    div { class: "banner success", "Character saved" }
                },
                Some(Status::Error(message)) => rsx! {
                    div { class: "banner error", "{message}" }
                },
                None => rsx! {},
            }

            div {
                class: "field",
                label {
                    class: "field-label",
                    "Character Name *"
                }
                input {
                    r#type: "text",
                    value: "{name}",
                    oninput: move |e| sheet.write().set_name(e.value()),
                    placeholder: "Enter character name",
                    class: "field-input",
                }
            }

            div {
                class: "columns",
                AttributePanel { sheet }
                ClassRequirements { sheet }
                SkillPanel { sheet }
            }

            div {
                class: "footer",
                button {
                    onclick: save,
                    disabled: *is_saving.read(),
                    class: "save",
                    if *is_saving.read() {
                        "Saving..."
                    } else {
                        "Save Character"
                    }
                }
            }
        }
    }
}
