//! Attribute Panel - point-buy steppers for the six attributes

use dioxus::prelude::*;

use charsheet_domain::{Attribute, CharacterSheet};

use crate::presentation::services::use_character_sheet_service;

/// Props for AttributePanel
#[derive(Props, Clone, PartialEq)]
pub struct AttributePanelProps {
    pub sheet: Signal<CharacterSheet>,
}

#[component]
pub fn AttributePanel(props: AttributePanelProps) -> Element {
    let sheet = props.sheet.read();
    let total = sheet.attribute_total();
    let max = sheet.rules().max_attribute_points();
    let remaining = sheet.attribute_points_remaining();

    rsx! {
        section {
            class: "panel",
            h3 {
                class: "panel-title",
                "Attributes"
            }
            p {
                class: "panel-subtitle",
                "{total} / {max} points ({remaining} remaining)"
            }
            for attribute in Attribute::ALL {
                AttributeRow {
                    key: "{attribute}",
                    attribute,
                    sheet: props.sheet,
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct AttributeRowProps {
    attribute: Attribute,
    sheet: Signal<CharacterSheet>,
}

#[component]
fn AttributeRow(props: AttributeRowProps) -> Element {
    let service = use_character_sheet_service();
    let attribute = props.attribute;
    let mut sheet = props.sheet;

    let value = sheet.read().attribute(attribute);
    let modifier = format!("{:+}", sheet.read().modifier(attribute));

    let decrement = {
        let service = service.clone();
        move |_| {
            service.change_attribute(&mut sheet.write(), attribute, value - 1, value);
        }
    };
    let increment = {
        let service = service.clone();
        move |_| {
            service.change_attribute(&mut sheet.write(), attribute, value + 1, value);
        }
    };
    // Typed values move one step toward the requested number.
    let on_input = move |e: FormEvent| {
        if let Ok(requested) = e.value().trim().parse::<i32>() {
            service.change_attribute(&mut sheet.write(), attribute, requested, value);
        }
    };

    rsx! {
        div {
            class: "row",
            span {
                class: "row-label",
                "{attribute}"
            }
            button {
                class: "stepper",
                disabled: value <= 0,
                onclick: decrement,
                "−"
            }
            input {
                r#type: "number",
                class: "row-value",
                value: "{value}",
                oninput: on_input,
            }
            button {
                class: "stepper",
                onclick: increment,
                "+"
            }
            span {
                class: "row-detail",
                "(Modifier: {modifier})"
            }
        }
    }
}
