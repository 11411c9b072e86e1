//! Class Requirements - eligibility per class with an expandable breakdown

use dioxus::prelude::*;

use charsheet_domain::{breakdown, is_eligible, CharacterClass, CharacterSheet};

#[derive(Props, Clone, PartialEq)]
pub struct ClassRequirementsProps {
    pub sheet: Signal<CharacterSheet>,
}

#[component]
pub fn ClassRequirements(props: ClassRequirementsProps) -> Element {
    let mut expanded: Signal<Option<CharacterClass>> = use_signal(|| None);

    rsx! {
        section {
            class: "panel",
            h3 {
                class: "panel-title",
                "Classes"
            }
            for class in CharacterClass::ALL {
                div {
                    key: "{class}",
                    ClassHeader {
                        class,
                        sheet: props.sheet,
                        on_toggle: move |class| {
                            let next = if *expanded.read() == Some(class) { None } else { Some(class) };
                            expanded.set(next);
                        },
                    }
                    if *expanded.read() == Some(class) {
                        RequirementBreakdown {
                            class,
                            sheet: props.sheet,
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ClassHeaderProps {
    class: CharacterClass,
    sheet: Signal<CharacterSheet>,
    on_toggle: EventHandler<CharacterClass>,
}

#[component]
fn ClassHeader(props: ClassHeaderProps) -> Element {
    let class = props.class;
    let eligible = is_eligible(class, props.sheet.read().attributes());
    let (marker, status_class) = if eligible {
        ("✅", "eligible")
    } else {
        ("❌", "ineligible")
    };

    rsx! {
        button {
            class: "class-header {status_class}",
            onclick: move |_| props.on_toggle.call(class),
            span { "{marker}" }
            span { "{class}" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct RequirementBreakdownProps {
    class: CharacterClass,
    sheet: Signal<CharacterSheet>,
}

#[component]
fn RequirementBreakdown(props: RequirementBreakdownProps) -> Element {
    let checks = breakdown(props.class, props.sheet.read().attributes());

    rsx! {
        ul {
            class: "requirements",
            for check in checks {
                li {
                    key: "{check.attribute}",
                    class: if check.met { "met" } else { "unmet" },
                    "{check.attribute}: {check.current} / {check.minimum}"
                }
            }
        }
    }
}
