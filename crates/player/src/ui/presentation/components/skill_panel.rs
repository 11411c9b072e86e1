//! Skill Panel - skill point allocation with attribute bonuses

use dioxus::prelude::*;

use charsheet_domain::{CharacterSheet, Skill};

use crate::presentation::services::use_character_sheet_service;

#[derive(Props, Clone, PartialEq)]
pub struct SkillPanelProps {
    pub sheet: Signal<CharacterSheet>,
}

#[component]
pub fn SkillPanel(props: SkillPanelProps) -> Element {
    let available = props.sheet.read().skill_points_available();
    let spent = props.sheet.read().skill_points_spent();

    rsx! {
        section {
            class: "panel",
            h3 {
                class: "panel-title",
                "Skills"
            }
            p {
                class: "panel-subtitle",
                "Points available: {available} (spent {spent})"
            }
            for skill in Skill::ALL {
                SkillRow {
                    key: "{skill}",
                    skill,
                    sheet: props.sheet,
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SkillRowProps {
    skill: Skill,
    sheet: Signal<CharacterSheet>,
}

#[component]
fn SkillRow(props: SkillRowProps) -> Element {
    let service = use_character_sheet_service();
    let skill = props.skill;
    let mut sheet = props.sheet;

    let (points, bonus, total) = {
        let current = sheet.read();
        (
            current.skill(skill),
            current.modifier(skill.governing_attribute()),
            current.skill_total(skill),
        )
    };
    let governing = skill.governing_attribute().as_str();

    let decrement = {
        let service = service.clone();
        move |_| {
            service.change_skill(&mut sheet.write(), skill, points - 1, points);
        }
    };
    let increment = move |_| {
        service.change_skill(&mut sheet.write(), skill, points + 1, points);
    };

    rsx! {
        div {
            class: "row",
            span {
                class: "row-label",
                "{skill.display_name()}"
            }
            button {
                class: "stepper",
                disabled: points <= 0,
                onclick: decrement,
                "−"
            }
            span {
                class: "row-value",
                "{points}"
            }
            button {
                class: "stepper",
                onclick: increment,
                "+"
            }
            span {
                class: "row-detail",
                "{points} + {bonus} ({governing}) = {total}"
            }
        }
    }
}
