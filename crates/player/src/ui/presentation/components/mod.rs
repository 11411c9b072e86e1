//! Character sheet panels

pub mod attribute_panel;
pub mod class_requirements;
pub mod skill_panel;

pub use attribute_panel::AttributePanel;
pub use class_requirements::ClassRequirements;
pub use skill_panel::SkillPanel;
