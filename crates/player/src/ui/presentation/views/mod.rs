pub mod character_sheet_view;

pub use character_sheet_view::CharacterSheetView;
