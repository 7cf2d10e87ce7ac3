pub mod text_cleaning;

pub use text_cleaning::clean_text_for_translation;
