pub mod drill;
pub mod prefs;
pub mod records;
pub mod sentences;
