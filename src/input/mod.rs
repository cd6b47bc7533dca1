pub mod commands;
pub mod text_fields;
pub mod ui_state;
