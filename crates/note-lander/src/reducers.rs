pub mod app_reducer;
pub mod editor_reducer;
pub mod palette_reducer;
