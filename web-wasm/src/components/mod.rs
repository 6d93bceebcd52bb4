pub mod analyze_button;
pub mod header;
pub mod progress_bar;
pub mod result_panel;
pub mod upload_area;
