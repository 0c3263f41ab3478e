pub mod analyze_view;
pub mod header;
pub mod image_picker;
pub mod loading_indicator;
pub mod pages;
pub mod result_summary;
pub mod sidebar;
