// Matrix Tools Hub - ui/panels/mod.rs

pub mod file_rows;
pub mod header;
pub mod image_to_pdf;
pub mod notifications;
pub mod pdf_merge;
pub mod text_to_audio;
