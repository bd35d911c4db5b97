//! Reading the source document and saving the text rendition

// Module declarations
mod source_reader;
mod text_saver;

// Re-export public API
pub use source_reader::read_source;
pub use text_saver::save_text_content;
