pub mod config;
pub mod csv;
pub mod text_decoder;
pub mod upload;
