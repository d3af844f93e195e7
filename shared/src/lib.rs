pub mod dropzone;
pub mod format;
pub mod single_image;
