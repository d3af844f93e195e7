pub mod auth;
pub mod landing;
pub mod progress_circle;
pub mod single_image_dropzone;
pub mod spinner;
pub mod utils;
pub mod workspace;
