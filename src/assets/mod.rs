/// Raster decoding to premultiplied RGBA8.
pub mod decode;
/// Asynchronously decoded face illustration.
pub mod face_image;
