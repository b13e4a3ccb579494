pub mod png_encoder;
