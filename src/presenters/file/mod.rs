pub mod frame_writer;
pub mod ppm;
