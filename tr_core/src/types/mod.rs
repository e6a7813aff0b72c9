pub mod stream_frame;
