mod arg_encoder;

pub use arg_encoder::ArgEncoder;
