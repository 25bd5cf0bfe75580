mod decoding_error;
mod scalar_decoder;

pub use decoding_error::DecodingError;
pub use scalar_decoder::ScalarDecoder;

#[cfg(test)]
mod tests;
