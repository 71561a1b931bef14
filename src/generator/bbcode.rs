use super::{Generator, Platform};

/// Generic BBCode - uses the default templates unchanged
pub struct BbcodeGenerator;

impl Generator for BbcodeGenerator {
    fn platform(&self) -> Platform {
        Platform::Bbcode
    }
}
