pub mod domain;
pub mod error;
pub mod format;
pub mod input;
pub mod normalize;
pub mod placeholders;
pub mod validate;
