mod classifier;
mod tokenizer;

pub use classifier::Classifier;
pub use tokenizer::{Tokenizer, split};
