pub mod normalizer;
pub mod requirements;
pub mod sentences;

pub use normalizer::normalize;
pub use requirements::{extract_requirements, RequirementExtractor, TRIGGER_KEYWORDS};
pub use sentences::{shared_tokenizer, PunctuationTokenizer, SentenceTokenizer};
