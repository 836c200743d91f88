// Survey analysis: question catalog → prompt compiler → model call → response decoder.
// All model calls go through llm_client; compile and decode stay pure.

pub mod catalog;
pub mod compiler;
pub mod decoder;
pub mod handlers;
pub mod mock;
pub mod prompts;
pub mod result;
pub mod votes;
