pub mod analytics;
pub mod cache;
pub mod dictionary;
pub mod messages;
pub mod preprocess;
pub mod resolver;
pub mod router;

pub use resolver::{DefinitionResolver, LookupServices};
pub use router::MessageRouter;

#[cfg(test)]
mod tests;
