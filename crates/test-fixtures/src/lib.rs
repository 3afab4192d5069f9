//! Test support for the Seeker workspace.
//!
//! In-memory implementations of every collaborator contract, scripted and
//! failing doubles with call counters, and the JSON corpus loader.

pub mod corpus;
pub mod doubles;
pub mod memory;
pub mod trigram;

pub use corpus::{load_corpus, load_fixture, Corpus, CorpusQuery};
pub use doubles::{CallCounter, Failing, ScriptedRelevanceModel, StaticEmbedder, StaticStage};
pub use memory::{InMemoryChunkIndex, InMemoryClientIndex, InMemoryDocumentStore, InMemoryKeywordIndex};
