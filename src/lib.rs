//! Synthetic hospital dataset generator.
//!
//! Produces a set of tab-separated data files (patients, doctors,
//! diseases, products, suppliers, voters, and the many-to-many
//! associations between them) suitable for bulk import into a
//! relational database. One integer scale factor controls all row
//! counts; association tables are deduplicated during sampling so no
//! (left, right) pair is emitted twice.

pub use scale::Scale;
pub use seeded_rng::make_rng;
pub use tables::{Generator, SinkError};

pub mod fields;
pub mod pair_sampler;
pub mod scale;
mod seeded_rng;
pub mod tables;
pub mod vocab;
