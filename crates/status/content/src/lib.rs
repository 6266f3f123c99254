//! File-backed content for the status model.
//!
//! This crate houses everything that touches the filesystem or the OS:
//! - Character files (RON, TOML or YAML, picked by extension)
//! - Status configuration (TOML)
//! - Race, item, magic and skill registries (one file per id)
//! - `$[key]` text templating
//! - An entropy-backed RNG
//!
//! The model itself lives in `status-core` and never performs I/O.

pub mod error;
pub mod loaders;
pub mod registry;
pub mod rng;
pub mod template;

pub use error::{RegistryError, SerializationError};
pub use loaders::{CharacterLoader, ConfigLoader, DataFormat, LoadResult};
pub use registry::{Registry, RegistryEntry, RegistryKind, RegistrySet, RegistrySetBuilder};
pub use rng::EntropyRng;
