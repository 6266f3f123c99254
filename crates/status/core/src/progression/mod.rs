//! Level progression across the general, magical and magical-skill tracks.

mod experience;

pub use experience::{Threshold, Track, max_experience, max_experience_by_name};
