//! Domain records: categories, pills and tags.

pub mod category;
pub mod pill;

pub use category::{Category, CategoryInfo};
pub use pill::{Pill, PillDraft, PillFactory, Source, Tag, normalize_label};
