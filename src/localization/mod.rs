//! Localization seam: the `Translator` trait used by read-side projections,
//! a resource-table implementation, and culture negotiation helpers.

mod culture;
mod translator;

pub use culture::{culture_chain, negotiate_culture, parent_culture};
pub use translator::{LocalizationError, ResourceTranslator, Translator};
