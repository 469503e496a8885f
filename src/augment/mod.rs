//! TypeScript source augmentation
//!
//! This module handles:
//! - Parsing TypeScript into a structural view ([`parser`])
//! - Finding bot classes by their marker decorator ([`locator`])
//! - Describing the edits for one component ([`plan`])
//! - Applying those edits to source text ([`engine`])

pub mod edits;
pub mod engine;
pub mod locator;
pub mod parser;
pub mod plan;
pub mod style;

pub use engine::{AugmentOutcome, apply, apply_export};
pub use locator::{DeclarationLocator, LocatorScan};
pub use plan::{ExportPlan, ReapplyPolicy, SourceAugmentationPlan};
