//src/model/mod.rs
pub mod elements;
pub mod property_table;

// Re-exports for cleaner imports
pub use elements::{ElementRecord, ELEMENTS, ELEMENT_COUNT};
pub use property_table::{PropertyTable, DEFAULT_COLUMN};
