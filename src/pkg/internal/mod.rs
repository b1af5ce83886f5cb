pub mod adaptors;
pub mod importer;
pub mod store;
