//! Data layer - in-memory entry store and dataset loading

mod entries;
mod loader;

pub use entries::EntryStore;
pub use loader::{LoadedDataset, load_dataset_file, parse_dataset};
