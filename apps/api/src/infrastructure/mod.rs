// Infrastructure layer module
// Contains adapters for external systems (storage)

pub mod repositories;
