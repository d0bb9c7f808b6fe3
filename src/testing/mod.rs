mod memory_artifact_store;

pub use memory_artifact_store::MemoryArtifactStore;
