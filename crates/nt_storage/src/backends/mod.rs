pub mod file;
pub mod memory;

pub use file::FileArchive;
pub use memory::InMemoryArchive;
