mod mem;
mod system;

use std::io;
use std::path::Path;

#[cfg(any(test, feature = "test-support"))]
pub use mem::MemFs;
pub use system::SystemFs;

pub trait ReadFile {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}
