use std::{env, fs, path::{Path, PathBuf}, ops::Deref, fmt::{self, Formatter, Display}};
use tempfile::TempDir;

pub const TEST_DATA_DIR: &str = "tests/test-data";

/// A file living within its own temporary directory, removed once the fixture is dropped.
#[derive(Debug)]
pub struct Fixture {
    path: PathBuf,
    _tempdir: TempDir,
}

impl Fixture {
    fn within_tempdir(filename: &Path) -> Self {
        let tempdir = tempfile::tempdir().expect("Failed to generate temp directory");
        let name = filename.file_name().expect("Invalid filename");
        Fixture{path: tempdir.path().join(name), _tempdir: tempdir}
    }

    /// Copy `tests/test-data/<relative>` into a fresh temporary directory.
    pub fn copy(relative: &str) -> Self {
        let root_dir = env::var("CARGO_MANIFEST_DIR").expect("$CARGO_MANIFEST_DIR");
        let source = Path::new(&root_dir).join(TEST_DATA_DIR).join(relative);
        let fixture = Self::within_tempdir(&source);
        fs::copy(&source, &fixture.path)
            .unwrap_or_else(|e| panic!("Failed to copy {}: {e}", source.display()));
        fixture
    }

    /// Reserve the path of a file that `heredity` is expected to write. Nothing is created yet.
    pub fn output(filename: &str) -> Self {
        Self::within_tempdir(Path::new(filename))
    }
}

impl Deref for Fixture {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        self.path.deref()
    }
}

impl Display for Fixture {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
