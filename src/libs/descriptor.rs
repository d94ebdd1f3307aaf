//! Front-end library table
//!
//! Fixed set of libraries copied out of `node_modules`.

/// Placeholder replaced with the library name in path templates
pub const NAME_PLACEHOLDER: &str = "$name";

/// Marker in destination templates replaced with the output directory
pub const OUTPUT_PLACEHOLDER: &str = "$out";

/// Source and destination path templates for one library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryDescriptor {
    pub name: &'static str,
    pub source: &'static str,
    pub destination: &'static str,
}

impl LibraryDescriptor {
    const fn dist(name: &'static str) -> Self {
        Self {
            name,
            source: "./node_modules/$name/dist",
            destination: "$out/$name/dist",
        }
    }

    /// Concrete source path
    pub fn source_path(&self) -> String {
        self.source.replacen(NAME_PLACEHOLDER, self.name, 1)
    }

    /// Concrete destination path under `output_dir`
    pub fn destination_path(&self, output_dir: &str) -> String {
        self.destination
            .replacen(NAME_PLACEHOLDER, self.name, 1)
            .replacen(OUTPUT_PLACEHOLDER, output_dir, 1)
    }
}

/// Libraries copied by `copy-client-libs`, in copy order
pub const LIBRARIES: [LibraryDescriptor; 4] = [
    LibraryDescriptor::dist("bootstrap"),
    LibraryDescriptor::dist("jquery"),
    LibraryDescriptor::dist("jquery-validation"),
    LibraryDescriptor::dist("jquery-validation-unobtrusive"),
];
