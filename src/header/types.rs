use std::path::{Path, PathBuf};

/// Extension of the header files collected by the scanner
pub const HEADER_EXTENSION: &str = "h";

/// Type names that map straight to a known header instead of being discovered.
///
/// Entries are emitted in table order.
pub const FIXED_INCLUDES: &[(&str, &str)] = &[
    ("QwtMath", "qwt_math.h"),
    ("QwtGlobal", "qwt_global.h"),
];

/// Header that a fixed type name forwards to, if the name is in [`FIXED_INCLUDES`]
pub fn fixed_header_for(name: &str) -> Option<&'static str> {
    FIXED_INCLUDES
        .iter()
        .find(|(fixed, _)| *fixed == name)
        .map(|(_, header)| *header)
}

/// Pattern parameters used to pick type names out of header text
#[derive(Debug, Clone)]
pub struct ExportRules {
    /// Marker placed between `class`/`struct` and the type name
    pub export_marker: String,

    /// Template names starting with any of these are skipped
    pub excluded_template_prefixes: Vec<String>,

    /// Template names equal to any of these are skipped
    pub excluded_template_names: Vec<String>,
}

impl Default for ExportRules {
    fn default() -> Self {
        Self {
            export_marker: "QWT_EXPORT".to_string(),
            excluded_template_prefixes: vec!["QwtArray".to_string(), "QwtVector".to_string()],
            excluded_template_names: ["QMap", "QList", "QVector", "QSharedPointer"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ExportRules {
    /// Whether a template-derived name passes the prefix and denylist filters
    pub fn accepts_template(&self, name: &str) -> bool {
        !self
            .excluded_template_prefixes
            .iter()
            .any(|prefix| name.starts_with(prefix.as_str()))
            && !self.excluded_template_names.iter().any(|n| n == name)
    }
}

/// Configuration for one generation run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Root directory scanned for headers
    pub scan_dir: PathBuf,

    /// Directory receiving one include file per type name
    pub output_dir: PathBuf,

    /// Extraction rules
    pub rules: ExportRules,
}

impl GenerateOptions {
    /// Options with the default extraction rules
    pub fn new(scan_dir: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Self {
        Self {
            scan_dir: scan_dir.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
            rules: ExportRules::default(),
        }
    }
}

/// Type names extracted from a single header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedHeader {
    /// Path to the header, as yielded by the directory walk
    pub path: PathBuf,

    /// Deduplicated names in discovery order
    pub names: Vec<String>,

    /// Why the header could not be read, if it couldn't
    pub read_error: Option<String>,
}

impl ExtractedHeader {
    /// Whether reading the header failed
    pub fn read_failed(&self) -> bool {
        self.read_error.is_some()
    }
}
