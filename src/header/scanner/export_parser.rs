use std::path::Path;

use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;
use crate::header::types::ExportRules;
use crate::utils::file_utils;

// `[^>]*` keeps the parameter list flat: nested angle brackets don't match.
static TEMPLATE_CLASS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"template\s*<[^>]*>\s*class\s+(\w+)\s*[:{<]").expect("valid template class regex")
});
static TEMPLATE_STRUCT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"template\s*<[^>]*>\s*struct\s+(\w+)\s*[:{<]").expect("valid template struct regex")
});

/// Regex-based extractor of exported type names from header text
#[derive(Debug)]
pub struct ExportParser {
    rules: ExportRules,
    export_class_re: Regex,
    export_struct_re: Regex,
}

impl Default for ExportParser {
    fn default() -> Self {
        Self::new(ExportRules::default())
    }
}

impl ExportParser {
    /// Create a parser for the given rules
    pub fn new(rules: ExportRules) -> Self {
        let marker = regex::escape(&rules.export_marker);
        let export_re = |keyword: &str| {
            Regex::new(&format!(r"{keyword}\s+{marker}\s+(\w+)\s*[:{{<]"))
                .expect("escaped export marker forms a valid regex")
        };

        Self {
            export_class_re: export_re("class"),
            export_struct_re: export_re("struct"),
            rules,
        }
    }

    /// Rules this parser applies
    pub fn rules(&self) -> &ExportRules {
        &self.rules
    }

    /// Read a header and extract its type names
    pub fn parse_file(&self, file_path: impl AsRef<Path>) -> Result<Vec<String>> {
        let file_path = file_path.as_ref();
        debug!("Parsing file: {}", file_path.display());

        let content = file_utils::read_file_lossy(file_path)?;
        let names = self.parse_content(&content);

        debug!("Found {} names in {}", names.len(), file_path.display());
        Ok(names)
    }

    /// Extract type names from header text.
    ///
    /// Export-annotated declarations come first. Template declarations follow,
    /// minus anything already found and anything the rules exclude. A trailing
    /// `:`, `{` or `<` is required, so forward declarations never match.
    pub fn parse_content(&self, content: &str) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();

        for re in [&self.export_class_re, &self.export_struct_re] {
            for cap in re.captures_iter(content) {
                let name = &cap[1];
                if !names.iter().any(|n| n == name) {
                    trace!("Found exported type: {}", name);
                    names.push(name.to_string());
                }
            }
        }

        for re in [&*TEMPLATE_CLASS_RE, &*TEMPLATE_STRUCT_RE] {
            for cap in re.captures_iter(content) {
                let name = &cap[1];
                if names.iter().any(|n| n == name) {
                    continue;
                }
                if !self.rules.accepts_template(name) {
                    trace!("Skipping excluded template: {}", name);
                    continue;
                }
                trace!("Found template type: {}", name);
                names.push(name.to_string());
            }
        }

        names
    }
}
