use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Deduplicated set of variable names, ordered by byte value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableDictionary {
    names: BTreeSet<String>,
}

impl VariableDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the name was already present.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn sorted(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> Extend<S> for VariableDictionary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.add(name);
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `variables.txt`, one name per line
    #[default]
    Txt,
    /// `variables.json` with run metadata
    Json,
}

impl OutputFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            OutputFormat::Txt => "variables.txt",
            OutputFormat::Json => "variables.json",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ScanReport {
    pub source_dir: PathBuf,
    pub dictionary: VariableDictionary,
    pub files_scanned: usize,
    pub failures: Vec<FileFailure>,
}

/// Serialized form of `variables.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableReport {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub source_dir: String,
    pub files_scanned: usize,
    pub files_failed: usize,
    pub variables: Vec<String>,
}

impl From<&ScanReport> for VariableReport {
    fn from(report: &ScanReport) -> Self {
        Self {
            generated_at: chrono::Utc::now(),
            source_dir: report.source_dir.display().to_string(),
            files_scanned: report.files_scanned,
            files_failed: report.failures.len(),
            variables: report.dictionary.sorted(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_new_variable() {
        let mut dict = VariableDictionary::new();
        assert!(dict.add("poco"));
        assert_eq!(dict.sorted(), vec!["poco".to_string()]);
    }

    #[test]
    fn test_add_existing_variable_is_noop() {
        let mut dict = VariableDictionary::new();
        dict.add("poco");
        assert!(!dict.add("poco"));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_sorted_orders_by_bytes() {
        let mut dict = VariableDictionary::new();
        dict.extend(["wham!", "acdc", "cars", "Zeppelin"]);

        // 大寫字母排在小寫之前
        assert_eq!(dict.sorted(), vec!["Zeppelin", "acdc", "cars", "wham!"]);
    }

    #[test]
    fn test_report_from_scan() {
        let mut dictionary = VariableDictionary::new();
        dictionary.extend(["$foo", "$bar"]);
        let scan = ScanReport {
            source_dir: PathBuf::from("src"),
            dictionary,
            files_scanned: 2,
            failures: vec![FileFailure {
                path: PathBuf::from("src/broken.php"),
                message: "denied".to_string(),
            }],
        };

        let report = VariableReport::from(&scan);
        assert_eq!(report.variables, vec!["$bar", "$foo"]);
        assert_eq!(report.files_failed, 1);
        assert_eq!(report.source_dir, "src");
    }
}
