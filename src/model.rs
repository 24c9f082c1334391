use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;
use walkdir::DirEntry;

use crate::path::is_hidden;

/// What to do with a regular file that is named directly, is hidden, and
/// hidden entries were not requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HiddenRootPolicy {
    /// Report the file's size anyway.
    #[default]
    Report,
    /// Treat the file as filtered out and report 0.
    Skip,
}

impl HiddenRootPolicy {
    pub fn from_name(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "report" => Some(HiddenRootPolicy::Report),
            "skip" => Some(HiddenRootPolicy::Skip),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HiddenRootPolicy::Report => "report",
            HiddenRootPolicy::Skip => "skip",
        }
    }
}

impl std::str::FromStr for HiddenRootPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HiddenRootPolicy::from_name(s)
            .ok_or_else(|| format!("Unknown hidden-root policy '{s}' (expected report or skip)"))
    }
}

impl fmt::Display for HiddenRootPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Input to a single aggregation call.
#[derive(Debug, Clone)]
pub struct AggregationRequest {
    pub path: PathBuf,
    pub recursive: bool,
    pub include_hidden: bool,
    pub hidden_root: HiddenRootPolicy,
}

impl AggregationRequest {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            recursive: false,
            include_hidden: false,
            hidden_root: HiddenRootPolicy::default(),
        }
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn include_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    pub fn hidden_root(mut self, policy: HiddenRootPolicy) -> Self {
        self.hidden_root = policy;
        self
    }

    /// Whether the entry is filtered out by the hidden-name rule.
    pub fn excludes(&self, entry: &PathEntry) -> bool {
        !self.include_hidden && entry.hidden
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Other,
}

/// One filesystem node seen during traversal.
#[derive(Debug, Clone)]
pub struct PathEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub size: u64,
    pub hidden: bool,
}

impl PathEntry {
    /// Builds an entry from a walk result without following symbolic links.
    ///
    /// Only regular files carry a size; everything else reports 0.
    pub fn from_dir_entry(entry: &DirEntry) -> Result<Self, walkdir::Error> {
        let file_type = entry.file_type();
        let (kind, size) = if file_type.is_file() {
            (EntryKind::File, entry.metadata()?.len())
        } else if file_type.is_dir() {
            (EntryKind::Directory, 0)
        } else {
            (EntryKind::Other, 0)
        };

        Ok(Self {
            path: entry.path().to_path_buf(),
            kind,
            size,
            hidden: is_hidden(&entry.file_name().to_string_lossy()),
        })
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}
