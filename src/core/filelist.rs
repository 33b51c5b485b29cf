// Matrix Tools Hub - core/filelist.rs
//
// Ordered per-tool file selection with policy enforcement.
// Pure state: no dialogs, no rendering. The UI layer feeds it
// `SelectedFile` records from the picker or drag-drop and renders
// whatever is held here.

use crate::core::config::UploadLimits;
use crate::core::model::SelectedFile;
use std::fmt;

/// Upload policy for one tool, derived from the configured limits.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size: u64,
    pub max_files: usize,
    /// Accepted MIME types. Candidates with any other type are rejected.
    pub allowed_types: Vec<String>,
}

impl UploadPolicy {
    /// Policy for the image-to-PDF tool.
    pub fn images(limits: &UploadLimits) -> Self {
        Self {
            max_file_size: limits.max_file_size,
            max_files: limits.max_files,
            allowed_types: limits.allowed_image_types.clone(),
        }
    }

    /// Policy for the PDF-merge tool.
    pub fn pdfs(limits: &UploadLimits) -> Self {
        Self {
            max_file_size: limits.max_file_size,
            max_files: limits.max_files,
            allowed_types: vec![limits.allowed_pdf_type.clone()],
        }
    }

    fn allows(&self, mime: &str) -> bool {
        self.allowed_types.iter().any(|t| t == mime)
    }
}

/// Why a candidate file was not added to the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    TooLarge { size: u64, max: u64 },
    UnsupportedType { mime: String },
    TooMany { max: usize },
}

/// A rejected candidate, carrying enough context for a notification.
#[derive(Debug, Clone)]
pub struct Rejection {
    pub name: String,
    pub reason: RejectReason,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            RejectReason::TooLarge { size, max } => write!(
                f,
                "'{}' is {}; the maximum size is {}",
                self.name,
                crate::core::config::format_file_size(*size),
                crate::core::config::format_file_size(*max),
            ),
            RejectReason::UnsupportedType { mime } => {
                write!(f, "'{}' has unsupported type '{mime}'", self.name)
            }
            RejectReason::TooMany { max } => {
                write!(f, "'{}' skipped: at most {max} files allowed", self.name)
            }
        }
    }
}

/// Ordered collection of files selected for one tool.
#[derive(Debug, Default)]
pub struct FileList {
    entries: Vec<SelectedFile>,
}

impl FileList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append candidates that pass the policy; return the rejected ones.
    ///
    /// Candidates are checked in order, so when the count cap is hit the
    /// remaining candidates all come back as `TooMany`.
    pub fn add_files(
        &mut self,
        candidates: Vec<SelectedFile>,
        policy: &UploadPolicy,
    ) -> Vec<Rejection> {
        let mut rejected = Vec::new();

        for candidate in candidates {
            if !policy.allows(&candidate.mime) {
                rejected.push(Rejection {
                    name: candidate.name,
                    reason: RejectReason::UnsupportedType {
                        mime: candidate.mime,
                    },
                });
                continue;
            }
            if candidate.size > policy.max_file_size {
                rejected.push(Rejection {
                    name: candidate.name,
                    reason: RejectReason::TooLarge {
                        size: candidate.size,
                        max: policy.max_file_size,
                    },
                });
                continue;
            }
            if self.entries.len() >= policy.max_files {
                rejected.push(Rejection {
                    name: candidate.name,
                    reason: RejectReason::TooMany {
                        max: policy.max_files,
                    },
                });
                continue;
            }
            self.entries.push(candidate);
        }

        rejected
    }

    /// Remove one entry by index; later entries shift down.
    pub fn remove(&mut self, index: usize) -> Option<SelectedFile> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn entries(&self) -> &[SelectedFile] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(|f| f.size).sum()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Snapshot of the current selection for a request record.
    pub fn to_vec(&self) -> Vec<SelectedFile> {
        self.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::UploadLimits;
    use std::path::PathBuf;

    fn file(name: &str, size: u64, mime: &str) -> SelectedFile {
        SelectedFile {
            path: PathBuf::from(name),
            name: name.to_string(),
            size,
            mime: mime.to_string(),
        }
    }

    fn image_policy() -> UploadPolicy {
        UploadPolicy::images(&UploadLimits::default())
    }

    #[test]
    fn test_add_accepts_valid_images() {
        let mut list = FileList::new();
        let rejected = list.add_files(
            vec![file("a.png", 100, "image/png"), file("b.jpg", 200, "image/jpeg")],
            &image_policy(),
        );
        assert!(rejected.is_empty());
        assert_eq!(list.len(), 2);
        assert_eq!(list.total_size(), 300);
    }

    #[test]
    fn test_add_rejects_wrong_type() {
        let mut list = FileList::new();
        let rejected = list.add_files(
            vec![file("doc.pdf", 100, "application/pdf")],
            &image_policy(),
        );
        assert_eq!(rejected.len(), 1);
        assert!(matches!(
            rejected[0].reason,
            RejectReason::UnsupportedType { .. }
        ));
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_rejects_oversized_file() {
        let limits = UploadLimits::default();
        let mut list = FileList::new();
        let rejected = list.add_files(
            vec![file("huge.png", limits.max_file_size + 1, "image/png")],
            &UploadPolicy::images(&limits),
        );
        assert_eq!(rejected.len(), 1);
        assert!(matches!(rejected[0].reason, RejectReason::TooLarge { .. }));
    }

    #[test]
    fn test_add_enforces_count_cap() {
        let limits = UploadLimits {
            max_files: 2,
            ..UploadLimits::default()
        };
        let policy = UploadPolicy::images(&limits);
        let mut list = FileList::new();
        let rejected = list.add_files(
            vec![
                file("a.png", 1, "image/png"),
                file("b.png", 1, "image/png"),
                file("c.png", 1, "image/png"),
            ],
            &policy,
        );
        assert_eq!(list.len(), 2);
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].reason, RejectReason::TooMany { max: 2 });
    }

    #[test]
    fn test_rejection_messages_read_as_plain_sentences() {
        let rejection = Rejection {
            name: "d.png".to_string(),
            reason: RejectReason::TooMany { max: 2 },
        };
        assert_eq!(
            rejection.to_string(),
            "'d.png' skipped: at most 2 files allowed"
        );

        let rejection = Rejection {
            name: "big.png".to_string(),
            reason: RejectReason::TooLarge {
                size: 2048,
                max: 1024,
            },
        };
        assert_eq!(
            rejection.to_string(),
            "'big.png' is 2 KB; the maximum size is 1 KB"
        );
    }

    #[test]
    fn test_remove_by_index_reindexes() {
        let mut list = FileList::new();
        list.add_files(
            vec![
                file("a.png", 1, "image/png"),
                file("b.png", 2, "image/png"),
                file("c.png", 3, "image/png"),
            ],
            &image_policy(),
        );

        let removed = list.remove(1).unwrap();
        assert_eq!(removed.name, "b.png");
        assert_eq!(list.len(), 2);
        assert_eq!(list.entries()[0].name, "a.png");
        assert_eq!(list.entries()[1].name, "c.png");
    }

    #[test]
    fn test_remove_out_of_range_is_none() {
        let mut list = FileList::new();
        assert!(list.remove(0).is_none());
    }

    #[test]
    fn test_pdf_policy_only_accepts_pdfs() {
        let policy = UploadPolicy::pdfs(&UploadLimits::default());
        let mut list = FileList::new();
        let rejected = list.add_files(
            vec![
                file("a.pdf", 10, "application/pdf"),
                file("b.png", 10, "image/png"),
            ],
            &policy,
        );
        assert_eq!(list.len(), 1);
        assert_eq!(rejected.len(), 1);
    }
}
