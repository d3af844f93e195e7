use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Minimal view of a dropped or picked file, just enough to validate it.
/// The frontend implements this for `gloo_file::File`; tests implement it
/// for plain structs.
pub trait FileMeta {
    fn name(&self) -> String;
    fn size(&self) -> u64;
    fn mime(&self) -> String;
}

/// Caller-facing dropzone options. Single-file mode is structural and not
/// configurable here; the widget owns multiplicity and its own disabled flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropzoneConfig {
    /// Accepted MIME patterns, e.g. `"image/*"` or `"image/png"`.
    /// An empty list accepts every type.
    pub accept: Vec<String>,
    /// Maximum file size in bytes. `None` means unlimited.
    pub max_size: Option<u64>,
}

impl DropzoneConfig {
    pub fn images(max_size: Option<u64>) -> Self {
        Self {
            accept: vec!["image/*".to_string()],
            max_size,
        }
    }

    pub fn accepts_mime(&self, mime: &str) -> bool {
        if self.accept.is_empty() {
            return true;
        }
        self.accept.iter().any(|pattern| mime_matches(pattern, mime))
    }
}

fn mime_matches(pattern: &str, mime: &str) -> bool {
    let pattern = pattern.trim();
    if pattern == "*" || pattern == "*/*" {
        return true;
    }
    if let Some(prefix) = pattern.strip_suffix("/*") {
        return mime
            .split('/')
            .next()
            .is_some_and(|top| top.eq_ignore_ascii_case(prefix));
    }
    pattern.eq_ignore_ascii_case(mime)
}

/// Structured reason codes reported for rejected files. String forms match
/// the wire codes of the original dropzone contract.
#[derive(Debug, Clone, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum RejectionCode {
    FileTooLarge,
    FileInvalidType,
    TooManyFiles,
    #[strum(default)]
    Unrecognized(String),
}

/// One rejected file and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub file_name: String,
    pub code: RejectionCode,
}

/// Result of validating one drop event: the files that passed and the
/// rejections for those that did not.
#[derive(Debug, Clone)]
pub struct DropOutcome<F> {
    pub accepted: Vec<F>,
    pub rejected: Vec<Rejection>,
}

impl<F> Default for DropOutcome<F> {
    fn default() -> Self {
        Self {
            accepted: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

/// Validate the files of a single drop event against the config.
///
/// In single-file mode a drop of more than one file rejects all of them
/// with `too-many-files` rather than picking a winner. Per file, the type
/// filter is checked before the size limit.
pub fn check_files<F: FileMeta>(config: &DropzoneConfig, files: Vec<F>) -> DropOutcome<F> {
    let mut outcome = DropOutcome {
        accepted: Vec::new(),
        rejected: Vec::new(),
    };

    if files.len() > 1 {
        outcome.rejected = files
            .iter()
            .map(|file| Rejection {
                file_name: file.name(),
                code: RejectionCode::TooManyFiles,
            })
            .collect();
        return outcome;
    }

    for file in files {
        if !config.accepts_mime(&file.mime()) {
            outcome.rejected.push(Rejection {
                file_name: file.name(),
                code: RejectionCode::FileInvalidType,
            });
        } else if config.max_size.is_some_and(|max| file.size() > max) {
            outcome.rejected.push(Rejection {
                file_name: file.name(),
                code: RejectionCode::FileTooLarge,
            });
        } else {
            outcome.accepted.push(file);
        }
    }

    outcome
}

/// One item of an in-flight drag, as advertised by the browser before the
/// drop happens. Sizes are unknown at this point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragItem {
    pub kind: String,
    pub mime: String,
}

/// Live classification of the current drag interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragStatus {
    #[default]
    None,
    Accept,
    Reject,
}

/// Classify a hover: accept when everything being dragged is a file whose
/// advertised MIME passes the filter, reject otherwise. Browsers that hide
/// item details mid-drag yield an empty list, which classifies as accept.
pub fn classify_drag(config: &DropzoneConfig, items: &[DragItem]) -> DragStatus {
    let all_pass = items
        .iter()
        .all(|item| item.kind == "file" && config.accepts_mime(&item.mime));
    if all_pass {
        DragStatus::Accept
    } else {
        DragStatus::Reject
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::FileMeta;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) struct TestFile {
        pub name: String,
        pub size: u64,
        pub mime: String,
    }

    impl TestFile {
        pub fn new(name: &str, size: u64, mime: &str) -> Self {
            Self {
                name: name.to_string(),
                size,
                mime: mime.to_string(),
            }
        }
    }

    impl FileMeta for TestFile {
        fn name(&self) -> String {
            self.name.clone()
        }
        fn size(&self) -> u64 {
            self.size
        }
        fn mime(&self) -> String {
            self.mime.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::TestFile;
    use super::*;
    use std::str::FromStr;

    fn image_config(max_size: Option<u64>) -> DropzoneConfig {
        DropzoneConfig::images(max_size)
    }

    #[test]
    fn rejection_codes_round_trip_their_wire_form() {
        assert_eq!(RejectionCode::FileTooLarge.to_string(), "file-too-large");
        assert_eq!(
            RejectionCode::FileInvalidType.to_string(),
            "file-invalid-type"
        );
        assert_eq!(RejectionCode::TooManyFiles.to_string(), "too-many-files");

        assert_eq!(
            RejectionCode::from_str("file-too-large").unwrap(),
            RejectionCode::FileTooLarge
        );
        assert_eq!(
            RejectionCode::from_str("some-future-code").unwrap(),
            RejectionCode::Unrecognized("some-future-code".to_string())
        );
    }

    #[test]
    fn single_valid_image_is_accepted() {
        let outcome = check_files(
            &image_config(Some(2_000_000)),
            vec![TestFile::new("cover.png", 120_000, "image/png")],
        );
        assert_eq!(outcome.accepted.len(), 1);
        assert!(outcome.rejected.is_empty());
    }

    #[test]
    fn multiple_files_reject_everything() {
        let outcome = check_files(
            &image_config(None),
            vec![
                TestFile::new("a.png", 10, "image/png"),
                TestFile::new("b.png", 10, "image/png"),
            ],
        );
        assert!(outcome.accepted.is_empty());
        assert_eq!(outcome.rejected.len(), 2);
        assert!(outcome
            .rejected
            .iter()
            .all(|r| r.code == RejectionCode::TooManyFiles));
    }

    #[test]
    fn wrong_type_is_rejected_before_size() {
        let outcome = check_files(
            &image_config(Some(100)),
            vec![TestFile::new("notes.pdf", 1_000, "application/pdf")],
        );
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].code, RejectionCode::FileInvalidType);
        assert_eq!(outcome.rejected[0].file_name, "notes.pdf");
    }

    #[test]
    fn oversize_file_is_rejected() {
        let outcome = check_files(
            &image_config(Some(2_000_000)),
            vec![TestFile::new("huge.jpg", 2_000_001, "image/jpeg")],
        );
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].code, RejectionCode::FileTooLarge);
    }

    #[test]
    fn wildcard_and_exact_patterns() {
        let config = DropzoneConfig {
            accept: vec!["image/*".to_string(), "application/pdf".to_string()],
            max_size: None,
        };
        assert!(config.accepts_mime("image/webp"));
        assert!(config.accepts_mime("IMAGE/PNG"));
        assert!(config.accepts_mime("application/pdf"));
        assert!(!config.accepts_mime("text/plain"));

        let anything = DropzoneConfig::default();
        assert!(anything.accepts_mime("video/mp4"));
    }

    #[test]
    fn drag_classification() {
        let config = image_config(None);
        let image = DragItem {
            kind: "file".to_string(),
            mime: "image/png".to_string(),
        };
        let text = DragItem {
            kind: "string".to_string(),
            mime: "text/plain".to_string(),
        };
        let pdf = DragItem {
            kind: "file".to_string(),
            mime: "application/pdf".to_string(),
        };

        assert_eq!(classify_drag(&config, &[image.clone()]), DragStatus::Accept);
        assert_eq!(classify_drag(&config, &[image.clone(), pdf]), DragStatus::Reject);
        assert_eq!(classify_drag(&config, &[text]), DragStatus::Reject);
        // Browsers may hide item details mid-drag.
        assert_eq!(classify_drag(&config, &[]), DragStatus::Accept);
    }
}
