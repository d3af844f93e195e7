use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dropzone::{DragStatus, DropOutcome, RejectionCode};
use crate::format::format_file_size;

/// Why the most recent drop attempt was refused. Rendered inline by the
/// widget; never propagated to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The file is too large. Max size is {}.", format_file_size(*.max_size))]
    TooLarge { max_size: u64 },
    #[error("Invalid file type.")]
    InvalidType,
    #[error("You can only upload one file.")]
    TooManyFiles,
    #[error("The file is not supported.")]
    Unsupported,
}

impl ValidationError {
    /// Map a rejection reason code to its user-facing error. Codes outside
    /// the known set fall back to the catch-all message.
    pub fn from_rejection(code: &RejectionCode, max_size: Option<u64>) -> Self {
        match code {
            RejectionCode::FileTooLarge => Self::TooLarge {
                max_size: max_size.unwrap_or(0),
            },
            RejectionCode::FileInvalidType => Self::InvalidType,
            RejectionCode::TooManyFiles => Self::TooManyFiles,
            RejectionCode::Unrecognized(_) => Self::Unsupported,
        }
    }
}

/// Externally driven transfer state: the widget renders it, the caller owns
/// the actual network transfer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadProgress {
    /// Percent complete, 0-100.
    pub percent: u8,
    pub in_transit: bool,
}

/// What a drop event did to the widget, so the owner knows whether to
/// notify its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropResult<F> {
    /// A file was accepted; notify the caller with it.
    Accepted(F),
    /// The drop was refused; the error is now set, nothing to notify.
    Rejected,
    /// Nothing changed (locked widget, or an empty drop).
    Ignored,
}

/// Derived rendering state, recomputed on every view. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    Focused,
    DragAccept,
    DragReject,
    Disabled,
}

/// Explicit state machine behind the single-image dropzone.
///
/// `F` is the selected file, `P` the preview handle derived from it. The
/// preview is released by dropping it, so any RAII handle works: the
/// frontend uses `gloo_file::ObjectUrl` (revokes the object URL on drop),
/// tests use counting doubles. A preview exists if and only if a file is
/// selected, and each preview is released exactly once: on replacement, on
/// removal, or when the machine itself is dropped.
#[derive(Debug)]
pub struct SingleImage<F, P> {
    file: Option<F>,
    preview: Option<P>,
    error: Option<ValidationError>,
    progress: UploadProgress,
    disabled: bool,
}

impl<F, P> SingleImage<F, P> {
    pub fn new(initial: Option<F>, make_preview: impl FnOnce(&F) -> P) -> Self {
        let preview = initial.as_ref().map(make_preview);
        Self {
            file: initial,
            preview,
            error: None,
            progress: UploadProgress::default(),
            disabled: false,
        }
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn preview(&self) -> Option<&P> {
        self.preview.as_ref()
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn progress(&self) -> UploadProgress {
        self.progress
    }

    /// True while the widget must ignore drops and removal: caller-disabled
    /// or a transfer in flight.
    pub fn is_locked(&self) -> bool {
        self.disabled || self.progress.in_transit
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn set_progress(&mut self, percent: u8) {
        self.progress.percent = percent.min(100);
    }

    pub fn set_in_transit(&mut self, in_transit: bool) {
        self.progress.in_transit = in_transit;
    }

    pub fn sync_progress(&mut self, progress: UploadProgress) {
        self.set_progress(progress.percent);
        self.set_in_transit(progress.in_transit);
    }

    /// Apply one validated drop event.
    ///
    /// Fixed order within the call: clear the previous error, then either
    /// record the first rejection's error (keeping any previously selected
    /// file in place) or select the first accepted file, releasing the old
    /// preview before deriving the new one. Extra accepted files are
    /// silently ignored.
    pub fn accept_drop(
        &mut self,
        outcome: DropOutcome<F>,
        max_size: Option<u64>,
        make_preview: impl FnOnce(&F) -> P,
    ) -> DropResult<F>
    where
        F: Clone,
    {
        if self.is_locked() {
            return DropResult::Ignored;
        }

        self.error = None;

        if let Some(rejection) = outcome.rejected.first() {
            self.error = Some(ValidationError::from_rejection(&rejection.code, max_size));
            return DropResult::Rejected;
        }

        let Some(file) = outcome.accepted.into_iter().next() else {
            return DropResult::Ignored;
        };

        self.preview = None;
        self.preview = Some(make_preview(&file));
        self.file = Some(file.clone());

        DropResult::Accepted(file)
    }

    /// Clear the selection. Returns true exactly when something was removed
    /// and the owner must notify "none". Refused (no-op, false) when empty,
    /// disabled, or in transit.
    pub fn remove(&mut self) -> bool {
        if self.file.is_none() || self.is_locked() {
            return false;
        }

        self.file = None;
        self.preview = None;
        self.progress = UploadProgress::default();
        self.error = None;
        true
    }

    pub fn interaction(&self, drag: DragStatus, focused: bool) -> InteractionState {
        if self.is_locked() {
            return InteractionState::Disabled;
        }
        match drag {
            DragStatus::Reject => InteractionState::DragReject,
            DragStatus::Accept => InteractionState::DragAccept,
            DragStatus::None if focused => InteractionState::Focused,
            DragStatus::None => InteractionState::Idle,
        }
    }
}
