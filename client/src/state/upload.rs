//! File-intake status machine for the uploader.
//!
//! `Idle -> Uploading -> Processing -> Complete`, or `Idle -> Error` for a
//! file that is not audio/video. `Complete` and `Error` are left only through
//! [`UploadState::reset`].

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// MIME-type prefixes the uploader accepts.
pub const ACCEPTED_MEDIA_PREFIXES: [&str; 2] = ["audio/", "video/"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
    Processing,
    Complete,
    Error,
}

impl UploadStatus {
    /// Card headline for this status.
    pub fn headline(self) -> &'static str {
        match self {
            Self::Idle => "Upload your meeting file",
            Self::Uploading => "Uploading...",
            Self::Processing => "Processing audio/video...",
            Self::Complete => "Upload complete!",
            Self::Error => "Upload failed. Please try again.",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Idle => "⇪",
            Self::Uploading | Self::Processing => "⏱",
            Self::Complete => "✔",
            Self::Error => "⚠",
        }
    }

    pub fn is_busy(self) -> bool {
        matches!(self, Self::Uploading | Self::Processing)
    }
}

/// Step reported by the upload simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadStep {
    Progress(u8),
    Processing,
    Complete(String),
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("unsupported media type '{0}': expected audio or video")]
    UnsupportedMediaType(String),
    #[error("an upload is already in progress")]
    Busy,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadState {
    pub status: UploadStatus,
    /// Upload percentage, 0-100.
    pub progress: u8,
    pub file_name: String,
    /// Identifier surfaced on completion.
    pub file_id: Option<String>,
    /// A file is being dragged over the drop zone.
    pub drag_active: bool,
}

pub fn is_accepted_media_type(media_type: &str) -> bool {
    ACCEPTED_MEDIA_PREFIXES.iter().any(|prefix| media_type.starts_with(prefix))
}

impl UploadState {
    /// Accept a picked or dropped file and start uploading it.
    ///
    /// # Errors
    ///
    /// [`UploadError::Busy`] when not idle (state untouched), or
    /// [`UploadError::UnsupportedMediaType`] after moving to `Error`.
    pub fn select_file(&mut self, name: &str, media_type: &str) -> Result<(), UploadError> {
        if self.status != UploadStatus::Idle {
            return Err(UploadError::Busy);
        }
        self.drag_active = false;
        if !is_accepted_media_type(media_type) {
            self.status = UploadStatus::Error;
            return Err(UploadError::UnsupportedMediaType(media_type.to_owned()));
        }
        name.clone_into(&mut self.file_name);
        self.progress = 0;
        self.status = UploadStatus::Uploading;
        Ok(())
    }

    /// Apply a simulation step. Steps that would move backwards or skip a
    /// stage are ignored and return `false`.
    pub fn apply(&mut self, step: UploadStep) -> bool {
        match (self.status, step) {
            (UploadStatus::Uploading, UploadStep::Progress(pct)) => {
                self.progress = pct.min(100);
                true
            }
            (UploadStatus::Uploading, UploadStep::Processing) => {
                self.status = UploadStatus::Processing;
                true
            }
            (UploadStatus::Processing, UploadStep::Complete(file_id)) => {
                self.status = UploadStatus::Complete;
                self.file_id = Some(file_id);
                true
            }
            _ => false,
        }
    }

    /// Return to `Idle` with no file selected.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Detail line shown under the file name while busy.
    pub fn detail(&self) -> String {
        match self.status {
            UploadStatus::Uploading => format!("{}% uploaded", self.progress),
            UploadStatus::Processing => "Analyzing content...".to_owned(),
            _ => String::new(),
        }
    }
}
