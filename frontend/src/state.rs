//! Upload widget state machine.
//!
//! ```text
//!            select_file            begin_analysis          finish_analysis
//!   Empty ──────────────▶ PreviewReady ─────────────▶ Analyzing ─────────────▶ ResultShown
//!     ▲                        ▲                                                  │
//!     │                        └──────────── select_file ◀────────────────────────┤
//!     └──────────────────────────── reset (from any state) ◀──────────────────────┘
//! ```
//!
//! The machine is generic over the blob type so it can be driven by
//! `web_sys::File` in the browser and by plain values in unit tests.
//! Components only read derived view data ([`UploadWidget::result_view`],
//! [`UploadWidget::trigger_enabled`], ...) and never inspect the enum directly.

use std::fmt;

use crate::types::{AnalysisResult, AppResult, MediaKind, ResultView};

/// Identifies one selection, so a slow preview decode cannot land on a newer file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionId(u64);

/// Identifies one submitted request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// The file the user picked.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile<F> {
    pub blob: F,
    pub kind: MediaKind,
    pub mime: String,
}

/// A live selection and its decoded preview, once available.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection<F> {
    pub id: SelectionId,
    pub file: SelectedFile<F>,
    /// `data:` URL of the file, `None` while still decoding
    pub preview: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum WidgetState<F> {
    Empty,
    PreviewReady(Selection<F>),
    Analyzing {
        selection: Selection<F>,
        ticket: Ticket,
        /// Re-analysis keeps the previous result panel on screen
        result_visible: bool,
    },
    ResultShown {
        selection: Selection<F>,
        outcome: AppResult<AnalysisResult>,
    },
}

/// Why a transition was refused.
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetError {
    InvalidFileType(String),
    FileTooLarge { size: usize, limit: usize },
    NoFileSelected,
    AnalysisInFlight,
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetError::InvalidFileType(mime) => write!(f, "Unsupported file type: '{}'", mime),
            WidgetError::FileTooLarge { size, limit } => {
                write!(f, "File is {} bytes, limit is {} bytes", size, limit)
            }
            WidgetError::NoFileSelected => write!(f, "No file selected"),
            WidgetError::AnalysisInFlight => write!(f, "An analysis is already running"),
        }
    }
}

impl std::error::Error for WidgetError {}

/// The widget: current state plus the single outstanding request, if any.
///
/// `in_flight` lives outside [`WidgetState`] because a reset does not cancel
/// the request. Until its response arrives no new request may start.
#[derive(Clone, Debug)]
pub struct UploadWidget<F> {
    state: WidgetState<F>,
    in_flight: Option<Ticket>,
    next_id: u64,
}

/// The widget as used in the browser.
pub type BrowserWidget = UploadWidget<web_sys::File>;

impl<F> Default for UploadWidget<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> UploadWidget<F> {
    pub fn new() -> Self {
        Self {
            state: WidgetState::Empty,
            in_flight: None,
            next_id: 0,
        }
    }

    pub fn state(&self) -> &WidgetState<F> {
        &self.state
    }

    fn bump(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn selection(&self) -> Option<&Selection<F>> {
        match &self.state {
            WidgetState::Empty => None,
            WidgetState::PreviewReady(selection)
            | WidgetState::Analyzing { selection, .. }
            | WidgetState::ResultShown { selection, .. } => Some(selection),
        }
    }

    fn selection_mut(&mut self) -> Option<&mut Selection<F>> {
        match &mut self.state {
            WidgetState::Empty => None,
            WidgetState::PreviewReady(selection)
            | WidgetState::Analyzing { selection, .. }
            | WidgetState::ResultShown { selection, .. } => Some(selection),
        }
    }

    /// Store a new file. Rejected types leave the widget untouched.
    ///
    /// Any previous result is dropped. If a request is still outstanding
    /// its response will be discarded when it arrives.
    pub fn select_file(&mut self, blob: F, mime: &str) -> Result<SelectionId, WidgetError> {
        let kind = MediaKind::from_mime(mime)
            .ok_or_else(|| WidgetError::InvalidFileType(mime.to_string()))?;
        let id = SelectionId(self.bump());
        self.state = WidgetState::PreviewReady(Selection {
            id,
            file: SelectedFile {
                blob,
                kind,
                mime: mime.to_string(),
            },
            preview: None,
        });
        Ok(id)
    }

    /// Like [`select_file`](Self::select_file) but also enforces a size limit.
    pub fn select_file_checked(
        &mut self,
        blob: F,
        mime: &str,
        size: usize,
        limit: usize,
    ) -> Result<SelectionId, WidgetError> {
        MediaKind::from_mime(mime).ok_or_else(|| WidgetError::InvalidFileType(mime.to_string()))?;
        if size > limit {
            return Err(WidgetError::FileTooLarge { size, limit });
        }
        self.select_file(blob, mime)
    }

    /// Attach a decoded preview. Returns `false` when the selection it was
    /// decoded for is gone.
    pub fn preview_loaded(&mut self, id: SelectionId, data_url: String) -> bool {
        match self.selection_mut() {
            Some(selection) if selection.id == id => {
                selection.preview = Some(data_url);
                true
            }
            _ => false,
        }
    }

    /// Drop a selection whose preview could not be decoded. Returns `false`
    /// when that selection was already replaced or cleared.
    pub fn preview_failed(&mut self, id: SelectionId) -> bool {
        let current = self.selection().map(|selection| selection.id) == Some(id);
        if current {
            self.state = WidgetState::Empty;
        }
        current
    }

    /// Move to `Analyzing` and hand out the blob to send.
    pub fn begin_analysis(&mut self) -> Result<(Ticket, F), WidgetError>
    where
        F: Clone,
    {
        if self.in_flight.is_some() {
            return Err(WidgetError::AnalysisInFlight);
        }
        let (selection, result_visible) =
            match std::mem::replace(&mut self.state, WidgetState::Empty) {
                WidgetState::PreviewReady(selection) => (selection, false),
                WidgetState::ResultShown { selection, .. } => (selection, true),
                other => {
                    self.state = other;
                    return Err(WidgetError::NoFileSelected);
                }
            };
        let ticket = Ticket(self.bump());
        let blob = selection.file.blob.clone();
        self.in_flight = Some(ticket);
        self.state = WidgetState::Analyzing {
            selection,
            ticket,
            result_visible,
        };
        Ok((ticket, blob))
    }

    /// Completion step, run on success and failure alike. Always releases
    /// the in-flight slot for its ticket; the outcome is shown only if the
    /// widget is still waiting on that same ticket. Returns whether it was shown.
    pub fn finish_analysis(&mut self, ticket: Ticket, outcome: AppResult<AnalysisResult>) -> bool {
        if self.in_flight == Some(ticket) {
            self.in_flight = None;
        }
        match std::mem::replace(&mut self.state, WidgetState::Empty) {
            WidgetState::Analyzing {
                selection,
                ticket: current,
                ..
            } if current == ticket => {
                self.state = WidgetState::ResultShown { selection, outcome };
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    /// Back to `Empty` from anywhere.
    pub fn reset(&mut self) {
        self.state = WidgetState::Empty;
    }

    // -------------------------------------------------------------------------
    // View derivations
    // -------------------------------------------------------------------------

    pub fn is_empty(&self) -> bool {
        matches!(self.state, WidgetState::Empty)
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.state, WidgetState::Analyzing { .. })
    }

    pub fn preview_visible(&self) -> bool {
        !self.is_empty()
    }

    pub fn result_visible(&self) -> bool {
        match &self.state {
            WidgetState::ResultShown { .. } => true,
            WidgetState::Analyzing { result_visible, .. } => *result_visible,
            _ => false,
        }
    }

    /// Media kind of the current selection.
    pub fn kind(&self) -> Option<MediaKind> {
        self.selection().map(|s| s.file.kind)
    }

    /// Source for the preview element of `kind`, once decoded. At most one
    /// kind ever returns `Some`.
    pub fn preview_source(&self, kind: MediaKind) -> Option<&str> {
        self.selection()
            .filter(|s| s.file.kind == kind)
            .and_then(|s| s.preview.as_deref())
    }

    /// The submit control is clickable only with a file and no request outstanding.
    pub fn trigger_enabled(&self) -> bool {
        self.in_flight.is_none()
            && matches!(
                self.state,
                WidgetState::PreviewReady(_) | WidgetState::ResultShown { .. }
            )
    }

    pub fn result_view(&self) -> Option<ResultView> {
        match &self.state {
            WidgetState::Analyzing { .. } => Some(ResultView::processing()),
            WidgetState::ResultShown { outcome, .. } => Some(match outcome {
                Ok(result) => ResultView::from(result),
                Err(_) => ResultView::failed(),
            }),
            _ => None,
        }
    }
}
