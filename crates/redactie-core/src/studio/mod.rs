//! Studio: owner of the document, the preview, and the assist busy flag
//!
//! All document mutation goes through two entry points: `set_document` for
//! edits and `finish_assist` (via `poll_assist`/`wait_assist`) for assist
//! results. At most one assist request is in flight; starting another while
//! busy is ignored rather than queued.

mod document;

use std::sync::Arc;

use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;
use tracing::{debug, error, info, warn};

use crate::ai::{AiClient, AssistError, AssistRequest, PromptLanguage, TaskKind};
use crate::config::StudioConfig;
use crate::render::PreviewCache;

pub use document::{Document, WELCOME_DOCUMENT};

type AssistResult = Result<Option<String>, AssistError>;

/// What happened to a finished assist request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistOutcome {
    /// Generated text was spliced into the document
    Applied { task: TaskKind },
    /// The response carried no text; document untouched
    NoText { task: TaskKind },
    /// The request failed; document untouched, `alert` is for the user
    Failed { task: TaskKind, alert: String },
}

impl AssistOutcome {
    pub fn task(&self) -> TaskKind {
        match self {
            AssistOutcome::Applied { task }
            | AssistOutcome::NoText { task }
            | AssistOutcome::Failed { task, .. } => *task,
        }
    }
}

/// The request in flight and the channel its result arrives on
struct PendingAssist {
    request: AssistRequest,
    rx: oneshot::Receiver<AssistResult>,
}

pub struct Studio {
    client: Arc<AiClient>,
    language: PromptLanguage,
    document: Document,
    preview: PreviewCache,
    busy: bool,
    pending: Option<PendingAssist>,
}

impl Studio {
    /// Create a studio holding the welcome document
    pub fn new(config: &StudioConfig) -> Result<Self, AssistError> {
        Ok(Self::with_client(AiClient::new(config)?, config.language))
    }

    pub fn with_client(client: AiClient, language: PromptLanguage) -> Self {
        Self {
            client: Arc::new(client),
            language,
            document: Document::default(),
            preview: PreviewCache::new(),
            busy: false,
            pending: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Edit entry point: replace the document text
    pub fn set_document(&mut self, text: impl Into<Document>) {
        self.document = text.into();
    }

    /// Rendered HTML for the current document, memoized on its value
    pub fn preview(&mut self) -> Arc<str> {
        self.preview.get_or_render(&self.document)
    }

    /// Number of real renders so far
    pub fn render_count(&self) -> usize {
        self.preview.render_count()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Start an assist task in the background
    ///
    /// Returns `false` without sending anything if a request is already in
    /// flight. Must be called from within a tokio runtime.
    pub fn start_assist(&mut self, task: TaskKind) -> bool {
        if self.busy {
            warn!(task = %task, "Assist already running, ignoring request");
            return false;
        }
        self.busy = true;

        let request = AssistRequest::new(task, &self.document, self.language);
        let (tx, rx) = oneshot::channel();
        let client = Arc::clone(&self.client);
        let call = request.clone();

        tokio::spawn(async move {
            let result = client.run(&call).await;
            if tx.send(result).is_err() {
                debug!(task = %call.task, "Assist result dropped, studio went away");
            }
        });

        info!(task = %task, "Assist started");
        self.pending = Some(PendingAssist { request, rx });
        true
    }

    /// Collect the result if it has arrived, without waiting
    pub fn poll_assist(&mut self) -> Option<AssistOutcome> {
        let pending = self.pending.as_mut()?;
        let result = match pending.rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => Err(AssistError::Interrupted),
        };

        let pending = self.pending.take()?;
        Some(self.finish_assist(&pending.request, result))
    }

    /// Wait for the in-flight request, if any
    ///
    /// Cancel-safe: the request stays pending until its result has arrived,
    /// so a dropped wait can be followed by `poll_assist` or another wait.
    pub async fn wait_assist(&mut self) -> Option<AssistOutcome> {
        let pending = self.pending.as_mut()?;
        let result = (&mut pending.rx)
            .await
            .unwrap_or(Err(AssistError::Interrupted));

        let pending = self.pending.take()?;
        Some(self.finish_assist(&pending.request, result))
    }

    /// Start `task` and wait for it; `None` if another request is in flight
    pub async fn assist(&mut self, task: TaskKind) -> Option<AssistOutcome> {
        if !self.start_assist(task) {
            return None;
        }
        self.wait_assist().await
    }

    /// Completion entry point: apply the result and clear the busy flag
    fn finish_assist(&mut self, request: &AssistRequest, result: AssistResult) -> AssistOutcome {
        let task = request.task;
        let outcome = match result {
            Ok(Some(text)) => {
                self.document = Document::new(request.apply(&text));
                info!(task = %task, "Assist applied");
                AssistOutcome::Applied { task }
            }
            Ok(None) => {
                debug!(task = %task, "Assist response had no text");
                AssistOutcome::NoText { task }
            }
            Err(e) => {
                error!(task = %task, error = %e, "Assist request failed");
                AssistOutcome::Failed {
                    task,
                    alert: self.language.failure_alert().to_string(),
                }
            }
        };
        self.busy = false;
        outcome
    }
}
