//! Fire-and-forget timers and async effect execution on a background tokio runtime.

use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use thiserror::Error;
use ui_logging::{ui_debug, ui_trace};

use crate::clipboard::{Clipboard, ClipboardError};

#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

type Job = Box<dyn FnOnce(&tokio::runtime::Runtime) + Send>;

/// Delivers messages of type `M` back to the event loop after a delay or when
/// an async operation completes. Dropping every handle stops the worker thread;
/// timers already sleeping are abandoned.
pub struct Scheduler<M> {
    job_tx: mpsc::Sender<Job>,
    msg_tx: mpsc::Sender<M>,
}

impl<M> Clone for Scheduler<M> {
    fn clone(&self) -> Self {
        Self {
            job_tx: self.job_tx.clone(),
            msg_tx: self.msg_tx.clone(),
        }
    }
}

impl<M: Send + 'static> Scheduler<M> {
    pub fn new(msg_tx: mpsc::Sender<M>) -> Result<Self, HostError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .thread_name("scraper-ui-timers")
            .build()?;
        let (job_tx, job_rx) = mpsc::channel::<Job>();

        thread::spawn(move || {
            while let Ok(job) = job_rx.recv() {
                job(&runtime);
            }
            ui_debug!("scheduler stopped");
        });

        Ok(Self { job_tx, msg_tx })
    }

    /// Sends `msg` after `after` has elapsed.
    pub fn schedule(&self, after: Duration, msg: M) {
        let msg_tx = self.msg_tx.clone();
        self.submit(Box::new(move |runtime| {
            runtime.spawn(async move {
                tokio::time::sleep(after).await;
                ui_trace!("timer fired after {:?}", after);
                let _ = msg_tx.send(msg);
            });
        }));
    }

    /// Writes `text` to `clipboard` and sends the message built from the result.
    pub fn write_clipboard<C, F>(&self, clipboard: Arc<C>, text: String, on_done: F)
    where
        C: Clipboard + ?Sized + 'static,
        F: FnOnce(Result<(), ClipboardError>) -> M + Send + 'static,
    {
        let msg_tx = self.msg_tx.clone();
        self.submit(Box::new(move |runtime| {
            runtime.spawn(async move {
                let result = clipboard.write_text(&text).await;
                let _ = msg_tx.send(on_done(result));
            });
        }));
    }

    fn submit(&self, job: Job) {
        if self.job_tx.send(job).is_err() {
            ui_debug!("scheduler gone; job dropped");
        }
    }
}
