use std::sync::{mpsc, Arc};
use std::time::Duration;

use scraper_ui_host::{Clipboard, ClipboardError, MemoryClipboard, Scheduler};

#[derive(Debug, PartialEq, Eq)]
enum TestMsg {
    Fired(u32),
    Copied(Result<(), ClipboardError>),
}

const WAIT: Duration = Duration::from_secs(5);

#[test]
fn scheduled_messages_arrive_in_deadline_order() {
    let (tx, rx) = mpsc::channel();
    let scheduler = Scheduler::new(tx).expect("scheduler");

    scheduler.schedule(Duration::from_millis(120), TestMsg::Fired(2));
    scheduler.schedule(Duration::from_millis(10), TestMsg::Fired(1));

    assert_eq!(rx.recv_timeout(WAIT).unwrap(), TestMsg::Fired(1));
    assert_eq!(rx.recv_timeout(WAIT).unwrap(), TestMsg::Fired(2));
}

#[test]
fn clipboard_write_reports_completion() {
    let (tx, rx) = mpsc::channel();
    let scheduler = Scheduler::new(tx).expect("scheduler");
    let clipboard = Arc::new(MemoryClipboard::new());

    scheduler.write_clipboard(clipboard.clone(), "copied text".to_string(), TestMsg::Copied);

    assert_eq!(rx.recv_timeout(WAIT).unwrap(), TestMsg::Copied(Ok(())));
    assert_eq!(clipboard.latest().as_deref(), Some("copied text"));
}

struct RejectingClipboard;

#[async_trait::async_trait]
impl Clipboard for RejectingClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Rejected("permission denied".into()))
    }
}

#[test]
fn clipboard_failure_is_delivered_as_message() {
    let (tx, rx) = mpsc::channel();
    let scheduler = Scheduler::new(tx).expect("scheduler");
    let clipboard: Arc<dyn Clipboard> = Arc::new(RejectingClipboard);

    scheduler.write_clipboard(clipboard, "x".to_string(), TestMsg::Copied);

    assert_eq!(
        rx.recv_timeout(WAIT).unwrap(),
        TestMsg::Copied(Err(ClipboardError::Rejected("permission denied".into())))
    );
}

#[tokio::test]
async fn memory_clipboard_keeps_history() {
    let clipboard = MemoryClipboard::new();
    clipboard.write_text("a").await.unwrap();
    clipboard.write_text("b").await.unwrap();
    assert_eq!(clipboard.history(), vec!["a".to_string(), "b".to_string()]);
}
