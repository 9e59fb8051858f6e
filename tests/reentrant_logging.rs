//! A log callback may render content itself, which logs again.
//!
//! Lives in its own test binary because the callback is process-global.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use richlabel::{ContentItem, ContentModifier, LogLevel, clear_log_callback, render, set_log_callback};

fn bad_color_item() -> ContentItem {
    ContentItem::text("Only $N$ left")
        .with_modifier(ContentModifier::color("$N$", "3", "not-a-color"))
}

#[test]
fn test_log_callback_can_render() {
    let warnings = Arc::new(AtomicUsize::new(0));
    let nested = Arc::new(AtomicBool::new(false));
    {
        let warnings = Arc::clone(&warnings);
        let nested = Arc::clone(&nested);
        set_log_callback(move |level, _message| {
            if level != LogLevel::Warn {
                return;
            }
            warnings.fetch_add(1, Ordering::SeqCst);
            if !nested.swap(true, Ordering::SeqCst) {
                let rendered = render(&bad_color_item()).unwrap();
                assert_eq!(rendered.text(), "Only 3 left");
            }
        });
    }

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let rendered = render(&bad_color_item()).unwrap();
        tx.send(rendered.text()).unwrap();
    });
    let text = rx
        .recv_timeout(Duration::from_secs(10))
        .expect("render inside a log callback must not block");
    clear_log_callback();

    assert_eq!(text, "Only 3 left");
    assert!(nested.load(Ordering::SeqCst));
    assert!(warnings.load(Ordering::SeqCst) >= 2);
}
