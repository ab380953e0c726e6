//! Integration test: script calls through an attached engine session.
//!
//! A fake engine records console lines; a recording launcher stands in for
//! the browser.

use std::ffi::{c_void, CStr};
use std::sync::{Arc, Mutex};

use aaou_core::host::{EngineHost, LogSink};
use aaou_core::launcher::RecordingLauncher;
use aaou_core::lifecycle::EngineSession;
use aaou_core::protocol::Protocol;
use aaou_core::url_request::{UrlOpener, MAX_URL_LEN};

#[derive(Default)]
struct ConsoleEngine {
    console: Mutex<Vec<String>>,
}

impl LogSink for ConsoleEngine {
    fn log_line(&self, line: &str) {
        self.console.lock().unwrap().push(line.to_string());
    }
}

impl EngineHost for ConsoleEngine {
    fn interface_version(&self) -> i32 {
        26
    }
    fn abort_game(&self, reason: &str) {
        panic!("unexpected abort: {reason}");
    }
    fn register_script_function(&self, _name: &'static CStr, _address: *const c_void) {}
}

fn session() -> (EngineSession<ConsoleEngine>, Arc<RecordingLauncher>) {
    let launcher = Arc::new(RecordingLauncher::new());
    let opener = UrlOpener::new(launcher.clone());
    let session =
        EngineSession::attach(ConsoleEngine::default(), std::ptr::null(), opener).unwrap();
    (session, launcher)
}

fn console(session: &EngineSession<ConsoleEngine>) -> Vec<String> {
    session.engine().console.lock().unwrap().clone()
}

#[test]
fn documented_examples() {
    let (session, launcher) = session();

    assert!(session.open_url(Protocol::Https, Some(b" example.com/page ")));
    assert!(!session.open_url(Protocol::Https, Some(b"http://example.com")));
    assert!(!session.open_url(Protocol::Http, Some(b"")));
    assert!(!session.open_url(Protocol::Http, Some(b":foo")));
    assert!(session.open_url(Protocol::Http, Some(b"a\tb\nc")));

    assert_eq!(
        launcher.opened(),
        vec!["https://example.com/page", "http://abc"]
    );
    assert_eq!(
        console(&session),
        vec![
            "AppOpenURL: success launching url",
            "AppOpenURL: URL included protocol specifiers",
            "AppOpenURL: empty URL received",
            "AppOpenURL: URL included protocol specifiers",
            "AppOpenURL: success launching url",
        ]
    );
}

#[test]
fn one_console_line_per_call() {
    let (session, _launcher) = session();
    let oversized = vec![b'z'; MAX_URL_LEN];
    let inputs: [Option<&[u8]>; 6] = [
        None,
        Some(b"   "),
        Some(b"ok.example"),
        Some(b"x://y"),
        Some(&oversized[..]),
        Some(b"\xfe\xff"),
    ];
    for (i, raw) in inputs.iter().enumerate() {
        session.open_url(Protocol::from_raw(i as i32), *raw);
        assert_eq!(console(&session).len(), i + 1);
    }
    assert_eq!(
        console(&session),
        vec![
            "AppOpenURL: empty URL received",
            "AppOpenURL: URL was empty after clean up",
            "AppOpenURL: success launching url",
            "AppOpenURL: URL included protocol specifiers",
            "AppOpenURL: URL is too big",
            "AppOpenURL: URL is not valid UTF-8",
        ]
    );
}

#[test]
fn out_of_range_protocol_opens_https() {
    let (session, launcher) = session();
    for raw in [2, -1, 99] {
        assert!(session.open_url(Protocol::from_raw(raw), Some(b"example.com")));
    }
    assert!(launcher.opened().iter().all(|u| u == "https://example.com"));
    assert_eq!(launcher.opened().len(), 3);
}

#[test]
fn launcher_failure_is_reported_not_fatal() {
    let launcher = Arc::new(RecordingLauncher::failing("xdg-open missing"));
    let session = EngineSession::attach(
        ConsoleEngine::default(),
        std::ptr::null(),
        UrlOpener::new(launcher.clone()),
    )
    .unwrap();

    assert!(!session.open_url(Protocol::Https, Some(b"example.com")));
    assert!(!session.open_url(Protocol::Https, Some(b"example.com")));
    assert_eq!(
        console(&session),
        vec![
            "AppOpenURL: failed to launch url",
            "AppOpenURL: failed to launch url"
        ]
    );
}
