use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures_util::StreamExt;
use sham_ai::{AiError, ChatBackend, ChunkStream, RejectReason, SessionStatus, TurnOutcome};
use sham_common::locale::{
    CHAT_GREETING, CHAT_STREAM_ERROR, NOTICE_ADDRESS_COPIED, NOTICE_CHAT_BUSY, NOTICE_IBAN_COPIED,
    NOTICE_SHAM_CASH, NOTICE_XRP_SEND,
};
use sham_config::ShamConfig;

use super::core::ShamApp;
use super::types::{Modal, Screen, UiEvent};

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

type Reply = Vec<Result<String, AiError>>;

struct ScriptedBackend {
    replies: Mutex<VecDeque<Reply>>,
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn send_message_stream(&self, _message: &str) -> Result<ChunkStream, AiError> {
        let reply = self.replies.lock().unwrap().pop_front().unwrap_or_default();
        // Suspend before each chunk so other tasks observe the live turn.
        Ok(futures_util::stream::iter(reply)
            .then(|chunk| async move {
                tokio::task::yield_now().await;
                chunk
            })
            .boxed())
    }
}

struct Harness {
    app: ShamApp,
    out: SharedBuf,
    chat_out: SharedBuf,
}

fn harness(config: ShamConfig, replies: Vec<Reply>) -> Harness {
    let out = SharedBuf::default();
    let chat_out = SharedBuf::default();
    let mut app = ShamApp::new(
        config,
        Box::new(out.clone()),
        Box::new(chat_out.clone()),
        move || {
            Ok(Box::new(ScriptedBackend {
                replies: Mutex::new(replies.into()),
            }) as Box<dyn ChatBackend>)
        },
    );
    app.copy_text = copy_ok;
    Harness { app, out, chat_out }
}

fn ready(replies: Vec<Reply>) -> Harness {
    harness(ShamConfig::default(), replies)
}

fn unavailable() -> Harness {
    let out = SharedBuf::default();
    let app = ShamApp::new(
        ShamConfig::default(),
        Box::new(out.clone()),
        Box::new(SharedBuf::default()),
        || Err(AiError::NotConfigured("API_KEY is not set".into())),
    );
    Harness {
        app,
        out,
        chat_out: SharedBuf::default(),
    }
}

impl ShamApp {
    fn screen(&self) -> Screen {
        self.screen
    }

    fn modal(&self) -> Option<Modal> {
        self.modal
    }

    fn deposit_address(&self) -> Option<&str> {
        self.deposit_address.as_deref()
    }

    fn last_notice(&self) -> Option<&str> {
        self.notices.back().map(String::as_str)
    }
}

fn copy_ok(_: &str) -> bool {
    true
}

fn copy_fails(_: &str) -> bool {
    false
}

fn ok(chunks: &[&str]) -> Reply {
    chunks.iter().map(|c| Ok(c.to_string())).collect()
}

fn last_turn_text(app: &ShamApp) -> String {
    app.chat.with_renderer(|r| {
        r.transcript()
            .turns()
            .last()
            .map(|t| t.text().to_string())
            .unwrap_or_default()
    })
}

// -- Chat overlay --

#[tokio::test]
async fn missing_credential_disables_chat() {
    let mut h = unavailable();
    assert_eq!(h.app.chat_status(), SessionStatus::Unavailable);
    assert!(!h.app.fab_enabled());

    h.app.dispatch(UiEvent::OpenChat);
    assert!(!h.app.chat_open());

    let handle = h.app.dispatch(UiEvent::Submit("hello".into())).unwrap();
    assert_eq!(
        handle.await.unwrap(),
        TurnOutcome::Rejected(RejectReason::NotReady)
    );
    assert_eq!(h.app.chat.with_renderer(|r| r.transcript().len()), 0);
}

#[test]
fn disabled_chat_never_connects() {
    let mut config = ShamConfig::default();
    config.chat.enabled = false;
    let app = ShamApp::new(
        config,
        Box::new(io::sink()),
        Box::new(io::sink()),
        || panic!("connect must not be called"),
    );
    assert_eq!(app.chat_status(), SessionStatus::Unavailable);
    assert!(!app.fab_enabled());
}

#[test]
fn opening_chat_hides_fab_and_shows_greeting() {
    let mut h = ready(vec![]);
    assert!(h.app.fab_enabled());
    assert!(h.app.fab_visible());
    assert!(h.chat_out.contents().is_empty());

    h.app.dispatch(UiEvent::OpenChat);
    assert!(h.app.chat_open());
    assert!(!h.app.fab_visible());
    assert!(h.chat_out.contents().contains(CHAT_GREETING));

    h.app.dispatch(UiEvent::Close);
    assert!(!h.app.chat_open());
    assert!(h.app.fab_visible());
}

#[tokio::test]
async fn submitted_turn_streams_into_transcript() {
    let mut h = ready(vec![ok(&["شام", " باي", " هي خدمة..."])]);
    h.app.dispatch(UiEvent::OpenChat);

    let handle = h.app.dispatch(UiEvent::Submit("ما هي شام باي؟".into())).unwrap();
    assert_eq!(handle.await.unwrap(), TurnOutcome::Completed);

    assert_eq!(last_turn_text(&h.app), "شام باي هي خدمة...");
    assert!(!h.app.chat.is_locked());
    let shown = h.chat_out.contents();
    assert!(shown.contains("ما هي شام باي؟"));
    assert!(shown.contains("شام باي هي خدمة..."));
}

#[tokio::test]
async fn failed_turn_shows_error_and_unlocks() {
    let mut h = ready(vec![
        vec![Ok("شام".into()), Err(AiError::NetworkError("reset".into()))],
        ok(&["ok"]),
    ]);
    h.app.dispatch(UiEvent::OpenChat);

    let handle = h.app.dispatch(UiEvent::Submit("q1".into())).unwrap();
    assert_eq!(handle.await.unwrap(), TurnOutcome::Failed);
    assert_eq!(last_turn_text(&h.app), CHAT_STREAM_ERROR);

    let handle = h.app.dispatch(UiEvent::Submit("q2".into())).unwrap();
    assert_eq!(handle.await.unwrap(), TurnOutcome::Completed);
    assert_eq!(last_turn_text(&h.app), "ok");
}

#[tokio::test]
async fn second_submission_while_streaming_is_ignored() {
    let mut h = ready(vec![ok(&["first"]), ok(&["second"])]);
    h.app.dispatch(UiEvent::OpenChat);

    let first = h.app.dispatch(UiEvent::Submit("a".into())).unwrap();
    let second = h.app.dispatch(UiEvent::Submit("b".into())).unwrap();
    let (first, second) = tokio::join!(first, second);

    let outcomes = [first.unwrap(), second.unwrap()];
    assert!(outcomes.contains(&TurnOutcome::Completed));
    assert!(outcomes.contains(&TurnOutcome::Rejected(RejectReason::Busy)));
    // greeting + one user turn + one reply
    assert_eq!(h.app.chat.with_renderer(|r| r.transcript().len()), 3);
}

#[tokio::test]
async fn closed_overlay_keeps_streaming_and_replays_on_open() {
    let mut h = ready(vec![ok(&["hidden ", "reply"])]);
    h.app.dispatch(UiEvent::OpenChat);
    let handle = h.app.dispatch(UiEvent::Submit("q".into())).unwrap();
    h.app.dispatch(UiEvent::Close);

    assert_eq!(handle.await.unwrap(), TurnOutcome::Completed);
    assert!(!h.chat_out.contents().contains("hidden reply"));

    h.app.dispatch(UiEvent::OpenChat);
    assert!(h.chat_out.contents().contains("hidden reply"));
}

#[tokio::test]
async fn blank_submission_is_rejected() {
    let mut h = ready(vec![]);
    h.app.dispatch(UiEvent::OpenChat);
    let handle = h.app.dispatch(UiEvent::Submit("   ".into())).unwrap();
    assert_eq!(
        handle.await.unwrap(),
        TurnOutcome::Rejected(RejectReason::EmptyInput)
    );
    assert_eq!(h.app.chat.with_renderer(|r| r.transcript().len()), 1);
}

#[tokio::test]
async fn scroll_commands_redraw_older_turns() {
    let mut h = ready(vec![ok(&["first reply"]), ok(&["second reply"])]);
    h.app.dispatch(UiEvent::OpenChat);
    for q in ["q1", "q2"] {
        let handle = h.app.dispatch(UiEvent::Submit(q.into())).unwrap();
        assert_eq!(handle.await.unwrap(), TurnOutcome::Completed);
    }

    let before = h.chat_out.contents().len();
    h.app.dispatch(UiEvent::ScrollUp);
    let shown = h.chat_out.contents()[before..].to_string();
    // five turns, three scrolled out of view
    assert!(shown.contains(CHAT_GREETING));
    assert!(shown.contains("q1"));
    assert!(!shown.contains("first reply"));
    assert!(!shown.contains("second reply"));

    let before = h.chat_out.contents().len();
    h.app.dispatch(UiEvent::ScrollDown);
    assert!(h.chat_out.contents()[before..].contains("second reply"));
    assert_eq!(h.app.chat.with_renderer(|r| r.transcript().scroll_offset()), 0);
}

#[test]
fn history_commands_need_an_open_chat() {
    let mut h = ready(vec![]);
    h.app.dispatch(UiEvent::ScrollUp);
    h.app.dispatch(UiEvent::ClearChat);

    assert_eq!(h.app.chat.with_renderer(|r| r.transcript().scroll_offset()), 0);
    assert_eq!(h.app.chat.with_renderer(|r| r.transcript().len()), 1);
    assert!(h.chat_out.contents().is_empty());
}

#[tokio::test]
async fn clearing_chat_forgets_history() {
    let mut h = ready(vec![ok(&["a"]), ok(&["b"])]);
    h.app.dispatch(UiEvent::OpenChat);
    let handle = h.app.dispatch(UiEvent::Submit("q1".into())).unwrap();
    handle.await.unwrap();

    h.app.dispatch(UiEvent::ClearChat);
    assert!(h.app.chat.with_renderer(|r| r.transcript().is_empty()));

    let handle = h.app.dispatch(UiEvent::Submit("q2".into())).unwrap();
    assert_eq!(handle.await.unwrap(), TurnOutcome::Completed);
    assert_eq!(h.app.chat.with_renderer(|r| r.transcript().len()), 2);
    assert_eq!(last_turn_text(&h.app), "b");
}

#[tokio::test]
async fn clearing_chat_mid_reply_is_refused() {
    let mut h = ready(vec![ok(&["partial", " reply"])]);
    h.app.dispatch(UiEvent::OpenChat);
    let handle = h.app.dispatch(UiEvent::Submit("q".into())).unwrap();
    for _ in 0..100 {
        if h.app.chat.with_renderer(|r| r.transcript().is_streaming()) {
            break;
        }
        tokio::task::yield_now().await;
    }
    assert!(h.app.chat.with_renderer(|r| r.transcript().is_streaming()));

    h.app.dispatch(UiEvent::ClearChat);
    assert_eq!(h.app.last_notice(), Some(NOTICE_CHAT_BUSY));
    assert_eq!(handle.await.unwrap(), TurnOutcome::Completed);
    assert_eq!(h.app.chat.with_renderer(|r| r.transcript().len()), 3);
    assert_eq!(last_turn_text(&h.app), "partial reply");
}

#[test]
fn configured_greeting_is_used() {
    let mut config = ShamConfig::default();
    config.chat.greeting = "أهلاً".into();
    let mut h = harness(config, vec![]);
    h.app.dispatch(UiEvent::OpenChat);
    assert!(h.chat_out.contents().contains("أهلاً"));
}

// -- Navigation and dialogs --

#[test]
fn navigation_switches_screen() {
    let mut h = ready(vec![]);
    assert_eq!(h.app.screen(), Screen::Home);

    h.app.dispatch(UiEvent::Navigate(Screen::Cards));
    assert_eq!(h.app.screen(), Screen::Cards);
    let shown = h.out.contents();
    assert!(shown.contains("عمر أحمد"));
    assert!(shown.contains("**** **** **** 4829"));
    assert!(shown.contains("SY24 0987 0000 1234 5678 9012 34"));
}

#[test]
fn home_screen_welcomes_by_first_name() {
    let h = ready(vec![]);
    let screen = h.app.render_screen();
    assert!(screen.contains("مرحباً بك، عمر"));
    assert!(screen.contains("(س) سارة"));
}

#[test]
fn unavailable_chat_is_marked_on_screen() {
    let h = unavailable();
    assert!(h.app.render_screen().contains("(المساعد غير متاح)"));
}

#[test]
fn processing_transfer_dialogs_notifies_and_closes() {
    let mut h = ready(vec![]);

    h.app.dispatch(UiEvent::OpenModal(Modal::ShamCash));
    assert_eq!(h.app.modal(), Some(Modal::ShamCash));
    h.app.dispatch(UiEvent::Process);
    assert_eq!(h.app.modal(), None);
    assert_eq!(h.app.last_notice(), Some(NOTICE_SHAM_CASH));

    h.app.dispatch(UiEvent::OpenModal(Modal::XrpSend));
    h.app.dispatch(UiEvent::Process);
    assert_eq!(h.app.last_notice(), Some(NOTICE_XRP_SEND));
    assert!(h.out.contents().contains(NOTICE_XRP_SEND));
}

#[test]
fn processing_other_dialogs_does_nothing() {
    let mut h = ready(vec![]);
    h.app.dispatch(UiEvent::OpenModal(Modal::MyCode));
    h.app.dispatch(UiEvent::Process);
    assert_eq!(h.app.modal(), Some(Modal::MyCode));
    assert_eq!(h.app.last_notice(), None);
}

#[test]
fn close_prefers_chat_over_modal() {
    let mut h = ready(vec![]);
    h.app.dispatch(UiEvent::OpenModal(Modal::CryptoDeposit));
    h.app.dispatch(UiEvent::OpenChat);

    h.app.dispatch(UiEvent::Close);
    assert!(!h.app.chat_open());
    assert_eq!(h.app.modal(), Some(Modal::CryptoDeposit));

    h.app.dispatch(UiEvent::Close);
    assert_eq!(h.app.modal(), None);
}

#[test]
fn my_code_shows_qr_and_image_url() {
    let mut h = ready(vec![]);
    h.app.dispatch(UiEvent::OpenModal(Modal::MyCode));
    let shown = h.out.contents();
    assert!(shown.contains("https://api.qrserver.com/v1/create-qr-code/?size=200x200&data=%7B%22userAccount%22%3A%22SHAM-USER-12345%22"));
    assert!(shown.contains("SHAM-USER-12345"));
    assert!(shown.contains('█'));
}

// -- Wallet --

#[test]
fn selecting_coin_generates_address() {
    let mut h = ready(vec![]);
    h.app.dispatch(UiEvent::OpenModal(Modal::CryptoDeposit));
    h.app.dispatch(UiEvent::SelectCoin("USDT".into()));

    let address = h.app.deposit_address().unwrap().to_string();
    assert!(address.starts_with("0x...USDT..."));
    assert!(h.out.contents().contains(&address));

    h.app.dispatch(UiEvent::SelectCoin(String::new()));
    assert_eq!(h.app.deposit_address(), None);
}

#[test]
fn copy_iban_notifies_on_success_only() {
    let mut h = ready(vec![]);
    h.app.dispatch(UiEvent::CopyIban);
    assert_eq!(h.app.last_notice(), Some(NOTICE_IBAN_COPIED));

    let mut h = ready(vec![]);
    h.app.copy_text = copy_fails;
    h.app.dispatch(UiEvent::CopyIban);
    assert_eq!(h.app.last_notice(), None);
}

#[test]
fn copy_address_requires_a_selection() {
    let mut h = ready(vec![]);
    h.app.dispatch(UiEvent::CopyAddress);
    assert_eq!(h.app.last_notice(), None);

    h.app.dispatch(UiEvent::SelectCoin("BTC".into()));
    h.app.dispatch(UiEvent::CopyAddress);
    assert_eq!(h.app.last_notice(), Some(NOTICE_ADDRESS_COPIED));
}

#[test]
fn notices_are_capped() {
    let mut h = ready(vec![]);
    for _ in 0..40 {
        h.app.dispatch(UiEvent::AddToWallet);
    }
    assert_eq!(h.app.notices.len(), super::core::MAX_NOTICES);
}

// -- Scan to pay --

#[test]
fn scanning_identity_code_notifies_and_closes() {
    let mut h = ready(vec![]);
    h.app.dispatch(UiEvent::OpenModal(Modal::ScanPay));
    assert!(h.app.scanner.is_scanning());

    h.app.dispatch(UiEvent::Frame(Err(sham_platform::FrameError::NotFound)));
    assert_eq!(h.app.modal(), Some(Modal::ScanPay));
    assert_eq!(h.app.last_notice(), None);

    h.app.dispatch(UiEvent::Frame(Ok(
        r#"{"userAccount":"SHAM-USER-777","name":"سارة"}"#.into(),
    )));
    let notice = h.app.last_notice().unwrap();
    assert!(notice.contains("الاسم: سارة"));
    assert!(notice.contains("الحساب: SHAM-USER-777"));
    assert_eq!(h.app.modal(), None);
    assert!(!h.app.scanner.is_scanning());
}

#[test]
fn scanning_other_code_shows_raw_text() {
    let mut h = ready(vec![]);
    h.app.dispatch(UiEvent::OpenModal(Modal::ScanPay));
    h.app.dispatch(UiEvent::Frame(Ok("https://example.com".into())));
    assert!(h.app.last_notice().unwrap().ends_with("https://example.com"));
}

#[test]
fn closing_scan_dialog_stops_scanner() {
    let mut h = ready(vec![]);
    h.app.dispatch(UiEvent::OpenModal(Modal::ScanPay));
    h.app.dispatch(UiEvent::Close);
    assert!(!h.app.scanner.is_scanning());

    h.app.dispatch(UiEvent::Frame(Ok("late".into())));
    assert_eq!(h.app.last_notice(), None);
}

#[test]
fn reopening_scan_dialog_restarts_scanner() {
    let mut h = ready(vec![]);
    h.app.dispatch(UiEvent::OpenModal(Modal::ScanPay));
    h.app.dispatch(UiEvent::OpenModal(Modal::MyCode));
    assert!(!h.app.scanner.is_scanning());
    h.app.dispatch(UiEvent::OpenModal(Modal::ScanPay));
    assert!(h.app.scanner.is_scanning());
}

#[test]
fn quit_requests_exit() {
    let mut h = ready(vec![]);
    assert!(!h.app.should_exit());
    h.app.dispatch(UiEvent::Quit);
    assert!(h.app.should_exit());
}
