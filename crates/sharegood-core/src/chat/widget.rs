//! Chat widget session controller.
//!
//! `ChatWidget` owns the in-memory message list of one widget session, the
//! "bot is typing" flag and the open/closed state. Sending a message appends
//! it, raises the typing flag and schedules the resolver to answer after the
//! configured delay. The scheduled reply is a cancellable task: closing,
//! resetting or dropping the widget cancels it, and a superseded timer is
//! recognised by its generation number and ignored.

use std::sync::Arc;

use sharegood_types::chat::ChatMessage;
use sharegood_types::config::WidgetSettings;
use sharegood_types::error::WidgetError;
use sharegood_types::event::WidgetEvent;
use tokio::runtime::Handle;
use tokio::sync::{Mutex, broadcast, watch};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace};

use crate::event::EventBus;
use crate::resolver::{ResponseResolver, RuleSet};

/// A reply waiting for its delay to elapse.
struct PendingReply {
    generation: u64,
    /// The user text being answered.
    prompt: String,
    cancel: CancellationToken,
}

struct WidgetState {
    messages: Vec<ChatMessage>,
    is_open: bool,
    is_typing: bool,
    pending: Option<PendingReply>,
    /// Incremented for every scheduled reply.
    generation: u64,
}

struct WidgetInner {
    state: Mutex<WidgetState>,
    resolver: Arc<dyn ResponseResolver>,
    settings: WidgetSettings,
    events: EventBus,
    /// `true` whenever no reply is pending.
    idle: watch::Sender<bool>,
    /// Parent of every reply timer; cancelled when the widget is dropped.
    lifetime: CancellationToken,
}

impl WidgetInner {
    fn append(&self, state: &mut WidgetState, message: ChatMessage) {
        state.messages.push(message.clone());
        self.events.publish(WidgetEvent::MessageAppended { message });
    }

    fn set_typing(&self, state: &mut WidgetState, is_typing: bool) {
        if state.is_typing != is_typing {
            state.is_typing = is_typing;
            self.events.publish(WidgetEvent::TypingChanged { is_typing });
        }
    }

    /// Resolve and append the reply for `pending`.
    fn complete(&self, state: &mut WidgetState, pending: PendingReply) {
        pending.cancel.cancel();
        let reply = self.resolver.resolve(&pending.prompt, &state.messages);
        self.append(state, ChatMessage::bot(reply));
        self.set_typing(state, false);
        self.idle.send_replace(true);
    }

    /// Cancel the pending reply without delivering it. Returns whether one existed.
    fn drop_pending(&self, state: &mut WidgetState) -> bool {
        let Some(pending) = state.pending.take() else {
            return false;
        };
        pending.cancel.cancel();
        self.set_typing(state, false);
        self.idle.send_replace(true);
        trace!(generation = pending.generation, "pending reply cancelled");
        true
    }

    fn show(&self, state: &mut WidgetState) {
        state.is_open = true;
        info!("chat widget opened");
        self.events.publish(WidgetEvent::Opened);
    }

    fn hide(&self, state: &mut WidgetState) {
        state.is_open = false;
        let dropped_reply = self.drop_pending(state);
        info!(dropped_reply, "chat widget closed");
        self.events.publish(WidgetEvent::Closed { dropped_reply });
    }

    /// Timer callback: deliver the reply if it is still the pending one.
    async fn deliver(&self, generation: u64) {
        let mut state = self.state.lock().await;
        match state.pending.take() {
            Some(pending) if pending.generation == generation => self.complete(&mut state, pending),
            other => {
                state.pending = other;
                trace!(generation, "stale reply timer ignored");
            }
        }
    }
}

/// One chat widget session.
///
/// The session ends when the widget is dropped; any reply still pending at
/// that point is cancelled.
pub struct ChatWidget {
    inner: Arc<WidgetInner>,
}

impl ChatWidget {
    /// Create a widget that answers with `resolver`.
    ///
    /// The message list starts with the configured greeting, and the widget
    /// starts open only if `settings.start_open` is set.
    pub fn new(resolver: Arc<dyn ResponseResolver>, settings: WidgetSettings, events: EventBus) -> Self {
        let state = WidgetState {
            messages: vec![ChatMessage::bot(settings.greeting.clone())],
            is_open: settings.start_open,
            is_typing: false,
            pending: None,
            generation: 0,
        };
        let (idle, _) = watch::channel(true);

        Self {
            inner: Arc::new(WidgetInner {
                state: Mutex::new(state),
                resolver,
                settings,
                events,
                idle,
                lifetime: CancellationToken::new(),
            }),
        }
    }

    /// Create a widget backed by the built-in ShareGood rule table.
    pub fn with_builtin_rules(settings: WidgetSettings) -> Self {
        Self::new(Arc::new(RuleSet::builtin().clone()), settings, EventBus::default())
    }

    pub fn settings(&self) -> &WidgetSettings {
        &self.inner.settings
    }

    pub fn subscribe(&self) -> broadcast::Receiver<WidgetEvent> {
        self.inner.events.subscribe()
    }

    /// Show the widget. Returns `false` if it was already open.
    pub async fn open(&self) -> bool {
        let mut state = self.inner.state.lock().await;
        if state.is_open {
            return false;
        }
        self.inner.show(&mut state);
        true
    }

    /// Hide the widget, dropping any pending reply. Returns `false` if it was
    /// already closed.
    pub async fn close(&self) -> bool {
        let mut state = self.inner.state.lock().await;
        if !state.is_open {
            return false;
        }
        self.inner.hide(&mut state);
        true
    }

    /// Flip visibility. Returns the new open state.
    pub async fn toggle(&self) -> bool {
        let mut state = self.inner.state.lock().await;
        if state.is_open {
            self.inner.hide(&mut state);
        } else {
            self.inner.show(&mut state);
        }
        state.is_open
    }

    /// Clear the session back to the greeting, dropping any pending reply.
    pub async fn reset(&self) {
        let mut state = self.inner.state.lock().await;
        let dropped_reply = self.inner.drop_pending(&mut state);
        state.messages = vec![ChatMessage::bot(self.inner.settings.greeting.clone())];
        info!(dropped_reply, "chat session reset");
        self.inner.events.publish(WidgetEvent::Reset);
    }

    /// Send a user message and schedule the bot's reply.
    ///
    /// Leading and trailing whitespace is trimmed. If the previous reply is
    /// still pending it is delivered immediately, ahead of the new message,
    /// so the list keeps alternating between user and bot.
    ///
    /// # Errors
    ///
    /// - [`WidgetError::EmptyMessage`] for blank input.
    /// - [`WidgetError::Closed`] while the widget is hidden.
    /// - [`WidgetError::NoRuntime`] when called outside a tokio runtime.
    pub async fn send(&self, text: &str) -> Result<(), WidgetError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(WidgetError::EmptyMessage);
        }
        let runtime = Handle::try_current().map_err(|_| WidgetError::NoRuntime)?;

        let mut state = self.inner.state.lock().await;
        if !state.is_open {
            return Err(WidgetError::Closed);
        }

        if let Some(pending) = state.pending.take() {
            debug!(generation = pending.generation, "flushing pending reply before new message");
            self.inner.complete(&mut state, pending);
        }

        self.inner.append(&mut state, ChatMessage::user(text));
        self.inner.set_typing(&mut state, true);

        state.generation += 1;
        let generation = state.generation;
        let cancel = self.inner.lifetime.child_token();
        state.pending = Some(PendingReply {
            generation,
            prompt: text.to_string(),
            cancel: cancel.clone(),
        });
        self.inner.idle.send_replace(false);
        drop(state);

        debug!(generation, chars = text.chars().count(), "reply scheduled");

        let inner = Arc::clone(&self.inner);
        let delay = inner.settings.response_delay();
        runtime.spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                _ = tokio::time::sleep(delay) => inner.deliver(generation).await,
            }
        });

        Ok(())
    }

    /// Snapshot of the message list.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.inner.state.lock().await.messages.clone()
    }

    pub async fn is_open(&self) -> bool {
        self.inner.state.lock().await.is_open
    }

    pub async fn is_typing(&self) -> bool {
        self.inner.state.lock().await.is_typing
    }

    pub async fn has_pending_reply(&self) -> bool {
        self.inner.state.lock().await.pending.is_some()
    }

    /// Wait until no reply is pending.
    pub async fn wait_idle(&self) {
        let mut rx = self.inner.idle.subscribe();
        let _ = rx.wait_for(|idle| *idle).await;
    }
}

impl Drop for ChatWidget {
    fn drop(&mut self) {
        self.inner.lifetime.cancel();
    }
}

impl std::fmt::Debug for ChatWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatWidget")
            .field("response_delay_ms", &self.inner.settings.response_delay_ms)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use sharegood_types::chat::Sender;
    use sharegood_types::config::DEFAULT_GREETING;

    use super::*;
    use crate::resolver::table::{GRATITUDE_RESPONSE, GREETING_RESPONSE};

    #[derive(Default)]
    struct CountingResolver {
        calls: AtomicUsize,
    }

    impl ResponseResolver for CountingResolver {
        fn resolve(&self, message: &str, _history: &[ChatMessage]) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            format!("echo: {message}")
        }
    }

    impl CountingResolver {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    fn open_settings() -> WidgetSettings {
        WidgetSettings {
            start_open: true,
            ..WidgetSettings::default()
        }
    }

    fn counting_widget() -> (ChatWidget, Arc<CountingResolver>) {
        let resolver = Arc::new(CountingResolver::default());
        let widget = ChatWidget::new(resolver.clone(), open_settings(), EventBus::default());
        (widget, resolver)
    }

    #[tokio::test]
    async fn new_widget_starts_closed_with_greeting() {
        let widget = ChatWidget::with_builtin_rules(WidgetSettings::default());
        assert!(!widget.is_open().await);
        assert!(!widget.is_typing().await);

        let messages = widget.messages().await;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, Sender::Bot);
        assert_eq!(messages[0].text, DEFAULT_GREETING);
    }

    #[tokio::test]
    async fn send_while_closed_is_rejected() {
        let widget = ChatWidget::with_builtin_rules(WidgetSettings::default());
        assert_eq!(widget.send("hello").await, Err(WidgetError::Closed));
        assert_eq!(widget.messages().await.len(), 1);
    }

    #[tokio::test]
    async fn blank_message_is_rejected() {
        let (widget, resolver) = counting_widget();
        assert_eq!(widget.send("   ").await, Err(WidgetError::EmptyMessage));
        assert_eq!(widget.send("").await, Err(WidgetError::EmptyMessage));
        assert_eq!(widget.messages().await.len(), 1);
        assert_eq!(resolver.calls(), 0);
    }

    #[tokio::test]
    async fn open_close_toggle_report_changes() {
        let widget = ChatWidget::with_builtin_rules(WidgetSettings::default());
        assert!(widget.open().await);
        assert!(!widget.open().await);
        assert!(widget.close().await);
        assert!(!widget.close().await);
        assert!(widget.toggle().await);
        assert!(widget.is_open().await);
        assert!(!widget.toggle().await);
        assert!(!widget.is_open().await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_toggles_flip_exactly_once_each() {
        let widget = Arc::new(ChatWidget::with_builtin_rules(WidgetSettings::default()));

        for _ in 0..200 {
            let a = tokio::spawn({
                let widget = Arc::clone(&widget);
                async move { widget.toggle().await }
            });
            let b = tokio::spawn({
                let widget = Arc::clone(&widget);
                async move { widget.toggle().await }
            });
            let (a, b) = (a.await.unwrap(), b.await.unwrap());

            assert_ne!(a, b, "both toggles saw the same state");
            assert!(!widget.is_open().await);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn toggle_closed_drops_pending_reply() {
        let (widget, resolver) = counting_widget();
        widget.send("hello").await.unwrap();

        assert!(!widget.toggle().await);
        tokio::time::sleep(Duration::from_secs(2)).await;

        assert_eq!(widget.messages().await.len(), 2);
        assert!(!widget.has_pending_reply().await);
        assert_eq!(resolver.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn reply_arrives_after_delay() {
        let widget = ChatWidget::with_builtin_rules(open_settings());
        widget.send("hello").await.unwrap();

        assert_eq!(widget.messages().await.len(), 2);
        assert!(widget.is_typing().await);

        tokio::time::sleep(Duration::from_millis(799)).await;
        assert_eq!(widget.messages().await.len(), 2);

        tokio::time::sleep(Duration::from_millis(2)).await;
        let messages = widget.messages().await;
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].sender, Sender::Bot);
        assert_eq!(messages[2].text, GREETING_RESPONSE);
        assert!(!widget.is_typing().await);
        assert!(!widget.has_pending_reply().await);
    }

    #[tokio::test(start_paused = true)]
    async fn n_sends_yield_alternating_list_of_2n_plus_1() {
        let (widget, resolver) = counting_widget();

        for text in ["hello", "how do I donate?", "thanks"] {
            widget.send(text).await.unwrap();
            widget.wait_idle().await;
        }

        let messages = widget.messages().await;
        assert_eq!(messages.len(), 2 * 3 + 1);
        for (i, message) in messages.iter().enumerate() {
            let expected = if i % 2 == 0 { Sender::Bot } else { Sender::User };
            assert_eq!(message.sender, expected, "message {i}");
        }
        assert_eq!(messages[6].text, "echo: thanks");
        assert_eq!(resolver.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn message_text_is_trimmed() {
        let (widget, _resolver) = counting_widget();
        widget.send("  bread  ").await.unwrap();
        widget.wait_idle().await;

        let messages = widget.messages().await;
        assert_eq!(messages[1].text, "bread");
        assert_eq!(messages[2].text, "echo: bread");
    }

    #[tokio::test(start_paused = true)]
    async fn close_cancels_pending_reply() {
        let (widget, resolver) = counting_widget();
        let mut events = widget.subscribe();

        widget.send("hello").await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(widget.close().await);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(widget.messages().await.len(), 2);
        assert!(!widget.is_typing().await);
        assert_eq!(resolver.calls(), 0);

        let mut saw_close = false;
        while let Ok(event) = events.try_recv() {
            if let WidgetEvent::Closed { dropped_reply } = event {
                assert!(dropped_reply);
                saw_close = true;
            }
        }
        assert!(saw_close);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_cancels_pending_reply_and_restores_greeting() {
        let (widget, resolver) = counting_widget();

        widget.send("first").await.unwrap();
        widget.wait_idle().await;
        widget.send("second").await.unwrap();
        widget.reset().await;

        tokio::time::sleep(Duration::from_secs(2)).await;
        let messages = widget.messages().await;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text, DEFAULT_GREETING);
        assert_eq!(resolver.calls(), 1);
        assert!(widget.is_open().await);
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_resend_flushes_previous_reply_first() {
        let widget = ChatWidget::with_builtin_rules(open_settings());

        widget.send("hello").await.unwrap();
        widget.send("thanks!").await.unwrap();

        let messages = widget.messages().await;
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[2].text, GREETING_RESPONSE);
        assert_eq!(messages[3].text, "thanks!");
        assert!(widget.is_typing().await);

        widget.wait_idle().await;
        tokio::time::sleep(Duration::from_secs(2)).await;
        let messages = widget.messages().await;
        assert_eq!(messages.len(), 5);
        assert_eq!(messages[4].text, GRATITUDE_RESPONSE);
    }

    #[tokio::test(start_paused = true)]
    async fn each_send_resolves_exactly_once() {
        let (widget, resolver) = counting_widget();

        for text in ["a", "b", "c", "d"] {
            widget.send(text).await.unwrap();
        }
        widget.wait_idle().await;
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert_eq!(resolver.calls(), 4);
        assert_eq!(widget.messages().await.len(), 9);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_widget_cancels_pending_reply() {
        let (widget, resolver) = counting_widget();
        widget.send("hello").await.unwrap();
        drop(widget);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(resolver.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn events_follow_send_and_reply() {
        let (widget, _resolver) = counting_widget();
        widget.close().await;
        let mut rx = widget.subscribe();

        widget.open().await;
        widget.send("hi").await.unwrap();
        widget.wait_idle().await;

        assert!(matches!(rx.recv().await.unwrap(), WidgetEvent::Opened));
        match rx.recv().await.unwrap() {
            WidgetEvent::MessageAppended { message } => {
                assert_eq!(message.sender, Sender::User);
                assert_eq!(message.text, "hi");
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(matches!(
            rx.recv().await.unwrap(),
            WidgetEvent::TypingChanged { is_typing: true }
        ));
        match rx.recv().await.unwrap() {
            WidgetEvent::MessageAppended { message } => assert_eq!(message.text, "echo: hi"),
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(matches!(
            rx.recv().await.unwrap(),
            WidgetEvent::TypingChanged { is_typing: false }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn custom_delay_is_honoured() {
        let settings = WidgetSettings {
            response_delay_ms: 50,
            start_open: true,
            ..WidgetSettings::default()
        };
        let widget = ChatWidget::new(Arc::new(CountingResolver::default()), settings, EventBus::default());
        widget.send("quick").await.unwrap();

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(widget.messages().await.len(), 3);
    }
}
