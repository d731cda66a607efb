use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{sleep, Instant};
use tracing::warn;

/// Handle to feed input edges into a running debouncer.
#[derive(Clone)]
pub struct DebounceInput {
    tx: mpsc::Sender<String>,
}

impl DebounceInput {
    pub async fn send(&self, text: String) {
        if let Err(e) = self.tx.send(text).await {
            warn!("Failed to queue debounced input: {}", e);
        }
    }
}

/// Spawn a debouncer task: every input change re-arms a quiescence timer,
/// and the latest value is emitted once the window elapses uninterrupted.
/// Consecutive duplicates are ignored, and the initial value itself never
/// emits; only changes do.
pub fn spawn(initial: String, window: Duration) -> (DebounceInput, mpsc::Receiver<String>) {
    let (in_tx, mut in_rx) = mpsc::channel::<String>(64);
    let (out_tx, out_rx) = mpsc::channel::<String>(64);

    tokio::spawn(async move {
        let mut last = initial;
        let mut pending: Option<String> = None;

        let timer = sleep(window);
        tokio::pin!(timer);

        loop {
            tokio::select! {
                maybe = in_rx.recv() => {
                    match maybe {
                        Some(text) => {
                            if text == last {
                                continue;
                            }
                            last = text.clone();
                            pending = Some(text);
                            timer.as_mut().reset(Instant::now() + window);
                        }
                        None => break,
                    }
                }
                _ = &mut timer, if pending.is_some() => {
                    if let Some(text) = pending.take() {
                        if out_tx.send(text).await.is_err() {
                            break;
                        }
                    }
                }
            }
        }
    });

    (DebounceInput { tx: in_tx }, out_rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(200);

    async fn settle() {
        // Let the debouncer task observe queued inputs before time moves.
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_keystrokes_emit_once() {
        let (input, mut rx) = spawn(String::new(), WINDOW);

        for text in ["j", "ja", "jaz", "jazz"] {
            input.send(text.to_string()).await;
            settle().await;
            tokio::time::advance(Duration::from_millis(50)).await;
        }
        tokio::time::advance(WINDOW).await;

        assert_eq!(rx.recv().await.as_deref(), Some("jazz"));

        tokio::time::advance(Duration::from_secs(5)).await;
        settle().await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_value_is_not_dispatched() {
        let (input, mut rx) = spawn(String::new(), WINDOW);

        input.send(String::new()).await;
        settle().await;
        tokio::time::advance(Duration::from_secs(5)).await;
        settle().await;

        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_duplicate_values_are_deduplicated() {
        let (input, mut rx) = spawn(String::new(), WINDOW);

        input.send("jazz".to_string()).await;
        settle().await;
        tokio::time::advance(WINDOW + Duration::from_millis(10)).await;
        assert_eq!(rx.recv().await.as_deref(), Some("jazz"));

        // Same value again: no new emission.
        input.send("jazz".to_string()).await;
        settle().await;
        tokio::time::advance(Duration::from_secs(5)).await;
        settle().await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_rearms_on_each_change() {
        let (input, mut rx) = spawn(String::new(), WINDOW);

        input.send("a".to_string()).await;
        settle().await;
        tokio::time::advance(Duration::from_millis(150)).await;
        settle().await;
        assert!(rx.try_recv().is_err());

        // Change before quiescence: the earlier value never fires.
        input.send("ab".to_string()).await;
        settle().await;
        tokio::time::advance(Duration::from_millis(150)).await;
        settle().await;
        assert!(rx.try_recv().is_err());

        tokio::time::advance(Duration::from_millis(60)).await;
        assert_eq!(rx.recv().await.as_deref(), Some("ab"));
    }
}
