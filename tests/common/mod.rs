//! Shared test utilities.

#![allow(dead_code)]

use std::sync::Once;
use std::time::Duration;

use fluxscope::flow::{FlowInterceptor, FlowTiming, TimelineStore};
use fluxscope::store::AppStore;

/// Opt-in test logging: `RUST_LOG=debug cargo test -- --nocapture`.
pub fn init_tracing() {
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Demo root store behind a fast-paced interceptor, plus its timeline.
pub fn intercepted_app() -> (FlowInterceptor<AppStore>, TimelineStore) {
    init_tracing();
    let timeline = TimelineStore::new();
    let interceptor =
        FlowInterceptor::with_timing(AppStore::new(), timeline.clone(), FlowTiming::fast());
    (interceptor, timeline)
}

/// Await until the timeline holds at least `n` events.
pub async fn wait_for_events(timeline: &TimelineStore, n: usize) {
    let mut changes = timeline.subscribe();
    let wait = async {
        while timeline.len() < n {
            changes.changed().await.expect("timeline store dropped");
        }
    };
    tokio::time::timeout(Duration::from_secs(5), wait)
        .await
        .unwrap_or_else(|_| panic!("timed out waiting for {n} events, have {}", timeline.len()));
}

/// Await until no flow is animating.
pub async fn wait_until_idle(timeline: &TimelineStore) {
    let mut changes = timeline.subscribe();
    let wait = async {
        while timeline.is_animating() {
            changes.changed().await.expect("timeline store dropped");
        }
    };
    tokio::time::timeout(Duration::from_secs(5), wait)
        .await
        .expect("timed out waiting for flow completion");
}
