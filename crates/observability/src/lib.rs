use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Default)]
pub struct AppMetrics {
    requests_total: AtomicU64,
    plans_total: AtomicU64,
    validation_rejections_total: AtomicU64,
    advisor_unavailable_total: AtomicU64,
    total_latency_millis: AtomicU64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub requests_total: u64,
    pub plans_total: u64,
    pub validation_rejections_total: u64,
    pub advisor_unavailable_total: u64,
    pub avg_plan_latency_millis: f64,
}

impl AppMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_request(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_validation_rejection(&self) {
        self.validation_rejections_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_advisor_unavailable(&self) {
        self.advisor_unavailable_total
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Records a completed plan and the time it took to compose.
    pub fn observe_plan(&self, duration: Duration) {
        self.plans_total.fetch_add(1, Ordering::Relaxed);
        self.total_latency_millis
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let plans = self.plans_total.load(Ordering::Relaxed);
        let latency = self.total_latency_millis.load(Ordering::Relaxed);

        MetricsSnapshot {
            requests_total: self.requests_total.load(Ordering::Relaxed),
            plans_total: plans,
            validation_rejections_total: self.validation_rejections_total.load(Ordering::Relaxed),
            advisor_unavailable_total: self.advisor_unavailable_total.load(Ordering::Relaxed),
            avg_plan_latency_millis: if plans == 0 {
                0.0
            } else {
                latency as f64 / plans as f64
            },
        }
    }
}

/// Installs the JSON subscriber once per process. `RUST_LOG` overrides the
/// default filter.
pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}=info,zenjourney_api=info,zenjourney_agents=info",
                service_name.replace('-', "_")
            ))
        });

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(true)
            .init();

        tracing::debug!(service = service_name, "tracing initialised");
    });
}
