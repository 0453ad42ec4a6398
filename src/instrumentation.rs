//! Span timing for the search and evaluation entry points.
//!
//! Compiled only with `--features instrumentation`. The library marks its
//! entry points with `instrument`; this layer records how often each span
//! was entered and how long it stayed open.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Instant;

use once_cell::sync::Lazy;
use thread_local::ThreadLocal;
use tracing::span;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

type SpanTotals = HashMap<String, (u64, u64)>;

/// Span name to (calls, total nanoseconds), one map per thread. A rayon
/// worker only ever locks its own map while searching.
static THREAD_TIMING_DATA: Lazy<ThreadLocal<Mutex<SpanTotals>>> = Lazy::new(ThreadLocal::new);

struct TimingLayer;

impl<S> Layer<S> for TimingLayer
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_enter(&self, id: &span::Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(Instant::now());
        }
    }

    fn on_exit(&self, id: &span::Id, ctx: Context<'_, S>) {
        let span = match ctx.span(id) {
            Some(span) => span,
            None => return,
        };
        let start = match span.extensions_mut().remove::<Instant>() {
            Some(start) => start,
            None => return,
        };

        record_span(span.name(), start.elapsed().as_nanos() as u64);
    }
}

fn record_span(name: &str, nanos: u64) {
    let cell = THREAD_TIMING_DATA.get_or(|| Mutex::new(HashMap::new()));
    // a poisoned map just stops recording
    if let Ok(mut data) = cell.lock() {
        let entry = data.entry(name.to_string()).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += nanos;
    }
}

/// Installs the timing layer, plus a compact fmt layer when `RUST_LOG` asks
/// for output.
pub fn init_tracing() -> Result<(), SetGlobalDefaultError> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_default();

    if env_filter.is_empty() || env_filter == "off" {
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new("trace"))
            .with(TimingLayer);
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .compact();
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(TimingLayer)
            .with(fmt_layer);
        tracing::subscriber::set_global_default(subscriber)
    }
}

/// Sums the per-thread maps.
fn aggregate_timings() -> SpanTotals {
    let mut aggregated = SpanTotals::new();
    for cell in THREAD_TIMING_DATA.iter() {
        if let Ok(data) = cell.lock() {
            for (name, (count, nanos)) in data.iter() {
                let entry = aggregated.entry(name.clone()).or_insert((0, 0));
                entry.0 += count;
                entry.1 += nanos;
            }
        }
    }
    aggregated
}

/// Prints call counts and latencies per span, slowest total first.
pub fn print_timing_statistics() {
    let mut entries: Vec<(String, (u64, u64))> = aggregate_timings().into_iter().collect();

    if entries.is_empty() {
        eprintln!("\nNo timing data collected.");
        return;
    }
    entries.sort_by_key(|(_, (_, total))| std::cmp::Reverse(*total));

    eprintln!("\n{:=<80}", "");
    eprintln!("Latency Statistics (sorted by total time)");
    eprintln!("{:=<80}", "");
    eprintln!(
        "{:<40} {:>12} {:>12} {:>12}",
        "Span", "Calls", "Total (ms)", "Avg (µs)"
    );
    eprintln!("{:-<80}", "");

    for (name, (count, total_nanos)) in entries.iter().filter(|(_, (count, _))| *count > 0) {
        eprintln!(
            "{:<40} {:>12} {:>12.2} {:>12.2}",
            name,
            count,
            *total_nanos as f64 / 1_000_000.0,
            (*total_nanos as f64 / *count as f64) / 1_000.0
        );
    }
    eprintln!("{:-<80}", "");
}
