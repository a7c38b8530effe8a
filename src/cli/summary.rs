//! Summary mode: fetch the catalog once and print per-view counts.

use std::io::{self, Write};
use std::time::Instant;

use curator::telemetry::{StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink};
use curator::tui::state::{ReviewView, derive_views};
use curator::{CatalogError, CuratorConfig, HttpProductGateway, Product, ProductGateway};

/// Loads every product and writes the view counts to stdout.
///
/// # Errors
///
/// Returns an error if the gateway cannot be built, the catalog request
/// fails, or stdout cannot be written.
pub async fn run(config: &CuratorConfig) -> Result<(), CatalogError> {
    let gateway = HttpProductGateway::new(&config.base_url, config.request_timeout())?;

    let started = Instant::now();
    let products = gateway.list_products().await?;
    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    tracing::info!(product_count = products.len(), latency_ms, "summary loaded");
    StderrJsonlTelemetrySink.record(TelemetryEvent::ProductsLoaded {
        product_count: products.len(),
        latency_ms,
    });

    let mut stdout = io::stdout().lock();
    write_summary_to(&mut stdout, gateway.products_url().as_str(), &products)
}

/// Writes the summary for `products` to the given writer.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] when the writer fails.
pub fn write_summary_to<W: Write>(
    writer: &mut W,
    source: &str,
    products: &[Product],
) -> Result<(), CatalogError> {
    writeln!(writer, "{}", format_summary(source, products)).map_err(|error| CatalogError::Io {
        message: error.to_string(),
    })
}

/// Formats one line per view with its record count.
#[must_use]
pub fn format_summary(source: &str, products: &[Product]) -> String {
    let views = derive_views(products);
    let mut lines = vec![format!("Products from {source}:")];
    for view in ReviewView::ORDER {
        let count = views.indices(view).map_or(products.len(), <[usize]>::len);
        lines.push(format!("  {:<13} {count}", format!("{}:", view.label())));
    }
    lines.join("\n")
}
