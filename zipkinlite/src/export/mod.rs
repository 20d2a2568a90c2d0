mod tokio;
pub use tokio::{run_tokio_export_loop, spawn_tokio_export_task};

#[cfg(feature = "h2")]
mod http_thrift;
#[cfg(feature = "h2")]
pub use http_thrift::HttpThriftExport;

mod test;
pub use test::TestExport;

/// Transport seam. Batches are already thrift-encoded span lists
/// (see `wire::write_span_list`); exporters only move bytes.
pub trait SpanExporter: Send + Sync + 'static {
    fn export<'a>(&'a self, batch: &'a [u8]) -> impl std::future::Future<Output = ()> + Send + 'a;
}
