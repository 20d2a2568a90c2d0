use super::SpanExporter;
use std::sync::Arc;

#[derive(Default, Debug, Clone)]
pub struct TestExport {
    pub batches: Arc<tokio::sync::Mutex<Vec<Vec<u8>>>>,
}

impl SpanExporter for TestExport {
    fn export<'a>(&'a self, batch: &'a [u8]) -> impl std::future::Future<Output = ()> + Send + 'a {
        async {
            self.batches.lock().await.push(batch.to_vec());
        }
    }
}
