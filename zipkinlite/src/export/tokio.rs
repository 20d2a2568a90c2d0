use super::SpanExporter;

/// Forwards encoded batches to the exporter; `on_autoflush` fires whenever
/// the interval elapses without traffic so the caller can drain whatever
/// span buffer it keeps. Returns when all batch senders are dropped.
pub async fn run_tokio_export_loop(
    mut batch_receiver: tokio::sync::mpsc::UnboundedReceiver<Vec<u8>>,
    exporter: impl SpanExporter,
    autoflush_interval: std::time::Duration,
    on_autoflush: impl Fn(),
){
    loop {
        let autoflush = tokio::time::sleep(autoflush_interval);
        tokio::select! {
            opt = batch_receiver.recv() => {
                match opt {
                    Some(batch) => {
                        #[cfg(feature = "log")]
                        log::debug!("background worker received batch of size {}", batch.len());
                        exporter.export(&batch).await
                    }
                    None => return // channel senders dropped
                }
            }
            _ = autoflush => on_autoflush(),
        };
    }
}

pub fn spawn_tokio_export_task(
    exporter: impl SpanExporter,
    autoflush_interval: std::time::Duration,
    on_autoflush: impl Fn() + Send + 'static,
) -> impl Fn(Vec<u8>)
{
    let (batch_sender, batch_receiver) = tokio::sync::mpsc::unbounded_channel();

    tokio::spawn(async move {
        run_tokio_export_loop(batch_receiver, exporter, autoflush_interval, on_autoflush).await
    });

    move |batch| {
        if batch_sender.send(batch).is_err() {
            eprintln!("[ERROR] zipkinlite: failed to send batch to background worker: receiver dropped");
        }
    }
}
