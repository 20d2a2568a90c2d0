use super::SpanExporter;
use http::header::CONTENT_TYPE;
use http::Method;

/// POSTs thrift-encoded span lists to a Zipkin v1 collector over HTTP/2.
// TODO keep the connection open across batches
pub struct HttpThriftExport {
    post_uri: http::Uri,
    host: String,
    port: u16,
}

impl SpanExporter for HttpThriftExport {
    fn export<'a>(&'a self, batch: &'a [u8]) -> impl std::future::Future<Output = ()> + Send + 'a {
        let batch = bytes::Bytes::copy_from_slice(batch);
        async {
            if let Err(err) = self.try_send(batch).await {
                eprintln!("[ERROR] zipkinlite: failed to export batch: {err}");
            }
        }
    }
}

impl HttpThriftExport {
    pub fn new(collector_endpoint: &str) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let uri: http::Uri = collector_endpoint.parse()?;
        let host = uri.host().ok_or("collector endpoint has no host")?.to_owned();
        let port = uri.port_u16().unwrap_or(9411);

        let insert_slash = if collector_endpoint.ends_with('/') { "" } else { "/" };
        let post_uri = format!("{collector_endpoint}{insert_slash}api/v1/spans").parse()?;

        Ok(Self{ post_uri, host, port })
    }

    async fn try_send(&self, batch: bytes::Bytes) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        #[cfg(feature = "log")]
        log::debug!("connecting to collector {}:{} for {}", self.host, self.port, self.post_uri);

        let tcp = tokio::net::TcpStream::connect((self.host.as_str(), self.port)).await?;
        let (mut h2, connection) = h2::client::handshake(tcp).await?;
        tokio::spawn(async move {
            if let Err(err) = connection.await {
                eprintln!("[ERROR] zipkinlite: collector connection failure: {err}");
            }
        });

        let mut request = http::Request::new(());
        *request.method_mut() = Method::POST;
        *request.uri_mut() = self.post_uri.clone();
        request.headers_mut().insert(CONTENT_TYPE, "application/x-thrift".parse()?);

        let (response, mut stream) = h2.send_request(request, false)?;
        stream.send_data(batch, true)?;

        let resp = response.await?;
        if !resp.status().is_success() {
            eprintln!("[WARN] zipkinlite: collector answered status {}", resp.status());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_uri_targets_v1_span_resource() {
        let export = HttpThriftExport::new("http://collector:9411").unwrap();
        assert_eq!(export.post_uri.to_string(), "http://collector:9411/api/v1/spans");
        assert_eq!(export.host, "collector");
        assert_eq!(export.port, 9411);

        let export = HttpThriftExport::new("http://collector:9411/").unwrap();
        assert_eq!(export.post_uri.to_string(), "http://collector:9411/api/v1/spans");
    }

    #[test]
    fn port_defaults_to_9411() {
        let export = HttpThriftExport::new("http://collector").unwrap();
        assert_eq!(export.port, 9411);
    }
}
