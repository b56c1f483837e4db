//! One-shot HTTP server for adapter tests.

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    sync::oneshot,
};

/// The raw request the server received.
pub(crate) struct CapturedRequest {
    pub head: String,
    pub body: String,
}

impl CapturedRequest {
    pub fn request_line(&self) -> &str {
        self.head.lines().next().unwrap_or("")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.head.lines().skip(1).find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim()
                .eq_ignore_ascii_case(name)
                .then(|| value.trim())
        })
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is json")
    }
}

/// Accept exactly one connection, answer with `status` and `body`, and hand
/// the captured request back through the returned receiver.
pub(crate) async fn spawn_single_response_server(
    status: &'static str,
    body: &'static str,
) -> (String, oneshot::Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local_addr");
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];
        let (head, request_body) = loop {
            let n = socket.read(&mut buf).await.expect("read");
            if n == 0 {
                break split_request(&raw).expect("complete request");
            }
            raw.extend_from_slice(&buf[..n]);
            if let Some((head, received)) = split_request(&raw) {
                if received.len() >= content_length(&head) {
                    break (head, received);
                }
            }
        };

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write_all");
        let _ = tx.send(CapturedRequest {
            head,
            body: String::from_utf8_lossy(&request_body).into_owned(),
        });
    });

    (format!("http://{}", addr), rx)
}

/// An address nothing listens on.
pub(crate) async fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local_addr");
    drop(listener);
    format!("http://{}", addr)
}

fn split_request(raw: &[u8]) -> Option<(String, Vec<u8>)> {
    let pos = raw.windows(4).position(|w| w == b"\r\n\r\n")?;
    let head = String::from_utf8_lossy(&raw[..pos]).into_owned();
    Some((head, raw[pos + 4..].to_vec()))
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn answers_with_canned_body_and_captures_request() {
        let (base, captured) =
            spawn_single_response_server("201 Created", r#"{"reply":"豆语"}"#).await;

        let response = reqwest::Client::new()
            .post(format!("{base}/echo"))
            .body(r#"{"ask":"名字"}"#)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 201);
        assert_eq!(response.text().await.unwrap(), r#"{"reply":"豆语"}"#);

        let captured = captured.await.unwrap();
        assert!(captured.request_line().starts_with("POST /echo"));
        assert_eq!(captured.json()["ask"], "名字");
    }
}
