use crate::config::SiteDescriptor;
use std::sync::Arc;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};

/// `(path, status line, content type, body)`
pub(crate) type Route = (&'static str, &'static str, &'static str, Vec<u8>);

pub(crate) fn site(name: &str, url: &str, selector: &str) -> SiteDescriptor {
    SiteDescriptor {
        name: name.to_string(),
        url: url.to_string(),
        selector: selector.to_string(),
        tags: vec![],
    }
}

/// Serves canned responses on a random local port until the test ends.
/// Unknown paths get a 404. Returns the base url without trailing slash.
pub(crate) async fn serve(routes: Vec<Route>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let routes = Arc::new(routes);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let routes = Arc::clone(&routes);
            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]);
                let path = request.split_whitespace().nth(1).unwrap_or("/");

                let (status, content_type, body) = routes
                    .iter()
                    .find(|(p, ..)| *p == path)
                    .map(|(_, s, c, b)| (*s, *c, b.as_slice()))
                    .unwrap_or(("404 Not Found", "text/plain", b"not found".as_slice()));

                let mut response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    status,
                    content_type,
                    body.len()
                )
                .into_bytes();
                response.extend_from_slice(body);

                let _ = socket.write_all(&response).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    base
}
