use crate::BBox;
use anyhow::{Context, Result, ensure};
use serde::Deserialize;

/// Local HTTP endpoint of a map editor accepting `load_and_zoom` requests.
///
/// ```
/// use tileproj_core::{BBox, RemoteControl};
///
/// let remote = RemoteControl::default();
/// assert_eq!(
/// 	remote.load_and_zoom_url(&BBox::new(13.0, 52.0, 14.0, 53.0)),
/// 	"http://127.0.0.1:8111/load_and_zoom?left=13&top=53&right=14&bottom=52"
/// );
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RemoteControl {
	/// Base URL of the endpoint.
	pub url: String,
}

impl RemoteControl {
	#[must_use]
	pub fn new(url: &str) -> Self {
		Self { url: url.to_string() }
	}

	/// Builds the request asking the editor to load and zoom to `bbox` (WGS84).
	#[must_use]
	pub fn load_and_zoom_url(&self, bbox: &BBox) -> String {
		format!(
			"{}/load_and_zoom?left={}&top={}&right={}&bottom={}",
			self.url.trim_end_matches('/'),
			bbox.x_min,
			bbox.y_max,
			bbox.x_max,
			bbox.y_min
		)
	}

	/// Sends the `load_and_zoom` request for `bbox`.
	///
	/// Proxy settings of the environment are ignored; the endpoint is expected on
	/// the local machine.
	pub async fn send(&self, bbox: &BBox) -> Result<()> {
		let url = self.load_and_zoom_url(bbox);
		log::info!("sending remote control request {url}");

		let client = reqwest::Client::builder()
			.no_proxy()
			.build()
			.context("Failed to build http client")?;
		let response = client
			.get(&url)
			.send()
			.await
			.with_context(|| format!("Failed to reach remote control at {}", self.url))?;

		let status = response.status();
		ensure!(
			status.is_success(),
			"remote control at {} answered with status {status}",
			self.url
		);
		log::debug!("remote control answered {status}");
		Ok(())
	}
}

impl Default for RemoteControl {
	fn default() -> Self {
		Self::new("http://127.0.0.1:8111")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use tokio::{
		io::{AsyncReadExt, AsyncWriteExt},
		net::TcpListener,
	};

	/// Accepts one connection, answers with `status_line` and returns the request line.
	async fn serve_once(status_line: &'static str) -> (String, tokio::task::JoinHandle<String>) {
		let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
		let url = format!("http://{}", listener.local_addr().unwrap());
		let handle = tokio::spawn(async move {
			let (mut socket, _) = listener.accept().await.unwrap();
			let mut buffer = vec![0u8; 4096];
			let n = socket.read(&mut buffer).await.unwrap();
			let request = String::from_utf8_lossy(&buffer[..n]).to_string();
			let response = format!("{status_line}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
			socket.write_all(response.as_bytes()).await.unwrap();
			socket.shutdown().await.ok();
			request.lines().next().unwrap_or_default().to_string()
		});
		(url, handle)
	}

	#[test]
	fn url_trims_trailing_slash() {
		let remote = RemoteControl::new("http://localhost:8111/");
		assert_eq!(
			remote.load_and_zoom_url(&BBox::new(-1.5, -2.0, 3.0, 4.25)),
			"http://localhost:8111/load_and_zoom?left=-1.5&top=4.25&right=3&bottom=-2"
		);
	}

	#[tokio::test]
	async fn send_requests_load_and_zoom() {
		let (url, handle) = serve_once("HTTP/1.1 200 OK").await;
		RemoteControl::new(&url)
			.send(&BBox::new(13.0, 52.0, 14.0, 53.0))
			.await
			.unwrap();
		assert_eq!(
			handle.await.unwrap(),
			"GET /load_and_zoom?left=13&top=53&right=14&bottom=52 HTTP/1.1"
		);
	}

	#[tokio::test]
	async fn send_fails_on_error_status() {
		let (url, handle) = serve_once("HTTP/1.1 403 Forbidden").await;
		let err = RemoteControl::new(&url)
			.send(&BBox::new(0.0, 0.0, 1.0, 1.0))
			.await
			.unwrap_err();
		assert!(err.to_string().ends_with("answered with status 403 Forbidden"), "{err}");
		handle.await.unwrap();
	}

	#[tokio::test]
	async fn send_fails_without_endpoint() {
		let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
		let url = format!("http://{}", listener.local_addr().unwrap());
		drop(listener);
		let err = RemoteControl::new(&url)
			.send(&BBox::new(0.0, 0.0, 1.0, 1.0))
			.await
			.unwrap_err();
		assert!(err.to_string().starts_with("Failed to reach remote control"), "{err}");
	}
}
