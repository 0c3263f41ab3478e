//! HTTPクライアントテスト
//!
//! ローカルのスタブサーバーに対して エンコード→送信→正規化 を検証

use accident_common::{analyze_image, ClientConfig, Error, Summary};
use accident_detect::client::HttpClient;
use accident_detect::image_file::ImageFile;
use std::time::Duration;
use tempfile::tempdir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// 1リクエストだけ応答するスタブ。受け取ったリクエスト全文を返す。
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind失敗");
    let addr = listener.local_addr().expect("アドレス取得失敗");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept失敗");
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.expect("書き込み失敗");
        let _ = socket.shutdown().await;
        request
    });

    (format!("http://{}/api", addr), handle)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.expect("読み込み失敗");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..pos]).to_lowercase();
            let length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= pos + 4 + length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

fn png_file(dir: &tempfile::TempDir) -> ImageFile {
    let path = dir.path().join("crash.png");
    std::fs::write(&path, PNG_HEADER).unwrap();
    ImageFile::open(&path).expect("ファイルが開けない")
}

fn client(base: &str) -> HttpClient {
    HttpClient::new(&ClientConfig::new(base), Duration::from_secs(5)).expect("クライアント生成失敗")
}

#[tokio::test]
async fn test_analyze_accident_detected() {
    let dir = tempdir().expect("Failed to create temp dir");
    let (base, server) = serve_once(
        "200 OK",
        r#"{"success":true,"accidentDetected":true,"detection":{"class":"collision","confidence":0.87,"severity":"high"}}"#,
    )
    .await;

    let result = analyze_image(&png_file(&dir), &client(&base))
        .await
        .expect("解析失敗");

    let lines = Summary::from_result(&result).lines();
    assert_eq!(
        lines,
        vec![
            "Accident Detected: Yes",
            "Type: collision",
            "Confidence: 87.0%",
            "Severity: high",
        ]
    );

    let request = server.await.expect("サーバー異常終了");
    assert!(request.starts_with("POST /api/analyze "));
    assert!(request.contains(r#""image":"data:image/png;base64,"#));
}

#[tokio::test]
async fn test_analyze_no_accident() {
    let dir = tempdir().expect("Failed to create temp dir");
    let (base, server) = serve_once("200 OK", r#"{"success":true,"accidentDetected":false}"#).await;

    let result = analyze_image(&png_file(&dir), &client(&base))
        .await
        .expect("解析失敗");

    assert_eq!(Summary::from_result(&result).lines(), vec!["Accident Detected: No"]);
    server.await.expect("サーバー異常終了");
}

#[tokio::test]
async fn test_server_error_message() {
    let dir = tempdir().expect("Failed to create temp dir");
    let (base, server) = serve_once(
        "500 Internal Server Error",
        r#"{"success":false,"error":"model crashed"}"#,
    )
    .await;

    let err = analyze_image(&png_file(&dir), &client(&base)).await.unwrap_err();
    assert_eq!(err, Error::Api(Some("model crashed".to_string())));
    server.await.expect("サーバー異常終了");
}

#[tokio::test]
async fn test_unsuccessful_body_with_ok_status() {
    let dir = tempdir().expect("Failed to create temp dir");
    let (base, server) = serve_once("200 OK", r#"{"success":false,"message":"no vehicle found"}"#).await;

    let err = analyze_image(&png_file(&dir), &client(&base)).await.unwrap_err();
    assert_eq!(err.user_message(), "no vehicle found");
    server.await.expect("サーバー異常終了");
}

#[tokio::test]
async fn test_connection_refused() {
    let dir = tempdir().expect("Failed to create temp dir");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind失敗");
    let addr = listener.local_addr().expect("アドレス取得失敗");
    drop(listener);

    let err = analyze_image(&png_file(&dir), &client(&format!("http://{}", addr)))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert!(!err.user_message().is_empty());
}
