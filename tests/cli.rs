use std::{
    io::{Read, Write},
    net::TcpListener,
    process::{Command, Output, Stdio},
    thread,
};

fn headcheck(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_headcheck"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn assert_outcome(output: &Output, stdout: &str, code: i32) {
    assert_eq!(String::from_utf8_lossy(&output.stdout), stdout);
    assert_eq!(output.status.code(), Some(code));
}

/// Serve a single canned response on a local port and return its URL.
fn serve_once(response: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buffer = [0u8; 1024];
        while !request.windows(4).any(|window| window == b"\r\n\r\n") {
            match stream.read(&mut buffer) {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buffer[..n]),
            }
        }
        let _ = stream.write_all(response.as_bytes());
    });

    format!("http://127.0.0.1:{}/", port)
}

#[test]
fn test_too_few_arguments() {
    assert_outcome(&headcheck(&[]), "usage: headcheck <url>\n", 2);
}

#[test]
fn test_too_many_arguments() {
    assert_outcome(&headcheck(&["foo", "bar"]), "usage: headcheck <url>\n", 2);
}

#[test]
fn test_invalid_url() {
    assert_outcome(&headcheck(&["baz"]), "unparseable: baz\n", 2);
}

#[test]
fn test_dash_prefixed_argument_is_unparseable() {
    assert_outcome(&headcheck(&["-x"]), "unparseable: -x\n", 2);
    assert_outcome(&headcheck(&["--bogus"]), "unparseable: --bogus\n", 2);
}

#[test]
fn test_help_wins_over_other_flags() {
    let docs = "docs: https://pixelatedlabs.com/headcheck\n";
    assert_outcome(&headcheck(&["--help", "--help"]), docs, 0);
    assert_outcome(&headcheck(&["--help", "--bogus"]), docs, 0);
    assert_outcome(
        &headcheck(&["--version", "--version"]),
        &format!("version: {}\n", env!("CARGO_PKG_VERSION")),
        0,
    );
}

#[test]
fn test_successful_response() {
    let url = serve_once("HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n");
    assert_outcome(&headcheck(&[&url]), "success: 200\n", 0);
}

#[test]
fn test_unsuccessful_response() {
    let url = serve_once("HTTP/1.1 301 Moved Permanently\r\nLocation: http://127.0.0.1:1/\r\n\r\n");
    assert_outcome(&headcheck(&[&url]), "failure: 301\n", 1);
}

#[test]
fn test_help_text() {
    assert_outcome(
        &headcheck(&["--help"]),
        "docs: https://pixelatedlabs.com/headcheck\n",
        0,
    );
}

#[test]
fn test_version_text() {
    assert_outcome(
        &headcheck(&["--version"]),
        &format!("version: {}\n", env!("CARGO_PKG_VERSION")),
        0,
    );
}

#[test]
fn test_transport_error() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let output = headcheck(&[&format!("http://127.0.0.1:{}/", port)]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(3));
    assert!(stdout.starts_with("error: could not connect"), "got: {}", stdout);
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn test_nothing_on_stderr() {
    let output = headcheck(&["baz"]);
    assert!(output.stderr.is_empty());
}

#[test]
fn test_closed_stdout_is_quiet() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_headcheck"))
        .arg("--help")
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // Close the read end so the write hits a broken pipe
    drop(child.stdout.take());

    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
}

#[test]
#[ignore = "needs network access"]
fn test_live_success() {
    assert_outcome(&headcheck(&["http://www.google.com"]), "success: 200\n", 0);
}

#[test]
#[ignore = "needs network access"]
fn test_live_redirect_not_followed() {
    assert_outcome(&headcheck(&["http://google.com"]), "failure: 301\n", 1);
}
