//! Blocking HTTP [`Transport`] over `ureq`.

use ureq::Agent;

use crate::api::{
    ChatRequest, ChatResponse, LoginReply, LoginResponse, LoginRequest,
    Transport,
};
use crate::error::ChatError;
use crate::options::EndpointOptions;
use crate::session::SessionToken;

/// Sends login and chat requests to the configured endpoints.
///
/// Error statuses are not errors here: the backend answers a rejected login
/// with `401 {"status": "fail"}` and an unauthenticated chat with
/// `401 {"reply": ...}`, and both bodies are meant to be read.
pub struct HttpTransport {
    agent: Agent,
    endpoints: EndpointOptions,
}

impl HttpTransport {
    /// Create a transport for the given endpoints.
    #[must_use]
    pub fn new(endpoints: EndpointOptions) -> Self {
        let config = Agent::config_builder()
            .http_status_as_error(false)
            .build();
        Self {
            agent: Agent::new_with_config(config),
            endpoints,
        }
    }
}

impl Transport for HttpTransport {
    fn login(&self, request: &LoginRequest) -> Result<LoginReply, ChatError> {
        let url = self.endpoints.login_url();
        log::debug!("POST {url}");
        let mut response = self
            .agent
            .post(&url)
            .send_json(request)
            .map_err(|e| ChatError::Network(e.to_string()))?;
        let ok = response.status().is_success();
        let body: LoginResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| ChatError::Decode(e.to_string()))?;
        Ok(LoginReply { ok, body })
    }

    fn chat(
        &self,
        token: &SessionToken,
        request: &ChatRequest,
    ) -> Result<ChatResponse, ChatError> {
        let url = self.endpoints.chat_url();
        log::debug!("POST {url}");
        let mut response = self
            .agent
            .post(&url)
            .header("Authorization", token.bearer_header())
            .send_json(request)
            .map_err(|e| ChatError::Network(e.to_string()))?;
        if !response.status().is_success() {
            log::warn!("chat endpoint answered {}", response.status());
        }
        response
            .body_mut()
            .read_json()
            .map_err(|e| ChatError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::JoinHandle;

    use super::*;

    /// Serve one canned response on a loopback port and hand back the raw
    /// request text.
    fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            stream.write_all(response.as_bytes()).unwrap();
            request
        });
        (base_url, handle)
    }

    fn read_request(stream: &mut impl Read) -> String {
        let mut raw = Vec::new();
        let mut chunk = [0_u8; 1024];
        loop {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&raw);
            if let Some(split) = text.find("\r\n\r\n") {
                let length = text[..split]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())?
                    })
                    .unwrap_or(0);
                if raw.len() >= split + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&raw).into_owned()
    }

    fn transport(base_url: String) -> HttpTransport {
        HttpTransport::new(EndpointOptions {
            base_url,
            ..EndpointOptions::default()
        })
    }

    #[test]
    fn rejected_login_is_a_reply_not_an_error() {
        let (base_url, server) =
            serve_once("401 Unauthorized", r#"{"status":"fail"}"#);
        let reply = transport(base_url)
            .login(&LoginRequest {
                username: "test1".into(),
                password: "nope".into(),
            })
            .unwrap();
        assert!(!reply.ok);
        assert_eq!(reply.accepted_token(), None);

        let request = server.join().unwrap();
        assert!(request.starts_with("POST /auth/login"));
        let (_, body) = request.split_once("\r\n\r\n").unwrap();
        let body: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(body["username"], "test1");
        assert_eq!(body["password"], "nope");
    }

    #[test]
    fn chat_sends_bearer_token() {
        let (base_url, server) = serve_once("200 OK", r#"{"reply":"hi"}"#);
        let response = transport(base_url)
            .chat(
                &SessionToken::new("abc"),
                &ChatRequest {
                    message: "hello".into(),
                },
            )
            .unwrap();
        assert_eq!(response.reply, "hi");

        let request = server.join().unwrap().to_ascii_lowercase();
        assert!(request.starts_with("post /chat"));
        assert!(request.contains("authorization: bearer abc"));
    }

    #[test]
    fn non_json_body_is_a_decode_error() {
        let (base_url, server) =
            serve_once("500 Internal Server Error", "oops");
        let err = transport(base_url)
            .chat(
                &SessionToken::new("abc"),
                &ChatRequest {
                    message: "hello".into(),
                },
            )
            .unwrap_err();
        assert!(matches!(err, ChatError::Decode(_)));
        let _ = server.join();
    }

    #[test]
    fn unreachable_host_is_a_network_error() {
        // Bind then drop to get a port nobody is listening on.
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let err = transport(format!("http://127.0.0.1:{port}"))
            .login(&LoginRequest {
                username: "u".into(),
                password: "p".into(),
            })
            .unwrap_err();
        assert!(matches!(err, ChatError::Network(_)));
    }
}
