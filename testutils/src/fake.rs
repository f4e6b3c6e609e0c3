use httpmock::prelude::*;
use httpmock::{
    Mock,
    Then,
    When,
};
use serde_json::json;

pub struct MockServerBuilder {
    server: MockServer,
    mock_ids: Vec<usize>,
    never_ids: Vec<usize>,
}

fn print_req(req: &HttpMockRequest) -> bool {
    // Use println instead of info! so that this works outside of the lib crate
    println!("    Received: {} {}", req.method(), req.uri().path());
    true
}

impl MockServerBuilder {
    pub fn new() -> MockServerBuilder {
        MockServerBuilder {
            server: MockServer::start(),
            mock_ids: vec![],
            never_ids: vec![],
        }
    }

    /// Register a handler the client is expected to hit at least once.
    pub fn handle<F: Fn(When, Then) + 'static>(&mut self, f: F) -> &mut Self {
        let mock = self.server.mock(|w, t| {
            let w = w.matches(print_req);
            f(w, t);
        });
        self.mock_ids.push(mock.id);
        self
    }

    pub fn handle_not_found(&mut self, path: String) -> &mut Self {
        self.handle(move |when, then| {
            when.path(&path);
            then.status(404).json_body(status_not_found());
        })
    }

    /// Register a handler the client must NOT hit; `assert` fails if it ever
    /// matched. Used to prove that gated operations issue no mutating calls.
    pub fn handle_never<F: Fn(When, Then) + 'static>(&mut self, f: F) -> &mut Self {
        let mock = self.server.mock(|w, t| {
            let w = w.matches(print_req);
            f(w, t);
        });
        self.never_ids.push(mock.id);
        self
    }

    pub fn assert(&self) {
        for id in &self.mock_ids {
            println!("checking assertions for mock {id}");
            Mock::new(*id, &self.server).assert()
        }
        for id in &self.never_ids {
            println!("checking mock {id} was never hit");
            Mock::new(*id, &self.server).assert_hits(0)
        }
    }

    pub fn url(&self) -> http::Uri {
        http::Uri::try_from(self.server.url("/")).unwrap()
    }
}

pub fn make_fake_apiserver() -> (MockServerBuilder, kube::Client) {
    let builder = MockServerBuilder::new();
    let config = kube::Config::new(builder.url());
    let client = kube::Client::try_from(config).unwrap();
    (builder, client)
}

pub fn status_ok() -> serde_json::Value {
    json!({
      "kind": "Status",
      "apiVersion": "v1",
      "metadata": {},
      "status": "Success",
      "code": 200
    })
}

pub fn status_not_found() -> serde_json::Value {
    json!({
      "kind": "Status",
      "apiVersion": "v1",
      "metadata": {},
      "status": "Failure",
      "reason": "NotFound",
      "code": 404
    })
}

pub fn status_internal_error() -> serde_json::Value {
    json!({
      "kind": "Status",
      "apiVersion": "v1",
      "metadata": {},
      "status": "Failure",
      "reason": "InternalError",
      "message": "the cluster is on fire",
      "code": 500
    })
}
