//! End-to-end tests against a live server.
//!
//! # Design
//! Starts the real server on an ephemeral port, then exercises every client
//! operation over actual HTTP using ureq. Validates that request building
//! and response parsing agree with the server end-to-end, and that the
//! view-model applies confirmed responses the way the page would.

use todolist_client::{
    ApiError, CreateTodo, HttpMethod, HttpResponse, Operation, TodoListClient, TodoListView,
    UpdateTodo,
};
use todolist_server::Config;

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the client
/// handle status interpretation.
fn execute(req: todolist_client::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.url).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.url).call(),
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.url)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.url).send_empty(),
        (HttpMethod::Put, Some(body)) => agent
            .put(&req.url)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Put, None) => agent.put(&req.url).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers,
        body,
    }
}

/// Start the server on a random port in a background thread and return its
/// base URL.
fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todolist_server::run(listener, Config::default()).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn crud_lifecycle() {
    let client = TodoListClient::new(&start_server());

    // list — should be empty.
    let todos = client.parse_list(execute(client.build_list())).unwrap();
    assert!(todos.is_empty(), "expected empty list");

    // create — title arrives trimmed, item starts not-done.
    let create_input = CreateTodo {
        title: "  Integration test  ".to_string(),
    };
    let req = client.build_create(&create_input).unwrap();
    let response = execute(req);
    let location = response.header("location").map(str::to_string);
    let created = client.parse_create(response).unwrap();
    assert_eq!(created.title, "Integration test");
    assert!(!created.is_done);
    assert_eq!(location, Some(format!("/api/todolist/{}", created.id)));
    let id = created.id;

    // get the created item.
    let fetched = client.parse_get(execute(client.build_get(id))).unwrap();
    assert_eq!(fetched, created);

    // update — 204, so the server is re-read to observe the change.
    let update_input = UpdateTodo {
        title: "Updated title".to_string(),
        is_done: true,
    };
    let req = client.build_update(id, &update_input).unwrap();
    client.parse_update(execute(req)).unwrap();

    let fetched = client.parse_get(execute(client.build_get(id))).unwrap();
    assert_eq!(fetched.title, "Updated title");
    assert!(fetched.is_done);
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.created_at, created.created_at);

    // list — should have one item.
    let todos = client.parse_list(execute(client.build_list())).unwrap();
    assert_eq!(todos.len(), 1);

    // delete.
    client.parse_delete(execute(client.build_delete(id))).unwrap();

    // get after delete — NotFound.
    let err = client.parse_get(execute(client.build_get(id))).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // delete again — NotFound.
    let err = client.parse_delete(execute(client.build_delete(id))).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // list — empty again.
    let todos = client.parse_list(execute(client.build_list())).unwrap();
    assert!(todos.is_empty(), "expected empty list after delete");
}

#[test]
fn validation_failures_and_list_order() {
    let client = TodoListClient::new(&start_server());

    // empty title — rejected with the server's validation message.
    let invalid = CreateTodo {
        title: "".to_string(),
    };
    let req = client.build_create(&invalid).unwrap();
    let err = client.parse_create(execute(req)).unwrap_err();
    match err {
        ApiError::InvalidRequest(msg) => assert_eq!(msg, "title must not be empty"),
        other => panic!("expected InvalidRequest, got {other:?}"),
    }

    // over-length title — rejected; exactly 500 characters — accepted.
    let too_long = CreateTodo {
        title: "a".repeat(501),
    };
    let req = client.build_create(&too_long).unwrap();
    let err = client.parse_create(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::InvalidRequest(_)));

    let at_limit = CreateTodo {
        title: "a".repeat(500),
    };
    let req = client.build_create(&at_limit).unwrap();
    let limit_item = client.parse_create(execute(req)).unwrap();
    assert_eq!(limit_item.title.len(), 500);
    client
        .parse_delete(execute(client.build_delete(limit_item.id)))
        .unwrap();

    // rejections left nothing behind.
    let todos = client.parse_list(execute(client.build_list())).unwrap();
    assert!(todos.is_empty());

    // creation order is list order.
    let mut ids = Vec::new();
    for title in ["A", "B"] {
        let input = CreateTodo {
            title: title.to_string(),
        };
        let req = client.build_create(&input).unwrap();
        ids.push(client.parse_create(execute(req)).unwrap().id);
    }
    let titles: Vec<String> = client
        .parse_list(execute(client.build_list()))
        .unwrap()
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(titles, ["A", "B"]);

    // delete "A" — "B" remains; deleting "A" again is NotFound.
    client.parse_delete(execute(client.build_delete(ids[0]))).unwrap();
    let titles: Vec<String> = client
        .parse_list(execute(client.build_list()))
        .unwrap()
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(titles, ["B"]);

    let err = client.parse_delete(execute(client.build_delete(ids[0]))).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
}

#[test]
fn view_model_page_flow() {
    let client = TodoListClient::new(&start_server());
    let mut view = TodoListView::new();

    // initial load.
    view.begin();
    match client.parse_list(execute(client.build_list())) {
        Ok(todos) => view.load_done(todos),
        Err(_) => view.fail(Operation::Load),
    }
    assert!(view.items().is_empty());
    assert!(view.error().is_none());

    // create — the list grows only after the 201.
    view.begin();
    let input = CreateTodo {
        title: "Walk dog".to_string(),
    };
    let req = client.build_create(&input).unwrap();
    match client.parse_create(execute(req)) {
        Ok(created) => view.create_done(created),
        Err(_) => view.fail(Operation::Create),
    }
    assert_eq!(view.items().len(), 1);
    let id = view.items()[0].id;

    // a rejected create surfaces the category message and keeps the list.
    view.begin();
    let invalid = CreateTodo {
        title: "   ".to_string(),
    };
    let req = client.build_create(&invalid).unwrap();
    match client.parse_create(execute(req)) {
        Ok(created) => view.create_done(created),
        Err(_) => view.fail(Operation::Create),
    }
    assert_eq!(view.error(), Some("Failed to create todo. Please try again."));
    assert_eq!(view.items().len(), 1);

    // inline edit: PUT is 204, so the view applies the payload it sent.
    view.start_edit(id);
    view.begin();
    let update = UpdateTodo {
        title: "Walk cat".to_string(),
        is_done: true,
    };
    let req = client.build_update(id, &update).unwrap();
    match client.parse_update(execute(req)) {
        Ok(()) => {
            let mut local = view.items()[0].clone();
            local.title = update.title.clone();
            local.is_done = update.is_done;
            view.update_done(local);
        }
        Err(_) => view.fail(Operation::Update),
    }
    assert_eq!(view.editing(), None);
    assert_eq!(view.items()[0].title, "Walk cat");
    assert!(view.error().is_none());

    // delete — removed locally only after the 204.
    view.begin();
    match client.parse_delete(execute(client.build_delete(id))) {
        Ok(()) => view.delete_done(id),
        Err(_) => view.fail(Operation::Delete),
    }
    assert!(view.items().is_empty());

    // the server agrees with the view.
    let todos = client.parse_list(execute(client.build_list())).unwrap();
    assert!(todos.is_empty());
}
