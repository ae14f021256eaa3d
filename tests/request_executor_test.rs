#[cfg(test)]
mod request_executor {

    use pod_request::{RequestExecutor, RequestHeaders, RequestMethod, ServiceCall};
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn truncated_body_server(status_line: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buffer = [0u8; 1024];
            let _ = socket.read(&mut buffer).await;
            let response = format!("{status_line}\r\nContent-Length: 100\r\n\r\nabc");
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{address}")
    }

    fn base_url(mock_server: &MockServer) -> String {
        format!("{}/srv/basic-platform/", mock_server.uri())
    }

    #[tokio::test]
    async fn should_resolve_with_successful_convention_payload() {
        let mock_server = MockServer::start().await;
        let payload = json!({"hasError": false, "result": [{"id": 1}], "count": 1});

        Mock::given(method("GET"))
            .and(path("/srv/basic-platform/nzh/guildList"))
            .and(query_param("offset", "1"))
            .and(query_param("size", "300"))
            .and(header("_token_issuer_", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let call = ServiceCall::new(base_url(&mock_server), "/nzh/guildList", RequestMethod::Get)
            .headers(RequestHeaders::from([(
                "_token_issuer_".to_string(),
                "1".to_string(),
            )]))
            .data(json!({"offset": "1", "size": "300"}));

        let result = RequestExecutor::default().execute(call).await.unwrap();

        assert_eq!(result, payload);
    }

    #[tokio::test]
    async fn should_reject_with_convention_error_fields() {
        let mock_server = MockServer::start().await;
        let payload = json!({"hasError": true, "errorCode": 21, "message": "Token invalid"});

        Mock::given(method("GET"))
            .and(path("/srv/basic-platform/nzh/guildList"))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
            .mount(&mock_server)
            .await;

        let call = ServiceCall::new(base_url(&mock_server), "/nzh/guildList", RequestMethod::Get);

        let error = RequestExecutor::default().execute(call).await.unwrap_err();

        assert_eq!(error.code(), 21);
        assert_eq!(error.message(), "Token invalid");
        assert_eq!(error.raw(), Some(&payload));
    }

    #[tokio::test]
    async fn should_reject_with_http_status_on_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/srv/basic-platform/nzh/guildList100"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let call =
            ServiceCall::new(base_url(&mock_server), "nzh/guildList100", RequestMethod::Get);

        let error = RequestExecutor::default().execute(call).await.unwrap_err();

        assert_eq!(error.code(), 500);
        assert_eq!(error.message(), "Internal Server Error");
        assert_eq!(error.raw(), None);
    }

    #[tokio::test]
    async fn should_reject_with_connection_error_when_unreachable() {
        let call = ServiceCall::new("http://127.0.0.1:1/srv", "/nzh/guildList", RequestMethod::Get);

        let error = RequestExecutor::default().execute(call).await.unwrap_err();

        assert_eq!(error.code(), 889);
        assert_eq!(error.message(), "Connection Error Occurred.");
    }

    #[tokio::test]
    async fn should_reject_with_connection_error_when_body_is_cut_short() {
        let base_url = truncated_body_server("HTTP/1.1 200 OK").await;
        let call = ServiceCall::new(base_url, "/nzh/guildList", RequestMethod::Get);

        let error = RequestExecutor::default().execute(call).await.unwrap_err();

        assert_eq!(error.code(), 889);
        assert_eq!(error.message(), "Connection Error Occurred.");
    }

    #[tokio::test]
    async fn should_reject_with_http_status_when_error_body_is_cut_short() {
        let base_url = truncated_body_server("HTTP/1.1 500 Internal Server Error").await;
        let call = ServiceCall::new(base_url, "/nzh/guildList", RequestMethod::Get);

        let error = RequestExecutor::default().execute(call).await.unwrap_err();

        assert_eq!(error.code(), 500);
        assert_eq!(error.message(), "Internal Server Error");
    }

    #[tokio::test]
    async fn should_post_form_body_when_content_type_asks_for_it() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/srv/basic-platform/oauth2/token/7"))
            .and(body_string("client_id=pod&code=a+b"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "x"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let call = ServiceCall::new(base_url(&mock_server), "/oauth2/token", RequestMethod::Post)
            .headers(RequestHeaders::from([(
                "Content-Type".to_string(),
                "application/x-www-form-urlencoded".to_string(),
            )]))
            .data(json!({"client_id": "pod", "code": "a b"}))
            .url_trailing_segment("7");

        let result = RequestExecutor::default().execute(call).await.unwrap();

        assert_eq!(result, json!({"access_token": "x"}));
    }

    #[tokio::test]
    async fn should_post_json_body_by_default() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/srv/basic-platform/guilds"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(json!({"name": "nzh"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"HasError": false, "Result": {"id": 9}})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let call = ServiceCall::new(base_url(&mock_server), "guilds", RequestMethod::Post)
            .data(json!({"name": "nzh"}));

        let result = RequestExecutor::default().execute(call).await.unwrap();

        assert_eq!(result, json!({"HasError": false, "Result": {"id": 9}}));
    }
}
