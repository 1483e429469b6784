//! Built-in check provider tests
//!
//! Exercises the HTTP probes against wiremock servers and the uptime
//! provider end to end through the aggregation service.

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;
    use healthcheck_rs::checks::http::{ResponseTime, StatusPage};
    use healthcheck_rs::checks::uptime;
    use healthcheck_rs::{ChecksProvider, HealthDocument, HealthService, Status};
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Test a healthy endpoint within its threshold
    #[tokio::test]
    async fn test_response_time_pass() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let check = ResponseTime::new(
            "upstream",
            format!("{}/status", server.uri()),
            Duration::from_secs(2),
            Duration::from_secs(5),
        )
        .unwrap();

        let map = check.checks().await;
        let results = &map["upstream:responseTime"];
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status, Status::Pass);
        assert_eq!(results[0].component_id.as_deref(), Some("upstream"));
        assert_eq!(results[0].observed_unit.as_deref(), Some("ns"));
        assert!(results[0].observed_value.is_some());
        assert!(results[0].output.is_none());
    }

    /// Test a slow endpoint beyond its threshold
    #[tokio::test]
    async fn test_response_time_warn_when_slow() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(200)))
            .mount(&server)
            .await;

        let check = ResponseTime::new(
            "upstream",
            format!("{}/status", server.uri()),
            Duration::from_secs(2),
            Duration::from_millis(20),
        )
        .unwrap();

        let map = check.checks().await;
        let results = &map["upstream:responseTime"];
        assert_eq!(results[0].status, Status::Warn);
        assert!(!results[0].output.as_deref().unwrap().is_empty());
        assert!(results[0].observed_value.is_some());
    }

    /// Test that a non-2xx answer fails the check
    #[tokio::test]
    async fn test_response_time_fails_on_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let check = ResponseTime::new(
            "upstream",
            format!("{}/status", server.uri()),
            Duration::from_secs(2),
            Duration::from_secs(5),
        )
        .unwrap();

        let map = check.checks().await;
        let results = &map["upstream:responseTime"];
        assert_eq!(results[0].status, Status::Fail);
        assert!(results[0].output.as_deref().unwrap().contains("500"));
        assert!(results[0].observed_value.is_none());
    }

    /// Test a quiet status page
    #[tokio::test]
    async fn test_status_page_without_incidents_passes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": {"indicator": "none"}})),
            )
            .mount(&server)
            .await;

        let check = StatusPage::new("RemoteService", server.uri(), Duration::from_secs(2)).unwrap();
        let map = check.checks().await;
        let results = &map["RemoteService"];
        assert_eq!(results[0].status, Status::Pass);
        assert!(results[0].time.is_some());
    }

    /// Test a minor incident
    #[tokio::test]
    async fn test_status_page_minor_incident_warns() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": {"indicator": "minor"}})),
            )
            .mount(&server)
            .await;

        let check = StatusPage::new("RemoteService", server.uri(), Duration::from_secs(2)).unwrap();
        let map = check.checks().await;
        assert_eq!(map["RemoteService"][0].status, Status::Warn);
    }

    /// Test a critical incident with the page's own description
    #[tokio::test]
    async fn test_status_page_outage_fails_with_description() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": {"indicator": "critical", "description": "major outage"}
            })))
            .mount(&server)
            .await;

        let check = StatusPage::new("RemoteService", server.uri(), Duration::from_secs(2)).unwrap();
        let map = check.checks().await;
        let results = &map["RemoteService"];
        assert_eq!(results[0].status, Status::Fail);
        assert_eq!(results[0].output.as_deref(), Some("major outage"));
    }

    /// Test an unparseable status page body
    #[tokio::test]
    async fn test_status_page_with_invalid_body_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let check = StatusPage::new("RemoteService", server.uri(), Duration::from_secs(2)).unwrap();
        let map = check.checks().await;
        assert_eq!(map["RemoteService"][0].status, Status::Fail);
    }

    /// Test probes and uptime flowing through the aggregation service
    #[tokio::test]
    async fn test_checks_flow_through_service() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let probe = ResponseTime::new(
            "upstream",
            format!("{}/status", server.uri()),
            Duration::from_secs(2),
            Duration::from_secs(5),
        )
        .unwrap();

        let service = HealthService::new(HealthDocument::template().with_version("1"))
            .with_provider(Arc::new(uptime::Process::new()))
            .with_provider(Arc::new(probe));

        let req = TestRequest::get().uri("/health").to_http_request();
        let document = service.gather(&req).await;

        assert_eq!(document.status, Status::Pass);
        assert!(document.checks.contains_key("uptime"));
        assert!(document.checks.contains_key("upstream:responseTime"));
    }
}
