//! Health endpoint integration tests
//!
//! Exercises the HTTP surface end to end: method semantics, content type,
//! wire format, and status-code policy.

#[cfg(test)]
mod tests {
    use crate::common::{CountingCheck, StaticCheck};
    use actix_web::http::{header, Method, StatusCode};
    use actix_web::{test, web, App};
    use healthcheck_rs::config::ResponsePolicy;
    use healthcheck_rs::server::{health_endpoint, AppState, APPLICATION_HEALTH_JSON};
    use healthcheck_rs::{CheckResult, ChecksProvider, HealthDocument, HealthService, Status};
    use std::sync::Arc;

    fn app_state(
        providers: Vec<Arc<dyn ChecksProvider>>,
        fail_status: u16,
    ) -> web::Data<AppState> {
        let template = HealthDocument::template()
            .with_version("1")
            .with_release_id("1.0.0-SNAPSHOT");
        let service = HealthService::new(template).with_providers(providers);
        web::Data::new(AppState::new(service, ResponsePolicy { fail_status }))
    }

    macro_rules! health_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state)
                    .route("/health", web::route().to(health_endpoint)),
            )
            .await
        };
    }

    /// Test the full happy path of a GET request
    #[actix_web::test]
    async fn test_get_renders_provider_observation() {
        let uptime = StaticCheck::with_results(
            "uptime",
            vec![CheckResult::passing().with_observation(42, "s")],
        );
        let app = health_app!(app_state(vec![Arc::new(uptime)], 200));

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            APPLICATION_HEALTH_JSON
        );

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "pass");
        assert_eq!(body["version"], "1");
        assert_eq!(body["releaseId"], "1.0.0-SNAPSHOT");
        assert_eq!(body["checks"]["uptime"][0]["observedValue"], 42);
        assert_eq!(body["checks"]["uptime"][0]["observedUnit"], "s");
    }

    /// Test that HEAD is served like GET
    #[actix_web::test]
    async fn test_head_is_allowed() {
        let app = health_app!(app_state(vec![Arc::new(StaticCheck::passing("uptime"))], 200));

        let req = test::TestRequest::with_uri("/health")
            .method(Method::HEAD)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    /// Test that OPTIONS advertises the allowed methods without probing
    #[actix_web::test]
    async fn test_options_advertises_methods_without_aggregation() {
        let (counting, calls) = CountingCheck::new(true);
        let app = health_app!(app_state(vec![Arc::new(counting)], 200));

        let req = test::TestRequest::with_uri("/health")
            .method(Method::OPTIONS)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::ALLOW).unwrap(),
            "OPTIONS, GET, HEAD"
        );
        assert!(resp.headers().contains_key(header::CACHE_CONTROL));
        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);
    }

    /// Test that unsupported methods are rejected
    #[actix_web::test]
    async fn test_other_methods_are_rejected() {
        let app = health_app!(app_state(vec![], 200));

        for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
            let req = test::TestRequest::with_uri("/health")
                .method(method.clone())
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(
                resp.status(),
                StatusCode::METHOD_NOT_ALLOWED,
                "expected 405 for {}",
                method
            );
        }
    }

    /// Test that an overall fail maps to the configured status code
    #[actix_web::test]
    async fn test_fail_status_policy() {
        let failing = StaticCheck::with_status("backend", Status::Fail);
        let app = health_app!(app_state(vec![Arc::new(failing)], 503));

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "fail");
    }

    /// Test that a warn still answers 200
    #[actix_web::test]
    async fn test_warn_answers_ok() {
        let warning = StaticCheck::with_status("backend", Status::Warn);
        let app = health_app!(app_state(vec![Arc::new(warning)], 503));

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "warn");
    }

    /// Test that successive requests render identical template metadata
    #[actix_web::test]
    async fn test_template_is_idempotent_across_requests() {
        let app = health_app!(app_state(vec![Arc::new(StaticCheck::passing("uptime"))], 200));

        let first: serde_json::Value = {
            let req = test::TestRequest::get().uri("/health").to_request();
            test::read_body_json(test::call_service(&app, req).await).await
        };
        let second: serde_json::Value = {
            let req = test::TestRequest::get().uri("/health").to_request();
            test::read_body_json(test::call_service(&app, req).await).await
        };

        assert_eq!(first["status"], second["status"]);
        assert_eq!(first["version"], second["version"]);
        assert_eq!(first["releaseId"], second["releaseId"]);
    }

    /// Test that unauthorized checks never reach the response body
    #[actix_web::test]
    async fn test_unauthorized_checks_are_absent_from_body() {
        let hidden = StaticCheck::with_status("secret", Status::Fail).unauthorized();
        let visible = StaticCheck::passing("uptime");
        let app = health_app!(app_state(vec![Arc::new(hidden), Arc::new(visible)], 200));

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value =
            test::read_body_json(test::call_service(&app, req).await).await;

        assert_eq!(body["status"], "pass");
        assert!(body["checks"].get("secret").is_none());
        assert!(body["checks"].get("uptime").is_some());
    }

    /// Test that a service without providers reports a bare pass
    #[actix_web::test]
    async fn test_no_providers_renders_pass_without_checks() {
        let app = health_app!(app_state(vec![], 200));

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value =
            test::read_body_json(test::call_service(&app, req).await).await;

        assert_eq!(body["status"], "pass");
        assert!(body.get("checks").is_none());
    }
}
