use actix_web::{get, post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        request::EvaluateRequestDto,
        response::{ContentDto, EvaluationRunDto, PrincipleDto},
    },
};

#[post("/api/evaluations")]
async fn create_evaluation(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<EvaluateRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req).unwrap_or_default();
    let source = request.into_inner().normalized().source()?;

    let acquired = state.content_service.acquire(&source).await;
    if acquired.content.is_empty() {
        return Err(AppError::ValidationError(
            "No content to evaluate".to_string(),
        ));
    }

    log::info!(
        "[{}] Evaluating {} bytes of content (scrape failed: {})",
        request_id,
        acquired.content.len(),
        acquired.scrape_failed
    );

    let run = state.evaluation_service.evaluate(&acquired.content).await?;
    Ok(HttpResponse::Ok().json(EvaluationRunDto::from(run)))
}

#[post("/api/content")]
async fn acquire_content(
    state: web::Data<AppState>,
    request: web::Json<EvaluateRequestDto>,
) -> Result<HttpResponse, AppError> {
    let source = request.into_inner().normalized().source()?;
    let acquired = state.content_service.acquire(&source).await;

    Ok(HttpResponse::Ok().json(ContentDto {
        content: acquired.content,
        scrape_failed: acquired.scrape_failed,
    }))
}

#[get("/api/principles")]
async fn list_principles(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(PrincipleDto::from_catalog(
        state.evaluation_service.principles(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{fixtures, test_helpers::assert_error_status};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_create_evaluation_returns_every_principle() {
        let state = fixtures::app_state_with_reply("Score: 7 out of 10.");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(create_evaluation),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/evaluations")
            .set_json(json!({ "mode": "text", "content": "Our guide to composting." }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 8);
        assert_eq!(results[0]["principle"], "Chunk-Level Retrieval");
        assert_eq!(results[0]["score"], 710);
        assert_eq!(body["average_score_display"], "710.0");
    }

    #[actix_web::test]
    async fn test_create_evaluation_rejects_empty_content() {
        let state = fixtures::app_state_with_reply("Score: 5");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(create_evaluation),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/evaluations")
            .set_json(json!({ "mode": "text", "content": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_create_evaluation_maps_generation_failure() {
        let state = fixtures::app_state_with_failing_generator();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(create_evaluation),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/evaluations")
            .set_json(json!({ "content": "Some content" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_error_status(resp.status());
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["kind"], "GENERATION_ERROR");
    }

    #[actix_web::test]
    async fn test_acquire_content_echoes_text() {
        let state = fixtures::app_state_with_reply("unused");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(acquire_content),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/content")
            .set_json(json!({ "content": "<p>raw</p>" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["content"], "<p>raw</p>");
        assert_eq!(body["scrape_failed"], false);
    }

    #[actix_web::test]
    async fn test_list_principles() {
        let state = fixtures::app_state_with_reply("unused");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(list_principles),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/principles").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let principles = body.as_array().unwrap();
        assert_eq!(principles.len(), 8);
        assert_eq!(principles[7]["title"], "AI Crawlability & Indexability");
    }
}
