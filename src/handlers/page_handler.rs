use actix_web::{
    get,
    http::{header::ContentType, StatusCode},
    post, web, HttpRequest, HttpResponse, ResponseError,
};

use crate::{
    app_state::AppState,
    middleware::get_request_id,
    models::dto::request::{ContentSource, EvaluateRequestDto},
    views::{render_page, PageView},
};

fn html_response(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body)
}

#[get("/")]
async fn index(state: web::Data<AppState>) -> HttpResponse {
    let html = render_page(
        &PageView::default(),
        state.evaluation_service.principles(),
    );
    html_response(StatusCode::OK, html)
}

/// Form submission: acquires the content, then evaluates it when there is
/// any. Failures are rendered inline rather than as a bare error body.
#[post("/evaluate")]
async fn submit_evaluation(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Form<EvaluateRequestDto>,
) -> HttpResponse {
    let request_id = get_request_id(&req).unwrap_or_default();
    let principles = state.evaluation_service.principles();
    let request = form.into_inner().normalized();
    let typed_content = request.content.clone().unwrap_or_default();
    let typed_url = request.url.clone().unwrap_or_default();

    let source = match request.source() {
        Ok(source) => source,
        Err(e) => {
            let view = PageView {
                mode: request.mode,
                content: &typed_content,
                url: &typed_url,
                error: Some(e.to_string()),
                ..Default::default()
            };
            return html_response(e.status_code(), render_page(&view, principles));
        }
    };

    let acquired = state.content_service.acquire(&source).await;
    let mut view = PageView {
        mode: request.mode,
        content: &typed_content,
        url: &typed_url,
        scraped: matches!(source, ContentSource::Url(_)).then_some(acquired.content.as_str()),
        ..Default::default()
    };

    if acquired.content.is_empty() {
        view.notice = Some("Provide some content to evaluate.".to_string());
        return html_response(StatusCode::OK, render_page(&view, principles));
    }

    log::info!(
        "[{}] Evaluating submitted {} content",
        request_id,
        request.mode.label()
    );

    match state.evaluation_service.evaluate(&acquired.content).await {
        Ok(run) => {
            let html = render_page(
                &PageView {
                    run: Some(&run),
                    ..view
                },
                principles,
            );
            html_response(StatusCode::OK, html)
        }
        Err(e) => {
            log::error!("[{}] Evaluation failed: {}", request_id, e);
            view.error = Some(e.to_string());
            html_response(e.status_code(), render_page(&view, principles))
        }
    }
}
