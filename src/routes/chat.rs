use actix_web::{web, HttpResponse, Responder};
use crate::core::FaqBot;
use crate::models::{ChatRequest, ChatResponse, HealthResponse, QuestionsResponse};
use crate::services::{render_bot_message, render_user_message};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub bot: FaqBot,
}

/// Configure all chat-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/questions", web::get().to(list_questions))
        .route("/chat", web::post().to(chat));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        questions: state.bot.repository().len(),
    })
}

/// List the predefined questions
///
/// GET /api/v1/questions
async fn list_questions(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(QuestionsResponse {
        questions: state.bot.repository().questions().map(str::to_string).collect(),
    })
}

/// Ask the bot a question
///
/// POST /api/v1/chat
///
/// Request body:
/// ```json
/// {
///   "message": "string"
/// }
/// ```
///
/// Blank messages are not answered and return 204.
async fn chat(state: web::Data<AppState>, req: web::Json<ChatRequest>) -> impl Responder {
    if req.is_blank() {
        return HttpResponse::NoContent().finish();
    }

    let reply = state.bot.answer(&req.message).await;

    tracing::info!(
        "Answered message (matched: {:?}, {} bytes)",
        reply.matched.question(),
        reply.text.len()
    );

    let html = format!(
        "{}{}",
        render_user_message(&req.message),
        render_bot_message(&reply.text)
    );

    HttpResponse::Ok().json(ChatResponse {
        id: uuid::Uuid::new_v4().to_string(),
        matched_question: reply.matched.question().map(str::to_string),
        reply: reply.text,
        html,
    })
}
