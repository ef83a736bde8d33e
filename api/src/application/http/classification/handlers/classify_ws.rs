//! WebSocket upgrade handler for the classification relay.
//!
//! `GET {root_path}/ws/classify` upgrades the connection to a WebSocket that
//! carries one classification exchange per inbound binary frame:
//!
//! | Direction | Format | Content |
//! |---|---|---|
//! | Client → Server | Binary | UTF-8 JSON: `{"ingredients": "..."}` or `{"image": "<data URI>"}` |
//! | Server → Client | Text | JSON: `{"status", "message"[, "prompt"]}` |
//!
//! Frames are processed strictly sequentially: the loop awaits the full
//! classification (including the external call) before receiving the next
//! frame. Every binary frame that reaches a terminal branch produces exactly
//! one reply; failures never close the connection.

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use tracing::{debug, info};

use halalscan_core::domain::classification::{
    helpers::decode_data_uri,
    ports::ClassificationService,
    value_objects::ClassifyIngredientsInput,
};

use crate::application::http::classification::validators::{IncomingMessage, OutgoingMessage};
use crate::application::http::server::app_state::AppState;

pub async fn classify_ws(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_classify_ws(socket, state))
}

async fn handle_classify_ws(mut socket: WebSocket, state: AppState) {
    info!("classification session opened");

    while let Some(msg_result) = socket.recv().await {
        match msg_result {
            Ok(Message::Binary(frame)) => {
                let reply = process_frame(&frame, &state.service).await;

                let Ok(payload) = serde_json::to_string(&reply) else {
                    // OutgoingMessage always serializes; nothing sane to
                    // reply with if it ever does not.
                    continue;
                };

                if socket.send(Message::Text(payload.into())).await.is_err() {
                    // Client disconnected mid-reply.
                    break;
                }
            }
            Ok(Message::Text(_)) => {
                // The protocol is binary-framed; text frames are ignored.
                debug!("ignoring inbound text frame");
            }
            // Graceful close or protocol error ends the session.
            Ok(Message::Close(_)) | Err(_) => break,
            // Ping/pong frames are handled by axum.
            Ok(_) => {}
        }
    }

    info!("classification session closed");
}

/// Decode and dispatch one inbound frame, producing exactly one reply.
///
/// Malformed frames are rejected before any external call is made.
pub async fn process_frame<S>(frame: &[u8], service: &S) -> OutgoingMessage
where
    S: ClassificationService,
{
    const INVALID_JSON: &str = "Invalid JSON data";

    let Ok(text) = std::str::from_utf8(frame) else {
        return OutgoingMessage::failed(INVALID_JSON);
    };

    let Ok(incoming) = serde_json::from_str::<IncomingMessage>(text) else {
        return OutgoingMessage::failed(INVALID_JSON);
    };

    match (incoming.ingredients, incoming.image) {
        // Text takes priority: a frame carrying both fields is treated as a
        // text-classification request.
        (Some(ingredients), _) => {
            match service
                .classify_ingredients(ClassifyIngredientsInput::text(ingredients))
                .await
            {
                Ok(outcome) => OutgoingMessage::success(outcome.message),
                Err(e) => {
                    OutgoingMessage::failed(format!("Error processing ingredients string: {e}"))
                }
            }
        }
        (None, Some(image)) => {
            let image_data = match decode_data_uri(&image) {
                Ok(bytes) => bytes,
                Err(e) => return OutgoingMessage::failed(format!("Error processing image: {e}")),
            };

            match service
                .classify_ingredients(ClassifyIngredientsInput::image(image_data))
                .await
            {
                Ok(outcome) => OutgoingMessage::success_with_prompt(
                    outcome.message,
                    outcome.prompt_template.map(str::to_string),
                ),
                Err(e) => OutgoingMessage::failed(format!("Error processing image: {e}")),
            }
        }
        (None, None) => OutgoingMessage::failed("ingredients and image missing"),
    }
}
