use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    response::IntoResponse,
};

/// Stateless websocket echo. Whatever a client sends comes straight back;
/// there is no fan-out and nothing is remembered between messages.
pub async fn ws_echo(ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(handle_socket)
}

async fn handle_socket(mut socket: WebSocket) {
    tracing::info!("echo client connected");
    while let Some(Ok(msg)) = socket.recv().await {
        match msg {
            Message::Close(_) => break,
            msg => {
                if socket.send(msg).await.is_err() {
                    break;
                }
            }
        }
    }
    tracing::info!("echo client disconnected");
}
