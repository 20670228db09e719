// HTTP handler bindings for the Tron game server protocol
//
// This module provides thin wrapper functions that bind Rocket HTTP routes
// to the Bot's core logic methods. Handlers are responsible for:
// - Deserializing incoming JSON requests
// - Extracting Bot instance from Rocket's managed state
// - Delegating to Bot methods
// - Serializing responses

use rocket::serde::json::Json;
use serde_json::{json, Value};

use crate::bot::Bot;
use crate::types::Snapshot;

/// GET / endpoint
/// Returns participant and agent identity
#[get("/")]
pub fn index(bot: &rocket::State<Bot>) -> Json<Value> {
    Json(bot.info())
}

/// POST /send-state endpoint
/// Called when the game server pushes a fresh arena snapshot
#[post("/send-state", format = "json", data = "<snapshot>")]
pub fn send_state(bot: &rocket::State<Bot>, snapshot: Json<Snapshot>) -> Json<Value> {
    bot.ingest(&snapshot);

    Json(json!({ "status": "ok" }))
}

/// GET /send-move endpoint
/// Called each turn to compute and return the next move
#[get("/send-move")]
pub fn send_move(bot: &rocket::State<Bot>) -> Json<Value> {
    let decision = bot.choose_move();

    Json(json!({ "move": decision.to_wire() }))
}

/// POST /end endpoint
/// Called when a game ends - allows cleanup and logging
#[post("/end")]
pub fn end(bot: &rocket::State<Bot>) -> Json<Value> {
    bot.end();

    Json(json!({ "status": "ok" }))
}
