use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use montiera_core::{Catalog, ResolvedColors, Selection};
use montiera_frontend_core::ShowroomSession;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn session() -> ShowroomSession {
    ShowroomSession::new(Arc::new(Catalog::builtin().unwrap()), Some("Business")).unwrap()
}

fn send(session: &mut ShowroomSession, message: Value) -> Value {
    let reply = session.handle_json(&message.to_string()).unwrap();
    serde_json::from_str(&reply).unwrap()
}

#[test]
fn request_state_lists_options_and_selection() {
    let mut session = session();
    let reply = send(&mut session, json!({ "type": "RequestState" }));

    assert_eq!(reply["type"], "Initialize");
    let data = &reply["data"];
    assert_eq!(data["options"]["presets"], json!(["Business", "Ceremony", "RedCarpet"]));
    assert_eq!(
        data["selection"],
        json!({ "preset": "Business", "suit": "Navy", "shirt": "White", "accent": "Black" })
    );
    assert_eq!(
        data["colors"],
        json!({ "suit": "#0b1f3a", "shirt": "#f6f6f6", "accent": "#0a0a0a" })
    );
}

#[test]
fn swatch_then_reset_round_trip() {
    let mut session = session();

    let reply = send(
        &mut session,
        json!({ "type": "SetColor", "data": { "category": "accent", "name": "Gold" } }),
    );
    assert_eq!(
        reply,
        json!({
            "type": "SelectionChanged",
            "data": {
                "selection": { "preset": null, "suit": "Navy", "shirt": "White", "accent": "Gold" },
                "colors": { "suit": "#0b1f3a", "shirt": "#f6f6f6", "accent": "#c6a664" }
            }
        })
    );

    let reply = send(&mut session, json!({ "type": "Reset" }));
    assert_eq!(reply["data"]["selection"]["preset"], "Business");
    assert_eq!(reply["data"]["selection"]["accent"], "Black");
}

#[test]
fn unknown_preset_reply_keeps_selection() {
    let mut session = session();
    let reply = send(
        &mut session,
        json!({ "type": "ApplyPreset", "data": { "name": "Casual" } }),
    );
    assert_eq!(reply["type"], "Error");
    assert_eq!(reply["data"]["message"], "unknown preset \"Casual\"");

    let state = send(&mut session, json!({ "type": "RequestState" }));
    assert_eq!(state["data"]["selection"]["preset"], "Business");
}

#[test]
fn renderer_observer_sees_each_change() {
    let frames: Rc<RefCell<Vec<String>>> = Rc::default();
    let mut session = session();
    let sink = Rc::clone(&frames);
    session.subscribe(Box::new(move |_: &Selection, colors: &ResolvedColors| {
        sink.borrow_mut().push(colors.suit.to_hex());
    }));

    send(&mut session, json!({ "type": "ApplyPreset", "data": { "name": "RedCarpet" } }));
    send(&mut session, json!({ "type": "ApplyPreset", "data": { "name": "Nope" } }));
    send(
        &mut session,
        json!({ "type": "SetColor", "data": { "category": "suit", "name": "Forest" } }),
    );
    send(&mut session, json!({ "type": "RequestState" }));

    assert_eq!(*frames.borrow(), ["#4a1f2a", "#0f4024"]);
}
