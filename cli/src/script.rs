//! JSON-lines event scripts for headless replay.
//!
//! Each non-empty line is one event object tagged by `"event"`, e.g.
//! `{"event":"pointer_down","x":10,"y":20}`. Lines starting with `#` are comments.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use std::path::PathBuf;

use canvas::camera::Point;
use canvas::doc::{ItemId, ItemKind};
use canvas::engine::{Action, EngineCore};
use canvas::error::CanvasError;
use canvas::input::{Button, Key, Modifiers, Tool};
use serde::Deserialize;

/// One scripted host event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    Viewport {
        width: f64,
        height: f64,
        #[serde(default = "unit_dpr")]
        dpr: f64,
    },
    Tool {
        tool: Tool,
    },
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default)]
        button: Button,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerMove {
        x: f64,
        y: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerUp {
        x: f64,
        y: f64,
        #[serde(default)]
        button: Button,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerLeave,
    Key {
        key: String,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Add {
        kind: ItemKind,
        #[serde(default)]
        content: Option<String>,
    },
    ToggleLinkInput,
    Link {
        url: String,
    },
    Upload {
        path: PathBuf,
    },
    Select {
        id: ItemId,
    },
    ClearSelection,
    Remove {
        id: ItemId,
    },
    Prompt {
        id: ItemId,
        text: String,
    },
    ZoomIn,
    ZoomOut,
    ResetZoom,
    Undo,
    Redo,
}

fn unit_dpr() -> f64 {
    1.0
}

/// Parse one script line. Blank lines and `#` comments yield `None`.
///
/// # Errors
///
/// Returns the JSON error for a malformed event.
pub fn parse_line(line: &str) -> Result<Option<ScriptEvent>, serde_json::Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(trimmed).map(Some)
}

/// Something that went wrong while applying an event.
#[derive(Debug, thiserror::Error)]
pub enum ApplyError {
    #[error("failed to read upload {path}: {source}")]
    UploadRead { path: PathBuf, source: std::io::Error },
    #[error(transparent)]
    Canvas(#[from] CanvasError),
}

/// Feed one event to the engine.
///
/// # Errors
///
/// Only uploads can fail: the file may be unreadable or not an image.
pub fn apply(core: &mut EngineCore, event: ScriptEvent) -> Result<Vec<Action>, ApplyError> {
    let actions = match event {
        ScriptEvent::Viewport { width, height, dpr } => {
            core.set_viewport(width, height, dpr);
            Vec::new()
        }
        ScriptEvent::Tool { tool } => core.set_tool(tool),
        ScriptEvent::PointerDown { x, y, button, modifiers } => core.on_pointer_down(Point::new(x, y), button, modifiers),
        ScriptEvent::PointerMove { x, y, modifiers } => core.on_pointer_move(Point::new(x, y), modifiers),
        ScriptEvent::PointerUp { x, y, button, modifiers } => core.on_pointer_up(Point::new(x, y), button, modifiers),
        ScriptEvent::PointerLeave => core.on_pointer_leave(),
        ScriptEvent::Key { key, modifiers } => core.on_key_down(&Key(key), modifiers),
        ScriptEvent::Add { kind, content } => core.add_item(kind, content),
        ScriptEvent::ToggleLinkInput => core.toggle_link_input(),
        ScriptEvent::Link { url } => core.submit_link(&url),
        ScriptEvent::Upload { path } => {
            let bytes = std::fs::read(&path).map_err(|source| ApplyError::UploadRead { path: path.clone(), source })?;
            let file_name = path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();
            core.add_image_upload(&bytes, &file_name)?
        }
        ScriptEvent::Select { id } => core.select(id),
        ScriptEvent::ClearSelection => core.clear_selection(),
        ScriptEvent::Remove { id } => core.remove_item(&id),
        ScriptEvent::Prompt { id, text } => {
            core.set_prompt(&id, text);
            vec![Action::RenderNeeded]
        }
        ScriptEvent::ZoomIn => core.zoom_in(),
        ScriptEvent::ZoomOut => core.zoom_out(),
        ScriptEvent::ResetZoom => core.reset_zoom(),
        ScriptEvent::Undo => core.undo(),
        ScriptEvent::Redo => core.redo(),
    };
    Ok(actions)
}
