use deploy_manager::{ErrorKind, ManageError};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Exit status for a failed run
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<ManageError>()
        .map(ManageError::exit_code)
        .unwrap_or(1)
}

fn kind_label(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Config => "Configuration error",
        ErrorKind::Mismatch => "Not applicable",
        ErrorKind::ExternalCommand => "Command failed",
        ErrorKind::Permission => "Permission denied",
        ErrorKind::Io => "I/O error",
    }
}

const MARKER_HINT: &str = "The marker is written at the start of every deploy.";

fn hint(err: &ManageError) -> Option<String> {
    match err {
        ManageError::ConfigNotFound { .. } => {
            Some("Pass --config PATH or set MANAGE_CONFIG.".to_string())
        }
        ManageError::MissingField { project, field, .. } => {
            Some(format!("Add \"{field}\" to projects.{project}."))
        }
        ManageError::RevisionMarker { .. } => Some(MARKER_HINT.to_string()),
        ManageError::NotRoot => Some("Run again with sudo.".to_string()),
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error, color: bool, unicode: bool) -> String {
    let icon = Icon::Error.colored(color, unicode);

    let Some(manage) = err.downcast_ref::<ManageError>() else {
        return format!("{icon} {err:#}\n");
    };

    let label = kind_label(manage.kind());
    let mut out = format!(
        "{icon} {}: {}\n",
        ColoredText::error(label).bold().render(color),
        manage
    );
    if let Some(hint) = hint(manage) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(color, unicode),
            ColoredText::dim(hint).render(color)
        ));
    }
    out
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let kind = err
            .downcast_ref::<ManageError>()
            .map(|e| e.kind().as_str())
            .unwrap_or("internal");
        let output = serde_json::json!({
            "event": "error",
            "kind": kind,
            "message": format!("{err:#}"),
            "exit_code": exit_code(err),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err, ui.color_stderr, ui.unicode));
}
