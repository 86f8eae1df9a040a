use deploy_manager::{ActionReport, ConfigWarning};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn print_config_warnings(ui: &UiContext, warnings: &[ConfigWarning]) {
    for w in warnings {
        if ui.json {
            let _ = crate::ui::json::emit(crate::ui::json::config_warning_event(w));
            continue;
        }
        eprint!("{}", render_config_warning(w, ui.color_stderr, ui.unicode));
    }
}

fn render_config_warning(w: &ConfigWarning, color: bool, unicode: bool) -> String {
    let icon = Icon::Warning.colored(color, unicode);
    let mut out = match w.line {
        Some(line) => format!(
            "{icon} Unknown config key '{}' in {}:{}\n",
            w.key,
            w.file.display(),
            line
        ),
        None => format!(
            "{icon} Unknown config key '{}' in {}\n",
            w.key,
            w.file.display()
        ),
    };
    if let Some(suggestion) = &w.suggestion {
        out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
    }
    out
}

pub fn print_report(ui: &UiContext, report: &ActionReport) {
    if ui.json {
        let _ = crate::ui::json::emit(crate::ui::json::result_event(report));
        return;
    }

    // Warnings go to stderr so that stdout stays the action's own output.
    for warning in &report.warnings {
        eprintln!(
            "{} {}",
            Icon::Warning.colored(ui.color_stderr, ui.unicode),
            ColoredText::warning(warning.as_str()).render(ui.color_stderr)
        );
    }
    let text = render_report(report, ui.color, ui.unicode, ui.verbose);
    print!("{text}");
}

pub fn render_report(report: &ActionReport, color: bool, unicode: bool, verbose: u8) -> String {
    let mut out = String::new();
    let arrow = Icon::Arrow.colored(color, unicode);

    for detail in &report.details {
        out.push_str(&format!(
            "{arrow} {}\n",
            ColoredText::dim(detail.as_str()).render(color)
        ));
    }

    if let Some(output) = &report.output {
        out.push_str(output);
        out.push('\n');
    }

    let icon = if report.has_warnings() {
        Icon::Warning
    } else {
        Icon::Success
    };
    let project = format!("[{}]", report.project);
    out.push_str(&format!(
        "{} {} {}\n",
        icon.colored(color, unicode),
        ColoredText::info(project).bold().render(color),
        ColoredText::success(report.summary.as_str()).render(color)
    ));

    if verbose > 0 {
        if let Some(previous) = &report.previous_revision {
            out.push_str(&format!(
                "  {}\n",
                ColoredText::dim(format!("revert marker: {previous}")).render(color)
            ));
        }
    }

    out
}
