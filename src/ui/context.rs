use crate::ui::terminal::{detect_capabilities, detect_stderr_capabilities, TerminalCapabilities};
use deploy_manager::presentation::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    /// Color for stdout (results)
    pub color: bool,
    /// Color for stderr (warnings, errors)
    pub color_stderr: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>) -> Self {
        Self::from_caps(
            json,
            verbose,
            cli_color,
            detect_capabilities(),
            detect_stderr_capabilities(),
        )
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        caps: TerminalCapabilities,
        stderr_caps: TerminalCapabilities,
    ) -> Self {
        let resolve = |caps: &TerminalCapabilities| match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => caps.supports_color && !caps.is_ci,
        };

        Self {
            json,
            verbose,
            color: !json && resolve(&caps),
            color_stderr: !json && resolve(&stderr_caps),
            unicode: caps.supports_unicode,
        }
    }
}
