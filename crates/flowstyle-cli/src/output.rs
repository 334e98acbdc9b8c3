//! Output modes and formatting for command results.

use console::Style;
use flowstyle::{EdgeAppearance, Overlay, RenderDirectiveSet, StyleChoice};
use serde::Serialize;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputMode {
    /// Styled when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    /// Always styled.
    Term,
    /// Never styled.
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputMode {
    pub fn should_use_color(self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::Json => false,
        }
    }

    pub fn is_json(self) -> bool {
        self == OutputMode::Json
    }
}

/// Styles used for text output.
pub struct Palette {
    key: Style,
    class: Style,
    muted: Style,
    selected: Style,
}

impl Palette {
    pub fn new(use_color: bool) -> Self {
        Self {
            key: Style::new().cyan().bold().force_styling(use_color),
            class: Style::new().magenta().force_styling(use_color),
            muted: Style::new().dim().force_styling(use_color),
            selected: Style::new().green().bold().force_styling(use_color),
        }
    }
}

pub fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn format_choices(choices: &[StyleChoice<'_>], palette: &Palette) -> String {
    choices
        .iter()
        .map(|choice| {
            if choice.selected {
                format!("* {}", palette.selected.apply_to(choice.key))
            } else {
                format!("  {}", palette.key.apply_to(choice.key))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_directives(directives: &RenderDirectiveSet, palette: &Palette) -> String {
    let mut lines = Vec::new();
    if let Some(class) = &directives.css_class {
        lines.push(format!("class {}", palette.class.apply_to(class)));
    }
    lines.extend(directives.overlays.iter().map(|o| format_overlay(o, palette)));
    if lines.is_empty() {
        lines.push(palette.muted.apply_to("(plain)").to_string());
    }
    lines.join("\n")
}

pub fn format_appearance(id: &str, appearance: &EdgeAppearance, palette: &Palette) -> String {
    let classes = appearance
        .classes()
        .iter()
        .map(|c| palette.class.apply_to(c).to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let mut lines = vec![format!("{} {}", palette.key.apply_to(id), classes)];
    lines.extend(
        appearance
            .overlays
            .iter()
            .map(|o| format!("  {}", format_overlay(o, palette))),
    );
    lines.join("\n")
}

fn format_overlay(overlay: &Overlay, palette: &Palette) -> String {
    match overlay {
        Overlay::Arrow(arrow) => format!(
            "arrow {} {} {}x{}",
            palette.muted.apply_to(format!("@{:.2}", arrow.location)),
            if arrow.direction.sign() > 0 { "forward" } else { "reverse" },
            arrow.width,
            arrow.length
        ),
        Overlay::Label(label) => {
            let class = label
                .css_class
                .as_deref()
                .map(|c| format!(" {}", palette.class.apply_to(c)))
                .unwrap_or_default();
            format!(
                "label {} {:?}{}",
                palette.muted.apply_to(format!("@{:.2}", label.location)),
                label.label,
                class
            )
        }
    }
}
