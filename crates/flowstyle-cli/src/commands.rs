//! Command handlers. Each returns the text to print on stdout.

use anyhow::Context;
use flowstyle::{
    build_mapping_table, resolve_with, Dataset, EdgeAppearance, EdgeRenderer, EdgeView,
    PropertyBag, ResolveMode, StyleMappingTable, StylePicker,
};
use serde::Serialize;

use crate::cli::{Cli, Command};
use crate::output::{self, Palette};

#[derive(Serialize)]
struct EdgeReport {
    id: String,
    #[serde(flatten)]
    appearance: EdgeAppearance,
}

pub fn run(cli: &Cli) -> anyhow::Result<String> {
    let table = load_table(cli)?;
    let palette = Palette::new(cli.output.should_use_color());

    match &cli.command {
        Command::Styles { property, current } => {
            let mut bag = PropertyBag::new();
            if let Some(current) = current {
                bag.set(property.as_str(), current.as_str());
            }
            let choices = StylePicker::new(&table, property).choices(&bag);
            if choices.is_empty() {
                anyhow::bail!("property '{}' has no style mapping", property);
            }
            if cli.output.is_json() {
                output::to_json(&choices)
            } else {
                Ok(output::format_choices(&choices, &palette))
            }
        }
        Command::Resolve { set, strict } => {
            let bag: PropertyBag = set.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
            let directives = resolve_with(&table, &bag, mode(*strict))?;
            if cli.output.is_json() {
                output::to_json(&directives)
            } else {
                Ok(output::format_directives(&directives, &palette))
            }
        }
        Command::Edges { dataset, strict } => {
            let data = Dataset::from_path(dataset)?;
            data.validate_edges()?;
            let renderer = EdgeRenderer::new(table, EdgeView::flowchart())?.mode(mode(*strict));

            let reports = data
                .edges
                .iter()
                .map(|edge| {
                    let id = edge.display_id();
                    let appearance = renderer
                        .appearance_of(edge)
                        .with_context(|| format!("edge '{}'", id))?;
                    Ok(EdgeReport { id, appearance })
                })
                .collect::<anyhow::Result<Vec<_>>>()?;

            if cli.output.is_json() {
                output::to_json(&reports)
            } else {
                Ok(reports
                    .iter()
                    .map(|r| output::format_appearance(&r.id, &r.appearance, &palette))
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
        }
    }
}

fn load_table(cli: &Cli) -> anyhow::Result<StyleMappingTable> {
    match &cli.stylesheet {
        Some(path) => StyleMappingTable::from_path(path)
            .with_context(|| format!("loading stylesheet {}", path.display())),
        None => Ok(build_mapping_table(cli.arrow_width, cli.arrow_length)?),
    }
}

fn mode(strict: bool) -> ResolveMode {
    if strict {
        ResolveMode::Strict
    } else {
        ResolveMode::Lenient
    }
}
