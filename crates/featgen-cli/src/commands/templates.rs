//! Implementation of the `featgen templates` command.

use crate::{
    cli::{ListFormat, TemplatesArgs, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: TemplatesArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let templates = config.template_registry();

    match args.format {
        ListFormat::Table => {
            output.header("Available Templates:")?;
            for template in &templates {
                output.print(&format!(
                    "  {:<12} {:>2} dirs  {}",
                    template.name,
                    template.dir_count(),
                    template.description
                ))?;
            }
        }

        ListFormat::List => {
            for template in &templates {
                println!("{}", template.name);
            }
        }

        ListFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let json =
                serde_json::to_string_pretty(&templates).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }

        ListFormat::Csv => {
            println!("name,directories,description");
            for template in &templates {
                println!(
                    "{},{},{}",
                    template.name,
                    template.dir_count(),
                    template.description
                );
            }
        }
    }

    Ok(())
}
