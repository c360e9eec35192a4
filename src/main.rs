mod cli;

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use cli::{Commands, OutputFormat};
use fww_lib::types::{Component, FontSource};
use fww_lib::{
    load_selection, Config, ConversionResult, ConversionWorkflow, ConvertOutput, ErrorOutput,
    FwwError, FwwOutput, NoVariables, VariableTable, FWW_OUTPUT_VERSION,
};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = cli::parse();
    init_tracing(args.verbose);

    match args.command {
        Commands::Convert {
            input,
            variables,
            format,
            output,
        } => run_convert(
            args.config.as_deref(),
            args.verbose,
            &input,
            variables.as_deref(),
            format,
            output,
        ),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("fww_lib=debug,fww=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run_convert(
    config_path: Option<&Path>,
    verbose: bool,
    input: &Path,
    variables: Option<&Path>,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format, output),
    };
    if verbose {
        log_effective_config(config_path, &config);
        eprintln!("Reading selection from {}…", input.display());
    }
    let selection = match load_selection(input) {
        Ok(nodes) => nodes,
        Err(err) => return render_error(err, format, output),
    };
    let table = match variables {
        Some(path) => match VariableTable::from_json_file(path) {
            Ok(table) => Some(table),
            Err(err) => return render_error(err, format, output),
        },
        None => None,
    };

    let mut workflow = ConversionWorkflow::new(config);
    if verbose {
        workflow = workflow.with_progress(Arc::new(|msg: &str| eprintln!("{msg}")));
    }
    let converted = match &table {
        Some(table) => workflow.convert(&selection, table),
        None => workflow.convert(&selection, &NoVariables),
    };
    let result = match converted {
        Ok(result) => result,
        Err(err) => return render_error(err, format, output),
    };

    let body = FwwOutput::Convert(ConvertOutput {
        version: FWW_OUTPUT_VERSION.to_string(),
        input: input.display().to_string(),
        node_count: result.component.count(),
        result,
    });
    if let Err(err) = write_output(&body, format, output.as_deref()) {
        return render_error(FwwError::Io(err), format, output);
    }
    ExitCode::SUCCESS
}

fn load_config(path: Option<&Path>) -> Result<Config, FwwError> {
    let cfg = if let Some(p) = path {
        Config::from_toml_file(p).map_err(|e| {
            FwwError::Config(format!("Failed to read config {}: {}", p.display(), e))
        })?
    } else {
        Config::default()
    };

    cfg.validate()
        .map_err(|e| FwwError::Config(format!("Invalid config: {}", e)))?;
    Ok(cfg)
}

fn log_effective_config(config_path: Option<&Path>, config: &Config) {
    let config_source = config_path
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "defaults/built-in".to_string());
    eprintln!(
        "Effective config (source: {}): full-width ratio {:.2}, center tolerance {}px, tablet max-width above {}px, {} padding steps, {} web fonts",
        config_source,
        config.sizing.full_width_ratio,
        config.margin.center_tolerance,
        config.responsive.max_width_threshold,
        config.responsive.padding_steps.len(),
        config.fonts.web_fonts.len()
    );
}

fn write_output(body: &FwwOutput, format: OutputFormat, output: Option<&Path>) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json_output(body, output),
        OutputFormat::Pretty => write_pretty_output(body, output),
    }
}

fn render_error(err: FwwError, format: OutputFormat, output: Option<PathBuf>) -> ExitCode {
    let error_payload = err.to_payload();
    let payload = FwwOutput::Error(ErrorOutput {
        version: FWW_OUTPUT_VERSION.to_string(),
        message: Some(error_payload.message.clone()),
        error: error_payload,
    });

    let written = match format {
        OutputFormat::Json => write_json_output(&payload, output.as_deref()),
        OutputFormat::Pretty => write_pretty_output(&payload, output.as_deref()),
    };
    if let Err(write_err) = written {
        eprintln!("Failed to write error output: {}", write_err);
    }

    ExitCode::from(2)
}

fn write_json_output(body: &FwwOutput, output: Option<&Path>) -> io::Result<()> {
    let content = serde_json::to_string(body)?;
    if let Some(path) = output {
        std::fs::write(path, content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

fn write_pretty_output(body: &FwwOutput, output: Option<&Path>) -> io::Result<()> {
    let use_human = output.is_none() && io::stdout().is_terminal();

    if use_human {
        println!("{}", format_pretty(body, true));
        return Ok(());
    }

    // Non-tty or file output: keep JSON shape for pipelines/files.
    let content = serde_json::to_string_pretty(body)?;
    if let Some(path) = output {
        std::fs::write(path, &content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

fn format_pretty(body: &FwwOutput, colorize: bool) -> String {
    match body {
        FwwOutput::Convert(out) => format_conversion(&out.result, out.node_count, colorize),
        FwwOutput::Error(out) => {
            let mut text = format!(
                "{} {}",
                color("error:", "31", colorize),
                out.error.message
            );
            if let Some(hint) = &out.error.remediation {
                text.push_str(&format!("\n  hint: {hint}"));
            }
            text
        }
    }
}

fn format_conversion(result: &ConversionResult, node_count: usize, colorize: bool) -> String {
    let mut lines = vec![format!(
        "{} {} components",
        color("Converted", "32", colorize),
        node_count
    )];
    outline(&result.component, 0, &mut lines);

    if !result.fonts.is_empty() {
        lines.push("Fonts:".to_string());
        for font in &result.fonts {
            let source = match font.source {
                FontSource::Google => "google",
                FontSource::System => "system",
            };
            let weights: Vec<String> = font.weights.iter().map(u16::to_string).collect();
            lines.push(format!(
                "  {} ({}) {}",
                font.family,
                source,
                weights.join(", ")
            ));
        }
    }
    if !result.used_variables.is_empty() {
        lines.push("Variables:".to_string());
        for record in result.used_variables.values() {
            lines.push(format!("  --{} ({})", record.name, record.id));
        }
    }
    lines.join("\n")
}

fn outline(component: &Component, depth: usize, lines: &mut Vec<String>) {
    let name = component.name.as_deref().unwrap_or("(unnamed)");
    let tablet = component
        .styles
        .tablet
        .as_ref()
        .map(|t| format!(", {} tablet", t.len()))
        .unwrap_or_default();
    lines.push(format!(
        "{}{} [{}] {} styles{}",
        "  ".repeat(depth),
        name,
        component.attrs.node_type,
        component.styles.default.len(),
        tablet
    ));
    for child in component.children() {
        outline(child, depth + 1, lines);
    }
}

fn color(text: &str, code: &str, colorize: bool) -> String {
    if colorize {
        format!("\u{1b}[{code}m{text}\u{1b}[0m")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fww_lib::parse_selection;
    use std::io::Write;

    fn converted(json: &str) -> FwwOutput {
        let selection = parse_selection(json).unwrap();
        let result = ConversionWorkflow::default()
            .convert(&selection, &NoVariables)
            .unwrap();
        FwwOutput::Convert(ConvertOutput {
            version: FWW_OUTPUT_VERSION.to_string(),
            input: "test.json".into(),
            node_count: result.component.count(),
            result,
        })
    }

    #[test]
    fn format_pretty_outlines_tree_and_fonts() {
        let body = converted(
            r#"{"type":"FRAME","id":"1","name":"Card","width":1000,"children":[
                {"type":"TEXT","id":"2","name":"Title","characters":"Hi",
                 "fontName":{"family":"Inter","style":"Bold"}}]}"#,
        );
        let text = format_pretty(&body, false);
        assert!(text.starts_with("Converted 2 components"));
        assert!(text.contains("Card [FRAME]"));
        assert!(text.contains("  Title [TEXT]"));
        assert!(text.contains("1 tablet"));
        assert!(text.contains("Inter (google) 700"));
        assert!(!text.contains("\u{1b}["));
    }

    #[test]
    fn format_pretty_handles_errors() {
        let payload = FwwError::EmptySelection.to_payload();
        let body = FwwOutput::Error(ErrorOutput {
            version: FWW_OUTPUT_VERSION.to_string(),
            message: Some(payload.message.clone()),
            error: payload,
        });
        let text = format_pretty(&body, false);
        assert!(text.contains("error: No selection found"));
        assert!(text.contains("hint:"));
    }

    #[test]
    fn load_config_rejects_invalid_policy() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[sizing]\nfull_width_ratio = 0").unwrap();
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }

    #[test]
    fn load_config_defaults_without_path() {
        assert_eq!(load_config(None).unwrap(), Config::default());
    }

    #[test]
    fn render_error_always_returns_fatal_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("err.json");
        let code = render_error(
            FwwError::Config("boom".to_string()),
            OutputFormat::Json,
            Some(path.clone()),
        );
        assert_eq!(code, ExitCode::from(2));
        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("\"mode\":\"error\""));
    }
}
