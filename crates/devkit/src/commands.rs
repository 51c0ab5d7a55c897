use crate::cli::{Cli, ColorCommand, Command, DiffArgs, GenCommand, QrArgs};
use crate::io::{read_source, read_stdin, write_output, STDIN_MARKER};
use anyhow::{bail, Context, Result};
use devkit_color::{parse_hex, Color, ColorEdit, ColorState, Hsl, HslChannel, RgbChannel};
use devkit_core::{Config, FormConfig};
use devkit_diff::{
    compare, render_side_by_side, render_unified, summarize, DiffRow, RenderOptions,
};
use devkit_form::FormBuilder;
use devkit_gen::{
    format_records, generate_password, generate_records, generate_uuid, render_qr,
    PasswordOptions, QrOptions, RecordFields, UuidVersion,
};
use devkit_markdown::{render_markdown, MarkdownOptions};
use devkit_text::{replace_all, Transform};
use serde_json::json;
use tracing::debug;

pub async fn execute(cli: Cli, config: &Config) -> Result<()> {
    let json = cli.json;

    let output = match cli.command {
        Command::Diff(args) => {
            if args.old == STDIN_MARKER && args.new == STDIN_MARKER {
                bail!("Only one side of a diff can be read from stdin");
            }
            let old = read_source(Some(&args.old)).await?;
            let new = read_source(Some(&args.new)).await?;
            cmd_diff(config, &args, &old, &new, json)?
        }
        Command::Color { command } => cmd_color(command, json)?,
        Command::Text { transform, input } => {
            let input = text_input(input).await?;
            cmd_text(transform, &input, json)?
        }
        Command::Replace {
            pattern,
            replacement,
            input,
        } => {
            let input = text_input(input).await?;
            cmd_replace(&input, &pattern, &replacement, json)?
        }
        Command::Gen { command } => cmd_gen(config, command, json)?,
        Command::Qr(args) => {
            let text = match &args.text {
                Some(text) => text.clone(),
                None => text_input(None).await?,
            };
            cmd_qr(config, &args, &text, json)?
        }
        Command::Markdown {
            file,
            no_gfm,
            no_breaks,
        } => {
            let markdown = read_source(file.as_deref()).await?;
            let options = MarkdownOptions {
                gfm: !no_gfm,
                breaks: !no_breaks,
            };
            cmd_markdown(&markdown, &options, json)?
        }
        Command::Form {
            spec,
            no_style,
            title,
        } => {
            let spec = read_source(spec.as_deref()).await?;
            let mut form_config = config.form_settings();
            if no_style {
                form_config.include_style = false;
            }
            if let Some(title) = title {
                form_config.title = title;
            }
            cmd_form(&form_config, &spec, json)?
        }
    };

    write_output(&output).await
}

async fn text_input(input: Option<String>) -> Result<String> {
    match input {
        Some(text) => Ok(text),
        None => {
            let text = read_stdin().await?;
            // a trailing newline from `echo` is not part of the input
            Ok(text.strip_suffix('\n').unwrap_or(&text).to_string())
        }
    }
}

pub fn cmd_diff(
    config: &Config,
    args: &DiffArgs,
    old: &str,
    new: &str,
    json: bool,
) -> Result<String> {
    let settings = config.diff_settings();
    let rows = compare(old, new);
    let summary = summarize(&rows);
    debug!(rows = summary.total, different = summary.different, "compared");

    let mut options = RenderOptions::from(&settings);
    if args.only_changes {
        options.only_changes = true;
    }
    if let Some(width) = args.width {
        options.width = width;
    }

    // The summary always counts every row; only the listing is filtered.
    let shown: Vec<DiffRow> = rows
        .into_iter()
        .filter(|row| !options.only_changes || row.is_different)
        .collect();

    if json {
        let value = json!({
            "rows": shown,
            "summary": summary,
            "identical": summary.is_identical(),
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let mut output = if args.unified || settings.unified {
        render_unified(&shown)
    } else {
        render_side_by_side(&shown, &options)
    };
    if summary.is_identical() {
        output.push_str(&format!("{} rows, identical", summary.total));
    } else {
        output.push_str(&format!(
            "{} rows, {} same, {} different",
            summary.total, summary.same, summary.different
        ));
    }
    Ok(output)
}

pub fn cmd_color(command: ColorCommand, json: bool) -> Result<String> {
    let state = ColorState::default();

    let state = match command {
        ColorCommand::Hex { value } => state.apply(ColorEdit::Pick(parse_hex(&value)?)),
        ColorCommand::Rgb { r, g, b } => state.apply_all([
            ColorEdit::Rgb(RgbChannel::R, r),
            ColorEdit::Rgb(RgbChannel::G, g),
            ColorEdit::Rgb(RgbChannel::B, b),
        ]),
        ColorCommand::Hsl { h, s, l } => {
            // Applied as one pick: separate edits on a grey would drop the hue.
            let hsl = Hsl::new(
                h.clamp(0, HslChannel::H.max()) as u16,
                s.clamp(0, HslChannel::S.max()) as u8,
                l.clamp(0, HslChannel::L.max()) as u8,
            );
            state.apply(ColorEdit::Pick(Color::from_hsl(hsl)))
        }
        ColorCommand::Edit { start, edits } => {
            let start = ColorState::new(parse_hex(&start)?);
            let edits = edits
                .iter()
                .map(|edit| parse_edit(edit))
                .collect::<Result<Vec<_>>>()?;
            start.apply_all(edits)
        }
    };

    format_color(&state.color(), json)
}

fn format_color(color: &Color, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(color)?);
    }
    Ok(format!(
        "hex: {}\nrgb: {}\nhsl: {}",
        color.hex(),
        color.rgb(),
        color.hsl()
    ))
}

/// Parse `field=value` into an edit
fn parse_edit(edit: &str) -> Result<ColorEdit> {
    let (field, value) = edit
        .split_once('=')
        .with_context(|| format!("Expected FIELD=VALUE, got '{}'", edit))?;
    let field = field.trim();
    let value = value.trim();

    if field.eq_ignore_ascii_case("hex") {
        return Ok(ColorEdit::Hex(value.to_string()));
    }

    let number: i64 = value
        .parse()
        .with_context(|| format!("Invalid number '{}' for field '{}'", value, field))?;

    if let Ok(channel) = field.parse::<RgbChannel>() {
        return Ok(ColorEdit::Rgb(channel, number));
    }
    let channel = field.parse::<HslChannel>()?;
    Ok(ColorEdit::Hsl(channel, number))
}

pub fn cmd_text(transform: Transform, input: &str, json: bool) -> Result<String> {
    let output = transform.apply(input);
    if json {
        let value = json!({ "transform": transform.name(), "output": output });
        return Ok(serde_json::to_string_pretty(&value)?);
    }
    Ok(output)
}

pub fn cmd_replace(input: &str, pattern: &str, replacement: &str, json: bool) -> Result<String> {
    let output = replace_all(input, pattern, replacement)?;
    if json {
        let value = json!({ "pattern": pattern, "output": output });
        return Ok(serde_json::to_string_pretty(&value)?);
    }
    Ok(output)
}

pub fn cmd_gen(config: &Config, command: GenCommand, json: bool) -> Result<String> {
    match command {
        GenCommand::Password {
            length,
            no_upper,
            no_lower,
            no_numbers,
            no_symbols,
            count,
        } => {
            let mut options = PasswordOptions::from(&config.password_settings());
            if let Some(length) = length {
                options.length = length;
            }
            options.uppercase &= !no_upper;
            options.lowercase &= !no_lower;
            options.numbers &= !no_numbers;
            options.symbols &= !no_symbols;

            if options.charset().is_empty() {
                bail!("At least one character class must be enabled");
            }

            let passwords: Vec<String> = (0..count).map(|_| generate_password(&options)).collect();
            if json {
                return Ok(serde_json::to_string_pretty(&passwords)?);
            }
            Ok(passwords.join("\n"))
        }
        GenCommand::Uuid {
            v5,
            namespace,
            count,
        } => {
            let version = match v5 {
                None => UuidVersion::V4,
                Some(name) => {
                    let mut settings = config.uuid_settings();
                    if let Some(namespace) = namespace {
                        settings.namespace = namespace;
                    }
                    if !name.is_empty() {
                        settings.name = name;
                    }
                    UuidVersion::v5_from_config(&settings)?
                }
            };

            let ids: Vec<String> = (0..count)
                .map(|_| generate_uuid(&version).to_string())
                .collect();
            if json {
                return Ok(serde_json::to_string_pretty(&ids)?);
            }
            Ok(ids.join("\n"))
        }
        GenCommand::Data { count, fields } => {
            let fields = match fields {
                Some(list) => RecordFields::parse_list(&list)?,
                None => RecordFields::default(),
            };
            let records = generate_records(count, &fields);
            Ok(format_records(&records, json)?)
        }
    }
}

pub fn cmd_qr(config: &Config, args: &QrArgs, text: &str, json: bool) -> Result<String> {
    let mut options = QrOptions::from_config(&config.qr_settings())?;
    if let Some(size) = args.size {
        options.size = size;
    }
    if let Some(level) = &args.level {
        options.level = level.parse()?;
    }

    let output = render_qr(text, args.format, &options)?;
    if json {
        let value = json!({
            "text": text,
            "size": options.effective_size(),
            "output": output,
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }
    Ok(output)
}

pub fn cmd_markdown(markdown: &str, options: &MarkdownOptions, json: bool) -> Result<String> {
    let html = render_markdown(markdown, options);
    if json {
        return Ok(serde_json::to_string_pretty(&json!({ "html": html }))?);
    }
    Ok(html)
}

pub fn cmd_form(config: &FormConfig, spec: &str, json: bool) -> Result<String> {
    let builder = FormBuilder::from_spec(spec)?;
    let html = builder.render_html(config)?;
    if json {
        let value = json!({ "elements": builder.elements(), "html": html });
        return Ok(serde_json::to_string_pretty(&value)?);
    }
    Ok(html)
}
