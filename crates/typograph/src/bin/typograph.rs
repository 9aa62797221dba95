//! Command line front end for the typography codec and renderer.
//!
//! ```text
//! typograph decode "color: red; font-size: 12px;"
//! typograph encode "color: red;" --set fontSize=16px --set color=
//! typograph variant "" Hero --config variants.yaml
//! typograph render "Hello" --style "font-size: 16px;" --format 3
//! ```

use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::EnvFilter;

use typograph::{
    decode, encode, render_style, AttrKey, AttributePatch, ConfigError, TypographyConfig,
    VariantCatalog,
};

fn command() -> Command {
    Command::new("typograph")
        .about("Decode, edit and render typography style-strings")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("decode")
                .about("Print the attributes of a style-string as JSON")
                .arg(Arg::new("style").required(true).help("Stored style-string")),
        )
        .subcommand(
            Command::new("encode")
                .about("Merge attribute edits into a style-string")
                .arg(Arg::new("style").required(true).help("Stored style-string"))
                .arg(
                    Arg::new("set")
                        .long("set")
                        .value_name("KEY=VALUE")
                        .action(ArgAction::Append)
                        .help("Attribute edit using camelCase keys; an empty value clears"),
                ),
        )
        .subcommand(
            Command::new("variant")
                .about("Apply a named variant to a style-string")
                .arg(Arg::new("style").required(true).help("Stored style-string"))
                .arg(Arg::new("name").required(true).help("Variant name; unknown names clear"))
                .arg(
                    Arg::new("config")
                        .long("config")
                        .value_name("FILE")
                        .required(true)
                        .help("YAML or JSON file with the variant definitions"),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Render a text run to HTML")
                .arg(Arg::new("text").required(true).help("Plain text content"))
                .arg(
                    Arg::new("style")
                        .long("style")
                        .default_value("")
                        .help("Stored style-string"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_name("MASK")
                        .value_parser(clap::value_parser!(u32))
                        .default_value("0")
                        .help("Format flag bitmask (1 bold, 2 italic, 4 strikethrough, ...)"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the markup tree as JSON instead of HTML"),
                ),
        )
}

fn parse_edits(matches: &ArgMatches) -> Result<AttributePatch> {
    let mut patch = AttributePatch::new();
    for raw in matches.get_many::<String>("set").into_iter().flatten() {
        let Some((name, value)) = raw.split_once('=') else {
            bail!("expected KEY=VALUE, got '{}'", raw);
        };
        let Some(key) = AttrKey::from_field_name(name) else {
            bail!("unknown attribute '{}'", name);
        };
        patch.set(key, value);
    }
    Ok(patch)
}

fn load_catalog(path: &str) -> Result<VariantCatalog> {
    // Accept either a bare variant document or a full typography config.
    // Only a document of the wrong shape falls through to the config loader.
    match VariantCatalog::from_path(path) {
        Ok(catalog) => Ok(catalog),
        Err(ConfigError::Yaml(_) | ConfigError::Json(_)) => {
            let config = TypographyConfig::from_path(path)
                .with_context(|| format!("failed to load variants from '{}'", path))?;
            Ok(config.variant_catalog())
        }
        Err(err) => Err(err.into()),
    }
}

fn run(matches: &ArgMatches) -> Result<String> {
    match matches.subcommand() {
        Some(("decode", sub)) => {
            let style = sub.get_one::<String>("style").map(String::as_str).unwrap_or("");
            Ok(serde_json::to_string_pretty(&decode(style))?)
        }
        Some(("encode", sub)) => {
            let style = sub.get_one::<String>("style").map(String::as_str).unwrap_or("");
            Ok(encode(style, &parse_edits(sub)?))
        }
        Some(("variant", sub)) => {
            let style = sub.get_one::<String>("style").map(String::as_str).unwrap_or("");
            let name = sub.get_one::<String>("name").map(String::as_str).unwrap_or("");
            let config = sub
                .get_one::<String>("config")
                .context("missing --config")?;
            let catalog = load_catalog(config)?;
            Ok(encode(style, &catalog.resolve(name)))
        }
        Some(("render", sub)) => {
            let text = sub.get_one::<String>("text").map(String::as_str).unwrap_or("");
            let style = sub.get_one::<String>("style").map(String::as_str).unwrap_or("");
            let mask = sub.get_one::<u32>("format").copied().unwrap_or(0);
            let markup = render_style(style, text, mask);
            if sub.get_flag("json") {
                Ok(serde_json::to_string_pretty(&markup)?)
            } else {
                Ok(markup.to_html())
            }
        }
        Some((other, _)) => bail!("unknown command '{}'", other),
        None => bail!("no command given"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("TYPOGRAPH_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let matches = command().get_matches();
    println!("{}", run(&matches)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String> {
        let matches = command().try_get_matches_from(args)?;
        run(&matches)
    }

    #[test]
    fn test_command_is_valid() {
        command().debug_assert();
    }

    #[test]
    fn test_encode_command() {
        let out = run_args(&[
            "typograph",
            "encode",
            "color: red; font-size: 12px;",
            "--set",
            "fontSize=16px",
            "--set",
            "color=",
        ])
        .unwrap();
        assert_eq!(out, "font-size: 16px;");
    }

    #[test]
    fn test_encode_rejects_unknown_key() {
        let err = run_args(&["typograph", "encode", "", "--set", "fontWeight=700"]).unwrap_err();
        assert!(err.to_string().contains("fontWeight"));
    }

    #[test]
    fn test_decode_command() {
        let out = run_args(&["typograph", "decode", "color: red;"]).unwrap();
        assert!(out.contains("\"color\": \"red\""));
    }

    #[test]
    fn test_render_command() {
        let out = run_args(&["typograph", "render", "x", "--format", "2"]).unwrap();
        assert_eq!(out, "<em>x</em>");
    }

    #[test]
    fn test_variant_command_reports_duplicate_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("variants.yaml");
        std::fs::write(
            &path,
            r#"
- name: Hero
  mobile: { fontSize: 24px, lineHeight: "1.2" }
  tablet: { fontSize: 32px, lineHeight: "1.15" }
  desktop: { fontSize: 48px, lineHeight: "1.1" }
- name: Hero
  mobile: { fontSize: 20px, lineHeight: "1.2" }
  tablet: { fontSize: 30px, lineHeight: "1.15" }
  desktop: { fontSize: 40px, lineHeight: "1.1" }
"#,
        )
        .unwrap();
        let path = path.to_string_lossy().to_string();
        let err = run_args(&["typograph", "variant", "", "Hero", "--config", &path]).unwrap_err();
        assert_eq!(err.to_string(), "duplicate variant name 'Hero'");
    }

    #[test]
    fn test_variant_command_missing_file() {
        let err = run_args(&[
            "typograph",
            "variant",
            "",
            "Hero",
            "--config",
            "/nonexistent/variants.yaml",
        ])
        .unwrap_err();
        assert!(err.to_string().starts_with("failed to read '/nonexistent/variants.yaml'"));
    }

    #[test]
    fn test_variant_command_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("typography.json");
        std::fs::write(
            &path,
            r#"{
                "lineHeights": { "method": "combine", "options": [] },
                "variants": [ {
                    "name": "Body",
                    "mobile": { "fontSize": "15px", "lineHeight": "1.5" },
                    "tablet": { "fontSize": "16px", "lineHeight": "1.5" },
                    "desktop": { "fontSize": "17px", "lineHeight": "1.6" }
                } ]
            }"#,
        )
        .unwrap();
        let path = path.to_string_lossy().to_string();
        let out = run_args(&["typograph", "variant", "", "Body", "--config", &path]).unwrap();
        assert!(out.starts_with("font-size: 17px;"));
    }

    #[test]
    fn test_variant_command() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("variants.yaml");
        std::fs::write(
            &path,
            r#"
- name: Hero
  mobile: { fontSize: 24px, lineHeight: "1.2" }
  tablet: { fontSize: 32px, lineHeight: "1.15" }
  desktop: { fontSize: 48px, lineHeight: "1.1" }
"#,
        )
        .unwrap();
        let path = path.to_string_lossy().to_string();
        let out = run_args(&["typograph", "variant", "", "Hero", "--config", &path]).unwrap();
        assert!(out.ends_with("data-variant: Hero;"));
    }
}
