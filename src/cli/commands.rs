//! Subcommand handlers for convert, charsets and config actions.

use std::path::Path;

use super::args::{ConfigAction, ConvertArgs};
use super::enums::EdgeMode;
use crate::ascii::{
    CharSet, EdgeDetector, Palette, ResampleFilter, DEFAULT_CANNY_HIGH, DEFAULT_CANNY_LOW,
    DEFAULT_EDGE_WEIGHT,
};
use crate::config::{default_path as get_config_path, Config, DEFAULT_CONFIG};
use crate::error::{ConvertError, Result};
use crate::pipeline::{ConversionReport, Converter};
use crate::pipeline_config::{ConvertOptions, EdgeSettings};
use crate::render::{parse_color, Colors, Polarity};

/// Merge CLI flags over the config file into validated options.
///
/// Precedence is CLI flag, then config file, then built-in default.
pub fn build_options(args: &ConvertArgs, config: &Config) -> Result<ConvertOptions> {
    let mut builder = ConvertOptions::builder()
        .invert(args.invert_flag().unwrap_or(config.ascii.invert));

    if let Some(width) = args.width.or(config.ascii.width) {
        builder = builder.width(width);
    }
    builder = builder.palette(resolve_palette(args, config)?);
    if let Some(correction) = args.correction.or(config.ascii.correction) {
        builder = builder.correction(correction);
    }

    let filter = match (args.filter, config.ascii.filter.as_deref()) {
        (Some(filter), _) => Some(ResampleFilter::from(filter)),
        (None, Some(name)) => Some(ResampleFilter::from_name(name).ok_or_else(|| {
            invalid_setting(
                "filter",
                name,
                ResampleFilter::ALL.iter().map(|f| f.name()),
            )
        })?),
        (None, None) => None,
    };
    if let Some(filter) = filter {
        builder = builder.filter(filter);
    }

    if let Some(font) = args.font.as_ref().or(config.render.font.as_ref()) {
        builder = builder.font_path(font.clone());
    }
    if let Some(size) = args.font_size.or(config.render.font_size) {
        builder = builder.font_size(size);
    }

    builder = builder.colors(resolve_colors(args, config)?);

    if let Some(edges) = resolve_edges(args, config)? {
        builder = builder.edges(edges);
    }

    builder.build()
}

fn resolve_palette(args: &ConvertArgs, config: &Config) -> Result<Palette> {
    if let Some(chars) = &args.chars {
        return Palette::new(chars);
    }
    if let Some(charset) = args.charset {
        return Ok(CharSet::from(charset).palette());
    }
    if let Some(chars) = &config.ascii.chars {
        return Palette::new(chars);
    }
    match config.ascii.charset.as_deref() {
        Some(name) => CharSet::from_name(name)
            .map(|c| c.palette())
            .ok_or_else(|| invalid_setting("charset", name, CharSet::ALL.iter().map(|c| c.name()))),
        None => Ok(Palette::default()),
    }
}

fn resolve_colors(args: &ConvertArgs, config: &Config) -> Result<Colors> {
    let polarity = match (args.polarity, config.render.polarity.as_deref()) {
        (Some(p), _) => Polarity::from(p),
        (None, Some(name)) => Polarity::from_name(name).ok_or_else(|| {
            invalid_setting(
                "polarity",
                name,
                [Polarity::DarkOnLight.name(), Polarity::LightOnDark.name()],
            )
        })?,
        (None, None) => Polarity::default(),
    };

    let background = args
        .bg_color
        .as_deref()
        .or(config.render.bg_color.as_deref())
        .map(parse_color)
        .transpose()?;
    let text = args
        .text_color
        .as_deref()
        .or(config.render.text_color.as_deref())
        .map(parse_color)
        .transpose()?;

    Ok(Colors::resolve(polarity, background, text))
}

fn resolve_edges(args: &ConvertArgs, config: &Config) -> Result<Option<EdgeSettings>> {
    let mode = match (args.edges, config.edges.detector.as_deref()) {
        (Some(mode), _) => mode,
        (None, Some(name)) => EdgeMode::from_name(name)
            .ok_or_else(|| invalid_setting("edge detector", name, ["none", "canny", "sobel"]))?,
        (None, None) => EdgeMode::Off,
    };

    let detector = match mode {
        EdgeMode::Off => return Ok(None),
        EdgeMode::Sobel => EdgeDetector::Sobel,
        EdgeMode::Canny => {
            let low = args
                .canny_low
                .or(config.edges.canny_low)
                .unwrap_or(DEFAULT_CANNY_LOW);
            let high = args
                .canny_high
                .or(config.edges.canny_high)
                .unwrap_or(DEFAULT_CANNY_HIGH);
            EdgeDetector::canny(low, high)?
        }
    };

    let edge_weight = args
        .edge_weight
        .or(config.edges.edge_weight)
        .unwrap_or(DEFAULT_EDGE_WEIGHT);

    Ok(Some(EdgeSettings {
        detector,
        edge_weight,
    }))
}

fn invalid_setting<'a>(
    key: &'static str,
    value: &str,
    expected: impl IntoIterator<Item = &'a str>,
) -> ConvertError {
    ConvertError::InvalidSetting {
        key,
        value: value.to_string(),
        expected: expected.into_iter().collect::<Vec<_>>().join(", "),
    }
}

/// Run one conversion, writing the PNG and any requested extras.
pub fn run_convert(args: &ConvertArgs, config: &Config) -> Result<ConversionReport> {
    let options = build_options(args, config)?;
    Converter::new(options).convert_file_with_text(
        &args.input,
        &args.output,
        args.text_out.as_deref(),
    )
}

/// List built-in character sets and print them to stdout.
pub fn list_charsets() {
    println!("Available character sets (darkest first):");
    for charset in CharSet::ALL {
        println!(
            "  {:<10} {:>3} levels  \"{}\"",
            charset.name(),
            charset.palette().len(),
            charset.ramp()
        );
    }
    println!();
    println!("Use --charset <name>, or --chars \"<palette>\" for a custom one.");
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, config_path: Option<&Path>) {
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(get_config_path);

    match action {
        ConfigAction::Show => {
            let config = match Config::load(Some(&config_path)) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found, using defaults)", config_path.display());
            }
            println!();

            match toml::to_string_pretty(&config) {
                Ok(text) if text.trim().is_empty() => println!("(no settings)"),
                Ok(text) => print!("{}", text),
                Err(e) => {
                    eprintln!("Error formatting config: {}", e);
                    std::process::exit(1);
                }
            }
        }
        ConfigAction::Init => {
            if config_path.exists() {
                eprintln!("Config file already exists: {}", config_path.display());
                eprintln!("Use 'img2ascii config show' to view current settings.");
                std::process::exit(1);
            }

            // Create parent directories if needed
            if let Some(parent) = config_path.parent() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    eprintln!("Error creating config directory: {}", e);
                    std::process::exit(1);
                }
            }

            if let Err(e) = std::fs::write(&config_path, DEFAULT_CONFIG) {
                eprintln!("Error writing config file: {}", e);
                std::process::exit(1);
            }

            println!("Created config file: {}", config_path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Args, Command};
    use crate::render::{BLACK, WHITE};
    use clap::Parser;
    use image::Rgb;

    fn convert_args(argv: &[&str]) -> ConvertArgs {
        let mut full = vec!["img2ascii", "convert", "in.png"];
        full.extend_from_slice(argv);
        match Args::parse_from(full).command {
            Command::Convert(args) => args,
            other => panic!("Expected Convert subcommand, got {:?}", other),
        }
    }

    fn config(text: &str) -> Config {
        toml::from_str(text).unwrap()
    }

    #[test]
    fn test_defaults_without_config() {
        let options = build_options(&convert_args(&[]), &Config::default()).unwrap();
        assert_eq!(options.width(), 100);
        assert_eq!(options.palette(), &Palette::default());
        assert_eq!(options.colors(), Polarity::DarkOnLight.colors());
        assert!(options.edges().is_none());
    }

    #[test]
    fn test_cli_overrides_config() {
        let cfg = config("[ascii]\nwidth = 80\ncharset = \"blocks\"\n");
        let options = build_options(&convert_args(&["-w", "120"]), &cfg).unwrap();
        assert_eq!(options.width(), 120);
        assert_eq!(options.palette(), &CharSet::Blocks.palette());

        let options =
            build_options(&convert_args(&["--charset", "minimal"]), &cfg).unwrap();
        assert_eq!(options.width(), 80);
        assert_eq!(options.palette(), &CharSet::Minimal.palette());
    }

    #[test]
    fn test_invert_from_config_can_be_turned_off() {
        let cfg = config("[ascii]\ninvert = true\n");
        assert!(build_options(&convert_args(&[]), &cfg).unwrap().invert());
        assert!(!build_options(&convert_args(&["--no-invert"]), &cfg)
            .unwrap()
            .invert());
        assert!(build_options(&convert_args(&["--invert"]), &Config::default())
            .unwrap()
            .invert());
    }

    #[test]
    fn test_custom_chars_beat_charset() {
        let cfg = config("[ascii]\nchars = \"#- \"\ncharset = \"detailed\"\n");
        let options = build_options(&convert_args(&[]), &cfg).unwrap();
        assert_eq!(options.palette().to_string(), "#- ");

        let options = build_options(&convert_args(&["--chars", "@ "]), &cfg).unwrap();
        assert_eq!(options.palette().to_string(), "@ ");
    }

    #[test]
    fn test_empty_chars_rejected() {
        let err = build_options(&convert_args(&["--chars", ""]), &Config::default()).unwrap_err();
        assert!(matches!(err, ConvertError::EmptyPalette));
    }

    #[test]
    fn test_unknown_names_in_config() {
        let err = build_options(&convert_args(&[]), &config("[ascii]\ncharset = \"braille\"\n"))
            .unwrap_err();
        assert!(matches!(err, ConvertError::InvalidSetting { key: "charset", .. }));

        let err = build_options(&convert_args(&[]), &config("[ascii]\nfilter = \"bicubic\"\n"))
            .unwrap_err();
        assert!(matches!(err, ConvertError::InvalidSetting { key: "filter", .. }));

        let err = build_options(&convert_args(&[]), &config("[edges]\ndetector = \"prewitt\"\n"))
            .unwrap_err();
        assert!(err.to_string().contains("none, canny, sobel"));
    }

    #[test]
    fn test_colors_from_polarity_and_overrides() {
        let options =
            build_options(&convert_args(&["--polarity", "light-on-dark"]), &Config::default())
                .unwrap();
        assert_eq!(options.colors().background, BLACK);
        assert_eq!(options.colors().text, WHITE);

        let cfg = config("[render]\npolarity = \"light-on-dark\"\ntext_color = \"#00ff00\"\n");
        let options = build_options(&convert_args(&[]), &cfg).unwrap();
        assert_eq!(options.colors().background, BLACK);
        assert_eq!(options.colors().text, Rgb([0, 255, 0]));
    }

    #[test]
    fn test_bad_color_rejected() {
        let err = build_options(&convert_args(&["--bg-color", "mauve"]), &Config::default())
            .unwrap_err();
        assert!(matches!(err, ConvertError::InvalidColor(_)));
    }

    #[test]
    fn test_edges_from_cli() {
        let options = build_options(
            &convert_args(&["--edges", "canny", "--canny-low", "50", "--canny-high", "150"]),
            &Config::default(),
        )
        .unwrap();
        let enhancer = options.edges().unwrap();
        assert_eq!(
            enhancer.detector(),
            EdgeDetector::Canny {
                low: 50.0,
                high: 150.0
            }
        );
    }

    #[test]
    fn test_edges_from_config_and_disable_from_cli() {
        let cfg = config("[edges]\ndetector = \"sobel\"\nedge_weight = 0.5\n");
        let options = build_options(&convert_args(&[]), &cfg).unwrap();
        let enhancer = options.edges().unwrap();
        assert_eq!(enhancer.detector(), EdgeDetector::Sobel);
        assert_eq!(enhancer.weights(), (0.5, 0.5));

        let options = build_options(&convert_args(&["--edges", "none"]), &cfg).unwrap();
        assert!(options.edges().is_none());
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let err = build_options(
            &convert_args(&["--edges", "canny", "--canny-low", "200", "--canny-high", "10"]),
            &Config::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::InvalidThresholds { .. }));
    }
}
