//! Hueprint CLI
//!
//! Command-line front end for the palette engine.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hueprint_theme::{
    decode, format_snippet_with, ColorScheme, Emotion, PaletteConfig, PaletteState, RandomHues,
    ShareParams,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;

#[derive(Parser)]
#[command(name = "hueprint")]
#[command(author, version, about = "Generate, share, and export website color palettes")]
#[command(propagate_version = true)]
struct Cli {
    /// Path to hueprint.toml (or a directory containing one)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new light/dark palette pair and print its share query
    Generate {
        /// Seed for reproducible hues
        #[arg(long)]
        seed: Option<u64>,

        /// Seed the palette from an emotion preset instead of a random hue
        #[arg(long, value_parser = parse_emotion)]
        emotion: Option<Emotion>,

        /// Share the dark scheme
        #[arg(long)]
        dark: bool,

        /// Also print the CSS snippet
        #[arg(long)]
        css: bool,
    },

    /// Print the CSS snippet for a shared palette
    Export {
        /// Share query, URL, or bare token
        shared: String,
    },

    /// List every role of a shared palette
    Inspect {
        /// Share query, URL, or bare token
        shared: String,

        /// Show the dark palette regardless of the shared flag
        #[arg(long)]
        dark: bool,
    },

    /// List emotion presets
    Emotions,

    /// Print the effective configuration as TOML
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate {
            seed,
            emotion,
            dark,
            css,
        } => cmd_generate(&config, seed, emotion, dark, css),
        Commands::Export { shared } => cmd_export(&config, &shared),
        Commands::Inspect { shared, dark } => cmd_inspect(&shared, dark),
        Commands::Emotions => cmd_emotions(),
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_emotion(value: &str) -> Result<Emotion, String> {
    Emotion::from_id(value).ok_or_else(|| {
        let ids: Vec<_> = Emotion::all().iter().map(|e| e.id()).collect();
        format!("unknown emotion '{value}', expected one of: {}", ids.join(", "))
    })
}

/// Accept `?palette=...&dark=...`, a full URL, or a bare token.
fn parse_shared(input: &str) -> ShareParams {
    ShareParams::from_query(input).unwrap_or_else(|| ShareParams {
        token: input.trim().to_string(),
        dark: false,
    })
}

fn cmd_generate(
    config: &PaletteConfig,
    seed: Option<u64>,
    emotion: Option<Emotion>,
    dark: bool,
    css: bool,
) -> Result<()> {
    let scheme = if dark {
        ColorScheme::Dark
    } else {
        config.generate.scheme
    };
    let mut state = PaletteState::new(scheme);

    match (emotion, seed.or(config.generate.seed)) {
        (Some(emotion), _) => {
            info!("generating from emotion {emotion}");
            state.apply_emotion(emotion)?;
        }
        (None, Some(seed)) => {
            info!("generating with seed {seed}");
            state.regenerate(&mut RandomHues::seeded(seed))?;
        }
        (None, None) => {
            state.regenerate(&mut RandomHues::thread())?;
        }
    }

    let query = state.share_query()?.context("No palette was generated")?;
    println!("?{query}");

    if css {
        if let Some(snippet) = state.css_snippet(&config.snippet) {
            println!();
            print!("{snippet}");
        }
    }

    Ok(())
}

fn cmd_export(config: &PaletteConfig, shared: &str) -> Result<()> {
    let params = parse_shared(shared);
    let (pair, _) = decode(&params).context("Failed to decode shared palette")?;
    print!("{}", format_snippet_with(&pair, &config.snippet));
    Ok(())
}

fn cmd_inspect(shared: &str, force_dark: bool) -> Result<()> {
    let params = parse_shared(shared);
    let (pair, scheme) = decode(&params).context("Failed to decode shared palette")?;
    let scheme = if force_dark { ColorScheme::Dark } else { scheme };
    let palette = pair.for_scheme(scheme);

    println!("scheme: {scheme:?}");
    for (role, color) in palette.iter() {
        println!("  {:<22} {color}", role.name());
    }

    let missing = palette.missing_roles();
    if !missing.is_empty() {
        let names: Vec<_> = missing.iter().map(|role| role.name()).collect();
        println!("missing: {}", names.join(", "));
    }

    Ok(())
}

fn cmd_emotions() -> Result<()> {
    for emotion in Emotion::all() {
        println!(
            "{:<16} {:<28} hue {}",
            emotion.id(),
            emotion.display_name(),
            emotion.base_hue()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn shared_input_accepts_query_url_and_token() {
        let query = parse_shared("?palette=abc&dark=true");
        assert_eq!(query.token, "abc");
        assert!(query.dark);

        let url = parse_shared("https://mockup.example/?palette=abc&dark=false#top");
        assert_eq!(url.token, "abc");
        assert!(!url.dark);

        let token = parse_shared("  abc\n");
        assert_eq!(token.token, "abc");
        assert!(!token.dark);
    }

    #[test]
    fn emotion_flag_parses_ids_and_names() {
        assert_eq!(parse_emotion("trust"), Ok(Emotion::Trust));
        assert_eq!(parse_emotion("Sophistication"), Ok(Emotion::Sophistication));
        assert!(parse_emotion("anger").unwrap_err().contains("trust"));
    }

    #[test]
    fn generate_flags_parse() {
        let cli = Cli::try_parse_from([
            "hueprint", "generate", "--seed", "7", "--emotion", "luxury", "--dark", "--css",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate {
                seed,
                emotion,
                dark,
                css,
            } => {
                assert_eq!(seed, Some(7));
                assert_eq!(emotion, Some(Emotion::Luxury));
                assert!(dark);
                assert!(css);
            }
            _ => panic!("expected generate"),
        }
    }
}
