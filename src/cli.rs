//! Command-line interface for wp2jekyll.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// wp2jekyll - Convert a WordPress WXR export into a Jekyll site.
///
/// Reads the zipped export produced by the WordPress export tool and
/// produces a zip of front-mattered Markdown posts, comment data files,
/// and an asset manifest.
#[derive(Parser, Debug)]
#[command(
    name = "wp2jekyll",
    author = "wp2jekyll Contributors",
    version,
    about = "Convert a WordPress WXR export into a Jekyll site",
    after_help = "Examples:\n  \
                  wp2jekyll import export.zip -o jekyll.zip\n  \
                  wp2jekyll import export.zip -c site.toml\n  \
                  wp2jekyll fix-code _posts"
)]
pub struct Cli {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert an export zip into a Jekyll site zip
    Import {
        /// Path to the WordPress export zip
        #[arg(value_name = "EXPORT_ZIP")]
        export: PathBuf,

        /// Path of the Jekyll zip to write
        #[arg(short = 'o', long = "output", default_value = "jekyll.zip")]
        output: PathBuf,

        /// Site config: a TOML file path or inline TOML
        #[arg(short = 'c', long = "config")]
        config: Option<String>,

        /// Stop after importing N posts
        #[arg(long = "max-posts", value_name = "N")]
        max_posts: Option<usize>,
    },

    /// Rewrite comment-delimited code regions in existing site files
    FixCode {
        /// Directory to walk (typically _posts)
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_import_defaults() {
        let cli = Cli::parse_from(["wp2jekyll", "import", "export.zip"]);
        assert_eq!(cli.log_level, "warn");
        match cli.command {
            Command::Import {
                export,
                output,
                config,
                max_posts,
            } => {
                assert_eq!(export, PathBuf::from("export.zip"));
                assert_eq!(output, PathBuf::from("jekyll.zip"));
                assert!(config.is_none());
                assert!(max_posts.is_none());
            }
            _ => panic!("expected import"),
        }
    }

    #[test]
    fn test_cli_parse_import_options() {
        let cli = Cli::parse_from([
            "wp2jekyll",
            "import",
            "export.zip",
            "-o",
            "out.zip",
            "-c",
            "[layout]\nposts_dir = \"p\"",
            "--max-posts",
            "3",
            "-l",
            "debug",
        ]);
        assert_eq!(cli.log_level, "debug");
        match cli.command {
            Command::Import {
                output, max_posts, ..
            } => {
                assert_eq!(output, PathBuf::from("out.zip"));
                assert_eq!(max_posts, Some(3));
            }
            _ => panic!("expected import"),
        }
    }

    #[test]
    fn test_cli_parse_fix_code() {
        let cli = Cli::parse_from(["wp2jekyll", "fix-code", "_posts"]);
        match cli.command {
            Command::FixCode { dir } => assert_eq!(dir, PathBuf::from("_posts")),
            _ => panic!("expected fix-code"),
        }
    }
}
