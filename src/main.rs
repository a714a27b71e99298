//! folio - site configuration CLI.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use folio::{
    cli::{self, Cli, Commands},
    config::{SiteConfig, init_config},
    logger,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    // init runs before any config exists
    if !matches!(cli.command, Commands::Init { .. }) {
        init_config(SiteConfig::load(&cli)?);
    }

    match &cli.command {
        Commands::Init { path, dry } => cli::init::new_config(path.as_deref(), *dry),
        Commands::Check => {
            cli::check::report(SiteConfig::locate(&cli)?.as_deref());
            Ok(())
        }
        Commands::Show { format, pretty } => cli::show::run(*format, *pretty),
        Commands::Paginate { count } => {
            cli::query::run_paginate(*count);
            Ok(())
        }
        Commands::Publish {
            date,
            now,
            draft,
            dev,
        } => {
            cli::query::run_publish(*date, *now, *draft, *dev);
            Ok(())
        }
        Commands::Links {
            file_path,
            slug,
            og_image,
            hide_edit,
        } => {
            cli::query::run_links(file_path, slug.as_deref(), og_image.as_deref(), *hide_edit);
            Ok(())
        }
    }
}
