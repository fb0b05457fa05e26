use std::path::Path;
use std::process::ExitCode;

use argot_cli::arguments::ValueProvider;
use argot_cli::cli_args::{Args, Command, ResolveArgs};
use argot_core::error::Result;
use argot_core::merge::{
    extract_from_environment, extract_from_profiles, resolve_arguments, LoadedProfiles,
    ProcessEnvironment,
};
use argot_core::settings::{Settings, SettingsHolder};
use argot_core::suggest::{diagnose_unknown_command, Diagnosis};
use argot_core::{config, file_handling};
use clap::Parser;
use crossterm::style::Stylize;
use itertools::Itertools;
use log::{debug, info};

fn censor(settings: &Settings, tokens: &[String]) {
    let censored = settings.censored_names().censor_tokens(tokens);
    println!("{}", censored.iter().join(" "));
}

fn resolve(settings: &Settings, args: &ResolveArgs) -> Result<()> {
    let definitions = file_handling::get_argument_definitions(&config::expand_path(
        &args.definitions_path,
    ))?;

    let profiles = match &args.profiles_path {
        Some(path) => file_handling::get_profiles(&config::expand_path(path))?,
        None => LoadedProfiles::default(),
    };

    let from_profiles = extract_from_profiles(&profiles, &args.profile_order, &definitions)?;
    let from_environment =
        extract_from_environment(&settings.app_prefix, &definitions, &ProcessEnvironment);
    let from_command_line = args
        .command_line_values()?
        .with_executable(settings.root_command_name.clone());

    let resolved = resolve_arguments(&from_profiles, &from_environment, &from_command_line);
    let censored = settings.censored_names().censor_arguments(&resolved);
    debug!("Resolved arguments:\n{}", censored);

    println!("{censored}");
    Ok(())
}

fn suggest(settings: &Settings, tree_path: &str, words: &[String]) -> Result<ExitCode> {
    let tree = file_handling::get_command_tree(&config::expand_path(tree_path))?;
    let entered = words.iter().join(" ");

    match diagnose_unknown_command(&tree, &entered)? {
        Diagnosis::RootHelp => {
            println!(
                "Use \"{} --help\" to view groups, commands, and options.",
                settings.root_command_name
            );
            Ok(ExitCode::SUCCESS)
        }
        Diagnosis::Failure(suggestion) => {
            eprintln!("{}", suggestion.message.red());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_settings(settings_path: &str, force: bool) -> Result<()> {
    if Path::new(settings_path).exists() && !force {
        info!("Settings file `{}` already exists, not overwriting", settings_path);
        println!("Settings file already exists at `{settings_path}`. Use --force to overwrite.");
        return Ok(());
    }

    file_handling::write_settings(settings_path, &Settings::default())?;
    println!("Wrote default settings to `{settings_path}`.");
    Ok(())
}

fn execute() -> Result<ExitCode> {
    let args = Args::parse();

    let settings_path = config::get_settings_path(args.settings_path.as_deref());
    debug!("Settings path: `{}`", settings_path);

    if let Command::InitSettings { force } = args.command {
        init_settings(&settings_path, force)?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut holder = SettingsHolder::new();
    let settings = holder.initialize(file_handling::get_settings(&settings_path)?)?;

    match &args.command {
        Command::Censor { tokens } => censor(settings, tokens),
        Command::Resolve(resolve_args) => resolve(settings, resolve_args)?,
        Command::Suggest { tree_path, words } => return suggest(settings, tree_path, words),
        Command::InitSettings { .. } => unreachable!("Handled before settings are loaded"),
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
