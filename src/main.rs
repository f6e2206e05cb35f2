// pbx-order: Deterministic ordering for generated project files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Elements | References | Targets | Key | Options | Inis | Version
//! ```

use std::process::ExitCode;

use pbx_order::cli::global::GlobalOptions;
use pbx_order::cli::{self, Command};
use pbx_order::cmd::config::{run_inis_command, run_options_command};
use pbx_order::cmd::order::{OrderKind, run_key_command, run_order_command};
use pbx_order::config::Config;
use pbx_order::config::loader::ConfigLoader;
use pbx_order::logging::init_logging;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Config file picked up from the working directory.
const DEFAULT_INI: &str = "pbx-order.toml";

/// Prefix of `PBX_ORDER_<SECTION>__<KEY>` environment overrides.
const ENV_PREFIX: &str = "PBX_ORDER";

fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&config.log_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config)
}

fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Inis) => {
            let loader = build_config_loader(&cli.global);
            run_inis_command(&loader.format_loaded_files());
            Ok(())
        }
        Some(Command::Elements(args)) => run_order_command(OrderKind::Elements, args, config),
        Some(Command::References(args)) => run_order_command(OrderKind::References, args, config),
        Some(Command::Targets(args)) => run_order_command(OrderKind::Targets, args, config),
        Some(Command::Key(args)) => run_key_command(args, config),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !global.no_default_inis {
        loader = loader.add_toml_file_optional(DEFAULT_INI);
    }
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> pbx_order::error::Result<Config> {
    build_config_loader(global)
        .with_overrides(&global.to_config_overrides())?
        .build()
}
