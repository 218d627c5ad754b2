/*
This code is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 06/09/2026
Last Modified: 15/10/2026
License: MIT
*/

/*!
GpTools is a command-line front end to a catalog of ArcGIS geoprocessing tool
descriptors. The following commands are recognized:

| Command           | Description                                                                              |
| ----------------- | ---------------------------------------------------------------------------------------- |
| --wd, --cd        | Changes the working directory; stored in settings.json and used as the default workspace. |
| --python          | Sets the Python interpreter used to run arcpy; stored in settings.json.                  |
| --env             | Sets an environment for this invocation, e.g. --env cellSize=10. May be repeated.         |
| -v                | Verbose mode; stored in settings.json. -v=false turns it off.                             |
| listtools         | Lists all available tools. Keywords may also be used, listtools simplify.                 |
| toolhelp          | Prints the help associated with a tool; toolhelp SimplifyLine.                            |
| toolparameters    | Prints the parameters (in json form) for a specific tool; toolparameters Buffer.          |
| toolbox           | Prints the toolbox associated with a tool, or of every tool; toolbox Slope.               |
| environments      | Prints the environment settings honored by a tool; environments Slope.                    |
| run               | Runs a tool; run Buffer --in_features=roads.shp ... Add --dry-run to print the request.   |

--dry-run and --env may follow the tool arguments of `run`; --wd, --python and -v must come
before them.
| license           | Prints the license.                                                                       |
| version           | Prints the version information.                                                           |

*/

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use gptools::geoprocessor::ArcpyGeoprocessor;
use gptools::tools::ToolManager;
use gptools_common::configs::{get_configs, save_configs, Configs};
use gptools_common::environments::EnvironmentSettings;
use std::path;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Describes, validates and runs ArcGIS geoprocessing tools.
#[derive(Parser, Debug)]
#[command(name = "gptools", disable_version_flag = true)]
struct CliArgs {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Working directory; becomes the default workspace.
    #[arg(long = "wd", visible_alias = "cd", global = true, value_name = "DIR")]
    working_directory: Option<String>,

    /// Python interpreter with arcpy available.
    #[arg(long, global = true, value_name = "PATH")]
    python: Option<String>,

    /// Environment setting for this run, e.g. --env cellSize=10.
    #[arg(long = "env", global = true, value_name = "NAME=VALUE")]
    environments: Vec<String>,

    /// Verbose mode; -v=false turns it off.
    #[arg(
        short = 'v',
        long,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    verbose: Option<bool>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lists all available tools, optionally filtered by keywords.
    #[command(name = "listtools", visible_alias = "list_tools")]
    ListTools { keywords: Vec<String> },

    /// Prints the help associated with a tool, or with every tool.
    #[command(name = "toolhelp")]
    ToolHelp { tool: Option<String> },

    /// Prints the parameters of a tool in JSON form.
    #[command(name = "toolparameters")]
    ToolParameters { tool: String },

    /// Prints the toolbox of a tool, or of every tool.
    #[command(name = "toolbox")]
    Toolbox { tool: Option<String> },

    /// Prints the environment settings honored by a tool.
    #[command(name = "environments")]
    Environments { tool: String },

    /// Runs a tool with --name=value parameter arguments.
    #[command(name = "run")]
    Run {
        tool: String,

        /// Prints the request instead of running it.
        #[arg(long)]
        dry_run: bool,

        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Prints the license.
    #[command(name = "license", visible_alias = "licence")]
    License,

    /// Prints the version information.
    #[command(name = "version")]
    Version,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let mut configs = get_configs().context("reading settings.json")?;
    if update_configs(&mut configs, &args) {
        save_configs(&configs).context("writing settings.json")?;
    }
    init_logging(configs.verbose_mode);
    debug!("gptools v{} starting", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    let tm = ToolManager::new(&configs.working_directory, configs.verbose_mode)?;
    let command = match args.command {
        Some(command) => command,
        None => {
            version();
            CliArgs::command().print_help()?;
            println!("\n{}", tm.list_tools());
            return Ok(());
        }
    };

    match command {
        Commands::ListTools { keywords } => {
            if keywords.is_empty() {
                println!("{}", tm.list_tools());
            } else {
                println!("{}", tm.list_tools_with_keywords(&keywords));
            }
        }
        Commands::ToolHelp { tool } => {
            println!("{}", tm.tool_help(tool.as_deref().unwrap_or(""))?)
        }
        Commands::ToolParameters { tool } => println!("{}", tm.tool_parameters(&tool)?),
        Commands::Toolbox { tool } => println!("{}", tm.toolbox(tool.as_deref().unwrap_or(""))?),
        Commands::Environments { tool } => println!("{}", tm.environments(&tool)?),
        Commands::Run {
            tool,
            dry_run,
            args: tool_args,
        } => {
            let run_args = split_run_args(tool_args);
            let dry_run = dry_run || run_args.dry_run;
            let tool_args = run_args.tool_args;
            let mut environments = configs.environment_settings()?;
            for pair in args.environments.iter().chain(run_args.environments.iter()) {
                environments.set_pair(pair)?;
            }
            run(&tm, &configs, &tool, &tool_args, &environments, dry_run)?;
        }
        Commands::License => license(),
        Commands::Version => version(),
    }
    Ok(())
}

#[derive(Debug, Default, PartialEq)]
struct RunArgs {
    tool_args: Vec<String>,
    environments: Vec<String>,
    dry_run: bool,
}

/// Pulls `--dry-run` and `--env` out of the trailing arguments of `run`.
fn split_run_args(args: Vec<String>) -> RunArgs {
    let mut run_args = RunArgs::default();
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        if arg == "--dry-run" {
            run_args.dry_run = true;
        } else if arg == "--env" {
            if let Some(pair) = iter.next() {
                run_args.environments.push(pair);
            }
        } else if let Some(pair) = arg.strip_prefix("--env=") {
            run_args.environments.push(pair.to_string());
        } else {
            run_args.tool_args.push(arg);
        }
    }
    run_args
}

/// Applies the persistent options to `configs`; true if anything changed.
fn update_configs(configs: &mut Configs, args: &CliArgs) -> bool {
    let mut configs_modified = false;
    if let Some(wd) = &args.working_directory {
        let sep = path::MAIN_SEPARATOR;
        let mut working_dir = wd.trim().trim_matches('"').trim_matches('\'').to_string();
        if !working_dir.is_empty() && !working_dir.ends_with(sep) && !working_dir.ends_with('/') {
            working_dir.push(sep);
        }
        if configs.working_directory != working_dir {
            configs.working_directory = working_dir;
            configs_modified = true;
        }
    }
    if let Some(python) = &args.python {
        if configs.python_executable != *python {
            configs.python_executable = python.clone();
            configs_modified = true;
        }
    }
    if let Some(verbose) = args.verbose {
        if configs.verbose_mode != verbose {
            configs.verbose_mode = verbose;
            configs_modified = true;
        }
    }
    configs_modified
}

fn run(
    tm: &ToolManager,
    configs: &Configs,
    tool_name: &str,
    tool_args: &[String],
    environments: &EnvironmentSettings,
    dry_run: bool,
) -> Result<()> {
    if dry_run {
        let request = tm.build_request(tool_name, tool_args, environments)?;
        println!("{}", request.to_json()?);
        println!("{}", request.to_command_string());
        return Ok(());
    }

    let verbose = configs.verbose_mode;
    if verbose {
        let tool_name = tm
            .get_tool(tool_name)
            .map(|t| t.get_tool_name())
            .unwrap_or_else(|| tool_name.to_string());
        let welcome_len = format!("* Welcome to {} *", tool_name).len().max(23);
        println!("{}", "*".repeat(welcome_len));
        println!("* Welcome to {} {}*", tool_name, " ".repeat(welcome_len - 15 - tool_name.len()));
        println!("* Powered by GpTools {}*", " ".repeat(welcome_len - 22));
        println!("{}", "*".repeat(welcome_len));
    }

    let geoprocessor = ArcpyGeoprocessor::new(&configs.python_executable);
    let result = tm
        .run_tool(tool_name, tool_args, environments, &geoprocessor)
        .with_context(|| format!("running {}", tool_name))?;
    for message in &result.messages {
        println!("{}", message);
    }
    if verbose {
        println!("{}", &format!("Elapsed Time: {}", result.elapsed));
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn license() {
    let license_text = "GpTools License
Copyright 2026 GpTools developers

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and
associated documentation files (the \"Software\"), to deal in the Software without restriction,
including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense,
and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so,
subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial
portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT
NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES
OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.";
    println!("{}", license_text);
}

fn version() {
    const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");
    println!(
        "GpTools v{} by the GpTools developers (c) 2026

GpTools describes ArcGIS geoprocessing tools as typed descriptors and runs
them through an arcpy-enabled Python interpreter.",
        VERSION.unwrap_or("unknown")
    );
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cli_definition() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_run_arguments_pass_through() {
        let args = CliArgs::parse_from([
            "gptools",
            "--env",
            "cellSize=10",
            "run",
            "Slope",
            "--in_raster=dem.tif",
            "--out_raster",
            "slope.tif",
        ]);
        assert_eq!(args.environments, vec!["cellSize=10"]);
        match args.command {
            Some(Commands::Run { tool, dry_run, args }) => {
                assert_eq!(tool, "Slope");
                assert!(!dry_run);
                assert_eq!(args, vec!["--in_raster=dem.tif", "--out_raster", "slope.tif"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_environments_after_tool_arguments() {
        let args = CliArgs::parse_from([
            "gptools",
            "run",
            "Slope",
            "--in_raster=dem.tif",
            "--env",
            "cellSize=10",
            "--out_raster=slope.tif",
            "--env=extent=MAXOF",
            "--dry-run",
        ]);
        let tool_args = match args.command {
            Some(Commands::Run { args, .. }) => args,
            other => panic!("unexpected {:?}", other),
        };
        let run_args = split_run_args(tool_args);
        assert!(run_args.dry_run);
        assert_eq!(run_args.environments, vec!["cellSize=10", "extent=MAXOF"]);
        assert_eq!(run_args.tool_args, vec!["--in_raster=dem.tif", "--out_raster=slope.tif"]);
    }

    #[test]
    fn test_persistent_options() {
        let mut configs = Configs::new();
        let args = CliArgs::parse_from(["gptools", "-v", "--wd=/data", "listtools"]);
        assert!(update_configs(&mut configs, &args));
        assert!(configs.verbose_mode);
        assert!(configs.working_directory.starts_with("/data"));
        assert!(!update_configs(&mut configs, &args));

        let args = CliArgs::parse_from(["gptools", "-v=false", "version"]);
        assert!(update_configs(&mut configs, &args));
        assert!(!configs.verbose_mode);
    }
}
