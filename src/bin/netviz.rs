//! This is the command line tool that loads inventory spreadsheets, builds
//! the DOT documents and saves (or renders) the output.

use anyhow::{bail, Context};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use netviz::backends::graphviz::Renderer;
use netviz::core::utils::{save_to_file, sibling_path};
use netviz::ports::{render_ports, InventoryLayout};
use netviz::table::{Delimiter, Table};
use netviz::zones::{render_zones, ClusterOptions, DuplicatePolicy, PaperSize};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// The engine picked by the subcommand, with its configuration.
enum Engine {
    Ports(InventoryLayout),
    Zones(ClusterOptions),
}

impl Engine {
    fn render(&self, table: &Table) -> netviz::Result<String> {
        match self {
            Engine::Ports(layout) => render_ports(table, layout),
            Engine::Zones(opts) => render_zones(table, opts),
        }
    }
}

struct CLIOptions {
    output_path: Option<PathBuf>,
    save_dot: bool,
    render_svg: bool,
    renderer: Renderer,
    delimiter: Delimiter,
}

fn parse_delimiter(s: &str) -> Result<Delimiter, String> {
    s.parse()
}

/// Adds the flags that both subcommands share.
fn common_args(cmd: Command, default_delimiter: &'static str) -> Command {
    cmd.arg(
        Arg::new("output")
            .short('o')
            .long("output")
            .value_name("FILE")
            .value_parser(value_parser!(PathBuf))
            .help("Path of the output file (a single input only)"),
    )
    .arg(
        Arg::new("dot")
            .long("dot")
            .action(ArgAction::SetTrue)
            .help("Save a .dot file next to each input"),
    )
    .arg(
        Arg::new("svg")
            .long("svg")
            .action(ArgAction::SetTrue)
            .help("Save the .dot file and render it with the renderer"),
    )
    .arg(
        Arg::new("renderer")
            .long("renderer")
            .value_name("PROGRAM")
            .default_value("dot")
            .help("The GraphViz program used by --svg"),
    )
    .arg(
        Arg::new("format")
            .long("format")
            .value_name("FORMAT")
            .default_value("svg")
            .help("The output format used by --svg"),
    )
    .arg(
        Arg::new("delimiter")
            .long("delimiter")
            .value_name("C")
            .default_value(default_delimiter)
            .value_parser(parse_delimiter)
            .help("The field separator: tab, comma or any single character"),
    )
    .arg(
        Arg::new("debug")
            .short('d')
            .long("debug")
            .action(ArgAction::SetTrue)
            .help("Enables debug output"),
    )
    .arg(
        Arg::new("quiet")
            .short('q')
            .long("quiet")
            .action(ArgAction::SetTrue)
            .conflicts_with("debug")
            .help("Only print warnings and errors"),
    )
    .arg(
        Arg::new("INPUT")
            .help("The inventory files to convert; prompts when missing")
            .value_parser(value_parser!(PathBuf))
            .num_args(1..)
            .action(ArgAction::Append),
    )
}

fn build_cli() -> Command {
    let ports = Command::new("ports")
        .about("Draw the ports of one device as a record")
        .arg(
            Arg::new("layout")
                .long("layout")
                .value_parser(["switch", "nax", "processor"])
                .default_value("switch")
                .help("Where the device metadata and the ports are"),
        )
        .arg(
            Arg::new("page-size")
                .long("page-size")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Ports per section"),
        )
        .arg(
            Arg::new("trailer")
                .long("trailer")
                .value_name("TEXT")
                .action(ArgAction::Append)
                .help("A static cell appended to the record; may repeat"),
        );

    let zones = Command::new("zones")
        .about("Draw devices grouped by location and zone")
        .arg(
            Arg::new("paper")
                .long("paper")
                .value_name("NAME")
                .default_value("ARCH D")
                .help("Paper size: 11x17, ARCH A, ARCH B, ARCH C, ARCH D, ARCH E1, ARCH E"),
        )
        .arg(
            Arg::new("ratio")
                .long("ratio")
                .default_value("auto")
                .help("The graph ratio attribute"),
        )
        .arg(
            Arg::new("splines")
                .long("splines")
                .default_value("ortho")
                .help("The graph splines attribute"),
        )
        .arg(
            Arg::new("ranksep")
                .long("ranksep")
                .default_value("1")
                .help("The graph ranksep attribute"),
        )
        .arg(
            Arg::new("sentinel")
                .long("sentinel")
                .value_name("TEXT")
                .default_value("Unknown")
                .help("The text that stands for a missing value"),
        )
        .arg(
            Arg::new("identity-column")
                .long("identity-column")
                .value_name("NAME")
                .default_value("Domotz Name")
                .help("The column that names each device"),
        )
        .arg(
            Arg::new("edge-label")
                .long("edge-label")
                .value_name("TEXT")
                .help("The label of uplinks without ports or a Label value"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Fail when a device is listed more than once"),
        );

    Command::new("netviz")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turns network inventory spreadsheets into GraphViz diagrams")
        .subcommand_required(true)
        .subcommand(common_args(ports, "tab"))
        .subcommand(common_args(zones, "comma"))
}

fn string_arg(matches: &ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}

fn ports_engine(matches: &ArgMatches) -> Engine {
    let mut layout = match string_arg(matches, "layout").as_str() {
        "nax" => InventoryLayout::nax(),
        "processor" => InventoryLayout::processor(),
        _ => InventoryLayout::switch(),
    };
    if let Some(size) = matches.get_one::<usize>("page-size") {
        layout = layout.with_page_size(*size);
    }
    let trailer: Vec<String> = matches
        .get_many::<String>("trailer")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();
    Engine::Ports(layout.with_trailer(trailer))
}

fn zones_engine(matches: &ArgMatches) -> Engine {
    let opts = ClusterOptions {
        sentinel: string_arg(matches, "sentinel"),
        identity_column: string_arg(matches, "identity-column"),
        default_edge_label: matches.get_one::<String>("edge-label").cloned(),
        splines: string_arg(matches, "splines"),
        ratio: string_arg(matches, "ratio"),
        ranksep: string_arg(matches, "ranksep"),
        paper: PaperSize::from_name(&string_arg(matches, "paper")),
        duplicates: if matches.get_flag("strict") {
            DuplicatePolicy::Reject
        } else {
            DuplicatePolicy::FirstMatch
        },
    };
    Engine::Zones(opts)
}

fn init_logger(matches: &ArgMatches) {
    let level = if matches.get_flag("debug") {
        log::LevelFilter::Debug
    } else if matches.get_flag("quiet") {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Asks for a file name on the terminal.
fn prompt_for_input() -> anyhow::Result<PathBuf> {
    let mut stdout = io::stdout();
    write!(stdout, "Enter the file name: ")?;
    stdout.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let name = line.trim();
    if name.is_empty() {
        bail!("no input file given");
    }
    Ok(PathBuf::from(name))
}

/// Converts one input file and places the result where the options say.
fn process(input: &Path, engine: &Engine, cli: &CLIOptions) -> anyhow::Result<()> {
    let table = Table::load(input, cli.delimiter)?;
    let content = engine
        .render(&table)
        .with_context(|| format!("could not convert {}", input.display()))?;

    if cli.save_dot || cli.render_svg {
        let dot_path = cli
            .output_path
            .clone()
            .unwrap_or_else(|| sibling_path(input, "dot"));
        save_to_file(&dot_path, &content)?;
        if cli.render_svg {
            if let Err(err) = cli.renderer.render(&dot_path) {
                log::warn!("Could not render {}: {}", dot_path.display(), err);
            }
        }
        return Ok(());
    }

    match &cli.output_path {
        Some(path) => save_to_file(path, &content)?,
        None => io::stdout().lock().write_all(content.as_bytes())?,
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let matches = build_cli().get_matches();
    let Some((name, sub)) = matches.subcommand() else {
        bail!("expected the ports or the zones subcommand");
    };
    init_logger(sub);
    let engine = if name == "ports" {
        ports_engine(sub)
    } else {
        zones_engine(sub)
    };

    let cli = CLIOptions {
        output_path: sub.get_one::<PathBuf>("output").cloned(),
        save_dot: sub.get_flag("dot"),
        render_svg: sub.get_flag("svg"),
        renderer: Renderer::new(&string_arg(sub, "renderer"), &string_arg(sub, "format")),
        delimiter: sub
            .get_one::<Delimiter>("delimiter")
            .copied()
            .unwrap_or(Delimiter::Tab),
    };

    let mut inputs: Vec<PathBuf> = sub
        .get_many::<PathBuf>("INPUT")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();
    if inputs.is_empty() {
        inputs.push(prompt_for_input()?);
    }
    if inputs.len() > 1 && cli.output_path.is_some() {
        bail!("--output can only be used with a single input");
    }

    let mut failed = 0;
    for input in &inputs {
        log::info!("Input file: {}", input.display());
        if let Err(err) = process(input, &engine, &cli) {
            log::error!("{}: {:#}", input.display(), err);
            failed += 1;
        }
    }

    if failed > 0 {
        bail!("{} of {} inputs failed", failed, inputs.len());
    }
    Ok(())
}
