use boxline::core::config::{self, FALLBACK_WIDTH};
use boxline::{
    Alignment, Demo, DiffRow, List, ListEvent, MetaValue, Renderer, TableColumn, TableGrid,
    TableRow,
};
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "boxline", about = "Render framed terminal layouts")]
struct Args {
    /// Component to draw
    #[arg(default_value_t, value_enum)]
    demo: Demo,
    /// Render width in columns (default: config, then terminal width)
    #[arg(short, long)]
    width: Option<usize>,
    /// Config file (default: ~/.boxline/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// JSON file to render with the metadata demo ("-" reads stdin)
    #[arg(long)]
    input: Option<PathBuf>,
    /// Cursor moves to apply before drawing the list demo
    #[arg(long, default_value_t = 0)]
    down: usize,
    /// Where to write logs
    #[arg(long, default_value = "boxline.log")]
    log_file: PathBuf,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    // File logger: stdout belongs to the rendered output
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("{e}; continuing with defaults");
            config::BoxlineConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.width);
    let width = resolved.width.unwrap_or_else(terminal_width);
    log::info!("Rendering {:?} at width {}", args.demo, width);

    let renderer = Renderer::new(resolved.theme);
    let output = match args.demo {
        Demo::Table => renderer.table("Agent", &sample_rows(), width),
        Demo::Diff => renderer.diff_table("Changes", &sample_diff(), width),
        Demo::Grid => {
            let (columns, rows) = sample_grid();
            renderer.render(&TableGrid::new(&columns, &rows, width).highlight_markers(true))
        }
        Demo::Dialog => {
            renderer.confirm_dialog("Delete agent?", "alpha-7 and its history will be removed.")
        }
        Demo::Input => renderer.input_dialog("Rename agent", "alpha-7-nightly"),
        Demo::Preview => {
            renderer.confirm_preview_dialog("Apply changes?", &sample_rows(), &sample_diff(), width)
        }
        Demo::Status => {
            let hints = [
                renderer.hint("↑↓", "move"),
                renderer.hint("enter", "open"),
                renderer.hint("/", "filter"),
                renderer.hint("q", "quit"),
            ];
            renderer.status_bar(&hints, width)
        }
        Demo::List => render_list(&renderer, resolved.page_size, args.down, width),
        Demo::Metadata => {
            let value = read_metadata(args.input.as_ref())?;
            renderer.metadata("Metadata", &value, width)
        }
        Demo::Error => renderer.error_box(
            "Request failed",
            "server returned 503: upstream unavailable",
            width,
        ),
    };

    println!("{output}");
    Ok(())
}

fn terminal_width() -> usize {
    match crossterm::terminal::size() {
        Ok((cols, _)) => cols as usize,
        Err(e) => {
            log::debug!("No terminal size ({e}), using {FALLBACK_WIDTH}");
            FALLBACK_WIDTH
        }
    }
}

fn render_list(renderer: &Renderer, page_size: usize, moves: usize, width: usize) -> String {
    let names: Vec<String> = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut list = List::new(page_size);
    list.apply(ListEvent::SetItems(names));
    for _ in 0..moves {
        list.apply(ListEvent::Down);
    }

    let columns = [
        TableColumn::new("#", 3).align(Alignment::Right),
        TableColumn::new("Name", 10),
    ];
    let rows: Vec<Vec<String>> = list
        .visible()
        .iter()
        .enumerate()
        .map(|(i, name)| vec![(list.rel_to_abs(i) + 1).to_string(), name.clone()])
        .collect();
    renderer.render(&TableGrid::new(&columns, &rows, width).active_row(list.selected_in_window()))
}

fn read_metadata(input: Option<&PathBuf>) -> io::Result<MetaValue> {
    let raw = match input {
        Some(path) if path.as_os_str() == "-" => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(path) => std::fs::read_to_string(path)?,
        None => r#"{"owner": "alice", "limits": {"cpu": 2, "tags": ["fast", "gpu"]}, "note": null}"#
            .to_string(),
    };
    let value: serde_json::Value =
        serde_json::from_str(&raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(MetaValue::from(value))
}

fn sample_rows() -> Vec<TableRow> {
    vec![
        TableRow::new("Name", "alpha-7"),
        TableRow::new("Status", "running"),
        TableRow::new("Model", "large-context"),
        TableRow::new("Created", "2026-10-17 09:12"),
    ]
}

fn sample_diff() -> Vec<DiffRow> {
    vec![
        DiffRow::new("status", "active", "archived"),
        DiffRow::new("description", "", "Nightly reindex job\nruns at 02:00"),
    ]
}

fn sample_grid() -> (Vec<TableColumn>, Vec<Vec<String>>) {
    let columns = vec![
        TableColumn::new("ID", 4).align(Alignment::Right),
        TableColumn::new("Name", 12),
        TableColumn::new("State", 10).align(Alignment::Center),
        TableColumn::new("Task", 10),
    ];
    let rows = [
        ["1", "alpha-7", "running", "[x] index"],
        ["2", "beta", "idle", "[ ] sync"],
        ["3", "gamma-long-name", "stopped", "[X] purge"],
    ]
    .iter()
    .map(|row| row.iter().map(|s| s.to_string()).collect())
    .collect();
    (columns, rows)
}
