use std::{
    io::Read as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use livecode::{
    BufferEditor, Collaborators, FrameRate, JsonLinesRenderer, LiveSession, ManualClock,
    ManualFrameClock, PacedFrameClock, SessionOpts, SourceUpdate, TickReport,
};

#[derive(Parser, Debug)]
#[command(name = "livecode", version)]
struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a sketch and write one JSON scene per rendered frame.
    Run(RunArgs),
    /// Print the canonical script a sketch is rewritten into.
    Transform(InputArgs),
    /// Print the autocoder's token stream for a sketch.
    Lex(InputArgs),
    /// Print successive autocoder mutations of a sketch.
    Mutate(MutateArgs),
    /// List the built-in demo sketches and tutorials.
    Demos,
}

#[derive(Parser, Debug)]
struct InputArgs {
    /// Sketch source file; `-` reads stdin.
    #[arg(long = "in", default_value = "-")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct RunArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Run a built-in demo or tutorial instead of reading a sketch.
    #[arg(long)]
    demo: Option<String>,

    /// Number of ticks to run. The run also ends when the loop goes idle.
    #[arg(long, default_value_t = 60)]
    frames: u64,

    /// Fixed frame rate; unset means as fast as possible.
    #[arg(long)]
    fps: Option<u32>,

    /// Seed for `random` and the autocoder.
    #[arg(long)]
    seed: Option<u64>,

    /// Session options as JSON. Flags override values from the file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Mutate the sketch once per autocoder interval while running.
    #[arg(long)]
    autocode: bool,

    /// Pace ticks on the wall clock instead of simulating time.
    #[arg(long)]
    realtime: bool,

    /// Output file for the scene stream; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct MutateArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Number of successive mutations to print.
    #[arg(long, default_value_t = 1)]
    count: u32,

    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Run(args) => cmd_run(args),
        Command::Transform(args) => cmd_transform(args),
        Command::Lex(args) => cmd_lex(args),
        Command::Mutate(args) => cmd_mutate(args),
        Command::Demos => cmd_demos(),
    }
}

fn log_level(verbose: u8) -> tracing::Level {
    match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

fn init_logging(verbose: u8) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(verbose))
        .with_writer(std::io::stderr)
        .init();
}

fn read_source(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read sketch from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("read sketch '{}'", path.display()))
}

fn session_opts(args: &RunArgs) -> anyhow::Result<SessionOpts> {
    let mut opts = match &args.config {
        Some(path) => SessionOpts::from_json_file(path)?,
        None => SessionOpts::default(),
    };
    if let Some(fps) = args.fps {
        opts.frame_rate = FrameRate::Fixed(fps);
    }
    if args.seed.is_some() {
        opts.seed = args.seed;
    }
    Ok(opts)
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let source = match &args.demo {
        Some(name) => livecode::demos::find(name)
            .with_context(|| format!("no demo named '{name}'"))?
            .code
            .to_owned(),
        None => read_source(&args.input.in_path)?,
    };
    let opts = session_opts(&args)?;
    let step_ms = opts.frame_rate.interval().as_secs_f64() * 1000.0;

    let out: Box<dyn std::io::Write> = match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = std::fs::File::create(path)
                .with_context(|| format!("create '{}'", path.display()))?;
            Box::new(std::io::BufWriter::new(f))
        }
        None => Box::new(std::io::stdout()),
    };

    let clock = ManualClock::new(0.0);
    let mut collab = Collaborators::default().with_renderer(JsonLinesRenderer::new(out));
    if args.realtime {
        collab = collab.with_frame_clock(PacedFrameClock::new());
    } else {
        collab = collab
            .with_clock(clock.clone())
            .with_frame_clock(ManualFrameClock::new());
    }

    let mut session = LiveSession::new(opts, collab, Box::new(BufferEditor::default()))?;
    session.subscribe(|e| tracing::info!(event = %e, "event"));

    if let SourceUpdate::Rejected(e) = session.load_program(&source) {
        anyhow::bail!("sketch rejected: {}", e.user_message());
    }
    if args.autocode {
        session.toggle_autocoder(Some(true));
    }

    let mut rendered = 0u64;
    for _ in 0..args.frames {
        if args.autocode {
            session.poll_autocoder();
        }
        let Some(report) = session.run_frame()? else {
            break;
        };
        match report {
            TickReport::Rendered(_) => rendered += 1,
            TickReport::RuntimeError(failure) => eprintln!("runtime error: {failure}"),
            TickReport::Dozed => break,
        }
        if !args.realtime {
            clock.advance(step_ms);
        }
    }
    session.stop_loop();

    eprintln!("rendered {rendered} frame(s)");
    Ok(())
}

fn cmd_transform(args: InputArgs) -> anyhow::Result<()> {
    let source = read_source(&args.in_path)?;
    let canonical = livecode::transform_source(&source)?;
    println!("{canonical}");
    Ok(())
}

fn cmd_lex(args: InputArgs) -> anyhow::Result<()> {
    let source = read_source(&args.in_path)?;
    let lexer = livecode::lexer::Lexer::autocoder()?;
    for token in lexer.lex(&source)? {
        println!("{}\t{:?}", token.kind, token.text);
    }
    Ok(())
}

fn cmd_mutate(args: MutateArgs) -> anyhow::Result<()> {
    let mut source = read_source(&args.input.in_path)?;
    let mut autocoder = livecode::Autocoder::new(args.seed)?;
    for i in 0..args.count {
        let Some(next) = autocoder.mutate(&source) else {
            anyhow::bail!("nothing to mutate after {i} mutation(s)");
        };
        println!("{next}");
        if i + 1 < args.count {
            println!("---");
        }
        source = next;
    }
    Ok(())
}

fn cmd_demos() -> anyhow::Result<()> {
    use livecode::demos::{DEMOS, TUTORIALS};
    for (heading, table) in [("demos", DEMOS), ("tutorials", TUTORIALS)] {
        println!("{heading}:");
        for demo in table {
            println!("  {:<18} {:<22} {}", demo.name, demo.submenu, demo.title);
        }
    }
    Ok(())
}
