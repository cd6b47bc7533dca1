use std::error::Error;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use log::warn;

use mandelbrot_explorer::{
    CliController, ExploreCommand, ExploreSession, Field, MAX_DOMAIN_SIZE, Point,
    PpmFilePresenter, PpmFrameWriter, SessionFlow, UiState,
};

const IDLE_TIMEOUT: Duration = Duration::from_secs(600);

/// Renders the Mandelbrot set to PPM images.
///
/// Example:
///   mandelbrot_explorer render --size 800 --zoom 400,300 --output output/zoomed.ppm
#[derive(Parser, Debug)]
#[command(name = "mandelbrot_explorer", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one image and exit
    Render(RenderArgs),
    /// Read field edits, render and zoom commands from stdin, writing each frame
    Explore(ExploreArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Imaginary coordinate of the top edge
    #[arg(long, allow_hyphen_values = true)]
    top: Option<String>,

    /// Real coordinate of the left edge
    #[arg(long, allow_hyphen_values = true)]
    left: Option<String>,

    /// Width and height of the viewed square in the complex plane
    #[arg(long, allow_hyphen_values = true)]
    side_length: Option<String>,

    /// Iteration cap
    #[arg(long, allow_hyphen_values = true)]
    bail_out: Option<String>,

    /// Image width and height in pixels
    #[arg(long, default_value_t = 800, value_parser = parse_size)]
    size: u32,

    /// Zoom on pixel X,Y before rendering (repeatable, applied in order)
    #[arg(long, value_name = "X,Y", value_parser = parse_click)]
    zoom: Vec<Point>,

    #[arg(long, default_value = "output/mandelbrot.ppm")]
    output: PathBuf,
}

#[derive(Args, Debug)]
struct ExploreArgs {
    /// Image width and height in pixels
    #[arg(long, default_value_t = 800, value_parser = parse_size)]
    size: u32,

    /// File overwritten with every completed frame
    #[arg(long, default_value = "output/explore.ppm")]
    output: PathBuf,
}

fn parse_size(text: &str) -> Result<u32, String> {
    let size = text
        .trim()
        .parse::<u32>()
        .map_err(|err| format!("invalid image size `{text}`: {err}"))?;

    if size == 0 || size > MAX_DOMAIN_SIZE {
        return Err(format!("image size must be between 1 and {MAX_DOMAIN_SIZE}"));
    }

    Ok(size)
}

fn parse_click(text: &str) -> Result<Point, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got `{text}`"))?;
    let parse = |value: &str| {
        value
            .trim()
            .parse::<u32>()
            .map_err(|err| format!("invalid pixel coordinate `{value}`: {err}"))
    };

    Ok(Point {
        x: parse(x)?,
        y: parse(y)?,
    })
}

fn run_render(args: RenderArgs) -> Result<(), Box<dyn Error>> {
    let mut state = UiState::default();

    let fields = [
        (Field::Top, &args.top),
        (Field::Left, &args.left),
        (Field::SideLength, &args.side_length),
        (Field::BailOut, &args.bail_out),
    ];
    for (field, text) in fields {
        if let Some(text) = text {
            state.set_field(field, text);
        }
    }

    let mut controller = CliController::new(PpmFilePresenter::new(), state, args.size);

    for click in args.zoom {
        controller.zoom(click)?;
    }

    controller.generate()?;
    controller.write(&args.output)?;

    Ok(())
}

fn run_explore(args: ExploreArgs) -> Result<(), Box<dyn Error>> {
    let frame_writer = Arc::new(PpmFrameWriter::new(args.output));
    let mut session = ExploreSession::new(args.size, frame_writer, io::stdout())?;

    for line in io::stdin().lock().lines() {
        let command = match ExploreCommand::parse(&line?) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                warn!("{err}");
                continue;
            }
        };

        if session.handle(command)? == SessionFlow::Quit {
            break;
        }
    }

    if !session.wait_for_idle(IDLE_TIMEOUT) {
        warn!("gave up waiting for the last frame");
    }
    session.finish();

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Render(args) => run_render(args),
        Command::Explore(args) => run_explore(args),
    }
}
