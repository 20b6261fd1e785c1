use color_eyre::eyre::{Result, WrapErr, bail, eyre};
use reqcopy::{
    ClipboardSink, Copier, CopierConfig, FormatMode, MemoryClipboard, RequestResponse,
    SelectionBounds, StaticContext, SystemClipboard,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

struct Options {
    mode: FormatMode,
    request: PathBuf,
    response: Option<PathBuf>,
    selection: Option<SelectionBounds>,
    config: CopierConfig,
    print: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Initialize logging; stdout is reserved for --print
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reqcopy=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("reqcopy");

    let options = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!();
            print_usage(program);
            std::process::exit(1);
        }
    };

    let exchange = RequestResponse::from_files(&options.request, options.response.as_deref())
        .wrap_err("Failed to load captured messages")?;
    let context = StaticContext::new(vec![exchange]).with_selection(options.selection);

    if options.print {
        let sink = MemoryClipboard::new();
        run(sink.clone(), &options, &context).await?;
        if let Some(text) = sink.clipboard_text() {
            print!("{text}");
        }
    } else {
        run(SystemClipboard::new(), &options, &context).await?;
    }

    Ok(())
}

async fn run<S>(sink: S, options: &Options, context: &StaticContext) -> Result<()>
where
    S: ClipboardSink + 'static,
{
    let copier = Copier::start(sink, options.config.clone());
    info!(mode = %options.mode, request = %options.request.display(), "Copying captured exchange");

    let result = match copier.invoke(options.mode, context) {
        Ok(ticket) => ticket.wait().await,
        Err(e) => Err(e),
    };
    copier.shutdown().await;

    result.wrap_err_with(|| format!("Failed to copy in {} mode", options.mode))
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut positional = Vec::new();
    let mut selection = None;
    let mut config = CopierConfig::default();
    let mut print = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--selection" => {
                let value = iter.next().ok_or_else(|| eyre!("--selection needs START:END"))?;
                selection = Some(value.parse::<SelectionBounds>().map_err(|e| eyre!(e))?);
            }
            "--marker" => {
                let value = iter.next().ok_or_else(|| eyre!("--marker needs a value"))?;
                config.format.cut_marker = value.clone();
            }
            "--pretty-response" => config.format.pretty_response = true,
            "--no-primary" => config.clipboard.primary_selection = false,
            "--no-delay" => config.clipboard.selection_delay = Duration::ZERO,
            "--print" => print = true,
            flag if flag.starts_with("--") => bail!("Unknown option {flag}"),
            _ => positional.push(arg.as_str()),
        }
    }

    let (mode, request, response) = match positional.as_slice() {
        [mode, request] => (*mode, *request, None),
        [mode, request, response] => (*mode, *request, Some(PathBuf::from(*response))),
        _ => bail!("Expected <mode> <request-file> [response-file]"),
    };

    // Nothing to wait for when the host is not clearing a selection
    if print {
        config.clipboard.selection_delay = Duration::ZERO;
    }

    Ok(Options {
        mode: mode.parse()?,
        request: PathBuf::from(request),
        response,
        selection,
        config,
        print,
    })
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} <mode> <request-file> [response-file] [options]");
    eprintln!("  mode: json | raw | full | header | selected");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --selection START:END  Response byte range for 'selected' mode");
    eprintln!("  --marker TEXT          Cut marker (default: [...])");
    eprintln!("  --pretty-response      Also pretty-print the response body in 'json' mode");
    eprintln!("  --no-primary           Do not write the primary selection");
    eprintln!("  --no-delay             Skip the delay before 'selected' copies");
    eprintln!("  --print                Write to stdout instead of the clipboard");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {program} json req.txt resp.txt                       # Labeled copy, JSON request body");
    eprintln!("  {program} header req.txt resp.txt                     # Full request, response headers");
    eprintln!("  {program} selected req.txt resp.txt --selection 120:180");
    eprintln!("  {program} full req.txt resp.txt --print               # Print instead of copying");
}
