//! `folio` - terminal portfolio viewer
//!
//! Shows a row of chips, one per experience. Clicking a chip opens its
//! detail panel; hover a panel to reveal its text, click links to drill
//! down, click breadcrumbs to jump back, click the header to blur again and
//! `X` to close.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin folio
//! cargo run --bin folio -- --light
//! cargo run --bin folio -- --headless --size 100x30
//! ```
//!
//! Press `q` to quit. Set `FOLIO_LOG=<path>` to append debug logs to a file.

use experience_panel::buffer::{Canvas, PixelBuffer, Rect};
use experience_panel::input::{Event, InputParser, MouseEvent};
use experience_panel::{
    Catalog, ChipButton, ColorScheme, Dataset, DescriptionPanel, EnvColorScheme,
    ExperienceEntry, Identifier, Image, Line, LogLevel, PageContent, Palette, PanelOptions,
    PanelResponse, Rgba, Span, Style, Terminal, Themed, is_tty, set_event_callback,
    set_log_callback, terminal_size,
};
use std::cell::RefCell;
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{self, Read, Write};
use std::rc::Rc;
use std::sync::Mutex;

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "folio - terminal portfolio viewer

USAGE:
    folio [OPTIONS]

OPTIONS:
    -h, --help          Print this help message and exit
    --dark              Force the dark color scheme
    --light             Force the light color scheme
    --headless          Replay a scripted session and print the final frame
    --size <WxH>        Canvas size for --headless (default: 80x24)

ENVIRONMENT:
    FOLIO_LOG           Append debug logs to this file
    FOLIO_COLOR_SCHEME  dark or light, used when no flag is given
";

/// Application configuration parsed from command-line arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub dark: Option<bool>,
    pub headless: bool,
    pub size: (u32, u32),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dark: None,
            headless: false,
            size: (80, 24),
        }
    }
}

/// Result of CLI parsing.
pub enum ParseResult {
    Config(Config),
    Help,
    Error(String),
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy();
            match arg_str.as_ref() {
                "-h" | "--help" => return ParseResult::Help,
                "--dark" => config.dark = Some(true),
                "--light" => config.dark = Some(false),
                "--headless" => config.headless = true,
                "--size" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--size requires a value".to_string());
                    };
                    let value = value.to_string_lossy().to_string();
                    match parse_size(&value) {
                        Some(size) => config.size = size,
                        None => {
                            return ParseResult::Error(format!(
                                "Invalid --size: {value} (use WxH format, e.g., 80x24)"
                            ));
                        }
                    }
                }
                other => return ParseResult::Error(format!("Unknown argument: {other}")),
            }
        }
        ParseResult::Config(config)
    }

    /// Forced scheme, or one that reads the environment on every render.
    fn scheme(&self) -> Box<dyn ColorScheme> {
        self.scheme_with(|| EnvColorScheme::from_env().prefers_dark())
    }

    fn scheme_with(&self, detect: impl Fn() -> bool + 'static) -> Box<dyn ColorScheme> {
        match self.dark {
            Some(dark) => Box::new(dark),
            None => Box::new(detect),
        }
    }
}

fn parse_size(value: &str) -> Option<(u32, u32)> {
    let (w, h) = value.split_once(['x', 'X'])?;
    let w: u32 = w.parse().ok()?;
    let h: u32 = h.parse().ok()?;
    (w >= 40 && h >= 12).then_some((w, h))
}

// ============================================================================
// Sample Data
// ============================================================================

fn hex(value: &str) -> Rgba {
    Rgba::from_hex(value).unwrap_or(Rgba::BLACK)
}

fn cover(name: &str, light: (&str, &str), dark: (&str, &str)) -> Themed<Image> {
    Themed::new(
        Image::new(
            format!("{name}-light.png"),
            PixelBuffer::vertical_gradient(16, 16, hex(light.0), hex(light.1)),
        ),
        Image::new(
            format!("{name}-dark.png"),
            PixelBuffer::vertical_gradient(16, 16, hex(dark.0), hex(dark.1)),
        ),
    )
}

fn logo(name: &str, color: &str) -> Themed<Image> {
    let mut pixels = PixelBuffer::filled(4, 4, hex(color));
    for (x, y) in [(0, 0), (3, 0), (0, 3), (3, 3)] {
        pixels.set(x, y, Rgba::TRANSPARENT);
    }
    Themed::uniform(Image::new(format!("{name}-logo.png"), pixels))
}

fn sample_catalog() -> Catalog {
    let heading = Style::bold();

    let northwind = ExperienceEntry::new(
        "Northwind Labs",
        "Platform Engineer",
        logo("northwind", "#4f9dff"),
        cover("northwind", ("#e8f0ff", "#a9c4f5"), ("#0b1a33", "#1d3b6e")),
    )
    .with_page("/", move |nav| {
        PageContent::new()
            .line(Line::new().push(Span::styled("Overview", heading)))
            .text("Built the deployment pipeline and internal tooling.")
            .blank()
            .line(Line::new().push("Highlights: ").push(nav.link("projects", "projects")))
            .line(Line::new().push("Team: ").push(nav.link("people", "people")))
    })
    .with_page("projects", |nav| {
        PageContent::new()
            .text("Projects")
            .line(Line::new().push("- ").push(nav.link("release train", "release-train")))
            .line(Line::new().push("- ").push(nav.link("build cache", "build-cache")))
    })
    .with_page("release-train", |_| {
        PageContent::new()
            .text("Weekly release train for forty services.")
            .text("Cut lead time from days to hours.")
    })
    .with_page("build-cache", |_| {
        PageContent::new().text("Shared remote build cache, 60% fewer cold builds.")
    })
    .with_page("people", |_| {
        PageContent::new().text("Five engineers across two time zones.")
    });

    let harbor = ExperienceEntry::new(
        "Harbor Studio",
        "Graphics Intern",
        logo("harbor", "#ff8a4f"),
        cover("harbor", ("#fff1e6", "#f5c6a9"), ("#331a0b", "#6e3b1d")),
    )
    .with_page("/", |nav| {
        PageContent::new()
            .text("Worked on the in-house renderer.")
            .line(Line::new().push("See ").push(nav.link("shaders", "shaders")))
    })
    .with_page("shaders", |_| {
        PageContent::new().text("Ported the blur and bloom passes to compute shaders.")
    });

    let commons = ExperienceEntry::new(
        "Open Commons",
        "Maintainer",
        logo("commons", "#5fd38a"),
        cover("commons", ("#eafff1", "#b2e8c6"), ("#0b3319", "#1d6e3b")),
    )
    .with_page("/", |_| {
        PageContent::new().text("Maintains a parsing library used by a few thousand projects.")
    });

    Catalog::new()
        .with_entry("northwind", northwind)
        .with_entry("harbor", harbor)
        .with_entry("commons", commons)
}

// ============================================================================
// Application
// ============================================================================

/// Requests raised by chip and panel callbacks, applied after each event.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Request {
    Open(Identifier),
    Close(Identifier),
}

type Requests = Rc<RefCell<Vec<Request>>>;

struct App {
    catalog: Catalog,
    chips: Vec<ChipButton>,
    chip_rects: Vec<Rect>,
    panels: Vec<DescriptionPanel>,
    requests: Requests,
    options: PanelOptions,
    should_quit: bool,
}

impl App {
    fn new(catalog: Catalog) -> experience_panel::Result<Self> {
        let requests: Requests = Rc::default();
        let mut chips = Vec::new();
        for key in catalog.keys() {
            let sink = Rc::clone(&requests);
            chips.push(ChipButton::new(
                Identifier::from_parts("chip", &key),
                move |id: &Identifier| sink.borrow_mut().push(Request::Open(id.clone())),
                &catalog,
            )?);
        }
        Ok(Self {
            catalog,
            chips,
            chip_rects: Vec::new(),
            panels: Vec::new(),
            requests,
            options: PanelOptions::default(),
            should_quit: false,
        })
    }

    fn is_open(&self, id: &Identifier) -> bool {
        self.panels.iter().any(|p| p.identifier() == id)
    }

    /// Apply queued requests; returns whether there were any.
    fn apply_requests(&mut self) -> bool {
        let pending: Vec<Request> = self.requests.borrow_mut().drain(..).collect();
        let changed = !pending.is_empty();
        for request in pending {
            match request {
                Request::Open(id) if !self.is_open(&id) => {
                    let sink = Rc::clone(&self.requests);
                    match DescriptionPanel::new(
                        id,
                        move |id: &Identifier| sink.borrow_mut().push(Request::Close(id.clone())),
                        &self.catalog,
                        self.options.clone(),
                    ) {
                        Ok(panel) => self.panels.push(panel),
                        Err(err) => {
                            experience_panel::emit_log(LogLevel::Error, &err.to_string());
                        }
                    }
                }
                Request::Open(_) => {}
                Request::Close(id) => self.panels.retain(|p| p.identifier() != &id),
            }
        }
        changed
    }

    fn render(&mut self, canvas: &mut Canvas, scheme: &dyn ColorScheme) {
        let palette = Palette::for_scheme(scheme.prefers_dark());
        canvas.clear(palette.sidebar);
        canvas.draw_text(1, 0, "folio", Style::fg(palette.text).with_bold());

        self.chip_rects.clear();
        let mut x = 1;
        for chip in &self.chips {
            let active = self.is_open(chip.identifier());
            self.chip_rects.push(chip.render(canvas, x, 1, &palette, active));
            x += chip.width() + 1;
        }

        let bounds = canvas.bounds();
        let (_, body) = bounds.split_top(PANEL_TOP);
        if self.panels.is_empty() {
            canvas.draw_text(
                1,
                body.y,
                "Click a chip to open its panel. q quits.",
                Style::fg(palette.muted),
            );
            return;
        }

        let count = self.panels.len() as u32;
        let each = body.height / count;
        for (i, panel) in self.panels.iter_mut().enumerate() {
            let y = body.y + each * i as u32;
            let height = if i as u32 == count - 1 {
                body.bottom() - y
            } else {
                each.saturating_sub(1)
            };
            panel.render_in(canvas, Rect::new(body.x, y, body.width, height), scheme);
        }
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        if event.is_quit() {
            self.should_quit = true;
            return false;
        }
        let Some(mouse) = event.mouse() else {
            return false;
        };
        let redraw = self.handle_mouse(mouse);
        self.apply_requests() || redraw
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> bool {
        let mut redraw = false;
        if mouse.is_left_press() {
            if let Some(i) = self.chip_rects.iter().position(|r| r.contains(mouse.x, mouse.y)) {
                self.chips[i].click();
                return true;
            }
        }
        // Every panel sees the event so pointers leaving one card are tracked
        for panel in &mut self.panels {
            match panel.handle_mouse(mouse) {
                PanelResponse::Redraw | PanelResponse::Closed => redraw = true,
                PanelResponse::Ignored => {}
            }
        }
        redraw
    }
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() -> io::Result<()> {
    install_log_file();
    match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => {
            if config.headless {
                run_headless(&config)
            } else {
                run_interactive(&config)
            }
        }
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            Ok(())
        }
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Route library logs and events to `$FOLIO_LOG` when it is set.
fn install_log_file() {
    let Some(path) = std::env::var_os("FOLIO_LOG") else {
        return;
    };
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        eprintln!("Warning: cannot open log file {}", path.to_string_lossy());
        return;
    };
    let file = std::sync::Arc::new(Mutex::new(file));

    let log_file = std::sync::Arc::clone(&file);
    set_log_callback(move |level, message| {
        if let Ok(mut file) = log_file.lock() {
            let _ = writeln!(file, "[{}] {message}", level.as_str());
        }
    });
    set_event_callback(move |name, data| {
        if let Ok(mut file) = file.lock() {
            let _ = writeln!(file, "[event] {name} {data}");
        }
    });
}

// ============================================================================
// Headless Replay
// ============================================================================

/// One scripted step, addressed by text visible on screen.
///
/// Chips are searched on the whole screen; other steps only look below the
/// chip row so a panel header is not confused with its chip.
enum Step {
    Chip(&'static str),
    Click(&'static str),
    Hover(&'static str),
}

/// First row below the title and chip rows.
const PANEL_TOP: u32 = 3;

const SCRIPT: &[Step] = &[
    Step::Chip("Platform Engineer"),
    Step::Hover("/  >"),
    Step::Click("projects"),
    Step::Click("release train"),
    Step::Click("projects  >"),
    Step::Click("Northwind Labs"),
];

/// Locate `needle` on rows at or below `top`.
fn locate(canvas: &Canvas, needle: &str, top: u32) -> Option<(u32, u32)> {
    (top..canvas.height()).find_map(|y| {
        let row = canvas.row_text(y);
        let byte_idx = row.find(needle)?;
        let x = row[..byte_idx]
            .chars()
            .map(|ch| experience_panel::buffer::text_width(ch.encode_utf8(&mut [0; 4])))
            .sum();
        Some((x, y))
    })
}

/// Replay [`SCRIPT`] without a terminal and print the final frame.
fn run_headless(config: &Config) -> io::Result<()> {
    let (width, height) = config.size;
    let scheme = config.scheme();
    let mut app = App::new(sample_catalog()).map_err(io::Error::other)?;
    let mut canvas = Canvas::new(width, height);
    app.render(&mut canvas, scheme.as_ref());

    for step in SCRIPT {
        let (label, top, press) = match *step {
            Step::Chip(text) => (text, 0, true),
            Step::Click(text) => (text, PANEL_TOP, true),
            Step::Hover(text) => (text, PANEL_TOP, false),
        };
        let event = match locate(&canvas, label, top) {
            Some((x, y)) if press => MouseEvent::click(x, y),
            Some((x, y)) => MouseEvent::move_to(x, y),
            None => {
                eprintln!("step skipped: {label:?} not on screen");
                continue;
            }
        };
        app.handle_event(&Event::Mouse(event));
        app.render(&mut canvas, scheme.as_ref());
        eprintln!("{:?} {label:?}", event.kind);
    }

    if let Some(panel) = app.panels.first() {
        eprintln!(
            "history: {:?}, state: {:?}",
            panel.history().pages(),
            panel.hover_state()
        );
    }
    println!("{}", canvas.to_plain_text());
    Ok(())
}

// ============================================================================
// Interactive Mode
// ============================================================================

fn run_interactive(config: &Config) -> io::Result<()> {
    if !is_tty(&io::stdout()) || !is_tty(&io::stdin()) {
        eprintln!("Error: folio requires an interactive terminal.");
        eprintln!("For non-interactive use, try: folio --headless");
        std::process::exit(1);
    }

    let (width, height) = terminal_size().unwrap_or((80, 24));
    let scheme = config.scheme();
    let mut app = App::new(sample_catalog()).map_err(io::Error::other)?;
    let mut canvas = Canvas::new(u32::from(width), u32::from(height));

    let mut term = Terminal::new(io::stdout());
    term.enter_raw_mode()?;
    term.enter()?;

    let mut parser = InputParser::new();
    let mut pending: Vec<u8> = Vec::with_capacity(256);
    let mut input_buf = [0u8; 256];
    let mut dirty = true;

    while !app.should_quit {
        if let Ok((w, h)) = terminal_size() {
            if (u32::from(w), u32::from(h)) != canvas.size() {
                canvas.resize(u32::from(w), u32::from(h));
                dirty = true;
            }
        }
        if dirty {
            app.render(&mut canvas, scheme.as_ref());
            term.present(&canvas)?;
            dirty = false;
        }

        // Raw mode reads time out after 100ms
        let n = io::stdin().read(&mut input_buf)?;
        if n == 0 {
            continue;
        }
        pending.extend_from_slice(&input_buf[..n]);
        let (events, consumed) = parser.parse_all(&pending);
        pending.drain(..consumed);
        for event in &events {
            dirty |= app.handle_event(event);
        }
    }

    term.leave()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn args(strs: &[&str]) -> Vec<OsString> {
        strs.iter().map(|s| OsString::from(*s)).collect()
    }

    #[test]
    fn test_default_config() {
        let ParseResult::Config(config) = Config::from_args(args(&["folio"])) else {
            panic!("expected config");
        };
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_flags() {
        let ParseResult::Config(config) =
            Config::from_args(args(&["folio", "--light", "--headless", "--size", "100x30"]))
        else {
            panic!("expected config");
        };
        assert_eq!(config.dark, Some(false));
        assert!(config.headless);
        assert_eq!(config.size, (100, 30));
    }

    #[test]
    fn test_scheme_follows_host_unless_forced() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let detect = move || {
            counter.set(counter.get() + 1);
            counter.get() % 2 == 1
        };

        let live = Config::default().scheme_with(detect.clone());
        assert!(live.prefers_dark());
        assert!(!live.prefers_dark());
        assert_eq!(calls.get(), 2);

        let forced = Config {
            dark: Some(false),
            ..Config::default()
        }
        .scheme_with(detect);
        assert!(!forced.prefers_dark());
        assert!(!forced.prefers_dark());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_bad_args() {
        assert!(matches!(
            Config::from_args(args(&["folio", "--size", "tiny"])),
            ParseResult::Error(_)
        ));
        assert!(matches!(
            Config::from_args(args(&["folio", "--bogus"])),
            ParseResult::Error(_)
        ));
        assert!(matches!(
            Config::from_args(args(&["folio", "-h"])),
            ParseResult::Help
        ));
    }

    #[test]
    fn test_sample_catalog_pages_resolve() {
        let catalog = sample_catalog();
        for key in catalog.keys() {
            let entry = catalog.entry(&key).unwrap();
            for path in entry.page_paths() {
                for link in entry.produce(path).unwrap().links() {
                    assert!(entry.page(link).is_some(), "{key}: dangling link {link}");
                }
            }
        }
    }

    #[test]
    fn test_chip_opens_and_close_removes_panel() {
        let mut app = App::new(sample_catalog()).unwrap();
        let mut canvas = Canvas::new(80, 24);
        app.render(&mut canvas, &true);

        let (x, y) = canvas.find_text("Platform Engineer").unwrap();
        app.handle_event(&Event::Mouse(MouseEvent::click(x, y)));
        assert_eq!(app.panels.len(), 1);

        // Opening the same chip twice keeps one panel
        app.handle_event(&Event::Mouse(MouseEvent::click(x, y)));
        assert_eq!(app.panels.len(), 1);

        app.render(&mut canvas, &true);
        let (x, y) = canvas.find_text("X").unwrap();
        app.handle_event(&Event::Mouse(MouseEvent::click(x, y)));
        assert!(app.panels.is_empty());
    }
}
