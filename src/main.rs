//! Terminal client for the chat backend.
//!
//! Lines typed at the prompt are sent as chat messages; `/login`, `/toggle`
//! and `/quit` are commands.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use chatpane::messages::MessageStyle;
use chatpane::transport::HttpTransport;
use chatpane::{ChatController, ChatError, WidgetOptions};
use clap::Parser;

#[derive(Parser)]
#[command(name = "chatpane", about = "Chat with the backend from a terminal")]
struct Args {
    /// Backend address, e.g. http://localhost:3000
    #[arg(long, default_value = "http://localhost:3000")]
    base_url: String,

    /// TOML options file
    #[arg(long)]
    options: Option<PathBuf>,

    /// Use the plain preset (labeled messages, login asked for up front)
    #[arg(long)]
    classic: bool,

    /// Log in as this user on startup
    #[arg(long)]
    username: Option<String>,
}

struct Client<R, W> {
    controller: ChatController,
    transport: HttpTransport,
    input: R,
    out: W,
    /// Log entries already printed.
    printed: usize,
}

impl<R: BufRead, W: Write> Client<R, W> {
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }

    fn login(&mut self, username: Option<String>) -> io::Result<()> {
        let username = match username {
            Some(name) => name,
            None => match self.prompt("username: ")? {
                Some(name) => name,
                None => return Ok(()),
            },
        };
        let Some(password) = self.prompt("password: ")? else {
            return Ok(());
        };
        let outcome =
            self.controller
                .submit_login(&self.transport, &username, &password);
        log::debug!("login outcome: {outcome:?}");
        self.flush_log()
    }

    /// Print log entries added since the last call.
    fn flush_log(&mut self) -> io::Result<()> {
        let style = self.controller.message_style();
        for message in self.controller.log().since(self.printed) {
            let sender = message.role.sender();
            match style {
                MessageStyle::Styled => {
                    writeln!(self.out, "[{sender}] {}", message.text)?;
                }
                MessageStyle::Labeled => {
                    writeln!(self.out, "{sender}: {}", message.text)?;
                }
            }
        }
        self.printed = self.controller.log().len();
        Ok(())
    }

    fn run(&mut self) -> io::Result<()> {
        loop {
            if self.controller.login_prompt_visible() {
                writeln!(self.out, "(login required: type /login)")?;
            }
            let Some(line) = self.prompt("> ")? else {
                return Ok(());
            };
            match line.trim() {
                "/quit" => return Ok(()),
                "/login" => self.login(None)?,
                "/toggle" => {
                    let state = if self.controller.toggle() {
                        "open"
                    } else {
                        "closed"
                    };
                    writeln!(self.out, "panel {state}")?;
                }
                _ => {
                    let _ = self.controller.send(&self.transport, &line);
                    self.flush_log()?;
                }
            }
        }
    }
}

fn load_options(args: &Args) -> Result<WidgetOptions, ChatError> {
    let mut options = match (&args.options, args.classic) {
        (Some(path), _) => WidgetOptions::load(path)?,
        (None, true) => WidgetOptions::classic(),
        (None, false) => WidgetOptions::default(),
    };
    if args.options.is_none() || options.endpoints.base_url.is_empty() {
        options.endpoints.base_url.clone_from(&args.base_url);
    }
    Ok(options)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let options = match load_options(&args) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let transport = HttpTransport::new(options.endpoints.clone());
    let mut client = Client {
        controller: ChatController::new(options),
        transport,
        input: io::stdin().lock(),
        out: io::stdout().lock(),
        printed: 0,
    };

    let _ = client.controller.toggle();
    let result = match args.username {
        Some(name) => client.login(Some(name)).and_then(|()| client.run()),
        None => client.run(),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("terminal I/O failed: {e}");
            ExitCode::FAILURE
        }
    }
}
