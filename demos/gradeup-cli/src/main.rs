use std::path::PathBuf;

use clap::Parser;
use gradeup::prelude::*;
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines, Stdin};

// ---------------------------------------------------------------------------
// Arguments
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "gradeup")]
#[command(about = "Terminal front end for the GradeUp study dashboard")]
struct Cli {
    /// Password that, with the username `admin`, opens the admin dashboard
    #[arg(long, default_value = "s3cr3t")]
    admin_secret: String,

    /// Directory the session is persisted in (defaults to the platform data dir)
    #[arg(long)]
    store_dir: Option<PathBuf>,

    /// Keep the session in memory only
    #[arg(long)]
    memory: bool,

    /// Print every view as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, default_value = "gradeup=warn")]
    log: String,
}

fn default_store_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gradeup")
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Login { username: String, password: String },
    Upgrade,
    Logout,
    Toggle(AccountId),
    Show,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(Command::Show);
    };

    match verb.to_lowercase().as_str() {
        "login" => Ok(Command::Login {
            username: words.next().unwrap_or_default().to_string(),
            password: words.next().unwrap_or_default().to_string(),
        }),
        "upgrade" => Ok(Command::Upgrade),
        "logout" => Ok(Command::Logout),
        "toggle" => {
            let raw = words.next().ok_or("usage: toggle <account id>")?;
            let id: u32 = raw
                .parse()
                .map_err(|_| format!("not an account id: {raw}"))?;
            Ok(Command::Toggle(AccountId(id)))
        }
        "show" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command: {other} (try `help`)")),
    }
}

const HELP: &str = "\
commands:
  login <username> [password]   sign in (admin + secret opens the admin view)
  upgrade                       upgrade the current student to premium
  logout                        sign out
  toggle <id>                   grant/remove premium for a roster account (admin)
  show                          print the current view
  quit                          leave";

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn render_text(view: &ViewSpec) -> String {
    let mut out = String::new();
    match view {
        ViewSpec::Login => {
            out.push_str("== GradeUp: sign in ==\n");
            out.push_str("login <username> [password]\n");
        }
        ViewSpec::StudentDashboard(dash) => {
            out.push_str(&format!("== Welcome, {} ==\n", dash.name));
            if dash.account_badge_visible {
                out.push_str("[Premium Member]\n");
            }
            if dash.upgrade_prompt_visible {
                out.push_str("Unlock every resource: type `upgrade`\n");
            }
            out.push_str("Study cards:\n");
            for card in &dash.cards {
                let marker = if card.locked { "[locked]" } else { "[open]  " };
                out.push_str(&format!("  {marker} {}\n", card.title));
            }
            if dash.premium_resources_visible {
                out.push_str("Premium resources: unlocked\n");
            }
        }
        ViewSpec::AdminDashboard(dash) => {
            out.push_str("== Admin: user management ==\n");
            out.push_str(&format!(
                "  {:>3}  {:<14} {:<9} {:<8} action\n",
                "id", "username", "status", "premium"
            ));
            for row in &dash.rows {
                out.push_str(&format!(
                    "  {:>3}  {:<14} {:<9} {:<8} {} (toggle {})\n",
                    row.account.id.0,
                    row.account.username,
                    row.status_label,
                    row.premium_label,
                    row.action_label,
                    row.account.id.0,
                ));
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Terminal I/O
// ---------------------------------------------------------------------------

/// Writes and flushes `text`, logging any failure. Returns whether it all went out.
async fn write_text<W: AsyncWrite + Unpin>(out: &mut W, text: &str) -> bool {
    if let Err(e) = out.write_all(text.as_bytes()).await {
        tracing::debug!(error = %e, "terminal write failed");
        return false;
    }
    if let Err(e) = out.flush().await {
        tracing::debug!(error = %e, "terminal flush failed");
        return false;
    }
    true
}

/// Reads commands and confirmation answers from the same stdin stream.
struct Terminal {
    lines: Lines<BufReader<Stdin>>,
    json: bool,
}

impl Terminal {
    fn new(json: bool) -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            json,
        }
    }

    async fn print(&self, text: &str) {
        write_text(&mut tokio::io::stdout(), text).await;
    }

    async fn show(&self, view: &ViewSpec) {
        let text = if self.json {
            match serde_json::to_string_pretty(view) {
                Ok(json) => json + "\n",
                Err(e) => format!("failed to encode view: {e}\n"),
            }
        } else {
            render_text(view)
        };
        self.print(&text).await;
    }

    async fn next_line(&mut self) -> Option<String> {
        self.print("> ").await;
        self.lines.next_line().await.ok().flatten()
    }
}

impl Confirm for Terminal {
    async fn confirm(&mut self, prompt: &str) -> bool {
        self.print(&format!("{prompt} [y/N] ")).await;
        match self.lines.next_line().await {
            Ok(Some(answer)) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Main loop
// ---------------------------------------------------------------------------

async fn run<S: KeyValueStore>(mut app: App<S>, mut term: Terminal) {
    term.show(app.view()).await;

    while let Some(line) = term.next_line().await {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(msg) => {
                term.print(&format!("{msg}\n")).await;
                continue;
            }
        };

        let result = match command {
            Command::Login { username, password } => app.login(&username, &password).map(|_| ()),
            Command::Upgrade => match app.upgrade(&mut term).await {
                Ok(UpgradeOutcome::Upgraded { notice }) => {
                    term.print(&format!("{notice}\n")).await;
                    Ok(())
                }
                Ok(UpgradeOutcome::Declined) => Ok(()),
                Err(e) => Err(e),
            },
            Command::Logout => app.logout().map(|_| ()),
            Command::Toggle(id) => app.toggle_entitlement(id).map(|_| ()),
            Command::Show => Ok(()),
            Command::Help => {
                term.print(&format!("{HELP}\n")).await;
                continue;
            }
            Command::Quit => break,
        };

        if let Err(e) = result {
            tracing::debug!(error = %e, "action failed");
            term.print(&format!("error: {e}\n")).await;
        }
        term.show(app.view()).await;
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    gradeup::init_logging(&cli.log)?;

    let builder = AppBuilder::new().admin_secret(&cli.admin_secret);
    let term = Terminal::new(cli.json);

    if cli.memory {
        run(builder.build(MemoryStore::new()), term).await;
    } else {
        let dir = cli.store_dir.unwrap_or_else(default_store_dir);
        tracing::info!(dir = %dir.display(), "using file store");
        run(builder.build(FileStore::new(dir)), term).await;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login_with_and_without_password() {
        assert_eq!(
            parse_command("login alice pw").unwrap(),
            Command::Login {
                username: "alice".into(),
                password: "pw".into()
            }
        );
        assert_eq!(
            parse_command("LOGIN bob").unwrap(),
            Command::Login {
                username: "bob".into(),
                password: String::new()
            }
        );
    }

    #[test]
    fn test_parse_toggle() {
        assert_eq!(parse_command("toggle 2").unwrap(), Command::Toggle(AccountId(2)));
        assert!(parse_command("toggle").is_err());
        assert!(parse_command("toggle two").is_err());
    }

    #[test]
    fn test_parse_blank_line_shows_view() {
        assert_eq!(parse_command("   ").unwrap(), Command::Show);
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(parse_command("dance").is_err());
    }

    #[test]
    fn test_render_locked_student_dashboard() {
        let mut app = AppBuilder::new().build(MemoryStore::new());
        app.login("alice", "x").unwrap();

        let text = render_text(app.view());

        assert!(text.contains("Welcome, alice"));
        assert!(text.contains("type `upgrade`"));
        assert!(text.contains("[locked]"));
        assert!(!text.contains("[Premium Member]"));
    }

    #[test]
    fn test_render_admin_table() {
        let mut app = AppBuilder::new().admin_secret("pw").build(MemoryStore::new());
        app.login("admin", "pw").unwrap();

        let text = render_text(app.view());

        assert!(text.contains("jane_smith"));
        assert!(text.contains("Grant Premium (toggle 2)"));
        assert!(text.contains("Inactive"));
    }

    /// A sink whose pipe has gone away.
    struct ClosedPipe;

    impl AsyncWrite for ClosedPipe {
        fn poll_write(
            self: std::pin::Pin<&mut Self>,
            _: &mut std::task::Context<'_>,
            _: &[u8],
        ) -> std::task::Poll<std::io::Result<usize>> {
            std::task::Poll::Ready(Err(std::io::ErrorKind::BrokenPipe.into()))
        }

        fn poll_flush(
            self: std::pin::Pin<&mut Self>,
            _: &mut std::task::Context<'_>,
        ) -> std::task::Poll<std::io::Result<()>> {
            std::task::Poll::Ready(Err(std::io::ErrorKind::BrokenPipe.into()))
        }

        fn poll_shutdown(
            self: std::pin::Pin<&mut Self>,
            _: &mut std::task::Context<'_>,
        ) -> std::task::Poll<std::io::Result<()>> {
            std::task::Poll::Ready(Ok(()))
        }
    }

    #[tokio::test]
    async fn test_write_text_reaches_the_writer() {
        let mut out = Vec::new();
        assert!(write_text(&mut out, "> ").await);
        assert_eq!(out, b"> ");
    }

    #[tokio::test]
    async fn test_write_text_reports_broken_pipe_without_panicking() {
        assert!(!write_text(&mut ClosedPipe, "lost\n").await);
    }
}
