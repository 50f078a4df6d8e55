mod config;
mod image;
mod logging;
mod render;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use golden_client::GeminiClient;
use golden_core::{FileStore, Golden, KvStateRepository, generate_thought};
use tracing::{error, info};

use crate::config::AppConfig;
use crate::logging::init_logging;
use crate::render::{render_post, render_user};

type FileGolden = Golden<KvStateRepository<FileStore>>;

#[derive(Parser, Debug)]
#[command(name = "golden", about = "Golden Social from the terminal")]
struct Cli {
    /// Directory holding the session and posts
    #[clap(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Answer yes to confirmation prompts
    #[clap(short, long, global = true)]
    yes: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login {
        #[clap(long)]
        username: String,
        /// Accepted for parity with the web form; never checked
        #[clap(long)]
        password: Option<String>,
    },
    Logout,
    Whoami,
    Feed {
        #[clap(long)]
        limit: Option<usize>,
    },
    Post {
        #[clap(long)]
        text: Option<String>,
        #[clap(long)]
        image: Option<PathBuf>,
        /// Fill the text with a generated golden thought
        #[clap(long)]
        generate: bool,
    },
    Like {
        post_id: String,
    },
    Comment {
        post_id: String,
        #[clap(long)]
        text: String,
    },
    Search {
        query: Option<String>,
    },
    Generate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let args = Cli::parse();
    let mut config = AppConfig::from_env()?;
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }

    let mut app: FileGolden =
        Golden::open(KvStateRepository::new(FileStore::new(&config.data_dir)))?;
    info!(data_dir = %config.data_dir.display(), "state loaded");

    match args.command {
        Command::Login { username, password: _ } => match app.login(&username) {
            Ok(session) => println!("Welcome @{}", session.username),
            Err(e) if e.is_declined() => {}
            Err(e) => return Err(e.into()),
        },
        Command::Logout => {
            let assume_yes = args.yes;
            let confirm = |prompt: &str| assume_yes || ask(prompt);
            if app.logout(&confirm)? {
                println!("Logged out.");
            }
        }
        Command::Whoami => match app.session() {
            Some(session) => println!(
                "@{} (joined {})",
                session.username,
                session.joined_at.format("%Y-%m-%d %H:%M UTC")
            ),
            None => println!("Not logged in."),
        },
        Command::Feed { limit } => print_feed(&app, limit),
        Command::Post {
            text,
            image: image_path,
            generate,
        } => {
            let text = match (text, generate) {
                (Some(text), _) => text,
                (None, true) => thought(&config).await,
                (None, false) => String::new(),
            };
            let image = image_path
                .as_deref()
                .map(image::encode_image)
                .transpose()?;
            if let Some(post) = app.create_post(text, image)? {
                println!("Posted [{}]", post.id);
            }
        }
        Command::Like { post_id } => match app.toggle_like(&post_id)? {
            Some(true) => println!("Liked [{}]", post_id),
            Some(false) => println!("Unliked [{}]", post_id),
            None => {}
        },
        Command::Comment { post_id, text } => {
            if let Some(comment) = app.add_comment(&post_id, text)? {
                println!("Commented [{}] on [{}]", comment.id, post_id);
            }
        }
        Command::Search { query } => {
            let Some(universe) = app.universe() else {
                return Ok(());
            };
            let found: Vec<&str> = match query.as_deref() {
                Some(query) => universe.search(query),
                None => universe.users().iter().map(String::as_str).collect(),
            };
            for user in found {
                println!("{}", render_user(user, universe.stats(user)));
            }
        }
        Command::Generate => println!("{}", thought(&config).await),
    }

    Ok(())
}

fn print_feed(app: &FileGolden, limit: Option<usize>) {
    match feed_view(app, limit, Utc::now()) {
        Some(posts) => posts.iter().for_each(|post| println!("{}", post)),
        None => println!("Not logged in. Run `golden login --username <name>` first."),
    }
}

/// Rendered posts for the logged-in user; `None` while logged out.
fn feed_view(
    app: &FileGolden,
    limit: Option<usize>,
    now: DateTime<Utc>,
) -> Option<Vec<String>> {
    let session = app.session()?;
    let posts = app
        .posts()
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|post| render_post(post, Some(&session.username), now))
        .collect();
    Some(posts)
}

async fn thought(config: &AppConfig) -> String {
    match GeminiClient::new(config.gemini.clone()) {
        Ok(client) => generate_thought(&client).await,
        Err(e) => {
            error!("failed to build thought client: {}", e);
            golden_core::application::thought_service::ERROR_FALLBACK.to_string()
        }
    }
}

fn ask(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
