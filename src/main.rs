//! Estate Concierge - property assistant for Modern Real Estate
//!
//! Runs the site's chat widget and navigation bar in the terminal. Lines
//! typed at the prompt go to the assistant; lines starting with `/` are
//! widget and navigation commands.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod conversation;
mod core;
mod site;
mod widget;

use crate::core::{ChatEngine, KeywordResponder, Responder, SubmitOutcome};
use config::Config;
use conversation::{Message, Sender};
use site::{Navigation, BRAND_MARK, BRAND_NAME};
use widget::ChatWidget;

const HELP: &str = "Commands: /open  /menu  /go <href>  /lang  /transcript  /help  /quit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "estate_concierge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    let book = config.reply_book().await?;
    tracing::info!("📚 Loaded {} reply rule(s)", book.rules.len());

    let responder: Arc<dyn Responder> = Arc::new(KeywordResponder::new(book));
    let engine = ChatEngine::new(responder, config.reply_delay());
    let mut widget = ChatWidget::new(engine);
    tracing::info!(conversation = %widget.engine().id(), "💬 Chat widget ready");
    let mut nav = Navigation::new(config.language);

    print_nav_bar(&nav);
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let command = line.trim_end();

        match command.split_once(' ').map_or((command, ""), |(c, a)| (c, a.trim())) {
            ("/quit", _) => break,
            ("/help", _) => println!("{}", HELP),
            ("/open", _) => {
                if widget.toggle() {
                    for message in widget.transcript().await {
                        print_message(&message);
                    }
                } else {
                    println!("(chat closed)");
                }
            }
            ("/menu", _) => {
                if nav.toggle_menu() {
                    for link in nav.links() {
                        println!("  {:<12} {}", link.label, link.href);
                    }
                    println!("  Language: {}", nav.language());
                }
            }
            ("/go", href) => match nav.follow(href) {
                Some(link) => println!("→ {} ({})", link.label, link.href),
                None => println!("No page at '{}'", href),
            },
            ("/lang", _) => {
                nav.toggle_language();
                print_nav_bar(&nav);
            }
            ("/transcript", _) => {
                let transcript = widget.transcript().await;
                println!("{}", serde_json::to_string_pretty(&transcript)?);
            }
            _ => send(&mut widget, &line).await,
        }
    }

    widget.end_session().await;
    tracing::info!("👋 Session ended");

    Ok(())
}

async fn send(widget: &mut ChatWidget, line: &str) {
    if !widget.is_open() {
        widget.toggle();
    }

    widget.set_input(line);
    if !widget.can_send() {
        if widget.typing() {
            println!("(still replying, '{}' not sent)", widget.input());
        }
        return;
    }

    let mut typing = widget.engine().subscribe_pending();
    match widget.send().await {
        SubmitOutcome::Accepted(_) => {
            if *typing.borrow_and_update() {
                println!("assistant is typing…");
            }
            drop(typing);
            widget.engine().wait_for_reply().await;

            if let Some(reply) = widget.transcript().await.last() {
                print_message(reply);
            }
        }
        SubmitOutcome::Ignored => {}
        SubmitOutcome::Busy => println!("(still replying, try again in a moment)"),
        SubmitOutcome::Closed => println!("(conversation closed)"),
    }
}

fn print_nav_bar(nav: &Navigation) {
    let labels: Vec<&str> = nav.links().iter().map(|l| l.label).collect();
    println!(
        "[{}] {}  |  {}  |  {}",
        BRAND_MARK,
        BRAND_NAME,
        labels.join("  "),
        nav.language()
    );
}

fn print_message(message: &Message) {
    let who = match message.sender {
        Sender::User => "you",
        Sender::Assistant => "assistant",
    };
    println!("{:>9}: {}", who, message.text);
}
