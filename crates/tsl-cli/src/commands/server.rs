use super::Output;
use anyhow::{Context, Result};
use colored::Colorize;
use tsl_client::{Server, TerrariaServerListClient};

pub async fn handle_server(client: &TerrariaServerListClient, output: Output) -> Result<()> {
  let server = client.get_server().await.context("Failed to fetch server details")?;
  output.emit(&server, render)
}

fn yes_no(flag: bool) -> &'static str {
  if flag { "yes" } else { "no" }
}

fn render(server: &Server) -> String {
  let status = if server.is_online() {
    format!("online, {}/{} players", server.players(), server.max_players()).green()
  } else {
    "offline".red()
  };

  let rows = [
    ("address", server.endpoint()),
    ("status", status.to_string()),
    ("version", format!("{} on {}", server.version(), server.platform())),
    ("world", server.map().to_string()),
    ("location", format!("{} ({})", server.location(), server.hostname())),
    ("private", yes_no(server.is_private()).to_string()),
    ("password", yes_no(server.is_password_protected()).to_string()),
    ("uptime", format!("{}%", server.uptime())),
    ("votes", server.votes().to_string()),
    ("favorited", server.favorited().to_string()),
    ("comments", server.comments().to_string()),
    ("checked", server.last_check().format("%Y-%m-%d %H:%M UTC").to_string()),
    ("last seen", server.last_online().format("%Y-%m-%d %H:%M UTC").to_string()),
    ("page", server.url().to_string()),
  ];

  let mut text = format!(
    "{} {}\n",
    server.name().bold(),
    format!("(#{} score {})", server.rank(), server.score()).dimmed()
  );
  for (label, value) in rows {
    text.push_str(&format!("  {:<10} {}\n", label, value));
  }
  text.trim_end().to_string()
}
