use super::Output;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tsl_client::{TerrariaServerListClient, VoteList, VoterList};

#[derive(Args, Debug)]
pub struct ListArgs {
  /// Entries to request (service default 100, values above 500 are passed through)
  #[arg(short, long)]
  pub limit: Option<u32>,

  /// Only show votes that have not been claimed yet (votes only)
  #[arg(long)]
  pub unclaimed: bool,
}

pub async fn handle_votes(
  client: &TerrariaServerListClient,
  args: ListArgs,
  output: Output,
) -> Result<()> {
  let votes = client.get_votes(args.limit).await.context("Failed to fetch votes")?;
  output.emit(&votes, |votes| render_votes(votes, args.unclaimed))
}

pub async fn handle_voters(
  client: &TerrariaServerListClient,
  args: ListArgs,
  output: Output,
) -> Result<()> {
  let voters = client.get_voters(args.limit).await.context("Failed to fetch voters")?;
  output.emit(&voters, render_voters)
}

fn render_votes(votes: &VoteList, unclaimed_only: bool) -> String {
  let mut text = format!("{} votes for {} in {}\n", votes.len(), votes.name().bold(), votes.period());

  let shown: Vec<_> =
    if unclaimed_only { votes.unclaimed().collect() } else { votes.iter().collect() };
  for vote in shown {
    let who = vote.voter().map(|voter| voter.to_string()).unwrap_or_else(|| "anonymous".to_string());
    let state = if vote.is_claimed() { "claimed".green() } else { "unclaimed".yellow() };
    text.push_str(&format!(
      "  {}  {:<24} {}\n",
      vote.timestamp().format("%Y-%m-%d %H:%M"),
      who,
      state
    ));
  }
  text.trim_end().to_string()
}

fn render_voters(voters: &VoterList) -> String {
  let mut text = format!(
    "{} voters, {} votes for {} in {}\n",
    voters.len(),
    voters.total_votes(),
    voters.name().bold(),
    voters.period()
  );
  for (rank, voter) in voters.iter().enumerate() {
    text.push_str(&format!("  {:>3}. {}\n", rank + 1, voter));
  }
  text.trim_end().to_string()
}
