use super::Output;
use anyhow::{Context, Result, bail};
use clap::{ArgGroup, Args};
use colored::Colorize;
use serde::Serialize;
use tracing::info;
use tsl_client::{ClaimStatus, TerrariaServerListClient, VoterId};

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("voter").required(true).args(["nickname", "steam_id"])))]
pub struct VoterArgs {
  /// Nickname the vote was cast under
  #[arg(short, long)]
  pub nickname: Option<String>,

  /// Steam ID the vote was cast with
  #[arg(short, long)]
  pub steam_id: Option<u64>,
}

impl VoterArgs {
  fn voter(&self) -> Result<VoterId> {
    match (&self.nickname, self.steam_id) {
      (Some(nickname), None) => Ok(VoterId::Nickname(nickname.clone())),
      (None, Some(steam_id)) => Ok(VoterId::SteamId(steam_id)),
      _ => bail!("Give exactly one of --nickname or --steam-id"),
    }
  }
}

#[derive(Debug, Serialize)]
struct CheckReport {
  voter: VoterId,
  status: ClaimStatus,
}

#[derive(Debug, Serialize)]
struct ClaimReport {
  voter: VoterId,
  claimed: bool,
}

pub async fn handle_check(
  client: &TerrariaServerListClient,
  args: VoterArgs,
  output: Output,
) -> Result<()> {
  let voter = args.voter()?;
  let status = client.votes().check_claim(&voter).await.context("Failed to check vote status")?;
  output.emit(&CheckReport { voter, status }, render_check)
}

/// Claim the vote, failing the process when the service did not accept it.
pub async fn handle_claim(
  client: &TerrariaServerListClient,
  args: VoterArgs,
  output: Output,
) -> Result<()> {
  let voter = args.voter()?;
  let claimed = client.votes().claim(&voter).await;
  info!("Claim for {}: {}", voter, claimed);

  output.emit(&ClaimReport { voter: voter.clone(), claimed }, render_claim)?;
  if !claimed {
    bail!("Vote for {} was not claimed", voter);
  }
  Ok(())
}

fn render_check(report: &CheckReport) -> String {
  let status = match report.status {
    ClaimStatus::Unknown => report.status.to_string().red(),
    ClaimStatus::Unclaimed => report.status.to_string().yellow(),
    ClaimStatus::Claimed => report.status.to_string().green(),
  };
  format!("{}: {}", report.voter, status)
}

fn render_claim(report: &ClaimReport) -> String {
  if report.claimed {
    format!("{}: {}", report.voter, "claimed".green())
  } else {
    format!("{}: {}", report.voter, "not claimed".red())
  }
}
