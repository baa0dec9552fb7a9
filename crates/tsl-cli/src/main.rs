/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tsl_client::TerrariaServerListClient;

mod commands;
use commands::{
  Output,
  claim::{VoterArgs, handle_check, handle_claim},
  server::handle_server,
  votes::{ListArgs, handle_voters, handle_votes},
};

mod config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "tsl")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Print the decoded response as JSON
  #[arg(long, global = true)]
  json: bool,

  /// Server API key
  #[arg(short, long, global = true, env = "TSL_API_KEY", hide_env_values = true)]
  key: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Show the server's listing
  Server,
  /// List this month's votes
  Votes(ListArgs),
  /// Rank this month's voters
  Voters(ListArgs),
  /// Check whether a voter voted today and claimed the vote
  Check(VoterArgs),
  /// Mark a voter's vote for today as claimed
  Claim(VoterArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  let cli = Cli::parse();

  let log_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt().with_env_filter(log_level).with_writer(std::io::stderr).init();

  let config = config::load(cli.key)?;
  let client = TerrariaServerListClient::new(config).context("Failed to create API client")?;
  let output = Output::new(cli.json);

  match cli.command {
    Commands::Server => handle_server(&client, output).await?,
    Commands::Votes(args) => handle_votes(&client, args, output).await?,
    Commands::Voters(args) => handle_voters(&client, args, output).await?,
    Commands::Check(args) => handle_check(&client, args, output).await?,
    Commands::Claim(args) => handle_claim(&client, args, output).await?,
  }

  Ok(())
}
