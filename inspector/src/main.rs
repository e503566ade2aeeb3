use std::process;

use clap::Parser;
use ledgerfetch_client::{AccountsFetcher, RpcCluster, RpcProviderConfig};
use log::*;
use solana_sdk::{commitment_config::CommitmentLevel, pubkey::Pubkey};

/// Fetches accounts from a cluster and prints one line per pubkey.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Cluster moniker (mainnet, testnet, devnet, localhost) or RPC url
    cluster: RpcCluster,
    /// Commitment to fetch at, the node's default when omitted
    #[arg(long)]
    commitment: Option<CommitmentLevel>,
    /// Accounts to fetch
    #[arg(required = true)]
    pubkeys: Vec<Pubkey>,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = Args::parse();
    info!(
        "Fetching {} accounts from {}",
        args.pubkeys.len(),
        args.cluster.url()
    );

    let config = RpcProviderConfig::new(args.cluster, args.commitment);
    let fetcher = match AccountsFetcher::new(config) {
        Ok(fetcher) => fetcher,
        Err(err) => {
            error!("Error: {:?}", err);
            process::exit(1);
        }
    };
    match fetcher.get_multiple_accounts(&args.pubkeys, None).await {
        Ok(slots) => {
            for (pubkey, slot) in args.pubkeys.iter().zip(slots) {
                match slot {
                    Some(keyed) => println!(
                        "{} owner={} lamports={} executable={} data_len={}",
                        pubkey,
                        keyed.account.owner,
                        keyed.account.lamports,
                        keyed.account.executable,
                        keyed.account.data.len()
                    ),
                    None => println!("{} absent", pubkey),
                }
            }
        }
        Err(err) => {
            error!("Error: {}", err);
            process::exit(1);
        }
    }
}
