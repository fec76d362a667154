use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "postdigest")]
#[command(about = "Summarize API collection files into endpoint listings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the collection upload API
    Server(ServerArgs),
    /// Print the summary of a collection file to stdout
    Summarize(SummarizeArgs),
}

#[derive(clap::Args, Debug)]
pub struct ServerArgs {
    /// Address to bind the HTTP server to (overrides server.bind_addr)
    #[arg(long)]
    pub address: Option<SocketAddr>,
}

#[derive(clap::Args, Debug)]
pub struct SummarizeArgs {
    /// Path to the collection JSON file
    pub path: PathBuf,

    /// Descend into folder items
    #[arg(long)]
    pub flatten_folders: bool,
}
