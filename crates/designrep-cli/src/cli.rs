use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "designrep",
    about = "designrep: verify claimed combinatorial designs against catalog files",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify one stored difference set realization
    VerifyDs {
        /// Canonical parameter name, e.g. DS(7,3,1,[7])
        name: String,

        /// Path to the difference-set catalog JSON
        #[arg(long)]
        catalog: String,

        /// Which stored realization to check
        #[arg(long, default_value_t = 0)]
        index: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Verify one stored signed difference set realization
    VerifySds {
        /// Canonical parameter name, e.g. SDS(7,3,1,[7])
        name: String,

        /// Path to the signed-difference-set catalog JSON
        #[arg(long)]
        catalog: String,

        /// Which stored realization to check
        #[arg(long, default_value_t = 0)]
        index: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Verify one stored circulant weighing matrix realization
    VerifyCw {
        /// Canonical parameter name, e.g. CW(13,3)
        name: String,

        /// Path to the CWM catalog JSON
        #[arg(long)]
        catalog: String,

        /// Which stored realization to check
        #[arg(long, default_value_t = 0)]
        index: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Verify one stored covering design block list
    VerifyCover {
        /// Canonical parameter name, e.g. C(7,3,2)
        name: String,

        /// Path to the block-store JSON
        #[arg(long)]
        blocks: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Verify every realization in a group-ring family catalog
    Check {
        /// Which family the catalog holds: ds, sds, or cw
        family: String,

        /// Path to the catalog JSON
        #[arg(long)]
        catalog: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Verify every block list in a covering block store
    CheckCover {
        /// Path to the block-store JSON
        #[arg(long)]
        blocks: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
