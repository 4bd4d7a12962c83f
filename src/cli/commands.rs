use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gpuintel", about = "GPU infrastructure economics backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Listen port (overrides GPUINTEL_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Send one message to the chat responder
    Chat {
        message: String,
    },
    /// Run a TCO scenario
    Tco {
        /// GPU model (H100, H200, MI300X, B200)
        #[arg(long, default_value = "H100")]
        gpu_type: String,
        #[arg(long, default_value = "8")]
        gpus: u32,
        /// Power rate in USD/kWh
        #[arg(long)]
        power_rate: Option<f64>,
        #[arg(long)]
        years: Option<u32>,
    },
    /// Run an ROI scenario
    Roi {
        #[arg(long, default_value = "240000")]
        investment: f64,
        #[arg(long, default_value = "3.5")]
        hourly_rate: f64,
        #[arg(long)]
        utilization: Option<f64>,
        #[arg(long, default_value = "8")]
        gpus: u32,
    },
    /// Print the GPU comparison table
    Compare,
    /// Fetch reference data for securities
    RefData {
        /// Comma-separated security identifiers
        securities: String,
        /// Comma-separated field mnemonics
        #[arg(long, default_value = "PX_LAST")]
        fields: String,
    },
    /// Fetch a daily history for one security
    History {
        security: String,
        #[arg(long, default_value = "PX_LAST")]
        fields: String,
        /// Start date, YYYYMMDD
        #[arg(long)]
        from: String,
        /// End date, YYYYMMDD
        #[arg(long)]
        to: String,
    },
    /// List training modules
    Modules,
    /// Show one lesson
    Lesson {
        module_id: String,
        lesson_id: String,
    },
    /// Submit quiz answers for a lesson
    SubmitQuiz {
        module_id: String,
        lesson_id: String,
        /// Comma-separated answer indices
        answers: String,
        #[arg(long, default_value = "default")]
        user: String,
    },
    /// Show a user's training progress
    Progress {
        #[arg(long, default_value = "default")]
        user: String,
    },
}
