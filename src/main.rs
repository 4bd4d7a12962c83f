use clap::Parser;
use gpuintel::application::scenario::{RoiParams, TcoParams};
use gpuintel::cli::commands::{Cli, Commands};
use gpuintel::config::Config;
use gpuintel::infrastructure::http::start_server;
use gpuintel::GpuIntel;
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    let config = Config::load();

    if let Err(e) = run_command(config, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(config: Config, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    let app = Arc::new(GpuIntel::new(&config));

    match cmd {
        Commands::Serve { port } => {
            start_server(app, port.unwrap_or(config.port)).await?;
        }
        Commands::Chat { message } => {
            let reply = app.chat(&message, &[]);
            println!("{}", serde_json::to_string_pretty(&reply)?);
        }
        Commands::Tco {
            gpu_type,
            gpus,
            power_rate,
            years,
        } => {
            let result = app.tco_scenario(&TcoParams {
                gpu_type: Some(gpu_type),
                num_gpus: Some(gpus),
                power_rate,
                years,
                ..TcoParams::default()
            })?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Roi {
            investment,
            hourly_rate,
            utilization,
            gpus,
        } => {
            let result = app.roi_scenario(&RoiParams {
                investment: Some(investment),
                hourly_rate: Some(hourly_rate),
                utilization,
                num_gpus: Some(gpus),
            })?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Compare => {
            println!("{}", serde_json::to_string_pretty(&app.gpu_comparison())?);
        }
        Commands::RefData { securities, fields } => {
            app.market_connect().await;
            let data = app
                .reference_data(&split_list(&securities), &split_list(&fields))
                .await?;
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Commands::History {
            security,
            fields,
            from,
            to,
        } => {
            app.market_connect().await;
            let data = app
                .historical_data(&security, &split_list(&fields), &from, &to)
                .await?;
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Commands::Modules => {
            println!("{}", serde_json::to_string_pretty(&app.modules())?);
        }
        Commands::Lesson {
            module_id,
            lesson_id,
        } => {
            let lesson = app.lesson(&module_id, &lesson_id)?;
            println!("{}", serde_json::to_string_pretty(lesson)?);
        }
        Commands::SubmitQuiz {
            module_id,
            lesson_id,
            answers,
            user,
        } => {
            let answers: Vec<usize> = split_list(&answers)
                .iter()
                .map(|a| a.parse())
                .collect::<Result<_, _>>()
                .map_err(|e| format!("invalid answer index: {e}"))?;
            let result = app.submit_quiz(&module_id, &lesson_id, &answers, &user)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Progress { user } => {
            println!("{}", serde_json::to_string_pretty(&app.user_progress(&user))?);
        }
    }
    Ok(())
}

fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}
