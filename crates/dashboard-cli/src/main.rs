//! 재무 성과 대시보드 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 두 패널 모두 보기
//! dashboard show
//!
//! # 인덱스 패널 범위 지정
//! dashboard index --from 2023-06-30 --to 2024-06-30
//!
//! # 로컬 CSV로 거래 패널 보기 (JSON)
//! dashboard trading --file data/trades.csv --format json
//!
//! # 거래 패널 날짜 선택지
//! dashboard options --panel trading
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use dashboard_cli::{
    build_source, run_index, run_options, run_show, run_trading, OutputFormat, PanelKind,
    RangeArgs, Report, SourceArgs,
};
use dashboard_core::logging::{init_logging, init_logging_from_env, LogConfig};
use dashboard_core::{AppConfig, DEFAULT_CONFIG_PATH};
use tracing::{debug, error};

#[derive(Parser)]
#[command(name = "dashboard")]
#[command(about = "Financial Performance Dashboard - 인덱스/거래 성과 조회", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 경로 (기본: config/default.toml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// 거래 CSV 소스 인자.
#[derive(Args)]
struct SourceOpts {
    /// 거래 CSV URL (기본: 설정의 remote.csv_url)
    #[arg(long, conflicts_with = "file")]
    url: Option<String>,

    /// 로컬 거래 CSV 파일
    #[arg(long)]
    file: Option<PathBuf>,
}

impl From<SourceOpts> for SourceArgs {
    fn from(opts: SourceOpts) -> Self {
        Self {
            url: opts.url,
            file: opts.file,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// 두 패널 모두 출력
    Show {
        /// 인덱스 시작 월 (예: 2023-03-31)
        #[arg(short = 'f', long)]
        from: Option<String>,

        /// 인덱스 끝 월
        #[arg(short, long)]
        to: Option<String>,

        /// 거래 시작 날짜
        #[arg(long)]
        trading_from: Option<String>,

        /// 거래 끝 날짜
        #[arg(long)]
        trading_to: Option<String>,

        #[command(flatten)]
        source: SourceOpts,

        /// 출력 형식 (table, json)
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// 인덱스 비교 패널 출력
    Index {
        /// 시작 월
        #[arg(short = 'f', long)]
        from: Option<String>,

        /// 끝 월
        #[arg(short, long)]
        to: Option<String>,

        /// 출력 형식 (table, json)
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// 거래 성과 패널 출력
    Trading {
        /// 시작 날짜
        #[arg(short = 'f', long)]
        from: Option<String>,

        /// 끝 날짜
        #[arg(short, long)]
        to: Option<String>,

        #[command(flatten)]
        source: SourceOpts,

        /// 출력 형식 (table, json)
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// 패널의 시작/끝 선택지 출력
    Options {
        /// 패널 (index, trading)
        #[arg(short, long, default_value = "index")]
        panel: String,

        #[command(flatten)]
        source: SourceOpts,
    },
}

async fn run(cli: Cli, config: AppConfig) -> Result<Report> {
    match cli.command {
        Commands::Show {
            from,
            to,
            trading_from,
            trading_to,
            source,
            format,
        } => {
            let format = OutputFormat::parse(&format)?;
            let source = build_source(&source.into(), &config.remote)?;
            run_show(
                &config,
                &RangeArgs { from, to },
                &RangeArgs {
                    from: trading_from,
                    to: trading_to,
                },
                source.as_ref(),
                format,
            )
            .await
        }
        Commands::Index { from, to, format } => {
            let format = OutputFormat::parse(&format)?;
            run_index(&config, &RangeArgs { from, to }, format)
        }
        Commands::Trading {
            from,
            to,
            source,
            format,
        } => {
            let format = OutputFormat::parse(&format)?;
            let source = build_source(&source.into(), &config.remote)?;
            run_trading(&config, &RangeArgs { from, to }, source.as_ref(), format).await
        }
        Commands::Options { panel, source } => {
            let panel = PanelKind::parse(&panel)?;
            let source = build_source(&source.into(), &config.remote)?;
            run_options(&config, panel, source.as_ref()).await
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => AppConfig::load(path),
        None => AppConfig::load_default(),
    };
    let config_path = cli.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH).to_string();

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            // 설정 없이도 실패 원인은 로그로 남김
            if init_logging_from_env().is_ok() {
                error!(config = %config_path, error = %e, "Failed to load configuration");
            }
            eprintln!("Error: failed to load config {}: {}", config_path, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(LogConfig::from(&config.logging)) {
        eprintln!("Error: failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }
    debug!(config = %config_path, "Configuration loaded");

    match run(cli, config).await {
        Ok(report) => {
            println!("{}", report.body);
            if report.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
