use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::FmtSubscriber;

use culvert_toolbox::app::{self, AppError};
use culvert_toolbox::args::{CulvertArgs, DisplayArgs, LogLevel};
use culvert_toolbox::config;
use culvert_toolbox::quantity::QuantityKind;

/// 퇴적된 원형 암거의 유량·유속 계산 도구
#[derive(Parser)]
#[command(name = "culvert_toolbox_cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Discharge and velocity of a partially silted circular culvert", long_about = None)]
struct Cli {
    /// 설정 파일 경로
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(short, long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 암거 유량·유속 계산
    Evaluate {
        #[command(flatten)]
        culvert: CulvertArgs,
        #[command(flatten)]
        display: DisplayArgs,
    },
    /// 수위차-유량 표
    Rating {
        #[command(flatten)]
        culvert: CulvertArgs,
        #[command(flatten)]
        display: DisplayArgs,
        /// 최대 수위차 [cm]
        #[arg(long, default_value_t = 20.0)]
        max_head_cm: f64,
        /// 구간 수
        #[arg(long, default_value_t = 10)]
        steps: usize,
    },
    /// 대화형 메뉴
    Interactive,
    /// 단위 변환
    Convert {
        #[arg(value_enum)]
        kind: Quantity,
        value: f64,
        from: String,
        to: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Quantity {
    Flow,
    Velocity,
    Length,
}

impl From<Quantity> for QuantityKind {
    fn from(value: Quantity) -> Self {
        match value {
            Quantity::Flow => QuantityKind::Flow,
            Quantity::Velocity => QuantityKind::Velocity,
            Quantity::Length => QuantityKind::Length,
        }
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 선택된 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::from(cli.log_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("로그 초기화 실패: {err}");
    }

    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    match cli.command {
        Commands::Evaluate { culvert, display } => app::run_evaluate(&cfg, &culvert, &display),
        Commands::Rating {
            culvert,
            display,
            max_head_cm,
            steps,
        } => app::run_rating(&cfg, &culvert, &display, max_head_cm, steps),
        Commands::Interactive => app::run_interactive(&mut cfg, &cli.config),
        Commands::Convert {
            kind,
            value,
            from,
            to,
        } => app::run_convert(kind.into(), value, &from, &to),
    }
}
