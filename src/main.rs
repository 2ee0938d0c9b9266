use anyhow::Context;
use clap::Parser;
use health_reports::{cli, config, error, export, scanner, source, terminal};
use health_reports_common::{build_cards_with_step, find_problems, upload, UploadPolicy};
use cli::{Cli, Commands};
use config::Config;
use source::ReportSource;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load().context("設定の読み込みに失敗しました")?;

    match cli.command {
        Commands::List { input } => {
            let source = ReportSource::resolve(input, config.reports_file());
            let reports = source
                .load()
                .with_context(|| format!("レポートを読み込めません: {}", source.describe()))?;
            tracing::debug!(source = %source.describe(), count = reports.len(), "rendering list");

            let cards = build_cards_with_step(&reports, config.stagger_step());
            println!("📋 Test Reports ({}件)\n", cards.len());
            print!("{}", terminal::render_list(&cards));
        }

        Commands::Export { input, output } => {
            let source = ReportSource::resolve(input, config.reports_file());
            let reports = source
                .load()
                .with_context(|| format!("レポートを読み込めません: {}", source.describe()))?;

            let cards = build_cards_with_step(&reports, config.stagger_step());
            let path = export::export_cards(&cards, &source.describe(), &output)?;
            println!("✔ カード出力: {}", path.display());
        }

        Commands::Validate { input } => {
            let source = ReportSource::File(input);
            let reports = source.load()?;
            let problems = find_problems(&reports);

            if problems.is_empty() {
                println!("✔ {}件のレポートに問題はありません", reports.len());
            } else {
                for problem in &problems {
                    println!("✘ {}", problem);
                }
                return Err(error::HealthReportsError::ValidationFailed(problems.len()).into());
            }
        }

        Commands::Check { paths, recursive } => {
            let policy = UploadPolicy::with_max_bytes(config.max_upload_bytes);
            let files = scanner::scan_paths(&paths, recursive)?;
            let results = scanner::check_files(files, &policy);

            for result in &results {
                match &result.verdict {
                    Ok(()) => {
                        let stored = upload::safe_file_name(&result.file.candidate.file_name);
                        if stored == result.file.candidate.file_name {
                            println!("✔ {}", result.file.path.display());
                        } else {
                            println!("✔ {} (保存名: {})", result.file.path.display(), stored);
                        }
                    }
                    Err(reason) => println!("✘ {} ({})", result.file.path.display(), reason),
                }
            }

            let accepted = results.iter().filter(|r| r.is_accepted()).count();
            println!("\n受付可能: {} / {}（アップロードは行いません）", accepted, results.len());
        }

        Commands::Config { set_reports_file, set_stagger_ms, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(path) = set_reports_file {
                config.set_reports_file(path)?;
                changed = true;
            }

            if let Some(ms) = set_stagger_ms {
                config.set_stagger_step_ms(ms)?;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!(
                    "  レポートファイル: {}",
                    config
                        .reports_file()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定（サンプルデータ）".to_string())
                );
                println!("  アニメーション遅延: {}ms/枚", config.stagger_step_ms);
                println!("  最大アップロードサイズ: {} bytes", config.max_upload_bytes);
            }
        }
    }

    Ok(())
}
