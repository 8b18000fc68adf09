//! 三交换机排队仿真
//!
//! Poisson 到达、单服务台 FIFO，switch1 完成后按概率分流到 switch2/switch3。
//! 可对多个种子重复运行，输出每个交换机的时延统计。

use clap::Parser;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use switchsim_rs::error::ConfigError;
use switchsim_rs::report::{CSV_HEADER, RunReport};
use switchsim_rs::runner;
use switchsim_rs::sim::SimConfig;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(
    name = "switch-sim",
    about = "三交换机排队仿真：Poisson 到达 + 单服务台 FIFO + 概率分流"
)]
struct Args {
    /// JSON 配置文件；不给则使用三交换机链的缺省配置
    #[arg(long)]
    config: Option<PathBuf>,

    /// 随机种子，可重复或用逗号分隔；每个种子独立运行一次
    #[arg(long = "seed", value_delimiter = ',')]
    seeds: Vec<u64>,

    /// switch1 外生到达率（每秒）
    #[arg(long)]
    arrival_rate: Option<f64>,
    /// switch2 外生到达率（每秒）
    #[arg(long)]
    arrival_rate_2: Option<f64>,
    /// switch3 外生到达率（每秒）
    #[arg(long)]
    arrival_rate_3: Option<f64>,
    /// 关闭 switch2/3 自己的外生到达，只保留分流注入
    #[arg(long)]
    no_exogenous_2_3: bool,

    /// switch1 服务时间（毫秒）
    #[arg(long)]
    service_ms: Option<f64>,
    /// switch2/3 服务时间（毫秒）
    #[arg(long)]
    service_ms_2_3: Option<f64>,

    /// switch1 完成后分流到 switch2 的概率
    #[arg(long)]
    prob_1_2: Option<f64>,
    /// 关闭分流
    #[arg(long)]
    no_routing: bool,

    /// 时延超过该值（毫秒）计入 above_threshold
    #[arg(long)]
    threshold_ms: Option<f64>,

    /// switch1 完成多少个 packet 后停止
    #[arg(long)]
    run_length: Option<u64>,
    /// 仿真运行到多少毫秒
    #[arg(long)]
    until_ms: Option<u64>,
    /// 每多少次 switch1 完成打印一次进度（0 关闭）
    #[arg(long)]
    progress_every: Option<u64>,

    /// 追加 CSV 结果（每个种子、每个交换机一行）
    #[arg(long)]
    csv: Option<PathBuf>,
    /// 输出 JSON 报告数组
    #[arg(long)]
    json_out: Option<PathBuf>,
}

fn set_rate(cfg: &mut SimConfig, index: usize, rate: Option<f64>) {
    if let (Some(rate), Some(sw)) = (rate, cfg.switches.get_mut(index)) {
        sw.arrival_rate_per_sec = Some(rate);
    }
}

fn build_config(args: &Args) -> Result<SimConfig, ConfigError> {
    let mut cfg = match &args.config {
        Some(path) => SimConfig::from_json_file(path)?,
        None => SimConfig::default(),
    };

    set_rate(&mut cfg, 0, args.arrival_rate);
    set_rate(&mut cfg, 1, args.arrival_rate_2);
    set_rate(&mut cfg, 2, args.arrival_rate_3);
    if args.no_exogenous_2_3 {
        for sw in cfg.switches.iter_mut().skip(1) {
            sw.arrival_rate_per_sec = None;
        }
    }
    if let (Some(ms), Some(sw)) = (args.service_ms, cfg.switches.first_mut()) {
        sw.service_time_ms = ms;
    }
    if let Some(ms) = args.service_ms_2_3 {
        for sw in cfg.switches.iter_mut().skip(1) {
            sw.service_time_ms = ms;
        }
    }
    if args.no_routing {
        cfg.routing = None;
    } else if let (Some(p), Some(r)) = (args.prob_1_2, cfg.routing.as_mut()) {
        r.prob_primary = p;
    }
    if let Some(ms) = args.threshold_ms {
        cfg.delay_threshold_ms = ms;
    }
    if let Some(n) = args.run_length {
        cfg.run_length = Some(n);
    }
    if let Some(ms) = args.until_ms {
        cfg.until_ms = Some(ms);
    }
    if let Some(n) = args.progress_every {
        cfg.progress_every = n;
    }

    cfg.validate()?;
    Ok(cfg)
}

/// 只追加新行；文件为空时先写表头。已有内容不会被读取或改写。
fn append_csv(path: &Path, reports: &[RunReport]) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut out = String::new();
    if file.metadata()?.len() == 0 {
        out.push_str(CSV_HEADER);
        out.push('\n');
    }
    for line in reports.iter().flat_map(RunReport::csv_lines) {
        out.push_str(&line);
        out.push('\n');
    }
    file.write_all(out.as_bytes())
}

fn write_json(path: &Path, reports: &[RunReport]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(reports)?;
    fs::write(path, json)
}

fn print_report(report: &RunReport) {
    for s in &report.switches {
        println!(
            "switch_stats seed={} switch={} arrivals={} exogenous={} routed={} processed={} above_threshold={} max_buffer={} mean_delay_ms={}",
            report.seed,
            s.name,
            s.stats.arrival_count,
            s.stats.exogenous_arrivals,
            s.stats.routed_arrivals,
            s.stats.number_of_packets_processed,
            s.stats.number_above_threshold,
            s.stats.max_buffer_len,
            s.mean_delay_ms
                .map(|d| format!("{d:.6}"))
                .unwrap_or_else(|| "-".to_string()),
        );
    }
}

fn main() -> ExitCode {
    // 初始化 tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();
    let base = match build_config(&args) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(%e, "配置无效");
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };
    let seeds = if args.seeds.is_empty() {
        vec![base.seed]
    } else {
        args.seeds.clone()
    };

    let mut reports = Vec::with_capacity(seeds.len());
    for seed in seeds {
        let cfg = SimConfig { seed, ..base.clone() };
        info!(seed, "开始运行");
        match runner::run(&cfg) {
            Ok(report) => {
                print_report(&report);
                reports.push(report);
            }
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::from(2);
            }
        }
    }

    if let Some(path) = &args.csv {
        if let Err(e) = append_csv(path, &reports) {
            eprintln!("error: write csv {}: {e}", path.display());
            return ExitCode::from(2);
        }
        eprintln!("wrote csv rows to {}", path.display());
    }

    if let Some(path) = &args.json_out {
        if let Err(e) = write_json(path, &reports) {
            eprintln!("error: write json report {}: {e}", path.display());
            return ExitCode::from(2);
        }
        eprintln!("wrote json report to {}", path.display());
    }

    ExitCode::SUCCESS
}
