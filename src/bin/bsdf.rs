use clap::*;

use bsdf_r3::core::prelude::*;

use std::env;
use std::path::Path;
use std::path::PathBuf;
use std::process;
use std::thread::available_parallelism;

use log::*;

#[derive(Debug, Parser)]
#[clap(author, about, version, disable_help_flag = true)]
struct CommandOptions {
    /// Input bsdf library (.json).
    #[arg(short, long, value_name = "filename")]
    pub infile: Option<PathBuf>,

    /// Print this help text.
    #[arg(short, long, action = clap::ArgAction::HelpLong)]
    pub help: Option<bool>,

    /// Use specified number of threads for sampling.
    #[arg(short = 'j', long = "nthreads", value_name = "num")]
    pub nthreads: Option<i32>,

    /// Number of samples per bsdf.
    #[arg(
        short = 's',
        long = "samples",
        default_value = "1000000",
        value_name = "num"
    )]
    pub samples: usize,

    /// Cosine of the incident direction. Negative values arrive from inside.
    #[arg(
        long = "cos-theta",
        default_value = "1.0",
        value_name = "cos",
        allow_negative_numbers = true
    )]
    pub cos_theta: Float,

    /// Seed of the random sequences.
    #[arg(long, default_value = "0", value_name = "num")]
    pub seed: u64,

    /// Suppress all text output other than error messages.
    #[clap(long, default_value = "false")]
    pub quiet: bool,

    /// Write the report as JSON.
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Log messages at or above this level (0 -> INFO,
    /// 1 -> WARNING, 2 -> ERROR, 3-> FATAL).
    #[arg(long, value_name = "num")]
    pub minloglevel: Option<i32>,

    /// Print a reformatted version of the input file to standard output.
    /// Does not sample anything.
    #[arg(short, long, default_value = "false")]
    pub cat: bool,

    #[arg(value_name = "filename.json")]
    pub jsonfile: Option<PathBuf>,
}

fn init_logger(opts: &CommandOptions) {
    if let Some(minloglevel) = opts.minloglevel {
        const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
        let log_level = LOG_LEVELS[(minloglevel + 2).clamp(0, 4) as usize];
        env::set_var("RUST_LOG", log_level);
    } else {
        //default log level : warn
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_owned());
        env::set_var("RUST_LOG", log_level);
    }

    env_logger::Builder::from_default_env()
        .format_target(false)
        .format_module_path(false)
        .init();
}

fn print_scene(input_path: &Path) -> i32 {
    match load_scene_file(input_path) {
        Ok(scene) => match serde_json::to_string_pretty(&scene.to_json()) {
            Ok(s) => {
                println!("{}", s);
                0
            }
            Err(e) => {
                error!("{}", BsdfError::from(e));
                -1
            }
        },
        Err(e) => {
            error!("{}", e);
            -1
        }
    }
}

fn create_thread_pool(opts: &CommandOptions) -> Result<rayon::ThreadPool, BsdfError> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(nthreads) = opts.nthreads {
        if nthreads > 0 {
            builder = builder.num_threads(nthreads as usize);
        }
    }
    return builder
        .build()
        .map_err(|e| BsdfError::error(&format!("{}", e)));
}

fn print_report(report: &AlbedoReport) {
    println!("{}", report.name);
    println!("  {}", report.description);
    println!(
        "  cos(theta_i): {:.4}  samples: {}  failures: {}",
        report.cos_theta, report.samples, report.failures
    );
    println!(
        "  reflection: {:.4}  transmission: {:.4}",
        report.reflection_fraction, report.transmission_fraction
    );
    if let Some(fresnel) = report.fresnel {
        println!("  fresnel: {:.4}", fresnel);
    }
    println!(
        "  mean weight: [{:.4}, {:.4}, {:.4}]",
        report.mean_weight[0], report.mean_weight[1], report.mean_weight[2]
    );
}

fn sample_scene(input_path: &Path, opts: &CommandOptions) -> i32 {
    if !opts.quiet && !opts.json {
        let ncores = available_parallelism().map(|n| n.get()).unwrap_or(1);
        let version = env!("CARGO_PKG_VERSION");
        println!("bsdf-r3 version {} [Detected {} cores]", version, ncores);
        println!();
    }

    let scene = match load_scene_file(input_path) {
        Ok(scene) => scene,
        Err(e) => {
            error!("{}", e);
            return -1;
        }
    };
    if scene.is_empty() {
        warn!("No bsdfs in {}.", input_path.display());
    }

    let pool = match create_thread_pool(opts) {
        Ok(pool) => pool,
        Err(e) => {
            error!("{}", e);
            return -1;
        }
    };

    let wi = incident_direction(opts.cos_theta);
    let total = total_samples(opts.samples, scene.len());
    let reporter = if opts.quiet || opts.json {
        ProgressReporter::hidden(total)
    } else {
        ProgressReporter::new(total, "Sampling")
    };

    let mut reports = Vec::new();
    for (i, bsdf) in scene.bsdfs().iter().enumerate() {
        let seed = opts.seed.wrapping_add((i as u64) << 32);
        let stats =
            pool.install(|| estimate_statistics(bsdf.as_ref(), &wi, opts.samples, seed, &reporter));
        // Analytic reference for models that expose an index of refraction.
        let fresnel = match bsdf.to_json().find_float("ior") {
            Ok(Some(ior)) => {
                let eta = if wi.z < 0.0 { 1.0 / ior } else { ior };
                Some(dielectric_reflectance(eta, wi.z.abs()).0)
            }
            _ => None,
        };
        reports.push(AlbedoReport::new(bsdf.as_ref(), wi.z, &stats, fresnel));
    }
    reporter.done();

    if opts.json {
        match serde_json::to_string_pretty(&reports) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                error!("{}", BsdfError::from(e));
                return -1;
            }
        }
    } else if !opts.quiet {
        println!();
        for report in reports.iter() {
            print_report(report);
        }
    }
    return 0;
}

pub fn main() {
    let opts = CommandOptions::parse();
    init_logger(&opts);
    let input = if let Some(infile) = opts.jsonfile.as_ref() {
        Some(infile.clone())
    } else {
        opts.infile.as_ref().cloned()
    };

    let input_path = match input {
        Some(ipath) if ipath.exists() => ipath,
        _ => {
            println!("{}", CommandOptions::command().render_usage());
            process::exit(-1);
        }
    };

    if opts.cat {
        let ret = print_scene(&input_path);
        process::exit(ret);
    } else {
        let ret = sample_scene(&input_path, &opts);
        process::exit(ret);
    }
}
