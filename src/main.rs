use dense_linalg::errors::LinalgError;
use dense_linalg::structures::DenseMatrix;
use env_logger::Builder;
use log::{error, info, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process;

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
enum Job {
    Matvec { a: DenseMatrix, x: Vec<f64> },
    Matmul { a: DenseMatrix, b: DenseMatrix },
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum JobOutput {
    Vector { y: Vec<f64> },
    Matrix { c: DenseMatrix },
}

fn run(path: PathBuf) -> Result<JobOutput, LinalgError> {
    let contents = fs::read_to_string(&path)?;
    let job: Job = serde_json::from_str(&contents)?;

    let start = std::time::Instant::now();
    let output = match job {
        Job::Matvec { a, x } => {
            info!("matvec {}x{}", a.rows(), a.cols());
            JobOutput::Vector { y: a.matvec(&x)? }
        }
        Job::Matmul { a, b } => {
            info!("matmul {}x{}", a.rows(), a.cols());
            JobOutput::Matrix { c: a.matmul(&b)? }
        }
    };
    info!("Job took {:?} to complete", start.elapsed());

    Ok(output)
}

fn main() {
    let mut builder = Builder::new();
    builder
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .filter(None, LevelFilter::Info)
        .parse_default_env()
        .init();

    let path = match std::env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("usage: dense_linalg <job.json>");
            process::exit(2);
        }
    };

    let result = run(path)
        .and_then(|output| serde_json::to_string(&output).map_err(LinalgError::from));
    match result {
        Ok(json) => println!("{}", json),
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}
