//! Умножение случайных матриц на CPU с выводом результата и статистики
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use lilib::{files, Element, Matrix, Random};
use prettytable::{row, Table};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_ROWS: usize = 4;
const DEFAULT_INNER: usize = 3;
const DEFAULT_COLS: usize = 4;
const DEFAULT_MIN: f64 = 0.0;
const DEFAULT_MAX: f64 = 9.0;

/// Тип элементов матриц
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum Kind {
    Int,
    Double,
    Float,
}

#[derive(Debug, Parser)]
#[command(about = "Умножение двух случайно заполненных матриц")]
struct Args {
    /// Тип элементов
    #[arg(long, value_enum, default_value_t = Kind::Int)]
    kind: Kind,
    /// Число строк матрицы A
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,
    /// Число столбцов A и строк B
    #[arg(long, default_value_t = DEFAULT_INNER)]
    inner: usize,
    /// Число столбцов матрицы B
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,
    /// Нижняя граница случайных значений
    #[arg(long, default_value_t = DEFAULT_MIN, allow_negative_numbers = true)]
    min: f64,
    /// Верхняя граница случайных значений
    #[arg(long, default_value_t = DEFAULT_MAX, allow_negative_numbers = true)]
    max: f64,
    /// Зерно генератора для воспроизводимых запусков
    #[arg(long)]
    seed: Option<u64>,
    /// Табличный вывод вместо простого
    #[arg(long)]
    pretty: bool,
    /// Файл, в который записывается результат
    #[arg(long)]
    output: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn show<T: Element>(title: &str, m: &Matrix<T>, pretty: bool) {
    println!("\n{} ({}x{}):", title, m.rows(), m.cols());
    if pretty {
        m.pprint();
    } else {
        m.print();
    }
}

fn run<T: Element>(args: &Args, min: T, max: T) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => Random::seeded(seed),
        None => Random::from_entropy(),
    };

    println!("Подготовка данных для умножения матриц...");
    let mut a = Matrix::<T>::alloc(args.rows, args.inner).context("Не удалось выделить матрицу A")?;
    let mut b = Matrix::<T>::alloc(args.inner, args.cols).context("Не удалось выделить матрицу B")?;
    a.fill_random(&mut rng, min, max)
        .context("Некорректный диапазон случайных значений")?;
    b.fill_random(&mut rng, min, max)
        .context("Некорректный диапазон случайных значений")?;

    show("Входная матрица A", &a, args.pretty);
    show("Входная матрица B", &b, args.pretty);

    println!("\nЗапуск вычислений на CPU...");
    let start_time = Instant::now();
    let c = a.multiply(&b).context("Не удалось перемножить матрицы")?;
    let duration = start_time.elapsed();
    info!(?duration, "multiplication finished");

    show("Результирующая матрица C", &c, args.pretty);

    if let Some(path) = &args.output {
        files::write(path, &c.render_plain())?;
        println!("\nРезультат записан в {}", path.display());
    }

    let mut stats_table = Table::new();
    stats_table.add_row(row!["Параметр", "Значение"]);
    stats_table.add_row(row!["Тип элементов", format!("{:?}", args.kind)]);
    stats_table.add_row(row!["Размер A", format!("{}x{}", a.rows(), a.cols())]);
    stats_table.add_row(row!["Размер B", format!("{}x{}", b.rows(), b.cols())]);
    stats_table.add_row(row!["Размер C", format!("{}x{}", c.rows(), c.cols())]);
    stats_table.add_row(row!["Время умножения", format!("{:?}", duration)]);

    println!("\nИтоговая статистика:");
    stats_table.printstd();

    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    println!("Умножение матриц {}x{} и {}x{}", args.rows, args.inner, args.inner, args.cols);

    match args.kind {
        Kind::Int => {
            if args.min.fract() != 0.0 || args.max.fract() != 0.0 {
                anyhow::bail!("Для целых матриц границы должны быть целыми");
            }
            let min = i32::try_from(args.min as i64).context("Нижняя граница вне диапазона i32")?;
            let max = i32::try_from(args.max as i64).context("Верхняя граница вне диапазона i32")?;
            run::<i32>(&args, min, max)
        }
        Kind::Double => run::<f64>(&args, args.min, args.max),
        Kind::Float => run::<f32>(&args, args.min as f32, args.max as f32),
    }
}
