use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::Parser;

/// Writes synthetic `day.csv` and `hour.csv` files with the raw
/// bike-sharing schema. Daily counts are the sum of the hourly counts.
#[derive(Parser, Debug)]
#[command(name = "generate_sample")]
struct Args {
    /// Output directory
    #[arg(default_value = "data")]
    out_dir: PathBuf,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Conditions shared by every hour of one day.
struct Day {
    date: NaiveDate,
    season: u8,
    year: u8,
    month: u32,
    holiday: u8,
    weekday: u32,
    workingday: u8,
    weathersit: u8,
    temp: f64,
    atemp: f64,
    hum: f64,
    windspeed: f64,
}

/// Season code by astronomical quarter: 1 spring ... 4 winter.
fn season_code(date: NaiveDate) -> u8 {
    match (date.month(), date.day()) {
        (m, d) if m < 3 || (m == 3 && d < 21) => 1,
        (m, d) if m < 6 || (m == 6 && d < 21) => 2,
        (m, d) if m < 9 || (m == 9 && d < 23) => 3,
        (m, d) if m < 12 || (m == 12 && d < 21) => 4,
        _ => 1,
    }
}

/// Relative demand for each hour of a working day and a weekend day.
fn hourly_shape(hour: u32, working: bool) -> f64 {
    let h = hour as f64;
    let bump = |centre: f64, width: f64| (-(h - centre).powi(2) / (2.0 * width * width)).exp();
    if working {
        0.05 + bump(8.0, 1.0) + 1.1 * bump(17.5, 1.5) + 0.3 * bump(12.5, 2.0)
    } else {
        0.05 + 0.9 * bump(14.0, 3.5)
    }
}

const HOLIDAYS: &[(u32, u32)] = &[(1, 1), (7, 4), (11, 11), (12, 25)];

fn make_day(date: NaiveDate, start_year: i32, rng: &mut SimpleRng) -> Day {
    let weekday = date.weekday().num_days_from_sunday();
    let holiday = u8::from(HOLIDAYS.contains(&(date.month(), date.day())));
    let workingday = u8::from(holiday == 0 && (1..=5).contains(&weekday));

    // Warmest in mid-July.
    let phase = (date.ordinal() as f64 - 196.0) / 365.0 * 2.0 * std::f64::consts::PI;
    let temp = (0.5 + 0.3 * phase.cos() + rng.gauss(0.0, 0.05)).clamp(0.05, 0.95);
    let hum = (0.62 + rng.gauss(0.0, 0.14)).clamp(0.15, 0.97);
    let weathersit = match rng.next_f64() {
        p if p < 0.63 => 1,
        p if p < 0.95 => 2,
        p if p < 0.995 => 3,
        _ => 4,
    };

    Day {
        date,
        season: season_code(date),
        year: (date.year() - start_year) as u8,
        month: date.month(),
        holiday,
        weekday,
        workingday,
        weathersit,
        temp,
        atemp: (temp * 0.95 + rng.gauss(0.0, 0.02)).clamp(0.0, 1.0),
        hum,
        windspeed: (0.19 + rng.gauss(0.0, 0.07)).clamp(0.02, 0.5),
    }
}

/// Casual and registered riders for one hour.
fn riders(day: &Day, hour: u32, rng: &mut SimpleRng) -> (u64, u64) {
    let growth = 1.0 + 0.6 * day.year as f64;
    let weather = match day.weathersit {
        1 => 1.0,
        2 => 0.8,
        3 => 0.35,
        _ => 0.1,
    };
    let warmth = 0.3 + 1.4 * day.temp;
    let scale = 180.0 * growth * weather * warmth * hourly_shape(hour, day.workingday == 1);

    let casual_share = if day.workingday == 1 { 0.12 } else { 0.35 };
    let noisy = |mean: f64, rng: &mut SimpleRng| rng.gauss(mean, mean * 0.15).max(0.0).round() as u64;
    let casual = noisy(scale * casual_share, &mut *rng);
    let registered = noisy(scale * (1.0 - casual_share), &mut *rng);
    (casual, registered)
}

fn write_tables(out_dir: &Path, seed: u64) -> Result<(usize, usize)> {
    let mut rng = SimpleRng::new(seed);
    let start = NaiveDate::from_ymd_opt(2011, 1, 1).context("start date")?;
    let end = NaiveDate::from_ymd_opt(2012, 12, 31).context("end date")?;

    let day_path = out_dir.join("day.csv");
    let hour_path = out_dir.join("hour.csv");
    let mut day_csv = csv::Writer::from_writer(
        File::create(&day_path).with_context(|| format!("creating {}", day_path.display()))?,
    );
    let mut hour_csv = csv::Writer::from_writer(
        File::create(&hour_path).with_context(|| format!("creating {}", hour_path.display()))?,
    );

    day_csv.write_record([
        "instant", "dteday", "season", "yr", "mnth", "holiday", "weekday", "workingday",
        "weathersit", "temp", "atemp", "hum", "windspeed", "casual", "registered", "cnt",
    ])?;
    hour_csv.write_record([
        "instant", "dteday", "season", "yr", "mnth", "hr", "holiday", "weekday", "workingday",
        "weathersit", "temp", "atemp", "hum", "windspeed", "casual", "registered", "cnt",
    ])?;

    let mut day_instant = 0;
    let mut hour_instant = 0;
    for date in start.iter_days().take_while(|d| *d <= end) {
        let day = make_day(date, start.year(), &mut rng);
        let (mut day_casual, mut day_registered) = (0, 0);

        for hour in 0..24 {
            let (casual, registered) = riders(&day, hour, &mut rng);
            day_casual += casual;
            day_registered += registered;
            hour_instant += 1;
            hour_csv.write_record([
                hour_instant.to_string(),
                day.date.format("%Y-%m-%d").to_string(),
                day.season.to_string(),
                day.year.to_string(),
                day.month.to_string(),
                hour.to_string(),
                day.holiday.to_string(),
                day.weekday.to_string(),
                day.workingday.to_string(),
                day.weathersit.to_string(),
                format!("{:.2}", day.temp),
                format!("{:.4}", day.atemp),
                format!("{:.2}", day.hum),
                format!("{:.4}", day.windspeed),
                casual.to_string(),
                registered.to_string(),
                (casual + registered).to_string(),
            ])?;
        }

        day_instant += 1;
        day_csv.write_record([
            day_instant.to_string(),
            day.date.format("%Y-%m-%d").to_string(),
            day.season.to_string(),
            day.year.to_string(),
            day.month.to_string(),
            day.holiday.to_string(),
            day.weekday.to_string(),
            day.workingday.to_string(),
            day.weathersit.to_string(),
            format!("{:.6}", day.temp),
            format!("{:.6}", day.atemp),
            format!("{:.6}", day.hum),
            format!("{:.6}", day.windspeed),
            day_casual.to_string(),
            day_registered.to_string(),
            (day_casual + day_registered).to_string(),
        ])?;
    }

    day_csv.flush()?;
    hour_csv.flush()?;
    Ok((day_instant, hour_instant))
}

fn main() -> Result<()> {
    let args = Args::parse();
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let (days, hours) = write_tables(&args.out_dir, args.seed)?;
    println!(
        "Wrote {days} daily and {hours} hourly rows to {}",
        args.out_dir.display()
    );
    Ok(())
}
