mod cli;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use blackbody::{Rgb, fill_gamma_ramp, kelvin_to_rgb, rgb_to_kelvin};
use cli::{Command, MethodArg, Opts};

#[derive(Serialize)]
struct Row {
    kelvin: u16,
    hex: String,
    #[serde(flatten)]
    rgb: Rgb,
}

impl Row {
    fn new(kelvin: u16, rgb: Rgb) -> Self {
        Self {
            kelvin,
            hex: rgb.to_string(),
            rgb,
        }
    }
}

#[derive(Serialize)]
struct Ramp {
    kelvin: u16,
    white_point: Rgb,
    gamma: f64,
    red: Vec<u16>,
    green: Vec<u16>,
    blue: Vec<u16>,
}

fn table_rows(from: u16, to: u16, step: u16, method: MethodArg) -> Result<Vec<Row>> {
    if step == 0 {
        return Err(anyhow!("--step must be > 0"));
    }
    if from > to {
        return Err(anyhow!("--from must be <= --to"));
    }
    Ok((from..=to)
        .step_by(usize::from(step))
        .map(|k| Row::new(k, method.convert(k)))
        .collect())
}

/// Largest ramp a gamma-control protocol hands out in practice.
const MAX_RAMP_SIZE: usize = u16::MAX as usize + 1;

fn ramp(kelvin: u16, size: usize, gamma: f64) -> Result<Ramp> {
    if size < 2 {
        return Err(anyhow!("--size must be >= 2"));
    }
    if size > MAX_RAMP_SIZE {
        return Err(anyhow!("--size must be <= {MAX_RAMP_SIZE}"));
    }
    if !(gamma.is_finite() && gamma > 0.0) {
        return Err(anyhow!("--gamma must be a positive number"));
    }
    let white_point = kelvin_to_rgb(kelvin);
    let mut buf = vec![0u16; size * 3];
    fill_gamma_ramp(&mut buf, size, white_point, gamma);
    let blue = buf.split_off(2 * size);
    let green = buf.split_off(size);
    Ok(Ramp {
        kelvin,
        white_point,
        gamma,
        red: buf,
        green,
        blue,
    })
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "blackbody=warn".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let opts = Opts::parse();
    debug!(command = ?opts.command, "starting");

    match opts.command {
        Command::Rgb {
            kelvin,
            method,
            json,
        } => {
            let rgb = method.convert(kelvin);
            if json {
                let out = serde_json::to_string(&Row::new(kelvin, rgb))
                    .context("serialize color")?;
                println!("{out}");
            } else {
                println!("{rgb}");
            }
        }
        Command::Kelvin { color } => {
            let rgb: Rgb = color
                .parse()
                .with_context(|| format!("parse color {color:?}"))?;
            println!("{}", rgb_to_kelvin(rgb.r, rgb.g, rgb.b));
        }
        Command::Table {
            from,
            to,
            step,
            method,
            json,
        } => {
            let rows = table_rows(from, to, step, method)?;
            if json {
                let out = serde_json::to_string_pretty(&rows).context("serialize table")?;
                println!("{out}");
            } else {
                println!("Kelvin RRGGBB");
                for row in rows {
                    println!("{:<6} {}", row.kelvin, row.hex);
                }
            }
        }
        Command::Ramp {
            kelvin,
            size,
            gamma,
        } => {
            let ramp = ramp(kelvin, size, gamma)?;
            let out = serde_json::to_string(&ramp).context("serialize ramp")?;
            println!("{out}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_listing() {
        let rows = table_rows(1000, 9000, 500, MethodArg::Curve).unwrap();
        assert_eq!(rows.len(), 17);
        assert_eq!(rows[0].hex, "FF3B00");
        assert_eq!(rows[16].kelvin, 9000);
        assert_eq!(rows[16].hex, "D6E2FF");
    }

    #[test]
    fn table_rejects_bad_ranges() {
        assert!(table_rows(1000, 2000, 0, MethodArg::Fast).is_err());
        assert!(table_rows(3000, 2000, 100, MethodArg::Fast).is_err());
        assert_eq!(table_rows(2000, 2000, 100, MethodArg::Fast).unwrap().len(), 1);
    }

    #[test]
    fn row_json_shape() {
        let json = serde_json::to_string(&Row::new(6500, Rgb::WHITE)).unwrap();
        assert_eq!(json, r#"{"kelvin":6500,"hex":"FFFFFF","r":255,"g":255,"b":255}"#);
    }

    #[test]
    fn ramp_splits_channels() {
        let r = ramp(6500, 16, 1.0).unwrap();
        assert_eq!(r.white_point, Rgb::WHITE);
        assert_eq!((r.red.len(), r.green.len(), r.blue.len()), (16, 16, 16));
        assert_eq!(r.red, r.blue);
        assert_eq!(r.blue[15], u16::MAX);

        let warm = ramp(1000, 16, 1.0).unwrap();
        assert!(warm.blue.iter().all(|&v| v == 0));
    }

    #[test]
    fn ramp_rejects_bad_args() {
        assert!(ramp(6500, 1, 1.0).is_err());
        assert!(ramp(6500, usize::MAX, 1.0).is_err());
        assert!(ramp(6500, MAX_RAMP_SIZE + 1, 1.0).is_err());
        assert!(ramp(6500, MAX_RAMP_SIZE, 1.0).is_ok());
        assert!(ramp(6500, 256, 0.0).is_err());
        assert!(ramp(6500, 256, f64::NAN).is_err());
    }

    #[test]
    fn cli_parses() {
        let opts = Opts::try_parse_from(["blackbody", "rgb", "2700", "-m", "fast"]).unwrap();
        assert!(matches!(
            opts.command,
            Command::Rgb {
                kelvin: 2700,
                method: MethodArg::Fast,
                json: false
            }
        ));
        assert!(Opts::try_parse_from(["blackbody", "rgb", "70000"]).is_err());
    }
}
