use clap::{Parser, Subcommand, ValueEnum};

use blackbody::{Rgb, kelvin_to_rgb, kelvin_to_rgb_fast, kelvin_to_rgb_helland};

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum MethodArg {
    /// Logarithmic curve fit
    Curve,
    /// Lookup tables with linear interpolation
    Fast,
    /// Tanner Helland's fit
    Helland,
}

impl MethodArg {
    pub fn convert(self, kelvin: u16) -> Rgb {
        match self {
            MethodArg::Curve => kelvin_to_rgb(kelvin),
            MethodArg::Fast => kelvin_to_rgb_fast(kelvin),
            MethodArg::Helland => kelvin_to_rgb_helland(kelvin),
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "blackbody",
    version,
    about = "Convert between color temperature (K) and RGB"
)]
pub struct Opts {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the RGB color of a temperature as RRGGBB
    Rgb {
        /// Color temperature (K)
        kelvin: u16,

        #[arg(short = 'm', long = "method", value_enum, default_value_t = MethodArg::Curve)]
        method: MethodArg,

        /// Print a JSON object instead of hex
        #[arg(long)]
        json: bool,
    },

    /// Print the closest temperature of a RRGGBB color
    Kelvin {
        /// Color as RRGGBB or #RRGGBB
        color: String,
    },

    /// Print a Kelvin/RRGGBB listing
    Table {
        /// First temperature (K)
        #[arg(short = 'f', long = "from", default_value_t = 1000)]
        from: u16,

        /// Last temperature, inclusive (K)
        #[arg(short = 't', long = "to", default_value_t = 9000)]
        to: u16,

        /// Step between rows (K)
        #[arg(short = 's', long = "step", default_value_t = 500)]
        step: u16,

        #[arg(short = 'm', long = "method", value_enum, default_value_t = MethodArg::Curve)]
        method: MethodArg,

        /// Print a JSON array instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print a gamma ramp tinted to a temperature, as JSON
    Ramp {
        /// Color temperature (K)
        kelvin: u16,

        /// Entries per channel
        #[arg(short = 'n', long = "size", default_value_t = 256)]
        size: usize,

        /// Gamma exponent
        #[arg(short = 'g', long = "gamma", default_value_t = 1.0)]
        gamma: f64,
    },
}
