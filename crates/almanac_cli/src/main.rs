use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use almanac_ephem::{
    illuminated_fraction_jd, lunar_ecliptic_jd, lunar_horizontal_parallax_deg, lunar_position_jd,
    moon_phase_angle_deg, solar_ecliptic_jd, solar_position_jd,
};
use almanac_frames::{apparent_sidereal_time_deg, nutation_jd};
use almanac_riseset::{
    GeoLocation, Horizon, MOON_MEAN_HORIZON_DEG, RiseSet, RiseSetConfig, RiseTransitSet,
    moon_events, moonrise_moonset_with_parallax, sun_events, sun_events_with_config,
};
use almanac_time::{
    Calendar, CalendarDate, decimal_year, deg_to_dms, deg_to_hms, delta_t_seconds, dms_to_deg,
    hms_to_deg, mean_sidereal_time_deg, normalize_360,
};

#[derive(Parser)]
#[command(name = "almanac", about = "Sun and Moon almanac calculations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Julian Day of a calendar date
    Jd {
        /// Date as YYYY-MM-DD[.frac]
        date: String,
        /// Interpret the date in the Julian calendar
        #[arg(long)]
        julian: bool,
    },
    /// Calendar date of a Julian Day
    Calendar {
        /// Julian Day
        jd: f64,
        /// Express the result in the Julian calendar
        #[arg(long)]
        julian: bool,
    },
    /// Degrees to hours/minutes/seconds, or `H M S` back to degrees
    Hms {
        /// One value (degrees) or three values (hours minutes seconds)
        #[arg(num_args = 1..=3, required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// Degrees to degrees/arc-minutes/arc-seconds, or `D M S` back to degrees
    Dms {
        /// One value (degrees) or three values (degrees minutes seconds)
        #[arg(num_args = 1..=3, required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// Greenwich mean and apparent sidereal time (UT)
    Sidereal {
        /// Date as YYYY-MM-DD[.frac]
        date: String,
        /// East longitude in degrees for local sidereal time
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        lon: f64,
    },
    /// Nutation in longitude and obliquity, mean and true obliquity
    Nutation {
        /// Date as YYYY-MM-DD[.frac] (TD)
        date: String,
    },
    /// Apparent geocentric position of the Sun
    Sun {
        /// Date as YYYY-MM-DD[.frac] (TD)
        date: String,
    },
    /// Apparent geocentric position of the Moon
    Moon {
        /// Date as YYYY-MM-DD[.frac] (TD)
        date: String,
    },
    /// Illuminated fraction and phase angle of the Moon
    Phase {
        /// Date as YYYY-MM-DD[.frac] (TD)
        date: String,
    },
    /// Sunrise, solar transit and sunset (UT)
    Sunrise {
        /// Date as YYYY-MM-DD
        date: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Altitude above sea level in meters (used with --dip)
        #[arg(long, default_value = "0")]
        alt: f64,
        /// Twilight horizon: standard, civil, nautical or astronomical
        #[arg(long, conflicts_with = "horizon")]
        twilight: Option<Horizon>,
        /// Custom horizon altitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        horizon: Option<f64>,
        /// Lower the standard horizon by the geometric dip for --alt
        #[arg(long, conflicts_with_all = ["twilight", "horizon"])]
        dip: bool,
        /// Fixed TT - UT in seconds for the standard horizon
        #[arg(long, conflicts_with_all = ["twilight", "horizon"])]
        delta_t: Option<f64>,
    },
    /// Moonrise, lunar transit and moonset (UT)
    Moonrise {
        /// Date as YYYY-MM-DD
        date: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Altitude above sea level in meters (used with --dip)
        #[arg(long, default_value = "0")]
        alt: f64,
        /// Use the day's parallax instead of the mean lunar horizon
        /// (implied by --dip and --delta-t)
        #[arg(long)]
        parallax: bool,
        /// Lower the horizon by the geometric dip for --alt
        #[arg(long)]
        dip: bool,
        /// Fixed TT - UT in seconds instead of the model
        #[arg(long)]
        delta_t: Option<f64>,
    },
    /// Estimated TT - UT for a date
    DeltaT {
        /// Date as YYYY-MM-DD[.frac]
        date: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("ALMANAC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn parse_date(s: &str, julian: bool) -> CalendarDate {
    let date: CalendarDate = s.parse().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    if julian {
        CalendarDate::julian(date.year, date.month, date.day)
    } else {
        date
    }
}

fn parse_location(lat: f64, lon: f64, alt: f64) -> GeoLocation {
    GeoLocation::try_new(lat, lon, alt).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn calendar_flag(julian: bool) -> Calendar {
    if julian { Calendar::Julian } else { Calendar::Gregorian }
}

/// Hours UT as `HHhMMmSS.SSSs`, or `none` when the event does not occur.
fn fmt_hours(hours: f64) -> String {
    if hours.is_nan() {
        "none".to_string()
    } else {
        deg_to_hms(hours * 15.0).to_string()
    }
}

fn print_events(label: &str, events: &RiseTransitSet) {
    println!("{label} for the UT day:");
    println!("  rise     {:>14}  ({:.6} d)", fmt_hours(events.rise_hours()), events.rise);
    println!("  transit  {:>14}  ({:.6} d)", fmt_hours(events.transit_hours()), events.transit);
    println!("  set      {:>14}  ({:.6} d)", fmt_hours(events.set_hours()), events.set);
    if events.is_circumpolar_or_never_rises() {
        println!("  body does not cross the horizon on this day");
    }
}

fn print_rise_set(label: &str, rs: &RiseSet) {
    println!("{label} for the UT day:");
    println!("  rise     {:>14}", fmt_hours(rs.rise));
    println!("  set      {:>14}", fmt_hours(rs.set));
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Jd { date, julian } => {
            let d = parse_date(&date, julian);
            println!("{:.6}", d.julian_day());
        }

        Commands::Calendar { jd, julian } => {
            let d = CalendarDate::from_jd(jd, calendar_flag(julian));
            println!("{d} ({:?})", d.calendar);
        }

        Commands::Hms { values } => match values.as_slice() {
            [deg] => println!("{}", deg_to_hms(*deg)),
            [h, m, s] => println!("{:.9}", hms_to_deg(*h, *m, *s)),
            _ => {
                eprintln!("Error: expected one value (degrees) or three (h m s)");
                std::process::exit(1);
            }
        },

        Commands::Dms { values } => match values.as_slice() {
            [deg] => println!("{}", deg_to_dms(*deg)),
            [d, m, s] => println!("{:.9}", dms_to_deg(*d, *m, *s)),
            _ => {
                eprintln!("Error: expected one value (degrees) or three (d m s)");
                std::process::exit(1);
            }
        },

        Commands::Sidereal { date, lon } => {
            let jd = parse_date(&date, false).julian_day();
            let mean = mean_sidereal_time_deg(jd);
            let apparent = apparent_sidereal_time_deg(jd);
            println!("GMST  {:>12.6}°  {}", mean, deg_to_hms(mean));
            println!("GAST  {:>12.6}°  {}", apparent, deg_to_hms(apparent));
            if lon != 0.0 {
                let local = normalize_360(apparent + lon);
                println!("LAST  {:>12.6}°  {}", local, deg_to_hms(local));
            }
        }

        Commands::Nutation { date } => {
            let n = nutation_jd(parse_date(&date, false).julian_day());
            println!("Δψ  {:>12.3}″", n.longitude_deg * 3600.0);
            println!("Δε  {:>12.3}″", n.obliquity_deg * 3600.0);
            println!("ε0  {}", deg_to_dms(n.mean_obliquity_deg));
            println!("ε   {}", deg_to_dms(n.true_obliquity_deg()));
        }

        Commands::Sun { date } => {
            let jd = parse_date(&date, false).julian_day();
            let ecl = solar_ecliptic_jd(jd);
            let pos = solar_position_jd(jd).normalized();
            println!("λ  {:>12.6}°", ecl.longitude_deg);
            println!("α  {:>12.6}°  {}", pos.right_ascension_deg, deg_to_hms(pos.right_ascension_deg));
            println!("δ  {:>12.6}°  {}", pos.declination_deg, deg_to_dms(pos.declination_deg));
            println!("R  {:>12.6} AU", pos.distance);
        }

        Commands::Moon { date } => {
            let jd = parse_date(&date, false).julian_day();
            let ecl = lunar_ecliptic_jd(jd);
            let pos = lunar_position_jd(jd);
            println!("λ  {:>12.6}°", ecl.longitude_deg);
            println!("β  {:>12.6}°", ecl.latitude_deg);
            println!("α  {:>12.6}°  {}", pos.right_ascension_deg, deg_to_hms(pos.right_ascension_deg));
            println!("δ  {:>12.6}°  {}", pos.declination_deg, deg_to_dms(pos.declination_deg));
            println!("Δ  {:>12.1} km", pos.distance);
            println!("π  {:>12.6}°", lunar_horizontal_parallax_deg(pos.distance));
        }

        Commands::Phase { date } => {
            let jd = parse_date(&date, false).julian_day();
            println!("illuminated fraction  {:.4}", illuminated_fraction_jd(jd));
            println!("phase angle           {:.3}°", moon_phase_angle_deg(jd));
        }

        Commands::Sunrise {
            date,
            lat,
            lon,
            alt,
            twilight,
            horizon,
            dip,
            delta_t,
        } => {
            let day = parse_date(&date, false);
            let location = parse_location(lat, lon, alt);
            let events = match (twilight, horizon) {
                (Some(t), _) => sun_events(&location, &day, t.altitude_deg()),
                (None, Some(h0)) => sun_events(&location, &day, h0),
                (None, None) => {
                    let config = RiseSetConfig {
                        altitude_correction: dip,
                        delta_t_override_s: delta_t,
                        ..RiseSetConfig::default()
                    };
                    debug!(?config, "sunrise with config");
                    sun_events_with_config(&location, &day, &config)
                }
            };
            println!("{day} at {lat:.4}°N, {lon:.4}°E");
            print_events("Sun", &events);
        }

        Commands::Moonrise {
            date,
            lat,
            lon,
            alt,
            parallax,
            dip,
            delta_t,
        } => {
            let day = parse_date(&date, false);
            let location = parse_location(lat, lon, alt);
            println!("{day} at {lat:.4}°N, {lon:.4}°E");
            if parallax || dip || delta_t.is_some() {
                let config = RiseSetConfig {
                    altitude_correction: dip,
                    delta_t_override_s: delta_t,
                    ..RiseSetConfig::default()
                };
                let rs = moonrise_moonset_with_parallax(&location, &day, &config);
                print_rise_set("Moon", &rs);
            } else {
                let events = moon_events(&location, &day, MOON_MEAN_HORIZON_DEG);
                print_events("Moon", &events);
            }
        }

        Commands::DeltaT { date } => {
            let jd = parse_date(&date, false).julian_day();
            println!(
                "ΔT = {:.2} s  (year {:.3})",
                delta_t_seconds(jd),
                decimal_year(jd)
            );
        }
    }
}
