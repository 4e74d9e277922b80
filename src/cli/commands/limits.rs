use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::limits;
use crate::errors::{AppError, AppResult};
use crate::models::event_type::DisturbanceClass;
use crate::models::zoning::Zoning;
use crate::ui::messages;
use crate::utils::formatting::{bold, pad_left, pad_right};

/// Print the immission threshold table, whole or for one zoning.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Limits { zone } = cmd {
        let rows: Vec<Zoning> = match zone {
            Some(code) => {
                let z = Zoning::from_code(code).ok_or_else(|| {
                    AppError::InvalidZoning(format!(
                        "'{}'. Use one of GI, GE, MK, WA, WR, KUR",
                        code
                    ))
                })?;
                vec![z]
            }
            None => Zoning::ALL.to_vec(),
        };

        messages::result_header("Immission thresholds in dB(A)", cfg.use_colors);

        let header = format!(
            "   {} {} {} {}",
            pad_right("Zoning", 32),
            pad_left("not", 6),
            pad_left("slightly", 10),
            pad_left("disturbing", 12)
        );
        if cfg.use_colors {
            println!("{}", bold(&header));
        } else {
            println!("{}", header);
        }

        for z in rows {
            let label = format!("{} ({})", z.label(), z.as_code());
            print!("   {}", pad_right(&label, 32));
            for class in DisturbanceClass::ALL {
                let width = match class {
                    DisturbanceClass::NotDisturbing => 6,
                    DisturbanceClass::SlightlyDisturbing => 10,
                    DisturbanceClass::Disturbing => 12,
                };
                print!(" {}", pad_left(&format!("{:.0}", limits::allowed_level(z, class)), width));
            }
            println!();
        }

        println!("   Peak addend: +30 / +25 / +20 dB (not / slightly / disturbing)");
    }

    Ok(())
}
