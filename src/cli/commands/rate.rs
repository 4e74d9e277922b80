use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::assessment::RatingResult;
use crate::ui::messages;
use crate::utils::formatting::{format_db, format_hours, pad_right};
use crate::utils::time::{format_datetime, parse_required_datetime};
use chrono::NaiveDateTime;

/// Run the prototype calculator: rating level from a measured L_Aeq.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rate {
        laeq,
        start,
        end,
        period,
        impulse,
        tone,
        json,
    } = cmd
    {
        let start_dt = parse_required_datetime(start)?;
        let end_dt = parse_required_datetime(end)?;

        if end_dt <= start_dt {
            return Err(AppError::InvalidTimeRange(
                "the end time must be later than the start time".to_string(),
            ));
        }

        let result = Core::rating_level(*laeq, start_dt, end_dt, *period, *impulse, *tone)?;

        if *json {
            let out = serde_json::to_string_pretty(&result)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
        } else {
            print_result(start_dt, end_dt, &result, cfg);
        }
    }

    Ok(())
}

fn print_result(start: NaiveDateTime, end: NaiveDateTime, r: &RatingResult, cfg: &Config) {
    let d = cfg.decimals;

    messages::result_header("Rating level from measured average level", cfg.use_colors);

    println!("   {} {}", pad_right("Start:", 28), format_datetime(start));
    println!("   {} {}", pad_right("End:", 28), format_datetime(end));
    println!(
        "   {} {} h",
        pad_right("Duration (T_E):", 28),
        format_hours(r.duration_hours, d)
    );
    println!(
        "   {} {:.0} h",
        pad_right("Assessment period (T_R):", 28),
        r.assessment_period_hours
    );
    println!(
        "   {} {} dB(A)",
        pad_right("Measured level (L_Aeq):", 28),
        format_db(r.measured_level, d)
    );
    println!(
        "   {} {} dB",
        pad_right("Tone surcharge (k_T):", 28),
        format_db(r.tone_surcharge, d)
    );
    println!(
        "   {} {} dB",
        pad_right("Impulse surcharge (k_I):", 28),
        format_db(r.impulse_surcharge, d)
    );
    println!(
        "   {} {} dB(A)",
        pad_right("Rating level (L_r):", 28),
        format_db(r.rating_level, d)
    );

    if cfg.show_formula_note {
        println!("   (Based on a simplified formula; informational only.)");
    }
}
