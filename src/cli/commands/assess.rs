use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::assessment::AssessmentResult;
use crate::models::event::EventInput;
use crate::models::event_type::DisturbanceClass;
use crate::models::zoning::Zoning;
use crate::ui::messages;
use crate::utils::formatting::{format_db, format_hours, pad_right};
use crate::utils::time::parse_required_datetime;

/// Run the extended calculator and render the breakdown.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Assess {
        event_type,
        zone,
        start,
        end,
        impulse,
        tone,
        json,
    } = cmd
    {
        //
        // 1. Parse disturbance class and zoning
        //
        let class = DisturbanceClass::from_code(event_type).ok_or_else(|| {
            AppError::InvalidEventType(format!(
                "'{}'. Use n (not disturbing), s (slightly disturbing) or d (disturbing)",
                event_type
            ))
        })?;

        let zoning = Zoning::from_code(zone).ok_or_else(|| {
            AppError::InvalidZoning(format!(
                "'{}'. Use one of GI, GE, MK, WA, WR, KUR",
                zone
            ))
        })?;

        //
        // 2. Parse timestamps and enforce end > start up front
        //
        let start_dt = parse_required_datetime(start)?;
        let end_dt = parse_required_datetime(end)?;

        if end_dt <= start_dt {
            return Err(AppError::InvalidTimeRange(
                "the end time must be later than the start time".to_string(),
            ));
        }

        //
        // 3. Compute
        //
        let input = EventInput::new(class, zoning, start_dt, end_dt, *impulse, *tone);
        let result = Core::assess(&input)?;

        //
        // 4. Render
        //
        if *json {
            let out = serde_json::to_string_pretty(&result)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
        } else {
            print_result(&input, &result, cfg);
        }
    }

    Ok(())
}

fn print_result(input: &EventInput, r: &AssessmentResult, cfg: &Config) {
    let d = cfg.decimals;

    messages::result_header("Permissible levels for a temporary event", cfg.use_colors);

    println!(
        "   {} {} ({})",
        pad_right("Site:", 28),
        input.zoning.label(),
        input.zoning.as_code()
    );
    println!("   {} {}", pad_right("Event class:", 28), input.class.label());
    println!("   {} {}", pad_right("Start:", 28), input.start_str());
    println!("   {} {}", pad_right("End:", 28), input.end_str());
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
        pad_right("Base level:", 28),
        format_db(r.allowed_level, d)
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
        "   {} {} dB",
        pad_right("Rest-time surcharge (k_R):", 28),
        format_db(r.rest_time_surcharge, d)
    );
    println!(
        "   {} {} dB",
        pad_right("Duration surcharge:", 28),
        format_db(r.duration_surcharge, d)
    );
    println!(
        "   {} {} dB(A)",
        pad_right("Allowed average (L_Aeq):", 28),
        format_db(r.allowed_average_level, d)
    );
    println!(
        "   {} {} dB(A)",
        pad_right("Allowed peak:", 28),
        format_db(r.allowed_peak_level, d)
    );

    if cfg.show_formula_note {
        println!("   (Based on a simplified formula; informational only.)");
    }
}
