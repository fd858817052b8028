use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{nlq, query};
use crate::db::pool::DbPool;
use crate::db::queries::search_events;
use crate::errors::{AppError, AppResult};
use crate::models::event_type::EventType;
use crate::models::file_event::FileEvent;
use crate::models::filter::EventFilter;
use crate::models::settings::Settings;
use crate::utils::date::parse_bound;

/// Handle the `search` command: explicit flags merged with the translated
/// natural-language phrase, explicit fields taking precedence.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Search {
        keyword,
        from,
        to,
        ext,
        types,
        nlq: phrase,
    } = cmd
    {
        let explicit = EventFilter {
            keyword: keyword.clone().unwrap_or_default(),
            start: from.as_deref().map(|s| parse_bound(s, false)).transpose()?,
            end: to.as_deref().map(|s| parse_bound(s, true)).transpose()?,
            event_types: parse_types(types.as_deref())?,
            extensions: ext
                .as_deref()
                .map(|raw| {
                    Settings::split_list(raw)
                        .iter()
                        .map(|e| normalize_ext(e))
                        .collect()
                })
                .unwrap_or_default(),
        };

        let translated = phrase
            .as_deref()
            .map(nlq::translate)
            .unwrap_or_default();
        let filter = query::merge_filters(explicit, translated);

        let pool = DbPool::new(&cfg.database)?;
        let events = search_events(&pool.conn, &filter)?;

        if events.is_empty() {
            println!("No events found");
            return Ok(());
        }

        println!("Found {} event(s):", events.len());
        for ev in &events {
            print_event(ev);
        }
    }
    Ok(())
}

fn parse_types(raw: Option<&str>) -> AppResult<Vec<EventType>> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    let mut out = Vec::new();
    for tok in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let et = EventType::from_db_str(&tok.to_lowercase())
            .ok_or_else(|| AppError::InvalidEventType(tok.to_string()))?;
        if !out.contains(&et) {
            out.push(et);
        }
    }
    Ok(out)
}

fn normalize_ext(e: &str) -> String {
    let e = e.trim().to_lowercase();
    if e.starts_with('.') { e } else { format!(".{e}") }
}

fn print_event(ev: &FileEvent) {
    let dest = ev.dest_path.as_deref().unwrap_or("-");
    println!(
        "{:>6} | {} | {:<8} | {:<6} | {} | {} -> {}",
        ev.id,
        ev.time_str(),
        ev.event_type.to_db_str(),
        ev.ext,
        ev.file_name,
        ev.src_path,
        dest,
    );
}
